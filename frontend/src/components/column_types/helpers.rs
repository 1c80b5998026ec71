//! Browser helpers for the column type editor.
//!
//! - **User Feedback**: blocking alerts for failures and a short-lived toast
//!   for successful operations.
//! - **Download**: turning the CSV bytes returned by the backend into a file
//!   the browser saves as `output.csv`.
//! - **Dirty Tracking**: mirroring the edited flag to `window.app_dirty` and
//!   asking for confirmation before the page is left with unsaved edits.
//! - **Texts**: the user-facing message for each `EditorError`.

use common::error::EditorError;
use js_sys::{Array, Reflect, Uint8Array};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{BeforeUnloadEvent, Blob, BlobPropertyBag, HtmlAnchorElement, HtmlElement, Url};

pub const MISSING_FILE_NOTICE: &str = "Please select a file before uploading.";
pub const UPLOAD_FAILED_NOTICE: &str = "File upload failed.";
pub const SAVE_FAILED_NOTICE: &str = "Error saving or downloading the file.";

const DIRTY_FLAG: &str = "app_dirty";

/// Text shown to the user when an operation is rejected or fails.
///
/// `upload` tells apart the two generic failure notices. `None` means the
/// error is not worth interrupting the user for (a click while busy).
pub fn notice_for(err: &EditorError, upload: bool) -> Option<String> {
    match err {
        EditorError::Busy => None,
        EditorError::MissingInput => Some(MISSING_FILE_NOTICE.to_string()),
        EditorError::NothingToSave => Some("There are no columns to save.".to_string()),
        EditorError::DuplicateColumn(name) => Some(format!(
            "The column name \"{name}\" is used more than once. Rename one of them before saving."
        )),
        EditorError::IndexOutOfRange { .. } | EditorError::UnknownType(_) => {
            Some(format!("Invalid edit: {err}."))
        }
        _ if upload => Some(UPLOAD_FAILED_NOTICE.to_string()),
        _ => Some(SAVE_FAILED_NOTICE.to_string()),
    }
}

pub fn upload_button_label(busy: bool) -> &'static str {
    if busy {
        "Uploading..."
    } else {
        "Upload"
    }
}

pub fn save_button_label(busy: bool) -> &'static str {
    if busy {
        "Processing..."
    } else {
        "Save Changes and Download"
    }
}

/// Row key for the editor table.
///
/// Includes the upload generation so a fresh response rebuilds every row
/// instead of patching selectors that still show the previous choice.
pub fn row_key(generation: u64, index: usize) -> String {
    format!("{generation}-{index}")
}

/// Console line for a file chooser that was dismissed without a choice.
pub fn kept_selection_message(previous: Option<&str>) -> String {
    match previous {
        Some(name) => format!("File chooser cancelled; {name} is still selected for upload"),
        None => "File chooser cancelled; no file selected".to_string(),
    }
}

/// Shows a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// The toast removes itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Offers `bytes` to the user as a file download named `file_name`.
///
/// Builds a blob, points a detached `<a download>` at its object URL and
/// clicks it. The URL is revoked a second later, once the browser has
/// started the download.
pub fn trigger_download(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), EditorError> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(download_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(download_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| EditorError::Download("no document available".to_string()))?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(download_error)?
        .unchecked_into();
    link.set_href(&url);
    link.set_download(file_name);
    link.click();

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(1000).await;
        Url::revoke_object_url(&url).ok();
    });
    Ok(())
}

fn download_error(err: JsValue) -> EditorError {
    EditorError::Download(format!("{err:?}"))
}

/// Sets the global `app_dirty` flag read by the `beforeunload` guard.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str(DIRTY_FLAG),
            &JsValue::from_bool(dirty),
        );
    }
}

/// Registers a `beforeunload` listener that asks for confirmation while
/// `window.app_dirty` is true. Call once at startup.
pub fn install_unload_guard() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let guard = Closure::<dyn FnMut(BeforeUnloadEvent)>::new(|event: BeforeUnloadEvent| {
        let dirty = web_sys::window()
            .and_then(|w| Reflect::get(&w, &JsValue::from_str(DIRTY_FLAG)).ok())
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        if dirty {
            event.prevent_default();
            event.set_return_value("You have unsaved column type changes.");
        }
    });
    if window
        .add_event_listener_with_callback("beforeunload", guard.as_ref().unchecked_ref())
        .is_ok()
    {
        // The listener lives as long as the page.
        guard.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_follow_the_failed_operation() {
        let err = EditorError::Status(503);
        assert_eq!(notice_for(&err, true).as_deref(), Some(UPLOAD_FAILED_NOTICE));
        assert_eq!(notice_for(&err, false).as_deref(), Some(SAVE_FAILED_NOTICE));
        assert_eq!(
            notice_for(&EditorError::Timeout(10), true).as_deref(),
            Some(UPLOAD_FAILED_NOTICE)
        );
    }

    #[test]
    fn local_rejections_have_their_own_notice() {
        assert_eq!(
            notice_for(&EditorError::MissingInput, true).as_deref(),
            Some(MISSING_FILE_NOTICE)
        );
        assert_eq!(notice_for(&EditorError::Busy, false), None);
        let duplicate = notice_for(&EditorError::DuplicateColumn("id".into()), false);
        assert!(duplicate.is_some_and(|text| text.contains("\"id\"")));
    }

    #[test]
    fn button_labels_reflect_busy_state() {
        assert_eq!(upload_button_label(false), "Upload");
        assert_eq!(upload_button_label(true), "Uploading...");
        assert_eq!(save_button_label(false), "Save Changes and Download");
        assert_eq!(save_button_label(true), "Processing...");
    }

    #[test]
    fn row_keys_change_with_each_upload() {
        assert_eq!(row_key(1, 0), "1-0");
        assert_ne!(row_key(1, 2), row_key(2, 2));
        assert_ne!(row_key(1, 12), row_key(11, 2));
    }

    #[test]
    fn cancelled_chooser_names_the_file_kept() {
        let kept = kept_selection_message(Some("people.csv"));
        assert!(kept.contains("people.csv is still selected"));
        assert_eq!(
            kept_selection_message(None),
            "File chooser cancelled; no file selected"
        );
    }
}
