//! Update function for the column type editor component.
//!
//! Elm-style: receives the component, the `Context` and a `Msg`, mutates the
//! state and returns whether the view should re-render.
//!
//! Network requests run in `spawn_local` between a `begin_*` and a `finish_*`
//! transition of the editor state machine; their outcome comes back as
//! `UploadFinished` / `SaveFinished`.

use common::api::{DOWNLOAD_FILE_NAME, DOWNLOAD_MIME};
use common::editor::TypeBackend;
use common::error::EditorError;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{
    alert, kept_selection_message, notice_for, set_window_dirty_flag, show_toast,
    trigger_download,
};
use super::messages::Msg;
use super::state::ColumnTypeEditor;

pub fn update(component: &mut ColumnTypeEditor, ctx: &Context<ColumnTypeEditor>, msg: Msg) -> bool {
    match msg {
        Msg::FileSelected(file) => {
            log!(format!("Selected file {} ({} bytes)", file.name(), file.size()));
            component.editor.select_file(file);
            false
        }
        Msg::FileChooserCleared => {
            let previous = component.editor.selected_file().map(|file| file.name());
            log!(kept_selection_message(previous.as_deref()));
            false
        }
        Msg::Upload => match component.editor.begin_upload() {
            Ok(file) => {
                let backend = component.backend.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = backend.infer_types(&file).await;
                    link.send_message(Msg::UploadFinished(outcome));
                });
                true
            }
            Err(err) => {
                report(&err, true);
                false
            }
        },
        Msg::UploadFinished(outcome) => {
            match component.editor.finish_upload(outcome) {
                Ok(()) => log!(format!(
                    "Loaded {} column types",
                    component.editor.columns().len()
                )),
                Err(err) => {
                    error!(format!("Error uploading file: {err}"));
                    report(&err, true);
                }
            }
            set_window_dirty_flag(component.editor.is_edited());
            true
        }
        Msg::RenameColumn(index, name) => {
            let result = component.editor.rename_column(index, name);
            apply_edit(component, result)
        }
        Msg::RetypeColumn(index, label) => {
            let result = component.editor.retype_column_str(index, &label);
            apply_edit(component, result)
        }
        Msg::Save => match component.editor.begin_save() {
            Ok(data) => {
                let backend = component.backend.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = backend.save_types(&data).await.and_then(|csv| {
                        trigger_download(&csv, DOWNLOAD_FILE_NAME, DOWNLOAD_MIME)
                    });
                    link.send_message(Msg::SaveFinished(outcome));
                });
                true
            }
            Err(err) => {
                report(&err, false);
                false
            }
        },
        Msg::SaveFinished(outcome) => {
            match component.editor.finish_save(outcome) {
                Ok(()) => show_toast("Column types saved."),
                Err(err) => {
                    error!(format!("Error saving or downloading the CSV: {err}"));
                    report(&err, false);
                }
            }
            set_window_dirty_flag(component.editor.is_edited());
            true
        }
    }
}

fn apply_edit(component: &ColumnTypeEditor, result: Result<(), EditorError>) -> bool {
    match result {
        Ok(()) => {
            set_window_dirty_flag(component.editor.is_edited());
            true
        }
        Err(err) => {
            error!(format!("Rejected column edit: {err}"));
            report(&err, false);
            false
        }
    }
}

fn report(err: &EditorError, upload: bool) {
    match notice_for(err, upload) {
        Some(notice) => alert(&notice),
        None => log!(format!("Ignored request: {err}")),
    }
}
