//! View rendering for the column type editor.
//!
//! Layout: a file chooser with an upload button, then (once columns are
//! loaded) a two-column table of name inputs and type selectors followed by
//! the save button. Inputs and buttons are disabled while a request is in
//! flight.

use common::editor::Phase;
use common::model::{ColumnType, ColumnTypeEntry, TypeLabel};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{row_key, save_button_label, upload_button_label};
use super::messages::Msg;
use super::state::ColumnTypeEditor;

/// Main view function for the column type editor.
pub fn view(component: &ColumnTypeEditor, ctx: &Context<ColumnTypeEditor>) -> Html {
    let link = ctx.link();

    html! {
        <div class="column-types-root">
            { build_upload_bar(component, link) }
            {
                if component.editor.columns().is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="column-types-editor">
                            { build_table(component, link) }
                            { build_save_bar(component, link) }
                        </div>
                    }
                }
            }
        </div>
    }
}

fn build_upload_bar(component: &ColumnTypeEditor, link: &Scope<ColumnTypeEditor>) -> Html {
    let busy = component.editor.is_busy();
    let uploading = component.editor.phase() == Phase::Uploading;

    html! {
        <div class="upload-bar">
            <label>
                <span class="sr-only">{"Choose CSV file"}</span>
                <input
                    type="file"
                    accept=".csv, text/csv"
                    disabled={busy}
                    onchange={link.callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        match input.files().and_then(|files| files.get(0)) {
                            Some(file) => Msg::FileSelected(file),
                            None => Msg::FileChooserCleared,
                        }
                    })}
                />
            </label>
            <button
                class="primary-btn"
                onclick={link.callback(|_| Msg::Upload)}
                disabled={busy}
            >
                { spinner_if(uploading) }
                { upload_button_label(uploading) }
            </button>
        </div>
    }
}

fn build_table(component: &ColumnTypeEditor, link: &Scope<ColumnTypeEditor>) -> Html {
    let busy = component.editor.is_busy();
    let generation = component.editor.generation();
    let rows = component
        .editor
        .columns()
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| build_row(row_key(generation, index), index, entry, busy, link))
        .collect::<Html>();

    html! {
        <table class="column-types-table">
            <thead>
                <tr>
                    <th scope="col">{"Column Name"}</th>
                    <th scope="col">{"Data Type"}</th>
                </tr>
            </thead>
            <tbody>{ rows }</tbody>
        </table>
    }
}

/// One editable row. Identity is the index within one upload.
fn build_row(
    key: String,
    index: usize,
    entry: &ColumnTypeEntry,
    busy: bool,
    link: &Scope<ColumnTypeEditor>,
) -> Html {
    html! {
        <tr key={key}>
            <td>
                <input
                    type="text"
                    value={entry.name.clone()}
                    disabled={busy}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::RenameColumn(index, input.value())
                    })}
                />
            </td>
            <td>
                <select
                    disabled={busy}
                    onchange={link.callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::RetypeColumn(index, select.value())
                    })}
                >
                    { type_options(&entry.column_type) }
                </select>
            </td>
        </tr>
    }
}

/// Options for every `TypeLabel`, with the current one selected.
///
/// A label the backend sent that is not in `TypeLabel::ALL` is shown as a
/// disabled first option so the selector still displays it.
fn type_options(current: &ColumnType) -> Html {
    let unrecognized = match current {
        ColumnType::Unrecognized(raw) => html! {
            <option value={raw.clone()} selected=true disabled=true>{ raw.clone() }</option>
        },
        ColumnType::Known(_) => html! {},
    };
    let known = TypeLabel::ALL
        .into_iter()
        .map(|label| {
            html! {
                <option value={label.as_str()} selected={current.known() == Some(label)}>
                    { label.as_str() }
                </option>
            }
        })
        .collect::<Html>();

    html! { <>{ unrecognized }{ known }</> }
}

fn build_save_bar(component: &ColumnTypeEditor, link: &Scope<ColumnTypeEditor>) -> Html {
    let saving = component.editor.phase() == Phase::Saving;

    html! {
        <div class="save-bar" style="position: relative; display: inline-block;">
            <button
                class="primary-btn"
                onclick={link.callback(|_| Msg::Save)}
                disabled={!component.editor.can_save()}
            >
                { spinner_if(saving) }
                { save_button_label(saving) }
            </button>
            {
                if component.editor.is_edited() {
                    html! {
                        <span
                            title="Unsaved changes"
                            style="
                                    position: absolute;
                                    top: 4px;
                                    right: 6px;
                                    width: 8px;
                                    height: 8px;
                                    background: #e53935;
                                    border-radius: 50%;
                                    display: inline-block;
                                "
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn spinner_if(show: bool) -> Html {
    if show {
        html! {
            <span
                class="spin"
                style="
                    display: inline-block;
                    width: 12px;
                    height: 12px;
                    margin-right: 6px;
                    border: 2px solid #ccc;
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                "
            />
        }
    } else {
        html! {}
    }
}
