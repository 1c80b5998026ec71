//! Component state for the column type editor.
//!
//! The form state itself (selected file, columns, busy phase, edited flag)
//! lives in `common::editor::EditorState`; this struct only adds what the
//! browser side needs on top of it.

use common::config::EditorConfig;
use common::editor::EditorState;

use super::client::HttpTypeBackend;

pub struct ColumnTypeEditor {
    /// Upload/edit/save state machine, with `web_sys::File` as the file handle.
    pub editor: EditorState<web_sys::File>,

    /// Client for the inference backend, rebuilt when the config prop changes.
    pub backend: HttpTypeBackend,
}

impl ColumnTypeEditor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            editor: EditorState::new(),
            backend: HttpTypeBackend::new(config),
        }
    }

    pub fn reconfigure(&mut self, config: &EditorConfig) {
        self.backend = HttpTypeBackend::new(config);
    }
}
