//! Defines the properties for the `ColumnTypeEditor`.

use common::config::EditorConfig;
use yew::prelude::*;

/// Properties for the `ColumnTypeEditor`.
#[derive(Properties, PartialEq, Clone)]
pub struct ColumnTypeEditorProps {
    /// Where the type inference backend lives and how long a request may take.
    ///
    /// Passed in by the parent instead of being read from a global, so several
    /// editors (or tests) can point at different backends. Defaults to
    /// `EditorConfig::default()`.
    #[prop_or_default]
    pub config: EditorConfig,
}
