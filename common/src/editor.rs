//! Upload, edit and save flow of the column type editor as an explicit state
//! machine.
//!
//! ```text
//! Idle --begin_upload--> Uploading --finish_upload(ok)--> Populated
//!                            |      --finish_upload(err)-> Idle | Populated (list kept)
//! Populated --begin_save--> Saving --finish_save--> Populated
//! ```
//!
//! `Uploading` and `Saving` are the only busy phases and share one check, so
//! at most one request is ever in flight. Requests themselves are issued by
//! the caller between `begin_*` and `finish_*`, through a [`TypeBackend`].

use crate::api::encode_save_payload;
use crate::error::EditorError;
use crate::model::{ColumnTypeList, TypeLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No columns loaded yet.
    Idle,
    Uploading,
    /// Columns loaded and editable.
    Populated,
    Saving,
}

/// Form state of one editor instance. `F` is the platform's file handle.
#[derive(Debug, Clone)]
pub struct EditorState<F> {
    selected_file: Option<F>,
    columns: ColumnTypeList,
    phase: Phase,
    edited: bool,
    generation: u64,
}

impl<F> Default for EditorState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            columns: ColumnTypeList::default(),
            phase: Phase::Idle,
            edited: false,
            generation: 0,
        }
    }
}

impl<F: Clone> EditorState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selected file. Never touches the network.
    pub fn select_file(&mut self, file: F) {
        self.selected_file = Some(file);
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    pub fn columns(&self) -> &ColumnTypeList {
        &self.columns
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Uploading | Phase::Saving)
    }

    /// True once a column was renamed or retyped since the last load or save.
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Bumped every time a response replaces the column list.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn can_save(&self) -> bool {
        !self.is_busy() && !self.columns.is_empty()
    }

    /// Enters `Uploading` and hands out the file to send.
    pub fn begin_upload(&mut self) -> Result<F, EditorError> {
        self.ensure_idle()?;
        let file = self.selected_file.clone().ok_or(EditorError::MissingInput)?;
        self.phase = Phase::Uploading;
        Ok(file)
    }

    /// Applies the outcome of the inference request.
    ///
    /// On failure the previous columns are kept and the error is returned.
    pub fn finish_upload(
        &mut self,
        outcome: Result<ColumnTypeList, EditorError>,
    ) -> Result<(), EditorError> {
        let result = outcome.map(|columns| {
            self.columns = columns;
            self.edited = false;
            self.generation += 1;
        });
        self.settle();
        result
    }

    pub fn rename_column(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.columns.rename(index, name)?;
        self.edited = true;
        Ok(())
    }

    pub fn retype_column(&mut self, index: usize, label: TypeLabel) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.columns.retype(index, label)?;
        self.edited = true;
        Ok(())
    }

    /// Like [`retype_column`](Self::retype_column) for label text coming from
    /// an untyped source such as a DOM `<select>`.
    pub fn retype_column_str(&mut self, index: usize, label: &str) -> Result<(), EditorError> {
        self.retype_column(index, label.parse()?)
    }

    /// Enters `Saving` and hands out the JSON text for the `data` field.
    pub fn begin_save(&mut self) -> Result<String, EditorError> {
        self.ensure_idle()?;
        if self.columns.is_empty() {
            return Err(EditorError::NothingToSave);
        }
        let payload = encode_save_payload(&self.columns)?;
        self.phase = Phase::Saving;
        Ok(payload)
    }

    /// Applies the outcome of the save request and passes it through.
    pub fn finish_save<T>(&mut self, outcome: Result<T, EditorError>) -> Result<T, EditorError> {
        if outcome.is_ok() {
            self.edited = false;
        }
        self.settle();
        outcome
    }

    fn ensure_idle(&self) -> Result<(), EditorError> {
        if self.is_busy() {
            Err(EditorError::Busy)
        } else {
            Ok(())
        }
    }

    fn settle(&mut self) {
        self.phase = if self.columns.is_empty() {
            Phase::Idle
        } else {
            Phase::Populated
        };
    }
}

/// The remote service doing the actual inference and CSV rewriting.
#[allow(async_fn_in_trait)]
pub trait TypeBackend {
    type File;

    async fn infer_types(&self, file: &Self::File) -> Result<ColumnTypeList, EditorError>;

    /// Sends the encoded mapping and returns the re-typed CSV bytes.
    async fn save_types(&self, data: &str) -> Result<Vec<u8>, EditorError>;
}

/// Runs a complete upload round trip against `backend`.
pub async fn upload<B>(state: &mut EditorState<B::File>, backend: &B) -> Result<(), EditorError>
where
    B: TypeBackend,
    B::File: Clone,
{
    let file = state.begin_upload()?;
    let outcome = backend.infer_types(&file).await;
    state.finish_upload(outcome)
}

/// Runs a complete save round trip against `backend`.
pub async fn save<B>(state: &mut EditorState<B::File>, backend: &B) -> Result<Vec<u8>, EditorError>
where
    B: TypeBackend,
    B::File: Clone,
{
    let data = state.begin_save()?;
    let outcome = backend.save_types(&data).await;
    state.finish_save(outcome)
}
