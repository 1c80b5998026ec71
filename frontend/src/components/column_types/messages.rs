use common::error::EditorError;
use common::model::ColumnTypeList;

#[derive(Clone)]
pub enum Msg {
    FileSelected(web_sys::File),
    /// The chooser fired `change` with an empty file list.
    FileChooserCleared,
    Upload,
    UploadFinished(Result<ColumnTypeList, EditorError>),
    RenameColumn(usize, String),
    RetypeColumn(usize, String),
    Save,
    /// `Ok` once the CSV came back and the download was offered.
    SaveFinished(Result<(), EditorError>),
}
