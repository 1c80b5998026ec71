use thiserror::Error;

/// Every way an editor operation can fail.
///
/// Local rejections (`MissingInput`, `Busy`, `NothingToSave`,
/// `IndexOutOfRange`, `UnknownType`, `DuplicateColumn`) never reach the
/// network. The remaining variants come back from a request and leave the
/// column list as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("no file selected")]
    MissingInput,

    #[error("another request is still in flight")]
    Busy,

    #[error("there are no columns to save")]
    NothingToSave,

    #[error("column index {index} is out of range (list has {len} columns)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown column type '{0}'")]
    UnknownType(String),

    #[error("column name '{0}' is used more than once")]
    DuplicateColumn(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("could not offer the download: {0}")]
    Download(String),
}

impl EditorError {
    /// True for failures that happened after a request was issued.
    pub fn is_transport_like(&self) -> bool {
        matches!(
            self,
            EditorError::Transport(_)
                | EditorError::Status(_)
                | EditorError::Timeout(_)
                | EditorError::MalformedResponse(_)
                | EditorError::Download(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_rejections_are_not_transport_failures() {
        assert!(!EditorError::MissingInput.is_transport_like());
        assert!(!EditorError::Busy.is_transport_like());
        assert!(!EditorError::DuplicateColumn("id".into()).is_transport_like());
        assert!(EditorError::Status(502).is_transport_like());
        assert!(EditorError::Timeout(30_000).is_transport_like());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let err = EditorError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "column index 4 is out of range (list has 2 columns)"
        );
        assert_eq!(
            EditorError::UnknownType("Float".into()).to_string(),
            "unknown column type 'Float'"
        );
    }
}
