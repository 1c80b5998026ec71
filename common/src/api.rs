//! Wire contract of the type inference backend.
//!
//! - `POST {backend}/api/types/`: multipart with the CSV under `file`;
//!   answers a JSON object `column name -> type label`.
//! - `POST {backend}/api/save-types/`: multipart with a JSON object under
//!   `data`; answers the re-typed CSV as raw bytes.

use serde_json::Value;

use crate::error::EditorError;
use crate::model::ColumnTypeList;

pub const INFER_TYPES_PATH: &str = "/api/types/";
pub const SAVE_TYPES_PATH: &str = "/api/save-types/";

/// Multipart field carrying the uploaded CSV.
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the JSON encoded `name -> label` mapping.
pub const DATA_FIELD: &str = "data";

pub const DOWNLOAD_FILE_NAME: &str = "output.csv";
pub const DOWNLOAD_MIME: &str = "text/csv";

/// Absolute URLs of both endpoints for one backend base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    infer_types: String,
    save_types: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim().trim_end_matches('/');
        Self {
            infer_types: format!("{base}{INFER_TYPES_PATH}"),
            save_types: format!("{base}{SAVE_TYPES_PATH}"),
        }
    }

    pub fn infer_types(&self) -> &str {
        &self.infer_types
    }

    pub fn save_types(&self) -> &str {
        &self.save_types
    }
}

/// Parses the body of a successful inference response.
pub fn parse_inferred_types(body: &str) -> Result<ColumnTypeList, EditorError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| EditorError::MalformedResponse(format!("invalid JSON: {e}")))?;
    match value {
        Value::Object(mapping) => ColumnTypeList::from_mapping(&mapping),
        other => Err(EditorError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

/// Encodes the list as the text sent in the `data` field.
pub fn encode_save_payload(columns: &ColumnTypeList) -> Result<String, EditorError> {
    Ok(Value::Object(columns.to_mapping()?).to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnTypeEntry, TypeLabel};

    #[test]
    fn endpoints_join_base_url_without_double_slashes() {
        let plain = Endpoints::new("http://localhost:5000");
        let slashed = Endpoints::new("http://localhost:5000/ ");
        assert_eq!(plain, slashed);
        assert_eq!(plain.infer_types(), "http://localhost:5000/api/types/");
        assert_eq!(plain.save_types(), "http://localhost:5000/api/save-types/");
    }

    #[test]
    fn parses_inference_response_in_key_order() {
        let list =
            parse_inferred_types(r#"{"age":"Integer64","name":"Text"}"#).expect("valid body");
        assert_eq!(
            list.entries(),
            &[
                ColumnTypeEntry::new("age", TypeLabel::Integer64),
                ColumnTypeEntry::new("name", TypeLabel::Text),
            ]
        );
    }

    #[test]
    fn rejects_bodies_that_are_not_objects() {
        for body in ["", "not json", "[]", "\"Text\"", "null"] {
            let err = parse_inferred_types(body).unwrap_err();
            assert!(
                matches!(err, EditorError::MalformedResponse(_)),
                "{body:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn save_payload_is_a_json_object_in_list_order() {
        let single: ColumnTypeList = [ColumnTypeEntry::new("age", TypeLabel::Integer64)]
            .into_iter()
            .collect();
        assert_eq!(encode_save_payload(&single).unwrap(), r#"{"age":"Integer64"}"#);

        let several: ColumnTypeList = [
            ColumnTypeEntry::new("when", TypeLabel::DatetimeUtc),
            ColumnTypeEntry::new("amount", TypeLabel::Decimal32),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            encode_save_payload(&several).unwrap(),
            r#"{"when":"Datetime(UTC)","amount":"Decimal32"}"#
        );
    }

    #[test]
    fn empty_object_parses_to_an_empty_list() {
        assert!(parse_inferred_types("{}").unwrap().is_empty());
    }
}
