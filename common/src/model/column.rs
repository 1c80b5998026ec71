//! Editable column/type assignments.
//!
//! A [`ColumnTypeList`] is populated once from the backend's inference
//! response and afterwards only changes field by field, addressed by index.
//! Entries are never inserted, removed or reordered.

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};

use super::type_label::TypeLabel;
use crate::error::EditorError;

/// The type assigned to a column.
///
/// The backend may answer with a label outside [`TypeLabel::ALL`]; such a
/// label is kept verbatim so that saving without edits sends it back as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
    Known(TypeLabel),
    Unrecognized(String),
}

impl ColumnType {
    pub fn from_wire(raw: &str) -> Self {
        match raw.parse::<TypeLabel>() {
            Ok(label) => ColumnType::Known(label),
            Err(_) => ColumnType::Unrecognized(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::Known(label) => label.as_str(),
            ColumnType::Unrecognized(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<TypeLabel> {
        match self {
            ColumnType::Known(label) => Some(*label),
            ColumnType::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TypeLabel> for ColumnType {
    fn from(label: TypeLabel) -> Self {
        ColumnType::Known(label)
    }
}

/// One CSV column and the type assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTypeEntry {
    pub name: String,
    pub column_type: ColumnType,
}

impl ColumnTypeEntry {
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTypeList {
    entries: Vec<ColumnTypeEntry>,
}

impl ColumnTypeList {
    /// Builds the list from a `name -> label` JSON object, keeping key order.
    ///
    /// Any value that is not a string makes the whole mapping malformed.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Result<Self, EditorError> {
        let entries = mapping
            .iter()
            .map(|(name, value)| match value {
                Value::String(raw) => Ok(ColumnTypeEntry {
                    name: name.clone(),
                    column_type: ColumnType::from_wire(raw),
                }),
                other => Err(EditorError::MalformedResponse(format!(
                    "type of column '{name}' is not a string: {other}"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    /// Folds the list back into a `name -> label` object, in list order.
    ///
    /// Fails with `DuplicateColumn` instead of letting a later entry
    /// overwrite an earlier one with the same name.
    pub fn to_mapping(&self) -> Result<Map<String, Value>, EditorError> {
        if let Some(name) = self.first_duplicate() {
            return Err(EditorError::DuplicateColumn(name.to_string()));
        }
        Ok(self
            .entries
            .iter()
            .map(|entry| {
                (
                    entry.name.clone(),
                    Value::String(entry.column_type.as_str().to_string()),
                )
            })
            .collect())
    }

    /// Name of the first entry whose name already appeared earlier.
    pub fn first_duplicate(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        self.entries
            .iter()
            .map(|entry| entry.name.as_str())
            .find(|name| !seen.insert(*name))
    }

    pub fn entries(&self) -> &[ColumnTypeEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ColumnTypeEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<(), EditorError> {
        self.entry_mut(index)?.name = name.into();
        Ok(())
    }

    pub fn retype(&mut self, index: usize, label: TypeLabel) -> Result<(), EditorError> {
        self.entry_mut(index)?.column_type = ColumnType::Known(label);
        Ok(())
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut ColumnTypeEntry, EditorError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })
    }
}

impl FromIterator<ColumnTypeEntry> for ColumnTypeList {
    fn from_iter<I: IntoIterator<Item = ColumnTypeEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mapping(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    fn sample() -> ColumnTypeList {
        [
            ColumnTypeEntry::new("id", TypeLabel::Integer64),
            ColumnTypeEntry::new("name", TypeLabel::Text),
            ColumnTypeEntry::new("signup", TypeLabel::Date),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn from_mapping_keeps_response_key_order() {
        let list =
            ColumnTypeList::from_mapping(&mapping(json!({"age": "Integer64", "name": "Text"})))
                .expect("valid mapping");
        assert_eq!(
            list.entries(),
            &[
                ColumnTypeEntry::new("age", TypeLabel::Integer64),
                ColumnTypeEntry::new("name", TypeLabel::Text),
            ]
        );

        let list = ColumnTypeList::from_mapping(&mapping(json!({"zeta": "Text", "alpha": "Date"})))
            .expect("valid mapping");
        let names: Vec<&str> = list.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }

    #[test]
    fn from_mapping_keeps_unrecognized_labels_verbatim() {
        let list = ColumnTypeList::from_mapping(&mapping(json!({"score": "Float"})))
            .expect("valid mapping");
        assert_eq!(
            list.get(0).map(|e| &e.column_type),
            Some(&ColumnType::Unrecognized("Float".into()))
        );
    }

    #[test]
    fn from_mapping_rejects_non_string_types() {
        let err = ColumnTypeList::from_mapping(&mapping(json!({"age": 64}))).unwrap_err();
        assert!(matches!(err, EditorError::MalformedResponse(_)));
    }

    #[test]
    fn retype_changes_only_the_targeted_entry() {
        let original = sample();
        let mut list = original.clone();
        list.retype(1, TypeLabel::Category).expect("valid index");

        for (index, (before, after)) in original.entries().iter().zip(list.entries()).enumerate() {
            if index == 1 {
                assert_eq!(after.name, before.name);
                assert_eq!(after.column_type, ColumnType::Known(TypeLabel::Category));
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn rename_changes_only_the_name() {
        let mut list = sample();
        list.rename(0, "customer id").expect("valid index");
        assert_eq!(
            list.get(0),
            Some(&ColumnTypeEntry::new("customer id", TypeLabel::Integer64))
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn out_of_range_updates_leave_the_list_alone() {
        let mut list = sample();
        assert_eq!(
            list.rename(3, "x"),
            Err(EditorError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            list.retype(usize::MAX, TypeLabel::Text),
            Err(EditorError::IndexOutOfRange {
                index: usize::MAX,
                len: 3
            })
        );
        assert_eq!(list, sample());
    }

    #[test]
    fn to_mapping_round_trips_an_unedited_list() {
        let received = mapping(json!({"b": "Text", "a": "Time Interval", "c": "Mystery"}));
        let list = ColumnTypeList::from_mapping(&received).expect("valid mapping");
        let sent = list.to_mapping().expect("no duplicates");
        assert_eq!(sent, received);
        let keys: Vec<&String> = sent.keys().collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn to_mapping_rejects_duplicate_names() {
        let mut list = sample();
        list.rename(2, "id").expect("valid index");
        assert_eq!(list.first_duplicate(), Some("id"));
        assert_eq!(
            list.to_mapping(),
            Err(EditorError::DuplicateColumn("id".into()))
        );
    }
}
