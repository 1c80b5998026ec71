//! The closed set of column type labels understood by the editor.
//!
//! `TypeLabel::ALL` is the only list of labels in the workspace: the frontend
//! renders its selector options from it and `FromStr` validates against it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

/// A column type label, serialized with the exact text the backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeLabel {
    Text,
    Integer64,
    Integer32,
    Integer16,
    Integer8,
    Decimal64,
    Decimal32,
    Date,
    #[serde(rename = "Datetime(UTC)")]
    DatetimeUtc,
    Boolean,
    Category,
    #[serde(rename = "Time Interval")]
    TimeInterval,
    #[serde(rename = "Complex Number")]
    ComplexNumber,
}

impl TypeLabel {
    /// All labels, in the order the selector shows them.
    pub const ALL: [TypeLabel; 13] = [
        TypeLabel::Text,
        TypeLabel::Integer64,
        TypeLabel::Integer32,
        TypeLabel::Integer16,
        TypeLabel::Integer8,
        TypeLabel::Decimal64,
        TypeLabel::Decimal32,
        TypeLabel::Date,
        TypeLabel::DatetimeUtc,
        TypeLabel::Boolean,
        TypeLabel::Category,
        TypeLabel::TimeInterval,
        TypeLabel::ComplexNumber,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TypeLabel::Text => "Text",
            TypeLabel::Integer64 => "Integer64",
            TypeLabel::Integer32 => "Integer32",
            TypeLabel::Integer16 => "Integer16",
            TypeLabel::Integer8 => "Integer8",
            TypeLabel::Decimal64 => "Decimal64",
            TypeLabel::Decimal32 => "Decimal32",
            TypeLabel::Date => "Date",
            TypeLabel::DatetimeUtc => "Datetime(UTC)",
            TypeLabel::Boolean => "Boolean",
            TypeLabel::Category => "Category",
            TypeLabel::TimeInterval => "Time Interval",
            TypeLabel::ComplexNumber => "Complex Number",
        }
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeLabel {
    type Err = EditorError;

    /// Matches the wire text exactly; the backend is case sensitive.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TypeLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == value)
            .ok_or_else(|| EditorError::UnknownType(value.to_string()))
    }
}
