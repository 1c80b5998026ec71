pub mod column;
pub mod type_label;

pub use column::{ColumnType, ColumnTypeEntry, ColumnTypeList};
pub use type_label::TypeLabel;
