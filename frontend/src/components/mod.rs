pub mod column_types;
