pub mod editor_config;
pub mod embedded;
