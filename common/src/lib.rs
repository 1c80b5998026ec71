//! Shared model for the column type editor.
//!
//! Everything here is platform independent so the frontend (compiled to
//! wasm) and the host (native) agree on the same types, and so the editor
//! logic can be unit-tested without a browser.

pub mod api;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
