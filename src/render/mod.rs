//! Rendering module for writing documents and pagination reports out.
//!
//! JSON is the snapshot format: a document written with [`to_json`] loads
//! back with [`Document::from_json`](crate::model::Document::from_json).
//! The text form is a human-readable page dump for inspection.

mod json;
mod text;

pub use json::{report_to_json, to_json, JsonFormat};
pub use text::to_text;
