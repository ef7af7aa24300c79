//! Error types for repaginate library.

use std::io;
use thiserror::Error;

/// Result type alias for repaginate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, paginating or rendering.
///
/// A pagination pass itself never fails; the conditions it meets are
/// reported as [`PaginationWarning`](crate::paginate::PaginationWarning)s.
/// These variants surface from the individual steps and from I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The document JSON could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pagination options are inconsistent.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The layout oracle could not measure a node.
    #[error("Measurement unavailable: {0}")]
    MeasurementUnavailable(String),

    /// A page shape the engine has no splitting rules for.
    #[error("Unrecognized page shape: {0}")]
    UnrecognizedPageShape(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),
}
