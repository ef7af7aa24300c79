//! Overflow-driven re-pagination.
//!
//! A pass walks the pages of a rendered [`Document`](crate::model::Document)
//! in order. Each content page taller than the threshold is cut at a fixed
//! distance from its top: blocks below the cut move to a continuation page
//! inserted right after it, and blocks crossing the cut are split where
//! their kind allows. Continuation pages are visited in turn, so long
//! content flows over as many pages as it needs.
//!
//! Text is preserved exactly across every split; see
//! [`Document::flowing_text`](crate::model::Document::flowing_text).

mod detector;
mod driver;
mod options;
mod relocator;
mod renumber;
mod report;
mod segmenter;
mod splitter;

pub use detector::is_overflowing;
pub use driver::paginate;
pub use options::{
    PaginationOptions, CONTENT_LIMIT, MAX_ITERATIONS, MIN_VISIBLE_ALLOWANCE,
    PAGE_HEIGHT_THRESHOLD, TOP_EPSILON,
};
pub use relocator::{relocate, Relocation};
pub use renumber::renumber;
pub use report::{PaginationReport, PaginationWarning};
pub use segmenter::find_split_offset;
pub use splitter::{split_page, SplitOutcome};
