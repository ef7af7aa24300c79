//! Pagination outcome and warnings.

use crate::model::Track;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A degraded condition met during a pass.
///
/// None of these abort pagination; each leaves existing content in place.
/// Page numbers are 1-based positions at the time the condition was met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaginationWarning {
    /// The oracle could not measure a node; it was treated as fitting.
    MeasurementUnavailable {
        /// Page being processed
        page: usize,
        /// Oracle message
        reason: String,
    },

    /// An overflowing page has no recognized content region.
    NoContentContainer {
        /// Page that was skipped
        page: usize,
        /// Shape name reported by the page
        shape: String,
    },

    /// A block taller than the printable area was left uncut.
    UnsplittableOverflow {
        /// Page holding the block
        page: usize,
        /// Track holding the block
        track: Track,
        /// Block index within the track
        block: usize,
        /// Block kind
        kind: String,
    },

    /// The driver stopped at its step cap.
    IterationCapExceeded {
        /// Steps taken
        steps: usize,
        /// Pages not visited
        unvisited_pages: usize,
    },
}

impl fmt::Display for PaginationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaginationWarning::MeasurementUnavailable { page, reason } => {
                write!(f, "page {}: measurement unavailable ({}), treated as fitting", page, reason)
            }
            PaginationWarning::NoContentContainer { page, shape } => write!(
                f,
                "page {}: no content container for shape '{}', left overflowing",
                page, shape
            ),
            PaginationWarning::UnsplittableOverflow {
                page,
                track,
                block,
                kind,
            } => write!(
                f,
                "page {}: {} #{} in {:?} track is taller than the printable area, left uncut",
                page, kind, block, track
            ),
            PaginationWarning::IterationCapExceeded {
                steps,
                unvisited_pages,
            } => write!(
                f,
                "stopped after {} steps with {} pages unvisited",
                steps, unvisited_pages
            ),
        }
    }
}

/// Statistics collected during a pagination pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationReport {
    /// Pages in the input
    pub pages_before: usize,

    /// Pages in the output
    pub pages_after: usize,

    /// Content pages visited by the driver
    pub steps: usize,

    /// Visited pages found overflowing
    pub overflowing_pages: usize,

    /// Continuation pages kept in the output
    pub pages_created: usize,

    /// Continuation pages discarded because nothing moved
    pub pages_discarded: usize,

    /// Blocks moved whole to a continuation page
    pub blocks_moved: usize,

    /// Blocks cut in two across a page boundary
    pub blocks_split: usize,

    /// Whether the pass ended at the step cap
    pub iteration_cap_hit: bool,

    /// Degraded conditions, in the order they were met
    pub warnings: Vec<PaginationWarning>,
}

impl PaginationReport {
    /// Create an empty report for a document of `pages` pages.
    pub fn new(pages: usize) -> Self {
        Self {
            pages_before: pages,
            pages_after: pages,
            ..Default::default()
        }
    }

    /// Log and record a warning.
    pub fn warn(&mut self, warning: PaginationWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Check if the pass met no degraded condition.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of `UnsplittableOverflow` warnings.
    pub fn unsplittable_count(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, PaginationWarning::UnsplittableOverflow { .. }))
            .count()
    }
}
