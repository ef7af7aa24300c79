//! Geometry queries against the rendered document.
//!
//! The pagination engine never computes text layout itself. Every position
//! it needs comes from a [`LayoutOracle`], which answers "where does this
//! node, or this range of its text, render right now?". A production
//! oracle sits in front of a headless renderer; [`MonospaceOracle`] is a
//! deterministic fixed-metric implementation for tools and tests.
//!
//! Rectangles are only valid for the document state they were measured
//! against. Callers re-query after every structural change.

mod monospace;

pub use monospace::{LayoutMetrics, MonospaceOracle};

use crate::error::Result;
use crate::model::{Document, Track};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// An axis-aligned rectangle in document pixels.
///
/// Pages are stacked vertically: page `i` starts where page `i - 1` ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub left: f32,
    /// Top edge
    pub top: f32,
    /// Right edge
    pub right: f32,
    /// Bottom edge
    pub bottom: f32,
}

impl Rect {
    /// Create a rectangle from its edges.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle height.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Rectangle width.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Shift vertically by `dy`.
    pub fn offset_y(self, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            bottom: self.bottom + dy,
            ..self
        }
    }
}

/// Which part of a block a query addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodePart {
    /// The whole block, decorations included
    Whole,
    /// The block's text node (paragraph text, insight box body)
    Text,
    /// One list item
    Item(usize),
}

/// Identity of a node in the current document state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRef {
    /// Page index (0-based)
    pub page: usize,
    /// Track on the page
    pub track: Track,
    /// Block index within the track
    pub block: usize,
    /// Addressed part of the block
    pub part: NodePart,
}

impl NodeRef {
    /// Address a whole block.
    pub fn block(page: usize, track: Track, block: usize) -> Self {
        Self {
            page,
            track,
            block,
            part: NodePart::Whole,
        }
    }

    /// The same block's text node.
    pub fn text(self) -> Self {
        Self {
            part: NodePart::Text,
            ..self
        }
    }

    /// One item of the same block.
    pub fn item(self, index: usize) -> Self {
        Self {
            part: NodePart::Item(index),
            ..self
        }
    }
}

/// Pixel geometry of the currently rendered document.
///
/// All methods fail with [`Error::MeasurementUnavailable`] when the node
/// cannot be measured; the engine treats that as "fits".
///
/// [`Error::MeasurementUnavailable`]: crate::error::Error::MeasurementUnavailable
pub trait LayoutOracle {
    /// Bounding rectangle of a whole page, including its growth past the
    /// nominal page height.
    fn page_rect(&self, doc: &Document, page: usize) -> Result<Rect>;

    /// Bounding rectangle of one track's content region. Its top is where
    /// the first block of the track renders.
    fn region_rect(&self, doc: &Document, page: usize, track: Track) -> Result<Rect>;

    /// Bounding rectangle of a node.
    fn node_rect(&self, doc: &Document, node: NodeRef) -> Result<Rect>;

    /// Bounding rectangle of the byte range `range` of a node's text.
    ///
    /// Range ends always fall on character boundaries.
    fn text_rect(&self, doc: &Document, node: NodeRef, range: Range<usize>) -> Result<Rect>;
}

impl<T: LayoutOracle + ?Sized> LayoutOracle for &T {
    fn page_rect(&self, doc: &Document, page: usize) -> Result<Rect> {
        (**self).page_rect(doc, page)
    }

    fn region_rect(&self, doc: &Document, page: usize, track: Track) -> Result<Rect> {
        (**self).region_rect(doc, page, track)
    }

    fn node_rect(&self, doc: &Document, node: NodeRef) -> Result<Rect> {
        (**self).node_rect(doc, node)
    }

    fn text_rect(&self, doc: &Document, node: NodeRef, range: Range<usize>) -> Result<Rect> {
        (**self).text_rect(doc, node, range)
    }
}
