//! Binary-search text splitting.
//!
//! Finds how much of a block's text renders above a cut line. Candidates
//! are grapheme-cluster boundaries only, so a split never lands inside a
//! codepoint or a combined character. Each step asks the oracle for the
//! rectangle of a prefix; an `n`-grapheme node costs `O(log n)` measurements.

use crate::error::Result;
use crate::layout::{LayoutOracle, NodeRef};
use crate::model::Document;
use unicode_segmentation::UnicodeSegmentation;

/// Find the byte offset at which a block's text should be cut.
///
/// `node` addresses the block; its text node is measured. Returns:
/// - `None` if the text fits above `limit_y`, is empty, or cannot be measured;
/// - `Some(0)` if the text starts below `limit_y` (move it whole);
/// - `Some(k)`: the largest grapheme boundary `k` such that `[0, k)`
///   renders with its bottom at or above `limit_y`.
pub fn find_split_offset<O: LayoutOracle + ?Sized>(
    doc: &Document,
    node: NodeRef,
    limit_y: f32,
    oracle: &O,
) -> Option<usize> {
    match try_find_split_offset(doc, node, limit_y, oracle) {
        Ok(offset) => offset,
        Err(e) => {
            log::debug!("Text of {:?} not measurable, assuming it fits: {}", node, e);
            None
        }
    }
}

/// Like [`find_split_offset`], but reports measurement failures.
pub(crate) fn try_find_split_offset<O: LayoutOracle + ?Sized>(
    doc: &Document,
    node: NodeRef,
    limit_y: f32,
    oracle: &O,
) -> Result<Option<usize>> {
    let node = node.text();
    let Some(text) = doc
        .block(node.page, node.track, node.block)
        .and_then(|block| block.text())
    else {
        return Ok(None);
    };
    if text.is_empty() {
        return Ok(None);
    }

    let full = oracle.text_rect(doc, node, 0..text.len())?;
    if full.bottom <= limit_y {
        return Ok(None);
    }
    if full.top > limit_y {
        return Ok(Some(0));
    }

    // Interior boundaries only: 0 and text.len() were settled above.
    let boundaries: Vec<usize> = text
        .grapheme_indices(true)
        .map(|(offset, _)| offset)
        .skip(1)
        .collect();

    let mut best = 0;
    let (mut lo, mut hi) = (0, boundaries.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let rect = oracle.text_rect(doc, node, 0..boundaries[mid])?;
        if rect.bottom > limit_y {
            hi = mid;
        } else {
            best = boundaries[mid];
            lo = mid + 1;
        }
    }

    Ok(Some(best))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::layout::{MonospaceOracle, Rect};
    use crate::model::{Block, Page, Track};
    use std::cell::Cell;
    use std::ops::Range;

    /// One line per grapheme, 10px each, text starting at y=0.
    struct LineOracle {
        calls: Cell<usize>,
        fail: bool,
    }

    impl LineOracle {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                fail: false,
            }
        }
    }

    impl LayoutOracle for LineOracle {
        fn page_rect(&self, _: &Document, _: usize) -> Result<Rect> {
            Ok(Rect::new(0.0, 0.0, 100.0, 1000.0))
        }

        fn region_rect(&self, _: &Document, _: usize, _: Track) -> Result<Rect> {
            Ok(Rect::new(0.0, 0.0, 100.0, 1000.0))
        }

        fn node_rect(&self, _: &Document, _: NodeRef) -> Result<Rect> {
            Ok(Rect::new(0.0, 0.0, 100.0, 1000.0))
        }

        fn text_rect(&self, doc: &Document, node: NodeRef, range: Range<usize>) -> Result<Rect> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(Error::MeasurementUnavailable("offline".to_string()));
            }
            let text = doc.block(node.page, node.track, node.block).unwrap().text().unwrap();
            let lines = text[..range.end].graphemes(true).count();
            Ok(Rect::new(0.0, 0.0, 100.0, lines as f32 * 10.0))
        }
    }

    fn single(text: &str) -> Document {
        let mut doc = Document::new();
        doc.add_page(Page::generic(vec![Block::paragraph(text)]));
        doc
    }

    fn node() -> NodeRef {
        NodeRef::block(0, Track::Main, 0)
    }

    #[test]
    fn test_fitting_text_needs_no_split() {
        let doc = single("abc");
        assert_eq!(find_split_offset(&doc, node(), 30.0, &LineOracle::new()), None);
    }

    #[test]
    fn test_finds_maximal_prefix() {
        let doc = single("abcdefghij");
        let oracle = LineOracle::new();
        assert_eq!(find_split_offset(&doc, node(), 45.0, &oracle), Some(4));
        assert_eq!(find_split_offset(&doc, node(), 50.0, &oracle), Some(5));
    }

    #[test]
    fn test_logarithmic_measurement_count() {
        let doc = single(&"x".repeat(1024));
        let oracle = LineOracle::new();
        assert_eq!(find_split_offset(&doc, node(), 5000.0, &oracle), Some(500));
        // One full measurement plus at most ceil(log2(1024)) + 1 more.
        assert!(oracle.calls.get() <= 12, "{} measurements", oracle.calls.get());
    }

    #[test]
    fn test_never_splits_inside_a_grapheme() {
        // "e" + combining acute is one grapheme of 3 bytes.
        let doc = single("ae\u{301}bc");
        let oracle = LineOracle::new();
        let offset = find_split_offset(&doc, node(), 25.0, &oracle).unwrap();
        assert_eq!(offset, 4);
        assert!("ae\u{301}bc".is_char_boundary(offset));
    }

    #[test]
    fn test_first_grapheme_too_low_moves_whole() {
        let doc = single("abc");
        assert_eq!(find_split_offset(&doc, node(), 5.0, &LineOracle::new()), Some(0));
    }

    #[test]
    fn test_measurement_failure_means_fits() {
        let doc = single("abc");
        let mut oracle = LineOracle::new();
        oracle.fail = true;
        assert_eq!(find_split_offset(&doc, node(), 5.0, &oracle), None);
        assert!(try_find_split_offset(&doc, node(), 5.0, &oracle).is_err());
    }

    #[test]
    fn test_empty_and_non_text_nodes() {
        let doc = single("");
        assert_eq!(find_split_offset(&doc, node(), 0.0, &LineOracle::new()), None);

        let mut doc = Document::new();
        doc.add_page(Page::generic(vec![Block::bullets(["a"])]));
        assert_eq!(find_split_offset(&doc, node(), 0.0, &LineOracle::new()), None);
    }

    #[test]
    fn test_text_starting_below_limit() {
        let mut doc = Document::new();
        doc.add_page(Page::generic(vec![
            Block::paragraph("a".repeat(2000)),
            Block::paragraph("tail"),
        ]));
        let oracle = MonospaceOracle::default();
        let second = NodeRef::block(0, Track::Main, 1);
        let top = oracle.node_rect(&doc, second).unwrap().top;
        assert_eq!(find_split_offset(&doc, second, top - 1.0, &oracle), Some(0));
    }

    #[test]
    fn test_boundary_property_with_monospace_oracle() {
        let text = "Lorem ipsum dolor sit amet, ".repeat(40);
        let doc = single(&text);
        let oracle = MonospaceOracle::default();
        let limit = 48.0 + 7.0 * 20.0 + 5.0;
        let k = find_split_offset(&doc, node(), limit, &oracle).unwrap();
        assert!(k > 0 && k < text.len());

        let text_node = node().text();
        let kept = oracle.text_rect(&doc, text_node, 0..k).unwrap();
        let next = k + text[k..].graphemes(true).next().unwrap().len();
        let over = oracle.text_rect(&doc, text_node, 0..next).unwrap();
        assert!(kept.bottom <= limit);
        assert!(over.bottom > limit);
    }
}
