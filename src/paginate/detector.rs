//! Overflow detection.

use super::PaginationOptions;
use crate::layout::LayoutOracle;
use crate::model::Document;

/// Check whether a page has grown past the printable threshold.
///
/// Cover pages never overflow. A page that cannot be measured is treated
/// as fitting.
pub fn is_overflowing<O: LayoutOracle + ?Sized>(
    doc: &Document,
    page: usize,
    oracle: &O,
    options: &PaginationOptions,
) -> bool {
    match doc.pages.get(page) {
        Some(p) if !p.is_cover() => {}
        _ => return false,
    }

    match oracle.page_rect(doc, page) {
        Ok(rect) => rect.height() > options.page_height_threshold,
        Err(e) => {
            log::debug!("Page {} not measurable, assuming it fits: {}", page + 1, e);
            false
        }
    }
}
