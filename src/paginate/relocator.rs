//! Per-kind strategies for blocks that straddle the cut line.

use super::segmenter::try_find_split_offset;
use super::PaginationOptions;
use crate::error::Result;
use crate::layout::{LayoutOracle, NodeRef};
use crate::model::{Block, Document};

/// What to do with a straddling block.
#[derive(Debug, Clone, PartialEq)]
pub enum Relocation {
    /// The block fits after all; leave it.
    Keep,
    /// The source block was truncated; this continuation goes to the
    /// successor page.
    Split(Block),
    /// No clean split exists; move the block whole unless it is taller
    /// than a page.
    Unsplittable,
}

/// Decide how to divide a straddling block, truncating it in place when a
/// clean split exists.
///
/// Measurement failures are returned as errors and leave the block
/// untouched.
pub fn relocate<O: LayoutOracle + ?Sized>(
    doc: &mut Document,
    node: NodeRef,
    limit_y: f32,
    oracle: &O,
    options: &PaginationOptions,
) -> Result<Relocation> {
    let Some(block) = doc.block(node.page, node.track, node.block) else {
        return Ok(Relocation::Keep);
    };

    match block {
        Block::Paragraph(_) => split_text(doc, node, limit_y, oracle),
        Block::InsightBox(_) => {
            let text = oracle.node_rect(doc, node.text())?;
            if limit_y - text.top < options.min_visible_allowance {
                log::debug!(
                    "Insight box shows {:.0}px above the cut, moving it whole",
                    limit_y - text.top
                );
                return Ok(Relocation::Unsplittable);
            }
            split_text(doc, node, limit_y, oracle)
        }
        Block::BulletList(list) => {
            let mut first_over = None;
            for index in 0..list.items.len() {
                if oracle.node_rect(doc, node.item(index))?.bottom > limit_y {
                    first_over = Some(index);
                    break;
                }
            }
            match first_over {
                None => Ok(Relocation::Keep),
                Some(0) => Ok(Relocation::Unsplittable),
                Some(at) => {
                    let Some(Block::BulletList(list)) =
                        doc.block_mut(node.page, node.track, node.block)
                    else {
                        return Ok(Relocation::Keep);
                    };
                    Ok(Relocation::Split(Block::BulletList(list.split_off(at))))
                }
            }
        }
        Block::Opaque(_) => Ok(Relocation::Unsplittable),
    }
}

/// Shared text strategy for paragraphs and insight boxes.
fn split_text<O: LayoutOracle + ?Sized>(
    doc: &mut Document,
    node: NodeRef,
    limit_y: f32,
    oracle: &O,
) -> Result<Relocation> {
    let Some(offset) = try_find_split_offset(doc, node, limit_y, oracle)? else {
        return Ok(Relocation::Keep);
    };
    if offset == 0 {
        return Ok(Relocation::Unsplittable);
    }

    let Some(block) = doc.block_mut(node.page, node.track, node.block) else {
        return Ok(Relocation::Keep);
    };
    let text = block.text().unwrap_or_default();
    // A whitespace-only tail would leave an empty-looking block behind.
    if offset >= text.len() || text[offset..].trim().is_empty() {
        return Ok(Relocation::Keep);
    }

    let continuation = match block {
        Block::Paragraph(p) => Block::Paragraph(p.split_off(offset)),
        Block::InsightBox(b) => Block::InsightBox(b.split_off(offset)),
        _ => return Ok(Relocation::Keep),
    };
    log::debug!(
        "Split {} at byte {}, {} bytes continue on the next page",
        continuation.kind_name(),
        offset,
        continuation.text().map_or(0, str::len)
    );
    Ok(Relocation::Split(continuation))
}
