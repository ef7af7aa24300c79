//! Splitting one overflowing page.

use super::relocator::{relocate, Relocation};
use super::report::{PaginationReport, PaginationWarning};
use super::PaginationOptions;
use crate::layout::{LayoutOracle, NodeRef, Rect};
use crate::model::{Document, Page, PageTemplate, Track};

/// Result of splitting one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitOutcome {
    /// A continuation page was inserted right after the source page.
    Inserted,
    /// Nothing had to move; the continuation page was dropped.
    Discarded,
    /// The page was left as it is.
    Skipped,
}

/// Move everything below the cut line of `page` onto a new continuation
/// page inserted right after it.
///
/// Blocks are walked in order on every track. A block ending above the cut
/// stays, one starting below it moves whole, and one crossing it is handed
/// to the per-kind strategy. Once a track has given up a block, all its
/// later blocks follow so reading order survives the page break.
///
/// The continuation may overflow in turn; the driver visits it next.
pub fn split_page<O: LayoutOracle + ?Sized>(
    doc: &mut Document,
    page: usize,
    oracle: &O,
    options: &PaginationOptions,
    report: &mut PaginationReport,
) -> SplitOutcome {
    let Some(source) = doc.pages.get(page) else {
        return SplitOutcome::Skipped;
    };
    let template = match PageTemplate::from_page(source) {
        Ok(template) => template,
        Err(e) => {
            log::debug!("No template for page {}: {}", page + 1, e);
            report.warn(PaginationWarning::NoContentContainer {
                page: page + 1,
                shape: source.layout.shape_name().to_string(),
            });
            return SplitOutcome::Skipped;
        }
    };
    let tracks = source.tracks();

    let page_top = match oracle.page_rect(doc, page) {
        Ok(rect) => rect.top,
        Err(e) => {
            report.warn(PaginationWarning::MeasurementUnavailable {
                page: page + 1,
                reason: e.to_string(),
            });
            return SplitOutcome::Skipped;
        }
    };
    let limit_y = page_top + options.content_limit;

    let mut successor = template.instantiate();
    for &track in tracks {
        let mut walk = TrackWalk {
            doc: &mut *doc,
            successor: &mut successor,
            page,
            track,
            limit_y,
            report: &mut *report,
        };
        walk.run(oracle, options);
    }

    if successor.is_empty() {
        log::debug!("Nothing moved off page {}, dropping its continuation", page + 1);
        report.pages_discarded += 1;
        return SplitOutcome::Discarded;
    }

    log::debug!(
        "Page {} continues on a new page with {} blocks",
        page + 1,
        successor.block_count()
    );
    doc.pages.insert(page + 1, successor);
    report.pages_created += 1;
    SplitOutcome::Inserted
}

/// State of the walk over one track of the source page.
struct TrackWalk<'a> {
    doc: &'a mut Document,
    successor: &'a mut Page,
    page: usize,
    track: Track,
    limit_y: f32,
    report: &'a mut PaginationReport,
}

impl TrackWalk<'_> {
    fn run<O: LayoutOracle + ?Sized>(&mut self, oracle: &O, options: &PaginationOptions) {
        let mut index = 0;
        let mut spilled = false;

        while index < self.len() {
            if spilled {
                if !self.move_block(index) {
                    index += 1;
                }
                continue;
            }

            // Positions shift after every move or split, so measure afresh.
            let node = NodeRef::block(self.page, self.track, index);
            let rect = match oracle.node_rect(&*self.doc, node) {
                Ok(rect) => rect,
                Err(e) => {
                    self.unmeasured(e.to_string());
                    index += 1;
                    continue;
                }
            };

            if rect.bottom <= self.limit_y {
                index += 1;
                continue;
            }
            if rect.top > self.limit_y {
                spilled = self.move_block(index);
                if !spilled {
                    index += 1;
                }
                continue;
            }

            match relocate(self.doc, node, self.limit_y, oracle, options) {
                Ok(Relocation::Keep) => index += 1,
                Ok(Relocation::Split(continuation)) => {
                    self.report.blocks_split += 1;
                    if let Err(block) = self.successor.push_block(self.track, continuation) {
                        if let Some(blocks) = self.doc.pages[self.page].track_mut(self.track) {
                            blocks.insert(index + 1, block);
                        }
                    }
                    spilled = true;
                    index += 1;
                }
                Ok(Relocation::Unsplittable) => {
                    if self.is_oversized(oracle, rect, options) {
                        let kind = self.kind_at(index);
                        self.report.warn(PaginationWarning::UnsplittableOverflow {
                            page: self.page + 1,
                            track: self.track,
                            block: index,
                            kind,
                        });
                        index += 1;
                    } else {
                        spilled = self.move_block(index);
                        if !spilled {
                            index += 1;
                        }
                    }
                }
                Err(e) => {
                    self.unmeasured(e.to_string());
                    index += 1;
                }
            }
        }
    }

    /// A block that starts at the top of its region and still crosses the
    /// cut would cross it on any page.
    fn is_oversized<O: LayoutOracle + ?Sized>(
        &self,
        oracle: &O,
        rect: Rect,
        options: &PaginationOptions,
    ) -> bool {
        let region_top = match oracle.region_rect(&*self.doc, self.page, self.track) {
            Ok(region) => region.top,
            // Without a region, assume the worst and keep the block.
            Err(_) => return true,
        };
        rect.top - region_top <= options.top_epsilon && rect.bottom > self.limit_y
    }

    fn len(&self) -> usize {
        self.doc.pages[self.page]
            .track(self.track)
            .map_or(0, Vec::len)
    }

    fn kind_at(&self, index: usize) -> String {
        self.doc
            .block(self.page, self.track, index)
            .map_or("unknown", |b| b.kind_name())
            .to_string()
    }

    /// Move block `index` whole to the successor. Returns false if it had to
    /// stay.
    fn move_block(&mut self, index: usize) -> bool {
        let Some(blocks) = self.doc.pages[self.page].track_mut(self.track) else {
            return false;
        };
        let block = blocks.remove(index);
        log::debug!(
            "Moving {} from page {} to its continuation",
            block.kind_name(),
            self.page + 1
        );
        match self.successor.push_block(self.track, block) {
            Ok(()) => {
                self.report.blocks_moved += 1;
                true
            }
            Err(block) => {
                blocks.insert(index, block);
                false
            }
        }
    }

    fn unmeasured(&mut self, reason: String) {
        self.report.warn(PaginationWarning::MeasurementUnavailable {
            page: self.page + 1,
            reason,
        });
    }
}
