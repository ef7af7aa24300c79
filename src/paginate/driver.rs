//! The pagination loop.

use super::detector::is_overflowing;
use super::renumber::renumber;
use super::report::{PaginationReport, PaginationWarning};
use super::splitter::split_page;
use super::PaginationOptions;
use crate::layout::LayoutOracle;
use crate::model::Document;

/// Re-paginate `doc` in place until no visited page overflows.
///
/// The cursor walks the live page sequence, so continuation pages inserted
/// by a split are visited right after their source and may split again.
/// Cover pages are skipped without counting as a step. The pass stops at
/// `options.max_iterations` steps and keeps what it has done so far.
/// Footers are renumbered in every case.
///
/// Options are taken as given; validate them first with
/// [`PaginationOptions::validate`].
pub fn paginate<O: LayoutOracle + ?Sized>(
    doc: &mut Document,
    oracle: &O,
    options: &PaginationOptions,
) -> PaginationReport {
    let mut report = PaginationReport::new(doc.page_count());
    let mut cursor = 0;

    while cursor < doc.page_count() {
        if doc.pages[cursor].is_cover() {
            cursor += 1;
            continue;
        }

        if report.steps >= options.max_iterations {
            report.iteration_cap_hit = true;
            let unvisited_pages = doc.pages[cursor..]
                .iter()
                .filter(|p| !p.is_cover())
                .count();
            report.warn(PaginationWarning::IterationCapExceeded {
                steps: report.steps,
                unvisited_pages,
            });
            break;
        }
        report.steps += 1;

        if is_overflowing(doc, cursor, oracle, options) {
            log::debug!("Page {} overflows, splitting", cursor + 1);
            report.overflowing_pages += 1;
            split_page(doc, cursor, oracle, options, &mut report);
        }
        cursor += 1;
    }

    renumber(doc);
    report.pages_after = doc.page_count();

    log::info!(
        "Paginated {} pages into {} ({} steps, {} split, {} moved, {} warnings)",
        report.pages_before,
        report.pages_after,
        report.steps,
        report.blocks_split,
        report.blocks_moved,
        report.warnings.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MonospaceOracle;
    use crate::model::{Block, OpaqueKind, Page};

    #[test]
    fn test_fitting_document_is_untouched() {
        let mut doc = Document::new();
        doc.add_page(Page::cover("Cover"));
        doc.add_page(Page::generic(vec![Block::paragraph("short")]));
        let before = doc.flowing_text();

        let report = paginate(&mut doc, &MonospaceOracle::default(), &PaginationOptions::default());
        assert_eq!(report.steps, 1);
        assert_eq!(report.overflowing_pages, 0);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.flowing_text(), before);
        assert_eq!(doc.pages[1].footer.label, "Page 2");
        assert!(report.is_clean());
    }

    #[test]
    fn test_continuation_chain() {
        // 150 lines at 20px each need several pages.
        let mut doc = Document::new();
        doc.add_page(Page::generic(vec![Block::paragraph("a".repeat(87 * 150))]));
        let before = doc.flowing_text();

        let oracle = MonospaceOracle::default();
        let options = PaginationOptions::default();
        let report = paginate(&mut doc, &oracle, &options);

        assert!(doc.page_count() >= 4);
        assert_eq!(report.pages_created, doc.page_count() - 1);
        assert_eq!(doc.flowing_text(), before);
        for page in 0..doc.page_count() {
            assert!(!is_overflowing(&doc, page, &oracle, &options));
        }
    }

    #[test]
    fn test_cap_stops_the_pass() {
        let mut doc = Document::new();
        for _ in 0..5 {
            doc.add_page(Page::generic(vec![
                Block::opaque(OpaqueKind::Image, 1000.0, ""),
                Block::paragraph("below the cut"),
            ]));
        }

        let options = PaginationOptions::default().with_max_iterations(3);
        let report = paginate(&mut doc, &MonospaceOracle::default(), &options);
        assert!(report.iteration_cap_hit);
        assert_eq!(report.steps, 3);
        assert!(matches!(
            report.warnings.last(),
            Some(PaginationWarning::IterationCapExceeded { steps: 3, .. })
        ));
    }
}
