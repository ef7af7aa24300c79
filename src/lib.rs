//! # repaginate
//!
//! Overflow-driven re-pagination for rendered, fixed-size print documents.
//!
//! A document is assembled first and paginated afterwards: any page whose
//! rendered height exceeds the printable threshold has its trailing content
//! moved onto a continuation page inserted right after it. Paragraphs and
//! insight boxes are cut at the last grapheme that still fits, bullet lists
//! between items, and opaque blocks (tables, images, widgets) move whole.
//! All geometry comes from a [`LayoutOracle`], so the engine runs against a
//! headless renderer or the built-in [`MonospaceOracle`].
//!
//! ## Quick Start
//!
//! ```
//! use repaginate::{Block, Document, Page, Paginator};
//!
//! fn main() -> repaginate::Result<()> {
//!     let mut doc = Document::new();
//!     doc.add_page(Page::generic(vec![Block::paragraph("lorem ipsum ".repeat(1000))]));
//!
//!     let report = Paginator::new().run(&mut doc)?;
//!     assert!(doc.page_count() > 1);
//!     assert_eq!(report.pages_after, doc.page_count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Content preserving**: text is only ever cut, never dropped or reordered
//! - **Per-kind strategies**: paragraphs, callouts, lists and opaque blocks
//! - **Bounded**: a hard step cap stops runaway page chains
//! - **Reported**: every degraded condition ends up in the [`PaginationReport`]
//! - **Snapshots**: documents load from and save to JSON

pub mod error;
pub mod layout;
pub mod model;
pub mod paginate;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{LayoutMetrics, LayoutOracle, MonospaceOracle, NodePart, NodeRef, Rect};
pub use model::{
    Block, BlockStyle, BulletList, Document, Footer, Header, HeaderKind, InsightBox, Metadata,
    OpaqueBlock, OpaqueKind, Page, PageKind, PageLayout, PageTemplate, TextBlock, Track,
};
pub use paginate::{paginate, PaginationOptions, PaginationReport, PaginationWarning};
pub use render::JsonFormat;

use std::path::Path;

/// Paginate a JSON document file with default options and metrics.
///
/// # Example
///
/// ```no_run
/// use repaginate::paginate_file;
///
/// let (doc, report) = paginate_file("report.json").unwrap();
/// println!("{} pages, {} warnings", doc.page_count(), report.warnings.len());
/// ```
pub fn paginate_file<P: AsRef<Path>>(path: P) -> Result<(Document, PaginationReport)> {
    let result = Paginator::new().paginate_file(path)?;
    Ok((result.document, result.report))
}

/// Paginate a document given as JSON with default options and metrics.
pub fn paginate_json(json: &str) -> Result<(Document, PaginationReport)> {
    let result = Paginator::new().paginate_json(json)?;
    Ok((result.document, result.report))
}

/// Builder for pagination passes.
///
/// # Example
///
/// ```
/// use repaginate::{Block, Document, LayoutMetrics, Page, Paginator};
///
/// let mut doc = Document::new();
/// doc.add_page(Page::generic(vec![Block::bullets(["a"; 80])]));
///
/// let report = Paginator::new()
///     .with_metrics(LayoutMetrics::a4().with_line_height(24.0))
///     .with_max_iterations(20)
///     .run(&mut doc)?;
/// assert!(!report.iteration_cap_hit);
/// # Ok::<(), repaginate::Error>(())
/// ```
pub struct Paginator<O = MonospaceOracle> {
    oracle: O,
    options: PaginationOptions,
}

impl Paginator<MonospaceOracle> {
    /// Create a new builder measuring with default A4 metrics.
    pub fn new() -> Self {
        Self {
            oracle: MonospaceOracle::default(),
            options: PaginationOptions::default(),
        }
    }

    /// Measure with custom fixed metrics.
    pub fn with_metrics(mut self, metrics: LayoutMetrics) -> Self {
        self.oracle = MonospaceOracle::new(metrics);
        self
    }
}

impl Default for Paginator<MonospaceOracle> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: LayoutOracle> Paginator<O> {
    /// Measure with another oracle.
    pub fn with_oracle<P: LayoutOracle>(self, oracle: P) -> Paginator<P> {
        Paginator {
            oracle,
            options: self.options,
        }
    }

    /// Replace all pagination options.
    pub fn with_options(mut self, options: PaginationOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the overflow threshold in pixels.
    pub fn with_page_height_threshold(mut self, px: f32) -> Self {
        self.options = self.options.with_page_height_threshold(px);
        self
    }

    /// Set the cut line in pixels from the page top.
    pub fn with_content_limit(mut self, px: f32) -> Self {
        self.options = self.options.with_content_limit(px);
        self
    }

    /// Set the minimum visible text height for splitting an insight box.
    pub fn with_min_visible_allowance(mut self, px: f32) -> Self {
        self.options = self.options.with_min_visible_allowance(px);
        self
    }

    /// Set the step cap.
    pub fn with_max_iterations(mut self, steps: usize) -> Self {
        self.options = self.options.with_max_iterations(steps);
        self
    }

    /// Set the escape-valve tolerance in pixels.
    pub fn with_top_epsilon(mut self, px: f32) -> Self {
        self.options = self.options.with_top_epsilon(px);
        self
    }

    /// Options in use.
    pub fn options(&self) -> &PaginationOptions {
        &self.options
    }

    /// Oracle in use.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Paginate a document in place.
    ///
    /// Fails only if the options are invalid; everything met during the
    /// pass is reported in the returned [`PaginationReport`].
    pub fn run(&self, doc: &mut Document) -> Result<PaginationReport> {
        self.options.validate()?;
        Ok(paginate(doc, &self.oracle, &self.options))
    }

    /// Load a JSON document file and paginate it.
    pub fn paginate_file<P: AsRef<Path>>(&self, path: P) -> Result<PaginatedDocument> {
        self.options.validate()?;
        let document = Document::from_path(path)?;
        self.finish(document)
    }

    /// Parse a JSON document and paginate it.
    pub fn paginate_json(&self, json: &str) -> Result<PaginatedDocument> {
        self.options.validate()?;
        let document = Document::from_json(json)?;
        self.finish(document)
    }

    fn finish(&self, mut document: Document) -> Result<PaginatedDocument> {
        let report = self.run(&mut document)?;
        Ok(PaginatedDocument { document, report })
    }
}

/// A document after a pagination pass, with its report.
#[derive(Debug, Clone)]
pub struct PaginatedDocument {
    /// The paginated document
    pub document: Document,
    /// What the pass did
    pub report: PaginationReport,
}

impl PaginatedDocument {
    /// Serialize the document snapshot.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Render the page dump.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Serialize the report.
    pub fn report_json(&self, format: JsonFormat) -> Result<String> {
        render::report_to_json(&self.report, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
