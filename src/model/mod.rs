//! Document model types for rendered, paginated content.
//!
//! This module defines the in-memory form of the rendered document the
//! pagination engine works on. Blocks are tagged by kind once, when the
//! document is built or loaded; geometry is never stored here and is
//! always obtained from a [`LayoutOracle`](crate::layout::LayoutOracle).

mod block;
mod document;
mod page;
mod template;

pub use block::{Block, BlockStyle, BulletList, InsightBox, OpaqueBlock, OpaqueKind, TextBlock};
pub use document::{Document, Metadata};
pub use page::{Footer, Header, HeaderKind, Page, PageKind, PageLayout, Track};
pub use template::PageTemplate;
