//! Document-level types.

use super::{Block, Page, Track};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A rendered multi-page document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    #[serde(default)]
    pub metadata: Metadata,

    /// Pages in print order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the number of content (non-cover) pages.
    pub fn content_page_count(&self) -> usize {
        self.pages.iter().filter(|p| !p.is_cover()).count()
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get a block by position.
    pub fn block(&self, page: usize, track: Track, index: usize) -> Option<&Block> {
        self.pages.get(page)?.track(track)?.get(index)
    }

    /// Get a mutable block by position.
    pub fn block_mut(&mut self, page: usize, track: Track, index: usize) -> Option<&mut Block> {
        self.pages.get_mut(page)?.track_mut(track)?.get_mut(index)
    }

    /// Get plain text content of the entire document.
    ///
    /// This is the content that pagination preserves: the same string
    /// before and after a pass, whatever splits were made.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Concatenated text of every block in reading order, with no
    /// separators, so that split fragments rejoin exactly.
    pub fn flowing_text(&self) -> String {
        let mut text = String::new();
        for block in self.pages.iter().flat_map(|page| page.layout.blocks()) {
            push_block_text(&mut text, block);
        }
        text
    }

    /// Like [`flowing_text`](Self::flowing_text), restricted to one track.
    ///
    /// A column continues on the same column of the next page, so for
    /// two-column documents this is the order a reader follows.
    pub fn track_text(&self, track: Track) -> String {
        let mut text = String::new();
        for page in &self.pages {
            push_track_text(&mut text, page, track);
        }
        text
    }
}

fn push_track_text(text: &mut String, page: &Page, track: Track) {
    for block in page.track(track).into_iter().flatten() {
        push_block_text(text, block);
    }
}

fn push_block_text(text: &mut String, block: &Block) {
    match block {
        Block::BulletList(list) => list.items.iter().for_each(|item| text.push_str(item)),
        other => text.push_str(&other.plain_text()),
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Subject the document was assembled for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageLayout;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.flowing_text(), "");
    }

    #[test]
    fn test_flowing_text_rejoins_fragments() {
        let mut doc = Document::new();
        doc.add_page(Page::generic(vec![Block::paragraph("Hello, wo")]));
        doc.add_page(Page::generic(vec![Block::paragraph("rld!")]));
        assert_eq!(doc.flowing_text(), "Hello, world!");
        assert_eq!(doc.plain_text(), "Hello, wo\n\nrld!");
    }

    #[test]
    fn test_track_text_follows_columns() {
        let mut doc = Document::new();
        doc.add_page(Page::two_column(
            vec![Block::paragraph("L1")],
            vec![Block::paragraph("R1")],
        ));
        doc.add_page(Page::two_column(vec![Block::paragraph("L2")], Vec::new()));
        assert_eq!(doc.track_text(Track::Left), "L1L2");
        assert_eq!(doc.track_text(Track::Right), "R1");
        assert_eq!(doc.flowing_text(), "L1R1L2");
    }

    #[test]
    fn test_flowing_text_includes_unrecognized_pages() {
        let mut doc = Document::new();
        doc.add_page(Page::generic(vec![Block::paragraph("A")]));
        doc.add_page(Page::content(PageLayout::Unrecognized {
            shape: "grid".to_string(),
            left: None,
            right: None,
            blocks: Some(vec![Block::paragraph("B")]),
        }));
        assert_eq!(doc.flowing_text(), "AB");
        assert_eq!(doc.track_text(Track::Main), "A");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "metadata": {"title": "Report"},
            "pages": [
                {"kind": "cover", "layout": {"shape": "generic"}, "footer": {"label": "Cover"}},
                {"layout": {"shape": "two_column",
                            "left": [{"kind": "paragraph", "text": "x"}]}}
            ]
        }"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.content_page_count(), 1);
        assert_eq!(doc.metadata.title.as_deref(), Some("Report"));
        assert!(doc.block(1, Track::Left, 0).unwrap().is_paragraph());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Document::from_json("{not json").is_err());
    }
}
