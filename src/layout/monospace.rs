//! Fixed-metric layout oracle.
//!
//! Every grapheme advances by the same width and wraps at the track edge;
//! every line has the same height. Pages grow past their nominal height
//! when their content does, the way a print stylesheet with `min-height`
//! renders before pagination.

use super::{LayoutOracle, NodePart, NodeRef, Rect};
use crate::error::{Error, Result};
use crate::model::{Block, Document, Page, PageLayout, Track};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Geometry of the page template, in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutMetrics {
    /// Page width
    pub page_width: f32,

    /// Nominal page height; pages never render shorter than this
    pub page_height: f32,

    /// Space above the header
    pub padding_top: f32,

    /// Space below the footer
    pub padding_bottom: f32,

    /// Horizontal page padding on each side
    pub padding_x: f32,

    /// Height of a visible header
    pub header_height: f32,

    /// Height of the footer
    pub footer_height: f32,

    /// Gap between the two columns
    pub column_gap: f32,

    /// Share of the inner width given to the left column
    pub left_column_ratio: f32,

    /// Advance of one grapheme
    pub glyph_advance: f32,

    /// Height of one line of text
    pub line_height: f32,

    /// Vertical gap between blocks
    pub block_gap: f32,

    /// Inner padding of insight boxes
    pub box_padding: f32,

    /// Height of an insight box label
    pub label_height: f32,

    /// Vertical gap between list items
    pub item_gap: f32,

    /// Indentation of list items
    pub list_indent: f32,
}

impl LayoutMetrics {
    /// A4 at 96 DPI (794 x 1123 px).
    pub fn a4() -> Self {
        Self {
            page_width: 794.0,
            page_height: 1123.0,
            padding_top: 48.0,
            padding_bottom: 40.0,
            padding_x: 48.0,
            header_height: 72.0,
            footer_height: 56.0,
            column_gap: 32.0,
            left_column_ratio: 0.62,
            glyph_advance: 8.0,
            line_height: 20.0,
            block_gap: 16.0,
            box_padding: 16.0,
            label_height: 24.0,
            item_gap: 6.0,
            list_indent: 20.0,
        }
    }

    /// Set the line height.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the glyph advance.
    pub fn with_glyph_advance(mut self, advance: f32) -> Self {
        self.glyph_advance = advance;
        self
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::a4()
    }
}

/// A [`LayoutOracle`] over fixed glyph metrics.
#[derive(Debug, Clone, Default)]
pub struct MonospaceOracle {
    metrics: LayoutMetrics,
}

impl MonospaceOracle {
    /// Create an oracle with the given metrics.
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }

    /// Metrics in use.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Rendered height of a page.
    pub fn page_height(&self, page: &Page) -> f32 {
        let m = &self.metrics;
        let content_bottom = page
            .tracks()
            .iter()
            .map(|track| self.track_bottom(page, *track))
            .fold(self.content_top(page), f32::max);
        (content_bottom + m.footer_height + m.padding_bottom).max(m.page_height)
    }

    /// Number of text lines `text` wraps to in a box `width` wide.
    pub fn line_count(&self, text: &str, width: f32) -> usize {
        let per_line = self.chars_per_line(width);
        if text.is_empty() {
            return 0;
        }
        let mut lines = 1;
        let mut col = 0;
        for grapheme in text.graphemes(true) {
            if grapheme == "\n" || grapheme == "\r\n" {
                lines += 1;
                col = 0;
                continue;
            }
            if col == per_line {
                lines += 1;
                col = 0;
            }
            col += 1;
        }
        lines
    }

    fn chars_per_line(&self, width: f32) -> usize {
        ((width / self.metrics.glyph_advance).floor() as usize).max(1)
    }

    fn content_top(&self, page: &Page) -> f32 {
        let m = &self.metrics;
        let header = match &page.header {
            Some(header) if header.visible => m.header_height,
            _ => 0.0,
        };
        m.padding_top + header
    }

    /// Horizontal extent of a track, page-local.
    fn track_span(&self, page: &Page, track: Track) -> Option<(f32, f32)> {
        let m = &self.metrics;
        let inner = m.page_width - 2.0 * m.padding_x;
        match (&page.layout, track) {
            (PageLayout::TwoColumn { .. }, Track::Left) => {
                let width = (inner - m.column_gap) * m.left_column_ratio;
                Some((m.padding_x, m.padding_x + width))
            }
            (PageLayout::TwoColumn { .. }, Track::Right) => {
                let left = (inner - m.column_gap) * m.left_column_ratio;
                let start = m.padding_x + left + m.column_gap;
                Some((start, m.padding_x + inner))
            }
            (PageLayout::Generic { .. }, Track::Main) => Some((m.padding_x, m.padding_x + inner)),
            _ => None,
        }
    }

    fn track_bottom(&self, page: &Page, track: Track) -> f32 {
        let top = self.content_top(page);
        let (Some((left, right)), Some(blocks)) = (self.track_span(page, track), page.track(track))
        else {
            return top;
        };
        let width = right - left;
        let heights: f32 = blocks.iter().map(|b| self.block_height(b, width)).sum();
        let gaps = blocks.len().saturating_sub(1) as f32 * self.metrics.block_gap;
        top + heights + gaps
    }

    fn item_height(&self, item: &str, width: f32) -> f32 {
        let lines = self.line_count(item, width - self.metrics.list_indent).max(1);
        lines as f32 * self.metrics.line_height
    }

    fn block_height(&self, block: &Block, width: f32) -> f32 {
        let m = &self.metrics;
        match block {
            Block::Paragraph(p) => self.line_count(&p.text, width) as f32 * m.line_height,
            Block::InsightBox(b) => {
                let label = if b.label.is_some() { m.label_height } else { 0.0 };
                let lines = self.line_count(&b.text, width - 2.0 * m.box_padding);
                2.0 * m.box_padding + label + lines as f32 * m.line_height
            }
            Block::BulletList(list) => {
                let items: f32 = list.items.iter().map(|i| self.item_height(i, width)).sum();
                items + list.items.len().saturating_sub(1) as f32 * m.item_gap
            }
            Block::Opaque(o) => o.height.max(0.0),
        }
    }

    fn page_top(&self, doc: &Document, page: usize) -> Result<f32> {
        if page >= doc.pages.len() {
            return Err(unavailable(format!("page {} out of range", page)));
        }
        Ok(doc.pages[..page].iter().map(|p| self.page_height(p)).sum())
    }

    /// Page-local rectangle of a whole block.
    fn block_rect_local(&self, page: &Page, track: Track, index: usize) -> Result<Rect> {
        let (left, right) = self
            .track_span(page, track)
            .ok_or_else(|| unavailable(format!("no {:?} track", track)))?;
        let blocks = page
            .track(track)
            .ok_or_else(|| unavailable(format!("no {:?} track", track)))?;
        let block = blocks
            .get(index)
            .ok_or_else(|| unavailable(format!("block {} out of range", index)))?;

        let width = right - left;
        let top = blocks[..index]
            .iter()
            .map(|b| self.block_height(b, width) + self.metrics.block_gap)
            .sum::<f32>()
            + self.content_top(page);
        Ok(Rect::new(left, top, right, top + self.block_height(block, width)))
    }

    /// Page-local text origin, wrap width and text of a block's text node.
    fn text_frame<'a>(&self, block: &'a Block, rect: Rect) -> Result<(Rect, &'a str)> {
        let m = &self.metrics;
        match block {
            Block::Paragraph(p) => Ok((rect, &p.text)),
            Block::InsightBox(b) => {
                let label = if b.label.is_some() { m.label_height } else { 0.0 };
                let frame = Rect::new(
                    rect.left + m.box_padding,
                    rect.top + m.box_padding + label,
                    rect.right - m.box_padding,
                    rect.bottom - m.box_padding,
                );
                Ok((frame, &b.text))
            }
            other => Err(unavailable(format!("{} has no text node", other.kind_name()))),
        }
    }

    fn item_rect_local(&self, block: &Block, rect: Rect, index: usize) -> Result<Rect> {
        let Block::BulletList(list) = block else {
            return Err(unavailable(format!("{} has no items", block.kind_name())));
        };
        if index >= list.items.len() {
            return Err(unavailable(format!("item {} out of range", index)));
        }
        let width = rect.width();
        let top = list.items[..index]
            .iter()
            .map(|i| self.item_height(i, width) + self.metrics.item_gap)
            .sum::<f32>()
            + rect.top;
        let height = self.item_height(&list.items[index], width);
        Ok(Rect::new(rect.left + self.metrics.list_indent, top, rect.right, top + height))
    }

    fn node_rect_local(&self, page: &Page, node: NodeRef) -> Result<Rect> {
        let rect = self.block_rect_local(page, node.track, node.block)?;
        let block = page
            .track(node.track)
            .and_then(|blocks| blocks.get(node.block))
            .ok_or_else(|| unavailable("block vanished".to_string()))?;
        match node.part {
            NodePart::Whole => Ok(rect),
            NodePart::Text => self.text_frame(block, rect).map(|(frame, text)| {
                let lines = self.line_count(text, frame.width());
                Rect::new(
                    frame.left,
                    frame.top,
                    frame.right,
                    frame.top + lines as f32 * self.metrics.line_height,
                )
            }),
            NodePart::Item(index) => self.item_rect_local(block, rect, index),
        }
    }
}

impl LayoutOracle for MonospaceOracle {
    fn page_rect(&self, doc: &Document, page: usize) -> Result<Rect> {
        let top = self.page_top(doc, page)?;
        let height = self.page_height(&doc.pages[page]);
        Ok(Rect::new(0.0, top, self.metrics.page_width, top + height))
    }

    fn region_rect(&self, doc: &Document, page: usize, track: Track) -> Result<Rect> {
        let top = self.page_top(doc, page)?;
        let page = &doc.pages[page];
        let (left, right) = self
            .track_span(page, track)
            .ok_or_else(|| unavailable(format!("no {:?} track", track)))?;
        let rect = Rect::new(
            left,
            self.content_top(page),
            right,
            self.track_bottom(page, track),
        );
        Ok(rect.offset_y(top))
    }

    fn node_rect(&self, doc: &Document, node: NodeRef) -> Result<Rect> {
        let top = self.page_top(doc, node.page)?;
        Ok(self.node_rect_local(&doc.pages[node.page], node)?.offset_y(top))
    }

    fn text_rect(&self, doc: &Document, node: NodeRef, range: Range<usize>) -> Result<Rect> {
        let page_top = self.page_top(doc, node.page)?;
        let page = &doc.pages[node.page];
        let rect = self.block_rect_local(page, node.track, node.block)?;
        let block = page
            .track(node.track)
            .and_then(|blocks| blocks.get(node.block))
            .ok_or_else(|| unavailable("block vanished".to_string()))?;
        let (frame, text) = self.text_frame(block, rect)?;

        if range.start > range.end
            || range.end > text.len()
            || !text.is_char_boundary(range.start)
            || !text.is_char_boundary(range.end)
        {
            return Err(unavailable(format!("invalid text range {:?}", range)));
        }

        let width = frame.width();
        let line_height = self.metrics.line_height;
        let first_line = if range.start == 0 {
            0
        } else {
            let next = text[range.start..]
                .graphemes(true)
                .next()
                .map_or(range.start, |g| range.start + g.len());
            self.line_count(&text[..next], width).saturating_sub(1)
        };
        let top = frame.top + first_line as f32 * line_height;
        let bottom = frame.top + self.line_count(&text[..range.end], width) as f32 * line_height;

        Ok(Rect::new(frame.left, top, frame.right, bottom.max(top)).offset_y(page_top))
    }
}

fn unavailable(reason: String) -> Error {
    Error::MeasurementUnavailable(reason)
}
