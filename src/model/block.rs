//! Block-level types.

use serde::{Deserialize, Serialize};

/// An atomic content unit within a page.
///
/// The kind is resolved once, when the block is constructed or
/// deserialized. The templating stage tags blocks with presentation
/// markers (`analysis-text`, `core-insight-box`, `table`, ...) which are
/// accepted alongside the canonical tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", from = "TaggedBlock")]
pub enum Block {
    /// A paragraph of running text
    Paragraph(TextBlock),

    /// A single-paragraph callout with a floating label
    InsightBox(InsightBox),

    /// A list of short items, split only between items
    BulletList(BulletList),

    /// Tables, images and composite widgets; never split
    Opaque(OpaqueBlock),
}

/// Input form of [`Block`].
///
/// The `table`, `image` and `widget` markers each name an opaque block of
/// that kind and take precedence over any `what` field.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TaggedBlock {
    #[serde(alias = "analysis-text", alias = "text")]
    Paragraph(TextBlock),
    #[serde(alias = "core-insight-box", alias = "insight-box")]
    InsightBox(InsightBox),
    #[serde(alias = "predictions-container", alias = "list")]
    BulletList(BulletList),
    Opaque(OpaqueBlock),
    Table(OpaqueBlock),
    Image(OpaqueBlock),
    Widget(OpaqueBlock),
}

impl From<TaggedBlock> for Block {
    fn from(tagged: TaggedBlock) -> Self {
        let marked = |what, block: OpaqueBlock| Block::Opaque(OpaqueBlock { what, ..block });
        match tagged {
            TaggedBlock::Paragraph(p) => Block::Paragraph(p),
            TaggedBlock::InsightBox(b) => Block::InsightBox(b),
            TaggedBlock::BulletList(l) => Block::BulletList(l),
            TaggedBlock::Opaque(o) => Block::Opaque(o),
            TaggedBlock::Table(o) => marked(OpaqueKind::Table, o),
            TaggedBlock::Image(o) => marked(OpaqueKind::Image, o),
            TaggedBlock::Widget(o) => marked(OpaqueKind::Widget, o),
        }
    }
}

impl Block {
    /// Create a paragraph block with default style.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(TextBlock::new(text))
    }

    /// Create a labelled insight box.
    pub fn insight(label: impl Into<String>, text: impl Into<String>) -> Self {
        Block::InsightBox(InsightBox {
            label: Some(label.into()),
            text: text.into(),
            style: BlockStyle::default(),
        })
    }

    /// Create a bullet list from items.
    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::BulletList(BulletList {
            items: items.into_iter().map(Into::into).collect(),
            style: BlockStyle::default(),
        })
    }

    /// Create an opaque block of fixed rendered height.
    pub fn opaque(what: OpaqueKind, height: f32, text: impl Into<String>) -> Self {
        Block::Opaque(OpaqueBlock {
            what,
            height,
            text: text.into(),
            style: BlockStyle::default(),
        })
    }

    /// Short name of the block kind, for logs and reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::InsightBox(_) => "insight_box",
            Block::BulletList(_) => "bullet_list",
            Block::Opaque(_) => "opaque",
        }
    }

    /// The text node the segmenter works on, if this kind has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Paragraph(p) => Some(&p.text),
            Block::InsightBox(b) => Some(&b.text),
            _ => None,
        }
    }

    /// Style wrapper of the block.
    pub fn style(&self) -> &BlockStyle {
        match self {
            Block::Paragraph(p) => &p.style,
            Block::InsightBox(b) => &b.style,
            Block::BulletList(l) => &l.style,
            Block::Opaque(o) => &o.style,
        }
    }

    /// Plain text content of the block in reading order.
    ///
    /// List items are joined by newlines; an insight label is not part of
    /// the content since it is decoration rendered once.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.text.clone(),
            Block::InsightBox(b) => b.text.clone(),
            Block::BulletList(l) => l.items.join("\n"),
            Block::Opaque(o) => o.text.clone(),
        }
    }

    /// Check if the block carries no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Block::Paragraph(p) => p.text.is_empty(),
            Block::InsightBox(b) => b.text.is_empty(),
            Block::BulletList(l) => l.items.is_empty(),
            Block::Opaque(_) => false,
        }
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is opaque.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Block::Opaque(_))
    }
}

/// Presentation wrapper carried by every block.
///
/// Blocks produced by splitting copy the style of their source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    /// Presentation class assigned by the templating stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

/// A paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// The text content
    pub text: String,

    /// Block style
    #[serde(default)]
    pub style: BlockStyle,
}

impl TextBlock {
    /// Create a new paragraph with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: BlockStyle::default(),
        }
    }

    /// Cut the text at `offset`, keeping the prefix and returning the
    /// suffix as a new paragraph with the same style.
    pub fn split_off(&mut self, offset: usize) -> TextBlock {
        TextBlock {
            text: self.text.split_off(offset),
            style: self.style.clone(),
        }
    }
}

/// A callout box with a label rendered once, above its first fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightBox {
    /// Floating label, `None` on continuation fragments
    #[serde(default)]
    pub label: Option<String>,

    /// The callout text
    pub text: String,

    /// Block style
    #[serde(default)]
    pub style: BlockStyle,
}

impl InsightBox {
    /// Cut the text at `offset`. The returned continuation box has no label.
    pub fn split_off(&mut self, offset: usize) -> InsightBox {
        InsightBox {
            label: None,
            text: self.text.split_off(offset),
            style: self.style.clone(),
        }
    }
}

/// A bullet list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletList {
    /// List items in order
    pub items: Vec<String>,

    /// Block style
    #[serde(default)]
    pub style: BlockStyle,
}

impl BulletList {
    /// Move items `[at..]` into a new list instance with the same style.
    pub fn split_off(&mut self, at: usize) -> BulletList {
        BulletList {
            items: self.items.split_off(at),
            style: self.style.clone(),
        }
    }
}

/// A block the engine never cuts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpaqueBlock {
    /// What the block renders
    #[serde(default)]
    pub what: OpaqueKind,

    /// Intrinsic rendered height in pixels
    pub height: f32,

    /// Textual content (cell text, caption, alt text)
    #[serde(default)]
    pub text: String,

    /// Block style
    #[serde(default)]
    pub style: BlockStyle,
}

/// Kind of opaque content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpaqueKind {
    /// A table
    Table,
    /// An image or chart
    Image,
    /// A composite widget
    #[default]
    Widget,
}

impl OpaqueKind {
    /// Lowercase name, as serialized.
    pub fn name(&self) -> &'static str {
        match self {
            OpaqueKind::Table => "table",
            OpaqueKind::Image => "image",
            OpaqueKind::Widget => "widget",
        }
    }
}
