//! Page-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// A single fixed-height printable page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Cover/separator or content page
    #[serde(default)]
    pub kind: PageKind,

    /// Content region(s)
    pub layout: PageLayout,

    /// Section header printed once per logical section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,

    /// Page footer
    #[serde(default)]
    pub footer: Footer,

    /// True for pages created by the splitter
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub continuation: bool,
}

impl Page {
    /// Create a two-column content page.
    pub fn two_column(left: Vec<Block>, right: Vec<Block>) -> Self {
        Self::content(PageLayout::TwoColumn { left, right })
    }

    /// Create a generic single-column content page.
    pub fn generic(blocks: Vec<Block>) -> Self {
        Self::content(PageLayout::Generic { blocks })
    }

    /// Create a content page with the given layout.
    pub fn content(layout: PageLayout) -> Self {
        Self {
            kind: PageKind::Content,
            layout,
            header: None,
            footer: Footer::default(),
            continuation: false,
        }
    }

    /// Create a cover/separator page with a fixed footer label.
    pub fn cover(label: impl Into<String>) -> Self {
        Self {
            kind: PageKind::Cover,
            layout: PageLayout::Generic { blocks: Vec::new() },
            header: None,
            footer: Footer::new(label),
            continuation: false,
        }
    }

    /// Attach a header.
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    /// Check if this is a cover/separator page.
    pub fn is_cover(&self) -> bool {
        self.kind == PageKind::Cover
    }

    /// Tracks present on this page, in reading order.
    pub fn tracks(&self) -> &'static [Track] {
        self.layout.tracks()
    }

    /// Blocks of one track.
    pub fn track(&self, track: Track) -> Option<&Vec<Block>> {
        self.layout.track(track)
    }

    /// Mutable blocks of one track.
    pub fn track_mut(&mut self, track: Track) -> Option<&mut Vec<Block>> {
        self.layout.track_mut(track)
    }

    /// Append a block to a track, handing it back if the track does not
    /// exist on this page.
    pub fn push_block(&mut self, track: Track, block: Block) -> Result<(), Block> {
        match self.track_mut(track) {
            Some(blocks) => {
                blocks.push(block);
                Ok(())
            }
            None => Err(block),
        }
    }

    /// Get plain text content of the page, tracks in reading order.
    pub fn plain_text(&self) -> String {
        self.layout
            .blocks()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check if the content region holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }

    /// Number of blocks across all tracks.
    pub fn block_count(&self) -> usize {
        self.layout.blocks().count()
    }
}

/// Page kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Cover or section separator, never touched by the engine
    Cover,
    /// Regular content page
    #[default]
    Content,
}

/// Shape of a page's content region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawLayout", into = "RawLayout")]
pub enum PageLayout {
    /// Two parallel columns
    TwoColumn {
        /// Left column blocks
        left: Vec<Block>,
        /// Right column blocks
        right: Vec<Block>,
    },

    /// A single generic column
    Generic {
        /// Column blocks
        blocks: Vec<Block>,
    },

    /// A content region the engine does not recognize.
    ///
    /// Its blocks are carried through untouched so that nothing is lost
    /// when the page is written back out.
    Unrecognized {
        /// Shape name as given by the input
        shape: String,
        /// Blocks given under `left`
        left: Option<Vec<Block>>,
        /// Blocks given under `right`
        right: Option<Vec<Block>>,
        /// Blocks given under `blocks`
        blocks: Option<Vec<Block>>,
    },
}

/// Wire form of [`PageLayout`]; any unknown `shape` is kept, not rejected.
#[derive(Serialize, Deserialize)]
struct RawLayout {
    shape: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    left: Option<Vec<Block>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right: Option<Vec<Block>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    blocks: Option<Vec<Block>>,
}

impl From<RawLayout> for PageLayout {
    fn from(raw: RawLayout) -> Self {
        match raw.shape.as_str() {
            "two_column" => PageLayout::TwoColumn {
                left: raw.left.unwrap_or_default(),
                right: raw.right.unwrap_or_default(),
            },
            "generic" => PageLayout::Generic {
                blocks: raw.blocks.unwrap_or_default(),
            },
            _ => PageLayout::Unrecognized {
                shape: raw.shape,
                left: raw.left,
                right: raw.right,
                blocks: raw.blocks,
            },
        }
    }
}

impl From<PageLayout> for RawLayout {
    fn from(layout: PageLayout) -> Self {
        match layout {
            PageLayout::TwoColumn { left, right } => RawLayout {
                shape: "two_column".to_string(),
                left: Some(left),
                right: Some(right),
                blocks: None,
            },
            PageLayout::Generic { blocks } => RawLayout {
                shape: "generic".to_string(),
                left: None,
                right: None,
                blocks: Some(blocks),
            },
            PageLayout::Unrecognized {
                shape,
                left,
                right,
                blocks,
            } => RawLayout {
                shape,
                left,
                right,
                blocks,
            },
        }
    }
}

impl PageLayout {
    /// An unrecognized shape with no content.
    pub fn unrecognized(shape: impl Into<String>) -> Self {
        PageLayout::Unrecognized {
            shape: shape.into(),
            left: None,
            right: None,
            blocks: None,
        }
    }

    /// Every block of the region in reading order, including those of an
    /// unrecognized shape.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        let (first, second, third) = match self {
            PageLayout::TwoColumn { left, right } => (Some(left), Some(right), None),
            PageLayout::Generic { blocks } => (Some(blocks), None, None),
            PageLayout::Unrecognized {
                left,
                right,
                blocks,
                ..
            } => (left.as_ref(), right.as_ref(), blocks.as_ref()),
        };
        first.into_iter().chain(second).chain(third).flatten()
    }

    /// Tracks of this shape, in reading order.
    pub fn tracks(&self) -> &'static [Track] {
        match self {
            PageLayout::TwoColumn { .. } => &[Track::Left, Track::Right],
            PageLayout::Generic { .. } => &[Track::Main],
            PageLayout::Unrecognized { .. } => &[],
        }
    }

    /// Blocks of one track.
    pub fn track(&self, track: Track) -> Option<&Vec<Block>> {
        match (self, track) {
            (PageLayout::TwoColumn { left, .. }, Track::Left) => Some(left),
            (PageLayout::TwoColumn { right, .. }, Track::Right) => Some(right),
            (PageLayout::Generic { blocks }, Track::Main) => Some(blocks),
            _ => None,
        }
    }

    /// Mutable blocks of one track.
    pub fn track_mut(&mut self, track: Track) -> Option<&mut Vec<Block>> {
        match (self, track) {
            (PageLayout::TwoColumn { left, .. }, Track::Left) => Some(left),
            (PageLayout::TwoColumn { right, .. }, Track::Right) => Some(right),
            (PageLayout::Generic { blocks }, Track::Main) => Some(blocks),
            _ => None,
        }
    }

    /// Same shape with every track empty.
    pub fn cleared(&self) -> Option<PageLayout> {
        match self {
            PageLayout::TwoColumn { .. } => Some(PageLayout::TwoColumn {
                left: Vec::new(),
                right: Vec::new(),
            }),
            PageLayout::Generic { .. } => Some(PageLayout::Generic { blocks: Vec::new() }),
            PageLayout::Unrecognized { .. } => None,
        }
    }

    /// Name of the shape, for logs.
    pub fn shape_name(&self) -> &str {
        match self {
            PageLayout::TwoColumn { .. } => "two_column",
            PageLayout::Generic { .. } => "generic",
            PageLayout::Unrecognized { shape, .. } => shape,
        }
    }
}

/// One ordered track of blocks within a content region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Left column of a two-column page
    Left,
    /// Right column of a two-column page
    Right,
    /// The single column of a generic page
    Main,
}

/// A section header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Which header this is
    pub kind: HeaderKind,

    /// Header text
    #[serde(default)]
    pub text: String,

    /// Whether the header is rendered
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Header {
    /// Create a visible header.
    pub fn new(kind: HeaderKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            visible: true,
        }
    }
}

/// Header variants, one per known page shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderKind {
    /// Ruled section title above a two-column page
    SectionRule,
    /// Centered intro banner above a generic page
    IntroBanner,
}

/// A page footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer label ("Page 3" on content pages)
    #[serde(default)]
    pub label: String,
}

impl Footer {
    /// Create a footer with a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
