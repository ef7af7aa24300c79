//! Page templates used to create continuation pages.

use super::{Footer, Header, Page, PageKind, PageLayout};
use crate::error::{Error, Result};

/// The structure of a content page without its content.
///
/// A continuation page is instantiated from the template of the page that
/// overflowed: same kind, shape and footer, empty tracks, and the
/// once-per-section header hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTemplate {
    kind: PageKind,
    layout: PageLayout,
    header: Option<Header>,
    footer: Footer,
}

impl PageTemplate {
    /// Capture the template of a page.
    ///
    /// Fails with [`Error::UnrecognizedPageShape`] when the page's content
    /// region has no known shape.
    pub fn from_page(page: &Page) -> Result<Self> {
        let layout = page
            .layout
            .cleared()
            .ok_or_else(|| Error::UnrecognizedPageShape(page.layout.shape_name().to_string()))?;

        let header = page.header.clone().map(|mut header| {
            header.visible = false;
            header
        });

        Ok(Self {
            kind: page.kind,
            layout,
            header,
            footer: page.footer.clone(),
        })
    }

    /// Create an empty continuation page.
    pub fn instantiate(&self) -> Page {
        Page {
            kind: self.kind,
            layout: self.layout.clone(),
            header: self.header.clone(),
            footer: self.footer.clone(),
            continuation: true,
        }
    }
}
