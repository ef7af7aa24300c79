//! Footer renumbering.

use crate::model::Document;

/// Rewrite the footer label of every content page to its 1-based position.
///
/// Cover and separator pages keep their own labels. Running it twice
/// changes nothing.
pub fn renumber(doc: &mut Document) {
    for (idx, page) in doc.pages.iter_mut().enumerate() {
        if page.is_cover() {
            continue;
        }
        page.footer.label = format!("Page {}", idx + 1);
    }
}
