//! Plain text page dump.

use crate::model::{Block, Document, Page, PageLayout, Track};
use std::fmt::Write;

/// Render a document as a page-by-page text dump.
///
/// Each page is framed by a rule and its footer label. Visible headers are
/// printed, hidden ones are not. Two-column pages list the left column
/// before the right one.
pub fn to_text(doc: &Document) -> String {
    let mut output = String::new();
    for (idx, page) in doc.pages.iter().enumerate() {
        if idx > 0 {
            output.push('\n');
        }
        render_page(&mut output, idx, page);
    }
    output
}

fn render_page(output: &mut String, idx: usize, page: &Page) {
    let kind = if page.is_cover() {
        "cover"
    } else if page.continuation {
        "continued"
    } else {
        "content"
    };
    let _ = writeln!(output, "===== {} ({}) =====", idx + 1, kind);

    if let Some(header) = page.header.as_ref().filter(|h| h.visible) {
        let _ = writeln!(output, "# {}", header.text);
    }

    let labelled = matches!(page.layout, PageLayout::TwoColumn { .. });
    if let PageLayout::Unrecognized { shape, .. } = &page.layout {
        let _ = writeln!(output, "[{} layout]", shape);
        page.layout.blocks().for_each(|block| render_block(output, block));
    }
    for &track in page.tracks() {
        if labelled {
            let name = if track == Track::Left { "left" } else { "right" };
            let _ = writeln!(output, "[{}]", name);
        }
        for block in page.track(track).into_iter().flatten() {
            render_block(output, block);
        }
    }

    let _ = writeln!(output, "----- {} -----", page.footer.label);
}

fn render_block(output: &mut String, block: &Block) {
    match block {
        Block::Paragraph(p) => {
            let _ = writeln!(output, "{}", p.text);
        }
        Block::InsightBox(b) => {
            if let Some(label) = &b.label {
                let _ = writeln!(output, "> {}", label);
            }
            let _ = writeln!(output, "> {}", b.text);
        }
        Block::BulletList(list) => {
            for item in &list.items {
                let _ = writeln!(output, "- {}", item);
            }
        }
        Block::Opaque(o) => {
            let _ = writeln!(output, "[{} {:.0}px] {}", o.what.name(), o.height, o.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Header, HeaderKind, OpaqueKind};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_page(Page::cover("Cover"));
        doc.add_page(
            Page::generic(vec![
                Block::paragraph("Hello, world!"),
                Block::bullets(["one", "two"]),
                Block::opaque(OpaqueKind::Table, 120.0, "cells"),
            ])
            .with_header(Header::new(HeaderKind::IntroBanner, "Intro")),
        );

        let result = to_text(&doc);
        assert!(result.starts_with("===== 1 (cover) ====="));
        assert!(result.contains("# Intro"));
        assert!(result.contains("Hello, world!\n- one\n- two\n"));
        assert!(result.contains("[table 120px] cells"));
        assert!(result.contains("----- Cover -----"));
    }

    #[test]
    fn test_hidden_header_is_not_printed() {
        let mut header = Header::new(HeaderKind::SectionRule, "Outlook");
        header.visible = false;
        let mut doc = Document::new();
        doc.add_page(Page::two_column(vec![Block::paragraph("L")], vec![]).with_header(header));

        let result = to_text(&doc);
        assert!(!result.contains("Outlook"));
        assert!(result.contains("[left]\nL\n[right]\n"));
    }

    #[test]
    fn test_unrecognized_page_prints_its_blocks() {
        let json = r#"{"pages": [{"layout": {"shape": "grid",
            "blocks": [{"kind": "paragraph", "text": "kept"}]}}]}"#;
        let doc = Document::from_json(json).unwrap();

        let result = to_text(&doc);
        assert!(result.contains("[grid layout]\nkept\n"));
    }
}
