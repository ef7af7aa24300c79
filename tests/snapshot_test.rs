//! Integration tests for loading and saving document snapshots.

use repaginate::render::{to_json, to_text};
use repaginate::{paginate_file, Document, JsonFormat, Paginator, Track};
use std::fs;
use tempfile::tempdir;

const INPUT: &str = r#"{
    "metadata": {"title": "Quarterly Outlook", "subject": "ACME"},
    "pages": [
        {"kind": "cover", "layout": {"shape": "generic"}, "footer": {"label": "Cover"}},
        {
            "layout": {
                "shape": "two_column",
                "left": [
                    {"kind": "analysis-text", "text": "LEFT", "style": {"class": "analysis-text"}},
                    {"kind": "table", "what": "table", "height": 400, "text": "figures"}
                ],
                "right": [
                    {"kind": "core-insight-box", "label": "Core Insight", "text": "RIGHT"},
                    {"kind": "predictions-container", "items": ["up", "down", "sideways"]}
                ]
            },
            "header": {"kind": "section_rule", "text": "Outlook"},
            "footer": {"label": "3"}
        }
    ]
}"#;

fn long_input() -> String {
    INPUT
        .replace("\"LEFT\"", &format!("\"{}\"", "market ".repeat(900)))
        .replace("\"RIGHT\"", &format!("\"{}\"", "signal ".repeat(300)))
}

#[test]
fn test_load_aliases() {
    let doc = Document::from_json(INPUT).unwrap();
    assert_eq!(doc.page_count(), 2);
    assert!(doc.pages[0].is_cover());
    assert!(doc.block(1, Track::Left, 0).unwrap().is_paragraph());
    assert!(doc.block(1, Track::Left, 1).unwrap().is_opaque());
    assert_eq!(doc.block(1, Track::Right, 1).unwrap().kind_name(), "bullet_list");
    assert!(doc.pages[1].header.as_ref().unwrap().visible);
}

#[test]
fn test_paginate_file_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.json");
    fs::write(&input, long_input()).unwrap();

    let (doc, report) = paginate_file(&input).unwrap();
    assert!(doc.page_count() > 2);
    assert_eq!(report.pages_after, doc.page_count());
    assert_eq!(doc.pages[1].footer.label, "Page 2");

    let output = dir.path().join("paginated.json");
    fs::write(&output, to_json(&doc, JsonFormat::Pretty).unwrap()).unwrap();
    let reloaded = Document::from_path(&output).unwrap();
    assert_eq!(reloaded, doc);

    let source = Document::from_json(&long_input()).unwrap();
    assert_eq!(
        reloaded.track_text(Track::Left),
        source.track_text(Track::Left)
    );
    assert_eq!(
        reloaded.track_text(Track::Right),
        source.track_text(Track::Right)
    );
}

#[test]
fn test_split_blocks_keep_their_style() {
    let result = Paginator::new().paginate_json(&long_input()).unwrap();
    let doc = result.document();

    let styles: Vec<_> = doc
        .pages
        .iter()
        .filter_map(|p| p.track(Track::Left)?.first())
        .filter(|b| b.is_paragraph())
        .map(|b| b.style().class.clone())
        .collect();
    assert!(styles.len() > 1);
    assert!(styles
        .iter()
        .all(|class| class.as_deref() == Some("analysis-text")));
}

#[test]
fn test_text_dump_shows_continuations() {
    let result = Paginator::new().paginate_json(&long_input()).unwrap();
    let text = to_text(result.document());

    assert!(text.contains("===== 1 (cover) ====="));
    assert!(text.contains("===== 3 (continued) ====="));
    assert_eq!(text.matches("# Outlook").count(), 1);
}

#[test]
fn test_unrecognized_page_content_survives_snapshot() {
    let json = r#"{"pages": [
        {"layout": {"shape": "generic", "blocks": [{"kind": "paragraph", "text": "before "}]}},
        {"layout": {"shape": "three_column",
            "left": [{"kind": "paragraph", "text": "west "}],
            "blocks": [{"kind": "analysis-text", "text": "IMPORTANT CONTENT"},
                       {"kind": "image", "height": 80, "text": "chart"}]}}
    ]}"#;
    let source = Document::from_json(json).unwrap();

    let result = Paginator::new().paginate_json(json).unwrap();
    assert_eq!(result.document().page_count(), 2);
    assert_eq!(result.document().flowing_text(), source.flowing_text());

    let out = result.to_json(JsonFormat::Compact).unwrap();
    assert!(out.contains("IMPORTANT CONTENT"));
    assert!(out.contains("three_column"));

    let reloaded = Document::from_json(&out).unwrap();
    assert_eq!(reloaded.flowing_text(), "before west IMPORTANT CONTENTchart");
    assert_eq!(reloaded.pages[1].footer.label, "Page 2");
    assert!(result.to_text().contains("IMPORTANT CONTENT"));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = paginate_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(repaginate::Error::Io(_))));
}
