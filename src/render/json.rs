//! JSON rendering for documents and reports.

use crate::error::{Error, Result};
use crate::model::Document;
use crate::paginate::PaginationReport;
use serde::Serialize;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to its JSON snapshot.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Convert a pagination report to JSON.
pub fn report_to_json(report: &PaginationReport, format: JsonFormat) -> Result<String> {
    serialize(report, format)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Header, HeaderKind, Page};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.metadata.title = Some("Test".to_string());
        doc.add_page(Page::cover("Cover"));
        doc.add_page(
            Page::two_column(
                vec![Block::paragraph("Hello"), Block::bullets(["a", "b"])],
                vec![Block::insight("Core Insight", "Watch this")],
            )
            .with_header(Header::new(HeaderKind::SectionRule, "Outlook")),
        );
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("two_column"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_snapshot_loads_back() {
        let doc = sample();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(Document::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_report_to_json() {
        let report = PaginationReport::new(2);
        let json = report_to_json(&report, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"pages_before\":2"));
        assert!(json.contains("\"warnings\":[]"));
    }
}
