//! Markdown table export.

use super::fmt_num;
use crate::scoring::{ScoreMode, ScoredRecord};
use std::fmt::Write;

/// Placeholder rendered for empty title/owner cells.
const EMPTY_CELL: &str = "-";

fn cell(value: &str) -> &str {
    if value.is_empty() { EMPTY_CELL } else { value }
}

/// Renders the scored, sorted list as a Markdown table.
///
/// The output is a header line naming the active mode, the table header row,
/// a separator row, and one row per record in the given order. An empty list
/// yields exactly those three leading lines. Row index is the 1-based
/// position in the supplied list; confidence carries a `%` suffix and the
/// score is fixed to two decimals.
#[must_use]
pub fn export(rows: &[ScoredRecord<'_>], mode: ScoreMode) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# Prioritization ({})", mode.label());
    let _ = writeln!(
        out,
        "| # | Title | Owner | Reach | Impact | Confidence | Effort | {} |",
        mode.label()
    );
    let _ = write!(out, "| --- | --- | --- | --- | --- | --- | --- | --- |");

    for (index, row) in rows.iter().enumerate() {
        let record = row.record;
        let _ = write!(
            out,
            "\n| {} | {} | {} | {} | {} | {}% | {} | {:.2} |",
            index + 1,
            cell(&record.title),
            cell(&record.owner),
            fmt_num(record.reach),
            fmt_num(record.impact),
            fmt_num(record.confidence),
            fmt_num(record.effort),
            row.score,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use crate::scoring::{self, SortKey};

    #[test]
    fn test_empty_list_is_three_lines() {
        let out = export(&[], ScoreMode::Rice);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "# Prioritization (RICE)");
        assert!(lines[1].starts_with("| # | Title |"));
        assert!(lines[2].starts_with("| --- |"));
    }

    #[test]
    fn test_row_rendering() {
        let records = vec![Record {
            title: "Improve onboarding".to_string(),
            owner: String::new(),
            reach: 200.0,
            impact: 2.0,
            confidence: 80.0,
            effort: 2.0,
            ..Record::new()
        }];
        let ranked = scoring::rank(&records, ScoreMode::Rice, SortKey::Score);

        let out = export(&ranked, ScoreMode::Rice);
        let row = out.lines().nth(3).unwrap();
        assert_eq!(
            row,
            "| 1 | Improve onboarding | - | 200 | 2 | 80% | 2 | 160.00 |"
        );
    }

    #[test]
    fn test_header_names_mode() {
        let out = export(&[], ScoreMode::Ice);
        assert!(out.starts_with("# Prioritization (ICE)"));
        assert!(out.contains("| Effort | ICE |"));
    }

    #[test]
    fn test_index_follows_supplied_order() {
        let records = vec![
            Record::new().with_title("a"),
            Record::new().with_title("b"),
        ];
        let ranked = scoring::rank(&records, ScoreMode::Rice, SortKey::Title);

        let out = export(&ranked, ScoreMode::Rice);
        assert!(out.lines().nth(3).unwrap().starts_with("| 1 | a |"));
        assert!(out.lines().nth(4).unwrap().starts_with("| 2 | b |"));
    }
}
