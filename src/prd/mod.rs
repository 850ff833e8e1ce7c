//! PRD document rendering.
//!
//! The parallel document pipeline: renders a [`PrdDocument`] to a single
//! Markdown document and derives the export filename from the title.

use crate::models::{PrdDocument, PrdSection};
use std::fmt::Write;

/// Renders the document as Markdown.
///
/// A title heading followed by each fixed section in order; a section is
/// rendered as an `##` heading plus a bullet list only when it has at least
/// one item.
#[must_use]
pub fn render_markdown(doc: &PrdDocument) -> String {
    let mut out = String::new();
    let _ = write!(out, "# {}", doc.title);

    for section in PrdSection::all() {
        let items = doc.items(*section);
        if items.is_empty() {
            continue;
        }

        let _ = write!(out, "\n\n## {}", section.heading());
        for item in items {
            let _ = write!(out, "\n- {item}");
        }
    }

    out.push('\n');
    out
}

/// Slugifies a document title for use as a filename stem.
///
/// Lowercase; runs of non-alphanumeric characters collapse to a single
/// hyphen; leading and trailing hyphens are trimmed. An empty result falls
/// back to `prd`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.to_lowercase().chars() {
        if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        "prd".to_string()
    } else {
        slug
    }
}

/// Returns the export filename for the document: `<slug>.md`.
#[must_use]
pub fn export_filename(doc: &PrdDocument) -> String {
    format!("{}.md", slugify(&doc.title))
}
