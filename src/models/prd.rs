//! PRD document model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed sections of a PRD, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrdSection {
    /// Problem Statement.
    Problem,
    /// Goals.
    Goals,
    /// Non-Goals.
    NonGoals,
    /// Target Users & Personas.
    Personas,
    /// Assumptions.
    Assumptions,
    /// Success Metrics.
    Metrics,
    /// Requirements.
    Requirements,
    /// Risks & Mitigations.
    Risks,
}

impl PrdSection {
    /// Returns all sections in document order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Problem,
            Self::Goals,
            Self::NonGoals,
            Self::Personas,
            Self::Assumptions,
            Self::Metrics,
            Self::Requirements,
            Self::Risks,
        ]
    }

    /// Returns the section heading as it appears in the rendered document.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Problem => "Problem Statement",
            Self::Goals => "Goals",
            Self::NonGoals => "Non-Goals",
            Self::Personas => "Target Users & Personas",
            Self::Assumptions => "Assumptions",
            Self::Metrics => "Success Metrics",
            Self::Requirements => "Requirements",
            Self::Risks => "Risks & Mitigations",
        }
    }

    /// Returns the short name used on the CLI.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Goals => "goals",
            Self::NonGoals => "non-goals",
            Self::Personas => "personas",
            Self::Assumptions => "assumptions",
            Self::Metrics => "metrics",
            Self::Requirements => "requirements",
            Self::Risks => "risks",
        }
    }

    /// Parses a short section name.
    ///
    /// Returns `None` if the name is not recognized.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "problem" | "problem-statement" => Some(Self::Problem),
            "goals" => Some(Self::Goals),
            "non-goals" | "nongoals" => Some(Self::NonGoals),
            "personas" | "users" => Some(Self::Personas),
            "assumptions" => Some(Self::Assumptions),
            "metrics" | "success-metrics" => Some(Self::Metrics),
            "requirements" => Some(Self::Requirements),
            "risks" => Some(Self::Risks),
            _ => None,
        }
    }
}

impl fmt::Display for PrdSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A Product Requirements Document.
///
/// A title plus the fixed section set, each a list of bullet items. The
/// rendered output includes a section only when it has at least one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrdDocument {
    /// Document title.
    #[serde(default)]
    pub title: String,
    /// Problem Statement items.
    #[serde(default)]
    pub problem: Vec<String>,
    /// Goals items.
    #[serde(default)]
    pub goals: Vec<String>,
    /// Non-Goals items.
    #[serde(default)]
    pub non_goals: Vec<String>,
    /// Target Users & Personas items.
    #[serde(default)]
    pub personas: Vec<String>,
    /// Assumptions items.
    #[serde(default)]
    pub assumptions: Vec<String>,
    /// Success Metrics items.
    #[serde(default)]
    pub metrics: Vec<String>,
    /// Requirements items.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Risks & Mitigations items.
    #[serde(default)]
    pub risks: Vec<String>,
}

impl PrdDocument {
    /// Creates an empty document with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns the items of a section.
    #[must_use]
    pub fn items(&self, section: PrdSection) -> &[String] {
        match section {
            PrdSection::Problem => &self.problem,
            PrdSection::Goals => &self.goals,
            PrdSection::NonGoals => &self.non_goals,
            PrdSection::Personas => &self.personas,
            PrdSection::Assumptions => &self.assumptions,
            PrdSection::Metrics => &self.metrics,
            PrdSection::Requirements => &self.requirements,
            PrdSection::Risks => &self.risks,
        }
    }

    /// Replaces the items of a section.
    pub fn set_items(&mut self, section: PrdSection, items: Vec<String>) {
        match section {
            PrdSection::Problem => self.problem = items,
            PrdSection::Goals => self.goals = items,
            PrdSection::NonGoals => self.non_goals = items,
            PrdSection::Personas => self.personas = items,
            PrdSection::Assumptions => self.assumptions = items,
            PrdSection::Metrics => self.metrics = items,
            PrdSection::Requirements => self.requirements = items,
            PrdSection::Risks => self.risks = items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_parse_roundtrips() {
        for section in PrdSection::all() {
            assert_eq!(PrdSection::parse(section.as_str()), Some(*section));
        }
    }

    #[test]
    fn test_section_parse_unknown() {
        assert_eq!(PrdSection::parse("appendix"), None);
    }

    #[test]
    fn test_set_and_get_items() {
        let mut doc = PrdDocument::new("Checkout revamp");
        doc.set_items(PrdSection::Goals, vec!["Cut latency".to_string()]);

        assert_eq!(doc.items(PrdSection::Goals), ["Cut latency".to_string()]);
        assert!(doc.items(PrdSection::Risks).is_empty());
    }

    #[test]
    fn test_document_deserializes_with_missing_sections() {
        let doc: PrdDocument = serde_json::from_str(r#"{"title": "Sparse"}"#).unwrap();
        assert_eq!(doc.title, "Sparse");
        assert!(doc.goals.is_empty());
    }
}
