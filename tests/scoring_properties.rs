//! Property-based tests for the scoring engine.
//!
//! Uses proptest to verify the numeric contract across random inputs:
//! - Confidence outside [0,100] scores as its clamped value
//! - Effort at or below zero scores as the epsilon floor
//! - RICE is monotone in reach/impact/confidence and antitone in effort
//! - ICE ignores reach
//! - Score ordering is a stable descending sort

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use prio::models::Record;
use prio::scoring::{self, EFFORT_EPSILON, ScoreMode, SortKey};
use proptest::prelude::*;

fn record(reach: f64, impact: f64, confidence: f64, effort: f64) -> Record {
    Record {
        reach,
        impact,
        confidence,
        effort,
        ..Record::new()
    }
}

proptest! {
    /// Property: confidence outside [0,100] scores identically to the
    /// clamped value.
    #[test]
    fn prop_confidence_clamped(
        reach in 0.0f64..1e6,
        impact in prop::sample::select(vec![0.25, 0.5, 1.0, 2.0, 3.0]),
        confidence in -500.0f64..500.0,
        effort in 0.1f64..100.0,
    ) {
        let raw = record(reach, impact, confidence, effort);
        let clamped = record(reach, impact, confidence.clamp(0.0, 100.0), effort);

        let a = scoring::score(&raw, ScoreMode::Rice);
        let b = scoring::score(&clamped, ScoreMode::Rice);
        prop_assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0));
    }

    /// Property: non-positive effort scores finitely, as the epsilon floor.
    #[test]
    fn prop_effort_floored(
        reach in 0.0f64..1e6,
        confidence in 0.0f64..100.0,
        effort in -100.0f64..=0.0,
    ) {
        let raw = record(reach, 2.0, confidence, effort);
        let floored = record(reach, 2.0, confidence, EFFORT_EPSILON);

        let a = scoring::score(&raw, ScoreMode::Rice);
        prop_assert!(a.is_finite());
        prop_assert!((a - scoring::score(&floored, ScoreMode::Rice)).abs() <= 1e-9 * a.abs().max(1.0));
    }

    /// Property: RICE strictly increases with reach when the other factors
    /// are fixed and positive.
    #[test]
    fn prop_rice_monotone_in_reach(
        reach in 1.0f64..1e6,
        confidence in 1.0f64..100.0,
        effort in 0.1f64..100.0,
    ) {
        let lo = record(reach, 2.0, confidence, effort);
        let hi = record(reach * 2.0, 2.0, confidence, effort);
        prop_assert!(scoring::score(&hi, ScoreMode::Rice) > scoring::score(&lo, ScoreMode::Rice));
    }

    /// Property: RICE strictly decreases with effort.
    #[test]
    fn prop_rice_antitone_in_effort(
        reach in 1.0f64..1e6,
        confidence in 1.0f64..100.0,
        effort in 0.1f64..100.0,
    ) {
        let cheap = record(reach, 2.0, confidence, effort);
        let dear = record(reach, 2.0, confidence, effort * 2.0);
        prop_assert!(scoring::score(&dear, ScoreMode::Rice) < scoring::score(&cheap, ScoreMode::Rice));
    }

    /// Property: RICE strictly increases with confidence inside the
    /// clamping range.
    #[test]
    fn prop_rice_monotone_in_confidence(
        reach in 1.0f64..1e6,
        confidence in 1.0f64..50.0,
        effort in 0.1f64..100.0,
    ) {
        let lo = record(reach, 2.0, confidence, effort);
        let hi = record(reach, 2.0, confidence * 2.0, effort);
        prop_assert!(scoring::score(&hi, ScoreMode::Rice) > scoring::score(&lo, ScoreMode::Rice));
    }

    /// Property: two records differing only in reach produce identical ICE
    /// scores.
    #[test]
    fn prop_ice_ignores_reach(
        reach_a in 0.0f64..1e6,
        reach_b in 0.0f64..1e6,
        impact in prop::sample::select(vec![0.25, 0.5, 1.0, 2.0, 3.0]),
        confidence in 0.0f64..100.0,
        effort in 0.1f64..100.0,
    ) {
        let a = record(reach_a, impact, confidence, effort);
        let b = record(reach_b, impact, confidence, effort);
        prop_assert_eq!(
            scoring::score(&a, ScoreMode::Ice),
            scoring::score(&b, ScoreMode::Ice)
        );
    }

    /// Property: every finite input yields a finite score in both modes.
    #[test]
    fn prop_score_total(
        reach in -1e9f64..1e9,
        impact in -10.0f64..10.0,
        confidence in -1e4f64..1e4,
        effort in -1e4f64..1e4,
    ) {
        let r = record(reach, impact, confidence, effort);
        prop_assert!(scoring::score(&r, ScoreMode::Rice).is_finite());
        prop_assert!(scoring::score(&r, ScoreMode::Ice).is_finite());
    }

    /// Property: ranking by score never loses or reorders tied records.
    #[test]
    fn prop_rank_stable_on_ties(count in 1usize..20) {
        // All records tie; the derived order must equal the storage order.
        let records: Vec<Record> = (0..count)
            .map(|i| record(100.0, 1.0, 100.0, 1.0).with_title(format!("r{i}")))
            .collect();

        let ranked = scoring::rank(&records, ScoreMode::Rice, SortKey::Score);
        prop_assert_eq!(ranked.len(), records.len());
        for (i, row) in ranked.iter().enumerate() {
            prop_assert_eq!(&row.record.title, &format!("r{i}"));
        }
    }

    /// Property: ranked scores are non-increasing.
    #[test]
    fn prop_rank_descending(
        efforts in prop::collection::vec(0.1f64..100.0, 1..20),
    ) {
        let records: Vec<Record> = efforts
            .into_iter()
            .map(|effort| record(100.0, 2.0, 80.0, effort))
            .collect();

        let ranked = scoring::rank(&records, ScoreMode::Rice, SortKey::Score);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
