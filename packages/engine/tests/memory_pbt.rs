//! Property-based tests for the memory model and scheduler.
//!
//! Invariants covered:
//! - Strength closure: the EMA update never leaves [0, 1]
//! - Fixed-point convergence bounds for all-excellent / all-poor histories
//! - Scheduler interval always within [1, 60] days, repetition 2 fixed at 6
//! - Difficulty adjustment bounded by the requested difficulty
//! - MemoryRecord JSON round-trip preserves data

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use mentor_engine::types::{MemoryRecord, Performance, ReviewEntry};

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_f64_0_1() -> impl Strategy<Value = f64> {
    (0u64..=1000u64).prop_map(|v| v as f64 / 1000.0)
}

fn arb_performance() -> impl Strategy<Value = Performance> {
    prop_oneof![
        Just(Performance::Poor),
        Just(Performance::Fair),
        Just(Performance::Good),
        Just(Performance::Excellent),
    ]
}

fn arb_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..=2_000_000_000i64).prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

fn arb_review_entry() -> impl Strategy<Value = ReviewEntry> {
    (arb_timestamp(), arb_performance()).prop_map(|(timestamp, performance)| ReviewEntry {
        timestamp,
        performance,
    })
}

fn arb_memory_record() -> impl Strategy<Value = MemoryRecord> {
    (
        "[a-z]{1,8}",                                   // user_id
        "[a-z]{1,8}",                                   // lesson_id
        "[a-z]{1,8}",                                   // concept_id
        arb_f64_0_1(),                                  // strength
        arb_timestamp(),                                // last_reviewed
        1i64..=60i64,                                   // last_interval_days
        prop::collection::vec(arb_review_entry(), 0..8), // review_history
    )
        .prop_map(
            |(user_id, lesson_id, concept_id, strength, last_reviewed, interval, history)| {
                MemoryRecord {
                    user_id,
                    lesson_id,
                    concept_id,
                    strength,
                    last_reviewed,
                    next_review_due: last_reviewed + Duration::days(interval),
                    last_interval_days: interval,
                    review_history: history,
                }
            },
        )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn strength_update_is_closed_over_unit_interval(
        strength in arb_f64_0_1(),
        performance in arb_performance(),
    ) {
        let updated = mentor_algo::update_strength(strength, performance);
        prop_assert!((0.0..=1.0).contains(&updated));
    }

    #[test]
    fn excellent_never_decreases_strength(strength in arb_f64_0_1()) {
        let updated = mentor_algo::update_strength(strength, Performance::Excellent);
        prop_assert!(updated >= strength - 1e-12);
        prop_assert!(updated <= 1.0);
    }

    #[test]
    fn poor_contracts_toward_its_fixed_point(strength in arb_f64_0_1()) {
        // Fixed point of s = 0.7s + 0.03 is 0.1; each step shrinks the
        // distance to it by the retained weight.
        let updated = mentor_algo::update_strength(strength, Performance::Poor);
        prop_assert!((updated - 0.1).abs() <= (strength - 0.1).abs() + 1e-12);
    }

    #[test]
    fn interval_is_always_within_bounds(
        strength in arb_f64_0_1(),
        repetitions in 0usize..50,
        previous in 1i64..=60i64,
    ) {
        let interval = mentor_algo::next_interval_days(strength, repetitions, previous);
        prop_assert!((1..=60).contains(&interval));
    }

    #[test]
    fn second_repetition_is_always_six_days(
        strength in arb_f64_0_1(),
        previous in 1i64..=60i64,
    ) {
        prop_assert_eq!(mentor_algo::next_interval_days(strength, 2, previous), 6);
    }

    #[test]
    fn adjusted_difficulty_is_bounded_by_request(
        requested in arb_f64_0_1(),
        strength in arb_f64_0_1(),
    ) {
        let adjusted = mentor_algo::adjust_difficulty(requested, strength);
        prop_assert!(adjusted >= 0.0);
        prop_assert!(adjusted <= requested + 1e-12);
    }

    #[test]
    fn average_strength_stays_within_observed_range(
        strengths in prop::collection::vec(arb_f64_0_1(), 1..16),
    ) {
        let avg = mentor_algo::average_strength(&strengths);
        let min = strengths.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = strengths.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(avg >= min - 1e-12 && avg <= max + 1e-12);
    }

    #[test]
    fn memory_record_round_trips_through_json(record in arb_memory_record()) {
        let json = serde_json::to_string(&record).unwrap();
        let decoded: MemoryRecord = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(record, decoded);
    }
}
