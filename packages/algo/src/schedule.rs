//! Review interval scheduler - SM-2 style easiness-factor growth
//!
//! Deterministic function from (strength, repetitions, previous interval)
//! to the number of days until the next review:
//! - repetitions <= 1: 1 day
//! - repetitions == 2: 6 days (fixed second-interval constant)
//! - otherwise: round(previous_interval * ef), where
//!   ef = max(1.3, 2.5 - 0.8q + 0.2q^2) and q = round(strength * 5)
//!
//! Intervals are capped at 60 days so no concept goes stale regardless of
//! demonstrated mastery.

pub const FIRST_INTERVAL_DAYS: i64 = 1;
pub const SECOND_INTERVAL_DAYS: i64 = 6;
pub const MAX_INTERVAL_DAYS: i64 = 60;
const MIN_EASINESS: f64 = 1.3;

/// Recall quality on the 0-5 SM-2 scale, derived from memory strength.
pub fn quality(strength: f64) -> i32 {
    (strength.clamp(0.0, 1.0) * 5.0).round() as i32
}

/// Easiness factor for a given quality, floored at 1.3.
pub fn easiness_factor(quality: i32) -> f64 {
    let q = quality as f64;
    (2.5 - 0.8 * q + 0.2 * q * q).max(MIN_EASINESS)
}

/// Days until the next review is due.
pub fn next_interval_days(strength: f64, repetitions: usize, previous_interval_days: i64) -> i64 {
    let days = match repetitions {
        0 | 1 => FIRST_INTERVAL_DAYS,
        2 => SECOND_INTERVAL_DAYS,
        _ => {
            let ef = easiness_factor(quality(strength));
            (previous_interval_days as f64 * ef).round() as i64
        }
    };
    days.clamp(FIRST_INTERVAL_DAYS, MAX_INTERVAL_DAYS)
}
