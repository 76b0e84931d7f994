//! Memory strength model - exponential moving average over performance
//!
//! strength' = RETAINED_WEIGHT * strength + OBSERVATION_WEIGHT * observation
//!
//! The weights sum to 1, so the update is a convex combination: a strength
//! in [0, 1] combined with an observation in [0.1, 1.0] stays in [0, 1]
//! without clamping. OBSERVATION_WEIGHT = 0.3 lets 2-3 recent repetitions
//! dominate the signal while smoothing single-event noise.

use crate::types::Performance;

const RETAINED_WEIGHT: f64 = 0.7;
const OBSERVATION_WEIGHT: f64 = 0.3;

/// Strength of a brand-new record, before any performance event.
pub const INITIAL_STRENGTH: f64 = 0.0;

/// Applies one performance observation to a prior strength.
pub fn update_strength(strength: f64, performance: Performance) -> f64 {
    strength * RETAINED_WEIGHT + performance.observation() * OBSERVATION_WEIGHT
}
