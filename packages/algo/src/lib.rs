//! # mentor-algo - adaptive learning core algorithms
//!
//! Pure Rust implementations of the learning algorithms used by the
//! mentor engine:
//!
//! - **Memory strength** - exponential-moving-average retention model
//! - **Review scheduling** - SM-2 style easiness-factor interval growth
//! - **Tone selection** - narration tone buckets and difficulty adjustment
//!
//! Everything here is a deterministic pure function over explicit inputs:
//! no I/O, no clocks, no randomness. The stateful engine crate owns record
//! storage and feeds these functions.
//!
//! ## Modules
//!
//! - [`types`] - the closed performance-rating vocabulary
//! - [`memory`] - strength update rule
//! - [`schedule`] - next-review interval computation
//! - [`tone`] - tone buckets, review emphasis, difficulty adjustment

pub mod memory;
pub mod schedule;
pub mod tone;
pub mod types;

pub use memory::{update_strength, INITIAL_STRENGTH};
pub use schedule::{
    easiness_factor, next_interval_days, quality, FIRST_INTERVAL_DAYS, MAX_INTERVAL_DAYS,
    SECOND_INTERVAL_DAYS,
};
pub use tone::{
    adjust_difficulty, average_strength, needs_review, select_tone, ToneHint, NEUTRAL_PRIOR,
};
pub use types::Performance;
