//! # mentor-engine - adaptive learning engine core
//!
//! A spaced-repetition memory model combined with context-driven content
//! selection: decides what to teach next and how hard to make it from a
//! per-user, per-concept memory-strength signal.
//!
//! Contains:
//! - [`memory`] - MemoryStore, the per-(user, concept) strength records
//! - [`progress`] - read-only lesson progress projection
//! - [`narration`] - pure intent builders for narration and hints
//! - [`engine`] - the LearningEngine facade and public surface
//! - [`persistence`] / [`generator`] - collaborator boundary traits
//!
//! The algorithms themselves (strength update, interval scheduling, tone
//! selection) live in the `mentor-algo` crate as pure functions.

pub mod config;
pub mod engine;
pub mod error;
pub mod generator;
pub mod logging;
pub mod memory;
pub mod narration;
pub mod persistence;
pub mod progress;
pub mod types;

pub use config::{EngineConfig, NarrationParams};
pub use engine::LearningEngine;
pub use error::{EngineError, GeneratorError, PersistenceError};
pub use generator::ContentGenerator;
pub use persistence::{InMemoryStore, LearningStore};
