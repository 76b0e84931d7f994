//! Content generation boundary
//!
//! The engine decides *what kind* of content to produce; an external
//! collaborator (an LLM-backed narrator in the surrounding application)
//! turns intents into text. The intent objects are the sole contract: a
//! generator never reaches into the memory or progress state.

use async_trait::async_trait;

use crate::error::GeneratorError;
use crate::types::{HintIntent, NarrationIntent};

#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Renders narration text for a section from its intent.
    async fn narrate(&self, intent: &NarrationIntent) -> Result<String, GeneratorError>;

    /// Renders a hint for a concept from its intent.
    async fn hint(&self, intent: &HintIntent) -> Result<String, GeneratorError>;
}
