use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationParams {
    /// How many previously generated narration strings are fed back into
    /// each intent to discourage repetitive phrasing.
    pub history_window: usize,
    /// When false, hint and narration difficulty pass through unadjusted.
    pub adaptive_difficulty: bool,
}

impl Default for NarrationParams {
    fn default() -> Self {
        Self {
            history_window: 3,
            adaptive_difficulty: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub narration: NarrationParams,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("MENTOR_HISTORY_WINDOW") {
            config.narration.history_window = val.parse().unwrap_or(3);
        }
        if let Ok(val) = std::env::var("MENTOR_ADAPTIVE_HINTS") {
            config.narration.adaptive_difficulty = val.parse().unwrap_or(true);
        }

        config
    }
}
