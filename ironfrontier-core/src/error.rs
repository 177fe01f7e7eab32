use thiserror::Error;

/// Programming errors per spec — always fatal, never recovered.
///
/// Picking from an empty sequence, oversized `pick_n` draws, malformed
/// dice notation, and mismatched weight vectors are caller bugs, not
/// runtime conditions; generators panic through [`EngineError::fatal`]
/// rather than threading a `Result` a caller could ignore.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("cannot draw from an empty sequence")]
    EmptySequence,

    #[error("pick_n requested {requested} items from a sequence of {available}")]
    SampleSizeExceeded { requested: usize, available: usize },

    #[error("malformed dice notation: {0}")]
    MalformedDice(String),

    #[error("weighted_pick received {items} items and {weights} weights")]
    WeightLengthMismatch { items: usize, weights: usize },

    #[error("orchestrator used before initialize()")]
    NotInitialized,
}

impl EngineError {
    /// Surface a programming error immediately. These never propagate as
    /// a `Result` a caller could swallow.
    pub fn fatal(self) -> ! {
        panic!("{self}");
    }
}

/// Template validation failure, logged and dropped at load time; the
/// registry proceeds with the remaining templates (spec §7).
#[derive(Error, Debug, Clone)]
#[error("template '{id}' failed validation: {reason}")]
pub struct TemplateValidationError {
    pub id: String,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}
