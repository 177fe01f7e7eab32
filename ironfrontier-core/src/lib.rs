pub mod config;
pub mod context;
pub mod entities;
pub mod enums;
pub mod error;
pub mod rng;
pub mod substitution;
pub mod templates;

pub use config::GenerationConfig;
pub use context::{
    AvailableEntity, GenerationContext, GenerationContextOverrides, GenerationOptions,
    QuestGenerationContext,
};
pub use entities::*;
pub use error::{ConfigError, EngineError, TemplateValidationError};
pub use rng::{combine_seeds, hash_string, Rng};
pub use substitution::{substitute, Variables};
pub use templates::{default_registries, Registries};
