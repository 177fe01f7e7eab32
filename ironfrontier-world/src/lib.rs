pub mod enemy_generator;
pub mod encounter_generator;
pub mod item_pools;
pub mod name_generator;
pub mod npc_generator;
pub mod orchestrator;
pub mod shop_generator;
pub mod world_generator;

pub use orchestrator::{instance, Orchestrator, ResolvedLocation};
pub use world_generator::{GeneratedLocation, GeneratedRegion, GeneratedWorld, GenerationManifest, WorldGenerator};
