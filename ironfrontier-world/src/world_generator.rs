//! Top-down world generation: regions, hex-placed locations, and a
//! summary manifest (§4.10).

use std::collections::HashMap;

use ironfrontier_core::config::GenerationConfig;
use ironfrontier_core::context::{GenerationContext, GenerationOptions};
use ironfrontier_core::entities::{HexCoord, ProceduralLocationContent};
use ironfrontier_core::enums::LocationType;
use ironfrontier_core::rng::{combine_seeds, hash_string, Rng};
use ironfrontier_core::templates::Registries;

use crate::name_generator::generate_place_name;
use crate::orchestrator::{hex_spiral_position, Orchestrator, ResolvedLocation};

const FACTION_IDS: &[&str] = &[
    "lawmen",
    "outlaws",
    "settlers",
    "railroad_company",
    "native_nations",
    "cattle_barons",
    "prospectors",
];

const REGION_ADJECTIVES: &[&str] = &["Iron", "Dust", "Rattlesnake", "Lonesome", "Silver", "Broken", "High", "Red"];
const REGION_NOUNS: &[&str] = &["Basin", "Territory", "Range", "Country", "Badlands", "Flats", "Divide"];

fn generate_region_name(rng: &mut Rng) -> String {
    format!("{} {}", rng.pick(REGION_ADJECTIVES), rng.pick(REGION_NOUNS))
}

#[derive(Debug, Clone)]
pub struct GeneratedLocation {
    pub id: String,
    pub name: String,
    pub location_type: String,
    pub position: HexCoord,
    pub content: ProceduralLocationContent,
}

#[derive(Debug, Clone)]
pub struct GeneratedRegion {
    pub id: String,
    pub name: String,
    pub seed: u32,
    pub locations: Vec<GeneratedLocation>,
    pub faction_presence: HashMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct GenerationManifest {
    pub schema_version: u32,
    pub region_count: u32,
    pub location_count: u32,
    pub npc_count: u32,
    pub item_count: u32,
    pub quest_count: u32,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GeneratedWorld {
    pub world_seed: u32,
    pub world_name: String,
    pub regions: Vec<GeneratedRegion>,
    pub manifest: GenerationManifest,
}

/// The world-level driver, exposed as the top-level `generateWorld`
/// entry point from §6.
#[derive(Debug, Default)]
pub struct WorldGenerator;

impl WorldGenerator {
    pub fn new() -> Self {
        WorldGenerator
    }

    pub fn generate_world(
        &self,
        orchestrator: &Orchestrator,
        world_seed: u32,
        world_name: &str,
        registries: &Registries,
        config: &GenerationConfig,
        options: &GenerationOptions,
    ) -> GeneratedWorld {
        generate_world(orchestrator, world_seed, world_name, registries, config, options)
    }
}

/// Builds the whole world in one pass: `regionCount` regions drawn
/// sequentially off a master RNG, each placing its own locations on a
/// hex spiral and routing through the orchestrator so NPC/item/quest
/// counts in the manifest are real (§4.10).
pub fn generate_world(
    orchestrator: &Orchestrator,
    world_seed: u32,
    world_name: &str,
    registries: &Registries,
    config: &GenerationConfig,
    options: &GenerationOptions,
) -> GeneratedWorld {
    let mut master_rng = Rng::new(combine_seeds(&[world_seed, hash_string(world_name)]));

    let region_count = options.region_count.unwrap_or(config.world.region_count);
    let locations_per_region = options.locations_per_region.unwrap_or(config.world.locations_per_region);

    let mut regions = Vec::with_capacity(region_count as usize);
    let mut warnings = Vec::new();
    let mut npc_count = 0u32;
    let mut item_count = 0u32;
    let mut quest_count = 0u32;
    let mut location_count = 0u32;

    for region_idx in 0..region_count {
        let region_id = format!("region_{region_idx}");
        let region_seed = master_rng.int(0, u32::MAX as i64) as u32;
        let mut region_rng = Rng::new(region_seed);

        let region_name = generate_region_name(&mut region_rng);
        let location_total = region_rng.int(locations_per_region.0 as i64, locations_per_region.1 as i64) as u32;

        let mut locations = Vec::with_capacity(location_total as usize);
        for i in 0..location_total {
            let location_type = *region_rng.pick(LocationType::all());
            let type_str = location_type.as_str();
            let location_id = format!("loc_{region_id}_{i}");

            let name = match registries.place_name_pool(type_str) {
                Some(pool) => generate_place_name(&mut region_rng, pool),
                None => {
                    warnings.push(format!("no place name pool for location type '{type_str}'; using fallback name"));
                    format!("Unnamed {type_str}")
                }
            };

            let position = hex_spiral_position(i as usize);

            let resolved = ResolvedLocation {
                id: location_id.clone(),
                name: name.clone(),
                location_type: Some(type_str.to_string()),
                tags: Vec::new(),
            };
            let mut ctx = GenerationContext {
                world_seed,
                location_id: Some(location_id.clone()),
                region_id: Some(region_id.clone()),
                ..GenerationContext::default()
            };
            if let Some(overrides) = &options.context_overrides {
                ctx = ctx.with_overrides(overrides);
            }

            let content = orchestrator.generate_location_content(&resolved, &ctx, options);
            if content.npcs.is_empty() {
                warnings.push(format!("location '{location_id}' ({type_str}) has no NPCs"));
            }
            npc_count += content.npcs.len() as u32;
            item_count += content.items.len() as u32;
            quest_count += content.quests.len() as u32;

            locations.push(GeneratedLocation { id: location_id, name, location_type: type_str.to_string(), position, content });
        }
        location_count += locations.len() as u32;

        let faction_presence: HashMap<String, f64> =
            FACTION_IDS.iter().map(|f| (f.to_string(), region_rng.float(0.0, 1.0))).collect();

        regions.push(GeneratedRegion { id: region_id, name: region_name, seed: region_seed, locations, faction_presence });
    }

    let manifest = GenerationManifest {
        schema_version: config.world.schema_version,
        region_count,
        location_count,
        npc_count,
        item_count,
        quest_count,
        warnings,
    };

    GeneratedWorld { world_seed, world_name: world_name.to_string(), regions, manifest }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironfrontier_core::default_registries;

    fn fresh_orchestrator(world_seed: u32, registries: &Registries, config: &GenerationConfig) -> Orchestrator {
        let orchestrator = Orchestrator::new();
        orchestrator.initialize(world_seed, registries.clone(), config.clone());
        orchestrator
    }

    #[test]
    fn produces_requested_region_and_location_counts() {
        let registries = default_registries();
        let config = GenerationConfig::default();
        let orchestrator = fresh_orchestrator(11, &registries, &config);
        let options = GenerationOptions { region_count: Some(2), locations_per_region: Some((3, 3)), ..Default::default() };
        let world = generate_world(&orchestrator, 11, "Iron Frontier", &registries, &config, &options);
        assert_eq!(world.regions.len(), 2);
        for region in &world.regions {
            assert_eq!(region.locations.len(), 3);
            assert_eq!(region.faction_presence.len(), FACTION_IDS.len());
        }
        assert_eq!(world.manifest.location_count, 6);
    }

    #[test]
    fn is_deterministic_for_identical_seed() {
        let registries = default_registries();
        let config = GenerationConfig::default();
        let options = GenerationOptions { region_count: Some(1), locations_per_region: Some((2, 2)), ..Default::default() };

        let orch_a = fresh_orchestrator(99, &registries, &config);
        let world_a = generate_world(&orch_a, 99, "Iron Frontier", &registries, &config, &options);
        let orch_b = fresh_orchestrator(99, &registries, &config);
        let world_b = generate_world(&orch_b, 99, "Iron Frontier", &registries, &config, &options);

        assert_eq!(world_a.regions[0].name, world_b.regions[0].name);
        for (a, b) in world_a.regions[0].locations.iter().zip(world_b.regions[0].locations.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.position.key(), b.position.key());
            assert_eq!(a.content.npcs.len(), b.content.npcs.len());
        }
    }
}
