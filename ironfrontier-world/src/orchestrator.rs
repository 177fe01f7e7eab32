//! The location content orchestrator: a single process-wide instance
//! that lazily generates and caches everything tied to one location
//! (§4.9).

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Mutex, OnceLock};

use ironfrontier_core::config::GenerationConfig;
use ironfrontier_core::context::{GenerationContext, GenerationOptions, QuestGenerationContext};
use ironfrontier_core::entities::{
    GeneratedDialogueTree, HexCoord, ProceduralLocationContent, ProceduralNpc, ShopInventory,
    WorldItemSpawn,
};
use ironfrontier_core::enums::StructureState;
use ironfrontier_core::error::EngineError;
use ironfrontier_core::rng::{combine_seeds, hash_string, Rng};
use ironfrontier_core::templates::Registries;
use ironfrontier_quests::{generate_quest, generate_simple_dialogue_tree, SimpleDialogueOptions};

use crate::item_pools::items_for_location_type;
use crate::npc_generator::{generate_npcs_for_location, generate_required_role_npcs};
use crate::shop_generator::{generate_shop_inventory, shop_type_for_role};

/// The location as the caller describes it before content generation —
/// an explicit type takes priority, otherwise it's inferred (§4.9 step
/// 2).
#[derive(Debug, Clone)]
pub struct ResolvedLocation {
    pub id: String,
    pub name: String,
    pub location_type: Option<String>,
    pub tags: Vec<String>,
}

const KNOWN_LOCATION_TYPES: &[&str] = &["city", "town", "mine", "ranch", "outpost", "camp", "ruin"];

/// Explicit type, then tag-driven mapping, then a name-substring
/// heuristic, then `"town"` as the final fallback.
pub fn infer_location_type(resolved: &ResolvedLocation) -> String {
    if let Some(explicit) = &resolved.location_type {
        return explicit.clone();
    }
    for tag in &resolved.tags {
        if KNOWN_LOCATION_TYPES.contains(&tag.as_str()) {
            return tag.clone();
        }
    }
    let lower = resolved.name.to_lowercase();
    for known in KNOWN_LOCATION_TYPES {
        if lower.contains(known) {
            return known.to_string();
        }
    }
    "town".to_string()
}

pub(crate) fn hex_spiral_position(i: usize) -> HexCoord {
    let ring = (2 + (i / 8) * 2) as f64;
    let idx_in_ring = (i % 8) as f64;
    let angle = 2.0 * PI * idx_in_ring / 8.0;
    HexCoord::new((angle.cos() * ring).round() as i32, (angle.sin() * ring).round() as i32)
}

/// Required NPC slots owed to a location type, gathered from its
/// matching `LocationTemplate`'s required building refs and each
/// referenced `BuildingTemplate`'s own required `npc_slots` (the
/// "NPC slot" glossary entry). Picks the first matching location
/// template when more than one shares a type.
fn required_roles_for(registries: &Registries, location_type: &str) -> Vec<String> {
    let mut roles = Vec::new();
    let Some(location_template) = registries.location_templates_for_type(location_type).into_iter().next() else {
        return roles;
    };
    for building_ref in location_template.building_refs.iter().filter(|b| b.required) {
        let Some(building) = registries.building_template(&building_ref.building_id) else {
            continue;
        };
        for slot in building.npc_slots.iter().filter(|s| s.required) {
            if !roles.contains(&slot.role) {
                roles.push(slot.role.clone());
            }
        }
    }
    roles
}

fn item_position(rng: &mut Rng) -> HexCoord {
    let angle = rng.float(0.0, 2.0 * PI);
    let radius = rng.float(3.0, 10.0);
    HexCoord::new((angle.cos() * radius).round() as i32, (angle.sin() * radius).round() as i32)
}

struct OrchestratorInner {
    world_seed: u32,
    registries: Registries,
    config: GenerationConfig,
    cache: HashMap<String, ProceduralLocationContent>,
    structure_states: HashMap<String, StructureState>,
}

/// The singleton cache-and-dispatch layer. Generators themselves stay
/// pure functions of `(seed, context, templates)`; only this layer holds
/// mutable state, guarded by a single mutex (teacher precedent:
/// `Arc<RwLock<GameState>>` in the shared game-state owner).
pub struct Orchestrator {
    inner: Mutex<Option<OrchestratorInner>>,
}

static INSTANCE: OnceLock<Orchestrator> = OnceLock::new();

pub fn instance() -> &'static Orchestrator {
    INSTANCE.get_or_init(|| Orchestrator { inner: Mutex::new(None) })
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// An independent, uninitialized orchestrator — mainly for tests and
    /// for hosting more than one world in the same process. The
    /// process-wide default lives behind [`instance`].
    pub fn new() -> Self {
        Orchestrator { inner: Mutex::new(None) }
    }

    pub fn initialize(&self, world_seed: u32, registries: Registries, config: GenerationConfig) {
        *self.inner.lock().unwrap() = Some(OrchestratorInner {
            world_seed,
            registries,
            config,
            cache: HashMap::new(),
            structure_states: HashMap::new(),
        });
    }

    pub fn clear_cache(&self) {
        if let Some(inner) = self.inner.lock().unwrap().as_mut() {
            inner.cache.clear();
            inner.structure_states.clear();
        }
    }

    fn location_seed(world_seed: u32, location_id: &str) -> u32 {
        combine_seeds(&[world_seed, hash_string(location_id)])
    }

    /// The full generate procedure (§4.9 steps 1-9): cache fast path,
    /// location-type inference, default counts, NPCs, items, dialogue,
    /// shops, quests — in that fixed order.
    pub fn generate_location_content(
        &self,
        resolved: &ResolvedLocation,
        base_ctx: &GenerationContext,
        options: &GenerationOptions,
    ) -> ProceduralLocationContent {
        let mut guard = self.inner.lock().unwrap();
        let inner = guard.as_mut().unwrap_or_else(|| EngineError::NotInitialized.fatal());

        let location_seed = Self::location_seed(inner.world_seed, &resolved.id);
        if let Some(cached) = inner.cache.get(&resolved.id) {
            if cached.seed == location_seed {
                return cached.clone();
            }
        }

        let location_type = infer_location_type(resolved);
        let npc_counts = options
            .npc_count
            .or_else(|| inner.config.npc.defaults_by_location_type.get(&location_type).copied())
            .unwrap_or(inner.config.npc.fallback);
        let item_count = options
            .item_count
            .or_else(|| inner.config.items.defaults_by_location_type.get(&location_type).copied())
            .unwrap_or(inner.config.items.fallback);

        let mut rng = Rng::new(location_seed);

        let required_roles = required_roles_for(&inner.registries, &location_type);
        let mut npcs = generate_required_role_npcs(
            &mut rng,
            &inner.registries.npc_templates,
            &inner.registries.name_pools,
            &location_type,
            &resolved.name,
            &resolved.id,
            &required_roles,
        );
        npcs.extend(generate_npcs_for_location(
            &mut rng,
            &inner.registries.npc_templates,
            &inner.registries.name_pools,
            &location_type,
            &resolved.name,
            &resolved.id,
            npc_counts,
            &inner.config,
            &npcs,
        ));

        let procedural_npcs: Vec<ProceduralNpc> = npcs
            .iter()
            .enumerate()
            .map(|(i, npc)| ProceduralNpc {
                npc: npc.clone(),
                spawn: hex_spiral_position(i),
                dialogue_tree_id: format!("dialogue_{}", npc.id),
            })
            .collect();

        let item_pool = items_for_location_type(&location_type);
        let item_ids: Vec<&str> = item_pool.iter().map(|(id, _)| *id).collect();
        let item_weights: Vec<f64> = item_pool.iter().map(|(_, w)| *w).collect();
        let items: Vec<WorldItemSpawn> = (0..item_count)
            .map(|_| WorldItemSpawn {
                item_id: (*rng.weighted_pick(&item_ids, &item_weights)).to_string(),
                position: item_position(&mut rng),
            })
            .collect();

        let mut dialogue_trees: HashMap<String, GeneratedDialogueTree> = HashMap::new();
        for npc in &npcs {
            let tree = generate_simple_dialogue_tree(
                &mut rng,
                npc,
                &resolved.name,
                &inner.registries.dialogue_snippets,
                base_ctx.game_hour,
                SimpleDialogueOptions { include_rumors: true, include_quest: npc.is_quest_giver, include_shop: npc.has_shop },
            );
            dialogue_trees.insert(format!("dialogue_{}", npc.id), tree);
        }

        let mut shops: HashMap<String, ShopInventory> = HashMap::new();
        for npc in npcs.iter().filter(|n| n.has_shop) {
            let shop_type = shop_type_for_role(&npc.role);
            let inventory = generate_shop_inventory(&mut rng, &npc.id, shop_type, base_ctx.player_level);
            shops.insert(npc.id.clone(), inventory);
        }

        let available_npcs: Vec<ironfrontier_core::context::AvailableEntity> = npcs
            .iter()
            .map(|n| ironfrontier_core::context::AvailableEntity {
                id: n.id.clone(),
                name: n.name.full_name(),
                tags: n.tags.clone(),
            })
            .collect();
        let available_items: Vec<ironfrontier_core::context::AvailableEntity> = items
            .iter()
            .enumerate()
            .map(|(i, item)| ironfrontier_core::context::AvailableEntity {
                id: format!("{}_{i}", item.item_id),
                name: item.item_id.clone(),
                tags: Vec::new(),
            })
            .collect();
        let available_enemies: Vec<ironfrontier_core::context::AvailableEntity> = inner
            .registries
            .enemy_templates
            .iter()
            .map(|t| ironfrontier_core::context::AvailableEntity {
                id: t.id.clone(),
                name: t.id.clone(),
                tags: t.factions.iter().chain(t.combat_tags.iter()).chain(t.behavior_tags.iter()).cloned().collect(),
            })
            .collect();

        let mut quests = Vec::new();
        for npc in npcs.iter().filter(|n| n.is_quest_giver) {
            let quest_ctx = QuestGenerationContext {
                base: base_ctx.clone(),
                available_npcs: available_npcs.clone(),
                available_items: available_items.clone(),
                available_locations: vec![ironfrontier_core::context::AvailableEntity {
                    id: resolved.id.clone(),
                    name: resolved.name.clone(),
                    tags: resolved.tags.clone(),
                }],
                available_enemies: available_enemies.clone(),
                giver_role: Some(npc.role.as_str().to_string()),
                giver_faction: Some(npc.faction.as_str().to_string()),
            };
            let qualifying: Vec<&ironfrontier_core::templates::quest_templates::QuestTemplate> = inner
                .registries
                .quest_templates
                .iter()
                .filter(|t| t.matches_level(base_ctx.player_level) && t.matches_giver(Some(npc.role.as_str()), Some(npc.faction.as_str())))
                .collect();
            if qualifying.is_empty() {
                continue;
            }
            let template = *rng.pick(&qualifying);
            let region_name = base_ctx.region_id.clone().unwrap_or_else(|| "the territory".to_string());
            quests.push(generate_quest(&mut rng, template, &quest_ctx, &npc.id, &npc.name.full_name(), &resolved.name, &region_name));
        }

        let content = ProceduralLocationContent {
            location_id: resolved.id.clone(),
            seed: location_seed,
            timestamp: 0,
            npcs: procedural_npcs,
            items,
            dialogue_trees,
            shops,
            quests,
            structure_states: HashMap::new(),
        };
        inner.cache.insert(resolved.id.clone(), content.clone());
        content
    }

    pub fn get_or_generate_npcs(&self, resolved: &ResolvedLocation, ctx: &GenerationContext, options: &GenerationOptions) -> Vec<ProceduralNpc> {
        self.generate_location_content(resolved, ctx, options).npcs
    }

    pub fn get_or_generate_items(&self, resolved: &ResolvedLocation, ctx: &GenerationContext, options: &GenerationOptions) -> Vec<WorldItemSpawn> {
        self.generate_location_content(resolved, ctx, options).items
    }

    pub fn get_or_generate_dialogue(&self, resolved: &ResolvedLocation, ctx: &GenerationContext, options: &GenerationOptions) -> HashMap<String, GeneratedDialogueTree> {
        self.generate_location_content(resolved, ctx, options).dialogue_trees
    }

    pub fn get_or_generate_shop(&self, resolved: &ResolvedLocation, ctx: &GenerationContext, options: &GenerationOptions) -> HashMap<String, ShopInventory> {
        self.generate_location_content(resolved, ctx, options).shops
    }

    /// Lazily draws and memoizes a structure's state per `(location_id,
    /// structure_key)`, 0.8/0.1/0.1 functional/broken/locked.
    pub fn get_or_generate_structure_state(&self, location_id: &str, structure_key: &str) -> StructureState {
        let mut guard = self.inner.lock().unwrap();
        let inner = guard.as_mut().unwrap_or_else(|| EngineError::NotInitialized.fatal());
        let cache_key = format!("{location_id}:{structure_key}");
        if let Some(state) = inner.structure_states.get(&cache_key) {
            return *state;
        }
        let location_seed = Self::location_seed(inner.world_seed, location_id);
        let mut rng = Rng::new(0).child(location_seed, structure_key);
        let roll = rng.float(0.0, 1.0);
        let state = if roll < 0.8 {
            StructureState::Functional
        } else if roll < 0.9 {
            StructureState::Broken
        } else {
            StructureState::Locked
        };
        inner.structure_states.insert(cache_key, state);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironfrontier_core::default_registries;

    // A private local instance per test, not the process-wide singleton,
    // so parallel test execution can't race on shared state.
    fn fresh(seed: u32) -> Orchestrator {
        let orchestrator = Orchestrator::new();
        orchestrator.initialize(seed, default_registries(), GenerationConfig::default());
        orchestrator
    }

    fn town(id: &str) -> ResolvedLocation {
        ResolvedLocation { id: id.to_string(), name: "Iron Gulch".to_string(), location_type: Some("town".to_string()), tags: Vec::new() }
    }

    #[test]
    fn cache_hit_returns_identical_content() {
        let orchestrator = fresh(42);
        let ctx = GenerationContext::default();
        let options = GenerationOptions::default();
        let loc = town("loc_cache_test");
        let a = orchestrator.generate_location_content(&loc, &ctx, &options);
        let b = orchestrator.generate_location_content(&loc, &ctx, &options);
        assert_eq!(a.npcs.len(), b.npcs.len());
        assert_eq!(a.seed, b.seed);
        for (x, y) in a.npcs.iter().zip(b.npcs.iter()) {
            assert_eq!(x.npc.id, y.npc.id);
        }
    }

    #[test]
    fn produces_nonempty_npc_roster_for_a_town() {
        let orchestrator = fresh(7);
        let ctx = GenerationContext::default();
        let options = GenerationOptions::default();
        let loc = town("loc_town_1");
        let content = orchestrator.generate_location_content(&loc, &ctx, &options);
        assert!(!content.npcs.is_empty());
        for tree in content.dialogue_trees.values() {
            assert!(tree.is_well_formed());
        }
    }

    #[test]
    fn ruin_infers_its_type_from_name_when_untyped() {
        let resolved = ResolvedLocation { id: "loc_x".to_string(), name: "Abandoned Ruin at Dead Man's Pass".to_string(), location_type: None, tags: Vec::new() };
        assert_eq!(infer_location_type(&resolved), "ruin");
    }

    #[test]
    fn structure_state_is_memoized_per_key() {
        let orchestrator = fresh(9);
        let a = orchestrator.get_or_generate_structure_state("loc_1", "door_1");
        let b = orchestrator.get_or_generate_structure_state("loc_1", "door_1");
        assert_eq!(a, b);
    }

    #[test]
    fn structure_state_frequency_is_close_to_expected() {
        let orchestrator = fresh(123);
        let mut functional = 0;
        let total = 2000;
        for i in 0..total {
            let state = orchestrator.get_or_generate_structure_state("loc_freq", &format!("structure_{i}"));
            if state == StructureState::Functional {
                functional += 1;
            }
        }
        let rate = functional as f64 / total as f64;
        assert!((rate - 0.8).abs() < 0.05, "observed functional rate {rate} too far from 0.8");
    }
}
