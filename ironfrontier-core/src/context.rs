use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Per-call input threaded through every generator invoked for one
/// location (§3 Context).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationContext {
    pub world_seed: u32,
    pub location_id: Option<String>,
    pub region_id: Option<String>,
    pub player_level: u32,
    pub game_hour: u32,
    pub faction_tension: HashMap<String, f64>,
    pub active_events: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for GenerationContext {
    fn default() -> Self {
        Self {
            world_seed: 0,
            location_id: None,
            region_id: None,
            player_level: 1,
            game_hour: 12,
            faction_tension: HashMap::new(),
            active_events: Vec::new(),
            tags: Vec::new(),
        }
    }
}

impl GenerationContext {
    pub fn with_overrides(mut self, overrides: &GenerationContextOverrides) -> Self {
        if let Some(level) = overrides.player_level {
            self.player_level = level;
        }
        if let Some(hour) = overrides.game_hour {
            self.game_hour = hour;
        }
        if let Some(tension) = &overrides.faction_tension {
            self.faction_tension = tension.clone();
        }
        if let Some(events) = &overrides.active_events {
            self.active_events = events.clone();
        }
        if let Some(tags) = &overrides.tags {
            self.tags = tags.clone();
        }
        self
    }
}

/// Partial override set injected into every generated context
/// (`contextOverrides` in §6's option table).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationContextOverrides {
    pub player_level: Option<u32>,
    pub game_hour: Option<u32>,
    pub faction_tension: Option<HashMap<String, f64>>,
    pub active_events: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

/// A candidate entity the quest generator may bind an objective to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableEntity {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
}

/// Extends [`GenerationContext`] with the pools a quest's objectives may
/// bind against (§3, §4.5).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestGenerationContext {
    pub base: GenerationContext,
    pub available_npcs: Vec<AvailableEntity>,
    pub available_items: Vec<AvailableEntity>,
    pub available_locations: Vec<AvailableEntity>,
    pub available_enemies: Vec<AvailableEntity>,
    pub giver_role: Option<String>,
    pub giver_faction: Option<String>,
}

/// Configuration options accepted by generation entry points (§6).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub npc_count: Option<(u32, u32)>,
    pub item_count: Option<u32>,
    pub region_count: Option<u32>,
    pub locations_per_region: Option<(u32, u32)>,
    pub context_overrides: Option<GenerationContextOverrides>,
}
