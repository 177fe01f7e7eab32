use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::enums::StructureState;

use super::dialogue::GeneratedDialogueTree;
use super::item::WorldItemSpawn;
use super::npc::ProceduralNpc;
use super::quest::GeneratedQuest;
use super::shop::ShopInventory;

/// The orchestrator's per-location output record (§3). Owned exclusively
/// by the orchestrator; quests/dialogue trees/shops are owned here and
/// referenced by id from NPCs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProceduralLocationContent {
    pub location_id: String,
    pub seed: u32,
    pub timestamp: i64,
    pub npcs: Vec<ProceduralNpc>,
    pub items: Vec<WorldItemSpawn>,
    pub dialogue_trees: HashMap<String, GeneratedDialogueTree>,
    pub shops: HashMap<String, ShopInventory>,
    pub quests: Vec<GeneratedQuest>,
    pub structure_states: HashMap<String, StructureState>,
}
