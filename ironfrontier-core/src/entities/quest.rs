use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::enums::{QuestArchetype, TargetType};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestObjective {
    pub id: String,
    pub description: String,
    pub target_type: TargetType,
    pub target_tags: Vec<String>,
    pub target_id: Option<String>,
    pub count: u32,
    pub optional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestStage {
    pub id: String,
    pub title: String,
    pub description: String,
    pub on_start: String,
    pub on_complete: String,
    pub objectives: Vec<QuestObjective>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestRewards {
    pub xp: u64,
    pub gold: u64,
    pub reputation: HashMap<String, i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuest {
    pub id: String,
    pub template_id: String,
    pub archetype: QuestArchetype,
    pub title: String,
    pub description: String,
    pub stages: Vec<QuestStage>,
    pub rewards: QuestRewards,
    pub giver_id: String,
    pub targets: HashMap<String, String>,
    pub location_ids: Vec<String>,
    pub level: u32,
    pub tags: Vec<String>,
    pub repeatable: bool,
    pub cooldown_hours: Option<u32>,
    pub completed: bool,
    pub failed: bool,
    pub seed: u32,
}

impl GeneratedQuest {
    /// Every non-null objective target id across all stages.
    pub fn bound_target_ids(&self) -> Vec<&str> {
        self.stages
            .iter()
            .flat_map(|s| s.objectives.iter())
            .filter_map(|o| o.target_id.as_deref())
            .collect()
    }
}
