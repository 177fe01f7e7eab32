use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyStats {
    pub health: i64,
    pub damage: i64,
    pub armor: i64,
    pub accuracy: i64,
    pub evasion: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEnemy {
    pub template_id: String,
    pub name: String,
    pub level: u32,
    pub stats: EnemyStats,
    pub xp_value: u64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEncounter {
    pub id: String,
    pub template_id: String,
    pub description: String,
    pub enemies: Vec<GeneratedEnemy>,
    pub difficulty: u32,
    pub xp_reward: u64,
    pub gold_reward: u64,
    pub seed: u32,
}
