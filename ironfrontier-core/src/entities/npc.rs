use serde::{Deserialize, Serialize};

use crate::enums::{Faction, Gender, Role};

use super::hex::HexCoord;

/// Structured name parts from the name generator (§4.3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonName {
    pub first_name: String,
    pub last_name: String,
    pub nickname: Option<String>,
    pub title: Option<String>,
}

impl PersonName {
    /// `fullName`: optional title, first, `"nickname"`, last — in that
    /// canonical order, omitting any part that's absent.
    pub fn full_name(&self) -> String {
        let mut parts = Vec::new();
        if let Some(title) = &self.title {
            parts.push(title.clone());
        }
        parts.push(self.first_name.clone());
        if let Some(nickname) = &self.nickname {
            parts.push(format!("\"{nickname}\""));
        }
        parts.push(self.last_name.clone());
        parts.join(" ")
    }
}

/// Six personality traits, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PersonalityVector {
    pub aggression: f64,
    pub friendliness: f64,
    pub curiosity: f64,
    pub greed: f64,
    pub honesty: f64,
    pub lawfulness: f64,
}

impl PersonalityVector {
    pub fn trait_value(&self, trait_name: &str) -> Option<f64> {
        match trait_name {
            "aggression" => Some(self.aggression),
            "friendliness" => Some(self.friendliness),
            "curiosity" => Some(self.curiosity),
            "greed" => Some(self.greed),
            "honesty" => Some(self.honesty),
            "lawfulness" => Some(self.lawfulness),
            _ => None,
        }
    }

    pub fn all_in_unit_range(&self) -> bool {
        [
            self.aggression,
            self.friendliness,
            self.curiosity,
            self.greed,
            self.honesty,
            self.lawfulness,
        ]
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
    }
}

/// The core generated NPC record (§3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedNpc {
    pub id: String,
    pub template_id: String,
    pub name: PersonName,
    pub role: Role,
    pub faction: Faction,
    pub gender: Gender,
    pub personality: PersonalityVector,
    pub description: String,
    pub backstory: String,
    pub is_quest_giver: bool,
    pub has_shop: bool,
    pub tags: Vec<String>,
    pub seed: u32,
}

/// A [`GeneratedNpc`] projected into the host game's runtime NPC
/// contract, with a spawn coordinate and a dialogue-tree id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProceduralNpc {
    pub npc: GeneratedNpc,
    pub spawn: HexCoord,
    pub dialogue_tree_id: String,
}
