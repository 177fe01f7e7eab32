//! Static template and pool registries (§2: "Template & Pool Registries").
//!
//! Loaded once at startup from constant data. Any individual template
//! that fails structural validation is logged and dropped; generation
//! proceeds with the remainder (§7 — template validation errors are
//! never fatal).

pub mod building_templates;
pub mod dialogue_snippets;
pub mod encounter_templates;
pub mod enemy_templates;
pub mod name_pools;
pub mod npc_templates;
pub mod quest_templates;
pub mod location_templates;

use building_templates::BuildingTemplate;
use dialogue_snippets::DialogueSnippet;
use encounter_templates::EncounterTemplate;
use enemy_templates::EnemyTemplate;
use location_templates::LocationTemplate;
use name_pools::{NamePool, PlaceNamePool};
use npc_templates::NpcTemplate;
use quest_templates::QuestTemplate;

/// Every template registry the generation pipeline draws from, loaded
/// once and held for the process lifetime.
#[derive(Debug, Clone)]
pub struct Registries {
    pub name_pools: Vec<NamePool>,
    pub place_name_pools: Vec<PlaceNamePool>,
    pub dialogue_snippets: Vec<DialogueSnippet>,
    pub npc_templates: Vec<NpcTemplate>,
    pub quest_templates: Vec<QuestTemplate>,
    pub encounter_templates: Vec<EncounterTemplate>,
    pub enemy_templates: Vec<EnemyTemplate>,
    pub building_templates: Vec<BuildingTemplate>,
    pub location_templates: Vec<LocationTemplate>,
}

impl Registries {
    pub fn name_pool(&self, origin: &str) -> Option<&NamePool> {
        self.name_pools.iter().find(|p| p.origin == origin)
    }

    pub fn place_name_pool(&self, location_type: &str) -> Option<&PlaceNamePool> {
        self.place_name_pools.iter().find(|p| p.location_type == location_type)
    }

    pub fn npc_templates_for_location(&self, location_type: &str) -> Vec<&NpcTemplate> {
        self.npc_templates
            .iter()
            .filter(|t| t.valid_for_location(location_type))
            .collect()
    }

    pub fn encounter_templates_for_location(&self, location_type: &str) -> Vec<&EncounterTemplate> {
        self.encounter_templates
            .iter()
            .filter(|t| t.valid_for_location(location_type))
            .collect()
    }

    pub fn enemy_template(&self, id: &str) -> Option<&EnemyTemplate> {
        self.enemy_templates.iter().find(|t| t.id == id)
    }

    pub fn building_template(&self, id: &str) -> Option<&BuildingTemplate> {
        self.building_templates.iter().find(|t| t.id == id)
    }

    pub fn location_templates_for_type(&self, location_type: &str) -> Vec<&LocationTemplate> {
        self.location_templates
            .iter()
            .filter(|t| t.location_type == location_type)
            .collect()
    }
}

fn keep_valid<T, E, F>(items: Vec<T>, validate: F) -> Vec<T>
where
    F: Fn(&T) -> Result<(), E>,
    E: std::fmt::Display,
{
    items
        .into_iter()
        .filter(|item| match validate(item) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("dropping invalid template: {e}");
                false
            }
        })
        .collect()
}

/// Builds the default registries from constant data, validating and
/// dropping anything structurally unsound (§7, §9).
pub fn default_registries() -> Registries {
    Registries {
        name_pools: keep_valid(name_pools::default_name_pools(), NamePool::validate),
        place_name_pools: keep_valid(name_pools::default_place_name_pools(), PlaceNamePool::validate),
        dialogue_snippets: keep_valid(dialogue_snippets::default_dialogue_snippets(), DialogueSnippet::validate),
        npc_templates: keep_valid(npc_templates::default_npc_templates(), NpcTemplate::validate),
        quest_templates: keep_valid(quest_templates::default_quest_templates(), QuestTemplate::validate),
        encounter_templates: keep_valid(encounter_templates::default_encounter_templates(), EncounterTemplate::validate),
        enemy_templates: keep_valid(enemy_templates::default_enemy_templates(), EnemyTemplate::validate),
        building_templates: keep_valid(building_templates::default_building_templates(), BuildingTemplate::validate),
        location_templates: keep_valid(location_templates::default_location_templates(), LocationTemplate::validate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registries_are_non_empty() {
        let reg = default_registries();
        assert!(!reg.name_pools.is_empty());
        assert!(!reg.place_name_pools.is_empty());
        assert!(!reg.dialogue_snippets.is_empty());
        assert!(!reg.npc_templates.is_empty());
        assert!(!reg.quest_templates.is_empty());
        assert!(!reg.encounter_templates.is_empty());
        assert!(!reg.enemy_templates.is_empty());
        assert!(!reg.building_templates.is_empty());
        assert!(!reg.location_templates.is_empty());
    }

    #[test]
    fn every_location_type_has_a_template() {
        use crate::enums::LocationType;
        let reg = default_registries();
        for lt in LocationType::all() {
            assert!(
                !reg.location_templates_for_type(lt.as_str()).is_empty(),
                "missing location template for {}",
                lt.as_str()
            );
        }
    }
}
