use std::collections::HashMap;

use crate::error::TemplateValidationError;

#[derive(Debug, Clone)]
pub struct TraitRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone)]
pub struct NpcTemplate {
    pub id: String,
    pub role: String,
    pub allowed_factions: Vec<String>,
    /// `[male, female, neutral]`, summing to at most 1.
    pub gender_distribution: [f64; 3],
    pub name_origin_weights: Vec<(String, f64)>,
    pub personality_ranges: HashMap<String, TraitRange>,
    pub backstory_templates: Vec<String>,
    pub description_templates: Vec<String>,
    pub quest_giver_probability: f64,
    pub shop_probability: f64,
    pub valid_location_types: Vec<String>,
    pub min_importance: f64,
    pub tags: Vec<String>,
}

impl NpcTemplate {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        let sum: f64 = self.gender_distribution.iter().sum();
        if sum > 1.0 + f64::EPSILON {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: format!("gender distribution sums to {sum}, must be <= 1"),
            });
        }
        for (trait_name, range) in &self.personality_ranges {
            if range.min > range.max {
                return Err(TemplateValidationError {
                    id: self.id.clone(),
                    reason: format!("personality range for '{trait_name}' has min > max"),
                });
            }
        }
        if self.backstory_templates.is_empty() || self.description_templates.is_empty() {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "must carry at least one backstory and one description template".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.min_importance) {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "min_importance must be in [0, 1]".into(),
            });
        }
        Ok(())
    }

    /// Empty `valid_location_types` means "all".
    pub fn valid_for_location(&self, location_type: &str) -> bool {
        self.valid_location_types.is_empty()
            || self.valid_location_types.iter().any(|t| t == location_type)
    }
}

fn ranges(pairs: &[(&str, f64, f64)]) -> HashMap<String, TraitRange> {
    pairs
        .iter()
        .map(|(k, lo, hi)| (k.to_string(), TraitRange { min: *lo, max: *hi }))
        .collect()
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_npc_templates() -> Vec<NpcTemplate> {
    vec![
        NpcTemplate {
            id: "merchant_general_store".into(),
            role: "merchant".into(),
            allowed_factions: strs(&["settlers", "railroad_company"]),
            gender_distribution: [0.45, 0.45, 0.10],
            name_origin_weights: vec![("anglo".into(), 0.5), ("german".into(), 0.3), ("irish".into(), 0.2)],
            personality_ranges: ranges(&[("greed", 0.3, 0.8), ("honesty", 0.3, 0.9), ("friendliness", 0.4, 0.9)]),
            backstory_templates: strs(&[
                "{{name}} came west to build something lasting, and {{possessive}} store in {{location}} is it.",
            ]),
            description_templates: strs(&["A {{role}} with an eye for a fair deal, keeping shop in {{location}}."]),
            quest_giver_probability: 0.2,
            shop_probability: 0.9,
            valid_location_types: Vec::new(),
            min_importance: 0.4,
            tags: strs(&["civilian", "trade"]),
        },
        NpcTemplate {
            id: "town_sheriff".into(),
            role: "sheriff".into(),
            allowed_factions: strs(&["lawmen"]),
            gender_distribution: [0.7, 0.25, 0.05],
            name_origin_weights: vec![("anglo".into(), 0.6), ("irish".into(), 0.4)],
            personality_ranges: ranges(&[("lawfulness", 0.6, 1.0), ("aggression", 0.3, 0.7)]),
            backstory_templates: strs(&[
                "{{name}} pinned on the badge after {{location}} ran out of lawmen willing to wear it.",
            ]),
            description_templates: strs(&["The {{role}} of {{location}}, steady-eyed and quick on the draw."]),
            quest_giver_probability: 0.6,
            shop_probability: 0.0,
            valid_location_types: strs(&["town", "city"]),
            min_importance: 0.7,
            tags: strs(&["authority", "quest_giver"]),
        },
        NpcTemplate {
            id: "outlaw_gunslinger".into(),
            role: "outlaw".into(),
            allowed_factions: strs(&["outlaws"]),
            gender_distribution: [0.6, 0.35, 0.05],
            name_origin_weights: vec![("anglo".into(), 0.4), ("spanish".into(), 0.4), ("irish".into(), 0.2)],
            personality_ranges: ranges(&[("aggression", 0.6, 1.0), ("lawfulness", 0.0, 0.3), ("honesty", 0.0, 0.5)]),
            backstory_templates: strs(&[
                "{{name}} left a trail of trouble from the territory line clean to {{location}}.",
            ]),
            description_templates: strs(&["A hard-eyed {{role}} who doesn't stay in one place long."]),
            quest_giver_probability: 0.3,
            shop_probability: 0.1,
            valid_location_types: strs(&["camp", "outpost", "ruin", "town"]),
            min_importance: 0.5,
            tags: strs(&["hostile_capable"]),
        },
        NpcTemplate {
            id: "rancher".into(),
            role: "rancher".into(),
            allowed_factions: strs(&["cattle_barons", "settlers"]),
            gender_distribution: [0.5, 0.45, 0.05],
            name_origin_weights: vec![("anglo".into(), 0.6), ("spanish".into(), 0.4)],
            personality_ranges: ranges(&[("greed", 0.3, 0.7), ("lawfulness", 0.4, 0.9)]),
            backstory_templates: strs(&["{{name}} built a spread outside {{location}} from nothing but grit."]),
            description_templates: strs(&["A weathered {{role}} who knows every head of cattle by sight."]),
            quest_giver_probability: 0.35,
            shop_probability: 0.0,
            valid_location_types: strs(&["ranch", "town"]),
            min_importance: 0.4,
            tags: strs(&["civilian"]),
        },
        NpcTemplate {
            id: "prospector".into(),
            role: "prospector".into(),
            allowed_factions: strs(&["prospectors"]),
            gender_distribution: [0.65, 0.3, 0.05],
            name_origin_weights: vec![("anglo".into(), 0.3), ("chinese".into(), 0.4), ("irish".into(), 0.3)],
            personality_ranges: ranges(&[("greed", 0.4, 0.9), ("curiosity", 0.5, 1.0)]),
            backstory_templates: strs(&["{{name}} has been chasing a vein of silver through {{location}} for years."]),
            description_templates: strs(&["A dust-covered {{role}}, forever certain the next claim pays out."]),
            quest_giver_probability: 0.3,
            shop_probability: 0.0,
            valid_location_types: strs(&["mine", "camp"]),
            min_importance: 0.3,
            tags: strs(&["civilian"]),
        },
        NpcTemplate {
            id: "preacher".into(),
            role: "preacher".into(),
            allowed_factions: strs(&["settlers"]),
            gender_distribution: [0.6, 0.35, 0.05],
            name_origin_weights: vec![("anglo".into(), 0.7), ("irish".into(), 0.3)],
            personality_ranges: ranges(&[("honesty", 0.5, 1.0), ("lawfulness", 0.5, 1.0)]),
            backstory_templates: strs(&["{{name}} raised a chapel in {{location}} with {{possessive}} own two hands."]),
            description_templates: strs(&["The {{role}} of {{location}}, a steady voice in uncertain times."]),
            quest_giver_probability: 0.4,
            shop_probability: 0.0,
            valid_location_types: strs(&["town", "city"]),
            min_importance: 0.5,
            tags: strs(&["civilian"]),
        },
        NpcTemplate {
            id: "bartender".into(),
            role: "bartender".into(),
            allowed_factions: strs(&["settlers", "outlaws"]),
            gender_distribution: [0.5, 0.45, 0.05],
            name_origin_weights: vec![("anglo".into(), 0.5), ("german".into(), 0.3), ("spanish".into(), 0.2)],
            personality_ranges: ranges(&[("friendliness", 0.3, 0.8), ("curiosity", 0.4, 0.9)]),
            backstory_templates: strs(&["{{name}} hears every secret {{location}} has to offer, one drink at a time."]),
            description_templates: strs(&["Keeper of the saloon, always good for a rumor."]),
            quest_giver_probability: 0.25,
            shop_probability: 0.5,
            valid_location_types: strs(&["town", "city", "camp"]),
            min_importance: 0.3,
            tags: strs(&["civilian"]),
        },
        NpcTemplate {
            id: "homesteader".into(),
            role: "homesteader".into(),
            allowed_factions: strs(&["settlers"]),
            gender_distribution: [0.4, 0.55, 0.05],
            name_origin_weights: vec![("anglo".into(), 0.4), ("german".into(), 0.3), ("native".into(), 0.3)],
            personality_ranges: ranges(&[("honesty", 0.4, 0.9), ("friendliness", 0.3, 0.8)]),
            backstory_templates: strs(&["{{name}} staked a claim near {{location}} hoping for a quieter life."]),
            description_templates: strs(&["A {{role}} working the land just outside {{location}}."]),
            quest_giver_probability: 0.15,
            shop_probability: 0.0,
            valid_location_types: strs(&["ranch", "outpost", "camp"]),
            min_importance: 0.2,
            tags: strs(&["civilian", "background"]),
        },
    ]
}
