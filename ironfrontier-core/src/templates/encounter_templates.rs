use crate::error::TemplateValidationError;

#[derive(Debug, Clone)]
pub struct EnemyGroup {
    pub enemy_tag: String,
    pub count_range: (u32, u32),
}

#[derive(Debug, Clone)]
pub struct EncounterTemplate {
    pub id: String,
    pub enemy_groups: Vec<EnemyGroup>,
    pub level_scale_multiplier: f64,
    pub xp_range: (u64, u64),
    pub gold_range: (u64, u64),
    pub difficulty_range: (u32, u32),
    /// Empty = unrestricted.
    pub valid_biomes: Vec<String>,
    pub valid_location_types: Vec<String>,
    pub valid_times_of_day: Vec<(u32, u32)>,
    pub description_template: String,
}

impl EncounterTemplate {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.difficulty_range.0 > self.difficulty_range.1 {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "difficulty_range lo > hi".into(),
            });
        }
        if self.enemy_groups.is_empty() {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "must define at least one enemy group".into(),
            });
        }
        for group in &self.enemy_groups {
            if group.count_range.0 > group.count_range.1 {
                return Err(TemplateValidationError {
                    id: self.id.clone(),
                    reason: format!("enemy group '{}' has count lo > hi", group.enemy_tag),
                });
            }
        }
        Ok(())
    }

    pub fn valid_for_location(&self, location_type: &str) -> bool {
        self.valid_location_types.is_empty()
            || self.valid_location_types.iter().any(|t| t == location_type)
    }
}

fn group(tag: &str, range: (u32, u32)) -> EnemyGroup {
    EnemyGroup { enemy_tag: tag.into(), count_range: range }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_encounter_templates() -> Vec<EncounterTemplate> {
    vec![
        EncounterTemplate {
            id: "bandit_ambush".into(),
            enemy_groups: vec![group("outlaws", (2, 4))],
            level_scale_multiplier: 1.0,
            xp_range: (30, 80),
            gold_range: (10, 40),
            difficulty_range: (1, 5),
            valid_biomes: Vec::new(),
            valid_location_types: strs(&["outpost", "camp", "ruin"]),
            valid_times_of_day: Vec::new(),
            description_template: "Bandits spring from the rocks near {{location}}.".into(),
        },
        EncounterTemplate {
            id: "gang_standoff".into(),
            enemy_groups: vec![group("outlaws", (3, 6))],
            level_scale_multiplier: 1.3,
            xp_range: (80, 200),
            gold_range: (30, 100),
            difficulty_range: (3, 9),
            valid_biomes: Vec::new(),
            valid_location_types: strs(&["town", "city", "camp"]),
            valid_times_of_day: Vec::new(),
            description_template: "A gang of outlaws squares off in the street at {{location}}.".into(),
        },
        EncounterTemplate {
            id: "wildlife_encounter".into(),
            enemy_groups: vec![group("animal", (1, 3))],
            level_scale_multiplier: 0.7,
            xp_range: (10, 30),
            gold_range: (0, 5),
            difficulty_range: (1, 3),
            valid_biomes: Vec::new(),
            valid_location_types: strs(&["ranch", "outpost", "camp", "ruin"]),
            valid_times_of_day: Vec::new(),
            description_template: "Something stirs in the brush outside {{location}}.".into(),
        },
        EncounterTemplate {
            id: "raider_raid".into(),
            enemy_groups: vec![group("outlaws", (3, 8))],
            level_scale_multiplier: 1.4,
            xp_range: (100, 250),
            gold_range: (20, 70),
            difficulty_range: (4, 10),
            valid_biomes: Vec::new(),
            valid_location_types: strs(&["ranch", "town"]),
            valid_times_of_day: Vec::new(),
            description_template: "Raiders hit {{location}} hard and fast.".into(),
        },
        EncounterTemplate {
            id: "hired_gun_hit".into(),
            enemy_groups: vec![group("outlaws", (1, 2))],
            level_scale_multiplier: 1.6,
            xp_range: (60, 140),
            gold_range: (15, 50),
            difficulty_range: (3, 8),
            valid_biomes: Vec::new(),
            valid_location_types: Vec::new(),
            valid_times_of_day: Vec::new(),
            description_template: "A hired gun has been waiting, rifle trained on the approach to {{location}}.".into(),
        },
    ]
}
