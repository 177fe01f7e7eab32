use crate::error::TemplateValidationError;

#[derive(Debug, Clone)]
pub struct BaseStats {
    pub health: i64,
    pub damage: i64,
    pub armor: i64,
    pub accuracy: i64,
    pub evasion: i64,
}

/// Per-level scaling: multiplicative for health/damage/armor, additive
/// for accuracy/evasion (§3 EnemyTemplate).
#[derive(Debug, Clone)]
pub struct LevelScaling {
    pub health_mult: f64,
    pub damage_mult: f64,
    pub armor_mult: f64,
    pub accuracy_add: i64,
    pub evasion_add: i64,
}

#[derive(Debug, Clone)]
pub struct EnemyNamePool {
    pub prefixes: Vec<String>,
    pub titles: Vec<String>,
    pub suffixes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EnemyTemplate {
    pub id: String,
    pub base_stats: BaseStats,
    pub scaling: LevelScaling,
    pub name_pool: EnemyNamePool,
    pub behavior_tags: Vec<String>,
    pub combat_tags: Vec<String>,
    pub factions: Vec<String>,
    pub xp_modifier: f64,
    pub min_level: u32,
    pub max_level: u32,
}

impl EnemyTemplate {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.min_level > self.max_level {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "min_level > max_level".into(),
            });
        }
        if self.name_pool.prefixes.is_empty() {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "name pool must carry at least one prefix".into(),
            });
        }
        Ok(())
    }

    /// Stats for `level`, clamped to `[min_level, max_level]`, with
    /// accuracy/evasion capped at 100 after scaling (§3). The exponent/
    /// additive basis is `level - 1`, as written in the formula, not an
    /// offset from `min_level`.
    pub fn stats_at_level(&self, level: u32) -> BaseStats {
        let level = level.clamp(self.min_level, self.max_level);
        let steps = level.saturating_sub(1) as f64;
        BaseStats {
            health: (self.base_stats.health as f64 * self.scaling.health_mult.powf(steps)) as i64,
            damage: (self.base_stats.damage as f64 * self.scaling.damage_mult.powf(steps)) as i64,
            armor: (self.base_stats.armor as f64 * self.scaling.armor_mult.powf(steps)) as i64,
            accuracy: (self.base_stats.accuracy + self.scaling.accuracy_add * steps as i64).min(100),
            evasion: (self.base_stats.evasion + self.scaling.evasion_add * steps as i64).min(100),
        }
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_enemy_templates() -> Vec<EnemyTemplate> {
    vec![
        EnemyTemplate {
            id: "bandit_gunman".into(),
            base_stats: BaseStats { health: 40, damage: 8, armor: 2, accuracy: 60, evasion: 10 },
            scaling: LevelScaling { health_mult: 1.12, damage_mult: 1.08, armor_mult: 1.05, accuracy_add: 2, evasion_add: 1 },
            name_pool: EnemyNamePool {
                prefixes: strs(&["Dusty", "Rattler", "One-Eyed", "Crooked"]),
                titles: strs(&["the Bandit", "the Gunman"]),
                suffixes: strs(&["Jack", "Cole", "Reyes"]),
            },
            behavior_tags: strs(&["aggressive"]),
            combat_tags: strs(&["ranged", "human"]),
            factions: strs(&["outlaws"]),
            xp_modifier: 1.0,
            min_level: 1,
            max_level: 15,
        },
        EnemyTemplate {
            id: "outlaw_gang_leader".into(),
            base_stats: BaseStats { health: 90, damage: 16, armor: 4, accuracy: 70, evasion: 15 },
            scaling: LevelScaling { health_mult: 1.15, damage_mult: 1.1, armor_mult: 1.06, accuracy_add: 2, evasion_add: 1 },
            name_pool: EnemyNamePool {
                prefixes: strs(&["Black", "Iron", "Bloody"]),
                titles: strs(&["the Gang Leader", "the Outlaw Boss"]),
                suffixes: strs(&["Dalton", "McCray", "Slade"]),
            },
            behavior_tags: strs(&["aggressive", "pack_hunter"]),
            combat_tags: strs(&["ranged", "human", "elite"]),
            factions: strs(&["outlaws"]),
            xp_modifier: 2.5,
            min_level: 3,
            max_level: 20,
        },
        EnemyTemplate {
            id: "rattlesnake".into(),
            base_stats: BaseStats { health: 15, damage: 6, armor: 0, accuracy: 50, evasion: 30 },
            scaling: LevelScaling { health_mult: 1.1, damage_mult: 1.05, armor_mult: 1.0, accuracy_add: 1, evasion_add: 2 },
            name_pool: EnemyNamePool {
                prefixes: strs(&["Diamondback", "Sidewinder"]),
                titles: strs(&[]),
                suffixes: strs(&[]),
            },
            behavior_tags: strs(&["skittish", "ambusher"]),
            combat_tags: strs(&["melee", "animal"]),
            factions: Vec::new(),
            xp_modifier: 0.4,
            min_level: 1,
            max_level: 8,
        },
        EnemyTemplate {
            id: "raider_marauder".into(),
            base_stats: BaseStats { health: 55, damage: 11, armor: 3, accuracy: 55, evasion: 12 },
            scaling: LevelScaling { health_mult: 1.13, damage_mult: 1.09, armor_mult: 1.05, accuracy_add: 2, evasion_add: 1 },
            name_pool: EnemyNamePool {
                prefixes: strs(&["Savage", "Grim", "Feral"]),
                titles: strs(&["the Raider", "the Marauder"]),
                suffixes: strs(&["Crow", "Vance"]),
            },
            behavior_tags: strs(&["aggressive", "brawler"]),
            combat_tags: strs(&["melee", "human"]),
            factions: strs(&["outlaws"]),
            xp_modifier: 1.2,
            min_level: 2,
            max_level: 16,
        },
        EnemyTemplate {
            id: "hired_gun_sniper".into(),
            base_stats: BaseStats { health: 35, damage: 20, armor: 2, accuracy: 80, evasion: 8 },
            scaling: LevelScaling { health_mult: 1.1, damage_mult: 1.1, armor_mult: 1.04, accuracy_add: 2, evasion_add: 1 },
            name_pool: EnemyNamePool {
                prefixes: strs(&["Silent", "Long-Shot"]),
                titles: strs(&["the Sharpshooter"]),
                suffixes: strs(&["Hale", "Winters"]),
            },
            behavior_tags: strs(&["sniper", "defensive"]),
            combat_tags: strs(&["ranged", "human"]),
            factions: strs(&["outlaws", "railroad_company"]),
            xp_modifier: 1.5,
            min_level: 4,
            max_level: 18,
        },
    ]
}
