use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ConfigError;

/// Default counts and budgets the generators fall back to when a caller's
/// [`crate::context::GenerationOptions`] doesn't override them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    pub npc: NpcCountConfig,
    pub items: ItemCountConfig,
    pub world: WorldDefaultsConfig,
    pub retries: RetryConfig,
    pub jitter: JitterConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NpcCountConfig {
    /// Per-location-type `{background, notable}` defaults, keyed by the
    /// location type name (§4.9 step 3).
    pub defaults_by_location_type: HashMap<String, (u32, u32)>,
    pub fallback: (u32, u32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemCountConfig {
    pub defaults_by_location_type: HashMap<String, u32>,
    pub fallback: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldDefaultsConfig {
    pub region_count: u32,
    pub locations_per_region: (u32, u32),
    pub schema_version: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// §4.4 name-uniqueness regeneration cap.
    pub name_uniqueness_attempts: u32,
    /// §4.3 constrained place-name rejection-loop budget.
    pub place_name_length_attempts: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JitterConfig {
    /// §4.7 enemy stat jitter epsilons.
    pub health_damage_epsilon: f64,
    pub armor_accuracy_evasion_epsilon: f64,
}

impl GenerationConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("IRONFRONTIER"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let mut npc_defaults = HashMap::new();
        npc_defaults.insert("city".to_string(), (12, 4));
        npc_defaults.insert("town".to_string(), (6, 3));
        npc_defaults.insert("outpost".to_string(), (3, 2));
        npc_defaults.insert("camp".to_string(), (2, 1));
        npc_defaults.insert("ranch".to_string(), (4, 2));
        npc_defaults.insert("mine".to_string(), (3, 1));
        npc_defaults.insert("ruin".to_string(), (1, 0));

        let mut item_defaults = HashMap::new();
        item_defaults.insert("city".to_string(), 30);
        item_defaults.insert("town".to_string(), 18);
        item_defaults.insert("outpost".to_string(), 10);
        item_defaults.insert("camp".to_string(), 8);
        item_defaults.insert("ranch".to_string(), 10);
        item_defaults.insert("mine".to_string(), 10);
        item_defaults.insert("ruin".to_string(), 12);

        Self {
            npc: NpcCountConfig {
                defaults_by_location_type: npc_defaults,
                fallback: (4, 2),
            },
            items: ItemCountConfig {
                defaults_by_location_type: item_defaults,
                fallback: 10,
            },
            world: WorldDefaultsConfig {
                region_count: 4,
                locations_per_region: (3, 7),
                schema_version: 1,
            },
            retries: RetryConfig {
                name_uniqueness_attempts: 10,
                place_name_length_attempts: 20,
            },
            jitter: JitterConfig {
                health_damage_epsilon: 0.10,
                armor_accuracy_evasion_epsilon: 0.05,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_known_location_type() {
        let cfg = GenerationConfig::default();
        for t in ["city", "town", "outpost", "camp", "ranch", "mine", "ruin"] {
            assert!(cfg.npc.defaults_by_location_type.contains_key(t));
            assert!(cfg.items.defaults_by_location_type.contains_key(t));
        }
    }

    #[test]
    fn ruin_defaults_match_scenario_2() {
        let cfg = GenerationConfig::default();
        assert_eq!(cfg.npc.defaults_by_location_type["ruin"], (1, 0));
        assert_eq!(cfg.items.defaults_by_location_type["ruin"], 12);
    }
}
