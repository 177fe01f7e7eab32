//! Per-enemy stat scaling, jitter, and naming (§4.7).

use ironfrontier_core::config::JitterConfig;
use ironfrontier_core::entities::{EnemyStats, GeneratedEnemy};
use ironfrontier_core::rng::Rng;
use ironfrontier_core::templates::enemy_templates::EnemyTemplate;

/// Templates matching a tag act as the encounter groups' `enemy_tag`
/// filter: match against factions, combat tags, or behavior tags rather
/// than a direct id lookup.
pub fn enemies_matching_tag<'a>(templates: &'a [EnemyTemplate], tag: &str) -> Vec<&'a EnemyTemplate> {
    templates
        .iter()
        .filter(|t| t.factions.iter().any(|f| f == tag) || t.combat_tags.iter().any(|c| c == tag) || t.behavior_tags.iter().any(|b| b == tag))
        .collect()
}

fn base_name(template: &EnemyTemplate) -> String {
    template
        .id
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn generate_name(rng: &mut Rng, template: &EnemyTemplate) -> String {
    let mut parts = Vec::new();
    let has_prefix = !template.name_pool.prefixes.is_empty() && rng.bool(0.5);
    if has_prefix {
        parts.push(rng.pick(&template.name_pool.prefixes).clone());
    } else if !template.name_pool.titles.is_empty() && rng.bool(0.3) {
        parts.push(rng.pick(&template.name_pool.titles).clone());
    }
    parts.push(base_name(template));
    if !template.name_pool.suffixes.is_empty() && rng.bool(0.2) {
        parts.push(rng.pick(&template.name_pool.suffixes).clone());
    }
    capitalize(&parts.join(" "))
}

fn jitter(rng: &mut Rng, value: i64, epsilon: f64) -> i64 {
    let factor = 1.0 + rng.float(-epsilon, epsilon);
    ((value as f64 * factor).round() as i64).max(1)
}

/// Levels the template to `level`, applies per-stat jitter, and draws a
/// name; `level` has already been clamped by the caller.
pub fn generate_enemy(rng: &mut Rng, template: &EnemyTemplate, level: u32, jitter_config: &JitterConfig) -> GeneratedEnemy {
    let scaled = template.stats_at_level(level);
    let stats = EnemyStats {
        health: jitter(rng, scaled.health, jitter_config.health_damage_epsilon),
        damage: jitter(rng, scaled.damage, jitter_config.health_damage_epsilon),
        armor: jitter(rng, scaled.armor, jitter_config.armor_accuracy_evasion_epsilon),
        accuracy: jitter(rng, scaled.accuracy, jitter_config.armor_accuracy_evasion_epsilon).min(100),
        evasion: jitter(rng, scaled.evasion, jitter_config.armor_accuracy_evasion_epsilon).min(100),
    };
    let xp_value = ((0.5 * stats.health as f64 + 2.0 * stats.damage as f64 + 1.5 * stats.armor as f64)
        * template.xp_modifier
        * (1.0 + 0.15 * (level.saturating_sub(1)) as f64))
        .round() as u64;

    GeneratedEnemy {
        template_id: template.id.clone(),
        name: generate_name(rng, template),
        level,
        stats,
        xp_value,
        tags: template.combat_tags.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironfrontier_core::config::GenerationConfig;
    use ironfrontier_core::templates::enemy_templates::default_enemy_templates;

    #[test]
    fn stats_stay_positive_and_capped() {
        let templates = default_enemy_templates();
        let config = GenerationConfig::default();
        let mut rng = Rng::new(3);
        for template in &templates {
            let enemy = generate_enemy(&mut rng, template, template.max_level, &config.jitter);
            assert!(enemy.stats.health >= 1);
            assert!(enemy.stats.damage >= 1);
            assert!(enemy.stats.accuracy <= 100);
            assert!(enemy.stats.evasion <= 100);
        }
    }

    #[test]
    fn outlaw_tag_matches_expected_templates() {
        let templates = default_enemy_templates();
        let matches = enemies_matching_tag(&templates, "outlaws");
        let ids: Vec<&str> = matches.iter().map(|t| t.id.as_str()).collect();
        assert!(ids.contains(&"bandit_gunman"));
        assert!(ids.contains(&"outlaw_gang_leader"));
        assert!(!ids.contains(&"rattlesnake"));
    }

    #[test]
    fn animal_tag_matches_combat_tag() {
        let templates = default_enemy_templates();
        let matches = enemies_matching_tag(&templates, "animal");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "rattlesnake");
    }
}
