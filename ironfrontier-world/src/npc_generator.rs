//! Per-NPC and per-location NPC batch generation (§4.4).

use std::collections::HashMap;

use ironfrontier_core::config::GenerationConfig;
use ironfrontier_core::entities::{GeneratedNpc, PersonalityVector};
use ironfrontier_core::enums::{Faction, Gender};
use ironfrontier_core::rng::Rng;
use ironfrontier_core::substitution::{substitute, Variables};
use ironfrontier_core::templates::name_pools::NamePool;
use ironfrontier_core::templates::npc_templates::NpcTemplate;

use crate::name_generator::generate_person_name;

const FALLBACK_TRAIT_RANGE: (f64, f64) = (0.2, 0.8);

fn roll_gender(rng: &mut Rng, distribution: [f64; 3]) -> Gender {
    let roll = rng.float(0.0, 1.0);
    if roll < distribution[0] {
        Gender::Male
    } else if roll < distribution[0] + distribution[1] {
        Gender::Female
    } else {
        Gender::Neutral
    }
}

fn sample_personality(rng: &mut Rng, template: &NpcTemplate) -> PersonalityVector {
    let mut sample = |trait_name: &str| {
        let range = template
            .personality_ranges
            .get(trait_name)
            .map(|r| (r.min, r.max))
            .unwrap_or(FALLBACK_TRAIT_RANGE);
        rng.float(range.0, range.1)
    };
    PersonalityVector {
        aggression: sample("aggression"),
        friendliness: sample("friendliness"),
        curiosity: sample("curiosity"),
        greed: sample("greed"),
        honesty: sample("honesty"),
        lawfulness: sample("lawfulness"),
    }
}

fn pronoun(gender: Gender) -> (&'static str, &'static str) {
    match gender {
        Gender::Male => ("he", "his"),
        Gender::Female => ("she", "her"),
        Gender::Neutral => ("they", "their"),
    }
}

/// Runs the per-NPC procedure from §4.4 steps 1-8 against a single
/// template, producing one [`GeneratedNpc`].
pub fn generate_npc(parent_rng: &mut Rng, template: &NpcTemplate, pools: &[NamePool], location_name: &str, location_id: &str) -> GeneratedNpc {
    let npc_seed = parent_rng.int(0, u32::MAX as i64) as u32;
    let mut rng = parent_rng.child(npc_seed, &format!("npc_{}", template.id));

    let gender = roll_gender(&mut rng, template.gender_distribution);
    let include_title = template.min_importance > 0.5;
    let include_nickname = rng.bool(0.3);
    let name = generate_person_name(&mut rng, pools, &template.name_origin_weights, gender, include_nickname, include_title);

    let faction_tag = rng.pick(&template.allowed_factions).clone();
    let faction = Faction::parse(&faction_tag);
    let personality = sample_personality(&mut rng, template);

    let (pronoun, possessive) = pronoun(gender);
    let mut vars: Variables = HashMap::new();
    vars.insert("name".to_string(), name.full_name());
    vars.insert("firstName".to_string(), name.first_name.clone());
    vars.insert("lastName".to_string(), name.last_name.clone());
    vars.insert("role".to_string(), template.role.clone());
    vars.insert("faction".to_string(), faction.as_str().to_string());
    vars.insert("pronoun".to_string(), pronoun.to_string());
    vars.insert("possessive".to_string(), possessive.to_string());
    vars.insert("location".to_string(), location_name.to_string());
    vars.insert("locationId".to_string(), location_id.to_string());

    let backstory_template = rng.pick(&template.backstory_templates).clone();
    let description_template = rng.pick(&template.description_templates).clone();
    let backstory = substitute(&backstory_template, &vars);
    let description = substitute(&description_template, &vars);

    let is_quest_giver = rng.bool(template.quest_giver_probability);
    let has_shop = rng.bool(template.shop_probability);

    GeneratedNpc {
        id: format!("npc_{}_{:08x}", template.id, npc_seed),
        template_id: template.id.clone(),
        name,
        role: ironfrontier_core::enums::Role::parse(&template.role),
        faction,
        gender,
        personality,
        description,
        backstory,
        is_quest_giver,
        has_shop,
        tags: template.tags.clone(),
        seed: npc_seed,
    }
}

/// Guarantees one NPC per required building-slot role (the "NPC slot"
/// glossary entry: a `{role, required, count}` declaration on a
/// building template), skipping a role with a warning when no template
/// covers it for this location type.
pub fn generate_required_role_npcs(
    parent_rng: &mut Rng,
    templates: &[NpcTemplate],
    pools: &[NamePool],
    location_type: &str,
    location_name: &str,
    location_id: &str,
    roles: &[String],
) -> Vec<GeneratedNpc> {
    let mut npcs = Vec::new();
    for role in roles {
        let candidates: Vec<&NpcTemplate> =
            templates.iter().filter(|t| &t.role == role && t.valid_for_location(location_type)).collect();
        if candidates.is_empty() {
            tracing::warn!(role, location_type, "no NPC template covers this required building slot; leaving it unfilled");
            continue;
        }
        let template = *parent_rng.pick(&candidates);
        npcs.push(generate_npc(parent_rng, template, pools, location_name, location_id));
    }
    npcs
}

/// Batch generation for a location (§4.4): notable NPCs first from
/// `minImportance >= 0.5` templates (falling back to the full valid set
/// if that subset is empty), then background from the complement,
/// enforcing case-insensitive name uniqueness up to the configured
/// retry budget before accepting a duplicate. `already_generated` seeds
/// the uniqueness check and counts against the notable quota — it's the
/// roster `generate_required_role_npcs` already filled.
pub fn generate_npcs_for_location(
    parent_rng: &mut Rng,
    templates: &[NpcTemplate],
    pools: &[NamePool],
    location_type: &str,
    location_name: &str,
    location_id: &str,
    counts: (u32, u32),
    config: &GenerationConfig,
    already_generated: &[GeneratedNpc],
) -> Vec<GeneratedNpc> {
    let valid: Vec<&NpcTemplate> = templates.iter().filter(|t| t.valid_for_location(location_type)).collect();
    if valid.is_empty() {
        tracing::warn!(location_type, "no NPC template valid for this location type; returning empty roster");
        return Vec::new();
    }

    let notable_pool: Vec<&NpcTemplate> = valid.iter().filter(|t| t.min_importance >= 0.5).copied().collect();
    let notable_templates: Vec<&NpcTemplate> = if notable_pool.is_empty() { valid.clone() } else { notable_pool.clone() };
    let background_templates: Vec<&NpcTemplate> = valid
        .iter()
        .filter(|t| !notable_pool.iter().any(|n| n.id == t.id))
        .copied()
        .collect();
    let background_templates = if background_templates.is_empty() { valid.clone() } else { background_templates };

    let (background_count, notable_count) = counts;
    let notable_count = notable_count.saturating_sub(already_generated.len() as u32);
    let mut seen_names: Vec<String> = already_generated.iter().map(|n| n.name.full_name()).collect();
    let mut npcs = Vec::new();

    let generate_batch = |rng: &mut Rng, pool: &[&NpcTemplate], count: u32, npcs: &mut Vec<GeneratedNpc>, seen: &mut Vec<String>| {
        for _ in 0..count {
            let template = *rng.pick(pool);
            let mut npc = generate_npc(rng, template, pools, location_name, location_id);
            let mut attempts = 0;
            while seen.iter().any(|n| n.eq_ignore_ascii_case(&npc.name.full_name())) && attempts < config.retries.name_uniqueness_attempts {
                let template = *rng.pick(pool);
                npc = generate_npc(rng, template, pools, location_name, location_id);
                attempts += 1;
            }
            seen.push(npc.name.full_name());
            npcs.push(npc);
        }
    };

    generate_batch(parent_rng, &notable_templates, notable_count, &mut npcs, &mut seen_names);
    generate_batch(parent_rng, &background_templates, background_count, &mut npcs, &mut seen_names);

    npcs
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironfrontier_core::config::GenerationConfig;
    use ironfrontier_core::templates::name_pools::default_name_pools;
    use ironfrontier_core::templates::npc_templates::default_npc_templates;

    #[test]
    fn is_deterministic_for_identical_seed() {
        let templates = default_npc_templates();
        let template = templates.iter().find(|t| t.id == "town_sheriff").unwrap();
        let pools = default_name_pools();
        let mut a = Rng::new(42);
        let mut b = Rng::new(42);
        let npc_a = generate_npc(&mut a, template, &pools, "Iron Gulch", "loc_1");
        let npc_b = generate_npc(&mut b, template, &pools, "Iron Gulch", "loc_1");
        assert_eq!(npc_a.id, npc_b.id);
        assert_eq!(npc_a.name.full_name(), npc_b.name.full_name());
        assert_eq!(npc_a.personality.aggression, npc_b.personality.aggression);
    }

    #[test]
    fn personality_traits_stay_in_unit_range() {
        let templates = default_npc_templates();
        let pools = default_name_pools();
        let mut rng = Rng::new(7);
        for template in &templates {
            let npc = generate_npc(&mut rng, template, &pools, "Iron Gulch", "loc_1");
            assert!(npc.personality.all_in_unit_range());
        }
    }

    #[test]
    fn batch_respects_requested_counts() {
        let templates = default_npc_templates();
        let pools = default_name_pools();
        let config = GenerationConfig::default();
        let mut rng = Rng::new(99);
        let npcs = generate_npcs_for_location(&mut rng, &templates, &pools, "town", "Iron Gulch", "loc_1", (6, 3), &config, &[]);
        assert_eq!(npcs.len(), 9);
    }

    #[test]
    fn required_role_npcs_cover_requested_roles() {
        let templates = default_npc_templates();
        let pools = default_name_pools();
        let mut rng = Rng::new(17);
        let roles = vec!["sheriff".to_string(), "merchant".to_string()];
        let npcs = generate_required_role_npcs(&mut rng, &templates, &pools, "town", "Iron Gulch", "loc_1", &roles);
        assert_eq!(npcs.len(), 2);
        assert!(npcs.iter().any(|n| n.role.as_str() == "sheriff"));
        assert!(npcs.iter().any(|n| n.role.as_str() == "merchant"));
    }

    #[test]
    fn required_role_npcs_skip_roles_with_no_template() {
        let templates = default_npc_templates();
        let pools = default_name_pools();
        let mut rng = Rng::new(17);
        let roles = vec!["stationmaster".to_string()];
        let npcs = generate_required_role_npcs(&mut rng, &templates, &pools, "town", "Iron Gulch", "loc_1", &roles);
        assert!(npcs.is_empty());
    }
}
