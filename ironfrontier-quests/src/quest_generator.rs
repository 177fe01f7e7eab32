//! Quest arc generation: template filtering, target binding, stage and
//! reward expansion (§4.5).

use std::collections::{HashMap, HashSet};

use ironfrontier_core::context::{AvailableEntity, QuestGenerationContext};
use ironfrontier_core::entities::{GeneratedQuest, QuestObjective, QuestRewards, QuestStage};
use ironfrontier_core::enums::TargetType;
use ironfrontier_core::rng::Rng;
use ironfrontier_core::substitution::{substitute, Variables};
use ironfrontier_core::templates::quest_templates::QuestTemplate;

/// §4.5 template filtering: level range, plus giver role/faction
/// constraints when a giver is provided.
pub fn template_qualifies(template: &QuestTemplate, player_level: u32, giver_role: Option<&str>, giver_faction: Option<&str>) -> bool {
    template.matches_level(player_level) && template.matches_giver(giver_role, giver_faction)
}

fn entities_for_type<'a>(ctx: &'a QuestGenerationContext, target_type: TargetType) -> Vec<&'a AvailableEntity> {
    use TargetType::*;
    match target_type {
        Npc => ctx.available_npcs.iter().collect(),
        Item => ctx.available_items.iter().collect(),
        Location => ctx.available_locations.iter().collect(),
        Enemy => ctx.available_enemies.iter().collect(),
        Any => ctx
            .available_npcs
            .iter()
            .chain(ctx.available_items.iter())
            .chain(ctx.available_locations.iter())
            .chain(ctx.available_enemies.iter())
            .collect(),
    }
}

fn all_entities(ctx: &QuestGenerationContext) -> Vec<&AvailableEntity> {
    entities_for_type(ctx, TargetType::Any)
}

fn matches_tags(entity: &AvailableEntity, tags: &[String]) -> bool {
    tags.is_empty() || tags.iter().any(|t| entity.tags.iter().any(|et| et == t))
}

/// Selects a target of `target_type` matching `tags`, preferring an
/// entity not already in `used`, falling back to any matching entity
/// (distinct objectives bind distinct targets "when possible").
fn bind_target<'a>(
    ctx: &'a QuestGenerationContext,
    target_type: TargetType,
    tags: &[String],
    used: &HashSet<String>,
) -> Option<&'a AvailableEntity> {
    let candidates: Vec<&AvailableEntity> = entities_for_type(ctx, target_type)
        .into_iter()
        .filter(|e| matches_tags(e, tags))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    candidates
        .iter()
        .find(|e| !used.contains(&e.id))
        .copied()
        .or_else(|| candidates.first().copied())
}

/// Rewards formula: `base` is drawn uniformly in the template's range,
/// scaled by `1 + 0.2*(level-1)`, then by a level-normalized difficulty
/// bonus of up to +10% across the template's own level span.
fn scaled_reward(rng: &mut Rng, range: (u64, u64), level: u32, template: &QuestTemplate) -> u64 {
    let base = rng.float(range.0 as f64, range.1 as f64);
    let level_factor = 1.0 + 0.2 * (level.saturating_sub(1)) as f64;
    let span = (template.level_range.1 - template.level_range.0).max(1) as f64;
    let difficulty_factor = 1.0 + 0.1 * ((level.saturating_sub(template.level_range.0)) as f64 / span);
    (base * level_factor * difficulty_factor).round() as u64
}

pub fn generate_quest(
    parent_rng: &mut Rng,
    template: &QuestTemplate,
    ctx: &QuestGenerationContext,
    giver_id: &str,
    giver_name: &str,
    location_name: &str,
    region_name: &str,
) -> GeneratedQuest {
    let quest_seed = parent_rng.int(0, u32::MAX as i64) as u32;
    let mut rng = parent_rng.child(quest_seed, &format!("quest_{}", template.id));

    let mut used: HashSet<String> = HashSet::new();
    let mut vars: Variables = HashMap::new();
    vars.insert("giver".to_string(), giver_name.to_string());
    vars.insert("giverId".to_string(), giver_id.to_string());
    vars.insert("location".to_string(), location_name.to_string());
    vars.insert("region".to_string(), region_name.to_string());
    vars.insert("player".to_string(), "Stranger".to_string());

    let mut targets: HashMap<String, String> = HashMap::new();
    let mut location_ids = Vec::new();

    let all = all_entities(ctx);
    if !all.is_empty() {
        let primary = rng.pick(&all);
        used.insert(primary.id.clone());
        vars.insert("target".to_string(), primary.name.clone());
        vars.insert("targetId".to_string(), primary.id.clone());
        targets.insert("primary".to_string(), primary.id.clone());
    }

    if !ctx.available_locations.is_empty() && rng.bool(0.6) {
        let destination = rng.pick(&ctx.available_locations);
        vars.insert("destination".to_string(), destination.name.clone());
        vars.insert("destinationId".to_string(), destination.id.clone());
        targets.insert("destination".to_string(), destination.id.clone());
        location_ids.push(destination.id.clone());
    }

    let title = substitute(&template.title_template, &vars);
    let description = substitute(&template.description_template, &vars);

    let mut stages = Vec::new();
    for (stage_idx, stage_template) in template.stages.iter().enumerate() {
        let stage_id = format!("stage_{stage_idx}");
        let mut objectives = Vec::new();
        for (obj_idx, obj_template) in stage_template.objectives.iter().enumerate() {
            let mut obj_vars = vars.clone();
            let bound = bind_target(ctx, obj_template.target_type, &obj_template.target_tags, &used);
            let target_id = bound.map(|e| {
                used.insert(e.id.clone());
                obj_vars.insert("target".to_string(), e.name.clone());
                obj_vars.insert("targetId".to_string(), e.id.clone());
                if obj_template.target_type == TargetType::Location {
                    location_ids.push(e.id.clone());
                }
                targets.insert(format!("stage{stage_idx}_obj{obj_idx}"), e.id.clone());
                e.id.clone()
            });
            let count = rng.int(obj_template.count_range.0 as i64, obj_template.count_range.1 as i64) as u32;
            objectives.push(QuestObjective {
                id: format!("{stage_id}_obj{obj_idx}"),
                description: substitute(&obj_template.description_template, &obj_vars),
                target_type: obj_template.target_type,
                target_tags: obj_template.target_tags.clone(),
                target_id,
                count,
                optional: obj_template.optional,
            });
        }
        stages.push(QuestStage {
            id: stage_id,
            title: substitute(&stage_template.title_template, &vars),
            description: substitute(&stage_template.description_template, &vars),
            on_start: substitute(&stage_template.on_start_template, &vars),
            on_complete: substitute(&stage_template.on_complete_template, &vars),
            objectives,
        });
    }

    let level = rng.int(template.level_range.0 as i64, template.level_range.1 as i64) as u32;
    let xp = scaled_reward(&mut rng, template.rewards.xp, level, template);
    let gold = scaled_reward(&mut rng, template.rewards.gold, level, template);
    let mut reputation = HashMap::new();
    for (faction, lo, hi) in &template.rewards.reputation {
        reputation.insert(faction.clone(), rng.int(*lo as i64, *hi as i64) as i32);
    }

    GeneratedQuest {
        id: format!("quest_{}_{:08x}", template.id, quest_seed),
        template_id: template.id.clone(),
        archetype: template.archetype,
        title,
        description,
        stages,
        rewards: QuestRewards { xp, gold, reputation },
        giver_id: giver_id.to_string(),
        targets,
        location_ids,
        level,
        tags: Vec::new(),
        repeatable: false,
        cooldown_hours: None,
        completed: false,
        failed: false,
        seed: quest_seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironfrontier_core::context::GenerationContext;
    use ironfrontier_core::templates::quest_templates::default_quest_templates;

    fn entity(id: &str, name: &str, tags: &[&str]) -> AvailableEntity {
        AvailableEntity {
            id: id.to_string(),
            name: name.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn ctx() -> QuestGenerationContext {
        QuestGenerationContext {
            base: GenerationContext::default(),
            available_npcs: vec![entity("npc_1", "Clem Holt", &["npc"])],
            available_items: vec![entity("item_1", "canteen", &["supply"])],
            available_locations: vec![
                entity("loc_1", "Iron Gulch", &[]),
                entity("loc_2", "Rattlesnake Flat", &[]),
            ],
            available_enemies: vec![entity("enemy_outlaw_1", "Dusty Cole", &["outlaw"])],
            giver_role: Some("sheriff".to_string()),
            giver_faction: Some("lawmen".to_string()),
        }
    }

    #[test]
    fn every_bound_target_id_is_in_context() {
        let templates = default_quest_templates();
        let template = templates.iter().find(|t| t.id == "bounty_hunt_outlaw").unwrap();
        let context = ctx();
        let mut rng = Rng::new(99);
        let quest = generate_quest(&mut rng, template, &context, "npc_giver", "Sheriff Holt", "Iron Gulch", "Frontier Basin");

        let all_ids: HashSet<String> = context
            .available_npcs
            .iter()
            .chain(context.available_items.iter())
            .chain(context.available_locations.iter())
            .chain(context.available_enemies.iter())
            .map(|e| e.id.clone())
            .collect();

        for id in quest.bound_target_ids() {
            assert!(all_ids.contains(id), "target {id} not in context");
        }
    }

    #[test]
    fn is_deterministic_for_identical_seed() {
        let templates = default_quest_templates();
        let template = &templates[0];
        let context = ctx();
        let mut rng_a = Rng::new(55);
        let mut rng_b = Rng::new(55);
        let a = generate_quest(&mut rng_a, template, &context, "npc_giver", "Sheriff Holt", "Iron Gulch", "Frontier Basin");
        let b = generate_quest(&mut rng_b, template, &context, "npc_giver", "Sheriff Holt", "Iron Gulch", "Frontier Basin");
        assert_eq!(a.id, b.id);
        assert_eq!(a.title, b.title);
        assert_eq!(a.level, b.level);
    }
}
