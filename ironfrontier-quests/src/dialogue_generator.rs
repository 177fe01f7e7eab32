//! Simple and template-driven dialogue tree assembly (§4.6).

use std::collections::HashMap;

use ironfrontier_core::entities::{DialogueChoice, DialogueNode, GeneratedDialogueTree, GeneratedNpc};
use ironfrontier_core::enums::DialogueCategory;
use ironfrontier_core::rng::Rng;
use ironfrontier_core::substitution::{substitute, Variables};
use ironfrontier_core::templates::dialogue_snippets::DialogueSnippet;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleDialogueOptions {
    pub include_rumors: bool,
    pub include_quest: bool,
    pub include_shop: bool,
}

/// A snippet qualifies for an NPC iff: category matches; role/faction
/// constraints satisfy (empty = unrestricted); every personality-min
/// threshold is met (default 0.5 if absent); no personality-max is
/// exceeded; time-of-day filters apply when specified.
fn snippet_qualifies(snippet: &DialogueSnippet, category: DialogueCategory, npc: &GeneratedNpc, game_hour: u32) -> bool {
    if snippet.category != category {
        return false;
    }
    if !snippet.valid_roles.is_empty() && !snippet.valid_roles.iter().any(|r| r == npc.role.as_str()) {
        return false;
    }
    if !snippet.valid_factions.is_empty() && !snippet.valid_factions.iter().any(|f| f == npc.faction.as_str()) {
        return false;
    }
    for (trait_name, min) in &snippet.personality_min {
        let value = npc.personality.trait_value(trait_name).unwrap_or(0.5);
        if value < *min {
            return false;
        }
    }
    for (trait_name, max) in &snippet.personality_max {
        let value = npc.personality.trait_value(trait_name).unwrap_or(0.5);
        if value > *max {
            return false;
        }
    }
    if !snippet.valid_times_of_day.is_empty()
        && !snippet.valid_times_of_day.iter().any(|(lo, hi)| game_hour >= *lo && game_hour <= *hi)
    {
        return false;
    }
    true
}

fn select_text(
    rng: &mut Rng,
    snippets: &[DialogueSnippet],
    category: DialogueCategory,
    npc: &GeneratedNpc,
    game_hour: u32,
    vars: &Variables,
    fallback: &str,
) -> String {
    let candidates: Vec<&DialogueSnippet> = snippets
        .iter()
        .filter(|s| snippet_qualifies(s, category, npc, game_hour))
        .collect();
    if candidates.is_empty() {
        return fallback.to_string();
    }
    let snippet = rng.pick(&candidates);
    let text = rng.pick(&snippet.texts);
    substitute(text, vars)
}

fn vars_for(npc: &GeneratedNpc, location_name: &str) -> Variables {
    let mut v = HashMap::new();
    v.insert("name".to_string(), npc.name.full_name());
    v.insert("role".to_string(), npc.role.as_str().to_string());
    v.insert("faction".to_string(), npc.faction.as_str().to_string());
    v.insert("location".to_string(), location_name.to_string());
    v
}

/// Produces a root `node_greeting` with conditional peer branches for
/// rumor/quest/shop, each either returning to the root (tag `back`) or
/// terminating with an effect tag the runtime interprets.
pub fn generate_simple_dialogue_tree(
    rng: &mut Rng,
    npc: &GeneratedNpc,
    location_name: &str,
    snippets: &[DialogueSnippet],
    game_hour: u32,
    options: SimpleDialogueOptions,
) -> GeneratedDialogueTree {
    use DialogueCategory::*;

    let vars = vars_for(npc, location_name);
    let mut nodes = HashMap::new();

    let greeting_text = select_text(rng, snippets, Greeting, npc, game_hour, &vars, "Howdy.");
    let mut root_choices = Vec::new();

    if options.include_rumors {
        let rumor_text = select_text(rng, snippets, Rumor, npc, game_hour, &vars, "Nothing new around here.");
        nodes.insert(
            "node_rumor".to_string(),
            DialogueNode {
                id: "node_rumor".to_string(),
                speaker_id: npc.id.clone(),
                speaker_name: npc.name.full_name(),
                text: rumor_text,
                choices: vec![DialogueChoice {
                    text: "...".to_string(),
                    next_node_id: Some("node_greeting".to_string()),
                    tags: vec!["back".to_string()],
                }],
            },
        );
        root_choices.push(DialogueChoice {
            text: "Heard anything interesting?".to_string(),
            next_node_id: Some("node_rumor".to_string()),
            tags: vec!["rumor".to_string()],
        });
    }

    if options.include_quest && npc.is_quest_giver {
        let quest_text = select_text(rng, snippets, QuestOffer, npc, game_hour, &vars, "I could use some help.");
        nodes.insert(
            "node_quest".to_string(),
            DialogueNode {
                id: "node_quest".to_string(),
                speaker_id: npc.id.clone(),
                speaker_name: npc.name.full_name(),
                text: quest_text,
                choices: vec![
                    DialogueChoice {
                        text: "I'll take the job.".to_string(),
                        next_node_id: None,
                        tags: vec!["accept_quest".to_string()],
                    },
                    DialogueChoice {
                        text: "Not right now.".to_string(),
                        next_node_id: Some("node_greeting".to_string()),
                        tags: vec!["back".to_string()],
                    },
                ],
            },
        );
        root_choices.push(DialogueChoice {
            text: "You got work for me?".to_string(),
            next_node_id: Some("node_quest".to_string()),
            tags: vec!["quest".to_string()],
        });
    }

    if options.include_shop && npc.has_shop {
        let shop_text = select_text(rng, snippets, ShopGreeting, npc, game_hour, &vars, "Take a look around.");
        nodes.insert(
            "node_shop".to_string(),
            DialogueNode {
                id: "node_shop".to_string(),
                speaker_id: npc.id.clone(),
                speaker_name: npc.name.full_name(),
                text: shop_text,
                choices: vec![
                    DialogueChoice {
                        text: "Show me what you've got.".to_string(),
                        next_node_id: None,
                        tags: vec!["open_shop".to_string()],
                    },
                    DialogueChoice {
                        text: "Maybe later.".to_string(),
                        next_node_id: Some("node_greeting".to_string()),
                        tags: vec!["back".to_string()],
                    },
                ],
            },
        );
        root_choices.push(DialogueChoice {
            text: "What's for sale?".to_string(),
            next_node_id: Some("node_shop".to_string()),
            tags: vec!["shop".to_string()],
        });
    }

    root_choices.push(DialogueChoice {
        text: "I'll be on my way.".to_string(),
        next_node_id: None,
        tags: vec!["farewell".to_string()],
    });

    nodes.insert(
        "node_greeting".to_string(),
        DialogueNode {
            id: "node_greeting".to_string(),
            speaker_id: npc.id.clone(),
            speaker_name: npc.name.full_name(),
            text: greeting_text,
            choices: root_choices,
        },
    );

    GeneratedDialogueTree {
        id: format!("dialogue_{}", npc.id),
        root_node_id: "node_greeting".to_string(),
        nodes,
    }
}

/// A minimal pattern describing one node in a template-driven tree.
#[derive(Debug, Clone)]
pub struct DialoguePatternNode {
    pub role: String,
    pub text_template: String,
    /// Each choice: (text template, next role, tags).
    pub choices: Vec<(String, Option<String>, Vec<String>)>,
}

/// Each pattern yields a node `node_<role>`; root is the `greeting`
/// pattern if present, else the first pattern inserted (§4.6).
pub fn generate_template_driven_dialogue_tree(
    tree_id: &str,
    patterns: &[DialoguePatternNode],
    npc: &GeneratedNpc,
    vars: &Variables,
) -> GeneratedDialogueTree {
    let mut nodes = HashMap::new();
    let mut root_node_id = None;

    for pattern in patterns {
        let node_id = format!("node_{}", pattern.role);
        if pattern.role == "greeting" || root_node_id.is_none() {
            root_node_id = Some(node_id.clone());
        }
        let choices = pattern
            .choices
            .iter()
            .map(|(text, next_role, tags)| DialogueChoice {
                text: substitute(text, vars),
                next_node_id: next_role.as_ref().map(|r| format!("node_{r}")),
                tags: tags.clone(),
            })
            .collect::<Vec<_>>();
        let choices = if choices.is_empty() {
            vec![DialogueChoice {
                text: "Farewell.".to_string(),
                next_node_id: None,
                tags: vec!["farewell".to_string()],
            }]
        } else {
            choices
        };
        nodes.insert(
            node_id.clone(),
            DialogueNode {
                id: node_id,
                speaker_id: npc.id.clone(),
                speaker_name: npc.name.full_name(),
                text: substitute(&pattern.text_template, vars),
                choices,
            },
        );
    }

    GeneratedDialogueTree {
        id: tree_id.to_string(),
        root_node_id: root_node_id.unwrap_or_else(|| "node_greeting".to_string()),
        nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironfrontier_core::enums::{Faction, Gender, Role};
    use ironfrontier_core::entities::PersonName;
    use ironfrontier_core::entities::PersonalityVector;
    use ironfrontier_core::templates::dialogue_snippets::default_dialogue_snippets;

    fn test_npc(is_quest_giver: bool, has_shop: bool) -> GeneratedNpc {
        GeneratedNpc {
            id: "npc_test_1".to_string(),
            template_id: "town_sheriff".to_string(),
            name: PersonName {
                first_name: "Wyatt".to_string(),
                last_name: "Holt".to_string(),
                nickname: None,
                title: None,
            },
            role: Role::Sheriff,
            faction: Faction::Lawmen,
            gender: Gender::Male,
            personality: PersonalityVector {
                aggression: 0.5,
                friendliness: 0.5,
                curiosity: 0.5,
                greed: 0.5,
                honesty: 0.5,
                lawfulness: 0.8,
            },
            description: "test".to_string(),
            backstory: "test".to_string(),
            is_quest_giver,
            has_shop,
            tags: Vec::new(),
            seed: 1,
        }
    }

    #[test]
    fn non_quest_giver_root_lacks_quest_and_shop_branches() {
        let mut rng = Rng::new(42);
        let npc = test_npc(false, false);
        let snippets = default_dialogue_snippets();
        let tree = generate_simple_dialogue_tree(
            &mut rng,
            &npc,
            "Iron Gulch",
            &snippets,
            12,
            SimpleDialogueOptions { include_rumors: true, include_quest: false, include_shop: false },
        );
        assert!(tree.is_well_formed());
        assert!(!tree.nodes.contains_key("node_quest"));
        assert!(!tree.nodes.contains_key("node_shop"));
        let root = &tree.nodes[&tree.root_node_id];
        let tag_sets: Vec<&String> = root.choices.iter().flat_map(|c| c.tags.iter()).collect();
        assert!(tag_sets.iter().any(|t| t.as_str() == "rumor"));
        assert!(tag_sets.iter().any(|t| t.as_str() == "farewell"));
    }

    #[test]
    fn quest_giver_with_shop_gets_both_branches() {
        let mut rng = Rng::new(7);
        let npc = test_npc(true, true);
        let snippets = default_dialogue_snippets();
        let tree = generate_simple_dialogue_tree(
            &mut rng,
            &npc,
            "Rattlesnake Flat",
            &snippets,
            12,
            SimpleDialogueOptions { include_rumors: true, include_quest: true, include_shop: true },
        );
        assert!(tree.is_well_formed());
        assert!(tree.nodes.contains_key("node_quest"));
        assert!(tree.nodes.contains_key("node_shop"));
    }
}
