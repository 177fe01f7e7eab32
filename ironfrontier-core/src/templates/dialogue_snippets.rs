use std::collections::HashMap;

use crate::enums::DialogueCategory;
use crate::error::TemplateValidationError;

#[derive(Debug, Clone)]
pub struct DialogueSnippet {
    pub id: String,
    pub category: DialogueCategory,
    pub texts: Vec<String>,
    pub valid_roles: Vec<String>,
    pub valid_factions: Vec<String>,
    pub valid_times_of_day: Vec<(u32, u32)>,
    pub personality_min: HashMap<String, f64>,
    pub personality_max: HashMap<String, f64>,
    pub tags: Vec<String>,
}

impl DialogueSnippet {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.texts.is_empty() {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "snippet has no text templates".into(),
            });
        }
        Ok(())
    }
}

fn snippet(id: &str, category: DialogueCategory, texts: &[&str]) -> DialogueSnippet {
    DialogueSnippet {
        id: id.into(),
        category,
        texts: texts.iter().map(|s| s.to_string()).collect(),
        valid_roles: Vec::new(),
        valid_factions: Vec::new(),
        valid_times_of_day: Vec::new(),
        personality_min: HashMap::new(),
        personality_max: HashMap::new(),
        tags: Vec::new(),
    }
}

/// The single authoritative dialogue snippet pool (§9 open question: the
/// source carried two independently evolved copies; this port keeps one).
pub fn default_dialogue_snippets() -> Vec<DialogueSnippet> {
    use DialogueCategory::*;
    let mut snippets = vec![
        snippet("greeting_friendly", Greeting, &[
            "Well howdy there, {{name}}.",
            "Afternoon, stranger. What brings you to {{location}}?",
        ]),
        snippet("greeting_terse", Greeting, &[
            "What do you want.",
            "Yeah?",
        ]),
        snippet("farewell_common", Farewell, &[
            "Safe travels, {{name}}.",
            "Watch yourself out there.",
        ]),
        snippet("thanks_common", Thanks, &["Much obliged.", "I won't forget this."]),
        snippet("refusal_common", Refusal, &["Not today.", "I reckon not."]),
        snippet("agreement_common", Agreement, &["Reckon I can do that.", "Consider it done."]),
        snippet("question_common", Question, &["What's it to you?", "Why do you ask?"]),
        snippet("rumor_common", Rumor, &[
            "Heard tell there's trouble brewing out past {{location}}.",
            "Folks say the {{faction}} have been stirring things up.",
        ]),
        snippet("threat_common", Threat, &["Keep pushing and see what happens.", "You're testing my patience."]),
        snippet("bribe_common", Bribe, &["Money talks, friend.", "For the right price, sure."]),
        snippet("compliment_common", Compliment, &["You've got grit, {{name}}.", "Not bad, for a {{role}}."]),
        snippet("insult_common", Insult, &["You ain't worth the dirt on my boots.", "Go crawl back under your rock."]),
        snippet("small_talk_common", SmallTalk, &["Weather's been somethin' fierce.", "Quiet day in {{location}}."]),
        snippet("quest_offer_common", QuestOffer, &[
            "I got a job for you, if you're willing: {{target}} is waiting out at {{destination}}.",
        ]),
        snippet("quest_update_common", QuestUpdate, &["Any word on {{target}} yet?"]),
        snippet("quest_complete_common", QuestComplete, &["You came through. Here's what I owe you."]),
        snippet("shop_greeting_common", ShopGreeting, &["Take a look, {{name}}. Everything's for sale."]),
        snippet("shop_farewell_common", ShopFarewell, &["Come back when your pockets are fuller."]),
    ];

    snippets[0].valid_factions = vec!["settlers".into(), "lawmen".into()];
    snippets[0].personality_min.insert("friendliness".into(), 0.5);
    snippets[1].personality_max.insert("friendliness".into(), 0.4);
    snippets[8].valid_roles = vec!["outlaw".into(), "gunslinger".into()];
    snippets[8].personality_min.insert("aggression".into(), 0.6);
    snippets[9].personality_min.insert("greed".into(), 0.6);
    snippets[9].personality_max.insert("honesty".into(), 0.5);

    snippets
}
