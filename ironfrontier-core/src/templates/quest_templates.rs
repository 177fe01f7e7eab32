use crate::enums::{QuestArchetype, TargetType};
use crate::error::TemplateValidationError;

#[derive(Debug, Clone)]
pub struct ObjectiveTemplate {
    pub description_template: String,
    pub target_type: TargetType,
    pub target_tags: Vec<String>,
    pub count_range: (u32, u32),
    pub optional: bool,
}

#[derive(Debug, Clone)]
pub struct StageTemplate {
    pub title_template: String,
    pub description_template: String,
    pub on_start_template: String,
    pub on_complete_template: String,
    pub objectives: Vec<ObjectiveTemplate>,
}

#[derive(Debug, Clone)]
pub struct RewardRange {
    pub xp: (u64, u64),
    pub gold: (u64, u64),
    /// Per-faction reputation delta range.
    pub reputation: Vec<(String, i32, i32)>,
}

#[derive(Debug, Clone)]
pub struct QuestTemplate {
    pub id: String,
    pub archetype: QuestArchetype,
    pub title_template: String,
    pub description_template: String,
    pub stages: Vec<StageTemplate>,
    pub rewards: RewardRange,
    pub giver_roles: Vec<String>,
    pub giver_factions: Vec<String>,
    pub level_range: (u32, u32),
}

impl QuestTemplate {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.stages.is_empty() {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "must have at least one stage".into(),
            });
        }
        let has_required = self
            .stages
            .iter()
            .any(|s| s.objectives.iter().any(|o| !o.optional));
        if !has_required {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "at least one stage must carry a non-optional objective".into(),
            });
        }
        if self.level_range.0 > self.level_range.1 {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "level_range min > max".into(),
            });
        }
        Ok(())
    }

    /// §4.5: level range plus, when a giver is given, role/faction
    /// constraints. An empty constraint list is unrestricted.
    pub fn matches_level(&self, level: u32) -> bool {
        level >= self.level_range.0 && level <= self.level_range.1
    }

    pub fn matches_giver(&self, giver_role: Option<&str>, giver_faction: Option<&str>) -> bool {
        let role_ok = self.giver_roles.is_empty()
            || giver_role.map(|r| self.giver_roles.iter().any(|gr| gr == r)).unwrap_or(true);
        let faction_ok = self.giver_factions.is_empty()
            || giver_faction
                .map(|f| self.giver_factions.iter().any(|gf| gf == f))
                .unwrap_or(true);
        role_ok && faction_ok
    }
}

fn obj(desc: &str, target_type: TargetType, tags: &[&str], count: (u32, u32)) -> ObjectiveTemplate {
    ObjectiveTemplate {
        description_template: desc.into(),
        target_type,
        target_tags: tags.iter().map(|s| s.to_string()).collect(),
        count_range: count,
        optional: false,
    }
}

fn stage(title: &str, desc: &str, objectives: Vec<ObjectiveTemplate>) -> StageTemplate {
    StageTemplate {
        title_template: title.into(),
        description_template: desc.into(),
        on_start_template: format!("{desc} Time to get to it."),
        on_complete_template: "Stage complete.".into(),
        objectives,
    }
}

pub fn default_quest_templates() -> Vec<QuestTemplate> {
    use QuestArchetype::*;
    use TargetType::*;

    vec![
        QuestTemplate {
            id: "bounty_hunt_outlaw".into(),
            archetype: BountyHunt,
            title_template: "A Price on {{target}}'s Head".into(),
            description_template: "{{giver}} wants {{target}} brought in, dead or alive.".into(),
            stages: vec![stage(
                "Track the Outlaw",
                "Find {{target}} near {{destination}}.",
                vec![obj("Defeat {{target}}", Enemy, &["outlaw"], (1, 1))],
            )],
            rewards: RewardRange {
                xp: (80, 160),
                gold: (40, 120),
                reputation: vec![("lawmen".into(), 1, 5), ("outlaws".into(), -5, -1)],
            },
            giver_roles: vec!["sheriff".into()],
            giver_factions: vec!["lawmen".into()],
            level_range: (2, 10),
        },
        QuestTemplate {
            id: "clear_area_bandits".into(),
            archetype: ClearArea,
            title_template: "Clear Out {{destination}}".into(),
            description_template: "{{destination}} has been overrun; {{giver}} wants it dealt with.".into(),
            stages: vec![stage(
                "Clean House",
                "Drive off or defeat every hostile at {{destination}}.",
                vec![obj("Defeat hostiles at {{destination}}", Enemy, &["bandit"], (2, 5))],
            )],
            rewards: RewardRange {
                xp: (100, 220),
                gold: (30, 90),
                reputation: vec![("settlers".into(), 1, 4)],
            },
            giver_roles: Vec::new(),
            giver_factions: Vec::new(),
            level_range: (3, 12),
        },
        QuestTemplate {
            id: "escort_wagon".into(),
            archetype: Escort,
            title_template: "Safe Passage".into(),
            description_template: "{{giver}} needs an escort to {{destination}}.".into(),
            stages: vec![stage(
                "Ride Along",
                "Escort {{giver}} safely to {{destination}}.",
                vec![obj("Reach {{destination}} with the wagon intact", Location, &[], (1, 1))],
            )],
            rewards: RewardRange {
                xp: (60, 140),
                gold: (50, 100),
                reputation: vec![("settlers".into(), 1, 3)],
            },
            giver_roles: Vec::new(),
            giver_factions: Vec::new(),
            level_range: (1, 8),
        },
        QuestTemplate {
            id: "fetch_supplies".into(),
            archetype: Fetch,
            title_template: "Short on Supplies".into(),
            description_template: "{{giver}} is out of {{target}} and needs more.".into(),
            stages: vec![stage(
                "Gather What's Needed",
                "Bring back {{target}}.",
                vec![obj("Collect {{target}}", Item, &["supply"], (1, 5))],
            )],
            rewards: RewardRange {
                xp: (30, 80),
                gold: (20, 60),
                reputation: vec![],
            },
            giver_roles: Vec::new(),
            giver_factions: Vec::new(),
            level_range: (1, 6),
        },
        QuestTemplate {
            id: "deliver_package".into(),
            archetype: Deliver,
            title_template: "A Delivery for {{destination}}".into(),
            description_template: "{{giver}} needs a package delivered to {{destination}}.".into(),
            stages: vec![stage(
                "Make the Delivery",
                "Carry the package to {{destination}} without losing it.",
                vec![obj("Deliver the package to {{destination}}", Location, &[], (1, 1))],
            )],
            rewards: RewardRange {
                xp: (40, 90),
                gold: (25, 75),
                reputation: vec![],
            },
            giver_roles: Vec::new(),
            giver_factions: Vec::new(),
            level_range: (1, 7),
        },
        QuestTemplate {
            id: "investigate_disappearance".into(),
            archetype: Investigate,
            title_template: "What Happened to {{target}}".into(),
            description_template: "{{target}} went missing near {{destination}}, and {{giver}} wants answers.".into(),
            stages: vec![
                stage(
                    "Search the Area",
                    "Look for clues around {{destination}}.",
                    vec![obj("Search {{destination}}", Location, &[], (1, 1))],
                ),
                stage(
                    "Confront the Truth",
                    "Find out what really happened to {{target}}.",
                    vec![obj("Talk to {{target}}", Npc, &[], (1, 1))],
                ),
            ],
            rewards: RewardRange {
                xp: (90, 180),
                gold: (20, 60),
                reputation: vec![("settlers".into(), 1, 3)],
            },
            giver_roles: Vec::new(),
            giver_factions: Vec::new(),
            level_range: (2, 9),
        },
        QuestTemplate {
            id: "rescue_captive".into(),
            archetype: Rescue,
            title_template: "Bring {{target}} Home".into(),
            description_template: "{{target}} is being held near {{destination}}.".into(),
            stages: vec![stage(
                "Free the Captive",
                "Free {{target}} from {{destination}}.",
                vec![obj("Rescue {{target}}", Npc, &[], (1, 1))],
            )],
            rewards: RewardRange {
                xp: (100, 200),
                gold: (30, 80),
                reputation: vec![("settlers".into(), 2, 5)],
            },
            giver_roles: Vec::new(),
            giver_factions: Vec::new(),
            level_range: (3, 11),
        },
        QuestTemplate {
            id: "sabotage_railroad".into(),
            archetype: Sabotage,
            title_template: "Slow Down the Railroad".into(),
            description_template: "{{giver}} wants the {{faction}} operation at {{destination}} set back.".into(),
            stages: vec![stage(
                "Sabotage the Works",
                "Disable the operation at {{destination}}.",
                vec![obj("Sabotage equipment at {{destination}}", Location, &[], (1, 3))],
            )],
            rewards: RewardRange {
                xp: (70, 150),
                gold: (30, 70),
                reputation: vec![("railroad_company".into(), -5, -1)],
            },
            giver_roles: Vec::new(),
            giver_factions: vec!["outlaws".into(), "native_nations".into()],
            level_range: (2, 10),
        },
        QuestTemplate {
            id: "defend_homestead".into(),
            archetype: Defend,
            title_template: "Hold the Line".into(),
            description_template: "{{destination}} is about to be raided; {{giver}} needs help defending it.".into(),
            stages: vec![stage(
                "Defend the Homestead",
                "Survive the raid at {{destination}}.",
                vec![obj("Defeat the raiders at {{destination}}", Enemy, &["raider"], (2, 6))],
            )],
            rewards: RewardRange {
                xp: (100, 210),
                gold: (25, 65),
                reputation: vec![("settlers".into(), 2, 4)],
            },
            giver_roles: Vec::new(),
            giver_factions: Vec::new(),
            level_range: (3, 12),
        },
        QuestTemplate {
            id: "roundup_cattle".into(),
            archetype: Roundup,
            title_template: "Strays Need Rounding Up".into(),
            description_template: "{{giver}} lost cattle near {{destination}} during the last storm.".into(),
            stages: vec![stage(
                "Round 'Em Up",
                "Herd the strays back from {{destination}}.",
                vec![obj("Round up strays near {{destination}}", Any, &["cattle"], (3, 8))],
            )],
            rewards: RewardRange {
                xp: (40, 100),
                gold: (30, 70),
                reputation: vec![("cattle_barons".into(), 1, 3)],
            },
            giver_roles: vec!["rancher".into()],
            giver_factions: vec!["cattle_barons".into(), "settlers".into()],
            level_range: (1, 6),
        },
        QuestTemplate {
            id: "prospect_claim".into(),
            archetype: Prospect,
            title_template: "Stake a Claim".into(),
            description_template: "{{giver}} wants someone to scout a new claim near {{destination}}.".into(),
            stages: vec![stage(
                "Scout the Claim",
                "Survey the ground at {{destination}}.",
                vec![obj("Survey {{destination}}", Location, &[], (1, 1))],
            )],
            rewards: RewardRange {
                xp: (30, 70),
                gold: (15, 50),
                reputation: vec![],
            },
            giver_roles: vec!["prospector".into()],
            giver_factions: vec!["prospectors".into()],
            level_range: (1, 5),
        },
        QuestTemplate {
            id: "law_and_order_patrol".into(),
            archetype: LawAndOrder,
            title_template: "Keep the Peace".into(),
            description_template: "{{giver}} needs an extra gun on patrol around {{location}}.".into(),
            stages: vec![stage(
                "Walk the Patrol",
                "Deal with any trouble found while patrolling {{location}}.",
                vec![obj("Resolve disturbances in {{location}}", Any, &[], (1, 3))],
            )],
            rewards: RewardRange {
                xp: (50, 120),
                gold: (20, 50),
                reputation: vec![("lawmen".into(), 1, 3)],
            },
            giver_roles: vec!["sheriff".into(), "deputy".into()],
            giver_factions: vec!["lawmen".into()],
            level_range: (1, 20),
        },
    ]
}
