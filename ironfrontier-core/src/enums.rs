//! Closed tagged-union enums shared across the generation pipeline.
//!
//! Several of these mirror fields that arrive as free text in templates
//! (role, faction, location type). [`Unknown`] variants keep template
//! data forward-compatible instead of failing validation outright when a
//! new tag shows up before the enum catches up.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Merchant,
    Sheriff,
    Deputy,
    Outlaw,
    Rancher,
    Prospector,
    Preacher,
    Doctor,
    Gambler,
    Bartender,
    Blacksmith,
    Stationmaster,
    Scout,
    Homesteader,
    Gunslinger,
    Unknown(String),
}

impl Role {
    /// Runtime-coerced field (§9): template data carries role as free
    /// text; this is the explicit conversion step to the closed
    /// enumeration, falling back to `Unknown` for forward compatibility.
    pub fn parse(s: &str) -> Role {
        match s {
            "merchant" => Role::Merchant,
            "sheriff" => Role::Sheriff,
            "deputy" => Role::Deputy,
            "outlaw" => Role::Outlaw,
            "rancher" => Role::Rancher,
            "prospector" => Role::Prospector,
            "preacher" => Role::Preacher,
            "doctor" => Role::Doctor,
            "gambler" => Role::Gambler,
            "bartender" => Role::Bartender,
            "blacksmith" => Role::Blacksmith,
            "stationmaster" => Role::Stationmaster,
            "scout" => Role::Scout,
            "homesteader" => Role::Homesteader,
            "gunslinger" => Role::Gunslinger,
            other => Role::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Merchant => "merchant",
            Role::Sheriff => "sheriff",
            Role::Deputy => "deputy",
            Role::Outlaw => "outlaw",
            Role::Rancher => "rancher",
            Role::Prospector => "prospector",
            Role::Preacher => "preacher",
            Role::Doctor => "doctor",
            Role::Gambler => "gambler",
            Role::Bartender => "bartender",
            Role::Blacksmith => "blacksmith",
            Role::Stationmaster => "stationmaster",
            Role::Scout => "scout",
            Role::Homesteader => "homesteader",
            Role::Gunslinger => "gunslinger",
            Role::Unknown(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Lawmen,
    Outlaws,
    Settlers,
    RailroadCompany,
    NativeNations,
    CattleBarons,
    Prospectors,
    Unknown(String),
}

impl Faction {
    pub fn parse(s: &str) -> Faction {
        match s {
            "lawmen" => Faction::Lawmen,
            "outlaws" => Faction::Outlaws,
            "settlers" => Faction::Settlers,
            "railroad_company" => Faction::RailroadCompany,
            "native_nations" => Faction::NativeNations,
            "cattle_barons" => Faction::CattleBarons,
            "prospectors" => Faction::Prospectors,
            other => Faction::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Faction::Lawmen => "lawmen",
            Faction::Outlaws => "outlaws",
            Faction::Settlers => "settlers",
            Faction::RailroadCompany => "railroad_company",
            Faction::NativeNations => "native_nations",
            Faction::CattleBarons => "cattle_barons",
            Faction::Prospectors => "prospectors",
            Faction::Unknown(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationType {
    City,
    Town,
    Outpost,
    Camp,
    Ranch,
    Mine,
    Ruin,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::City => "city",
            LocationType::Town => "town",
            LocationType::Outpost => "outpost",
            LocationType::Camp => "camp",
            LocationType::Ranch => "ranch",
            LocationType::Mine => "mine",
            LocationType::Ruin => "ruin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "city" => Some(LocationType::City),
            "town" => Some(LocationType::Town),
            "outpost" => Some(LocationType::Outpost),
            "camp" => Some(LocationType::Camp),
            "ranch" => Some(LocationType::Ranch),
            "mine" => Some(LocationType::Mine),
            "ruin" => Some(LocationType::Ruin),
            _ => None,
        }
    }

    pub fn all() -> &'static [LocationType] {
        &[
            LocationType::City,
            LocationType::Town,
            LocationType::Outpost,
            LocationType::Camp,
            LocationType::Ranch,
            LocationType::Mine,
            LocationType::Ruin,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    Npc,
    Item,
    Location,
    Enemy,
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestArchetype {
    BountyHunt,
    ClearArea,
    Escort,
    Fetch,
    Deliver,
    Investigate,
    Rescue,
    Sabotage,
    Defend,
    Negotiate,
    Smuggle,
    Survey,
    Heist,
    Duel,
    TrackDown,
    Roundup,
    Prospect,
    Claim,
    Feud,
    Election,
    Railroad,
    Stagecoach,
    LawAndOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BehaviorTag {
    Aggressive,
    Defensive,
    Ambusher,
    Skittish,
    PackHunter,
    Sniper,
    Brawler,
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogueCategory {
    Greeting,
    Farewell,
    Thanks,
    Refusal,
    Agreement,
    Question,
    Rumor,
    Threat,
    Bribe,
    Compliment,
    Insult,
    SmallTalk,
    QuestOffer,
    QuestUpdate,
    QuestComplete,
    ShopGreeting,
    ShopFarewell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureState {
    Functional,
    Broken,
    Locked,
}

impl StructureState {
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureState::Functional => "functional",
            StructureState::Broken => "broken",
            StructureState::Locked => "locked",
        }
    }
}
