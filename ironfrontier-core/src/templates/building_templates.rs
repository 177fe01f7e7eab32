use crate::error::TemplateValidationError;

#[derive(Debug, Clone)]
pub struct NpcSlot {
    pub role: String,
    pub required: bool,
    pub count: (u32, u32),
}

#[derive(Debug, Clone)]
pub struct BuildingTemplate {
    pub id: String,
    pub building_type: String,
    pub npc_slots: Vec<NpcSlot>,
    pub shop_type: Option<String>,
    pub min_town_size: u32,
    pub max_instances: u32,
    pub tags: Vec<String>,
}

impl BuildingTemplate {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        for slot in &self.npc_slots {
            if slot.required && slot.count.0 < 1 {
                return Err(TemplateValidationError {
                    id: self.id.clone(),
                    reason: format!("required slot '{}' has count lower bound 0", slot.role),
                });
            }
            if slot.count.0 > slot.count.1 {
                return Err(TemplateValidationError {
                    id: self.id.clone(),
                    reason: format!("slot '{}' has count lo > hi", slot.role),
                });
            }
        }
        if self.max_instances < 1 {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "max_instances must be at least 1".into(),
            });
        }
        Ok(())
    }
}

fn slot(role: &str, required: bool, count: (u32, u32)) -> NpcSlot {
    NpcSlot { role: role.into(), required, count }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_building_templates() -> Vec<BuildingTemplate> {
    vec![
        BuildingTemplate {
            id: "general_store".into(),
            building_type: "store".into(),
            npc_slots: vec![slot("merchant", true, (1, 1))],
            shop_type: Some("general_goods".into()),
            min_town_size: 1,
            max_instances: 1,
            tags: strs(&["commerce"]),
        },
        BuildingTemplate {
            id: "sheriffs_office".into(),
            building_type: "office".into(),
            npc_slots: vec![slot("sheriff", true, (1, 1)), slot("deputy", false, (0, 2))],
            shop_type: None,
            min_town_size: 2,
            max_instances: 1,
            tags: strs(&["authority"]),
        },
        BuildingTemplate {
            id: "saloon".into(),
            building_type: "saloon".into(),
            npc_slots: vec![
                slot("bartender", true, (1, 1)),
                slot("gambler", false, (0, 3)),
            ],
            shop_type: Some("saloon_goods".into()),
            min_town_size: 1,
            max_instances: 2,
            tags: strs(&["social", "commerce"]),
        },
        BuildingTemplate {
            id: "chapel".into(),
            building_type: "chapel".into(),
            npc_slots: vec![slot("preacher", true, (1, 1))],
            shop_type: None,
            min_town_size: 2,
            max_instances: 1,
            tags: strs(&["civic"]),
        },
        BuildingTemplate {
            id: "stable".into(),
            building_type: "stable".into(),
            npc_slots: vec![slot("homesteader", false, (0, 1))],
            shop_type: Some("livestock".into()),
            min_town_size: 1,
            max_instances: 1,
            tags: strs(&["commerce"]),
        },
        BuildingTemplate {
            id: "blacksmith_forge".into(),
            building_type: "forge".into(),
            npc_slots: vec![slot("blacksmith", true, (1, 1))],
            shop_type: Some("smithing".into()),
            min_town_size: 1,
            max_instances: 1,
            tags: strs(&["commerce", "crafting"]),
        },
        BuildingTemplate {
            id: "rail_station".into(),
            building_type: "station".into(),
            npc_slots: vec![slot("stationmaster", true, (1, 1))],
            shop_type: Some("travel".into()),
            min_town_size: 3,
            max_instances: 1,
            tags: strs(&["civic", "transit"]),
        },
    ]
}
