use crate::error::TemplateValidationError;

#[derive(Debug, Clone)]
pub struct BuildingRef {
    pub building_id: String,
    pub count_range: (u32, u32),
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct LocationTemplate {
    pub id: String,
    pub location_type: String,
    /// 1 = smallest, higher = larger.
    pub size_tier: u32,
    pub name_pool_id: String,
    pub building_refs: Vec<BuildingRef>,
    pub background_npc_count_range: (u32, u32),
    pub notable_npc_count_range: (u32, u32),
    pub valid_biomes: Vec<String>,
    pub description_templates: Vec<String>,
    pub tags: Vec<String>,
}

impl LocationTemplate {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        if self.description_templates.is_empty() {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: "must carry at least one description template".into(),
            });
        }
        let required_minimum: u32 = self
            .building_refs
            .iter()
            .filter(|b| b.required)
            .map(|b| b.count_range.0)
            .sum();
        // Ten buildings per size tier is a generous but bounded ceiling,
        // not a hard gameplay limit.
        let upper_bound = self.size_tier * 10;
        if required_minimum > upper_bound {
            return Err(TemplateValidationError {
                id: self.id.clone(),
                reason: format!(
                    "required building minimum {required_minimum} exceeds size-tier bound {upper_bound}"
                ),
            });
        }
        Ok(())
    }
}

fn bref(id: &str, required: bool, count: (u32, u32)) -> BuildingRef {
    BuildingRef { building_id: id.into(), count_range: count, required }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn default_location_templates() -> Vec<LocationTemplate> {
    vec![
        LocationTemplate {
            id: "frontier_city".into(),
            location_type: "city".into(),
            size_tier: 4,
            name_pool_id: "city".into(),
            building_refs: vec![
                bref("general_store", true, (1, 1)),
                bref("sheriffs_office", true, (1, 1)),
                bref("saloon", true, (1, 2)),
                bref("rail_station", true, (1, 1)),
                bref("blacksmith_forge", false, (0, 1)),
                bref("chapel", false, (0, 1)),
            ],
            background_npc_count_range: (8, 16),
            notable_npc_count_range: (4, 8),
            valid_biomes: Vec::new(),
            description_templates: strs(&[
                "{{location}} sprawls out from the rail line, the biggest settlement for a hundred miles.",
            ]),
            tags: strs(&["major_settlement"]),
        },
        LocationTemplate {
            id: "frontier_town".into(),
            location_type: "town".into(),
            size_tier: 2,
            name_pool_id: "town".into(),
            building_refs: vec![
                bref("general_store", true, (1, 1)),
                bref("sheriffs_office", true, (1, 1)),
                bref("saloon", true, (1, 1)),
                bref("chapel", false, (0, 1)),
                bref("stable", false, (0, 1)),
            ],
            background_npc_count_range: (3, 8),
            notable_npc_count_range: (2, 4),
            valid_biomes: Vec::new(),
            description_templates: strs(&[
                "{{location}} sits at a crossing, a handful of buildings clustered against the open country.",
            ]),
            tags: strs(&["settlement"]),
        },
        LocationTemplate {
            id: "frontier_outpost".into(),
            location_type: "outpost".into(),
            size_tier: 1,
            name_pool_id: "outpost".into(),
            building_refs: vec![bref("general_store", false, (0, 1))],
            background_npc_count_range: (1, 3),
            notable_npc_count_range: (1, 2),
            valid_biomes: Vec::new(),
            description_templates: strs(&["{{location}} is little more than a waystation, but it's shelter."]),
            tags: strs(&["minor_settlement"]),
        },
        LocationTemplate {
            id: "outlaw_camp".into(),
            location_type: "camp".into(),
            size_tier: 1,
            name_pool_id: "camp".into(),
            building_refs: Vec::new(),
            background_npc_count_range: (2, 5),
            notable_npc_count_range: (1, 3),
            valid_biomes: Vec::new(),
            description_templates: strs(&["{{location}} reeks of woodsmoke and trouble."]),
            tags: strs(&["hostile_territory"]),
        },
        LocationTemplate {
            id: "cattle_ranch".into(),
            location_type: "ranch".into(),
            size_tier: 1,
            name_pool_id: "ranch".into(),
            building_refs: vec![bref("stable", true, (1, 1))],
            background_npc_count_range: (1, 4),
            notable_npc_count_range: (1, 2),
            valid_biomes: Vec::new(),
            description_templates: strs(&["{{location}} spreads across open range, cattle scattered over the hills."]),
            tags: strs(&["rural"]),
        },
        LocationTemplate {
            id: "silver_mine".into(),
            location_type: "mine".into(),
            size_tier: 1,
            name_pool_id: "mine".into(),
            building_refs: Vec::new(),
            background_npc_count_range: (2, 6),
            notable_npc_count_range: (1, 2),
            valid_biomes: Vec::new(),
            description_templates: strs(&["{{location}} cuts into the hillside, timber shoring holding back the dark."]),
            tags: strs(&["industrial"]),
        },
        LocationTemplate {
            id: "abandoned_ruin".into(),
            location_type: "ruin".into(),
            size_tier: 1,
            name_pool_id: "ruin".into(),
            building_refs: Vec::new(),
            background_npc_count_range: (0, 2),
            notable_npc_count_range: (0, 1),
            valid_biomes: Vec::new(),
            description_templates: strs(&["{{location}} has been picked over and left to the wind."]),
            tags: strs(&["derelict"]),
        },
    ]
}
