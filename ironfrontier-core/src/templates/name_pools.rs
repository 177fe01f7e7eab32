use crate::error::TemplateValidationError;

/// Gendered first-name lists and a shared surname list for one cultural
/// origin, plus an optional title list (§3 NamePool).
#[derive(Debug, Clone)]
pub struct NamePool {
    pub origin: String,
    pub male_first_names: Vec<String>,
    pub female_first_names: Vec<String>,
    pub neutral_first_names: Vec<String>,
    pub surnames: Vec<String>,
    pub titles: Vec<String>,
}

impl NamePool {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        let has_any_gender = !self.male_first_names.is_empty()
            || !self.female_first_names.is_empty()
            || !self.neutral_first_names.is_empty();
        if !has_any_gender || self.surnames.is_empty() {
            return Err(TemplateValidationError {
                id: self.origin.clone(),
                reason: "every origin must carry at least one non-empty gendered first-name list and a surname list".into(),
            });
        }
        Ok(())
    }

    pub fn first_names_for(&self, gender: crate::enums::Gender) -> &[String] {
        use crate::enums::Gender::*;
        match gender {
            Male => &self.male_first_names,
            Female => &self.female_first_names,
            Neutral => &self.neutral_first_names,
        }
    }
}

pub fn default_name_pools() -> Vec<NamePool> {
    vec![
        NamePool {
            origin: "anglo".into(),
            male_first_names: strs(&["Clement", "Abel", "Jedediah", "Silas", "Obadiah", "Wyatt", "Ezra", "Garrett"]),
            female_first_names: strs(&["Adeline", "Josephine", "Flora", "Augusta", "Clementine", "Rosalind", "Birdie", "Mercy"]),
            neutral_first_names: strs(&["Ash", "Scout", "Wren"]),
            surnames: strs(&["Calloway", "Briggs", "Holt", "Pruitt", "Tanner", "Cutler", "Ashworth", "Dunmore"]),
            titles: strs(&["Marshal", "Reverend", "Doctor", "Judge"]),
        },
        NamePool {
            origin: "spanish".into(),
            male_first_names: strs(&["Diego", "Rafael", "Emilio", "Tomas", "Benicio", "Salvador", "Mateo", "Valentin"]),
            female_first_names: strs(&["Inés", "Dolores", "Soledad", "Luz", "Pilar", "Remedios", "Carmela", "Esperanza"]),
            neutral_first_names: strs(&["Cruz", "Reyes"]),
            surnames: strs(&["Ortega", "Villanueva", "Salgado", "Carrizo", "Montoya", "Figueroa", "Zamora", "Cárdenas"]),
            titles: strs(&["Don", "Doña", "Padre"]),
        },
        NamePool {
            origin: "native".into(),
            male_first_names: strs(&["Chaska", "Mato", "Wahkan", "Tokala", "Istu", "Kangee"]),
            female_first_names: strs(&["Wenona", "Winona", "Kimi", "Aiyana", "Shappa", "Hantaywee"]),
            neutral_first_names: strs(&["Ohanzee", "Tawa"]),
            surnames: strs(&["Runs-the-Ridge", "Quiet-Thunder", "Red-Hawk", "Stands-Alone", "Swift-River"]),
            titles: strs(&[]),
        },
        NamePool {
            origin: "chinese".into(),
            male_first_names: strs(&["Wei", "Jun", "Haoyu", "Cheng", "Liang", "Feng"]),
            female_first_names: strs(&["Mei", "Lan", "Xia", "Jia", "Yun", "Hua"]),
            neutral_first_names: strs(&["Yue", "An"]),
            surnames: strs(&["Chen", "Wong", "Liu", "Zhang", "Huang", "Tang"]),
            titles: strs(&["Foreman"]),
        },
        NamePool {
            origin: "irish".into(),
            male_first_names: strs(&["Declan", "Fintan", "Seamus", "Cormac", "Brennan", "Ronan"]),
            female_first_names: strs(&["Siobhan", "Maeve", "Aoife", "Orla", "Niamh", "Brigid"]),
            neutral_first_names: strs(&["Quinn", "Casey"]),
            surnames: strs(&["Flaherty", "Gallagher", "Quinlan", "Brennan", "Doyle", "Kilbride"]),
            titles: strs(&["Sergeant", "Father"]),
        },
        NamePool {
            origin: "german".into(),
            male_first_names: strs(&["Dietrich", "Konrad", "Ludwig", "Hermann", "Albrecht", "Gerhard"]),
            female_first_names: strs(&["Hilde", "Greta", "Adelheid", "Ottilie", "Frieda", "Wilhelmina"]),
            neutral_first_names: strs(&["Gerd"]),
            surnames: strs(&["Brandt", "Hoffmann", "Krueger", "Vogel", "Weiss", "Albrecht"]),
            titles: strs(&["Herr"]),
        },
    ]
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Place-name patterns recombined from pool lists (§4.3). Placeholders:
/// `adj`, `noun`, `suffix`, `possessive`, `letter`, `number`.
#[derive(Debug, Clone)]
pub struct PlaceNamePool {
    pub location_type: String,
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
    pub suffixes: Vec<String>,
    pub possessives: Vec<String>,
    pub patterns: Vec<String>,
}

impl PlaceNamePool {
    pub fn validate(&self) -> Result<(), TemplateValidationError> {
        for pattern in &self.patterns {
            for placeholder in ["adj", "noun", "suffix", "possessive"] {
                if pattern.contains(&format!("{{{{{placeholder}}}}}")) {
                    let empty = match placeholder {
                        "adj" => self.adjectives.is_empty(),
                        "noun" => self.nouns.is_empty(),
                        "suffix" => self.suffixes.is_empty(),
                        "possessive" => self.possessives.is_empty(),
                        _ => false,
                    };
                    if empty {
                        return Err(TemplateValidationError {
                            id: self.location_type.clone(),
                            reason: format!("pattern '{pattern}' references empty pool '{placeholder}'"),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

pub fn default_place_name_pools() -> Vec<PlaceNamePool> {
    vec![
        PlaceNamePool {
            location_type: "town".into(),
            adjectives: strs(&["Iron", "Gold", "Dust", "Copper", "Rattlesnake", "Lonesome", "Broken", "Silver"]),
            nouns: strs(&["Creek", "Ridge", "Gulch", "Mesa", "Canyon", "Prairie", "Wells", "Bend"]),
            suffixes: strs(&["Flat", "Crossing", "Junction", "Hollow", "Bluff", "Landing"]),
            possessives: strs(&["Miner's", "Preacher's", "Widow's", "Sheriff's", "Trader's"]),
            patterns: strs(&[
                "{{adj}} {{noun}}",
                "{{possessive}} {{suffix}}",
                "{{adj}} {{suffix}}",
                "{{noun}} {{number}}",
            ]),
        },
        PlaceNamePool {
            location_type: "city".into(),
            adjectives: strs(&["Grand", "New", "Fort", "Saint", "High"]),
            nouns: strs(&["Plains", "Forks", "Springs", "Harbor", "Crossing"]),
            suffixes: strs(&["City", "Heights", "Terminus"]),
            possessives: strs(&["Governor's", "Railroad Baron's"]),
            patterns: strs(&["{{adj}} {{noun}}", "{{adj}} {{suffix}}"]),
        },
        PlaceNamePool {
            location_type: "outpost".into(),
            adjectives: strs(&["Lone", "Forward", "Last", "Border"]),
            nouns: strs(&["Post", "Watch", "Station", "Camp"]),
            suffixes: strs(&["Outpost", "Picket"]),
            possessives: strs(&["Scout's", "Cavalry's"]),
            patterns: strs(&["{{adj}} {{noun}}", "Camp {{letter}}-{{number}}"]),
        },
        PlaceNamePool {
            location_type: "camp".into(),
            adjectives: strs(&["Muddy", "Cold", "Quiet", "Restless"]),
            nouns: strs(&["Camp", "Hollow", "Bottoms"]),
            suffixes: strs(&["Camp"]),
            possessives: strs(&["Drifter's", "Outlaw's"]),
            patterns: strs(&["{{adj}} {{noun}}", "{{possessive}} {{suffix}}"]),
        },
        PlaceNamePool {
            location_type: "ranch".into(),
            adjectives: strs(&["Rocking", "Bar", "Circle", "Lazy"]),
            nouns: strs(&["K Ranch", "J Ranch", "Pines", "Range"]),
            suffixes: strs(&["Ranch", "Spread"]),
            possessives: strs(&["Rancher's"]),
            patterns: strs(&["{{adj}} {{noun}}", "{{possessive}} {{suffix}}"]),
        },
        PlaceNamePool {
            location_type: "mine".into(),
            adjectives: strs(&["Deep", "Black", "Silver", "Lucky"]),
            nouns: strs(&["Shaft", "Vein", "Claim", "Diggings"]),
            suffixes: strs(&["Mine", "Works"]),
            possessives: strs(&["Prospector's", "Company's"]),
            patterns: strs(&["{{adj}} {{noun}}", "{{possessive}} {{suffix}} {{number}}"]),
        },
        PlaceNamePool {
            location_type: "ruin".into(),
            adjectives: strs(&["Abandoned", "Forgotten", "Scorched", "Sunken"]),
            nouns: strs(&["Mission", "Fort", "Homestead", "Depot"]),
            suffixes: strs(&["Ruins", "Remains"]),
            possessives: strs(&["Lost"]),
            patterns: strs(&["{{adj}} {{noun}}", "{{adj}} {{suffix}}"]),
        },
    ]
}
