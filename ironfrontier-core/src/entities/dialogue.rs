use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueChoice {
    pub text: String,
    /// `None` = leaf.
    pub next_node_id: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueNode {
    pub id: String,
    pub speaker_id: String,
    pub speaker_name: String,
    pub text: String,
    pub choices: Vec<DialogueChoice>,
}

/// A node graph keyed by node id — string-id edges only, never owning
/// pointers, so back-references (e.g. every branch returning to
/// `node_greeting`) are cycle-safe by construction (§4.6, §9).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDialogueTree {
    pub id: String,
    pub root_node_id: String,
    pub nodes: HashMap<String, DialogueNode>,
}

impl GeneratedDialogueTree {
    /// §8 well-formedness: root exists, every non-null edge resolves,
    /// every node has at least one choice.
    pub fn is_well_formed(&self) -> bool {
        if !self.nodes.contains_key(&self.root_node_id) {
            return false;
        }
        for node in self.nodes.values() {
            if node.choices.is_empty() {
                return false;
            }
            for choice in &node.choices {
                if let Some(next) = &choice.next_node_id {
                    if !self.nodes.contains_key(next) {
                        return false;
                    }
                }
            }
        }
        true
    }
}
