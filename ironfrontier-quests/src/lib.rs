pub mod dialogue_generator;
pub mod quest_generator;

pub use dialogue_generator::{generate_simple_dialogue_tree, SimpleDialogueOptions};
pub use quest_generator::generate_quest;
