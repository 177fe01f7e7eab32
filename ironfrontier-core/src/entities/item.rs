use serde::{Deserialize, Serialize};

use super::hex::HexCoord;

/// A placement of an item-library id in the world. The item library
/// itself (stats, icons, flavor text) is an external collaborator
/// (§1 Out of scope); the core only places ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldItemSpawn {
    pub item_id: String,
    pub position: HexCoord,
}
