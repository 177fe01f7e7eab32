use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopStockEntry {
    pub item_id: String,
    pub stock: u32,
    pub base_price: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopInventory {
    pub npc_id: String,
    pub shop_type: String,
    pub stock: Vec<ShopStockEntry>,
    pub price_modifier: f64,
    pub can_buy: bool,
    pub can_sell: bool,
}
