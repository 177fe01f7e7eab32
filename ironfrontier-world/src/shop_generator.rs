//! Shop inventory generation from a type-keyed weighted item pool (§4.8).

use ironfrontier_core::entities::{ShopInventory, ShopStockEntry};
use ironfrontier_core::enums::Role;
use ironfrontier_core::rng::Rng;

use crate::item_pools::items_for_shop_type;

const SLOT_RANGE: (i64, i64) = (4, 8);
const STOCK_RANGE: (i64, i64) = (1, 10);

/// Maps an NPC's role to the shop-type tag its building would carry,
/// grounded on the building templates' `shop_type` assignments.
pub fn shop_type_for_role(role: &Role) -> &'static str {
    match role {
        Role::Merchant => "general_goods",
        Role::Bartender => "saloon_goods",
        Role::Blacksmith => "smithing",
        Role::Stationmaster => "travel",
        Role::Rancher => "livestock",
        _ => "general_goods",
    }
}

/// Draws `{itemId, stock, buyPrice}` slots from the shop-type's pool,
/// scaling the drawn base price by `1 + 0.05*(level-1)`, then applies a
/// single inventory-wide price modifier `1.0 + U(-0.1, +0.2)`.
pub fn generate_shop_inventory(rng: &mut Rng, npc_id: &str, shop_type: &str, level: u32) -> ShopInventory {
    let pool = items_for_shop_type(shop_type);
    let entries: Vec<&str> = pool.iter().map(|e| e.item_id).collect();
    let weights: Vec<f64> = pool.iter().map(|e| e.weight).collect();

    let slot_count = rng.int(SLOT_RANGE.0, SLOT_RANGE.1) as usize;
    let level_factor = 1.0 + 0.05 * (level.saturating_sub(1)) as f64;

    let mut stock = Vec::with_capacity(slot_count);
    for _ in 0..slot_count {
        let picked_id = *rng.weighted_pick(&entries, &weights);
        let entry = pool.iter().find(|e| e.item_id == picked_id).expect("weighted_pick returns a pool member");
        let base_price = rng.float(entry.price_range.0 as f64, entry.price_range.1 as f64);
        stock.push(ShopStockEntry {
            item_id: picked_id.to_string(),
            stock: rng.int(STOCK_RANGE.0, STOCK_RANGE.1) as u32,
            base_price: (base_price * level_factor).round() as u64,
        });
    }

    ShopInventory {
        npc_id: npc_id.to_string(),
        shop_type: shop_type.to_string(),
        stock,
        price_modifier: 1.0 + rng.float(-0.1, 0.2),
        can_buy: true,
        can_sell: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_stock_draws_only_from_the_shop_types_pool() {
        let mut rng = Rng::new(21);
        let inventory = generate_shop_inventory(&mut rng, "npc_1", "saloon_goods", 3);
        let valid_ids: Vec<&str> = items_for_shop_type("saloon_goods").iter().map(|e| e.item_id).collect();
        for entry in &inventory.stock {
            assert!(valid_ids.contains(&entry.item_id.as_str()));
        }
    }

    #[test]
    fn is_deterministic_for_identical_seed() {
        let mut a = Rng::new(8);
        let mut b = Rng::new(8);
        let inv_a = generate_shop_inventory(&mut a, "npc_1", "general_goods", 2);
        let inv_b = generate_shop_inventory(&mut b, "npc_1", "general_goods", 2);
        assert_eq!(inv_a.stock.len(), inv_b.stock.len());
        assert_eq!(inv_a.price_modifier, inv_b.price_modifier);
    }
}
