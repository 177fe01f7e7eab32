//! Type-keyed weighted item pools backing shop stock and world item
//! spawns (§4.8, §4.9 step 5). The item library itself (stats, icons,
//! flavor text) is an external collaborator out of scope here; these
//! pools place only item ids and a price range for the ids this engine
//! knows to spawn.

pub struct ShopItemEntry {
    pub item_id: &'static str,
    pub weight: f64,
    pub price_range: (u64, u64),
}

pub fn items_for_shop_type(shop_type: &str) -> Vec<ShopItemEntry> {
    match shop_type {
        "general_goods" => vec![
            ShopItemEntry { item_id: "canteen", weight: 3.0, price_range: (2, 6) },
            ShopItemEntry { item_id: "bedroll", weight: 2.0, price_range: (4, 10) },
            ShopItemEntry { item_id: "rope_50ft", weight: 2.0, price_range: (3, 8) },
            ShopItemEntry { item_id: "revolver_ammo", weight: 4.0, price_range: (1, 3) },
            ShopItemEntry { item_id: "trail_rations", weight: 3.0, price_range: (2, 5) },
            ShopItemEntry { item_id: "lantern", weight: 1.5, price_range: (6, 14) },
        ],
        "saloon_goods" => vec![
            ShopItemEntry { item_id: "whiskey_bottle", weight: 4.0, price_range: (3, 9) },
            ShopItemEntry { item_id: "deck_of_cards", weight: 1.0, price_range: (1, 4) },
            ShopItemEntry { item_id: "cigars", weight: 2.0, price_range: (2, 6) },
            ShopItemEntry { item_id: "beer_mug", weight: 3.0, price_range: (1, 2) },
        ],
        "livestock" => vec![
            ShopItemEntry { item_id: "saddle", weight: 1.0, price_range: (20, 60) },
            ShopItemEntry { item_id: "horseshoe_set", weight: 2.0, price_range: (4, 10) },
            ShopItemEntry { item_id: "feed_sack", weight: 3.0, price_range: (3, 7) },
            ShopItemEntry { item_id: "cattle_brand", weight: 0.5, price_range: (15, 40) },
        ],
        "smithing" => vec![
            ShopItemEntry { item_id: "hunting_knife", weight: 2.0, price_range: (5, 15) },
            ShopItemEntry { item_id: "pickaxe", weight: 2.0, price_range: (8, 20) },
            ShopItemEntry { item_id: "revolver", weight: 1.0, price_range: (30, 90) },
            ShopItemEntry { item_id: "horseshoe_set", weight: 2.0, price_range: (4, 10) },
        ],
        "travel" => vec![
            ShopItemEntry { item_id: "train_ticket", weight: 3.0, price_range: (5, 25) },
            ShopItemEntry { item_id: "pocket_watch", weight: 1.0, price_range: (10, 30) },
            ShopItemEntry { item_id: "travel_map", weight: 2.0, price_range: (2, 8) },
        ],
        _ => vec![
            ShopItemEntry { item_id: "canteen", weight: 1.0, price_range: (2, 6) },
            ShopItemEntry { item_id: "trail_rations", weight: 1.0, price_range: (2, 5) },
        ],
    }
}

pub fn items_for_location_type(location_type: &str) -> Vec<(&'static str, f64)> {
    match location_type {
        "city" | "town" => vec![
            ("canteen", 3.0),
            ("revolver_ammo", 3.0),
            ("pocket_watch", 1.0),
            ("deck_of_cards", 1.5),
        ],
        "mine" => vec![("pickaxe", 3.0), ("lantern", 2.0), ("dynamite_stick", 1.0)],
        "ranch" => vec![("feed_sack", 3.0), ("horseshoe_set", 2.0), ("saddle", 0.5)],
        "ruin" => vec![("rusted_coin", 2.0), ("tattered_map_fragment", 1.0), ("bone_charm", 0.5)],
        "outpost" | "camp" => vec![("trail_rations", 3.0), ("bedroll", 1.5), ("rope_50ft", 1.0)],
        _ => vec![("canteen", 1.0), ("trail_rations", 1.0)],
    }
}
