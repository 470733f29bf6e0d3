use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::workflows::outfit::domain::{Catalog, ColorPalette, Item, ItemId};

pub(super) const NAVY_SHIRT: ItemId = ItemId(15970);
pub(super) const SILVER_WATCH: ItemId = ItemId(59263);
pub(super) const TRACK_PANTS: ItemId = ItemId(21379);

pub(super) fn item(
    id: u64,
    name: &str,
    category: &str,
    gender: Option<&str>,
    occasion: &str,
    colors: &str,
) -> Item {
    Item {
        id: ItemId(id),
        display_name: name.to_string(),
        category: Some(category.to_string()),
        gender: gender.map(str::to_string),
        occasion: Some(occasion.to_string()),
        colors: ColorPalette::parse(colors),
    }
}

pub(super) fn wardrobe() -> Catalog {
    Catalog::from_items(vec![
        item(15970, "Turtle Check Men Navy Blue Shirt", "Shirt", Some("Men"), "Casual", "Navy Blue"),
        item(101, "Roadster Men Blue Jeans", "Jeans", Some("Men"), "Casual", "Blue"),
        item(102, "Levis Unisex Black Jeans", "jeans", Some("Unisex"), "General", "Black"),
        item(103, "Vero Moda Women Red Skirt", "Skirt", Some("Women"), "Casual", "Red"),
        item(104, "Arrow Men Grey Formal Trousers", "Trousers", Some("Men"), "Formal", "Grey"),
        item(105, "Puma Men White Casual Shoes", "Casual Shoes", Some("Men"), "Casual", "White"),
        item(106, "Nike Men Black Sports Shoes", "Sports Shoes", Some("Men"), "Sports", "Black"),
        item(107, "Wildcraft Unisex Black Backpack", "Accessory", Some("Unisex"), "General", "Black"),
        item(59263, "Titan Women Silver Watch", "Watch", Some("Women"), "Casual", "Silver"),
        item(108, "Mango Women Pink Dress", "Dress", Some("Women"), "Casual", "Pink"),
        item(21379, "Manchester United Men Solid Black Track Pants", "Track Pants", Some("Men"), "Sports", "Black"),
        item(109, "Nike Men White T-Shirt", "T-Shirt", Some("Men"), "Sports", "White"),
        item(110, "Puma Men Grey Hoodie", "Hoodie", Some("Men"), "Sports", "Grey"),
        item(111, "Unlabelled Blue Shorts", "Shorts", None, "Casual", "Blue"),
        item(112, "Jack & Jones Men Olive Shorts", "Shorts", Some("Men"), "Casual", "Olive"),
        item(113, "Peter England Men Purple Shirt", "Shirt", Some("Men"), "Casual", "Purple"),
    ])
    .expect("fixture ids are unique")
}

pub(super) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(super) fn ids(items: &[Item]) -> Vec<u64> {
    let mut ids: Vec<u64> = items.iter().map(|item| item.id.0).collect();
    ids.sort_unstable();
    ids
}
