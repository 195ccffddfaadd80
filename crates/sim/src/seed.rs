//! Initial item sets.

use std::path::Path;

use gilded_rose_inventory::Item;

use crate::error::{SimError, SimResult};

/// The built-in shop: one or more items of every category.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new("Aged Brie", 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        Item::new("Sulfuras, Hand of Ragnaros", -1, 80),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}

/// Load a JSON array of `{name, sell_in, quality}` objects.
pub fn load(path: &Path) -> SimResult<Vec<Item>> {
    let raw = std::fs::read_to_string(path).map_err(|source| SimError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&raw).map_err(|source| SimError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse(raw: &str) -> Result<Vec<Item>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_every_category() {
        use gilded_rose_inventory::{UpdatePolicy, select_policy};

        let items = default_items();
        for policy in UpdatePolicy::ALL {
            assert!(
                items.iter().any(|item| select_policy(item) == policy),
                "no default item for {policy}"
            );
        }
    }

    #[test]
    fn parses_item_array() {
        let items = parse(
            r#"[
                {"name": "Aged Brie", "sell_in": 2, "quality": 0},
                {"name": "Mystery Box", "sell_in": -3, "quality": 12}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            items,
            vec![Item::new("Aged Brie", 2, 0), Item::new("Mystery Box", -3, 12)]
        );
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(parse(r#"[{"name": "Aged Brie", "sell_in": 2}]"#).is_err());
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let path = std::env::temp_dir().join(format!("gilded-rose-seed-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();

        let err = load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        match err {
            SimError::SeedParse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("Expected seed parse error, got {other:?}"),
        }
    }
}
