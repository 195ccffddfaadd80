use gilded_rose_inventory::{Inventory, Item};

const BRIE: &str = "Aged Brie";
const PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";

fn state(inventory: &Inventory) -> Vec<(i32, i32)> {
    inventory
        .items()
        .iter()
        .map(|item| (item.sell_in, item.quality))
        .collect()
}

#[test]
fn one_of_each_category_ages_independently() {
    let mut inventory = Inventory::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(BRIE, 2, 0),
        Item::new(SULFURAS, 0, 80),
        Item::new(PASS, 15, 20),
        Item::new("Conjured Mana Cake", 3, 6),
    ]);

    inventory.advance_day();

    assert_eq!(
        state(&inventory),
        vec![(9, 19), (1, 1), (0, 80), (14, 21), (2, 4)]
    );
}

#[test]
fn thirty_day_run_reaches_expected_end_state() {
    let mut inventory = Inventory::new(vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(PASS, 15, 20),
        Item::new("Conjured Mana Cake", 3, 6),
    ]);

    inventory.advance_days(30);

    assert_eq!(inventory.day(), 30);
    assert_eq!(
        state(&inventory),
        vec![(-20, 0), (-28, 50), (-25, 0), (0, 80), (-15, 0), (-27, 0)]
    );
}

#[test]
fn backstage_pass_full_lifecycle() {
    let mut inventory = Inventory::new(vec![Item::new(PASS, 15, 20)]);

    inventory.advance_days(5);
    assert_eq!(state(&inventory), vec![(10, 25)]);

    inventory.advance_days(5);
    assert_eq!(state(&inventory), vec![(5, 35)]);

    inventory.advance_days(5);
    assert_eq!(state(&inventory), vec![(0, 50)]);

    inventory.advance_day();
    assert_eq!(state(&inventory), vec![(-1, 0)]);

    inventory.advance_days(3);
    assert_eq!(state(&inventory), vec![(-4, 0)]);
}

#[test]
fn conjured_full_lifecycle() {
    let mut inventory = Inventory::new(vec![Item::new("Conjured Magic Item", 3, 20)]);

    let mut seen = Vec::new();
    for _ in 0..5 {
        inventory.advance_day();
        seen.push(state(&inventory)[0]);
    }

    assert_eq!(seen, vec![(2, 18), (1, 16), (0, 14), (-1, 10), (-2, 6)]);
}

#[test]
fn normal_items_at_different_stages() {
    let mut inventory = Inventory::new(vec![
        Item::new("Fresh Item", 10, 50),
        Item::new("About to Expire", 1, 10),
        Item::new("Expired Item", 0, 10),
        Item::new("Long Expired", -5, 10),
    ]);

    inventory.advance_day();

    let qualities: Vec<i32> = inventory.items().iter().map(|i| i.quality).collect();
    assert_eq!(qualities, vec![49, 9, 8, 8]);
}

#[test]
fn zero_quality_stays_at_zero() {
    let mut inventory = Inventory::new(vec![
        Item::new("Normal", 5, 0),
        Item::new("Conjured Item", 5, 0),
        Item::new("Normal Expired", -1, 0),
        Item::new("Conjured Expired", -1, 0),
    ]);

    inventory.advance_days(3);

    assert!(inventory.items().iter().all(|item| item.quality == 0));
}

#[test]
fn sulfuras_keeps_out_of_range_quality() {
    let mut inventory = Inventory::new(vec![Item::new(SULFURAS, -1, 80), Item::new(SULFURAS, 3, -7)]);

    inventory.advance_days(50);

    assert_eq!(state(&inventory), vec![(-1, 80), (3, -7)]);
}

#[test]
fn empty_inventory_can_advance() {
    let mut inventory = Inventory::new(Vec::new());
    inventory.advance_days(3);
    assert!(inventory.into_items().is_empty());
}
