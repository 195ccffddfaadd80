//! The inventory: an ordered item collection advanced one day at a time.

use crate::item::Item;
use crate::selector::select_policy;

/// Ordered collection of items plus the number of days already simulated.
///
/// Items are updated in place, in sequence order. No item's transition reads
/// another item, so order only matters for determinism of logs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    day: u64,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Number of completed `advance_day` calls.
    pub fn day(&self) -> u64 {
        self.day
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply one day's transition to every item.
    pub fn advance_day(&mut self) {
        for item in &mut self.items {
            let policy = select_policy(item);
            policy.apply(item);
            tracing::trace!(
                name = %item.name,
                policy = policy.as_str(),
                sell_in = item.sell_in,
                quality = item.quality,
                "item aged"
            );
        }

        self.day += 1;
        tracing::debug!(day = self.day, items = self.items.len(), "day advanced");
    }

    pub fn advance_days(&mut self, days: u64) {
        for _ in 0..days {
            self.advance_day();
        }
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
