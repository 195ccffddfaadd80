//! Aging rules, one variant per item category.
//!
//! A day's transition is always the same three steps:
//!
//! 1. adjust quality using the sell-in of the day being closed,
//! 2. count sell-in down by one,
//! 3. adjust quality again if the item is now expired (`sell_in < 0`).
//!
//! Each variant only differs in what it does at those steps, so each step is a
//! single exhaustive `match`.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Upper quality bound for every category except [`UpdatePolicy::Immutable`].
pub const MAX_QUALITY: i32 = 50;

/// Lower quality bound for every category except [`UpdatePolicy::Immutable`].
pub const MIN_QUALITY: i32 = 0;

/// Event-proximity items gain an extra point when fewer than this many days remain.
const EVENT_NEAR_DAYS: i32 = 11;

/// ...and one more when fewer than this many days remain.
const EVENT_IMMINENT_DAYS: i32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Loses 1 per day, 2 once expired.
    Normal,
    /// Gains 1 per day, 2 once expired ("Aged Brie").
    Improving,
    /// Gains faster as the event nears, worthless after it ("Backstage passes").
    EventProximity,
    /// Never changes ("Sulfuras"). Exempt from the quality bounds.
    Immutable,
    /// Loses 2 per day, 4 once expired ("Conjured").
    FastDecaying,
}

impl UpdatePolicy {
    pub const ALL: [UpdatePolicy; 5] = [
        UpdatePolicy::Normal,
        UpdatePolicy::Improving,
        UpdatePolicy::EventProximity,
        UpdatePolicy::Immutable,
        UpdatePolicy::FastDecaying,
    ];

    /// Stable label, used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            UpdatePolicy::Normal => "normal",
            UpdatePolicy::Improving => "improving",
            UpdatePolicy::EventProximity => "event_proximity",
            UpdatePolicy::Immutable => "immutable",
            UpdatePolicy::FastDecaying => "fast_decaying",
        }
    }

    /// Apply one day's transition to `item` in place.
    ///
    /// Total over every `sell_in`/`quality` value; never panics.
    pub fn apply(self, item: &mut Item) {
        self.adjust_before_sell_in(item);
        self.advance_sell_in(item);
        self.adjust_after_sell_in(item);
    }

    fn adjust_before_sell_in(self, item: &mut Item) {
        match self {
            UpdatePolicy::Normal => decrease_quality(item, 1),
            UpdatePolicy::Improving => increase_quality(item, 1),
            UpdatePolicy::EventProximity => {
                // Thresholds read the sell-in before today's decrement.
                let mut gain = 1;
                if item.sell_in < EVENT_NEAR_DAYS {
                    gain += 1;
                }
                if item.sell_in < EVENT_IMMINENT_DAYS {
                    gain += 1;
                }
                increase_quality(item, gain);
            }
            UpdatePolicy::Immutable => {}
            UpdatePolicy::FastDecaying => decrease_quality(item, 2),
        }
    }

    fn advance_sell_in(self, item: &mut Item) {
        match self {
            UpdatePolicy::Immutable => {}
            _ => item.sell_in = item.sell_in.saturating_sub(1),
        }
    }

    fn adjust_after_sell_in(self, item: &mut Item) {
        if !item.is_expired() {
            return;
        }
        match self {
            UpdatePolicy::Normal => decrease_quality(item, 1),
            UpdatePolicy::Improving => increase_quality(item, 1),
            // Hard reset, not a clamped decrease.
            UpdatePolicy::EventProximity => item.quality = 0,
            UpdatePolicy::Immutable => {}
            UpdatePolicy::FastDecaying => decrease_quality(item, 2),
        }
    }
}

impl core::fmt::Display for UpdatePolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `quality = min(MAX_QUALITY, quality + amount)`.
pub fn increase_quality(item: &mut Item, amount: i32) {
    item.quality = item.quality.saturating_add(amount).min(MAX_QUALITY);
}

/// `quality = max(MIN_QUALITY, quality - amount)`.
pub fn decrease_quality(item: &mut Item, amount: i32) {
    item.quality = item.quality.saturating_sub(amount).max(MIN_QUALITY);
}
