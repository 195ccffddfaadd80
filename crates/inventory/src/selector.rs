//! Name -> policy resolution.

use crate::item::Item;
use crate::policy::UpdatePolicy;

/// Any name starting with this is fast-decaying, even if it would also match
/// one of [`EXACT_POLICIES`].
pub const CONJURED_PREFIX: &str = "Conjured";

/// Special item names, matched exactly and case-sensitively.
pub const EXACT_POLICIES: &[(&str, UpdatePolicy)] = &[
    ("Aged Brie", UpdatePolicy::Improving),
    (
        "Backstage passes to a TAFKAL80ETC concert",
        UpdatePolicy::EventProximity,
    ),
    ("Sulfuras, Hand of Ragnaros", UpdatePolicy::Immutable),
];

/// Resolve the policy governing `item`. Depends only on its name.
pub fn select_policy(item: &Item) -> UpdatePolicy {
    policy_for_name(&item.name)
}

/// Resolve a policy from an item name. Unknown names are [`UpdatePolicy::Normal`].
pub fn policy_for_name(name: &str) -> UpdatePolicy {
    if name.starts_with(CONJURED_PREFIX) {
        return UpdatePolicy::FastDecaying;
    }

    EXACT_POLICIES
        .iter()
        .find(|(exact, _)| *exact == name)
        .map(|(_, policy)| *policy)
        .unwrap_or(UpdatePolicy::Normal)
}
