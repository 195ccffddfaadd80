use serde::{Deserialize, Serialize};

/// A single shop item.
///
/// `name` is only used to pick the item's [`UpdatePolicy`](crate::UpdatePolicy);
/// `sell_in` and `quality` are mutated in place every time the owning
/// [`Inventory`](crate::Inventory) advances a day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Days left before the item expires. Goes negative once expired.
    pub sell_in: i32,
    pub quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// True once the sell-in countdown has passed zero.
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
