//! Inventory domain module (nightly aging).
//!
//! This crate contains the per-item update rules for a shop inventory,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod inventory;
pub mod item;
pub mod policy;
pub mod selector;

pub use inventory::Inventory;
pub use item::Item;
pub use policy::{MAX_QUALITY, MIN_QUALITY, UpdatePolicy, decrease_quality, increase_quality};
pub use selector::{CONJURED_PREFIX, EXACT_POLICIES, policy_for_name, select_policy};
