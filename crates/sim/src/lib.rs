//! `gilded-rose-sim` — simulation driver around the inventory core.
//!
//! Seeds an inventory, advances it a configured number of days and renders
//! every day's snapshot. All failure modes live here; the core cannot fail.

pub mod config;
pub mod error;
pub mod render;
pub mod seed;

use std::io::Write;

use gilded_rose_inventory::Inventory;

pub use config::{OutputFormat, SimConfig};
pub use error::{SimError, SimResult};

/// Run a full simulation and write every snapshot to `out`.
///
/// Day 0 is the seed state; days `1..config.days` follow, one `advance_day` each.
pub fn run(config: &SimConfig, out: &mut impl Write) -> SimResult<Inventory> {
    let items = match &config.seed_path {
        Some(path) => seed::load(path)?,
        None => seed::default_items(),
    };
    tracing::info!(
        items = items.len(),
        days = config.days,
        seed = ?config.seed_path,
        "starting simulation"
    );

    let mut inventory = Inventory::new(items);

    if config.output == OutputFormat::Text {
        render::write_banner(out)?;
    }
    render::write_snapshot(out, config.output, &inventory)?;

    for _ in 1..config.days {
        inventory.advance_day();
        render::write_snapshot(out, config.output, &inventory)?;
    }

    if config.output == OutputFormat::Text {
        render::write_legend(out)?;
    }
    out.flush()?;

    tracing::info!(day = inventory.day(), "simulation finished");
    Ok(inventory)
}
