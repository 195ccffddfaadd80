//! Snapshot rendering (text table or JSON lines).

use std::io::Write;

use serde::Serialize;

use gilded_rose_inventory::{Inventory, Item};

use crate::config::OutputFormat;
use crate::error::SimResult;

const RULE_WIDTH: usize = 80;
const NAME_WIDTH: usize = 50;
const SELL_IN_WIDTH: usize = 12;
const QUALITY_WIDTH: usize = 10;

#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    day: u64,
    items: &'a [Item],
}

pub fn write_banner(out: &mut impl Write) -> SimResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "INVENTORY - OLLIVANDERS - GILDED ROSE")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Render the inventory as of its current day.
pub fn write_snapshot(
    out: &mut impl Write,
    format: OutputFormat,
    inventory: &Inventory,
) -> SimResult<()> {
    match format {
        OutputFormat::Text => write_table(out, inventory.day(), inventory.items()),
        OutputFormat::Json => {
            let snapshot = Snapshot {
                day: inventory.day(),
                items: inventory.items(),
            };
            serde_json::to_writer(&mut *out, &snapshot)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

pub fn write_table(out: &mut impl Write, day: u64, items: &[Item]) -> SimResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Day {day}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:<NAME_WIDTH$} {:>SELL_IN_WIDTH$} {:>QUALITY_WIDTH$}",
        "Item", "Sell-in", "Quality"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for item in items {
        writeln!(
            out,
            "{:<NAME_WIDTH$} {:>SELL_IN_WIDTH$} {:>QUALITY_WIDTH$}",
            item.name, item.sell_in, item.quality
        )?;
    }
    Ok(())
}

pub fn write_legend(out: &mut impl Write) -> SimResult<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "LEGEND:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Normal items: lose 1 quality per day (2 once expired)")?;
    writeln!(out, "Aged Brie: gains quality with age")?;
    writeln!(out, "Backstage passes: gain quality as the concert nears (0 afterwards)")?;
    writeln!(out, "Sulfuras: legendary, never changes")?;
    writeln!(out, "Conjured: lose 2 quality per day (4 once expired)")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}
