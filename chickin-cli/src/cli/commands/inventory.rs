//! Inventory listing command

use anyhow::Result;
use colored::*;

use crate::cli::InventoryArgs;
use crate::data::DashboardData;
use crate::services::inventory::{StockStatus, days_of_runway, stock_status};

pub fn handle_inventory(args: InventoryArgs) -> Result<()> {
    let data = DashboardData::load();

    println!(
        "{:<16} {:<14} {:>6} {:>5} {:>8} {:>7}  {}",
        "Item".bold(),
        "Category".bold(),
        "Stock".bold(),
        "Min".bold(),
        "Use/day".bold(),
        "Runway".bold(),
        "Status".bold()
    );
    for item in &data.inventory_items {
        let status = stock_status(item);
        if args.urgent && status != StockStatus::Urgent {
            continue;
        }
        let label = match status {
            StockStatus::Urgent => status.label().red().bold(),
            StockStatus::Warning => status.label().yellow(),
            StockStatus::Normal => status.label().green(),
        };
        println!(
            "{:<16} {:<14} {:>6.0} {:>5.0} {:>8.1} {:>6.1}d  {}",
            item.name,
            item.category,
            item.current_stock,
            item.min_required,
            item.usage_rate,
            days_of_runway(item),
            label
        );
    }
    Ok(())
}
