//! Free-text query command handler

use anyhow::Result;
use colored::*;

use crate::cli::{OutputFormat, QueryArgs};
use crate::data::DashboardData;
use crate::data::models::{InventoryItem, MenuItem};
use crate::services::classifier::{QueryResult, classify};
use crate::services::inventory::{StockStatus, stock_status};

/// Classify the query and render the matched response shape
pub fn handle_query(args: QueryArgs) -> Result<()> {
    if args.query.trim().is_empty() {
        anyhow::bail!("Query cannot be empty");
    }

    let data = DashboardData::load();
    let result = classify(&data, &args.query);
    log::debug!("Query classified as {}", result.tag());

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => render(&result),
    }
    Ok(())
}

fn render(result: &QueryResult) {
    println!("{}", result.explanation().bold());
    println!();
    match result {
        QueryResult::SalesAnalysis { data, insights, .. } => {
            print_menu_items(data);
            println!();
            println!("{}", "Insights:".cyan().bold());
            for insight in insights {
                println!("  - {insight}");
            }
        }
        QueryResult::InventoryStatus { data, .. } => print_inventory_items(data),
        QueryResult::MenuPerformance { data, .. }
        | QueryResult::DemographicPreference { data, .. } => print_menu_items(data),
        QueryResult::CustomerService { data, .. } => {
            println!(
                "Overall score: {} (was {})",
                data.score.to_string().bold(),
                data.previous_score
            );
            for area in &data.improvement_areas {
                println!("  {:<18} {}", area.area, area.score);
            }
            println!("Top performers:");
            for performer in &data.top_performers {
                println!("  {:<18} {}", performer.name, performer.score);
            }
        }
        QueryResult::EmployeeProductivity { data, .. } => {
            println!(
                "Overall: {} (previous period {})",
                data.overall.to_string().bold(),
                data.previous_period
            );
            for dept in &data.by_department {
                println!("  {:<12} {:>3}  ({:+})", dept.department, dept.score, dept.change);
            }
        }
        QueryResult::GeneralSearch { data, .. } => {
            if data.menu_items.is_empty() && data.inventory.is_empty() {
                println!("{}", "No matches found.".dimmed());
                return;
            }
            if !data.menu_items.is_empty() {
                println!("{}", "Menu items:".cyan().bold());
                print_menu_items(&data.menu_items);
            }
            if !data.inventory.is_empty() {
                println!("{}", "Inventory:".cyan().bold());
                print_inventory_items(&data.inventory);
            }
        }
    }
}

fn print_menu_items(items: &[MenuItem]) {
    for item in items {
        println!(
            "  {:<30} {:<18} {:>4} sold  ${:>5.2}  {:.1}*",
            item.name, item.category, item.sales, item.price, item.rating
        );
    }
}

fn print_inventory_items(items: &[InventoryItem]) {
    for item in items {
        let status = stock_status(item);
        let label = match status {
            StockStatus::Urgent => status.label().red().bold(),
            StockStatus::Warning => status.label().yellow(),
            StockStatus::Normal => status.label().green(),
        };
        println!(
            "  {:<16} {:<14} stock {:>6.0} (min {:>4.0})  {}",
            item.name, item.category, item.current_stock, item.min_required, label
        );
    }
}
