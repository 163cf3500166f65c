//! Dashboard overview command

use anyhow::Result;
use colored::*;

use crate::data::DashboardData;
use crate::data::models::KpiMetric;
use crate::services::inventory::{StockStatus, stock_status};
use crate::services::matching::narrative::format_usd;

pub fn handle_dashboard() -> Result<()> {
    let data = DashboardData::load();

    println!("{}", "KEY PERFORMANCE INDICATORS".cyan().bold());
    print_kpi("Revenue", &data.kpis.revenue, true);
    print_kpi("Customer satisfaction", &data.kpis.customer_satisfaction, false);
    print_kpi("Employee productivity", &data.kpis.employee_productivity, false);
    print_kpi("Inventory health", &data.kpis.inventory_health, false);

    let urgent: Vec<_> = data
        .inventory_items
        .iter()
        .filter(|item| stock_status(item) == StockStatus::Urgent)
        .collect();
    println!();
    println!("{}", "URGENT INVENTORY".cyan().bold());
    if urgent.is_empty() {
        println!("  {}", "All items within safe levels.".green());
    } else {
        for item in urgent {
            println!(
                "  {} ({:.0} in stock, {:.0} required)",
                item.name.red().bold(),
                item.current_stock,
                item.min_required
            );
        }
    }

    println!();
    println!("{}", "PENDING SHIPMENTS".cyan().bold());
    for shipment in data.shipments.iter().filter(|s| !s.arrived) {
        let contents: Vec<String> = shipment
            .items
            .iter()
            .map(|item| format!("{} x{}", item.name, item.quantity))
            .collect();
        println!(
            "  {} from {} (ETA {}): {}",
            shipment.id,
            shipment.supplier,
            shipment.estimated_arrival,
            contents.join(", ")
        );
    }
    Ok(())
}

fn print_kpi(label: &str, metric: &KpiMetric, money: bool) {
    let value = if money {
        format!("${}", format_usd(metric.value))
    } else {
        format!("{:.0}", metric.value)
    };
    let change = if metric.change >= 0.0 {
        format!("+{:.1}%", metric.change).green()
    } else {
        format!("{:.1}%", metric.change).red()
    };
    println!("  {:<24} {:>10}  {}", label, value.bold(), change);
}
