//! Menu performance listing command

use anyhow::Result;
use colored::*;

use crate::cli::MenuArgs;
use crate::data::DashboardData;

pub fn handle_menu(args: MenuArgs) -> Result<()> {
    let data = DashboardData::load();
    let mut items = data.menu_items;

    if args.best {
        items.sort_by_key(|item| std::cmp::Reverse(item.sales));
        items.truncate(3);
    } else if args.worst {
        items.sort_by_key(|item| item.sales);
        items.truncate(3);
    } else {
        items.sort_by_key(|item| std::cmp::Reverse(item.sales));
    }

    println!(
        "{:<30} {:<18} {:>6} {:>7} {:>7} {:>7}",
        "Item".bold(),
        "Category".bold(),
        "Sales".bold(),
        "Price".bold(),
        "Margin".bold(),
        "Rating".bold()
    );
    for item in &items {
        println!(
            "{:<30} {:<18} {:>6} {:>7.2} {:>7.2} {:>7.1}",
            item.name,
            item.category,
            item.sales,
            item.price,
            item.price - item.cost,
            item.rating
        );
    }
    Ok(())
}
