//! chickin-cli entry point

mod cli;
mod config;
mod data;
mod services;
mod transfer;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, commands};
use config::Store;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let store = Store::open_default()?;

    match cli.command {
        Commands::Query(args) => commands::query::handle_query(args),
        Commands::Deal { command } => commands::deal::handle_deal_command(command, &store),
        Commands::Lenders { command } => commands::lenders::handle_lender_command(command, &store),
        Commands::Rules { command } => commands::rules::handle_rule_command(command, &store),
        Commands::Inventory(args) => commands::inventory::handle_inventory(args),
        Commands::Menu(args) => commands::menu::handle_menu(args),
        Commands::Dashboard => commands::dashboard::handle_dashboard(),
        Commands::Chat { command } => commands::chat::handle_chat_command(command, &store),
    }
}
