//! Command-line interface definitions

pub mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chickin-cli",
    about = "Operations analytics and lender matching for the Chick-In dashboard",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the dashboard a free-text question
    Query(QueryArgs),
    /// Submit and analyze loan deals
    Deal {
        #[command(subcommand)]
        command: DealCommands,
    },
    /// Manage the lender database
    Lenders {
        #[command(subcommand)]
        command: LenderCommands,
    },
    /// Manage custom matching rules
    Rules {
        #[command(subcommand)]
        command: RuleCommands,
    },
    /// Inventory levels and restocking status
    Inventory(InventoryArgs),
    /// Menu item performance
    Menu(MenuArgs),
    /// KPI overview, urgent stock, and pending shipments
    Dashboard,
    /// Deal conversation history
    Chat {
        #[command(subcommand)]
        command: ChatCommands,
    },
}

#[derive(Args)]
pub struct QueryArgs {
    /// The question to classify and answer
    pub query: String,
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum DealCommands {
    /// Match a deal against the lender database and record the result
    Submit(DealArgs),
}

#[derive(Args)]
pub struct DealArgs {
    #[arg(long)]
    pub business_name: String,
    #[arg(long)]
    pub industry: String,
    /// Monthly revenue in dollars
    #[arg(long)]
    pub revenue: f64,
    /// Requested funding amount in dollars
    #[arg(long)]
    pub amount: f64,
    /// Months in business
    #[arg(long, default_value_t = 12)]
    pub time_in_business: u32,
    #[arg(long)]
    pub fico: u16,
    /// Non-sufficient-funds events on record
    #[arg(long, default_value_t = 0)]
    pub nsfs: u32,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum LenderCommands {
    /// Show the lender database
    List,
    /// Replace the lender database from a .csv or .txt file
    Import { file: PathBuf },
    /// Export the lender database to CSV
    Export { file: PathBuf },
}

#[derive(Subcommand)]
pub enum RuleCommands {
    /// Show custom rules and whether each one is enforceable
    List,
    /// Add a free-text rule
    Add { rule: String },
    /// Remove a rule by its list position (1-based)
    Remove { index: usize },
}

#[derive(Args)]
pub struct InventoryArgs {
    /// Only show items needing urgent attention
    #[arg(long)]
    pub urgent: bool,
}

#[derive(Args)]
pub struct MenuArgs {
    /// Only the top 3 items by sales
    #[arg(long, conflicts_with = "worst")]
    pub best: bool,
    /// Only the bottom 3 items by sales
    #[arg(long)]
    pub worst: bool,
}

#[derive(Subcommand)]
pub enum ChatCommands {
    /// Render the conversation history
    Show,
    /// Wipe the conversation history
    Clear,
}
