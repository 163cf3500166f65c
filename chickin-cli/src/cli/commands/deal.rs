//! Deal submission handler

use anyhow::Result;
use colored::*;

use crate::cli::{DealArgs, DealCommands};
use crate::config::Store;
use crate::services::matching::{ChatMessage, Deal, build_recommendation, match_lenders};

/// Bounds enforced by the intake form
const MIN_AMOUNT: f64 = 5_000.0;
const MAX_AMOUNT: f64 = 1_000_000.0;
const MIN_FICO: u16 = 300;
const MAX_FICO: u16 = 850;

pub fn handle_deal_command(command: DealCommands, store: &Store) -> Result<()> {
    match command {
        DealCommands::Submit(args) => submit(args, store),
    }
}

fn submit(args: DealArgs, store: &Store) -> Result<()> {
    if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&args.amount) {
        anyhow::bail!(
            "Requested amount must be between ${} and ${}",
            MIN_AMOUNT as i64,
            MAX_AMOUNT as i64
        );
    }
    if !(MIN_FICO..=MAX_FICO).contains(&args.fico) {
        anyhow::bail!("FICO score must be between {} and {}", MIN_FICO, MAX_FICO);
    }
    if args.revenue < 0.0 {
        anyhow::bail!("Revenue cannot be negative");
    }
    if args.time_in_business == 0 {
        anyhow::bail!("Time in business must be at least one month");
    }

    let deal = Deal {
        business_name: args.business_name,
        industry: args.industry,
        revenue: args.revenue,
        requested_amount: args.amount,
        time_in_business: args.time_in_business,
        fico_score: args.fico,
        num_nsfs: args.nsfs,
        additional_notes: args.notes.filter(|notes| !notes.trim().is_empty()),
    };

    let lenders = store.load_lenders()?;
    let rules = store.load_rules()?;
    let matched = match_lenders(&deal, &lenders, &rules);
    log::info!(
        "Deal for {} matched {} of {} lenders",
        deal.business_name,
        matched.len(),
        lenders.len()
    );

    let response = build_recommendation(&deal, &matched);

    let mut chat = store.load_chat()?;
    chat.push(ChatMessage::from_deal(deal));
    chat.push(ChatMessage::from_recommendation(response.clone(), matched.clone()));
    store.save_chat(&chat)?;

    println!("{response}");
    if matched.is_empty() {
        println!("{}", "No matching lenders.".red().bold());
    } else {
        println!(
            "{}",
            format!("{} matching lender(s) recorded to chat history.", matched.len())
                .green()
                .bold()
        );
    }
    Ok(())
}
