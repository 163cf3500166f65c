//! Custom rule commands

use anyhow::Result;
use colored::*;

use crate::cli::RuleCommands;
use crate::config::Store;
use crate::services::matching::{RuleAction, compile_rule};
use crate::services::matching::narrative::format_usd;

pub fn handle_rule_command(command: RuleCommands, store: &Store) -> Result<()> {
    match command {
        RuleCommands::List => list(store),
        RuleCommands::Add { rule } => add(rule, store),
        RuleCommands::Remove { index } => remove(index, store),
    }
}

fn describe_action(action: &RuleAction) -> String {
    match action {
        RuleAction::ExcludeOverAmount { lender_name, threshold } => format!(
            "excludes {} for amounts over ${}",
            lender_name,
            format_usd(*threshold)
        ),
        RuleAction::Unsupported => "no enforceable action, kept as a note".to_string(),
    }
}

fn list(store: &Store) -> Result<()> {
    let rules = store.load_rules()?;
    let lenders = store.load_lenders()?;
    if rules.is_empty() {
        println!("{}", "No custom rules.".dimmed());
        return Ok(());
    }
    for (i, rule) in rules.iter().enumerate() {
        let compiled = compile_rule(rule, &lenders);
        let status = match compiled.action {
            RuleAction::ExcludeOverAmount { .. } => describe_action(&compiled.action).green(),
            RuleAction::Unsupported => describe_action(&compiled.action).dimmed(),
        };
        println!("{:>3}. {}", i + 1, rule);
        println!("     {status}");
    }
    Ok(())
}

fn add(rule: String, store: &Store) -> Result<()> {
    let rule = rule.trim().to_string();
    if rule.is_empty() {
        anyhow::bail!("Rule text cannot be empty");
    }
    let lenders = store.load_lenders()?;
    let compiled = compile_rule(&rule, &lenders);

    let mut rules = store.load_rules()?;
    rules.push(rule);
    store.save_rules(&rules)?;

    println!("{}", "New rule added".green().bold());
    println!("{}", describe_action(&compiled.action));
    Ok(())
}

fn remove(index: usize, store: &Store) -> Result<()> {
    let mut rules = store.load_rules()?;
    if index == 0 || index > rules.len() {
        anyhow::bail!("No rule at position {} (have {})", index, rules.len());
    }
    let removed = rules.remove(index - 1);
    store.save_rules(&rules)?;
    println!("{} {}", "Rule removed:".green().bold(), removed);
    Ok(())
}
