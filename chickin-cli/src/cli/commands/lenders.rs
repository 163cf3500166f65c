//! Lender database commands

use anyhow::Result;
use colored::*;

use crate::cli::LenderCommands;
use crate::config::Store;
use crate::services::matching::Lender;
use crate::services::matching::narrative::format_usd;
use crate::transfer::{export_lenders_csv, import_lenders};

pub fn handle_lender_command(command: LenderCommands, store: &Store) -> Result<()> {
    match command {
        LenderCommands::List => {
            let lenders = store.load_lenders()?;
            print_lenders(&lenders);
            Ok(())
        }
        LenderCommands::Import { file } => {
            let lenders = import_lenders(&file)?;
            store.save_lenders(&lenders)?;
            println!(
                "{}",
                format!("Imported {} lenders from {}", lenders.len(), file.display())
                    .green()
                    .bold()
            );
            Ok(())
        }
        LenderCommands::Export { file } => {
            let lenders = store.load_lenders()?;
            export_lenders_csv(&lenders, &file)?;
            println!(
                "{}",
                format!("Exported {} lenders to {}", lenders.len(), file.display())
                    .green()
                    .bold()
            );
            Ok(())
        }
    }
}

fn print_lenders(lenders: &[Lender]) {
    println!(
        "{:<20} {:>4} {:>9} {:>9} {:>12} {:>12}  {}",
        "Name".bold(),
        "Tier".bold(),
        "Min FICO".bold(),
        "Max NSFs".bold(),
        "Min Revenue".bold(),
        "Max Amount".bold(),
        "Industries".bold()
    );
    for lender in lenders {
        let tier = match lender.tier {
            1 => lender.tier.to_string().green(),
            2 => lender.tier.to_string().yellow(),
            _ => lender.tier.to_string().normal(),
        };
        println!(
            "{:<20} {:>4} {:>9} {:>9} {:>12} {:>12}  {}",
            lender.name,
            tier,
            lender.min_fico,
            lender.max_nsfs,
            format!("${}", format_usd(lender.min_revenue)),
            format!("${}", format_usd(lender.max_amount)),
            lender.industries.join(", ")
        );
        if let Some(notes) = &lender.notes {
            println!("{:<20} {}", "", notes.dimmed());
        }
    }
}
