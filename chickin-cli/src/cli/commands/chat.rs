//! Deal chat history commands

use anyhow::Result;
use colored::*;

use crate::cli::ChatCommands;
use crate::config::Store;
use crate::services::matching::Role;

pub fn handle_chat_command(command: ChatCommands, store: &Store) -> Result<()> {
    match command {
        ChatCommands::Show => show(store),
        ChatCommands::Clear => clear(store),
    }
}

fn show(store: &Store) -> Result<()> {
    let chat = store.load_chat()?;
    if chat.is_empty() {
        println!("{}", "No deal history yet.".dimmed());
        return Ok(());
    }
    for message in &chat {
        let header = match message.role {
            Role::User => "you".blue().bold(),
            Role::Assistant => "broker-buddy".magenta().bold(),
        };
        println!(
            "[{}] {}",
            message.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            header
        );
        println!("{}", message.content);
        if let Some(recommendations) = &message.recommendations {
            println!(
                "{}",
                format!("({} recommended lenders)", recommendations.len()).dimmed()
            );
        }
        println!();
    }
    Ok(())
}

fn clear(store: &Store) -> Result<()> {
    store.save_chat(&[])?;
    println!("{}", "Chat history cleared".green().bold());
    Ok(())
}
