mod book;
mod cli;
mod error;
mod import;
mod models;

use clap::Parser;
use cli::{App, Cli, Commands};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Select};
use error::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Initializing address book session...");

    let cli = Cli::parse();
    let mut app = App::new();

    // One-shot mode: run the given command and exit.
    if let Some(command) = cli.command {
        return app.run_command(command);
    }

    println!("{}", "Welcome to the Address Book CLI!".cyan().bold());

    // Main interactive loop
    loop {
        let options = &[
            "View all entries",
            "View an entry by number",
            "Create an entry",
            "Edit an entry",
            "Remove an entry",
            "Search for an entry",
            "Import entries from a CSV",
            "Purge the address book",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Main menu - {} entries", app.book().len()))
            .items(options)
            .default(0)
            .interact_opt()? // Handle cancellation (e.g. Ctrl+C) gracefully
            .unwrap_or(options.len() - 1); // Default to Exit if cancelled

        println!("\n---\n");

        // Handle the user's choice
        let command_result = match selection {
            0 => app.run_command(Commands::List),
            1 => match cli::prompt_position("Entry number to view") {
                Ok(position) => app.run_command(Commands::View { position }),
                Err(e) => {
                    println!("{} {}", "Failed to get input:".red(), e);
                    continue;
                },
            },
            2 => match prompt_new_entry() {
                Ok(command) => app.run_command(command),
                Err(e) => {
                    println!("{} {}", "Failed to get input:".red(), e);
                    continue;
                },
            },
            3 => match prompt_edit() {
                Ok(command) => app.run_command(command),
                Err(e) => {
                    println!("{} {}", "Failed to get input:".red(), e);
                    continue;
                },
            },
            4 => match cli::prompt_position("Entry number to remove") {
                Ok(position) => app.run_command(Commands::Remove { position }),
                Err(e) => {
                    println!("{} {}", "Failed to get input:".red(), e);
                    continue;
                },
            },
            5 => match cli::prompt_text("Search entries by name") {
                Ok(name) => app.run_command(Commands::Search {
                    name,
                    linear: false,
                }),
                Err(e) => {
                    println!("{} {}", "Failed to get input:".red(), e);
                    continue;
                },
            },
            6 => match cli::prompt_file() {
                Ok(file) => app.run_command(Commands::Import { file }),
                Err(e) => {
                    println!("{} {}", "Failed to get input:".red(), e);
                    continue;
                },
            },
            7 => match cli::confirm_purge() {
                Ok(true) => app.run_command(Commands::Purge),
                Ok(false) => {
                    println!("{}", "Purge cancelled.".yellow());
                    continue;
                },
                Err(e) => {
                    println!("{} {}", "Failed to get input:".red(), e);
                    continue;
                },
            },
            8 => {
                println!("{}", "Good bye!".green());
                break;
            },
            _ => unreachable!(),
        };

        // Every command error is recoverable: report it and return to the menu.
        if let Err(e) = command_result {
            error!("Command execution failed: {:?}", e);
            println!(
                "{} {}",
                "Error executing command:".red(),
                e.to_string().red()
            );
        }

        println!("\n---\n");
    }

    Ok(())
}

/// Gathers the three fields for a new entry.
fn prompt_new_entry() -> Result<Commands> {
    let name = cli::prompt_text("Name")?;
    let phone = cli::prompt_text("Phone number")?;
    let email = cli::prompt_text("Email")?;
    Ok(Commands::Add { name, phone, email })
}

/// Gathers the entry number and the replacement fields for an edit.
/// Empty answers keep the current values.
fn prompt_edit() -> Result<Commands> {
    let position = cli::prompt_position("Entry number to edit")?;
    let name = cli::prompt_optional("New name (leave empty to keep)")?;
    let phone = cli::prompt_optional("New phone number (leave empty to keep)")?;
    let email = cli::prompt_optional("New email (leave empty to keep)")?;
    Ok(Commands::Edit {
        position,
        name,
        phone,
        email,
    })
}
