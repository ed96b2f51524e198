use crate::book::AddressBook;
use crate::error::{AppError, Result};
use crate::models::Entry;
use clap::{Parser, Subcommand};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

/// CLI tool for managing a sorted contact address book
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run a single command and exit; omit for the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every entry in sorted order
    List,

    /// View the entry at a position (entries are numbered from 1)
    View {
        /// 1-based entry number
        position: i64,
    },

    /// Create a new entry
    Add {
        /// Contact name
        #[arg(short, long)]
        name: String,

        /// Phone number (no format is enforced)
        #[arg(short, long)]
        phone: String,

        /// Email address (no format is enforced)
        #[arg(short, long)]
        email: String,
    },

    /// Edit the entry at a position; omitted fields keep their values
    Edit {
        /// 1-based entry number
        position: i64,

        /// Replacement name
        #[arg(long)]
        name: Option<String>,

        /// Replacement phone number
        #[arg(long)]
        phone: Option<String>,

        /// Replacement email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Remove the entry at a position
    Remove {
        /// 1-based entry number
        position: i64,
    },

    /// Search for an entry by exact name (binary search by default)
    Search {
        /// Name to look for, matched case-sensitively
        name: String,

        /// Scan in order and return the first match instead
        #[arg(long)]
        linear: bool,
    },

    /// Import entries from a CSV file
    Import {
        /// CSV file with name, phone_number, and email columns
        file: PathBuf,
    },

    /// Remove every entry from the book
    Purge,
}

/// CLI application: owns the single address book for the session.
#[derive(Default)]
pub struct App {
    book: AddressBook,
}

impl App {
    /// Creates a new CLI application with an empty address book.
    pub fn new() -> Self {
        Self {
            book: AddressBook::new(),
        }
    }

    /// The session's address book (read-only, for display).
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Runs a single command against the session's address book.
    pub fn run_command(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::List => {
                self.list_entries();
            },
            Commands::View { position } => {
                self.view_entry(position)?;
            },
            Commands::Add { name, phone, email } => {
                self.create_entry(&name, &phone, &email);
            },
            Commands::Edit {
                position,
                name,
                phone,
                email,
            } => {
                self.edit_entry(position, name, phone, email)?;
            },
            Commands::Remove { position } => {
                self.remove_entry(position)?;
            },
            Commands::Search { name, linear } => {
                self.search_entries(&name, linear);
            },
            Commands::Import { file } => {
                self.import_csv(&file)?;
            },
            Commands::Purge => {
                self.purge_book();
            },
        }

        Ok(())
    }

    /// Print every entry as a numbered table.
    fn list_entries(&self) {
        if self.book.is_empty() {
            println!("{}", "The address book is empty.".yellow());
            return;
        }

        println!("{}", render_table(self.book.entries()));
        println!("{} entries", self.book.len());
    }

    fn view_entry(&self, position: i64) -> Result<()> {
        let entry = self.book.view_entry_number(position)?;
        println!("{} {}", format!("{}:", position).bold(), entry);
        Ok(())
    }

    fn create_entry(&mut self, name: &str, phone: &str, email: &str) {
        self.book.add_entry(name, phone, email);
        info!("Created entry for {}", name);
        println!("{}", "New entry created.".green());
    }

    /// Apply the given replacement fields to the entry in place. Editing
    /// never moves the entry, even when the name changes.
    fn edit_entry(
        &mut self,
        position: i64,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<()> {
        let entry = self.book.entry_mut(position)?;

        if let Some(name) = name {
            entry.name = name;
        }
        if let Some(phone) = phone {
            entry.phone_number = phone;
        }
        if let Some(email) = email {
            entry.email = email;
        }

        println!("{} {}", "Updated entry:".green(), entry);
        Ok(())
    }

    fn remove_entry(&mut self, position: i64) -> Result<()> {
        let removed = self.book.remove_entry(position)?;
        println!("Entry {} ({}) removed.", position, removed);
        Ok(())
    }

    /// Report a search hit with its 1-based entry number, or a miss.
    fn search_entries(&self, name: &str, linear: bool) {
        let found = if linear {
            self.book.linear_search(name)
        } else {
            self.book.binary_search(name)
        };

        match found {
            Some(entry) => {
                // Recover the matched entry's position for display; the
                // search returns a reference into the book's own storage.
                let position = self
                    .book
                    .entries()
                    .iter()
                    .position(|candidate| std::ptr::eq(candidate, entry))
                    .map(|index| index + 1)
                    .unwrap_or_default();
                println!("{} {}", format!("{}:", position).bold(), entry);
            },
            None => {
                println!("No match found for {}", name.yellow());
            },
        }
    }

    fn import_csv(&mut self, file: &Path) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message(format!("Importing entries from {}", file.display()));

        let result = File::open(file)
            .map_err(AppError::from)
            .and_then(|source| self.book.import_from_csv(source));

        spinner.finish_and_clear();

        let added = result?;
        println!(
            "{}",
            format!("{} new entries added from {}", added, file.display()).green()
        );
        Ok(())
    }

    fn purge_book(&mut self) {
        self.book.purge();
        println!("{}", "All entries have been removed.".green());
    }
}

/// Renders entries as a table with 1-based position numbers.
fn render_table(entries: &[Entry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Name", "Phone number", "Email"]);

    for (index, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            entry.name.clone(),
            entry.phone_number.clone(),
            entry.email.clone(),
        ]);
    }

    table
}

// --- Interactive prompt helpers ---
// Used by the menu loop in main to gather command arguments.

/// Prompts for a 1-based entry number. Re-prompts until the input parses
/// as an integer; range checking is left to the command itself.
pub fn prompt_position(prompt: &str) -> Result<i64> {
    let position = Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(position)
}

/// Prompts for a required line of text.
pub fn prompt_text(prompt: &str) -> Result<String> {
    let text = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()?;
    Ok(text)
}

/// Prompts for an optional line of text; empty input means `None`
/// ("keep the current value" for edits).
pub fn prompt_optional(prompt: &str) -> Result<Option<String>> {
    let text = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// Prompts for the CSV file to import. Empty input is rejected rather
/// than treated as a path.
pub fn prompt_file() -> Result<PathBuf> {
    let file = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("CSV file to import")
        .allow_empty(true)
        .interact_text()?;
    if file.is_empty() {
        return Err(AppError::Cli("no file provided".to_string()));
    }
    Ok(PathBuf::from(file))
}

/// Asks for confirmation before wiping the whole book.
pub fn confirm_purge() -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Remove every entry from the address book?")
        .default(false)
        .interact()?;
    Ok(confirmed)
}
