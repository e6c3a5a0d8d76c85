//! Contact Book - Main entry point
//!
//! Runs the interactive prompt: loads the address book, reads commands from
//! stdin until `close`/`exit` or end of input, then saves the book.

use anyhow::{Context, Result};
use contact_book::{
    AddressBook, AddressBookRepository, Config, DispatchSettings, Dispatcher, JsonFileRepository,
    Outcome,
};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; stdout belongs to the prompt)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded, address book at {}", config.book_path.display());

    let repository = JsonFileRepository::new(config.book_path.clone());
    let mut book = repository
        .load()
        .with_context(|| format!("Failed to load {}", config.book_path.display()))?;
    info!("Loaded {} contacts", book.len());

    let dispatcher = Dispatcher::new(DispatchSettings::from(&config));

    run_prompt(&dispatcher, &mut book)?;

    if let Err(e) = repository.save(&book) {
        error!("Failed to save address book: {}", e);
        return Err(e).context("Failed to save address book");
    }

    info!("Saved {} contacts, shutdown complete", book.len());
    Ok(())
}

/// Read commands until the user exits or input ends.
fn run_prompt(dispatcher: &Dispatcher, book: &mut AddressBook) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    writeln!(stdout, "Welcome to the assistant bot!")?;

    loop {
        write!(stdout, "Enter a command: ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            writeln!(stdout)?;
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match dispatcher.handle_line(&line, book) {
            Outcome::Reply(text) => writeln!(stdout, "{}", text)?,
            Outcome::Empty => {}
            Outcome::Exit => {
                writeln!(stdout, "Good bye!")?;
                break;
            }
        }
    }

    Ok(())
}
