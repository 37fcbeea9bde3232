//! Address Book - demonstration driver
//!
//! Builds a small address book, edits and queries it, and prints each step to
//! stdout. Logs go to stderr.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    println!("{}", book);

    let mut john = book.find_mut("John").context("John should be in the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    if let Some(phone) = john.find_phone("5555555555") {
        println!("{}: {}", john.name(), phone);
    }

    let hits = book.search(
        "jon",
        config.max_match_results,
        config.match_confidence_threshold,
    );
    for hit in hits {
        println!("Search 'jon': {} ({}%)", hit.record.name(), hit.confidence);
    }

    book.delete("Jane");
    println!("{}", book);

    info!(records = book.len(), "Demonstration complete");
    Ok(())
}
