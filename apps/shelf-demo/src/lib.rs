//! # Shelf Demo Library
//!
//! Wiring for the console demonstration.
//!
//! ## Module Organization
//! ```text
//! shelf_demo_lib/
//! ├── lib.rs          ◄─── You are here (startup & walkthrough)
//! └── config.rs       ◄─── Environment-driven settings
//! ```

pub mod config;

use std::error::Error;

use serde::Serialize;
use shelf_core::{Book, CoreResult, Isbn};
use shelf_lending::{BorrowingLedger, InventoryStore, Loan};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

/// Sample catalogue used when `seed_books` is on.
const SAMPLE_CATALOGUE: &[(&str, &str, &str)] = &[
    ("1984", "George Orwell", "1234567890123"),
    ("Brave New World", "Aldous Huxley", "9876543210987"),
];

/// What the walkthrough ended with.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoSummary {
    pub library_name: String,
    pub books: usize,
    pub borrowed: usize,
    pub loans: Vec<Loan>,
}

/// Runs the demonstration.
///
/// ## Startup Sequence
/// 1. Load configuration from `SHELF_*`
/// 2. Initialize tracing (logging)
/// 3. Walk through add → borrow → return
/// 4. Print the summary
pub fn run() -> Result<(), Box<dyn Error>> {
    let config = DemoConfig::from_env();
    init_tracing(&config);

    info!(library = %config.library_name, "Starting Shelf demo");

    let summary = walkthrough(&config)?;

    println!("{} contains {} books.", summary.library_name, summary.books);
    println!("{} books have been borrowed.", summary.borrowed);
    println!("Open loans: {}", serde_json::to_string(&summary.loans)?);

    Ok(())
}

/// Stocks an inventory, lends a book out and takes it back.
pub fn walkthrough(config: &DemoConfig) -> CoreResult<DemoSummary> {
    let mut store = InventoryStore::new();

    if config.seed_books {
        for (name, author, isbn) in SAMPLE_CATALOGUE {
            let book = Book::from_raw_isbn(*name, *author, isbn)?;
            store.add_book(book).into_result()?;
        }
        info!(count = store.count(), "Inventory seeded");
    }

    let mut ledger = BorrowingLedger::new(&store);
    let isbn = Isbn::new("1234567890123")?;

    if ledger.is_available(&isbn).into_value().unwrap_or(false) {
        ledger.borrow_book(&isbn).into_result()?;
        println!("Book borrowed successfully.");
    }

    let returned = ledger.return_book(&isbn);
    match returned.error_message() {
        None => println!("Book returned successfully."),
        Some(message) => {
            warn!(error = %message, "Return refused");
            println!("Failed to return book: {message}");
        }
    }

    Ok(DemoSummary {
        library_name: config.library_name.clone(),
        books: store.count(),
        borrowed: ledger.total_borrowed(),
        loans: ledger.loans(),
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shelf_lending=trace` - Show trace for the lending crate only
/// - Default: the configured `log_filter`
fn init_tracing(config: &DemoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkthrough_with_seed() {
        let summary = walkthrough(&DemoConfig::default()).unwrap();

        assert_eq!(summary.books, 2);
        assert_eq!(summary.borrowed, 0);
        assert!(summary.loans.is_empty());
    }

    #[test]
    fn test_walkthrough_without_seed_reports_failed_return() {
        let config = DemoConfig {
            seed_books: false,
            ..DemoConfig::default()
        };

        let summary = walkthrough(&config).unwrap();

        assert_eq!(summary.books, 0);
        assert_eq!(summary.borrowed, 0);
    }
}
