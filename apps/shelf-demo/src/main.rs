//! # Shelf Demo Entry Point
//!
//! ## Usage
//! ```bash
//! cargo run -p shelf-demo
//!
//! # Quieter, without the sample catalogue
//! SHELF_LOG_FILTER=warn SHELF_SEED_BOOKS=false cargo run -p shelf-demo
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shelf_demo_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shelf-demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}
