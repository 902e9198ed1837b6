//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `quotely_core` linkage.
//! - Exercise the in-memory store end to end for quick local sanity checks.

use quotely_core::db::open_db_in_memory;
use quotely_core::{Draft, QuoteService, SortOrder, SqliteQuoteRepository};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("quotely_core ping={}", quotely_core::ping());
    println!("quotely_core version={}", quotely_core::core_version());

    match store_smoke() {
        Ok(count) => {
            println!("store smoke ok quotes={count}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("store smoke failed: {message}");
            ExitCode::FAILURE
        }
    }
}

fn store_smoke() -> Result<usize, String> {
    let conn = open_db_in_memory().map_err(|err| err.to_string())?;
    let repo = SqliteQuoteRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let service = QuoteService::new(repo);

    let mut draft = Draft::new();
    draft.text = "hello from the command line".to_string();
    service.save_draft(&draft).map_err(|err| err.to_string())?;

    let feed = service
        .feed(SortOrder::NewestFirst)
        .map_err(|err| err.to_string())?;
    Ok(feed.len())
}
