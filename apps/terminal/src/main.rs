//! # Bookstall Terminal Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstall Terminal                               │
//! │                                                                         │
//! │  stdin ──► Shell ──► commands ──► Store (books, sales, loans)          │
//! │              │                                                          │
//! │              └──► views ──► stdout           logs ──► stderr            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All data lives in memory and is gone when the process exits.

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match bookstall_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bookstall: {}", err);
            ExitCode::FAILURE
        }
    }
}
