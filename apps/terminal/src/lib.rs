//! # Bookstall Terminal Library
//!
//! Interactive front end for the bookstall store. `main.rs` only calls
//! [`run`]; everything else lives here so it can be tested.
//!
//! ## Module Organization
//! ```text
//! bookstall_terminal/
//! ├── lib.rs          ◄─── You are here (startup & line loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared store handle, store construction
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── add_book, sell_book, create_loan, ...
//! ├── views.rs        ◄─── Inventory / Sales / Loans rendering
//! ├── shell.rs        ◄─── Line parsing and screen navigation
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod views;

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use shell::Shell;
use state::{build_store, ConfigState, StoreState};

/// Runs the terminal application until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn,bookstall=info, override with RUST_LOG              │
/// │                                                                         │
/// │  2. Load ConfigState from BOOKSTALL_* variables                         │
/// │                                                                         │
/// │  3. Build the Store (id strategy, optional starter catalog)             │
/// │                                                                         │
/// │  4. Wrap in StoreState, hand it to the Shell                            │
/// │                                                                         │
/// │  5. Read lines from stdin, print each Outcome to stdout                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store_name = %config.store_name, "Starting Bookstall terminal");

    let store = StoreState::new(build_store(&config)?);
    let mut shell = Shell::new(store, config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", shell.banner())?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let outcome = shell.handle(&line?);
        writeln!(stdout, "{}", outcome.output)?;
        if outcome.quit {
            break;
        }
        prompt(&mut stdout)?;
    }

    info!("Bookstall terminal stopped");
    Ok(())
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "\n> ")?;
    out.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bookstall_store=trace` - Trace the store only
/// - Default: warnings, plus INFO for bookstall crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookstall=info"));

    // Already installed (e.g. by a test harness) is fine.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
