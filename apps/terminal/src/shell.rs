//! # Shell
//!
//! Turns one line of operator input into output text.
//!
//! ## Selection by Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sales screen                                                           │
//! │    Available books:                                                     │
//! │      1. O Evangelho ...           ◄── "sell 1 3" picks this row         │
//! │      2. Nosso Lar                                                       │
//! │                                                                         │
//! │  Loans screen                                                           │
//! │    Active loans:                                                        │
//! │      1. Nosso Lar -> Alice        ◄── "return 1" picks this row         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numbers are 1-based and resolved against the same list the screen
//! shows, read at the moment the command runs.
//!
//! [`Shell::handle`] does no I/O, which keeps the whole shell testable.

use tracing::debug;

use crate::commands::{self, BookDto, LoanDto};
use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};
use crate::views;

/// The three screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Inventory,
    Sales,
    Loans,
}

/// What to print after a line, and whether to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub quit: bool,
}

impl Outcome {
    fn show(output: impl Into<String>) -> Self {
        Outcome {
            output: output.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Outcome {
            output: "Goodbye.".to_string(),
            quit: true,
        }
    }
}

#[derive(Debug)]
pub struct Shell {
    store: StoreState,
    config: ConfigState,
    screen: Screen,
}

impl Shell {
    pub fn new(store: StoreState, config: ConfigState) -> Self {
        Shell {
            store,
            config,
            screen: Screen::Inventory,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Greeting plus the first screen.
    pub fn banner(&self) -> String {
        format!(
            "Welcome to {}. Type 'help' for commands.\n\n{}",
            self.config.store_name,
            self.render()
        )
    }

    /// The current screen with fresh data.
    pub fn render(&self) -> String {
        match self.screen {
            Screen::Inventory => {
                views::render_inventory(&self.config, &commands::list_books(&self.store))
            }
            Screen::Sales => views::render_sales(
                &self.config,
                &commands::list_available_books(&self.store),
                &commands::list_sales(&self.store),
            ),
            Screen::Loans => views::render_loans(
                &self.config,
                &commands::list_available_books(&self.store),
                &commands::list_active_loans(&self.store),
                &commands::list_loan_history(&self.store),
            ),
        }
    }

    /// Handles one input line.
    ///
    /// Errors become an `Error: ...` notice; the shell stays on the same
    /// screen and keeps running.
    pub fn handle(&mut self, line: &str) -> Outcome {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!(command = %command, "shell input");

        let result = match command.to_ascii_lowercase().as_str() {
            "" => Ok(self.render()),
            "inventory" | "i" => Ok(self.switch(Screen::Inventory)),
            "sales" | "s" => Ok(self.switch(Screen::Sales)),
            "loans" | "l" => Ok(self.switch(Screen::Loans)),
            "add" => self.add(rest),
            "sell" => self.sell(rest),
            "lend" => self.lend(rest),
            "return" => self.return_loan(rest),
            "export" => commands::export_json(&self.store),
            "help" | "?" => Ok(views::help()),
            "quit" | "exit" | "q" => return Outcome::quit(),
            other => Ok(format!(
                "Unknown command: {}. Type 'help' for commands.",
                other
            )),
        };

        match result {
            Ok(output) => Outcome::show(output),
            Err(err) => Outcome::show(views::render_error(&err)),
        }
    }

    fn switch(&mut self, screen: Screen) -> String {
        self.screen = screen;
        self.render()
    }

    fn add(&mut self, rest: &str) -> Result<String, ApiError> {
        let fields = split_fields(rest);
        let [title, author, price, quantity] = fields.as_slice() else {
            return Err(ApiError::validation("Usage: add <title> | <author> | <price> | <qty>"));
        };

        let book = commands::add_book(&self.store, title, author, price, quantity)?;
        self.screen = Screen::Inventory;
        Ok(format!("Book added: {}\n\n{}", book.title, self.render()))
    }

    fn sell(&mut self, rest: &str) -> Result<String, ApiError> {
        let mut args = rest.split_whitespace();
        let (Some(position), quantity, None) = (args.next(), args.next(), args.next()) else {
            return Err(ApiError::validation("Usage: sell <n> [qty]"));
        };

        let book = self.available_book(position)?;
        let sale = commands::sell_book(&self.store, &book.id, quantity.unwrap_or("1"))?;
        self.screen = Screen::Sales;
        Ok(format!(
            "{}\n\n{}",
            views::sale_confirmation(&self.config, &sale),
            self.render()
        ))
    }

    fn lend(&mut self, rest: &str) -> Result<String, ApiError> {
        let fields = split_fields(rest);
        let [position, name, phone] = fields.as_slice() else {
            return Err(ApiError::validation("Usage: lend <n> | <name> | <phone>"));
        };

        let book = self.available_book(position)?;
        let loan = commands::create_loan(&self.store, &book.id, name, phone)?;
        self.screen = Screen::Loans;
        Ok(format!(
            "Lent {} to {}.\n\n{}",
            loan.title,
            loan.borrower_name,
            self.render()
        ))
    }

    fn return_loan(&mut self, rest: &str) -> Result<String, ApiError> {
        if rest.is_empty() || rest.contains(char::is_whitespace) {
            return Err(ApiError::validation("Usage: return <n>"));
        }

        let loan = self.active_loan(rest)?;
        let returned = commands::return_loan(&self.store, &loan.id)?;
        self.screen = Screen::Loans;
        Ok(format!(
            "Returned {} from {}.\n\n{}",
            returned.title,
            returned.borrower_name,
            self.render()
        ))
    }

    fn available_book(&self, position: &str) -> Result<BookDto, ApiError> {
        let books = commands::list_available_books(&self.store);
        pick(books, position, "available book")
    }

    fn active_loan(&self, position: &str) -> Result<LoanDto, ApiError> {
        let loans = commands::list_active_loans(&self.store);
        pick(loans, position, "active loan")
    }
}

/// `a | b | c` → `["a", "b", "c"]`, each trimmed. Empty input gives no fields.
fn split_fields(rest: &str) -> Vec<&str> {
    if rest.is_empty() {
        return Vec::new();
    }
    rest.split('|').map(str::trim).collect()
}

fn pick<T>(items: Vec<T>, position: &str, what: &str) -> Result<T, ApiError> {
    let index = position
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| ApiError::validation(format!("Not a list number: {}", position)))?;

    items
        .into_iter()
        .nth(index)
        .ok_or_else(|| ApiError::validation(format!("No {} numbered {}", what, position)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{build_store, IdStrategy};

    fn seeded_shell() -> Shell {
        let config = ConfigState {
            id_strategy: IdStrategy::Sequential,
            ..ConfigState::default()
        };
        let store = StoreState::new(build_store(&config).unwrap());
        Shell::new(store, config)
    }

    fn empty_shell() -> Shell {
        let config = ConfigState {
            seed_starter_catalog: false,
            id_strategy: IdStrategy::Sequential,
            ..ConfigState::default()
        };
        let store = StoreState::new(build_store(&config).unwrap());
        Shell::new(store, config)
    }

    #[test]
    fn test_banner_shows_inventory() {
        let shell = seeded_shell();
        let banner = shell.banner();
        assert!(banner.starts_with("Welcome to Bookstall."));
        assert!(banner.contains("O Livro dos Espíritos"));
        assert_eq!(shell.screen(), Screen::Inventory);
    }

    #[test]
    fn test_switch_screens() {
        let mut shell = seeded_shell();

        let out = shell.handle("sales");
        assert_eq!(shell.screen(), Screen::Sales);
        assert!(out.output.contains("== Bookstall | Sales =="));

        shell.handle("l");
        assert_eq!(shell.screen(), Screen::Loans);
        shell.handle("INVENTORY");
        assert_eq!(shell.screen(), Screen::Inventory);
    }

    #[test]
    fn test_add_then_sell_with_confirmation() {
        let mut shell = empty_shell();

        let out = shell.handle("add X | Someone | 25.00 | 10");
        assert!(out.output.starts_with("Book added: X"));

        let out = shell.handle("sell 1 3");
        assert!(!out.quit);
        assert!(out.output.starts_with("Sale completed! Total: R$ 75.00"));
        assert!(out.output.contains("1. X | R$ 25.00 | 7 in stock"));
        assert_eq!(shell.screen(), Screen::Sales);
    }

    #[test]
    fn test_sell_defaults_to_one_copy() {
        let mut shell = seeded_shell();
        let out = shell.handle("sell 3");
        assert!(out.output.starts_with("Sale completed! Total: R$ 20.00"));
    }

    #[test]
    fn test_add_usage_and_validation_errors() {
        let mut shell = empty_shell();

        let out = shell.handle("add only a title");
        assert_eq!(
            out.output,
            "Error: Usage: add <title> | <author> | <price> | <qty>"
        );

        let out = shell.handle("add  | Someone | 10 | 1");
        assert_eq!(out.output, "Error: title is required");
        assert!(shell.handle("inventory").output.contains("(no books yet)"));
    }

    #[test]
    fn test_oversell_is_reported() {
        let mut shell = seeded_shell();
        let out = shell.handle("sell 3 40");
        assert_eq!(
            out.output,
            "Error: Insufficient stock for Nosso Lar: 15 available, 40 requested"
        );
    }

    #[test]
    fn test_positions_follow_available_list() {
        let mut shell = seeded_shell();
        // Sell out the second title; the third title moves up to #2.
        shell.handle("sell 2 8");
        let out = shell.handle("lend 2 | Alice | 555-1234");
        assert!(out.output.starts_with("Lent Nosso Lar to Alice."));

        let out = shell.handle("sell 3");
        assert_eq!(out.output, "Error: No available book numbered 3");
    }

    #[test]
    fn test_lend_and_return_by_position() {
        let mut shell = seeded_shell();
        shell.handle("lend 1 | Alice | 555-1234");
        shell.handle("lend 1 | Bob | 555-0000");

        let out = shell.handle("return 2");
        assert!(out.output.starts_with("Returned O Evangelho Segundo o Espiritismo from Bob."));
        assert!(out.output.contains("1. O Evangelho Segundo o Espiritismo -> Alice"));

        let out = shell.handle("return 2");
        assert_eq!(out.output, "Error: No active loan numbered 2");

        let out = shell.handle("return zero");
        assert_eq!(out.output, "Error: Not a list number: zero");
    }

    #[test]
    fn test_lend_requires_all_fields() {
        let mut shell = seeded_shell();
        let out = shell.handle("lend 1 | Alice");
        assert_eq!(out.output, "Error: Usage: lend <n> | <name> | <phone>");

        let out = shell.handle("lend 1 | Alice | ");
        assert_eq!(out.output, "Error: borrower phone is required");
    }

    #[test]
    fn test_export_outputs_json() {
        let mut shell = seeded_shell();
        let out = shell.handle("export");
        let json: serde_json::Value = serde_json::from_str(&out.output).unwrap();
        assert_eq!(json["books"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_help_unknown_and_quit() {
        let mut shell = seeded_shell();
        assert!(shell.handle("help").output.contains("return <n>"));
        assert_eq!(
            shell.handle("frobnicate").output,
            "Unknown command: frobnicate. Type 'help' for commands."
        );

        let out = shell.handle("quit");
        assert!(out.quit);
    }
}
