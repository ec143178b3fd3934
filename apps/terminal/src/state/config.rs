//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSTALL_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use bookstall_core::Money;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the shell banner
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// strftime pattern for sale and loan dates
    pub date_format: String,

    /// Stock the starter catalog on startup
    pub seed_starter_catalog: bool,

    /// How record ids are generated
    pub id_strategy: IdStrategy,
}

/// Identifier generation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4
    #[default]
    Uuid,

    /// Readable `rec-1`, `rec-2`, ... shared by books, sales and loans
    Sequential,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Bookstall"
    /// - Currency: R$
    /// - Dates: dd/mm/yyyy
    /// - Starter catalog: seeded
    /// - Ids: UUID v4
    fn default() -> Self {
        ConfigState {
            store_name: "Bookstall".to_string(),
            currency_symbol: "R$".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            seed_starter_catalog: true,
            id_strategy: IdStrategy::Uuid,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTALL_STORE_NAME`: Override store name
    /// - `BOOKSTALL_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BOOKSTALL_DATE_FORMAT`: strftime pattern, e.g. `%Y-%m-%d`
    /// - `BOOKSTALL_SEED`: `true` / `false`
    /// - `BOOKSTALL_ID_STRATEGY`: `uuid` / `sequential`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    ///
    /// Invalid values are logged and the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("BOOKSTALL_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("BOOKSTALL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(format) = lookup("BOOKSTALL_DATE_FORMAT") {
            if is_valid_date_format(&format) {
                config.date_format = format;
            } else {
                warn!(format = %format, "Ignoring invalid BOOKSTALL_DATE_FORMAT");
            }
        }

        if let Some(seed) = lookup("BOOKSTALL_SEED") {
            match seed.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.seed_starter_catalog = true,
                "0" | "false" | "no" => config.seed_starter_catalog = false,
                other => warn!(value = %other, "Ignoring invalid BOOKSTALL_SEED"),
            }
        }

        if let Some(strategy) = lookup("BOOKSTALL_ID_STRATEGY") {
            match strategy.trim().to_ascii_lowercase().as_str() {
                "uuid" => config.id_strategy = IdStrategy::Uuid,
                "sequential" => config.id_strategy = IdStrategy::Sequential,
                other => warn!(value = %other, "Ignoring invalid BOOKSTALL_ID_STRATEGY"),
            }
        }

        config
    }

    /// Formats an amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use bookstall_core::Money;
    /// use bookstall_terminal::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(7500)), "R$ 75.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", self.currency_symbol, amount)
    }

    pub fn format_date(&self, at: DateTime<Utc>) -> String {
        at.format(&self.date_format).to_string()
    }
}

fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}
