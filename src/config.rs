//! Configuration for the account seeder
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::types::AccountError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load account fixtures into a store
#[derive(Parser, Debug, Clone)]
#[command(name = "account-seed")]
#[command(about = "Seed accounts from a JSON fixture file")]
pub struct Args {
    /// JSON file holding an array of account fixtures
    #[arg(long, env = "ACCOUNT_FIXTURES", default_value = "fixtures/accounts.json")]
    pub fixtures: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format (pretty, json)
    #[arg(long, env = "LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,

    /// Abort on the first rejected fixture instead of skipping it
    #[arg(long, env = "FAIL_FAST", default_value = "false")]
    pub fail_fast: bool,
}

impl Args {
    /// Whether logs should be emitted as JSON lines
    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), AccountError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(AccountError::Config(format!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        if !matches!(self.log_format.to_lowercase().as_str(), "pretty" | "json") {
            return Err(AccountError::Config(format!(
                "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                self.log_format
            )));
        }

        if !self.fixtures.is_file() {
            return Err(AccountError::Config(format!(
                "Fixture file {} does not exist",
                self.fixtures.display()
            )));
        }

        Ok(())
    }
}
