//! Command implementations for the cardq CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod check;
pub mod compile;
pub mod completions;
pub mod config;
pub mod fields;
pub mod parse;
pub mod syntax;
pub mod tokens;

use std::env;

use card_search::{BoundPolicy, SearchError};

use crate::cli::Cli;
use self::config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Search setting error.
    #[error("search error: {0}")]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
    /// How repeated numeric bounds are merged.
    pub bounds: BoundPolicy,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments alone.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && env::var_os("NO_COLOR").is_none(),
            quiet: cli.quiet,
            verbose: cli.verbose,
            bounds: BoundPolicy::default(),
        }
    }

    /// Applies config file preferences. Command-line flags take priority.
    pub fn with_config(mut self, config: &Config) -> Result<Self> {
        if config.output.json == Some(true) {
            self.json_output = true;
        }
        if config.output.color == Some(false) {
            self.use_colors = false;
        }
        if let Some(bounds) = &config.search.numeric_bounds {
            self.bounds = bounds.parse()?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn ctx(args: &[&str]) -> CommandContext {
        CommandContext::from_cli(&Cli::parse_from(args))
    }

    #[test]
    fn test_context_defaults() {
        let ctx = ctx(&["cardq", "fields"]);
        assert!(!ctx.json_output);
        assert!(!ctx.quiet);
        assert!(!ctx.verbose);
        assert_eq!(ctx.bounds, BoundPolicy::LastWins);
    }

    #[test]
    fn test_no_color_flag_disables_colors() {
        assert!(!ctx(&["cardq", "--no-color", "fields"]).use_colors);
    }

    #[test]
    fn test_config_enables_json_and_tightest() {
        let config: Config = toml::from_str(
            r#"
[output]
json = true
color = false

[search]
numeric_bounds = "tightest"
"#,
        )
        .unwrap();

        let ctx = ctx(&["cardq", "fields"]).with_config(&config).unwrap();
        assert!(ctx.json_output);
        assert!(!ctx.use_colors);
        assert_eq!(ctx.bounds, BoundPolicy::Tightest);
    }

    #[test]
    fn test_config_json_false_keeps_flag() {
        let config: Config = toml::from_str("[output]\njson = false\n").unwrap();
        let ctx = ctx(&["cardq", "--json", "fields"])
            .with_config(&config)
            .unwrap();
        assert!(ctx.json_output);
    }

    #[test]
    fn test_invalid_bound_policy_is_search_error() {
        let config: Config = toml::from_str("[search]\nnumeric_bounds = \"loosest\"\n").unwrap();
        let result = ctx(&["cardq", "fields"]).with_config(&config);
        assert!(matches!(result, Err(CommandError::Search(_))));
    }
}
