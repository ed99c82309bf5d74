//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the cardq CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

/// cardq - compile and inspect card search expressions
#[derive(Parser, Debug)]
#[command(name = "cardq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// A search expression given as one or more words.
///
/// Words are joined with single spaces. Put `--` before an expression that
/// starts with a negated term, e.g. `cardq compile -- -is:unique`.
#[derive(Args, Debug)]
pub struct ExpressionArgs {
    /// Search expression (e.g., name:Doji clan:Crane force>3)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub expression: Vec<String>,
}

impl ExpressionArgs {
    /// Returns the words joined into a single expression.
    pub fn joined(&self) -> String {
        self.expression.join(" ")
    }
}

/// Shown under the help of every command that takes an expression.
const EXPRESSION_HELP: &str = "\
Examples:
  cardq compile name:Doji clan:Crane force>3
  cardq compile -- -is:unique \"Doji Hoturi\"

A first word starting with '-' is read as an option (-vanguard is -v);
put -- before the expression to keep it.";

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile an expression into text and constraints
    #[command(alias = "c", after_help = EXPRESSION_HELP)]
    Compile {
        #[command(flatten)]
        expr: ExpressionArgs,

        /// Merge repeated numeric bounds by keeping the tightest range
        #[arg(long)]
        tightest: bool,
    },

    /// Show the parsed terms of an expression
    #[command(alias = "p", after_help = EXPRESSION_HELP)]
    Parse {
        #[command(flatten)]
        expr: ExpressionArgs,
    },

    /// Show how an expression is split into tokens
    #[command(after_help = EXPRESSION_HELP)]
    Tokens {
        #[command(flatten)]
        expr: ExpressionArgs,
    },

    /// Report terms that are accepted but ignored
    #[command(after_help = EXPRESSION_HELP)]
    Check {
        #[command(flatten)]
        expr: ExpressionArgs,
    },

    /// List field aliases and numeric fields
    Fields,

    /// Print the search syntax guide
    Syntax,

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
