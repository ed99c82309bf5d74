//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands split into two groups: those that manage the CLI itself and must
//! work even when the config file is broken, and search commands that honor
//! config preferences.

use crate::cli::{Cli, Commands, ConfigCommands, ExpressionArgs, Shell};
use crate::commands::{self, CommandContext, CommandError, Result};

/// Commands that run without reading the config file's preferences.
pub enum SetupDispatch<'a> {
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> SetupDispatch<'a> {
    /// Try to create a setup dispatch from the CLI command.
    /// Returns None for search commands.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }

    /// Execute the command.
    pub fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("cardq - card search expression compiler");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that work on a search expression or the search reference.
pub enum SearchDispatch<'a> {
    Compile {
        expr: &'a ExpressionArgs,
        tightest: bool,
    },
    Parse(&'a ExpressionArgs),
    Tokens(&'a ExpressionArgs),
    Check(&'a ExpressionArgs),
    Fields,
    Syntax,
}

impl<'a> SearchDispatch<'a> {
    /// Create a search dispatch from the CLI command.
    /// Returns None for setup commands.
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Compile { expr, tightest }) => Some(Self::Compile {
                expr,
                tightest: *tightest,
            }),
            Some(Commands::Parse { expr }) => Some(Self::Parse(expr)),
            Some(Commands::Tokens { expr }) => Some(Self::Tokens(expr)),
            Some(Commands::Check { expr }) => Some(Self::Check(expr)),
            Some(Commands::Fields) => Some(Self::Fields),
            Some(Commands::Syntax) => Some(Self::Syntax),
            _ => None,
        }
    }

    /// Execute the command.
    pub fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Compile { expr, tightest } => {
                let opts = commands::compile::CompileOptions {
                    expression: expr.joined(),
                    tightest: *tightest,
                };
                commands::compile::execute(ctx, &opts)
            }
            Self::Parse(expr) => commands::parse::execute(ctx, &expr.joined()),
            Self::Tokens(expr) => commands::tokens::execute(ctx, &expr.joined()),
            Self::Check(expr) => commands::check::execute(ctx, &expr.joined()),
            Self::Fields => commands::fields::execute(ctx),
            Self::Syntax => commands::syntax::execute(ctx),
        }
    }
}
