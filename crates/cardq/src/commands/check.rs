//! Check command implementation.
//!
//! Reports terms that parse but have no effect on the compiled filter.
//! Findings are warnings: the command succeeds whatever it finds.

use card_search::{diagnose, parse_search_query};

use super::{CommandContext, Result};
use crate::output::{format_diagnostics_json, format_diagnostics_table};

/// Executes the check command.
pub fn execute(ctx: &CommandContext, expression: &str) -> Result<()> {
    let diagnostics = diagnose(&parse_search_query(expression));

    if ctx.verbose {
        eprintln!("{} diagnostic(s)", diagnostics.len());
    }

    if ctx.json_output {
        println!("{}", format_diagnostics_json(expression, &diagnostics)?);
    } else if !ctx.quiet {
        print!("{}", format_diagnostics_table(&diagnostics, ctx.use_colors));
    }

    Ok(())
}
