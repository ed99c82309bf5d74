//! Parse command implementation.

use card_search::parse_search_query;

use super::{CommandContext, Result};
use crate::output::{format_terms_json, format_terms_table};

/// Executes the parse command, printing the combinator and terms.
pub fn execute(ctx: &CommandContext, expression: &str) -> Result<()> {
    let query = parse_search_query(expression);

    if ctx.verbose {
        eprintln!("Parsed {} term(s)", query.terms.len());
    }

    if ctx.json_output {
        println!("{}", format_terms_json(&query)?);
    } else if !ctx.quiet {
        print!("{}", format_terms_table(&query, ctx.use_colors));
    }

    Ok(())
}
