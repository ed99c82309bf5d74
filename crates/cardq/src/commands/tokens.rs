//! Tokens command implementation.

use card_search::Lexer;

use super::{CommandContext, Result};
use crate::output::{format_tokens_json, format_tokens_table};

/// Executes the tokens command, printing each token with its byte offset.
pub fn execute(ctx: &CommandContext, expression: &str) -> Result<()> {
    let tokens = Lexer::new(expression).tokenize();

    if ctx.json_output {
        println!("{}", format_tokens_json(&tokens)?);
    } else if !ctx.quiet {
        print!("{}", format_tokens_table(&tokens, ctx.use_colors));
    }

    Ok(())
}
