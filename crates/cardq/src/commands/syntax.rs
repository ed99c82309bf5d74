//! Syntax command implementation.

use card_search::SYNTAX_HELP;

use super::{CommandContext, Result};

/// Executes the syntax command, printing the search syntax guide.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        let output = serde_json::json!({ "syntax": SYNTAX_HELP });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        print!("{SYNTAX_HELP}");
    }
    Ok(())
}
