//! Fields command implementation.

use super::{CommandContext, Result};
use crate::output::{format_fields_json, format_fields_table};

/// Executes the fields command, listing aliases and numeric fields.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    if ctx.json_output {
        println!("{}", format_fields_json()?);
    } else if !ctx.quiet {
        print!("{}", format_fields_table(ctx.use_colors));
    }
    Ok(())
}
