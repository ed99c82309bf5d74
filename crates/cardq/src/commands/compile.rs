//! Compile command implementation.
//!
//! Runs the full pipeline and prints the resulting filter.

use card_search::{diagnose, parse_search_query, BoundPolicy, FilterCompiler};

use super::{CommandContext, Result};
use crate::output::{format_filter_json, format_filter_table};

/// Options for the compile command.
pub struct CompileOptions {
    /// The search expression.
    pub expression: String,
    /// Use the tightest bound policy regardless of config.
    pub tightest: bool,
}

/// Executes the compile command.
pub fn execute(ctx: &CommandContext, opts: &CompileOptions) -> Result<()> {
    let bounds = if opts.tightest {
        BoundPolicy::Tightest
    } else {
        ctx.bounds
    };

    if ctx.verbose {
        eprintln!("Compiling {:?} ({} bounds)", opts.expression, bounds);
    }

    let query = parse_search_query(&opts.expression);
    let filter = FilterCompiler::new(card_search::CompileOptions { bounds }).compile(&query);

    if ctx.verbose {
        for diagnostic in diagnose(&query) {
            eprintln!("note: {diagnostic}");
        }
    }

    if ctx.json_output {
        println!("{}", format_filter_json(&filter)?);
    } else if !ctx.quiet {
        print!("{}", format_filter_table(&filter, ctx.use_colors));
    }

    Ok(())
}
