//! Output formatting utilities for the cardq CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by what is being shown:
//!
//! - [`filter`] - Compiled filters (compile)
//! - [`terms`] - Parsed terms and raw tokens (parse, tokens)
//! - [`diagnostics`] - Ignored-term reports (check)
//! - [`fields`] - Field alias reference (fields)
//! - [`helpers`] - Common formatting utilities (ranges, constraint values)

mod diagnostics;
mod fields;
mod filter;
pub mod helpers;
mod terms;

pub use diagnostics::{format_diagnostics_json, format_diagnostics_table};
pub use fields::{format_fields_json, format_fields_table};
pub use filter::{format_filter_json, format_filter_table};
pub use terms::{format_terms_json, format_terms_table, format_tokens_json, format_tokens_table};
