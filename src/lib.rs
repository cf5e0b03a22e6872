//! Ferrow: a standards-conformant ECMAScript and JSX parser
//!
//! Ferrow turns JavaScript source text into an ESTree-shaped syntax tree.
//! It parses both goal symbols (script and module), optionally accepts JSX,
//! and reports every lexical, grammatical and static-semantics violation as
//! a single [`Error`]. No partial tree is ever returned.
//!
//! # Quick Start
//!
//! ```
//! use ferrow::{parse_script, ParseOptions};
//!
//! fn main() -> ferrow::Result<()> {
//!     let program = parse_script("x = 0", ParseOptions::default())?;
//!     let tree = ferrow::to_estree(&program);
//!     assert_eq!(tree["body"][0]["expression"]["operator"], "=");
//!     Ok(())
//! }
//! ```
//!
//! # Module Overview
//!
//! The pipeline flows: Source → [`lexer`] → [`parser`] → [`ast`] → ESTree JSON
//!
//! | Module | Role |
//! |--------|------|
//! | [`chars`] | Identifier, whitespace and line terminator classification |
//! | [`lexer`] | Pull-based scanner with regex, template and JSX rescans |
//! | [`parser`] | Recursive descent parser, cover grammars and early errors |
//! | [`ast`] | ESTree node types and their JSON serialization |
//! | [`options`] | [`ParseOptions`] |
//! | [`error`] | [`Error`] and its classification |
#![allow(clippy::enum_variant_names)]

pub mod ast;
pub mod chars;
pub mod error;
pub mod lexer;
pub mod options;
pub mod parser;

pub use ast::{to_estree, Program, SourceType};
pub use error::{Error, ErrorKind, Result};
pub use options::ParseOptions;

/// Ferrow version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse `source` with the Script goal symbol
pub fn parse_script(source: &str, options: ParseOptions) -> Result<Program> {
    parse_goal(source, options, SourceType::Script)
}

/// Parse `source` with the Module goal symbol: strict code, with `import`,
/// `export` and top-level `await`
pub fn parse_module(source: &str, options: ParseOptions) -> Result<Program> {
    parse_goal(source, options, SourceType::Module)
}

fn parse_goal(source: &str, options: ParseOptions, source_type: SourceType) -> Result<Program> {
    tracing::debug!(goal = ?source_type, len = source.len(), "parse start");
    let result = parser::parse(source, options, source_type);
    match &result {
        Ok(program) => tracing::debug!(goal = ?source_type, statements = program.body.len(), "parse done"),
        Err(error) => tracing::debug!(goal = ?source_type, kind = ?error.kind(), "parse failed"),
    }
    result
}
