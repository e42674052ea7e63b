//! # ember
//!
//! ember is a lexer, parser, static analyzer and tree-walking interpreter for
//! a small imperative, statically typed scripting language.
//! Programs consist of global fields and methods; running a program calls its
//! `main()` method and turns the returned integer into an exit status.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::error::Error;

use crate::interpreter::{
    environment::registry::Registry,
    evaluator::core::{EvalResult, Interpreter, exit_code},
};
pub use crate::interpreter::{analyzer::analyze, lexer::lex, parser::parse};

/// Defines the structure of parsed code.
///
/// This module declares the `Source`, `Method`, `Stmt` and `Expr` types that
/// represent the syntactic structure of a program as a tree. The tree is
/// built by the parser, checked by the analyzer and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches node ids and source offsets to the nodes that need them.
/// - Renders literals back into source form.
pub mod ast;
/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// analyzing or running a program. Lexing and parsing errors carry the
/// character offset of the problem; analysis and runtime errors carry
/// human-readable details.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Implements `Display` and `std::error::Error` for each of them.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, analysis, evaluation and value
/// representations to provide a complete runtime for source code. It exposes
/// the public API for checking and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer and evaluator.
/// - Provides the registry through which hosts add functions and types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and formatting.
///
/// # Responsibilities
/// - Narrow arbitrary precision numbers into machine types without silent
///   data loss.
/// - Render decimals in plain notation.
pub mod util;

/// Which stages [`get_result`] runs after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Analyze, then run.
    #[default]
    Checked,
    /// Analyze only.
    CheckOnly,
    /// Run without analyzing first. Violations that analysis would have
    /// caught surface as runtime errors instead.
    Unchecked,
}

/// Runs a parsed program and returns its exit status.
///
/// # Errors
/// Any `RuntimeError` raised by the program, `ExpectedInteger` if `main` did
/// not return an integer, or `ExitCodeOutOfRange` if it does not fit an
/// `i32`.
pub fn run(source: &ast::Source, registry: &Registry) -> EvalResult<i32> {
    let value = Interpreter::new(registry).run(source)?;
    exit_code(&value)
}

/// Processes source text through the stages selected by `mode`.
///
/// Returns the exit status of the program, or `None` in
/// [`Mode::CheckOnly`].
///
/// # Errors
/// The first error of any stage, boxed. Callers can recover the concrete
/// error with `downcast_ref::<LexError>()` and the like.
///
/// # Examples
/// ```
/// use ember::{Mode, get_result, interpreter::environment::registry::Registry};
///
/// let source = "DEF main(): Integer DO RETURN 1 + 1; END";
/// let registry = Registry::standard();
///
/// assert_eq!(get_result(source, &registry, Mode::Checked).unwrap(), Some(2));
/// assert_eq!(get_result(source, &registry, Mode::CheckOnly).unwrap(), None);
///
/// // Rejected by analysis, but runs fine without it.
/// let source = "DEF main(): Integer DO 1 + 1; RETURN 0; END";
/// assert!(get_result(source, &registry, Mode::Checked).is_err());
/// assert_eq!(get_result(source, &registry, Mode::Unchecked).unwrap(), Some(0));
/// ```
pub fn get_result(source: &str,
                  registry: &Registry,
                  mode: Mode)
                  -> Result<Option<i32>, Box<dyn Error>> {
    let tokens = lex(source)?;
    let source = parse(tokens)?;

    if mode != Mode::Unchecked {
        analyze(&source, registry)?;
    }
    if mode == Mode::CheckOnly {
        return Ok(None);
    }

    Ok(Some(run(&source, registry)?))
}

/// Lexes, parses, analyzes and runs `source` with the standard registry, and
/// returns the program's exit status.
///
/// # Errors
/// The first error of any stage, boxed.
///
/// # Examples
/// ```
/// use ember::{error::TypeError, run_source};
///
/// let source = "LET x: Integer = 1; DEF main(): Integer DO RETURN x + 2; END";
/// assert_eq!(run_source(source).unwrap(), 3);
///
/// let error = run_source("DEF main() DO END").unwrap_err();
/// assert!(error.downcast_ref::<TypeError>().is_some());
/// ```
pub fn run_source(source: &str) -> Result<i32, Box<dyn Error>> {
    let registry = Registry::standard();
    let tokens = lex(source)?;
    let source = parse(tokens)?;
    analyze(&source, &registry)?;

    Ok(run(&source, &registry)?)
}
