//! # mulang
//!
//! mulang is a tree-walking interpreter for Mu, a small dynamically typed
//! scripting language with numbers, strings, booleans and `nil`, C-style
//! control flow, and a handful of math library functions.

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

use std::io;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        io::{InputSource, LineWriter, OutputSink, TokenReader},
        lexer::tokenize,
        parser::core::parse_tokens,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. Every error carries the source line it was raised on, and
/// its `Display` form is the message shown to the user.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with `std::error::Error` for boxing at the top level.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the environment and the I/O capabilities.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Lexes and parses `source` into a [`Program`] without running it.
///
/// # Errors
/// Returns the first lexical or syntax error encountered.
///
/// # Examples
/// ```
/// use mulang::parse_program;
///
/// let program = parse_program("if x > 1 { print(x); } else print(0);").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// assert!(parse_program("x = ;").is_err());
/// ```
pub fn parse_program(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_tokens(&tokens)
}

/// Parses and runs `source` against the given output sink and input source.
///
/// On success the final environment is returned so callers can inspect the
/// variables the program left behind.
///
/// # Errors
/// Returns the parse error, or the first runtime error raised while running.
///
/// # Examples
/// ```
/// use mulang::{interpreter::io::NoInput, run_with};
///
/// let mut output: Vec<String> = Vec::new();
/// let environment = run_with("x = 3; x++; print(x, \"done\");", &mut output, &mut NoInput).unwrap();
///
/// assert_eq!(output, ["4", "done"]);
/// assert_eq!(environment.len(), 1);
/// ```
pub fn run_with(source: &str,
                output: &mut dyn OutputSink,
                input: &mut dyn InputSource)
                -> Result<Environment, Box<dyn std::error::Error>> {
    let program = parse_program(source)?;

    let mut evaluator = Evaluator::new(output, input);
    evaluator.run(&program)?;

    Ok(evaluator.into_environment())
}

/// Runs `source` with `print` writing to stdout and `read()` reading from
/// stdin.
///
/// This function parses and executes all statements in the provided source
/// string. If execution succeeds, it returns `Ok(())`; otherwise, it returns
/// an error with details about the failure.
///
/// # Errors
/// Returns an error if parsing or evaluation fails, or if any runtime error
/// occurs.
///
/// # Examples
/// ```
/// use mulang::get_result;
///
/// // Simple program: the result will be printed and no error should occur.
/// let source = "result = 2 + 2; print(result);";
/// let res = get_result(source);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "y = x + 1;"; // 'x' is not defined
/// let res = get_result(source);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut output = LineWriter::new(io::stdout().lock());
    let mut input = TokenReader::new(io::stdin().lock());

    run_with(source, &mut output, &mut input).map(|_| ())
}
