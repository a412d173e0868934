/// Program and expression entry points.
///
/// Defines `ParseResult`, parses whole programs, and starts expression
/// parsing at the lowest precedence level.
pub mod core;

/// Unary, postfix and primary expressions.
///
/// Handles negation, logical NOT, pre/post increment and decrement, literals,
/// identifiers, parenthesized expressions and library calls.
pub mod unary;

/// Binary operator precedence levels, from `||` down to `^`.
pub mod binary;

/// Braced and single-statement blocks.
pub mod block;

/// Shared helpers: expected tokens, identifiers and comma-separated lists.
pub mod utils;

/// Statements: assignment, `if`, `while`, `for`, `print` and expression
/// statements.
pub mod statement;
