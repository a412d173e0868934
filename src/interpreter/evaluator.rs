/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, relational and equality
/// comparison, and the logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, logical NOT, and pre/post increment and
/// decrement of variables.
pub mod unary;

/// Core evaluation logic and evaluator state.
///
/// Contains the `Evaluator`, the expression and statement dispatchers, and the
/// `EvalResult` alias used throughout the interpreter.
pub mod core;

/// Evaluation of statements that direct control: assignment, blocks, `if`,
/// `while` and `for`.
pub mod control_flow;

/// Library calls and console effects.
///
/// Handles the built-in math functions, `read()` and the `print` statement.
pub mod function;
