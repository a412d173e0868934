/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, manages variable state, and
/// drives `print` and `read()` through the I/O capabilities.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, library calls and control flow.
/// - Reports runtime errors such as undefined variables or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with their source line.
/// - Skips whitespace and comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`Program`](crate::ast::Program) that represents the syntactic structure
/// of the source.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Checks library call arity and assignment targets.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the `Value` enum: numbers, strings, booleans, `nil`,
/// and the statement markers `Void`, `Break` and `Continue`. It also provides
/// the typed accessors that raise type mismatches and the tolerant equality
/// used by `==` and `!=`.
pub mod value;
/// The flat variable store shared by a whole program run.
pub mod environment;
/// Output and input capabilities for `print` and `read()`.
pub mod io;
