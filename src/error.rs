/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens and calls to
/// functions the language does not provide.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unbound
/// variables, type mismatches, and failures of the input and output devices.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
