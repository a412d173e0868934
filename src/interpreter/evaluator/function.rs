/// Built-in math functions.
///
/// Maps each numeric library function to the `f64` routine implementing it.
pub mod builtin;
/// Library call dispatch.
pub mod core;
/// The `print` statement.
///
/// Renders values for the console and writes them to the output sink.
pub mod print;
/// The `read()` library call.
///
/// Pulls one numeric token from the input source.
pub mod read;
