/// Operator routing.
pub mod core;

/// Numeric arithmetic and the `+` concatenation fallback.
pub mod arithmetic;

/// Relational operators and tolerant equality.
pub mod comparison;

/// Non-short-circuiting `&&` and `||`.
pub mod logic;
