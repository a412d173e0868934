use crate::{ast::LiteralValue, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Tolerance used when comparing two numbers for equality.
///
/// Two numbers `a` and `b` are equal when `|a - b| < EPSILON`.
pub const EPSILON: f64 = 1e-11;

/// Represents a runtime value in the interpreter.
///
/// The first four variants are the values a program can observe. `Void`,
/// `Break` and `Continue` are markers returned from statement evaluation and
/// never appear in the environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A string of text.
    String(String),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison and logical operators, consumed as conditions of
    /// `if`, `while` and `for`.
    Boolean(bool),
    /// The absence of a value.
    Nil,
    /// Result of a statement that has no usable value.
    Void,
    /// Loop exit marker. Nothing in the language produces it yet.
    Break,
    /// Loop continuation marker. Nothing in the language produces it yet.
    Continue,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is not a
    /// number.
    ///
    /// No other kind converts: strings are not parsed and booleans are not
    /// mapped to `0`/`1`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeMismatch)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use mulang::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(10.0).as_number(1).unwrap(), 10.0);
    /// assert!(Value::from("10").as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.mismatch("number", line)),
        }
    }

    /// Converts the value to `bool`, or returns an error if it is not a
    /// boolean.
    ///
    /// Used for conditions and logical operators. Numbers, strings and `nil`
    /// are never truthy or falsy on their own.
    pub fn as_boolean(&self, line: usize) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch("boolean", line)),
        }
    }

    /// Borrows the text of a string value, or returns an error for any other
    /// kind.
    ///
    /// For the rendering used by concatenation and `print`, use the `Display`
    /// implementation instead.
    pub fn as_string(&self, line: usize) -> EvalResult<&str> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(self.mismatch("string", line)),
        }
    }

    /// Returns `true` if the value is [`Value::Number`].
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Value::Boolean`].
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Value::String`].
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// The name of this value's kind, as used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Nil => "nil",
            Self::Void => "void",
            Self::Break => "break",
            Self::Continue => "continue",
        }
    }

    /// Language-level equality.
    ///
    /// Two numbers are equal when they differ by less than [`EPSILON`]. Other
    /// values of the same kind compare exactly, and values of different kinds
    /// are never equal.
    ///
    /// # Example
    /// ```
    /// use mulang::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.1 + 0.2).equals(&Value::Number(0.3)));
    /// assert!(Value::Nil.equals(&Value::Nil));
    /// assert!(!Value::Number(1.0).equals(&Value::from("1")));
    /// ```
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => (a - b).abs() < EPSILON,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Nil, Self::Nil)
            | (Self::Void, Self::Void)
            | (Self::Break, Self::Break)
            | (Self::Continue, Self::Continue) => true,
            _ => false,
        }
    }

    fn mismatch(&self, expected: &'static str, line: usize) -> RuntimeError {
        RuntimeError::TypeMismatch { expected,
                                     found: self.kind_name(),
                                     line }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
            Self::Void => Ok(()),
            Self::Break => write!(f, "break"),
            Self::Continue => write!(f, "continue"),
        }
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::String(s) => s.as_str().into(),
            LiteralValue::Boolean(b) => (*b).into(),
            LiteralValue::Nil => Self::Nil,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coercions_only_accept_their_own_kind() {
        assert_eq!(Value::Number(2.5).as_number(1).unwrap(), 2.5);
        assert!(Value::Boolean(true).as_boolean(1).unwrap());
        assert_eq!(Value::from("hi").as_string(1).unwrap(), "hi");

        assert!(matches!(Value::Boolean(true).as_number(3),
                         Err(RuntimeError::TypeMismatch { expected: "number",
                                                          found: "boolean",
                                                          line: 3 })));
        assert!(matches!(Value::Number(1.0).as_boolean(4),
                         Err(RuntimeError::TypeMismatch { expected: "boolean",
                                                          found: "number",
                                                          line: 4 })));
        assert!(Value::Nil.as_number(1).is_err());
        assert!(Value::Nil.as_boolean(1).is_err());
        assert!(Value::Nil.as_string(1).is_err());
        assert!(Value::Number(1.0).as_string(1).is_err());
    }

    #[test]
    fn kind_tests() {
        assert!(Value::Number(0.0).is_number());
        assert!(!Value::from("0").is_number());
        assert!(Value::Boolean(false).is_boolean());
        assert!(Value::from("").is_string());
        assert!(!Value::Nil.is_string());
    }

    #[test]
    fn numbers_compare_with_tolerance() {
        assert!(Value::Number(1.0).equals(&Value::Number(1.0 + 1e-12)));
        assert!(!Value::Number(1.0).equals(&Value::Number(1.0 + 1e-10)));
        assert!(!Value::Number(f64::NAN).equals(&Value::Number(f64::NAN)));
    }

    #[test]
    fn mixed_kinds_are_never_equal() {
        assert!(!Value::Nil.equals(&Value::Boolean(false)));
        assert!(!Value::from("true").equals(&Value::Boolean(true)));
        assert!(Value::from("a").equals(&Value::from("a")));
        assert!(!Value::from("a").equals(&Value::from("A")));
    }

    #[test]
    fn default_textual_form() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(-2.5).to_string(), "-2.5");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::from("say \"hi\"").to_string(), "say \"hi\"");
        assert_eq!(Value::Void.to_string(), "");
    }
}
