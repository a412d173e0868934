#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// Every variant aborts the whole evaluation. Division and modulo by zero are
/// deliberately absent: they produce infinity or NaN instead.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value could not be coerced to the kind an operator required.
    TypeMismatch {
        /// The kind that was required, e.g. `number`.
        expected: &'static str,
        /// The kind that was actually found.
        found:    &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An operator reached a handler that does not implement it.
    UnknownOperator {
        /// The textual operator.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A library function that needs an argument was called without one.
    MissingArgument {
        /// The name of the function.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `read()` received a token that is not a number.
    InvalidInput {
        /// The offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `read()` found the input source exhausted.
    InputExhausted {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The output sink or input source failed.
    Io {
        /// Details reported by the operating system.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: No such variable '{name}'.")
            },
            Self::TypeMismatch { expected,
                                 found,
                                 line, } => write!(f,
                                                   "Error on line {line}: Type mismatch: expected {expected}, found {found}."),
            Self::UnknownOperator { operator, line } => {
                write!(f, "Error on line {line}: Unknown operator '{operator}'.")
            },
            Self::MissingArgument { function, line } => write!(f,
                                                               "Error on line {line}: Function '{function}' requires an argument."),
            Self::InvalidInput { token, line } => write!(f,
                                                         "Error on line {line}: Expected a number on input, found '{token}'."),
            Self::InputExhausted { line } => {
                write!(f, "Error on line {line}: Input ended while reading a number.")
            },
            Self::Io { details, line } => write!(f, "Error on line {line}: I/O failure: {details}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
