/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant values that can appear directly in
/// source code: numbers, strings, booleans and `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal such as `42` or `.5`.
    Number(f64),
    /// A double-quoted string literal with `""` already unescaped.
    String(String),
    /// A boolean literal value: `true` or `false`.
    Boolean(bool),
    /// The `nil` literal.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are evaluated bottom-up and always produce a value. Every
/// variant records the source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`-x`, `!x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Prefix increment or decrement (`++x`, `--x`), yielding the new value.
    PreIncDec {
        /// The variable being updated.
        name:  String,
        /// `+1.0` for `++`, `-1.0` for `--`.
        delta: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Postfix increment or decrement (`x++`, `x--`), yielding the old value.
    PostIncDec {
        /// The variable being updated.
        name:  String,
        /// `+1.0` for `++`, `-1.0` for `--`.
        delta: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Built-in library call (e.g. `sqrt(x)` or `read()`).
    LibCall {
        /// The library function being called.
        function: LibFunction,
        /// The argument, if one was written.
        argument: Option<Box<Self>>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A parenthesized expression.
    Paren {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use mulang::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::PreIncDec { line, .. }
            | Self::PostIncDec { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::LibCall { line, .. }
            | Self::Paren { line, .. } => *line,
        }
    }
}

/// A variable assignment binding a name to an expression.
///
/// Kept as its own struct because `for` headers require an assignment in the
/// init position.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// The name of the variable.
    pub name:  String,
    /// The value which is being assigned.
    pub value: Expr,
    /// Line number in the source code.
    pub line:  usize,
}

/// An ordered sequence of statements, either the body of a control statement
/// or a braced group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// One `(condition, block)` arm of an `if` / `else if` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionBlock {
    /// The guarding condition.
    pub condition: Expr,
    /// The block executed when the condition is the first truthy one.
    pub block:     Block,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `x = expr;`
    Assignment(Assignment),
    /// `if c { .. } else if c { .. } else { .. }`
    If {
        /// The `if` and `else if` arms, in source order.
        branches:   Vec<ConditionBlock>,
        /// The trailing `else` block, if any.
        else_block: Option<Block>,
        /// Line number in the source code.
        line:       usize,
    },
    /// `while c { .. }`
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `for (init; condition; update) { .. }`
    For {
        /// Assignment executed once before the first condition check.
        init:      Assignment,
        /// The loop condition.
        condition: Expr,
        /// Executed after every iteration of the body; either an assignment or
        /// an expression statement.
        update:    Box<Self>,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `print(a, b, ...);`
    Print {
        /// Expressions printed one per line, in order.
        expressions: Vec<Expr>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A standalone expression evaluated for its side effect, e.g. `x++;`.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number the statement starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Assignment(Assignment { line, .. })
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Print { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// The root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Multiplication (`*`)
    Mult,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Less than (`<`)
    Lt,
    /// Less than or equal (`<=`)
    Lteq,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Gteq,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    Neq,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

/// The built-in library functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LibFunction {
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `log(x)`, the natural logarithm.
    Log,
    /// `exp(x)`
    Exp,
    /// `sqrt(x)`
    Sqrt,
    /// `read()`, one numeric token from the input source.
    Read,
}

impl LibFunction {
    /// Looks up a library function by its source name.
    ///
    /// ## Example
    /// ```
    /// use mulang::ast::LibFunction;
    ///
    /// assert_eq!(LibFunction::from_name("sqrt"), Some(LibFunction::Sqrt));
    /// assert_eq!(LibFunction::from_name("tan"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "log" => Some(Self::Log),
            "exp" => Some(Self::Exp),
            "sqrt" => Some(Self::Sqrt),
            "read" => Some(Self::Read),
            _ => None,
        }
    }

    /// Returns `true` if the function may be called without an argument.
    #[must_use]
    pub const fn argument_optional(self) -> bool {
        matches!(self, Self::Read)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, And, Div, Eq, Gt, Gteq, Lt, Lteq, Mod, Mult, Neq, Or, Pow, Sub};
        let operator = match self {
            Mult => "*",
            Div => "/",
            Mod => "%",
            Add => "+",
            Sub => "-",
            Lt => "<",
            Lteq => "<=",
            Gt => ">",
            Gteq => ">=",
            Eq => "==",
            Neq => "!=",
            And => "&&",
            Or => "||",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LibFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
            Self::Read => "read",
        };
        write!(f, "{name}")
    }
}
