use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        io::{InputSource, OutputSink},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks a syntax tree and executes it.
///
/// The evaluator owns the program's single [`Environment`] and borrows the
/// output sink used by `print` and the input source used by `read()`.
///
/// ## Usage
///
/// An `Evaluator` is created once per program run. [`Evaluator::run`] executes
/// every top-level statement in order and stops at the first error; the
/// environment can be inspected afterwards.
pub struct Evaluator<'io> {
    pub(crate) environment: Environment,
    pub(crate) output:      &'io mut dyn OutputSink,
    pub(crate) input:       &'io mut dyn InputSource,
}

impl<'io> Evaluator<'io> {
    /// Creates an evaluator with an empty environment.
    pub fn new(output: &'io mut dyn OutputSink, input: &'io mut dyn InputSource) -> Self {
        Self { environment: Environment::new(),
               output,
               input }
    }

    /// The variable store as it currently stands.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Consumes the evaluator, returning its environment.
    #[must_use]
    pub fn into_environment(self) -> Environment {
        self.environment
    }

    /// Executes every statement of `program` in order.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; no statement after the failing
    /// one is executed.
    ///
    /// # Example
    /// ```
    /// use mulang::{
    ///     interpreter::{evaluator::core::Evaluator, io::NoInput, value::core::Value},
    ///     parse_program,
    /// };
    ///
    /// let program = parse_program("x = 2; print(x * 21);").unwrap();
    /// let mut output: Vec<String> = Vec::new();
    /// let mut input = NoInput;
    ///
    /// let mut evaluator = Evaluator::new(&mut output, &mut input);
    /// evaluator.run(&program).unwrap();
    /// assert_eq!(evaluator.environment().lookup("x"), Some(&Value::Number(2.0)));
    ///
    /// drop(evaluator);
    /// assert_eq!(output, ["42"]);
    /// ```
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        tracing::debug!(statements = program.statements.len(), "program started");
        for statement in &program.statements {
            self.eval_statement(statement)?;
        }
        tracing::debug!(variables = self.environment.len(), "program finished");
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// always evaluated left to right before an operator is applied; no
    /// operator short-circuits.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, line } => self.environment.get(name, *line).cloned(),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::PreIncDec { name, delta, line } => {
                let (_, updated) = self.apply_delta(name, *delta, *line)?;
                Ok(updated)
            },
            Expr::PostIncDec { name, delta, line } => {
                let (previous, _) = self.apply_delta(name, *delta, *line)?;
                Ok(previous)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::LibCall { function,
                            argument,
                            line, } => self.eval_lib_call(*function, argument.as_deref(), *line),
            Expr::Paren { expr, .. } => self.eval(expr),
        }
    }

    /// Evaluates a single statement.
    ///
    /// Statements only act through side effects on the environment or the
    /// output sink, so the result is always [`Value::Void`] on success.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        tracing::trace!(line = statement.line_number(), "statement");
        match statement {
            Statement::Assignment(assignment) => self.eval_assignment(assignment),
            Statement::If { branches,
                            else_block,
                            .. } => self.eval_if(branches, else_block.as_ref()),
            Statement::While { condition, body, line } => self.eval_while(condition, body, *line),
            Statement::For { init,
                             condition,
                             update,
                             body,
                             line, } => self.eval_for(init, condition, update, body, *line),
            Statement::Print { expressions, line } => self.eval_print(expressions, *line),
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Value::Void)
            },
        }
    }
}
