use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation between two already evaluated values.
    ///
    /// This function routes the operation to a specialized handler:
    /// arithmetic operators and `+` go to `eval_arithmetic` / `eval_add`,
    /// relational operators to `eval_relational`, equality to
    /// `eval_equality`, and logical operators to `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use mulang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, And, Div, Eq, Gt, Gteq, Lt, Lteq, Mod, Mult, Neq, Or, Pow, Sub};

        match op {
            Add => Ok(Self::eval_add(left, right)),
            Mult | Div | Mod | Sub | Pow => Self::eval_arithmetic(op, left, right, line),
            Lt | Lteq | Gt | Gteq => Self::eval_relational(op, left, right, line),
            Eq | Neq => Self::eval_equality(op, left, right, line),
            And | Or => Self::eval_logic(op, left, right, line),
        }
    }
}
