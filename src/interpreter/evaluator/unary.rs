use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. The operand must be a number.
    /// - `Not`: boolean negation. The operand must be a boolean.
    ///
    /// # Example
    /// ```
    /// use mulang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::Boolean(false), 1).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    ///
    /// assert!(Evaluator::eval_unary(UnaryOperator::Not, &Value::Number(0.0), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number(line)?)),
            UnaryOperator::Not => Ok(Value::Boolean(!value.as_boolean(line)?)),
        }
    }

    /// Adds `delta` to the numeric variable `name` and stores the result.
    ///
    /// Returns `(previous, updated)` so prefix forms can yield the new value
    /// and postfix forms the old one.
    ///
    /// # Errors
    /// - `UndefinedVariable` if `name` is unbound.
    /// - `TypeMismatch` if the current value is not a number.
    pub(crate) fn apply_delta(&mut self,
                              name: &str,
                              delta: f64,
                              line: usize)
                              -> EvalResult<(Value, Value)> {
        let previous = self.environment.get(name, line)?.as_number(line)?;
        let updated = previous + delta;
        self.environment.set(name, Value::Number(updated));
        Ok((Value::Number(previous), Value::Number(updated)))
    }
}
