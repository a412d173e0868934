use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a logical operation between two boolean values.
    ///
    /// The operands are converted to booleans using `as_boolean`. Both sides
    /// have already been evaluated by the time this runs, so neither `&&` nor
    /// `||` short-circuits, and a non-boolean right operand is an error even
    /// when the left one decides the result.
    ///
    /// # Example
    /// ```
    /// use mulang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let a = Value::Boolean(true);
    /// let b = Value::Boolean(false);
    ///
    /// let result = Evaluator::eval_logic(BinaryOperator::Or, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: &Value,
                      right: &Value,
                      line: usize)
                      -> EvalResult<Value> {
        let left = left.as_boolean(line)?;
        let right = right.as_boolean(line)?;

        match op {
            BinaryOperator::And => Ok(Value::Boolean(left && right)),
            BinaryOperator::Or => Ok(Value::Boolean(left || right)),
            _ => Err(RuntimeError::UnknownOperator { operator: op.to_string(),
                                                     line }),
        }
    }
}
