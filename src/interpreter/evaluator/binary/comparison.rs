use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Maps an equality-style operator and an equality result to the final
/// boolean value, inverting it for `!=`.
///
/// # Errors
/// `UnknownOperator` for anything other than `==` and `!=`.
pub fn equality_op_result(op: BinaryOperator, is_equal: bool, line: usize) -> EvalResult<bool> {
    match op {
        BinaryOperator::Eq => Ok(is_equal),
        BinaryOperator::Neq => Ok(!is_equal),
        _ => Err(RuntimeError::UnknownOperator { operator: op.to_string(),
                                                 line }),
    }
}

impl Evaluator<'_> {
    /// Evaluates `<`, `<=`, `>` or `>=`.
    ///
    /// Both operands must be numbers; the comparison is ordinary IEEE
    /// comparison, so anything compared with NaN is `false`.
    ///
    /// # Example
    /// ```
    /// use mulang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let a = Value::Number(3.0);
    /// let b = Value::Number(5.0);
    ///
    /// let result = Evaluator::eval_relational(BinaryOperator::Lt, &a, &b, 1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_relational(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let left = left.as_number(line)?;
        let right = right.as_number(line)?;

        Ok(Value::Boolean(match op {
                              BinaryOperator::Lt => left < right,
                              BinaryOperator::Lteq => left <= right,
                              BinaryOperator::Gt => left > right,
                              BinaryOperator::Gteq => left >= right,
                              _ => {
                                  return Err(RuntimeError::UnknownOperator { operator:
                                                                                 op.to_string(),
                                                                             line });
                              },
                          }))
    }

    /// Evaluates `==` or `!=`.
    ///
    /// Numbers are compared with the [`EPSILON`] tolerance, everything else
    /// exactly. Comparing values of different kinds is not an error; they are
    /// simply unequal.
    ///
    /// [`EPSILON`]: crate::interpreter::value::core::EPSILON
    pub fn eval_equality(op: BinaryOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        let is_equal = left.equals(right);

        Ok(Value::Boolean(equality_op_result(op, is_equal, line)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(left: Value, right: Value) -> Value {
        Evaluator::eval_equality(BinaryOperator::Eq, &left, &right, 1).unwrap()
    }

    #[test]
    fn epsilon_absorbs_rounding_error() {
        assert_eq!(eq(Value::Number(0.1 + 0.2), Value::Number(0.3)), Value::Boolean(true));
        let neq = Evaluator::eval_equality(BinaryOperator::Neq,
                                           &Value::Number(0.1 + 0.2),
                                           &Value::Number(0.3),
                                           1);
        assert_eq!(neq.unwrap(), Value::Boolean(false));
    }

    #[test]
    fn kind_mismatch_is_unequal_not_an_error() {
        assert_eq!(eq(Value::Number(1.0), "1".into()), Value::Boolean(false));
        assert_eq!(eq(Value::Nil, Value::Boolean(false)), Value::Boolean(false));
        assert_eq!(eq(Value::Nil, Value::Nil), Value::Boolean(true));
        assert_eq!(eq("ab".into(), "ab".into()), Value::Boolean(true));
    }

    #[test]
    fn relational_requires_numbers() {
        let result =
            Evaluator::eval_relational(BinaryOperator::Gteq, &"b".into(), &"a".into(), 4);
        assert!(matches!(result, Err(RuntimeError::TypeMismatch { line: 4, .. })));
    }

    #[test]
    fn relational_against_nan_is_false() {
        let result = Evaluator::eval_relational(BinaryOperator::Lteq,
                                                &Value::Number(f64::NAN),
                                                &Value::Number(1.0),
                                                1);
        assert_eq!(result.unwrap(), Value::Boolean(false));
    }

    #[test]
    fn equality_helper_rejects_other_operators() {
        assert!(matches!(equality_op_result(BinaryOperator::And, true, 3),
                         Err(RuntimeError::UnknownOperator { line: 3, .. })));
    }
}
