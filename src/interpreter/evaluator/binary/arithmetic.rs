use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a purely numeric operator: `*`, `/`, `%`, `-` or `^`.
    ///
    /// Both operands must be numbers. Division and modulo by zero follow IEEE
    /// semantics and yield infinity or NaN rather than an error.
    ///
    /// # Example
    /// ```
    /// use mulang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let x = Value::Number(1.0);
    /// let zero = Value::Number(0.0);
    ///
    /// let result = Evaluator::eval_arithmetic(BinaryOperator::Div, &x, &zero, 1).unwrap();
    /// assert_eq!(result, Value::Number(f64::INFINITY));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Div, Mod, Mult, Pow, Sub};

        let a = left.as_number(line)?;
        let b = right.as_number(line)?;

        Ok(Value::Number(match op {
                             Mult => a * b,
                             Div => a / b,
                             Mod => a % b,
                             Sub => a - b,
                             Pow => a.powf(b),
                             _ => {
                                 return Err(RuntimeError::UnknownOperator { operator:
                                                                                op.to_string(),
                                                                            line });
                             },
                         }))
    }

    /// Evaluates `+`.
    ///
    /// Two numbers are added. If either operand is anything else, both are
    /// rendered in their default textual form and concatenated, so `1 + "y"`
    /// is `"1y"` and `"n: " + nil` is `"n: nil"`.
    #[must_use]
    pub fn eval_add(left: &Value, right: &Value) -> Value {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Value::Number(a + b),
            _ => Value::String(format!("{left}{right}")),
        }
    }
}
