use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Renders a value the way `print` shows it.
///
/// Booleans print as `1` and `0`; every other value uses its default textual
/// form.
///
/// # Example
/// ```
/// use mulang::interpreter::{evaluator::function::print::render_for_print, value::core::Value};
///
/// assert_eq!(render_for_print(&Value::Boolean(true)), "1");
/// assert_eq!(render_for_print(&Value::Number(5.0)), "5");
/// assert_eq!(render_for_print(&Value::from("hi")), "hi");
/// ```
#[must_use]
pub fn render_for_print(value: &Value) -> String {
    match value {
        Value::Boolean(true) => "1".to_string(),
        Value::Boolean(false) => "0".to_string(),
        other => other.to_string(),
    }
}

impl Evaluator<'_> {
    /// Evaluates each expression in order and writes one line per result.
    ///
    /// Each line is written before the next expression is evaluated, so a
    /// failing expression still leaves the earlier lines in the output.
    pub fn eval_print(&mut self, expressions: &[Expr], line: usize) -> EvalResult<Value> {
        for expr in expressions {
            let value = self.eval(expr)?;
            self.output
                .write_line(&render_for_print(&value))
                .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                line })?;
        }
        Ok(Value::Void)
    }
}
