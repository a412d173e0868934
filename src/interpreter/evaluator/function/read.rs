use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Reads one numeric token from the input source.
    ///
    /// Blocks until the source yields a token. Anything `f64::from_str`
    /// accepts is a valid number, including `inf` and `NaN`.
    ///
    /// # Errors
    /// - `InputExhausted` if the source has no more tokens.
    /// - `InvalidInput` if the token is not a number.
    /// - `Io` if the source itself fails.
    pub fn eval_read(&mut self, line: usize) -> EvalResult<Value> {
        let token = self.input
                        .next_token()
                        .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                        line })?
                        .ok_or(RuntimeError::InputExhausted { line })?;

        tracing::trace!(line, %token, "read");

        token.parse::<f64>()
             .map(Value::Number)
             .map_err(|_| RuntimeError::InvalidInput { token, line })
    }
}
