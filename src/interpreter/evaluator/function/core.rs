use crate::{
    ast::{Expr, LibFunction},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::builtin::math_function,
        },
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates a library call.
    ///
    /// Math functions evaluate their argument, require it to be a number and
    /// apply the matching `f64` routine. `read()` ignores its argument
    /// entirely (it is not evaluated) and takes one number from the input
    /// source.
    ///
    /// # Errors
    /// - `MissingArgument` if a math function has no argument.
    /// - `TypeMismatch` if the argument is not a number.
    /// - Any error raised by `eval_read`.
    pub fn eval_lib_call(&mut self,
                         function: LibFunction,
                         argument: Option<&Expr>,
                         line: usize)
                         -> EvalResult<Value> {
        let Some(apply) = math_function(function) else {
            return self.eval_read(line);
        };

        let argument =
            argument.ok_or_else(|| RuntimeError::MissingArgument { function: function.to_string(),
                                                                   line })?;
        let x = self.eval(argument)?.as_number(line)?;

        Ok(Value::Number(apply(x)))
    }
}
