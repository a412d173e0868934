use crate::{
    ast::{Assignment, Block, ConditionBlock, Expr, Statement},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Evaluates the right-hand side and binds it to the target name.
    ///
    /// Assignment creates the variable if needed and overwrites it otherwise.
    pub fn eval_assignment(&mut self, assignment: &Assignment) -> EvalResult<Value> {
        let value = self.eval(&assignment.value)?;
        self.environment.set(&assignment.name, value);
        Ok(Value::Void)
    }

    /// Executes every statement of a block in order.
    ///
    /// Blocks do not open a scope; assignments inside them are visible after
    /// the block ends.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Value> {
        for statement in &block.statements {
            self.eval_statement(statement)?;
        }
        Ok(Value::Void)
    }

    /// Evaluates an `if` / `else if` / `else` chain.
    ///
    /// Conditions are evaluated in source order until one is `true`; only that
    /// branch's block runs and no further condition is evaluated. If every
    /// condition is `false`, the `else` block runs when present.
    ///
    /// # Errors
    /// `TypeMismatch` if an evaluated condition is not a boolean.
    pub fn eval_if(&mut self,
                   branches: &[ConditionBlock],
                   else_block: Option<&Block>)
                   -> EvalResult<Value> {
        for branch in branches {
            let line = branch.condition.line_number();
            if self.eval(&branch.condition)?.as_boolean(line)? {
                self.eval_block(&branch.block)?;
                return Ok(Value::Void);
            }
        }

        if let Some(block) = else_block {
            self.eval_block(block)?;
        }

        Ok(Value::Void)
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is checked before every iteration, including the first,
    /// so the body may run zero times.
    pub fn eval_while(&mut self, condition: &Expr, body: &Block, line: usize) -> EvalResult<Value> {
        let mut iterations = 0usize;

        while self.eval_condition(condition)? {
            self.eval_block(body)?;
            iterations += 1;
        }

        tracing::debug!(line, iterations, "while loop finished");
        Ok(Value::Void)
    }

    /// Evaluates a C-style `for` loop.
    ///
    /// The init assignment runs exactly once. Then, for as long as the
    /// condition holds, the body runs followed by the update.
    pub fn eval_for(&mut self,
                    init: &Assignment,
                    condition: &Expr,
                    update: &Statement,
                    body: &Block,
                    line: usize)
                    -> EvalResult<Value> {
        self.eval_assignment(init)?;

        let mut iterations = 0usize;

        while self.eval_condition(condition)? {
            self.eval_block(body)?;
            self.eval_statement(update)?;
            iterations += 1;
        }

        tracing::debug!(line, iterations, "for loop finished");
        Ok(Value::Void)
    }

    fn eval_condition(&mut self, condition: &Expr) -> EvalResult<bool> {
        self.eval(condition)?.as_boolean(condition.line_number())
    }
}
