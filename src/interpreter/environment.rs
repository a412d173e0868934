use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The single, flat variable store of a running program.
///
/// There is exactly one scope: blocks, loops and conditionals all read and
/// write the same bindings. Assigning to a name creates it on first use and
/// overwrites it afterwards.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedVariable` if the name was never assigned.
    ///
    /// # Example
    /// ```
    /// use mulang::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Number(5.0));
    ///
    /// assert_eq!(env.get("x", 1).unwrap(), &Value::Number(5.0));
    /// assert!(env.get("y", 1).is_err());
    /// ```
    pub fn get(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: Value) {
        tracing::trace!(name, %value, "set variable");
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Iterates over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
