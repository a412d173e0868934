use crate::ast::LibFunction;

/// Signature shared by the numeric library functions.
pub type MathFn = fn(f64) -> f64;

/// Returns the routine implementing a numeric library function.
///
/// `log` is the natural logarithm. `read` is not a math function and maps to
/// `None`.
///
/// # Example
/// ```
/// use mulang::{ast::LibFunction, interpreter::evaluator::function::builtin::math_function};
///
/// let sqrt = math_function(LibFunction::Sqrt).unwrap();
/// assert_eq!(sqrt(9.0), 3.0);
/// assert!(math_function(LibFunction::Read).is_none());
/// ```
#[must_use]
pub fn math_function(function: LibFunction) -> Option<MathFn> {
    match function {
        LibFunction::Sin => Some(f64::sin),
        LibFunction::Cos => Some(f64::cos),
        LibFunction::Log => Some(f64::ln),
        LibFunction::Exp => Some(f64::exp),
        LibFunction::Sqrt => Some(f64::sqrt),
        LibFunction::Read => None,
    }
}
