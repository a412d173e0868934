/// The runtime value type.
///
/// Defines `Value`, its fallible coercions (`as_number`, `as_boolean`,
/// `as_string`), kind tests, tolerant equality and default textual form.
pub mod core;
