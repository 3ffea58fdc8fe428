//! Cell stringification helpers.
//!
//! Public so hand-written [`Record`](crate::Record) impls produce the same
//! output as the derive macro.

use std::fmt::Display;

/// The literal rendered for an absent optional field.
///
/// Compatibility contract: downstream consumers grep for this exact
/// string, do not change it.
pub const NIL: &str = "<nil>";

/// Renders a value with its `Display` impl.
pub fn cell<T: Display>(value: &T) -> String {
    value.to_string()
}

/// Renders an optional value, substituting [`NIL`] when absent.
///
/// ```
/// use satchel_tabular::opt_cell;
///
/// assert_eq!(opt_cell(Some(&42)), "42");
/// assert_eq!(opt_cell::<i32>(None), "<nil>");
/// ```
pub fn opt_cell<T: Display>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NIL.to_string(),
    }
}
