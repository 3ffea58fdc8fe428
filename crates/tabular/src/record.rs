//! The [`Record`] trait: a fixed set of named columns plus per-instance
//! cell rendering.

/// A value that renders as one table row under a fixed set of columns.
///
/// `#[derive(Record)]` implements this for named-field structs: columns
/// are the field names in declaration order, cells use each field's
/// `Display` impl, and `Option` fields render
/// [`NIL`](crate::NIL) when `None`.
///
/// Hand-written impls must keep `cells()` aligned with `columns()` — the
/// renderer pairs them positionally.
///
/// ```
/// use satchel_tabular::{Record, cell, opt_cell};
///
/// struct Port(u16, Option<&'static str>);
///
/// impl Record for Port {
///     fn columns() -> &'static [&'static str] {
///         &["port", "proto"]
///     }
///
///     fn cells(&self) -> Vec<String> {
///         vec![cell(&self.0), opt_cell(self.1.as_ref())]
///     }
/// }
/// ```
pub trait Record {
    /// Column names, in declaration order.
    fn columns() -> &'static [&'static str];

    /// Cell values for this instance, aligned to [`columns`](Record::columns).
    fn cells(&self) -> Vec<String>;
}
