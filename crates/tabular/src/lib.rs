//! # satchel-tabular
//!
//! A small table model plus typed record-to-table rendering.
//!
//! Instead of runtime introspection, a [`Record`] trait does the work:
//! a record names its columns once and renders its cells as strings. `#[derive(Record)]` (on by default via the `derive`
//! feature) implements the trait for any named-field struct, rendering
//! `Option` fields as the literal `<nil>` when absent.
//!
//! ## Quick Start
//!
//! ```rust
//! use satchel_tabular::{Record, write_records};
//!
//! #[derive(Record)]
//! struct Server {
//!     id: u32,
//!     name: String,
//!     rack: Option<String>,
//! }
//!
//! let servers = vec![
//!     Server { id: 1, name: "web-01".into(), rack: Some("r4".into()) },
//!     Server { id: 2, name: "web-02".into(), rack: None },
//! ];
//!
//! let mut out = Vec::new();
//! write_records(&mut out, &servers).unwrap();
//! let rendered = String::from_utf8(out).unwrap();
//! assert!(rendered.contains("web-02"));
//! assert!(rendered.contains("<nil>"));
//! ```
//!
//! Every entry point comes in a `write_*` form taking any
//! [`std::io::Write`] sink and a `print_*` convenience that goes to
//! stdout. Empty-input behavior differs by entry point on purpose; each
//! function documents its own convention.

mod cell;
mod error;
mod print;
mod record;
mod table;

pub use cell::{NIL, cell, opt_cell};
pub use error::TableError;
pub use print::{
    print_map, print_map_with, print_record, print_record_map, print_records, print_row_maps,
    print_rows, print_slice, print_sorted_record_map, write_map, write_map_with, write_record,
    write_record_map, write_records, write_row_maps, write_rows, write_slice,
    write_sorted_record_map,
};
pub use record::Record;
pub use table::Table;

#[cfg(feature = "derive")]
pub use satchel_tabular_macros::Record;
