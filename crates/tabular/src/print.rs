//! Printing entry points.
//!
//! Each operation has a `write_*` form taking any [`Write`] sink and a
//! `print_*` convenience going to stdout.
//!
//! Empty-input conventions differ per entry point: the record-table
//! family treats an
//! empty collection as a silent no-op, while the value-table family
//! (`write_slice`, `write_map`, `write_row_maps`, `write_rows`) reports
//! `InvalidInput`. Each function documents which side it is on.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::BuildHasher;
use std::io::{self, Write};

use indexmap::IndexMap;

use crate::{Record, Table, TableError, cell};

// ============================================================================
// RECORD TABLES (columns from the record type)
// ============================================================================

/// Writes a single record as a one-row table.
pub fn write_record<T: Record, W: Write>(writer: &mut W, record: &T) -> Result<(), TableError> {
    write_record_iter(writer, std::iter::once(record))
}

/// Writes one row per record under the record type's columns.
///
/// An empty slice is a silent no-op: `Ok(())`, nothing written.
pub fn write_records<T: Record, W: Write>(writer: &mut W, records: &[T]) -> Result<(), TableError> {
    write_record_iter(writer, records)
}

/// Writes a map's values as a record table, in the map's own (unspecified)
/// iteration order. Use [`write_sorted_record_map`] for deterministic
/// output.
///
/// An empty map is a silent no-op.
pub fn write_record_map<K, T, S, W>(
    writer: &mut W,
    map: &HashMap<K, T, S>,
) -> Result<(), TableError>
where
    T: Record,
    S: BuildHasher,
    W: Write,
{
    write_record_iter(writer, map.values())
}

/// Writes a map's values as a record table, rows in ascending key order.
///
/// Numeric keys compare numerically and string keys lexicographically,
/// both via `Ord`, so the row order is deterministic for a given key set.
///
/// An empty map is a silent no-op.
pub fn write_sorted_record_map<K, T, S, W>(
    writer: &mut W,
    map: &HashMap<K, T, S>,
) -> Result<(), TableError>
where
    K: Ord,
    T: Record,
    S: BuildHasher,
    W: Write,
{
    let mut pairs: Vec<(&K, &T)> = map.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    write_record_iter(writer, pairs.into_iter().map(|(_, v)| v))
}

fn write_record_iter<'a, T, W>(
    writer: &mut W,
    records: impl IntoIterator<Item = &'a T>,
) -> Result<(), TableError>
where
    T: Record + 'a,
    W: Write,
{
    let mut records = records.into_iter().peekable();
    if records.peek().is_none() {
        // The record-table family no-ops on empty input.
        return Ok(());
    }
    let mut table = Table::with_headers(T::columns().iter().copied());
    for record in records {
        table.push_row(record.cells())?;
    }
    table.write_to(writer)
}

// ============================================================================
// VALUE TABLES (generic keys/values, fixed two-column layouts)
// ============================================================================

/// Writes any map as a two-column `Key`/`Value` table, rows sorted by the
/// *stringified* key for deterministic output.
///
/// # Errors
///
/// `InvalidInput` if the map is empty.
pub fn write_map<K, V, S, W>(writer: &mut W, map: &HashMap<K, V, S>) -> Result<(), TableError>
where
    K: Display,
    V: Display,
    S: BuildHasher,
    W: Write,
{
    write_map_with(writer, map, "Key", "Value")
}

/// [`write_map`] with caller-supplied column header labels.
pub fn write_map_with<K, V, S, W>(
    writer: &mut W,
    map: &HashMap<K, V, S>,
    key_header: &str,
    value_header: &str,
) -> Result<(), TableError>
where
    K: Display,
    V: Display,
    S: BuildHasher,
    W: Write,
{
    if map.is_empty() {
        return Err(TableError::invalid_input("input map is empty"));
    }
    let mut pairs: Vec<(String, String)> = map
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let mut table = Table::with_headers([key_header, value_header]);
    for (key, value) in pairs {
        table.push_row(vec![key, value])?;
    }
    table.write_to(writer)
}

/// Writes a flat sequence as a two-column `#`/`Value` table, index
/// starting at 0.
///
/// # Errors
///
/// `InvalidInput` if the slice is empty.
pub fn write_slice<T, W>(writer: &mut W, items: &[T]) -> Result<(), TableError>
where
    T: Display,
    W: Write,
{
    if items.is_empty() {
        return Err(TableError::invalid_input("input slice is empty"));
    }
    let mut table = Table::with_headers(["#", "Value"]);
    for (index, item) in items.iter().enumerate() {
        table.push_row(vec![index.to_string(), cell(item)])?;
    }
    table.write_to(writer)
}

/// Writes a sequence of column-name-to-value maps as a table.
///
/// Headers come from the first map's key order; later maps missing one of
/// those keys render an empty cell in that column (extra keys are
/// ignored). Heterogeneous maps are not rejected.
///
/// # Errors
///
/// `InvalidInput` if the slice is empty.
pub fn write_row_maps<V, W>(writer: &mut W, rows: &[IndexMap<String, V>]) -> Result<(), TableError>
where
    V: Display,
    W: Write,
{
    let Some(first) = rows.first() else {
        return Err(TableError::invalid_input("input slice is empty"));
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let mut table = Table::with_headers(headers.iter().copied());
    for row in rows {
        let cells = headers
            .iter()
            .map(|h| row.get(*h).map_or_else(String::new, ToString::to_string))
            .collect();
        table.push_row(cells)?;
    }
    table.write_to(writer)
}

/// Writes raw rows with optional headers.
///
/// With headers supplied, every row must match the header count; a
/// mismatch is `DimensionMismatch` naming the offending row index and
/// both counts. With an empty `headers` slice, any row shape is accepted
/// and rendered headerless.
///
/// # Errors
///
/// `InvalidInput` if `rows` is empty; `DimensionMismatch` as above.
pub fn write_rows<W: Write>(
    writer: &mut W,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<(), TableError> {
    if rows.is_empty() {
        return Err(TableError::invalid_input("input rows are empty"));
    }
    let mut table = if headers.is_empty() {
        Table::new()
    } else {
        Table::with_headers(headers.iter().copied())
    };
    for row in rows {
        table.push_row(row.clone())?;
    }
    table.write_to(writer)
}

// ============================================================================
// STDOUT CONVENIENCE
// ============================================================================

/// [`write_record`] to stdout.
pub fn print_record<T: Record>(record: &T) -> Result<(), TableError> {
    write_record(&mut io::stdout().lock(), record)
}

/// [`write_records`] to stdout.
pub fn print_records<T: Record>(records: &[T]) -> Result<(), TableError> {
    write_records(&mut io::stdout().lock(), records)
}

/// [`write_record_map`] to stdout.
pub fn print_record_map<K, T: Record, S: BuildHasher>(
    map: &HashMap<K, T, S>,
) -> Result<(), TableError> {
    write_record_map(&mut io::stdout().lock(), map)
}

/// [`write_sorted_record_map`] to stdout.
pub fn print_sorted_record_map<K: Ord, T: Record, S: BuildHasher>(
    map: &HashMap<K, T, S>,
) -> Result<(), TableError> {
    write_sorted_record_map(&mut io::stdout().lock(), map)
}

/// [`write_map`] to stdout.
pub fn print_map<K: Display, V: Display, S: BuildHasher>(
    map: &HashMap<K, V, S>,
) -> Result<(), TableError> {
    write_map(&mut io::stdout().lock(), map)
}

/// [`write_map_with`] to stdout.
pub fn print_map_with<K: Display, V: Display, S: BuildHasher>(
    map: &HashMap<K, V, S>,
    key_header: &str,
    value_header: &str,
) -> Result<(), TableError> {
    write_map_with(&mut io::stdout().lock(), map, key_header, value_header)
}

/// [`write_slice`] to stdout.
pub fn print_slice<T: Display>(items: &[T]) -> Result<(), TableError> {
    write_slice(&mut io::stdout().lock(), items)
}

/// [`write_row_maps`] to stdout.
pub fn print_row_maps<V: Display>(rows: &[IndexMap<String, V>]) -> Result<(), TableError> {
    write_row_maps(&mut io::stdout().lock(), rows)
}

/// [`write_rows`] to stdout.
pub fn print_rows(headers: &[&str], rows: &[Vec<String>]) -> Result<(), TableError> {
    write_rows(&mut io::stdout().lock(), headers, rows)
}
