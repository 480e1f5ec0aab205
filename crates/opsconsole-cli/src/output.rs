//! Table and JSON output formatting for CLI commands.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of typed rows in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{item:#?}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Print backend records (JSON objects) as a table with one column per key
pub fn print_records(records: &[Value], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", records_table(records));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print an arbitrary backend document
pub fn print_value(value: &Value, format: OutputFormat) {
    match (format, value) {
        (OutputFormat::Json, _) => {
            let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
            println!("{json}");
        }
        (OutputFormat::Table, Value::Array(items)) => print_records(items, format),
        (OutputFormat::Table, Value::Object(map)) => {
            for (key, field) in map {
                print_kv(key, &cell(field));
            }
        }
        (OutputFormat::Table, Value::Null) => println!("Done."),
        (OutputFormat::Table, other) => println!("{}", cell(other)),
    }
}

/// Build a table from heterogeneous records. Columns are the union of all
/// object keys; non-object records land in a single `value` column.
pub fn records_table(records: &[Value]) -> Table {
    let columns: BTreeSet<&str> = records
        .iter()
        .filter_map(Value::as_object)
        .flat_map(|map| map.keys().map(String::as_str))
        .collect();

    let mut builder = Builder::default();
    if columns.is_empty() {
        builder.push_record(["value"]);
        for record in records {
            builder.push_record([cell(record)]);
        }
    } else {
        builder.push_record(columns.iter().copied());
        for record in records {
            builder.push_record(
                columns
                    .iter()
                    .map(|column| record.get(*column).map(cell).unwrap_or_default()),
            );
        }
    }
    builder.build()
}

/// Render one JSON value as a table cell.
fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
