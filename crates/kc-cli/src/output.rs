//! Output formatting utilities.

use std::collections::BTreeMap;

use colored::Colorize;
use kc_schema::{Attribute, Value};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::config::OutputFormat;

/// One attribute of a resource schema.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct AttributeRow {
    /// Attribute name.
    #[tabled(rename = "Attribute")]
    pub name: String,
    /// Value type.
    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    pub ty: String,
    /// Required, computed, sensitive, force-new markers.
    #[tabled(rename = "Flags")]
    pub flags: String,
    /// Schema default.
    #[tabled(rename = "Default")]
    pub default: String,
    /// Description.
    #[tabled(rename = "Description")]
    pub description: String,
}

impl AttributeRow {
    /// Builds a row for `attribute`.
    #[must_use]
    pub fn new(name: &str, attribute: &Attribute) -> Self {
        let mut flags = Vec::new();
        if attribute.required {
            flags.push("required");
        }
        if attribute.computed {
            flags.push("computed");
        }
        if attribute.sensitive {
            flags.push("sensitive");
        }
        if attribute.force_new {
            flags.push("force-new");
        }

        Self {
            name: name.to_string(),
            ty: attribute.ty.to_string(),
            flags: flags.join(","),
            default: attribute.default.as_ref().map(display_value).unwrap_or_default(),
            description: attribute.description.clone(),
        }
    }
}

/// One attribute of a resource document.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct DocumentRow {
    /// Attribute name.
    #[tabled(rename = "Attribute")]
    pub name: String,
    /// Current value.
    #[tabled(rename = "Value")]
    pub value: String,
}

impl DocumentRow {
    /// Builds rows from a document snapshot. Sensitive attributes are
    /// already excluded from snapshots.
    #[must_use]
    pub fn from_snapshot(snapshot: &BTreeMap<String, Value>) -> Vec<Self> {
        snapshot
            .iter()
            .map(|(name, value)| Self {
                name: name.clone(),
                value: display_value(value),
            })
            .collect()
    }
}

/// Formats a declared value for display.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::String(s) => s.clone(),
        Value::Map(map) => map
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Prints an error message.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Prints an info message.
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Outputs data in the specified format.
pub fn output<T: Tabled + serde::Serialize>(
    data: &[T],
    format: OutputFormat,
) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                info("No results found.");
            } else {
                let table = Table::new(data).with(Style::rounded()).to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            for item in data {
                let json = serde_json::to_value(item)?;
                print_yaml_value(&json, 0);
                println!();
            }
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Outputs a single item.
pub fn output_single<T: serde::Serialize>(item: &T, format: OutputFormat) -> crate::CliResult<()> {
    match format {
        OutputFormat::Table | OutputFormat::Yaml => {
            let json = serde_json::to_value(item)?;
            print_yaml_value(&json, 0);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item)?;
            println!("{json}");
        }
        OutputFormat::Quiet => {}
    }
    Ok(())
}

/// Prints a JSON value as YAML-like output.
fn print_yaml_value(value: &serde_json::Value, indent: usize) {
    let prefix = "  ".repeat(indent);

    match value {
        serde_json::Value::Null => println!("{prefix}null"),
        serde_json::Value::Bool(b) => println!("{prefix}{b}"),
        serde_json::Value::Number(n) => println!("{prefix}{n}"),
        serde_json::Value::String(s) => println!("{prefix}{s}"),
        serde_json::Value::Array(arr) => {
            for item in arr {
                print!("{prefix}- ");
                print_yaml_value(item, indent + 1);
            }
        }
        serde_json::Value::Object(map) => {
            for (key, val) in map {
                if val.is_object() || val.is_array() {
                    println!("{prefix}{key}:");
                    print_yaml_value(val, indent + 1);
                } else {
                    print!("{prefix}{key}: ");
                    match val {
                        serde_json::Value::Null => println!("null"),
                        serde_json::Value::Bool(b) => println!("{b}"),
                        serde_json::Value::Number(n) => println!("{n}"),
                        serde_json::Value::String(s) => println!("{s}"),
                        _ => {}
                    }
                }
            }
        }
    }
}
