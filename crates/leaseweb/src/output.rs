//! Output formatting: JSON, YAML, table.
//!
//! States and schemas go to stdout in the format selected by `--output`.
//! Diagnostics always go to stderr.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use serde_json::Value;
use tabled::{Table, Tabled, settings::Style};

use leaseweb_provider::{Diagnostic, Diagnostics, Severity};

use crate::cli::{ColorMode, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled on stderr.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

#[derive(Tabled)]
struct NameRow {
    #[tabled(rename = "Type")]
    name: String,
}

#[derive(Tabled)]
struct AttributeRow {
    #[tabled(rename = "Attribute")]
    path: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render a list of type names.
pub fn render_names(format: &OutputFormat, names: &[String]) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<NameRow> = names.iter().map(|name| NameRow { name: name.clone() }).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(names, false),
        OutputFormat::JsonCompact => render_json(names, true),
        OutputFormat::Yaml => render_yaml(names),
    }
}

/// Render a serializable document. The table view flattens it into
/// attribute/value rows.
pub fn render_single<T: serde::Serialize>(format: &OutputFormat, data: &T) -> String {
    match format {
        OutputFormat::Table => {
            let value = serde_json::to_value(data).unwrap_or_default();
            let mut rows = Vec::new();
            flatten(&mut rows, String::new(), &value);
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

/// Print every diagnostic to stderr, one per line.
pub fn print_diagnostics(diags: &Diagnostics, color: bool) {
    let mut stderr = io::stderr().lock();
    for diag in diags {
        let _ = writeln!(stderr, "{}", format_diagnostic(diag, color));
    }
}

fn format_diagnostic(diag: &Diagnostic, color: bool) -> String {
    if !color {
        return diag.to_string();
    }
    let level = match diag.severity {
        Severity::Error => "error".red().bold().to_string(),
        Severity::Warning => "warning".yellow().bold().to_string(),
    };
    match &diag.attribute {
        Some(path) => format!(
            "{level}: {} [{}]: {}",
            diag.summary.bold(),
            path.cyan(),
            diag.detail
        ),
        None => format!("{level}: {}: {}", diag.summary.bold(), diag.detail),
    }
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn flatten(rows: &mut Vec<AttributeRow>, prefix: String, value: &Value) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_owned()
        } else {
            format!("{prefix}.{key}")
        }
    };
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, nested) in map {
                flatten(rows, join(key), nested);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, nested) in items.iter().enumerate() {
                flatten(rows, format!("{prefix}[{index}]"), nested);
            }
        }
        Value::Null => rows.push(AttributeRow {
            path: prefix,
            value: "-".into(),
        }),
        Value::String(s) => rows.push(AttributeRow {
            path: prefix,
            value: s.clone(),
        }),
        other => rows.push(AttributeRow {
            path: prefix,
            value: other.to_string(),
        }),
    }
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.unwrap_or_default()
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn table_flattens_nested_state() {
        let state = json!({
            "id": "abc",
            "contract": { "term": 1 },
            "ips": [{ "ip": "10.0.0.1" }],
            "reference": null
        });
        let mut rows = Vec::new();
        flatten(&mut rows, String::new(), &state);

        let mut pairs: Vec<(&str, &str)> = rows
            .iter()
            .map(|row| (row.path.as_str(), row.value.as_str()))
            .collect();
        pairs.sort_unstable();
        assert_eq!(
            pairs,
            vec![
                ("contract.term", "1"),
                ("id", "abc"),
                ("ips[0].ip", "10.0.0.1"),
                ("reference", "-"),
            ]
        );
    }

    #[test]
    fn uncolored_diagnostic_matches_display() {
        let mut diags = Diagnostics::new();
        diags.add_warning("Removed from state", "the server keeps running");
        let diag = diags.iter().next().map(|d| format_diagnostic(d, false));
        assert_eq!(
            diag.as_deref(),
            Some("warning: Removed from state: the server keeps running")
        );
    }
}
