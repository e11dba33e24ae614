//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::core::Chain;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string, falling back to text.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Parses format from string, rejecting unknown names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for anything other than `text` or `json`.
    pub fn try_parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config {
                message: format!("unknown output format: {other} (expected text or json)"),
            }),
        }
    }
}

/// Before/after view of a chain operation.
#[derive(Debug, Serialize)]
pub struct ChainReport<'a> {
    /// Operation name.
    pub operation: &'a str,
    /// Values as given on input.
    pub input: &'a [i64],
    /// Chain after the operation.
    pub result: &'a Chain<i64>,
    /// Elements removed, for removal operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<usize>,
}

/// Formats a chain operation report.
#[must_use]
pub fn format_chain_report(report: &ChainReport<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            if report.removed.is_some() {
                let input: Chain<i64> = report.input.iter().copied().collect();
                let _ = writeln!(output, "Input:   {input}");
            }
            let _ = writeln!(output, "Result:  {}", report.result);
            if let Some(removed) = report.removed {
                let _ = writeln!(output, "Removed: {removed}");
            }
            output
        }
        OutputFormat::Json => format_json(report),
    }
}

/// Formats a k-th-from-end lookup.
#[must_use]
pub fn format_kth(k: usize, value: i64, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{} from end: {value}\n", ordinal(k)),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct KthOutput {
                k: usize,
                value: i64,
            }
            format_json(&KthOutput { k, value })
        }
    }
}

/// Formats a yes/no routine answer.
#[must_use]
pub fn format_check(operation: &str, inputs: &[&str], answer: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("{}: {answer}\n", inputs.join(", ")),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct CheckOutput<'a> {
                operation: &'a str,
                inputs: &'a [&'a str],
                result: bool,
            }
            format_json(&CheckOutput {
                operation,
                inputs,
                result: answer,
            })
        }
    }
}

/// Formats a string transform (`'input' -> output`).
#[must_use]
pub fn format_transform(operation: &str, input: &str, output: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("'{input}' -> {output}\n"),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct TransformOutput<'a> {
                operation: &'a str,
                input: &'a str,
                output: &'a str,
            }
            format_json(&TransformOutput {
                operation,
                input,
                output,
            })
        }
    }
}

/// Formats a list of palindromes.
#[must_use]
pub fn format_palindromes(input: &str, palindromes: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if palindromes.is_empty() {
                return format!("No palindrome permutations of '{input}'\n");
            }
            let mut output = String::new();
            let _ = writeln!(
                output,
                "{} palindrome permutations of '{input}':",
                palindromes.len()
            );
            for palindrome in palindromes {
                let _ = writeln!(output, "  {palindrome}");
            }
            output
        }
        OutputFormat::Json => format_json(&palindromes),
    }
}

/// Formats a matrix, one row per line.
#[must_use]
pub fn format_matrix(matrix: &[Vec<i64>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let width = matrix
                .iter()
                .flatten()
                .map(|v| v.to_string().len())
                .max()
                .unwrap_or(1);
            let mut output = String::new();
            for row in matrix {
                let cells: Vec<String> = row.iter().map(|v| format!("{v:>width$}")).collect();
                let _ = writeln!(output, "{}", cells.join(" "));
            }
            output
        }
        OutputFormat::Json => format_json(&matrix),
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput<'a> {
                error: &'a str,
                message: String,
            }
            let kind = match error {
                Error::Chain(_) => "chain",
                Error::Routine(_) => "routine",
                Error::Command(_) => "command",
                Error::Config { .. } => "config",
            };
            format_json(&ErrorOutput {
                error: kind,
                message: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
pub(crate) fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// English ordinal for small positions (`1st`, `2nd`, `3rd`, `11th`).
fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
