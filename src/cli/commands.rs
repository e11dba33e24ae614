//! CLI command implementations.
//!
//! Each chain command builds a fresh [`Chain`] from its arguments, applies a
//! single operation, and renders the outcome. Nothing persists between runs.

use crate::cli::output::{
    ChainReport, OutputFormat, format_chain_report, format_check, format_json, format_kth,
    format_matrix, format_palindromes, format_transform,
};
use crate::cli::parser::{Cli, Commands};
use crate::core::Chain;
use crate::error::{CommandError, Result};
use crate::routines;
use serde::Serialize;
use std::fmt::Write;
use tracing::{debug, info};

/// Values appended by the `demo` walkthrough before deduplication.
const DEMO_DEDUP_VALUES: [i64; 8] = [10, 20, 10, 10, 30, 10, 30, 17];

/// Values and position used by the `demo` k-th-from-end lookup.
const DEMO_KTH_VALUES: [i64; 5] = [1, 2, 3, 4, 5];
const DEMO_KTH: usize = 3;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the output format is unknown, an argument cannot be
/// parsed, or the chosen operation fails.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::try_parse(&cli.format)?;
    debug!(command = ?cli.command, ?format, "executing command");

    match &cli.command {
        Commands::Show { values } => Ok(cmd_show(values, format)),
        Commands::Dedup { unbuffered, values } => Ok(cmd_dedup(values, *unbuffered, format)),
        Commands::Remove { value, values } => Ok(cmd_remove(values, *value, format)),
        Commands::Kth { k, values } => cmd_kth(values, *k, format),
        Commands::Demo => cmd_demo(format),
        Commands::Unique { input } => Ok(format_check(
            "unique",
            &[input.as_str()],
            routines::is_unique(input),
            format,
        )),
        Commands::Permutation { first, second } => Ok(format_check(
            "permutation",
            &[first.as_str(), second.as_str()],
            routines::check_permutation(first, second),
            format,
        )),
        Commands::Urlify { input, true_length } => cmd_urlify(input, *true_length, format),
        Commands::Compress { input } => Ok(format_transform(
            "compress",
            input,
            &routines::compress(input),
            format,
        )),
        Commands::Palindrome { input, all } => Ok(cmd_palindrome(input, *all, format)),
        Commands::OneAway { first, second } => Ok(format_check(
            "one-away",
            &[first.as_str(), second.as_str()],
            routines::one_edit_away(first, second),
            format,
        )),
        Commands::Rotation { first, second } => Ok(format_check(
            "rotation",
            &[first.as_str(), second.as_str()],
            routines::is_rotation(first, second),
            format,
        )),
        Commands::RotateMatrix { matrix } => {
            let mut rows = parse_matrix(matrix)?;
            routines::rotate_matrix(&mut rows)?;
            Ok(format_matrix(&rows, format))
        }
        Commands::ZeroMatrix { matrix } => {
            let mut rows = parse_matrix(matrix)?;
            routines::zero_matrix(&mut rows)?;
            Ok(format_matrix(&rows, format))
        }
    }
}

/// Builds a chain by appending each value in order.
fn build_chain(values: &[i64]) -> Chain<i64> {
    let mut chain = Chain::new();
    for &value in values {
        chain.append_to_end(value);
    }
    debug!(len = chain.len(), "built chain");
    chain
}

/// Parses `"1,2;3,4"` into rows of cells.
fn parse_matrix(spec: &str) -> Result<Vec<Vec<i64>>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(CommandError::MissingArgument("matrix".to_string()).into());
    }

    spec.split(';')
        .map(|row| {
            row.split(',')
                .map(|cell| cell.trim().parse::<i64>().map_err(CommandError::from))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(Into::into)
        })
        .collect()
}

// ==================== Command Implementations ====================

fn cmd_show(values: &[i64], format: OutputFormat) -> String {
    let chain = build_chain(values);
    format_chain_report(
        &ChainReport {
            operation: "show",
            input: values,
            result: &chain,
            removed: None,
        },
        format,
    )
}

fn cmd_dedup(values: &[i64], unbuffered: bool, format: OutputFormat) -> String {
    let mut chain = build_chain(values);
    let removed = if unbuffered {
        chain.remove_duplicates_unbuffered()
    } else {
        chain.remove_duplicates()
    };
    format_chain_report(
        &ChainReport {
            operation: "dedup",
            input: values,
            result: &chain,
            removed: Some(removed),
        },
        format,
    )
}

fn cmd_remove(values: &[i64], value: i64, format: OutputFormat) -> String {
    let mut chain = build_chain(values);
    let removed = chain.remove_element(&value);
    format_chain_report(
        &ChainReport {
            operation: "remove",
            input: values,
            result: &chain,
            removed: Some(removed),
        },
        format,
    )
}

fn cmd_kth(values: &[i64], k: usize, format: OutputFormat) -> Result<String> {
    let chain = build_chain(values);
    let value = *chain.kth_from_end(k)?;
    Ok(format_kth(k, value, format))
}

fn cmd_urlify(input: &str, true_length: Option<usize>, format: OutputFormat) -> Result<String> {
    let output = match true_length {
        Some(true_len) => routines::urlify_str(input, true_len)?,
        None => {
            // No working room given: pad enough for every space to expand.
            let true_len = input.chars().count();
            let spaces = input.chars().filter(|&c| c == ' ').count();
            let padded = format!("{input}{}", " ".repeat(2 * spaces));
            routines::urlify_str(&padded, true_len)?
        }
    };
    Ok(format_transform("urlify", input, &output, format))
}

fn cmd_palindrome(input: &str, all: bool, format: OutputFormat) -> String {
    if all {
        format_palindromes(input, &routines::palindrome_permutations(input), format)
    } else {
        format_check(
            "palindrome",
            &[input],
            routines::is_palindrome_permutation(input),
            format,
        )
    }
}

fn cmd_demo(format: OutputFormat) -> Result<String> {
    info!("running linked-list walkthrough");

    let mut chain = build_chain(&DEMO_DEDUP_VALUES);
    let before = chain.to_string();
    let removed = chain.remove_duplicates();

    let kth_chain = build_chain(&DEMO_KTH_VALUES);
    let kth_value = *kth_chain.kth_from_end(DEMO_KTH)?;

    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "{before}");
            let _ = writeln!(output, "{chain}");
            let _ = writeln!(output, "Removed {removed} duplicates");
            output.push('\n');
            let _ = writeln!(output, "{kth_chain}");
            output.push_str(&format_kth(DEMO_KTH, kth_value, format));
            Ok(output)
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct DemoOutput<'a> {
                dedup: ChainReport<'a>,
                kth: KthDemo<'a>,
            }
            #[derive(Serialize)]
            struct KthDemo<'a> {
                chain: &'a Chain<i64>,
                k: usize,
                value: i64,
            }
            Ok(format_json(&DemoOutput {
                dedup: ChainReport {
                    operation: "dedup",
                    input: &DEMO_DEDUP_VALUES,
                    result: &chain,
                    removed: Some(removed),
                },
                kth: KthDemo {
                    chain: &kth_chain,
                    k: DEMO_KTH,
                    value: kth_value,
                },
            }))
        }
    }
}
