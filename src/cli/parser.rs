//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{ArgAction, Parser, Subcommand};

/// linkchain: owned linked-chain engine and classic string/matrix routines.
///
/// Chain commands build a fresh chain from the given values, apply one
/// operation, and print the result.
#[derive(Parser, Debug)]
#[command(name = "linkchain")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true, env = "LINKCHAIN_FORMAT")]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a chain and print it.
    Show {
        /// Values appended in order (space or comma separated).
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Remove values already seen earlier in the chain.
    Dedup {
        /// Use the runner technique instead of a seen-set.
        #[arg(long)]
        unbuffered: bool,

        /// Values appended in order.
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Remove every occurrence of a value.
    #[command(alias = "rm")]
    Remove {
        /// Value to remove.
        #[arg(short = 'x', long, allow_negative_numbers = true)]
        value: i64,

        /// Values appended in order.
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Print the k-th value from the end (1 = last).
    Kth {
        /// Position counted from the tail.
        #[arg(short, long)]
        k: usize,

        /// Values appended in order.
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Run the built-in linked-list walkthrough.
    Demo,

    /// Check whether a string has all unique characters.
    Unique {
        /// Input string.
        input: String,
    },

    /// Check whether two strings are anagrams.
    Permutation {
        /// First string.
        first: String,

        /// Second string.
        second: String,
    },

    /// Replace spaces with %20.
    Urlify {
        /// Input string, optionally padded with trailing room.
        input: String,

        /// Logical length of the input; padding after it is working room.
        #[arg(short = 'n', long)]
        true_length: Option<usize>,
    },

    /// Run-length compress repeated characters.
    Compress {
        /// Input string.
        input: String,
    },

    /// Check for (or list) palindrome permutations.
    Palindrome {
        /// Input string; whitespace and case are ignored.
        input: String,

        /// List every distinct palindrome instead of a yes/no answer.
        #[arg(short, long)]
        all: bool,
    },

    /// Check whether two strings are at most one edit apart.
    OneAway {
        /// First string.
        first: String,

        /// Second string.
        second: String,
    },

    /// Check whether the second string is a rotation of the first.
    Rotation {
        /// First string.
        first: String,

        /// Second string.
        second: String,
    },

    /// Rotate a square matrix 90 degrees clockwise.
    RotateMatrix {
        /// Rows separated by ';', cells by ',' (e.g. "1,2;3,4").
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },

    /// Zero the row and column of every zero cell.
    ZeroMatrix {
        /// Rows separated by ';', cells by ',' (e.g. "1,0;3,4").
        #[arg(allow_hyphen_values = true)]
        matrix: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_values_with_delimiters() {
        let cli = Cli::try_parse_from(["linkchain", "show", "1,2", "3", "-4"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Show { ref values } if values == &[1, 2, 3, -4]
        ));
    }

    #[test]
    fn test_parse_kth() {
        let cli = Cli::try_parse_from(["linkchain", "kth", "-k", "3", "1", "2", "3"]).unwrap();
        assert!(matches!(cli.command, Commands::Kth { k: 3, .. }));
        assert_eq!(cli.format, "text");
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli =
            Cli::try_parse_from(["linkchain", "dedup", "--unbuffered", "-vv", "--format", "json"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, "json");
        assert!(matches!(
            cli.command,
            Commands::Dedup {
                unbuffered: true,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_negative_k() {
        assert!(Cli::try_parse_from(["linkchain", "kth", "-k", "-1", "1"]).is_err());
    }
}
