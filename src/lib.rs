//! # linkchain
//!
//! An owned singly-linked chain engine, plus the classic string and matrix
//! exercises that usually travel with it.
//!
//! The [`Chain`] owns every node through a chain of `Box` edges. Removal
//! splices a node out and releases it immediately, so no traversal cursor
//! ever observes a freed node.
//!
//! ## Features
//!
//! - **Chain**: append, value removal, duplicate elimination, k-th from end
//! - **Routines**: uniqueness, anagram, URL-encoding, compression,
//!   palindrome permutations, one-edit distance, rotation, matrix transforms
//! - **CLI**: every operation is reachable from the `linkchain` binary

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod error;
pub mod routines;

// Re-export commonly used types at crate root
pub use error::{ChainError, CommandError, Error, Result, RoutineError};

// Re-export core domain types
pub use crate::core::Chain;

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
