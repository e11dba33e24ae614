//! Core chain engine for linkchain.
//!
//! This module contains the owned singly-linked chain and its node type.
//! These are pure in-memory structures with no I/O dependencies.

pub mod chain;
pub mod node;

pub use chain::{Chain, IntoIter, Iter};
