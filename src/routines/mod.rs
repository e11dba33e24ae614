//! Standalone string and matrix routines.
//!
//! Each routine is a pure function over a caller-owned buffer. None of them
//! keep state between calls or touch the [`Chain`](crate::core::Chain).

pub mod matrix;
pub mod strings;

pub use matrix::{rotate_matrix, zero_matrix};
pub use strings::{
    check_permutation, compress, is_palindrome_permutation, is_rotation, is_unique,
    one_edit_away, palindrome_permutations, urlify, urlify_str,
};
