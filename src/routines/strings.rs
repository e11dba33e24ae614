//! Character-frequency string routines.
//!
//! All routines work on Unicode scalar values (`char`), not bytes.

use crate::error::RoutineError;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::Write;

/// Returns `true` if no character occurs more than once.
///
/// # Examples
///
/// ```
/// use linkchain::routines::is_unique;
///
/// assert!(is_unique("martin"));
/// assert!(!is_unique("matija"));
/// ```
#[must_use]
pub fn is_unique(input: &str) -> bool {
    let mut seen = HashSet::new();
    input.chars().all(|c| seen.insert(c))
}

/// Returns `true` if `a` is a permutation (anagram) of `b`.
///
/// Counts go up for `a` and down for `b`; anagrams leave every count at zero.
#[must_use]
pub fn check_permutation(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    let mut counts: HashMap<char, i64> = HashMap::new();
    for c in a.chars() {
        *counts.entry(c).or_default() += 1;
    }
    for c in b.chars() {
        *counts.entry(c).or_default() -= 1;
    }

    counts.values().all(|&count| count == 0)
}

/// Replaces every space in `buffer[..true_len]` with `%20`, in place.
///
/// The buffer must already have room for the expansion at its end. Works
/// backward from the last logical character so nothing is overwritten before
/// it is moved. Returns the expanded length.
///
/// # Errors
///
/// Returns [`RoutineError::TrueLengthOutOfBounds`] if `true_len` exceeds the
/// buffer, or [`RoutineError::BufferTooSmall`] if the expansion doesn't fit.
pub fn urlify(buffer: &mut [char], true_len: usize) -> Result<usize, RoutineError> {
    if true_len > buffer.len() {
        return Err(RoutineError::TrueLengthOutOfBounds {
            true_len,
            buffer_len: buffer.len(),
        });
    }

    let spaces = buffer[..true_len].iter().filter(|&&c| c == ' ').count();
    let expanded = true_len + 2 * spaces;
    if expanded > buffer.len() {
        return Err(RoutineError::BufferTooSmall {
            needed: expanded,
            available: buffer.len(),
        });
    }

    let mut write = expanded;
    for read in (0..true_len).rev() {
        if buffer[read] == ' ' {
            buffer[write - 3..write].copy_from_slice(&['%', '2', '0']);
            write -= 3;
        } else {
            buffer[write - 1] = buffer[read];
            write -= 1;
        }
    }

    Ok(expanded)
}

/// Convenience wrapper around [`urlify`] for string input.
///
/// `input` carries its own trailing room; the result is the expanded logical
/// content without that padding.
///
/// # Errors
///
/// Same as [`urlify`].
pub fn urlify_str(input: &str, true_len: usize) -> Result<String, RoutineError> {
    let mut buffer: Vec<char> = input.chars().collect();
    let expanded = urlify(&mut buffer, true_len)?;
    Ok(buffer[..expanded].iter().collect())
}

/// Run-length compresses repeated characters (`aaabbc` becomes `a3b2c1`).
///
/// The compressed form is returned only when it is strictly shorter than the
/// input; otherwise the input comes back unchanged.
#[must_use]
pub fn compress(input: &str) -> String {
    let mut chars = input.chars();
    let Some(mut current) = chars.next() else {
        return String::new();
    };

    let mut compressed = String::new();
    let mut run = 1usize;
    for c in chars {
        if c == current {
            run += 1;
        } else {
            let _ = write!(compressed, "{current}{run}");
            current = c;
            run = 1;
        }
    }
    let _ = write!(compressed, "{current}{run}");

    if compressed.chars().count() < input.chars().count() {
        compressed
    } else {
        input.to_string()
    }
}

/// Letter counts with whitespace dropped and case folded.
fn letter_counts(input: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
    {
        *counts.entry(c).or_default() += 1;
    }
    counts
}

/// Returns `true` if the letters of `input` can be rearranged into a palindrome.
///
/// Whitespace is ignored and comparison is case-insensitive.
#[must_use]
pub fn is_palindrome_permutation(input: &str) -> bool {
    letter_counts(input)
        .values()
        .filter(|&&count| count % 2 == 1)
        .count()
        <= 1
}

/// Enumerates every distinct palindrome that uses all letters of `input`.
///
/// Whitespace is ignored and letters are lowercased. The result is sorted;
/// it is empty when no palindrome exists. An input with no letters yields a
/// single empty palindrome.
///
/// # Examples
///
/// ```
/// use linkchain::routines::palindrome_permutations;
///
/// assert_eq!(palindrome_permutations("aabb"), vec!["abba", "baab"]);
/// assert!(palindrome_permutations("Tact Coa").contains(&"tacocat".to_string()));
/// ```
#[must_use]
pub fn palindrome_permutations(input: &str) -> Vec<String> {
    let counts = letter_counts(input);

    let mut middle = None;
    let mut half: Vec<(char, usize)> = Vec::with_capacity(counts.len());
    for (&c, &count) in &counts {
        if count % 2 == 1 {
            if middle.is_some() {
                return Vec::new();
            }
            middle = Some(c);
        }
        half.push((c, count / 2));
    }

    let half_len = half.iter().map(|&(_, count)| count).sum();
    let mut results = Vec::new();
    let mut prefix = String::with_capacity(half_len);
    expand_halves(&mut half, half_len, &mut prefix, &mut |left: &str| {
        let mut palindrome = left.to_string();
        palindrome.extend(middle);
        palindrome.extend(left.chars().rev());
        results.push(palindrome);
    });
    results
}

/// Emits every distinct arrangement of the remaining counts, in sorted order.
fn expand_halves(
    counts: &mut [(char, usize)],
    remaining: usize,
    prefix: &mut String,
    emit: &mut impl FnMut(&str),
) {
    if remaining == 0 {
        emit(prefix);
        return;
    }

    for i in 0..counts.len() {
        if counts[i].1 == 0 {
            continue;
        }
        counts[i].1 -= 1;
        prefix.push(counts[i].0);
        expand_halves(counts, remaining - 1, prefix, emit);
        prefix.pop();
        counts[i].1 += 1;
    }
}

/// Returns `true` if `a` and `b` are at most one edit apart.
///
/// An edit is inserting, removing, or replacing a single character.
#[must_use]
pub fn one_edit_away(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if longer.len() - shorter.len() > 1 {
        return false;
    }

    let same_length = shorter.len() == longer.len();
    let (mut i, mut j) = (0, 0);
    let mut edited = false;
    while i < shorter.len() && j < longer.len() {
        if shorter[i] == longer[j] {
            i += 1;
        } else {
            if edited {
                return false;
            }
            edited = true;
            if same_length {
                i += 1;
            }
        }
        j += 1;
    }

    true
}

/// Returns `true` if `b` is a rotation of `a` (`waterbottle` / `erbottlewat`).
#[must_use]
pub fn is_rotation(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.repeat(2).contains(b)
}
