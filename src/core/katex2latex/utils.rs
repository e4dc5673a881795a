//! Output normalization for recovered LaTeX

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    /// Operators and separators that get one space on each side
    static ref SPACED_OPERATOR: Regex = Regex::new(r"\s*([=+\-*,])\s*").unwrap();
}

/// Normalize a reconstructed formula.
///
/// Collapses whitespace runs, puts exactly one space around `= + - * ,` and
/// trims the ends. Adjacent operators end up separated by a single space.
/// Applying it twice gives the same string.
pub fn normalize_latex(input: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(input, " ");
    let spaced = SPACED_OPERATOR.replace_all(&collapsed, " ${1} ");
    WHITESPACE_RUN.replace_all(&spaced, " ").trim().to_string()
}
