//! Conversion context and options for KaTeX to LaTeX conversion
//!
//! This module handles options, warning collection, fragment joining and the
//! recursion guard.

use crate::utils::error::{ConversionWarning, WarningKind};

/// Options for KaTeX to LaTeX conversion
#[derive(Debug, Clone)]
pub struct K2LOptions {
    /// Normalize whitespace and space out `= + - * ,` in the final string
    pub normalize_output: bool,
    /// Separate a control word from a following letter (`\alpha x`).
    ///
    /// With this off, fragments are concatenated verbatim, so a symbol
    /// followed by a letter reads back as one longer control word
    /// (`\alphax`). Plain concatenation is still used everywhere else.
    pub space_control_words: bool,
    /// Maximum element nesting depth before a subtree is dropped
    pub max_depth: usize,
}

impl Default for K2LOptions {
    fn default() -> Self {
        Self {
            normalize_output: true,
            space_control_words: true,
            max_depth: 256,
        }
    }
}

impl K2LOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that return the reconstructed string untouched
    pub fn raw() -> Self {
        Self {
            normalize_output: false,
            ..Default::default()
        }
    }
}

/// Conversion state for one formula
pub struct ConvertContext {
    /// Conversion options
    pub options: K2LOptions,
    /// Collected warnings during conversion
    pub warnings: Vec<ConversionWarning>,
    /// Current element depth
    pub depth: usize,
}

impl ConvertContext {
    pub fn new(options: K2LOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
            depth: 0,
        }
    }

    /// Record a fallback taken inside `construct`
    pub fn missing(&mut self, construct: &'static str, message: impl Into<String>) {
        let warning =
            ConversionWarning::in_construct(WarningKind::MissingStructure, construct, message);
        log::debug!("{}", warning);
        self.warnings.push(warning);
    }

    /// Enter one element level. Returns false when the depth limit is hit.
    pub fn enter(&mut self) -> bool {
        if self.depth >= self.options.max_depth {
            if !self
                .warnings
                .iter()
                .any(|w| w.kind == WarningKind::RecursionLimit)
            {
                self.warnings.push(ConversionWarning::new(
                    WarningKind::RecursionLimit,
                    format!("nesting deeper than {} levels was dropped", self.options.max_depth),
                ));
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Append `fragment` to `out`, keeping control words intact
    pub fn join(&self, out: &mut String, fragment: &str) {
        if self.options.space_control_words
            && ends_with_control_word(out)
            && fragment.starts_with(|c: char| c.is_ascii_alphabetic())
        {
            out.push(' ');
        }
        out.push_str(fragment);
    }
}

impl Default for ConvertContext {
    fn default() -> Self {
        Self::new(K2LOptions::default())
    }
}

/// Whether `s` ends in `\name` with an alphabetic name
fn ends_with_control_word(s: &str) -> bool {
    let letters = s
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    letters > 0 && s[..s.len() - letters].ends_with('\\')
}
