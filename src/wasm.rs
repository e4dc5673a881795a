//! WASM bindings for katax
//!
//! This module provides JavaScript-accessible functions for KaTeX HTML → LaTeX conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::FormulaLatex;

/// KaTeX to LaTeX conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct K2LConvertOptions {
    /// Collapse whitespace and space out `=`, `+`, `-`, `*`, `,`
    #[serde(default = "default_true")]
    pub normalize_output: bool,
    /// Separate a control word from a following letter (`\alpha x`)
    #[serde(default = "default_true")]
    pub space_control_words: bool,
}

#[cfg(feature = "wasm")]
impl Default for K2LConvertOptions {
    fn default() -> Self {
        Self {
            normalize_output: true,
            space_control_words: true,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Conversion result for one formula of the page
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// Position of the formula in the page
    pub index: usize,
    /// Whether the formula is typeset in display mode
    pub display: bool,
    /// The recovered LaTeX
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl From<FormulaLatex> for ConvertResult {
    fn from(formula: FormulaLatex) -> Self {
        match formula.result {
            Ok(output) => ConvertResult {
                index: formula.index,
                display: formula.display,
                warnings: output.format_warnings(),
                output: output.content,
                success: true,
                error: None,
            },
            Err(e) => ConvertResult {
                index: formula.index,
                display: formula.display,
                output: String::new(),
                success: false,
                error: Some(format!("Conversion failed: {}", e)),
                warnings: vec![],
            },
        }
    }
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert every KaTeX formula in an HTML snippet to LaTeX
///
/// # Arguments
/// * `html` - HTML containing KaTeX output
///
/// # Returns
/// One LaTeX string per formula, in document order
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "htmlToLatex")]
pub fn html_to_latex_wasm(html: &str) -> Vec<String> {
    crate::html_to_latex(html)
        .iter()
        .map(|formula| formula.latex().to_string())
        .collect()
}

/// Convert every KaTeX formula in an HTML snippet with options
///
/// Returns an array of `ConvertResult` objects.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "htmlToLatexWithOptions")]
pub fn html_to_latex_with_options_wasm(html: &str, options: JsValue) -> JsValue {
    let opts: K2LConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    // Convert WASM options to internal K2LOptions
    let k2l_opts = crate::K2LOptions {
        normalize_output: opts.normalize_output,
        space_control_words: opts.space_control_words,
        ..Default::default()
    };

    let results: Vec<ConvertResult> = crate::html_to_latex_with_options(html, &k2l_opts)
        .into_iter()
        .map(ConvertResult::from)
        .collect();

    serde_wasm_bindgen::to_value(&results).unwrap_or(JsValue::NULL)
}

/// Check whether an HTML snippet contains KaTeX output
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "containsKatex")]
pub fn contains_katex_wasm(html: &str) -> bool {
    crate::contains_katex(html)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
