//! # katax
//!
//! Recover LaTeX source from KaTeX-rendered HTML.
//!
//! ## Features
//!
//! - **Structure Only**: Rebuilds LaTeX from the render tree layout, without
//!   reading KaTeX's embedded source annotation
//! - **Fractions, Roots, Scripts**: Recognizes KaTeX's stacked `vlist` layouts
//! - **Big Operators**: `\sum`, `\prod`, `\int` with limits
//! - **Page Scanning**: Finds every formula in an HTML page
//! - **Fault Isolation**: One broken formula never stops the others
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Converting a page
//!
//! ```rust
//! use katax::html_to_latex;
//!
//! let html = r#"<span class="katex"><span class="katex-html"><span class="base">
//!     <span class="mord">a</span><span class="mrel">=</span><span class="mord">b</span>
//! </span></span></span>"#;
//!
//! let formulas = html_to_latex(html);
//! assert_eq!(formulas[0].latex(), "a = b");
//! ```
//!
//! ### Converting a tree
//!
//! ```rust
//! use katax::render_tree::{span, text};
//! use katax::katex_to_latex;
//!
//! let root = span("katex", vec![span("katex-html", vec![span("mord", vec![text("α")])])]);
//! assert_eq!(katex_to_latex(&root), r"\alpha");
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use core::katex2latex;
pub use core::render_tree;
pub use core::{
    convert_with_diagnostics, convert_with_options, find_formulas, formula_to_latex,
    html_to_latex, html_to_latex_with_options, normalize_latex, parse_fragment, try_convert,
    Element, Formula, FormulaLatex, K2LOptions, RenderNode,
};

// Re-export symbol data
pub use data::classes;
pub use data::symbols;

// Re-export utilities
pub use utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};

/// Convert one KaTeX formula tree to LaTeX
///
/// # Arguments
/// * `root` - The `.katex` element of one formula
///
/// # Returns
/// LaTeX source, or an empty string when the tree has no `.katex-html` part
pub fn katex_to_latex(root: &RenderNode) -> String {
    core::convert(root)
}

/// Convert the first formula of an HTML snippet
///
/// Returns an empty string when the snippet holds no formula or the formula
/// could not be converted.
pub fn first_formula_to_latex(html: &str) -> String {
    formula_to_latex(html, 0, &K2LOptions::default())
        .map(|output| output.content)
        .unwrap_or_default()
}

/// Detect whether an HTML snippet contains KaTeX output
pub fn contains_katex(html: &str) -> bool {
    !find_formulas(html).is_empty()
}
