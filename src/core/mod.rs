//! Core conversion modules
//!
//! This module contains the conversion pipeline:
//! - `render_tree`: owned model of a KaTeX rendering
//! - `html`: KaTeX HTML parsing and formula discovery
//! - `katex2latex`: render tree to LaTeX converter

pub mod html;
pub mod katex2latex;
pub mod render_tree;

// Re-export main types and functions
pub use html::{
    find_formulas, formula_to_latex, html_to_latex, html_to_latex_with_options, parse_fragment,
    Formula, FormulaLatex,
};
pub use katex2latex::{
    convert, convert_with_diagnostics, convert_with_options, normalize_latex, try_convert,
    K2LOptions,
};
pub use render_tree::{Element, RenderNode};
