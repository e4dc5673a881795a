//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for KaTeX → LaTeX conversion:
//! - Glyph and operator-name mappings
//! - KaTeX class names and stacking conventions

pub mod classes;
pub mod symbols;

// Re-export commonly used items
pub use symbols::{
    lookup_big_operator, lookup_function, lookup_symbol, operator_macro, BIG_OPERATORS,
    MATH_FUNCTIONS, SPECIAL_SYMBOLS,
};
