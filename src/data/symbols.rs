//! Glyph and operator-name mappings
//!
//! Static tables mapping what KaTeX actually prints (a glyph or an operator
//! name) back to the LaTeX spelling that produces it.

use phf::phf_map;

/// Rendered glyph to LaTeX mapping for text leaves
pub static SPECIAL_SYMBOLS: phf::Map<&'static str, &'static str> = phf_map! {
    // Lowercase Greek
    "α" => "\\alpha",
    "β" => "\\beta",
    "γ" => "\\gamma",
    "δ" => "\\delta",
    "ε" => "\\epsilon",
    "ϵ" => "\\epsilon",
    "ζ" => "\\zeta",
    "η" => "\\eta",
    "θ" => "\\theta",
    "ι" => "\\iota",
    "κ" => "\\kappa",
    "λ" => "\\lambda",
    "μ" => "\\mu",
    "ν" => "\\nu",
    "ξ" => "\\xi",
    "π" => "\\pi",
    "ρ" => "\\rho",
    "σ" => "\\sigma",
    "τ" => "\\tau",
    "υ" => "\\upsilon",
    "φ" => "\\phi",
    "ϕ" => "\\phi",
    "χ" => "\\chi",
    "ψ" => "\\psi",
    "ω" => "\\omega",

    // Uppercase Greek (the ones that differ from Latin capitals)
    "Γ" => "\\Gamma",
    "Δ" => "\\Delta",
    "Θ" => "\\Theta",
    "Λ" => "\\Lambda",
    "Ξ" => "\\Xi",
    "Π" => "\\Pi",
    "Σ" => "\\Sigma",
    "Υ" => "\\Upsilon",
    "Φ" => "\\Phi",
    "Ψ" => "\\Psi",
    "Ω" => "\\Omega",

    // Operators and relations
    "∗" => "*",
    "−" => "-",
    "×" => "\\times",
    "⋅" => "\\cdot",
    "·" => "\\cdot",
    "÷" => "\\div",
    "±" => "\\pm",
    "∓" => "\\mp",
    "≤" => "\\leq",
    "≥" => "\\geq",
    "≠" => "\\neq",
    "≈" => "\\approx",
    "≡" => "\\equiv",
    "∼" => "\\sim",
    "∝" => "\\propto",
    "→" => "\\to",
    "←" => "\\leftarrow",
    "⇒" => "\\Rightarrow",
    "⇔" => "\\Leftrightarrow",
    "∈" => "\\in",
    "∉" => "\\notin",
    "⊂" => "\\subset",
    "⊆" => "\\subseteq",
    "∪" => "\\cup",
    "∩" => "\\cap",
    "∀" => "\\forall",
    "∃" => "\\exists",

    // Miscellaneous
    "∞" => "\\infty",
    "∂" => "\\partial",
    "∇" => "\\nabla",
    "∅" => "\\emptyset",
    "ℓ" => "\\ell",
    "′" => "'",
    "…" => "\\ldots",
    "⋯" => "\\cdots",
};

/// Operator names KaTeX prints as upright text
pub static MATH_FUNCTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "log" => "\\log",
    "sin" => "\\sin",
    "cos" => "\\cos",
    "tan" => "\\tan",
    "lim" => "\\lim",
    "max" => "\\max",
    "min" => "\\min",
    "exp" => "\\exp",
    "sum" => "\\sum",
    "prod" => "\\prod",
    "det" => "\\det",
    "rank" => "\\rank",
};

/// Big operator glyphs that take limits
pub static BIG_OPERATORS: phf::Map<&'static str, &'static str> = phf_map! {
    "∑" => "\\sum",
    "∏" => "\\prod",
    "∫" => "\\int",
};

/// Look up the LaTeX spelling of a rendered glyph
#[inline]
pub fn lookup_symbol(glyph: &str) -> Option<&'static str> {
    SPECIAL_SYMBOLS.get(glyph).copied()
}

/// Look up the LaTeX spelling of an operator name
#[inline]
pub fn lookup_function(name: &str) -> Option<&'static str> {
    MATH_FUNCTIONS.get(name).copied()
}

/// Look up the LaTeX spelling of a big-operator glyph
#[inline]
pub fn lookup_big_operator(glyph: &str) -> Option<&'static str> {
    BIG_OPERATORS.get(glyph).copied()
}

/// Resolve the macro for an operator-with-limits symbol.
///
/// Big-operator glyphs first, then operator names, then the symbol itself.
pub fn operator_macro(symbol: &str) -> &str {
    lookup_big_operator(symbol)
        .or_else(|| lookup_function(symbol))
        .unwrap_or(symbol)
}
