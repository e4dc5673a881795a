//! KaTeX class names and layout conventions
//!
//! The converter never looks at geometry magnitudes. Everything it knows about
//! the layout is encoded here: which classes mark which construct, and in which
//! document order KaTeX emits the entries of a vertical stack.

// Formula roots
pub const KATEX_DISPLAY: &str = "katex-display";
pub const KATEX_HTML: &str = "katex-html";

// Construct roles
pub const SQRT: &str = "sqrt";
pub const FRACTION: &str = "mfrac";
pub const SUPSUB: &str = "msupsub";
pub const SUP: &str = "msup";
pub const SUB: &str = "msub";
pub const OPERATOR: &str = "mop";
pub const OP_LIMITS: &str = "op-limits";
pub const OP_SYMBOL: &str = "op-symbol";
pub const ACCENT: &str = "accent";
pub const ORD: &str = "mord";

// Style wrappers
pub const MATHCAL: &str = "mathcal";
pub const MATHBB: &str = "mathbb";
pub const MATHRM: &str = "mathrm";
pub const TEXT: &str = "text";

// Vertical lists
pub const VLIST_T: &str = "vlist-t";
pub const VLIST_T2: &str = "vlist-t2";
pub const VLIST_R: &str = "vlist-r";
pub const VLIST: &str = "vlist";
pub const FRAC_LINE: &str = "frac-line";

// Script sizing
pub const SIZING: &str = "sizing";
/// Classes of the sizing wrapper around operator limits
pub const LIMIT_SIZING: &[&str] = &["sizing", "reset-size6", "size3"];

/// Which slot of `\frac{}{}` a stacked fraction entry is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FracSlot {
    Numerator,
    Denominator,
}

/// Slot receiving the first offset-bearing fraction entry in document order.
///
/// KaTeX lists the denominator before the numerator inside the fraction
/// `vlist`, so the first entry goes to the second argument of `\frac`.
pub const FRACTION_FIRST_ENTRY_SLOT: FracSlot = FracSlot::Denominator;

/// Whether the first offset-bearing entry of a two-entry script stack is the
/// subscript. Script stacks are listed bottom to top.
pub const SUPSUB_FIRST_ENTRY_IS_SUBSCRIPT: bool = true;
