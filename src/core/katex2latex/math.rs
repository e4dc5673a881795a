//! Recursive reconstruction of LaTeX from a KaTeX render tree
//!
//! Every node is classified first, then handled by the rule for its role.
//! Rules call back into [`reconstruct`] for their children.

use super::classify::{classify, NodeRole};
use super::context::ConvertContext;
use super::layout::{self, SupSubLayout};
use crate::core::render_tree::{Element, RenderNode};
use crate::data::classes::{FracSlot, FRACTION_FIRST_ENTRY_SLOT};
use crate::data::symbols::{lookup_function, lookup_symbol, operator_macro};

/// Reconstruct the LaTeX fragment for one node
pub fn reconstruct(node: &RenderNode, ctx: &mut ConvertContext) -> String {
    match classify(node) {
        NodeRole::Text(t) => convert_text(t),
        NodeRole::Ignored => String::new(),
        role => {
            if !ctx.enter() {
                return String::new();
            }
            let out = convert_element(role, ctx);
            ctx.leave();
            out
        }
    }
}

/// Reconstruct and concatenate the children of `el`
pub fn reconstruct_children(el: &Element, ctx: &mut ConvertContext) -> String {
    let mut out = String::new();
    for child in &el.children {
        let fragment = reconstruct(child, ctx);
        ctx.join(&mut out, &fragment);
    }
    out
}

/// Text leaf: mapped glyph or trimmed text
fn convert_text(text: &str) -> String {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{200b}');
    match lookup_symbol(trimmed) {
        Some(latex) => latex.to_string(),
        None => trimmed.to_string(),
    }
}

fn convert_element(role: NodeRole<'_>, ctx: &mut ConvertContext) -> String {
    match role {
        NodeRole::SquareRoot(el) => convert_sqrt(el, ctx),
        NodeRole::Fraction(el) => convert_fraction(el, ctx),
        NodeRole::SupSubGroup(el) => convert_supsub(el, ctx),
        NodeRole::BareSuperscript(el) => convert_bare_script(el, "^", ctx),
        NodeRole::BareSubscript(el) => convert_bare_script(el, "_", ctx),
        NodeRole::LimitsOperator(el) => convert_limits_operator(el, ctx),
        NodeRole::Operator(el) => {
            let name = el.text();
            let name = name.trim();
            lookup_function(name).unwrap_or(name).to_string()
        }
        NodeRole::Accent(el) => {
            let base = match layout::accent_base(el) {
                Some(base) => reconstruct_children(base, ctx),
                None => {
                    ctx.missing("accent", "no base");
                    String::new()
                }
            };
            format!("\\hat{{{}}}", base)
        }
        NodeRole::Styled(style, el) => {
            format!("{}{{{}}}", style.command(), reconstruct_children(el, ctx))
        }
        NodeRole::Unknown(el) => {
            if el.children.is_empty() {
                el.text().trim().to_string()
            } else {
                reconstruct_children(el, ctx)
            }
        }
        NodeRole::Text(t) => convert_text(t),
        NodeRole::Ignored => String::new(),
    }
}

fn convert_sqrt(el: &Element, ctx: &mut ConvertContext) -> String {
    let body = match layout::sqrt_body(el) {
        Some(body) => reconstruct_children(body, ctx),
        None => {
            ctx.missing("sqrt", "no radicand");
            String::new()
        }
    };
    format!("\\sqrt{{{}}}", body)
}

fn convert_fraction(el: &Element, ctx: &mut ConvertContext) -> String {
    let Some((first, second)) = layout::fraction_entries(el) else {
        ctx.missing("fraction", "fewer than two stacked entries");
        return "\\frac{}{}".to_string();
    };
    let first = reconstruct_children(first, ctx);
    let second = reconstruct_children(second, ctx);
    let (numerator, denominator) = match FRACTION_FIRST_ENTRY_SLOT {
        FracSlot::Denominator => (second, first),
        FracSlot::Numerator => (first, second),
    };
    format!("\\frac{{{}}}{{{}}}", numerator, denominator)
}

fn convert_supsub(el: &Element, ctx: &mut ConvertContext) -> String {
    match layout::supsub_layout(el) {
        SupSubLayout::Both { sub, sup } => {
            let sup = reconstruct_children(sup, ctx);
            let sub = reconstruct_children(sub, ctx);
            format!("^{{{}}}_{{{}}}", sup, sub)
        }
        SupSubLayout::SubOnly(sub) => format!("_{{{}}}", reconstruct_children(sub, ctx)),
        SupSubLayout::SupOnly(sup) => format!("^{{{}}}", reconstruct_children(sup, ctx)),
        SupSubLayout::Unrecognized => {
            ctx.missing("msupsub", "no script entries, passing children through");
            reconstruct_children(el, ctx)
        }
    }
}

fn convert_bare_script(el: &Element, marker: &str, ctx: &mut ConvertContext) -> String {
    let body = match layout::script_body(el) {
        Some(body) => reconstruct_children(body, ctx),
        None => {
            ctx.missing("script", "no sizing wrapper");
            String::new()
        }
    };
    format!("{}{{{}}}", marker, body)
}

fn convert_limits_operator(el: &Element, ctx: &mut ConvertContext) -> String {
    let limits = layout::operator_limits(el);
    let mut limit = |entry: Option<&Element>| -> String {
        entry
            .map(|e| reconstruct_children(layout::limit_body(e), ctx).trim().to_string())
            .unwrap_or_default()
    };
    let sub = limit(limits.sub);
    let sup = limit(limits.sup);

    let mut out = operator_macro(&limits.symbol).to_string();
    if !sub.is_empty() {
        out.push_str(&format!("_{{{}}}", sub));
    }
    if !sup.is_empty() {
        out.push_str(&format!("^{{{}}}", sup));
    }
    out
}
