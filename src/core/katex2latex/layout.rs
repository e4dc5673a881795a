//! Typed accessors for KaTeX stacked layouts
//!
//! Each construct hides its interesting children a few `vlist` levels down.
//! These functions locate them and return `Option`s or small enums, so every
//! "structure not found" case is an explicit branch at the call site.

use crate::core::render_tree::Element;
use crate::data::classes::{self, SUPSUB_FIRST_ENTRY_IS_SUBSCRIPT};

/// First descendant matching `pred` whose parent carries `parent_class`.
/// `el` itself counts as a parent.
fn find_child_of<'a, F>(el: &'a Element, parent_class: &str, pred: F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool + Copy,
{
    let parent_matches = el.has_class(parent_class);
    for child in el.child_elements() {
        if parent_matches && pred(child) {
            return Some(child);
        }
        if let Some(found) = find_child_of(child, parent_class, pred) {
            return Some(found);
        }
    }
    None
}

/// First descendant carrying `class` that sits somewhere below an element
/// carrying `ancestor_class`. `el` itself counts as an ancestor.
fn find_inside<'a>(el: &'a Element, ancestor_class: &str, class: &str) -> Option<&'a Element> {
    fn walk<'a>(el: &'a Element, inside: bool, ancestor: &str, class: &str) -> Option<&'a Element> {
        let inside = inside || el.has_class(ancestor);
        for child in el.child_elements() {
            if inside && child.has_class(class) {
                return Some(child);
            }
            if let Some(found) = walk(child, inside, ancestor, class) {
                return Some(found);
            }
        }
        None
    }
    walk(el, false, ancestor_class, class)
}

/// Content of a square root: the first `mord` inside the first `vlist-r`
pub fn sqrt_body(el: &Element) -> Option<&Element> {
    find_inside(el, classes::VLIST_R, classes::ORD)
}

/// The two offset-bearing fraction entries, in document order.
///
/// The fraction rule entry is skipped. Returns `None` when fewer than two
/// entries are present.
pub fn fraction_entries(el: &Element) -> Option<(&Element, &Element)> {
    let stack = find_child_of(el, classes::VLIST_R, |e| e.has_class(classes::VLIST))?;
    let mut entries = stack
        .child_elements()
        .filter(|e| e.has_offset() && !e.contains_class(classes::FRAC_LINE));
    let first = entries.next()?;
    let second = entries.next()?;
    Some((first, second))
}

/// Shape of a sub/superscript group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupSubLayout<'a> {
    Both { sub: &'a Element, sup: &'a Element },
    SubOnly(&'a Element),
    SupOnly(&'a Element),
    /// No vertical list or no offset entry
    Unrecognized,
}

/// Locate the script entries of an `msupsub` group.
///
/// KaTeX uses a two-row `vlist-t2` list whenever a subscript is present and a
/// plain `vlist-t` for superscript-only groups. Entries are listed bottom to
/// top.
pub fn supsub_layout(el: &Element) -> SupSubLayout<'_> {
    let Some(vlist_t) = el.find_class(classes::VLIST_T) else {
        return SupSubLayout::Unrecognized;
    };
    let first_entry = || find_child_of(vlist_t, classes::VLIST, Element::has_offset);

    if vlist_t.has_class(classes::VLIST_T2) {
        let entries: Vec<&Element> = vlist_t
            .find_class(classes::VLIST_R)
            .and_then(|r| r.find_class(classes::VLIST))
            .map(|stack| stack.child_elements().filter(|e| e.has_offset()).collect())
            .unwrap_or_default();

        if entries.len() >= 2 {
            let (first, last) = (entries[0], entries[entries.len() - 1]);
            return if SUPSUB_FIRST_ENTRY_IS_SUBSCRIPT {
                SupSubLayout::Both { sub: first, sup: last }
            } else {
                SupSubLayout::Both { sub: last, sup: first }
            };
        }
        match first_entry() {
            Some(sub) => SupSubLayout::SubOnly(sub),
            None => SupSubLayout::Unrecognized,
        }
    } else {
        match first_entry() {
            Some(sup) => SupSubLayout::SupOnly(sup),
            None => SupSubLayout::Unrecognized,
        }
    }
}

/// Content of a bare `msup`/`msub`: the first `sizing` wrapper inside a `vlist-t`
pub fn script_body(el: &Element) -> Option<&Element> {
    find_inside(el, classes::VLIST_T, classes::SIZING)
}

/// Symbol and limit entries of a big operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorLimits<'a> {
    /// Trimmed operator glyph or name
    pub symbol: String,
    /// Entry below the symbol
    pub sub: Option<&'a Element>,
    /// Entry above the symbol
    pub sup: Option<&'a Element>,
}

/// Split an `op-limits` operator into symbol and limits.
///
/// Stack entries are `[sub] [symbol] [sup]` in document order; either limit
/// may be absent.
pub fn operator_limits(el: &Element) -> OperatorLimits<'_> {
    let symbol_el = el.find_class(classes::OP_SYMBOL);
    let symbol = symbol_el
        .map(|s| s.text().trim().to_string())
        .unwrap_or_default();

    let stack = el
        .find_descendant(|e| e.has_classes(&[classes::VLIST_T, classes::VLIST_T2]))
        .and_then(|t| t.find_class(classes::VLIST_R))
        .and_then(|r| r.find_class(classes::VLIST));

    let (sub, sup) = match (stack, symbol_el) {
        (Some(stack), Some(_)) => {
            let spans: Vec<&Element> = stack.child_elements().filter(|e| e.tag == "span").collect();
            match spans.iter().position(|s| s.contains_class(classes::OP_SYMBOL)) {
                Some(idx) => (
                    idx.checked_sub(1).map(|i| spans[i]),
                    spans.get(idx + 1).copied(),
                ),
                None => (None, None),
            }
        }
        _ => (None, None),
    };

    OperatorLimits { symbol, sub, sup }
}

/// The sizing wrapper of a limit entry, or the entry itself
pub fn limit_body(entry: &Element) -> &Element {
    entry
        .find_descendant(|e| e.has_classes(classes::LIMIT_SIZING))
        .unwrap_or(entry)
}

/// Base of an accent: the first `mord` descendant
pub fn accent_base(el: &Element) -> Option<&Element> {
    el.find_class(classes::ORD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render_tree::{offset_span, span, text, RenderNode};

    fn el(node: &RenderNode) -> &Element {
        node.as_element().unwrap()
    }

    #[test]
    fn test_fraction_entries_skip_rule() {
        let node = span(
            "mfrac",
            vec![span(
                "vlist-t vlist-t2",
                vec![span(
                    "vlist-r",
                    vec![span(
                        "vlist",
                        vec![
                            offset_span("", "-2.655em", vec![text("a")]),
                            offset_span("", "-3.23em", vec![span("frac-line", vec![])]),
                            offset_span("", "-3.394em", vec![text("b")]),
                        ],
                    )],
                )],
            )],
        );
        let (first, second) = fraction_entries(el(&node)).unwrap();
        assert_eq!(first.text(), "a");
        assert_eq!(second.text(), "b");
    }

    #[test]
    fn test_fraction_entries_missing() {
        let node = span(
            "mfrac",
            vec![span(
                "vlist-r",
                vec![span("vlist", vec![offset_span("", "-2em", vec![text("a")])])],
            )],
        );
        assert!(fraction_entries(el(&node)).is_none());
        assert!(fraction_entries(el(&span("mfrac", vec![]))).is_none());
    }

    #[test]
    fn test_supsub_plain_vlist_is_superscript() {
        let node = span(
            "msupsub",
            vec![span(
                "vlist-t",
                vec![span(
                    "vlist-r",
                    vec![span("vlist", vec![offset_span("", "-3.063em", vec![text("2")])])],
                )],
            )],
        );
        match supsub_layout(el(&node)) {
            SupSubLayout::SupOnly(sup) => assert_eq!(sup.text(), "2"),
            other => panic!("expected superscript, got {:?}", other),
        }
    }

    #[test]
    fn test_supsub_without_vlist() {
        let node = span("msupsub", vec![text("x")]);
        assert_eq!(supsub_layout(el(&node)), SupSubLayout::Unrecognized);
    }

    #[test]
    fn test_operator_limits_positions() {
        let node = span(
            "mop op-limits",
            vec![span(
                "vlist-t vlist-t2",
                vec![span(
                    "vlist-r",
                    vec![span(
                        "vlist",
                        vec![
                            offset_span("", "-1.88em", vec![text("low")]),
                            offset_span("", "-3.05em", vec![span("mop op-symbol", vec![text("∑")])]),
                        ],
                    )],
                )],
            )],
        );
        let limits = operator_limits(el(&node));
        assert_eq!(limits.symbol, "∑");
        assert_eq!(limits.sub.map(Element::text).as_deref(), Some("low"));
        assert!(limits.sup.is_none());
    }

    #[test]
    fn test_operator_limits_without_stack() {
        let node = span("mop op-limits", vec![span("mop op-symbol", vec![text(" ∫ ")])]);
        let limits = operator_limits(el(&node));
        assert_eq!(limits.symbol, "∫");
        assert!(limits.sub.is_none() && limits.sup.is_none());
    }

    #[test]
    fn test_limit_body_prefers_sizing() {
        let node = span(
            "",
            vec![
                span("pstrut", vec![]),
                span("sizing reset-size6 size3 mtight", vec![text("n")]),
            ],
        );
        assert!(limit_body(el(&node)).has_class("sizing"));

        let bare = span("", vec![text("n")]);
        assert_eq!(limit_body(el(&bare)), el(&bare));
    }

    #[test]
    fn test_sqrt_body_inside_vlist() {
        let node = span(
            "sqrt",
            vec![span(
                "vlist-t vlist-t2",
                vec![span(
                    "vlist-r",
                    vec![span(
                        "vlist",
                        vec![offset_span(
                            "svg-align",
                            "-3em",
                            vec![span("pstrut", vec![]), span("mord", vec![text("x")])],
                        )],
                    )],
                )],
            )],
        );
        assert_eq!(sqrt_body(el(&node)).unwrap().text(), "x");
        assert!(sqrt_body(el(&span("sqrt", vec![span("mord", vec![])]))).is_none());
    }
}
