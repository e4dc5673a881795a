//! KaTeX HTML front-end
//!
//! Parses KaTeX output with `scraper`, finds the formulas on a page and turns
//! each one into an owned [`RenderNode`] tree for the converter.

use crate::core::katex2latex::{self, K2LOptions};
use crate::core::render_tree::{Element, RenderNode};
use crate::data::classes;
use crate::utils::error::{ConversionError, ConversionOutput, ConversionResult};
use fxhash::FxHashSet;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Node, Selector};

lazy_static! {
    static ref FORMULA_SELECTOR: Selector = Selector::parse(".katex-display, .katex").unwrap();
}

/// Deepest element level copied into a render tree. Elements below it are
/// replaced by [`RenderNode::Other`]; KaTeX output nests far less than this.
pub const MAX_TREE_DEPTH: usize = 512;

/// One formula found in a page
#[derive(Debug, Clone)]
pub struct Formula {
    /// Position among the formulas of the page
    pub index: usize,
    /// Whether the formula is typeset in display mode
    pub display: bool,
    /// The `.katex` (or `.katex-display`) element
    pub root: RenderNode,
}

/// Conversion outcome for one formula of a page
#[derive(Debug, Clone)]
pub struct FormulaLatex {
    pub index: usize,
    pub display: bool,
    pub result: ConversionResult<ConversionOutput>,
}

impl FormulaLatex {
    /// Recovered LaTeX, empty when the conversion failed
    pub fn latex(&self) -> &str {
        match &self.result {
            Ok(output) => &output.content,
            Err(_) => "",
        }
    }
}

/// Parse an HTML fragment into a render tree
pub fn parse_fragment(html: &str) -> RenderNode {
    let doc = Html::parse_fragment(html);
    RenderNode::Element(convert_element(doc.root_element(), 0))
}

/// Find every formula in an HTML page or fragment, in document order.
///
/// A `.katex` nested inside an already reported `.katex-display` is not
/// reported again; the display wrapper stands for it.
pub fn find_formulas(html: &str) -> Vec<Formula> {
    let doc = Html::parse_document(html);
    let mut registered = FxHashSet::default();
    let mut formulas = Vec::new();

    for el in doc.select(&FORMULA_SELECTOR) {
        let nested = el
            .ancestors()
            .any(|ancestor| registered.contains(&ancestor.id()));
        if nested || !registered.insert(el.id()) {
            continue;
        }

        let display = el
            .value()
            .attr("class")
            .map_or(false, |c| c.split_whitespace().any(|c| c == classes::KATEX_DISPLAY));
        formulas.push(Formula {
            index: formulas.len(),
            display,
            root: RenderNode::Element(convert_element(el, 0)),
        });
    }

    log::debug!("found {} formula(s)", formulas.len());
    formulas
}

/// Convert every formula in `html` with default options
pub fn html_to_latex(html: &str) -> Vec<FormulaLatex> {
    html_to_latex_with_options(html, &K2LOptions::default())
}

/// Convert every formula in `html`. Each formula is converted in isolation:
/// a fault in one becomes an error entry and the rest still convert.
pub fn html_to_latex_with_options(html: &str, options: &K2LOptions) -> Vec<FormulaLatex> {
    find_formulas(html)
        .into_iter()
        .map(|formula| FormulaLatex {
            index: formula.index,
            display: formula.display,
            result: katex2latex::try_convert(&formula.root, options),
        })
        .collect()
}

/// Convert the formula at `index`
pub fn formula_to_latex(
    html: &str,
    index: usize,
    options: &K2LOptions,
) -> ConversionResult<ConversionOutput> {
    let formulas = find_formulas(html);
    let available = formulas.len();
    let formula = formulas
        .into_iter()
        .nth(index)
        .ok_or_else(|| ConversionError::not_found(index, available))?;
    katex2latex::try_convert(&formula.root, options)
}

/// Copy `el` into an owned element. `depth` is the level of `el` below the
/// tree root.
fn convert_element(el: ElementRef<'_>, depth: usize) -> Element {
    let value = el.value();
    let classes = value
        .attr("class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    let offset = value.attr("style").and_then(top_declaration);

    let children = el
        .children()
        .map(|child| match child.value() {
            Node::Text(t) => {
                let s: &str = t;
                RenderNode::Text(s.to_string())
            }
            Node::Element(_) if depth >= MAX_TREE_DEPTH => {
                log::warn!(
                    "dropping elements nested deeper than {} levels",
                    MAX_TREE_DEPTH
                );
                RenderNode::Other
            }
            Node::Element(_) => match ElementRef::wrap(child) {
                Some(child_el) => RenderNode::Element(convert_element(child_el, depth + 1)),
                None => RenderNode::Other,
            },
            _ => RenderNode::Other,
        })
        .collect();

    Element {
        tag: value.name().to_string(),
        classes,
        offset,
        children,
    }
}

/// Value of the `top` declaration in an inline style
fn top_declaration(style: &str) -> Option<String> {
    style.split(';').find_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        if name.trim().eq_ignore_ascii_case("top") {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}
