//! Node classification
//!
//! Maps the open set of KaTeX classes on a node to one closed role, so the
//! reconstruction dispatch is an exhaustive match.

use crate::core::render_tree::{Element, RenderNode};
use crate::data::classes;

/// LaTeX wrapper emitted for a styled run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Calligraphic,
    BlackboardBold,
    Roman,
    Text,
}

impl TextStyle {
    pub fn command(self) -> &'static str {
        match self {
            TextStyle::Calligraphic => "\\mathcal",
            TextStyle::BlackboardBold => "\\mathbb",
            TextStyle::Roman => "\\mathrm",
            TextStyle::Text => "\\text",
        }
    }
}

/// Structural role of a render node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole<'a> {
    /// Text leaf
    Text(&'a str),
    /// Comment or other non-content node
    Ignored,
    SquareRoot(&'a Element),
    Fraction(&'a Element),
    SupSubGroup(&'a Element),
    BareSuperscript(&'a Element),
    BareSubscript(&'a Element),
    LimitsOperator(&'a Element),
    Operator(&'a Element),
    Accent(&'a Element),
    Styled(TextStyle, &'a Element),
    /// Any other element
    Unknown(&'a Element),
}

/// Ordered role table. The first matching class wins.
const ELEMENT_ROLES: &[(&str, ElementRole)] = &[
    (classes::SQRT, ElementRole::SquareRoot),
    (classes::FRACTION, ElementRole::Fraction),
    (classes::SUPSUB, ElementRole::SupSubGroup),
    (classes::SUP, ElementRole::BareSuperscript),
    (classes::SUB, ElementRole::BareSubscript),
    (classes::OPERATOR, ElementRole::Operator),
    (classes::ACCENT, ElementRole::Accent),
    (classes::MATHCAL, ElementRole::Styled(TextStyle::Calligraphic)),
    (classes::MATHBB, ElementRole::Styled(TextStyle::BlackboardBold)),
    (classes::MATHRM, ElementRole::Styled(TextStyle::Roman)),
    (classes::TEXT, ElementRole::Styled(TextStyle::Text)),
];

#[derive(Debug, Clone, Copy)]
enum ElementRole {
    SquareRoot,
    Fraction,
    SupSubGroup,
    BareSuperscript,
    BareSubscript,
    Operator,
    Accent,
    Styled(TextStyle),
}

/// Classify a node
pub fn classify(node: &RenderNode) -> NodeRole<'_> {
    match node {
        RenderNode::Text(t) => NodeRole::Text(t),
        RenderNode::Other => NodeRole::Ignored,
        RenderNode::Element(el) => classify_element(el),
    }
}

fn classify_element(el: &Element) -> NodeRole<'_> {
    let role = ELEMENT_ROLES
        .iter()
        .find(|(class, _)| el.has_class(class))
        .map(|(_, role)| *role);

    match role {
        Some(ElementRole::SquareRoot) => NodeRole::SquareRoot(el),
        Some(ElementRole::Fraction) => NodeRole::Fraction(el),
        Some(ElementRole::SupSubGroup) => NodeRole::SupSubGroup(el),
        Some(ElementRole::BareSuperscript) => NodeRole::BareSuperscript(el),
        Some(ElementRole::BareSubscript) => NodeRole::BareSubscript(el),
        Some(ElementRole::Operator) if el.has_class(classes::OP_LIMITS) => {
            NodeRole::LimitsOperator(el)
        }
        Some(ElementRole::Operator) => NodeRole::Operator(el),
        Some(ElementRole::Accent) => NodeRole::Accent(el),
        Some(ElementRole::Styled(style)) => NodeRole::Styled(style, el),
        None => NodeRole::Unknown(el),
    }
}
