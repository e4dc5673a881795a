//! Owned render tree
//!
//! A read-only model of the HTML that KaTeX produces for one formula. The
//! converter borrows a tree for the duration of a call and never mutates it.

/// A node of the KaTeX rendering tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    /// A text leaf
    Text(String),
    /// An element with role classes and ordered children
    Element(Element),
    /// Comments, doctypes and other non-content nodes
    Other,
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    /// Element name (`span`, `svg`, ...)
    pub tag: String,
    /// Role classes attached by the renderer, in attribute order
    pub classes: Vec<String>,
    /// Raw value of the inline `top:` declaration, if any
    pub offset: Option<String>,
    /// Children in document order
    pub children: Vec<RenderNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Check whether the element carries `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Check whether the element carries every class in `classes`
    pub fn has_classes(&self, classes: &[&str]) -> bool {
        classes.iter().all(|c| self.has_class(c))
    }

    /// Whether the element is vertically displaced from the baseline
    pub fn has_offset(&self) -> bool {
        self.offset.is_some()
    }

    /// Child elements, skipping text and other nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(RenderNode::as_element)
    }

    /// First descendant element (self excluded) matching `pred`, in document order
    pub fn find_descendant<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        for child in self.child_elements() {
            if pred(child) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(pred) {
                return Some(found);
            }
        }
        None
    }

    /// First descendant carrying `class`
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.find_descendant(|e| e.has_class(class))
    }

    /// Whether any descendant carries `class`
    pub fn contains_class(&self, class: &str) -> bool {
        self.find_class(class).is_some()
    }

    /// Concatenated text of every descendant text leaf
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                RenderNode::Text(t) => out.push_str(t),
                RenderNode::Element(e) => e.collect_text(out),
                RenderNode::Other => {}
            }
        }
    }
}

impl RenderNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            RenderNode::Element(e) => Some(e),
            _ => None,
        }
    }

    /// The node itself if it carries `class`, else its first descendant that does
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        let el = self.as_element()?;
        if el.has_class(class) {
            Some(el)
        } else {
            el.find_class(class)
        }
    }

    /// Concatenated descendant text
    pub fn text(&self) -> String {
        match self {
            RenderNode::Text(t) => t.clone(),
            RenderNode::Element(e) => e.text(),
            RenderNode::Other => String::new(),
        }
    }
}

impl From<Element> for RenderNode {
    fn from(e: Element) -> Self {
        RenderNode::Element(e)
    }
}

// =============================================================================
// Builders
// =============================================================================

/// Text leaf
pub fn text(s: impl Into<String>) -> RenderNode {
    RenderNode::Text(s.into())
}

/// `<span class="...">` with children. `classes` is whitespace separated.
pub fn span(classes: &str, children: Vec<RenderNode>) -> RenderNode {
    RenderNode::Element(Element {
        tag: "span".to_string(),
        classes: classes.split_whitespace().map(str::to_string).collect(),
        offset: None,
        children,
    })
}

/// `<span class="..." style="top:...">` with children
pub fn offset_span(classes: &str, top: &str, children: Vec<RenderNode>) -> RenderNode {
    match span(classes, children) {
        RenderNode::Element(mut e) => {
            e.offset = Some(top.to_string());
            RenderNode::Element(e)
        }
        other => other,
    }
}
