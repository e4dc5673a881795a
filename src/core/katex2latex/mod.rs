//! KaTeX to LaTeX converter
//!
//! This module rebuilds LaTeX source from the HTML half of a KaTeX rendering.
//! It works purely on the structure of the render tree: which classes a node
//! carries, the order of its children, and which stacked children are
//! vertically offset.

pub mod classify;
pub mod context;
pub mod layout;
mod math;
mod utils;

pub use classify::{classify, NodeRole, TextStyle};
pub use context::{ConvertContext, K2LOptions};
pub use layout::SupSubLayout;
pub use math::{reconstruct, reconstruct_children};
pub use utils::normalize_latex;

use crate::core::render_tree::RenderNode;
use crate::data::classes;
use crate::utils::error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
use std::panic::{self, AssertUnwindSafe};

/// Convert one formula to LaTeX.
///
/// `root` is the formula element (`.katex`) or any node containing its
/// `.katex-html` sub-root. Returns an empty string when there is no such
/// sub-root.
pub fn convert(root: &RenderNode) -> String {
    convert_with_options(root, &K2LOptions::default())
}

/// Convert one formula to LaTeX with options
pub fn convert_with_options(root: &RenderNode, options: &K2LOptions) -> String {
    convert_with_diagnostics(root, options).content
}

/// Convert one formula, returning the LaTeX together with every fallback
/// that was taken on the way.
pub fn convert_with_diagnostics(root: &RenderNode, options: &K2LOptions) -> ConversionOutput {
    let Some(html_root) = root.find_class(classes::KATEX_HTML) else {
        log::warn!("formula has no .{} sub-root", classes::KATEX_HTML);
        return ConversionOutput::with_warnings(
            String::new(),
            vec![ConversionWarning::new(
                WarningKind::MissingFormulaRoot,
                format!("no .{} element", classes::KATEX_HTML),
            )],
        );
    };

    let mut ctx = ConvertContext::new(options.clone());
    let raw = reconstruct_children(html_root, &mut ctx);
    let content = if options.normalize_output {
        normalize_latex(&raw)
    } else {
        raw
    };

    ConversionOutput::with_warnings(content, ctx.warnings)
}

/// Convert one formula, turning any unexpected fault into an error for this
/// formula only.
pub fn try_convert(root: &RenderNode, options: &K2LOptions) -> ConversionResult<ConversionOutput> {
    catch_fault(|| convert_with_diagnostics(root, options))
}

/// Run `f`, reporting a panic as [`ConversionError::InternalError`]
pub(crate) fn catch_fault<T>(f: impl FnOnce() -> T) -> ConversionResult<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown fault".to_string()
        };
        log::error!("formula conversion failed: {}", message);
        ConversionError::internal(message)
    })
}

// ============================================================================
// Tests
// ============================================================================
