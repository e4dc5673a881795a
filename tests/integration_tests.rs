//! Integration tests for Katax KaTeX HTML to LaTeX conversion
//!
//! Fixtures are trimmed KaTeX 0.16 output (the MathML half is dropped where
//! it does not matter).

use katax::{
    contains_katex, convert_with_diagnostics, find_formulas, first_formula_to_latex,
    formula_to_latex, html_to_latex, html_to_latex_with_options, katex_to_latex, normalize_latex,
    parse_fragment, ConversionError, K2LOptions, WarningKind,
};
use pretty_assertions::assert_eq;

/// Wrap `.katex-html` content into an inline formula
fn inline(html: &str) -> String {
    format!(
        concat!(
            r#"<span class="katex"><span class="katex-mathml"><math><semantics><mrow></mrow>"#,
            r#"<annotation encoding="application/x-tex">ignored</annotation></semantics></math></span>"#,
            r#"<span class="katex-html" aria-hidden="true"><span class="base">{}</span></span></span>"#
        ),
        html
    )
}

/// Wrap `.katex-html` content into a display formula
fn display(html: &str) -> String {
    format!(r#"<span class="katex-display">{}</span>"#, inline(html))
}

fn latex(html: &str) -> String {
    first_formula_to_latex(html)
}

// ============================================================================
// Fixtures
// ============================================================================

/// `msupsub` group holding the subscript `c`
macro_rules! sub_c {
    () => {
        concat!(
            r#"<span class="msupsub"><span class="vlist-t vlist-t2"><span class="vlist-r">"#,
            r#"<span class="vlist" style="height:0.1514em;">"#,
            r#"<span style="top:-2.55em;margin-left:-0.1389em;margin-right:0.05em;">"#,
            r#"<span class="pstrut" style="height:2.7em;"></span>"#,
            r#"<span class="sizing reset-size6 size3 mtight"><span class="mord mathnormal mtight">c</span></span>"#,
            r#"</span></span><span class="vlist-s">&#8203;</span></span>"#,
            r#"<span class="vlist-r"><span class="vlist" style="height:0.15em;"><span></span></span></span>"#,
            r#"</span></span>"#
        )
    };
}

const P_SUB_C: &str = concat!(
    r#"<span class="strut" style="height:0.8333em;vertical-align:-0.15em;"></span>"#,
    r#"<span class="mord"><span class="mord mathnormal" style="margin-right:0.13889em;">P</span>"#,
    sub_c!(),
    r#"</span>"#
);

const X_SQUARED: &str = concat!(
    r#"<span class="mord"><span class="mord mathnormal">x</span>"#,
    r#"<span class="msupsub"><span class="vlist-t"><span class="vlist-r">"#,
    r#"<span class="vlist" style="height:0.8141em;">"#,
    r#"<span style="top:-3.063em;margin-right:0.05em;">"#,
    r#"<span class="pstrut" style="height:2.7em;"></span>"#,
    r#"<span class="sizing reset-size6 size3 mtight"><span class="mord mtight">2</span></span>"#,
    r#"</span></span></span></span></span></span>"#
);

const X_SUB_I_SUP_2: &str = concat!(
    r#"<span class="mord"><span class="mord mathnormal">x</span>"#,
    r#"<span class="msupsub"><span class="vlist-t vlist-t2"><span class="vlist-r">"#,
    r#"<span class="vlist" style="height:0.8141em;">"#,
    r#"<span style="top:-2.453em;margin-left:0em;margin-right:0.05em;">"#,
    r#"<span class="pstrut" style="height:2.7em;"></span>"#,
    r#"<span class="sizing reset-size6 size3 mtight"><span class="mord mathnormal mtight">i</span></span></span>"#,
    r#"<span style="top:-3.063em;margin-right:0.05em;">"#,
    r#"<span class="pstrut" style="height:2.7em;"></span>"#,
    r#"<span class="sizing reset-size6 size3 mtight"><span class="mord mtight">2</span></span></span>"#,
    r#"</span><span class="vlist-s">&#8203;</span></span>"#,
    r#"<span class="vlist-r"><span class="vlist" style="height:0.247em;"><span></span></span></span>"#,
    r#"</span></span></span>"#
);

const FRAC_A_B: &str = concat!(
    r#"<span class="mord"><span class="mopen nulldelimiter"></span><span class="mfrac">"#,
    r#"<span class="vlist-t vlist-t2"><span class="vlist-r"><span class="vlist" style="height:0.6954em;">"#,
    r#"<span style="top:-2.655em;"><span class="pstrut" style="height:3em;"></span>"#,
    r#"<span class="sizing reset-size6 size3 mtight"><span class="mord mtight">"#,
    r#"<span class="mord mathnormal mtight">b</span></span></span></span>"#,
    r#"<span style="top:-3.23em;"><span class="pstrut" style="height:3em;"></span>"#,
    r#"<span class="frac-line" style="border-bottom-width:0.04em;"></span></span>"#,
    r#"<span style="top:-3.394em;"><span class="pstrut" style="height:3em;"></span>"#,
    r#"<span class="sizing reset-size6 size3 mtight"><span class="mord mtight">"#,
    r#"<span class="mord mathnormal mtight">a</span></span></span></span>"#,
    r#"</span><span class="vlist-s">&#8203;</span></span>"#,
    r#"<span class="vlist-r"><span class="vlist" style="height:0.345em;"><span></span></span></span>"#,
    r#"</span></span><span class="mclose nulldelimiter"></span></span>"#
);

const SQRT_X: &str = concat!(
    r#"<span class="mord sqrt"><span class="vlist-t vlist-t2"><span class="vlist-r">"#,
    r#"<span class="vlist" style="height:0.8003em;">"#,
    r#"<span class="svg-align" style="top:-3em;"><span class="pstrut" style="height:3em;"></span>"#,
    r#"<span class="mord" style="padding-left:0.833em;"><span class="mord mathnormal">x</span></span></span>"#,
    r#"<span style="top:-2.7603em;"><span class="pstrut" style="height:3em;"></span>"#,
    r#"<span class="hide-tail" style="min-width:0.853em;height:1.08em;">"#,
    r#"<svg width="400em" height="1.08em" viewBox="0 0 400000 1080"><path d="M95,702"></path></svg>"#,
    r#"</span></span></span><span class="vlist-s">&#8203;</span></span>"#,
    r#"<span class="vlist-r"><span class="vlist" style="height:0.2397em;"><span></span></span></span>"#,
    r#"</span></span>"#
);

const SUM_I_TO_N: &str = concat!(
    r#"<span class="mop op-limits"><span class="vlist-t vlist-t2"><span class="vlist-r">"#,
    r#"<span class="vlist" style="height:1.6514em;">"#,
    r#"<span style="top:-1.8723em;margin-left:0em;"><span class="pstrut" style="height:3.05em;"></span>"#,
    r#"<span class="sizing reset-size6 size3 mtight"><span class="mord mtight">"#,
    r#"<span class="mord mathnormal mtight">i</span><span class="mrel mtight">=</span>"#,
    r#"<span class="mord mtight">1</span></span></span></span>"#,
    r#"<span style="top:-3.05em;"><span class="pstrut" style="height:3.05em;"></span>"#,
    r#"<span><span class="mop op-symbol large-op">∑</span></span></span>"#,
    r#"<span style="top:-4.3em;margin-left:0em;"><span class="pstrut" style="height:3.05em;"></span>"#,
    r#"<span class="sizing reset-size6 size3 mtight"><span class="mord mathnormal mtight">n</span></span></span>"#,
    r#"</span><span class="vlist-s">&#8203;</span></span>"#,
    r#"<span class="vlist-r"><span class="vlist" style="height:1.2777em;"><span></span></span></span>"#,
    r#"</span></span>"#,
    r#"<span class="mspace" style="margin-right:0.1667em;"></span><span class="mord mathnormal">i</span>"#
);

const HAT_R: &str = concat!(
    r#"<span class="mord accent"><span class="vlist-t"><span class="vlist-r">"#,
    r#"<span class="vlist" style="height:0.9468em;">"#,
    r#"<span style="top:-3em;"><span class="pstrut" style="height:3em;"></span>"#,
    r#"<span class="mord mathnormal" style="margin-right:0.00773em;">R</span></span>"#,
    r#"<span style="top:-3.2523em;"><span class="pstrut" style="height:3em;"></span>"#,
    r#"<span class="accent-body" style="left:-0.1667em;"><span class="mord">^</span></span></span>"#,
    r#"</span></span></span></span>"#
);

const LOG_X: &str = concat!(
    r#"<span class="mop">lo<span style="margin-right:0.01389em;">g</span></span>"#,
    r#"<span class="mspace" style="margin-right:0.1667em;"></span>"#,
    r#"<span class="mord mathnormal">x</span>"#
);

// ============================================================================
// Constructs
// ============================================================================

mod constructs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_subscript() {
        assert_eq!(latex(&inline(P_SUB_C)), "P_{c}");
    }

    #[test]
    fn test_superscript_only() {
        assert_eq!(latex(&inline(X_SQUARED)), "x^{2}");
    }

    #[test]
    fn test_sub_and_superscript() {
        assert_eq!(latex(&inline(X_SUB_I_SUP_2)), "x^{2}_{i}");
    }

    #[test]
    fn test_fraction_denominator_listed_first() {
        assert_eq!(latex(&inline(FRAC_A_B)), "\\frac{a}{b}");
    }

    #[test]
    fn test_square_root() {
        assert_eq!(latex(&inline(SQRT_X)), "\\sqrt{x}");
    }

    #[test]
    fn test_sum_with_limits() {
        assert_eq!(latex(&display(SUM_I_TO_N)), "\\sum_{i = 1}^{n}i");
    }

    #[test]
    fn test_accent() {
        assert_eq!(latex(&inline(HAT_R)), "\\hat{R}");
    }

    #[test]
    fn test_named_operator_keeps_separation() {
        assert_eq!(latex(&inline(LOG_X)), "\\log x");
    }

    #[test]
    fn test_styled_runs() {
        let html = inline(concat!(
            r#"<span class="mord mathbb">R</span>"#,
            r#"<span class="mord mathcal">L</span>"#,
            r#"<span class="mord text"><span class="mord">if </span></span>"#
        ));
        assert_eq!(latex(&html), "\\mathbb{R}\\mathcal{L}\\text{if}");
    }

    #[test]
    fn test_greek_and_binary_operators() {
        let html = inline(concat!(
            r#"<span class="mord mathnormal" style="margin-right:0.0037em;">α</span>"#,
            r#"<span class="mspace" style="margin-right:0.2222em;"></span>"#,
            r#"<span class="mbin">+</span>"#,
            r#"<span class="mspace" style="margin-right:0.2222em;"></span>"#,
            r#"<span class="mord mathnormal" style="margin-right:0.05278em;">β</span>"#
        ));
        assert_eq!(latex(&html), "\\alpha + \\beta");
    }

    #[test]
    fn test_nested_fraction_of_scripts() {
        let frac = format!(
            concat!(
                r#"<span class="mfrac"><span class="vlist-t vlist-t2"><span class="vlist-r">"#,
                r#"<span class="vlist" style="height:1.3365em;">"#,
                r#"<span style="top:-2.314em;"><span class="pstrut" style="height:3em;"></span>"#,
                r#"<span class="mord">{den}</span></span>"#,
                r#"<span style="top:-3.23em;"><span class="pstrut" style="height:3em;"></span>"#,
                r#"<span class="frac-line" style="border-bottom-width:0.04em;"></span></span>"#,
                r#"<span style="top:-3.677em;"><span class="pstrut" style="height:3em;"></span>"#,
                r#"<span class="mord">{num}</span></span>"#,
                r#"</span><span class="vlist-s">&#8203;</span></span></span></span>"#
            ),
            den = format!("{}{}", HAT_R, sub_c!()),
            num = P_SUB_C,
        );
        assert_eq!(latex(&display(&frac)), "\\frac{P_{c}}{\\hat{R}_{c}}");
    }
}

// ============================================================================
// Page scanning
// ============================================================================

mod pages {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_formulas_in_document_order() {
        let page = format!(
            "<html><body><p>Pressure {} over {}</p>{}</body></html>",
            inline(P_SUB_C),
            inline(X_SQUARED),
            display(FRAC_A_B)
        );
        let formulas = html_to_latex(&page);
        let latex: Vec<&str> = formulas.iter().map(|f| f.latex()).collect();
        assert_eq!(latex, vec!["P_{c}", "x^{2}", "\\frac{a}{b}"]);
        assert_eq!(
            formulas.iter().map(|f| f.display).collect::<Vec<_>>(),
            vec![false, false, true]
        );
    }

    #[test]
    fn test_display_wrapper_reported_once() {
        let formulas = find_formulas(&display(SQRT_X));
        assert_eq!(formulas.len(), 1);
        assert!(formulas[0].display);
        assert_eq!(katex_to_latex(&formulas[0].root), "\\sqrt{x}");
    }

    #[test]
    fn test_formula_by_index() {
        let page = format!("{}{}", inline(LOG_X), inline(HAT_R));
        let output = formula_to_latex(&page, 1, &K2LOptions::default()).unwrap();
        assert_eq!(output.content, "\\hat{R}");
        assert!(!output.has_warnings());

        let err = formula_to_latex(&page, 2, &K2LOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ConversionError::FormulaNotFound {
                index: 2,
                available: 2
            }
        ));
    }

    #[test]
    fn test_contains_katex() {
        assert!(contains_katex(&inline(X_SQUARED)));
        assert!(!contains_katex("<p>$x^2$</p>"));
    }

    #[test]
    fn test_broken_formula_does_not_stop_page() {
        let page = format!(
            r#"{}<span class="katex"><span class="katex-mathml"><math></math></span></span>{}"#,
            inline(P_SUB_C),
            inline(SQRT_X)
        );
        let formulas = html_to_latex(&page);
        assert_eq!(formulas.len(), 3);
        assert_eq!(formulas[0].latex(), "P_{c}");
        assert_eq!(formulas[1].latex(), "");
        assert_eq!(formulas[2].latex(), "\\sqrt{x}");

        let broken = formulas[1].result.as_ref().unwrap();
        assert_eq!(broken.warnings.len(), 1);
        assert_eq!(broken.warnings[0].kind, WarningKind::MissingFormulaRoot);
    }
}

// ============================================================================
// Output properties
// ============================================================================

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_is_trimmed_and_single_spaced() {
        let fixtures = [P_SUB_C, X_SQUARED, X_SUB_I_SUP_2, FRAC_A_B, SQRT_X, SUM_I_TO_N, HAT_R, LOG_X];
        for fixture in fixtures {
            let out = latex(&inline(fixture));
            assert_eq!(out.trim(), out);
            assert!(!out.contains("  "), "double space in {:?}", out);
            assert_eq!(normalize_latex(&out), out, "not idempotent: {:?}", out);
        }
    }

    #[test]
    fn test_operators_spaced() {
        let html = inline(concat!(
            r#"<span class="mord mathnormal">a</span><span class="mrel">=</span>"#,
            r#"<span class="mord mathnormal">b</span><span class="mpunct">,</span>"#,
            r#"<span class="mord mathnormal">c</span><span class="mbin">−</span>"#,
            r#"<span class="mord mathnormal">d</span>"#
        ));
        assert_eq!(latex(&html), "a = b , c - d");
    }

    #[test]
    fn test_raw_output_keeps_reconstruction() {
        let page = inline(SUM_I_TO_N);
        let raw = html_to_latex_with_options(&page, &K2LOptions::raw());
        assert_eq!(raw[0].latex(), "\\sum_{i=1}^{n}i");
    }

    #[test]
    fn test_unrecognized_fraction_still_converts() {
        let root = parse_fragment(&inline(r#"<span class="mfrac"><span class="vlist"></span></span>"#));
        let output = convert_with_diagnostics(&root, &K2LOptions::default());
        assert_eq!(output.content, "\\frac{}{}");
        assert_eq!(output.warnings[0].kind, WarningKind::MissingStructure);
        assert_eq!(output.warnings[0].construct, Some("fraction"));
    }

    #[test]
    fn test_recursion_limit() {
        let nested = (0..8).fold("x".to_string(), |acc, _| {
            format!(r#"<span class="mord">{}</span>"#, acc)
        });
        let root = parse_fragment(&inline(&nested));
        let options = K2LOptions {
            max_depth: 4,
            ..Default::default()
        };
        let output = convert_with_diagnostics(&root, &options);
        assert_eq!(output.content, "");
        assert_eq!(output.warnings.len(), 1);
        assert_eq!(output.warnings[0].kind, WarningKind::RecursionLimit);

        assert_eq!(convert_with_diagnostics(&root, &K2LOptions::default()).content, "x");
    }

    #[test]
    fn test_deeply_nested_page_converts() {
        let levels = 10_000;
        let nested = format!(
            "{}x{}",
            r#"<span class="mord">"#.repeat(levels),
            "</span>".repeat(levels)
        );
        let page = format!("{}{}", inline(&nested), inline(P_SUB_C));

        let formulas = html_to_latex(&page);
        assert_eq!(formulas.len(), 2);

        let deep = formulas[0].result.as_ref().unwrap();
        assert_eq!(deep.content, "");
        assert!(deep
            .warnings
            .iter()
            .any(|w| w.kind == WarningKind::RecursionLimit));
        assert_eq!(formulas[1].latex(), "P_{c}");
    }
}
