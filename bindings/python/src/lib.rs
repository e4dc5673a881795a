use pyo3::exceptions::PyException;
use pyo3::types::PyString;
use pyo3::{create_exception, prelude::*};

use katax::{ConversionError, K2LOptions};

create_exception!(_native, ConversionFailed, PyException);

fn options(normalize: bool) -> K2LOptions {
    if normalize {
        K2LOptions::default()
    } else {
        K2LOptions::raw()
    }
}

/// Convert every KaTeX formula in an HTML snippet to LaTeX.
///
/// Formulas that could not be converted come back as empty strings.
#[pyfunction]
#[pyo3(signature = (html, *, normalize=true))]
fn html_to_latex(html: &str, normalize: bool) -> Vec<String> {
    katax::html_to_latex_with_options(html, &options(normalize))
        .iter()
        .map(|formula| formula.latex().to_string())
        .collect()
}

/// Convert the formula at `index` (0-based) to LaTeX.
#[pyfunction]
#[pyo3(signature = (html, index=0, *, normalize=true))]
fn formula_to_latex<'a>(
    py: Python<'a>,
    html: &str,
    index: usize,
    normalize: bool,
) -> PyResult<Bound<'a, PyString>> {
    match katax::formula_to_latex(html, index, &options(normalize)) {
        Ok(output) => Ok(PyString::new(py, &output.content)),
        Err(e @ ConversionError::FormulaNotFound { .. }) => {
            Err(PyErr::new::<pyo3::exceptions::PyIndexError, _>(e.to_string()))
        }
        Err(e) => Err(ConversionFailed::new_err(e.to_string())),
    }
}

/// Whether the HTML snippet contains KaTeX output.
#[pyfunction]
fn contains_katex(html: &str) -> bool {
    katax::contains_katex(html)
}

/// A Python module implemented in Rust.
#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("ConversionFailed", m.py().get_type::<ConversionFailed>())?;
    m.add_function(wrap_pyfunction!(html_to_latex, m)?)?;
    m.add_function(wrap_pyfunction!(formula_to_latex, m)?)?;
    m.add_function(wrap_pyfunction!(contains_katex, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
