//! Katax CLI - Recover LaTeX source from KaTeX-rendered HTML

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use katax::{html_to_latex_with_options, FormulaLatex, K2LOptions};
#[cfg(feature = "cli")]
use serde::Serialize;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "k2l")]
#[command(version)]
#[command(about = "Katax - Recover LaTeX source from KaTeX-rendered HTML", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input HTML file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Only convert the formula at this position (0-based)
    #[arg(short, long)]
    index: Option<usize>,

    /// Keep the reconstructed LaTeX as-is (no whitespace/operator normalization)
    #[arg(long)]
    raw: bool,

    /// Print one JSON object per formula instead of plain LaTeX lines
    #[arg(long)]
    json: bool,

    /// Disable colored warning output
    #[arg(long)]
    no_color: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the formulas found in a page with their recovered LaTeX
    List {
        /// Input HTML file
        input: Option<String>,
    },

    /// Show version and feature info
    Info,
}

/// One formula in `--json` output
#[cfg(feature = "cli")]
#[derive(Serialize)]
struct FormulaReport<'a> {
    index: usize,
    display: bool,
    latex: &'a str,
    warnings: Vec<String>,
    error: Option<String>,
}

#[cfg(feature = "cli")]
impl<'a> From<&'a FormulaLatex> for FormulaReport<'a> {
    fn from(formula: &'a FormulaLatex) -> Self {
        let (warnings, error) = match &formula.result {
            Ok(output) => (output.format_warnings(), None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };
        Self {
            index: formula.index,
            display: formula.display,
            latex: formula.latex(),
            warnings,
            error,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let input = read_input(cli.input_file.as_deref())?;
    let options = if cli.raw {
        K2LOptions::raw()
    } else {
        K2LOptions::default()
    };

    let mut formulas = html_to_latex_with_options(&input, &options);
    if let Some(index) = cli.index {
        let available = formulas.len();
        formulas.retain(|f| f.index == index);
        if formulas.is_empty() {
            eprintln!(
                "Error: {}",
                katax::ConversionError::not_found(index, available)
            );
            std::process::exit(1);
        }
    }

    // Collect diagnostics as (formula index, message)
    let mut diagnostics: Vec<(usize, String)> = Vec::new();
    let mut failures = 0;
    for formula in &formulas {
        match &formula.result {
            Ok(output) => diagnostics.extend(
                output
                    .format_warnings()
                    .into_iter()
                    .map(|w| (formula.index, w)),
            ),
            Err(e) => {
                failures += 1;
                diagnostics.push((formula.index, e.to_string()));
            }
        }
    }

    // Print diagnostics to stderr (unless quiet mode)
    if !cli.quiet && !diagnostics.is_empty() {
        print_diagnostics_to_stderr(&diagnostics, !cli.no_color);
    }

    // Check strict mode
    if cli.strict && !diagnostics.is_empty() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            diagnostics.len()
        );
        std::process::exit(1);
    }

    let result = if cli.json {
        render_json(&formulas)?
    } else {
        // Empty conversions have nothing to deliver
        formulas
            .iter()
            .map(FormulaLatex::latex)
            .filter(|latex| !latex.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            if !result.is_empty() {
                writeln!(file, "{}", result)?;
            }
            if diagnostics.is_empty() {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    diagnostics.len()
                );
            }
        }
        None => {
            if !result.is_empty() {
                println!("{}", result);
            }
        }
    }

    if failures > 0 && failures == formulas.len() {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::List { input } => {
            let content = read_input(input.as_deref())?;
            let formulas = html_to_latex_with_options(&content, &K2LOptions::default());
            if formulas.is_empty() {
                eprintln!("No KaTeX formulas found");
                return Ok(());
            }
            for formula in &formulas {
                let mode = if formula.display { "display" } else { "inline" };
                match &formula.result {
                    Ok(output) => println!("[{}] {:<7} {}", formula.index, mode, output.content),
                    Err(e) => println!("[{}] {:<7} ✗ {}", formula.index, mode, e),
                }
            }
        }

        Commands::Info => {
            println!("Katax - Recover LaTeX source from KaTeX-rendered HTML");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Recognized constructs:");
            println!("  ✓ Fractions (\\frac) and square roots (\\sqrt)");
            println!("  ✓ Sub/superscripts");
            println!("  ✓ Big operators with limits (\\sum, \\prod, \\int)");
            println!("  ✓ Named operators (\\log, \\sin, \\lim, ...)");
            println!("  ✓ Accents (as \\hat)");
            println!("  ✓ \\mathcal, \\mathbb, \\mathrm, \\text");
            println!("  ✓ Greek letters and common operator glyphs");
            println!();
        }
    }

    Ok(())
}

/// Read a file, or stdin when no path is given
#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn render_json(formulas: &[FormulaLatex]) -> io::Result<String> {
    let reports: Vec<FormulaReport<'_>> = formulas.iter().map(FormulaReport::from).collect();
    serde_json::to_string_pretty(&reports).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// Print diagnostics to stderr with optional color coding.
#[cfg(feature = "cli")]
fn print_diagnostics_to_stderr(diagnostics: &[(usize, String)], use_color: bool) {
    eprintln!();
    eprintln!(
        "{}Conversion Warnings ({}):{}",
        if use_color { "\x1b[33m" } else { "" },
        diagnostics.len(),
        if use_color { "\x1b[0m" } else { "" }
    );
    eprintln!();

    for (index, message) in diagnostics {
        let color = if use_color { "\x1b[33m" } else { "" };
        let reset = if use_color { "\x1b[0m" } else { "" };
        eprintln!("  {}[formula {}]{} {}", color, index, reset, message);
    }
    eprintln!();
}


#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install katax --features cli");
    eprintln!("  k2l [OPTIONS] [INPUT_FILE]");
}
