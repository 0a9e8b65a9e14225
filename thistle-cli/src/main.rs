//! Thistle CLI
//!
//! Builds a CSS selector from ordered parts and prints it.
//!
//! ```text
//! thistle element=div id=main class=container + element=table id=data
//! div#main.container + table#data
//! ```

mod plan;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use thistle_selector::{SelectorTree, Specificity};

use crate::plan::Step;

/// Build a CSS selector from ordered parts.
#[derive(Debug, Parser)]
#[command(name = "thistle", version, about)]
struct Cli {
    /// Print a JSON description instead of the selector text
    #[arg(long)]
    json: bool,

    /// Append the selector's specificity as `(a,b,c)`
    #[arg(long)]
    specificity: bool,

    /// Trace each part and combinator to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Parts in order: `kind=value` (element, id, class, attr, pseudo-class,
    /// pseudo-element; or e, i, c, a, p, pe) or a combinator (`>`, `+`, `~`,
    /// `_` for descendant)
    #[arg(required = true, allow_hyphen_values = true)]
    parts: Vec<String>,
}

/// JSON output for `--json`.
#[derive(Debug, Serialize)]
struct Report {
    selector: String,
    specificity: Specificity,
    tree: SelectorTree,
}

fn run(cli: &Cli) -> Result<String> {
    let steps = cli
        .parts
        .iter()
        .map(|word| word.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;
    let expr = plan::build(steps, cli.verbose)?;

    if cli.json {
        let report = Report {
            selector: expr.stringify(),
            specificity: expr.specificity(),
            tree: expr.tree(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let text = expr.stringify();
    if cli.specificity {
        Ok(format!("{text} {}", expr.specificity()))
    } else {
        Ok(text)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
