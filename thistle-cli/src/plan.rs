//! Turning command-line words into a selector expression.
//!
//! Each word is either a part (`kind=value`) or a combinator. Parts
//! accumulate into the current compound; a combinator closes it. Compounds
//! are folded left to right, so `a + b > c` becomes `((a + b) > c)`, which
//! renders the same as any other grouping.

use std::mem;
use std::rc::Rc;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use thistle_selector::{Combinator, CombinatorToken, PartKind, Selector, SelectorExpr};

/// One command-line word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Add a part to the current compound.
    Part(PartKind, String),
    /// Close the current compound and join it to the next one.
    Combine(CombinatorToken),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(word: &str) -> Result<Self> {
        // A bare space is awkward to type, so `_` also means descendant.
        if word == "_" {
            return Ok(Self::Combine(CombinatorToken::Descendant));
        }
        if let Ok(token) = word.parse::<CombinatorToken>() {
            return Ok(Self::Combine(token));
        }

        // Split on the first '=' only: attribute values contain their own.
        let (kind, value) = word
            .split_once('=')
            .with_context(|| format!("expected `kind=value` or a combinator, got {word:?}"))?;
        let kind = kind
            .parse::<PartKind>()
            .with_context(|| format!("unknown part kind {kind:?} in {word:?}"))?;
        Ok(Self::Part(kind, value.to_string()))
    }
}

/// Fold `steps` into one expression.
pub fn build(steps: Vec<Step>, verbose: bool) -> Result<Rc<dyn SelectorExpr>> {
    let mut pending: Option<(Rc<dyn SelectorExpr>, CombinatorToken)> = None;
    let mut current = Selector::new();

    for step in steps {
        match step {
            Step::Part(kind, value) => {
                if verbose {
                    eprintln!("{} {kind}={value}", "  part".dimmed());
                }
                let pushed = current.push(kind, value).map(|_| ());
                pushed.with_context(|| format!("cannot add {kind} to `{current}`"))?;
            }
            Step::Combine(token) => {
                if current.is_empty() {
                    bail!("combinator {:?} has no selector on its left", token.as_str());
                }
                if verbose {
                    eprintln!("{} {:?}", "  join".dimmed(), token.as_str());
                }
                let compound = mem::take(&mut current);
                let left = match pending.take() {
                    None => compound.into_expr(),
                    Some((acc, op)) => Combinator::new(acc, op, compound).into_expr(),
                };
                pending = Some((left, token));
            }
        }
    }

    if current.is_empty() {
        match pending {
            Some((_, token)) => bail!("combinator {:?} has no selector on its right", token.as_str()),
            None => bail!("no selector parts given"),
        }
    }

    Ok(match pending {
        None => current.into_expr(),
        Some((acc, op)) => Combinator::new(acc, op, current).into_expr(),
    })
}
