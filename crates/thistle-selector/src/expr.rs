//! The capability shared by compound selectors and combinator nodes.

use std::fmt;

use serde::Serialize;

use crate::combinator::CombinatorToken;
use crate::compound::Selector;
use crate::specificity::Specificity;

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// Anything that renders as selector text: a compound [`Selector`] (a leaf)
/// or a [`Combinator`](crate::Combinator) joining two expressions. Consumers
/// take `Rc<dyn SelectorExpr>` rather than a concrete type, which is what lets
/// combinators nest to any depth.
pub trait SelectorExpr: fmt::Debug {
    /// Canonical selector text. Pure; may be called any number of times.
    fn stringify(&self) -> String;

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    fn specificity(&self) -> Specificity;

    /// A serializable snapshot of the expression's structure.
    fn tree(&self) -> SelectorTree;
}

/// Owned snapshot of a selector expression, used for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SelectorTree {
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    Compound(Selector),

    /// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
    Complex {
        /// Left-hand side.
        left: Box<SelectorTree>,
        /// The relationship between the two sides.
        combinator: CombinatorToken,
        /// Right-hand side.
        right: Box<SelectorTree>,
    },
}

impl SelectorTree {
    /// The compound selectors at the leaves, left to right.
    #[must_use]
    pub fn compounds(&self) -> Vec<&Selector> {
        match self {
            Self::Compound(selector) => vec![selector],
            Self::Complex { left, right, .. } => {
                let mut out = left.compounds();
                out.extend(right.compounds());
                out
            }
        }
    }

    /// The combinator tokens in the order they appear in the rendered text.
    #[must_use]
    pub fn combinators(&self) -> Vec<CombinatorToken> {
        match self {
            Self::Compound(_) => Vec::new(),
            Self::Complex {
                left,
                combinator,
                right,
            } => {
                let mut out = left.combinators();
                out.push(*combinator);
                out.extend(right.combinators());
                out
            }
        }
    }
}
