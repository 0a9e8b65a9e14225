//! Combinators and the complex selectors they build.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SelectorError;
use crate::expr::{SelectorExpr, SelectorTree};
use crate::specificity::Specificity;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CombinatorToken {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors."
    SubsequentSibling,
}

impl CombinatorToken {
    /// Every token, in the order `' '`, `'>'`, `'+'`, `'~'`.
    pub const ALL: [Self; 4] = [
        Self::Descendant,
        Self::Child,
        Self::NextSibling,
        Self::SubsequentSibling,
    ];

    /// The token's text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }
}

impl FromStr for CombinatorToken {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " => Ok(Self::Descendant),
            ">" => Ok(Self::Child),
            "+" => Ok(Self::NextSibling),
            "~" => Ok(Self::SubsequentSibling),
            _ => Err(SelectorError::InvalidCombinator {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CombinatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors separated
/// by combinators."
///
/// One link of that chain: two expressions and the token between them.
/// Either side may itself be a `Combinator`, so
/// `div + table ~ tr td` can be assembled as
///
/// ```text
/// Combinator(div, +, Combinator(table, ~, Combinator(tr, ' ', td)))
/// ```
///
/// Immutable once built; the sides are shared, not copied.
#[derive(Debug, Clone)]
pub struct Combinator {
    left: Rc<dyn SelectorExpr>,
    token: CombinatorToken,
    right: Rc<dyn SelectorExpr>,
}

impl Combinator {
    /// Join two expressions with a known token.
    #[must_use]
    pub fn new(
        left: impl Into<Rc<dyn SelectorExpr>>,
        token: CombinatorToken,
        right: impl Into<Rc<dyn SelectorExpr>>,
    ) -> Self {
        Self {
            left: left.into(),
            token,
            right: right.into(),
        }
    }

    /// Join two expressions with a token given as text.
    ///
    /// # Errors
    ///
    /// `InvalidCombinator` unless `token` is `" "`, `">"`, `"+"` or `"~"`.
    pub fn parse(
        left: impl Into<Rc<dyn SelectorExpr>>,
        token: &str,
        right: impl Into<Rc<dyn SelectorExpr>>,
    ) -> Result<Self, SelectorError> {
        let token = token.parse()?;
        Ok(Self::new(left, token, right))
    }

    /// Left-hand side.
    #[must_use]
    pub fn left(&self) -> &Rc<dyn SelectorExpr> {
        &self.left
    }

    /// The combinator token.
    #[must_use]
    pub const fn token(&self) -> CombinatorToken {
        self.token
    }

    /// Right-hand side.
    #[must_use]
    pub fn right(&self) -> &Rc<dyn SelectorExpr> {
        &self.right
    }

    /// Wrap as a shareable expression for further nesting.
    #[must_use]
    pub fn into_expr(self) -> Rc<dyn SelectorExpr> {
        Rc::new(self)
    }
}

impl SelectorExpr for Combinator {
    /// `"{left} {token} {right}"`. The token always gets one space on each
    /// side, so the descendant combinator renders as three spaces.
    fn stringify(&self) -> String {
        format!(
            "{} {} {}",
            self.left.stringify(),
            self.token,
            self.right.stringify()
        )
    }

    /// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
    fn specificity(&self) -> Specificity {
        self.left.specificity() + self.right.specificity()
    }

    fn tree(&self) -> SelectorTree {
        SelectorTree::Complex {
            left: Box::new(self.left.tree()),
            combinator: self.token,
            right: Box::new(self.right.tree()),
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl From<Combinator> for Rc<dyn SelectorExpr> {
    fn from(combinator: Combinator) -> Self {
        Rc::new(combinator)
    }
}
