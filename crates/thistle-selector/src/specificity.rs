//! Selector specificity.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

use crate::part::PartKind;

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }

    /// The contribution of a single simple selector of `kind`.
    #[must_use]
    pub const fn of_kind(kind: PartKind) -> Self {
        match kind {
            PartKind::Id => Self(1, 0, 0),
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => Self(0, 1, 0),
            PartKind::Element | PartKind::PseudoElement => Self(0, 0, 1),
        }
    }
}

/// [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// Combinators contribute nothing; a complex selector's specificity is the
/// component-wise sum of its compounds.
impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl Sum for Specificity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}
