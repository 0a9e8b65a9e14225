//! Errors raised while assembling a selector.

use thiserror::Error;

use crate::part::PartKind;

/// A selector part or combinator was rejected.
///
/// Raised by the mutating call that broke the rule; the selector is left as
/// it was before that call. Rendering never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton kind (element, id, pseudo-element) was set a second time.
    #[error(
        "Element, id and pseudo-element should not occur more then one time inside the selector (duplicate {kind})"
    )]
    DuplicatePart {
        /// The kind that was already set.
        kind: PartKind,
    },

    /// A part was added after a part of a later kind.
    #[error(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element ({kind} after {after})"
    )]
    Order {
        /// The kind being added.
        kind: PartKind,
        /// The latest kind already present.
        after: PartKind,
    },

    /// The combinator token is not one of `' '`, `'>'`, `'+'`, `'~'`.
    #[error("invalid combinator {token:?}: expected one of ' ', '>', '+', '~'")]
    InvalidCombinator {
        /// The rejected token.
        token: String,
    },
}
