//! The six kinds of simple selector a compound selector is built from.

use serde::Serialize;

/// [§ 3.1 Structure and Terminology](https://www.w3.org/TR/selectors-4/#structure)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// The kind of a simple selector within a compound, declared in the only
/// order in which they may appear:
///
/// ```text
/// element#id.class[attr]:pseudo-class::pseudo-element
///           \----/\----/\----------/
///           can be several occurrences
/// ```
///
/// `Ord` follows declaration order, so `kind_a < kind_b` means `kind_a` must
/// come first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    #[strum(to_string = "element", serialize = "e")]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    #[strum(to_string = "id", serialize = "i")]
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    #[strum(to_string = "class", serialize = "c")]
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr", serialize = "a")]
    Attribute,

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:nth-of-type(even)`
    #[strum(to_string = "pseudo-class", serialize = "p")]
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    #[strum(to_string = "pseudo-element", serialize = "pe")]
    PseudoElement,
}

impl PartKind {
    /// Every kind, in grammar order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Element, id and pseudo-element may occur at most once per compound.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before the part's value.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the part's value.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            _ => "",
        }
    }
}
