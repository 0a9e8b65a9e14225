//! Compound selector builder.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use thistle_common::warning::warn_once;

use crate::error::SelectorError;
use crate::expr::{SelectorExpr, SelectorTree};
use crate::part::PartKind;
use crate::specificity::Specificity;

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Built one part at a time. Every mutator checks that the new part keeps
/// the order element, id, class, attribute, pseudo-class, pseudo-element,
/// and that element, id and pseudo-element occur at most once. An empty
/// element, id or pseudo-element name is treated as not set. A rejected
/// call leaves the selector untouched.
///
/// ```ignore
/// let mut sel = Selector::new();
/// sel.set_element("a")?.add_attribute(r#"href$=".png""#)?.add_pseudo_class("focus")?;
/// assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selector {
    #[serde(skip_serializing_if = "Option::is_none")]
    element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pseudo_classes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pseudo_element: Option<String>,
}

impl Selector {
    /// An empty compound; renders as the empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
        }
    }

    // ------------------------------------------------------------------
    // Mutators (borrowing)
    // ------------------------------------------------------------------

    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// # Errors
    ///
    /// `DuplicatePart` if an element is already set, `Order` if any later
    /// kind is present.
    pub fn set_element(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::Element, name)
    }

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// # Errors
    ///
    /// `DuplicatePart` if an id is already set, `Order` if a class,
    /// attribute, pseudo-class or pseudo-element is present.
    pub fn set_id(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::Id, name)
    }

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Repeated class names are kept verbatim.
    ///
    /// # Errors
    ///
    /// `Order` if an attribute, pseudo-class or pseudo-element is present.
    pub fn add_class(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::Class, name)
    }

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// `expr` is the text between the brackets (`href$=".png"`) and is not
    /// inspected.
    ///
    /// # Errors
    ///
    /// `Order` if a pseudo-class or pseudo-element is present.
    pub fn add_attribute(&mut self, expr: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::Attribute, expr)
    }

    /// [§ 3.5 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// # Errors
    ///
    /// `Order` if a pseudo-element is present.
    pub fn add_pseudo_class(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::PseudoClass, name)
    }

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// # Errors
    ///
    /// `DuplicatePart` if a pseudo-element is already set.
    pub fn set_pseudo_element(&mut self, name: impl Into<String>) -> Result<&mut Self, SelectorError> {
        self.push(PartKind::PseudoElement, name)
    }

    /// Add a part of any kind.
    ///
    /// # Errors
    ///
    /// `DuplicatePart` for a second singleton, `Order` when a later kind is
    /// already present.
    pub fn push(
        &mut self,
        kind: PartKind,
        value: impl Into<String>,
    ) -> Result<&mut Self, SelectorError> {
        self.try_push(kind, value.into())?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Mutators (consuming, for one-expression chains)
    // ------------------------------------------------------------------

    /// Consuming form of [`Selector::set_element`].
    ///
    /// # Errors
    ///
    /// As [`Selector::set_element`].
    pub fn element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.try_push(PartKind::Element, name.into())?;
        Ok(self)
    }

    /// Consuming form of [`Selector::set_id`].
    ///
    /// # Errors
    ///
    /// As [`Selector::set_id`].
    pub fn id(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.try_push(PartKind::Id, name.into())?;
        Ok(self)
    }

    /// Consuming form of [`Selector::add_class`].
    ///
    /// # Errors
    ///
    /// As [`Selector::add_class`].
    pub fn class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.try_push(PartKind::Class, name.into())?;
        Ok(self)
    }

    /// Consuming form of [`Selector::add_attribute`].
    ///
    /// # Errors
    ///
    /// As [`Selector::add_attribute`].
    pub fn attr(mut self, expr: impl Into<String>) -> Result<Self, SelectorError> {
        self.try_push(PartKind::Attribute, expr.into())?;
        Ok(self)
    }

    /// Consuming form of [`Selector::add_pseudo_class`].
    ///
    /// # Errors
    ///
    /// As [`Selector::add_pseudo_class`].
    pub fn pseudo_class(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.try_push(PartKind::PseudoClass, name.into())?;
        Ok(self)
    }

    /// Consuming form of [`Selector::set_pseudo_element`].
    ///
    /// # Errors
    ///
    /// As [`Selector::set_pseudo_element`].
    pub fn pseudo_element(mut self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.try_push(PartKind::PseudoElement, name.into())?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The type selector, if set.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element.as_deref()
    }

    /// The id, if set.
    #[must_use]
    pub fn id_name(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class names in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attribute expressions in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Pseudo-class names in insertion order.
    #[must_use]
    pub fn pseudo_classes(&self) -> &[String] {
        &self.pseudo_classes
    }

    /// The pseudo-element, if set.
    #[must_use]
    pub fn pseudo_element_name(&self) -> Option<&str> {
        self.pseudo_element.as_deref()
    }

    /// True when no part has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_kind().is_none()
    }

    /// The latest kind (in grammar order) present, which bounds what may be
    /// added next.
    #[must_use]
    pub fn last_kind(&self) -> Option<PartKind> {
        PartKind::ALL.into_iter().rev().find(|&kind| self.has(kind))
    }

    /// Every part in render order.
    pub fn parts(&self) -> impl Iterator<Item = (PartKind, &str)> {
        tagged(PartKind::Element, self.element.as_slice())
            .chain(tagged(PartKind::Id, self.id.as_slice()))
            .chain(tagged(PartKind::Class, &self.classes))
            .chain(tagged(PartKind::Attribute, &self.attributes))
            .chain(tagged(PartKind::PseudoClass, &self.pseudo_classes))
            .chain(tagged(PartKind::PseudoElement, self.pseudo_element.as_slice()))
    }

    /// Wrap as a shareable expression for use in a [`Combinator`](crate::Combinator).
    #[must_use]
    pub fn into_expr(self) -> Rc<dyn SelectorExpr> {
        Rc::new(self)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn has(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Element => self.element.is_some(),
            PartKind::Id => self.id.is_some(),
            PartKind::Class => !self.classes.is_empty(),
            PartKind::Attribute => !self.attributes.is_empty(),
            PartKind::PseudoClass => !self.pseudo_classes.is_empty(),
            PartKind::PseudoElement => self.pseudo_element.is_some(),
        }
    }

    /// Reject `kind` if it repeats a singleton or would follow a later kind.
    fn check_order(&self, kind: PartKind) -> Result<(), SelectorError> {
        if kind.is_singleton() && self.has(kind) {
            return Err(SelectorError::DuplicatePart { kind });
        }
        match self.last_kind() {
            Some(after) if after > kind => Err(SelectorError::Order { kind, after }),
            _ => Ok(()),
        }
    }

    fn try_push(&mut self, kind: PartKind, value: String) -> Result<(), SelectorError> {
        self.check_order(kind)?;
        match kind {
            PartKind::Element => self.element = singleton(value),
            PartKind::Id => self.id = singleton(value),
            PartKind::Class => append(kind, &mut self.classes, value),
            PartKind::Attribute => append(kind, &mut self.attributes, value),
            PartKind::PseudoClass => append(kind, &mut self.pseudo_classes, value),
            PartKind::PseudoElement => self.pseudo_element = singleton(value),
        }
        Ok(())
    }
}

/// An empty element, id or pseudo-element name counts as not set: it
/// renders nothing and may be set again later.
fn singleton(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Append without deduplicating; a repeat is only reported, once per kind.
///
/// The scan is linear; compounds hold a handful of parts.
fn append(kind: PartKind, values: &mut Vec<String>, value: String) {
    if values.contains(&value) {
        warn_once(
            "Selector",
            &format!("repeated {kind} in one compound selector; kept verbatim"),
        );
    }
    values.push(value);
}

fn tagged(kind: PartKind, values: &[String]) -> impl Iterator<Item = (PartKind, &str)> {
    values.iter().map(move |value| (kind, value.as_str()))
}

impl SelectorExpr for Selector {
    /// Element, `#id`, `.class`..., `[attr]`..., `:pseudo-class`...,
    /// `::pseudo-element`. Absent parts add nothing.
    fn stringify(&self) -> String {
        let mut out = String::new();
        for (kind, value) in self.parts() {
            out.push_str(kind.prefix());
            out.push_str(value);
            out.push_str(kind.suffix());
        }
        out
    }

    fn specificity(&self) -> Specificity {
        self.parts().map(|(kind, _)| Specificity::of_kind(kind)).sum()
    }

    fn tree(&self) -> SelectorTree {
        SelectorTree::Compound(self.clone())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify())
    }
}

impl From<Selector> for Rc<dyn SelectorExpr> {
    fn from(selector: Selector) -> Self {
        Rc::new(selector)
    }
}
