//! Stateless entry points: one factory per part kind, plus `combine`.
//!
//! Each factory starts a fresh [`Selector`] with a single part, so the
//! results of separate calls never share state.

use std::rc::Rc;

use crate::combinator::Combinator;
use crate::compound::Selector;
use crate::error::SelectorError;
use crate::expr::SelectorExpr;

/// Start a selector with a type selector: `element("div")` → `div`.
///
/// # Errors
///
/// Never fails on a fresh selector; typed as `Result` so chains can use `?`
/// throughout.
pub fn element(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().element(name)
}

/// Start a selector with an id: `id("main")` → `#main`.
///
/// # Errors
///
/// See [`element`].
pub fn id(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().id(name)
}

/// Start a selector with a class: `class("x")` → `.x`.
///
/// # Errors
///
/// See [`element`].
pub fn class(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().class(name)
}

/// Start a selector with an attribute expression: `attr("href")` → `[href]`.
///
/// # Errors
///
/// See [`element`].
pub fn attr(expr: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().attr(expr)
}

/// Start a selector with a pseudo-class: `pseudo_class("focus")` → `:focus`.
///
/// # Errors
///
/// See [`element`].
pub fn pseudo_class(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().pseudo_class(name)
}

/// Start a selector with a pseudo-element: `pseudo_element("before")` → `::before`.
///
/// # Errors
///
/// See [`element`].
pub fn pseudo_element(name: impl Into<String>) -> Result<Selector, SelectorError> {
    Selector::new().pseudo_element(name)
}

/// Join two selector expressions with a combinator token given as text.
///
/// ```ignore
/// let sel = combine(element("table")?.id("data")?, "~", element("tr")?)?;
/// assert_eq!(sel.stringify(), "table#data ~ tr");
/// ```
///
/// # Errors
///
/// `InvalidCombinator` unless `token` is `" "`, `">"`, `"+"` or `"~"`.
pub fn combine(
    left: impl Into<Rc<dyn SelectorExpr>>,
    token: &str,
    right: impl Into<Rc<dyn SelectorExpr>>,
) -> Result<Combinator, SelectorError> {
    Combinator::parse(left, token, right)
}
