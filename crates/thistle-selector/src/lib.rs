//! Fluent CSS selector builder for Thistle.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Grammar order checked on every mutation, not at render time
//!   - Repeated classes/attributes kept verbatim
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Descendant, child, next-sibling and subsequent-sibling combinators
//!   - Arbitrary nesting through the [`SelectorExpr`] trait
//!
//! - **Specificity** ([§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules))
//!
//! # Not Implemented
//!
//! - Parsing selector text into this model (build → stringify only)
//! - Validation of attribute-expression or pseudo-class syntax
//!
//! # Example
//!
//! ```
//! use thistle_selector::{SelectorExpr, combine, element, id};
//!
//! # fn main() -> Result<(), thistle_selector::SelectorError> {
//! let main = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(main.stringify(), "#main.container.editable");
//!
//! let rows = combine(
//!     element("table")?.id("data")?,
//!     "~",
//!     element("tr")?.pseudo_class("nth-of-type(even)")?,
//! )?;
//! assert_eq!(rows.stringify(), "table#data ~ tr:nth-of-type(even)");
//! # Ok(())
//! # }
//! ```

/// Stateless factory functions and `combine`.
pub mod builder;
/// Combinator tokens and complex selector nodes per [§ 16](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// The compound selector builder per [§ 4.2](https://www.w3.org/TR/selectors-4/#compound).
pub mod compound;
/// Errors raised by mutators and `combine`.
pub mod error;
/// The shared rendering capability and its serializable snapshot.
pub mod expr;
/// Simple selector kinds and their grammar order.
pub mod part;
/// Specificity per [§ 17](https://www.w3.org/TR/selectors-4/#specificity-rules).
pub mod specificity;

// Re-exports for convenience
pub use builder::{attr, class, combine, element, id, pseudo_class, pseudo_element};
pub use combinator::{Combinator, CombinatorToken};
pub use compound::Selector;
pub use error::SelectorError;
pub use expr::{SelectorExpr, SelectorTree};
pub use part::PartKind;
pub use specificity::Specificity;
