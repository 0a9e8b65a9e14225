//! Integration tests for building and rendering compound selectors.

use thistle_selector::{
    PartKind, Selector, SelectorError, SelectorExpr, Specificity, attr, class, element, id,
    pseudo_class, pseudo_element,
};

// Rendering
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_id_with_classes() {
    let sel = id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(sel.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let sel = element("a")
        .unwrap()
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus"#);
}

#[test]
fn test_element_id_classes() {
    let sel = element("div")
        .unwrap()
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap();
    assert_eq!(sel.stringify(), "div#main.container.draggable");
}

#[test]
fn test_every_kind_in_order() {
    let sel = element("input")
        .unwrap()
        .id("name")
        .unwrap()
        .class("field")
        .unwrap()
        .attr("type=text")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(sel.stringify(), "input#name.field[type=text]:hover::placeholder");
}

#[test]
fn test_single_part_factories() {
    assert_eq!(element("p").unwrap().stringify(), "p");
    assert_eq!(id("nav").unwrap().stringify(), "#nav");
    assert_eq!(class("btn").unwrap().stringify(), ".btn");
    assert_eq!(attr("disabled").unwrap().stringify(), "[disabled]");
    assert_eq!(pseudo_class("root").unwrap().stringify(), ":root");
    assert_eq!(pseudo_element("after").unwrap().stringify(), "::after");
}

#[test]
fn test_empty_selector_renders_nothing() {
    let sel = Selector::new();
    assert!(sel.is_empty());
    assert_eq!(sel.stringify(), "");
}

#[test]
fn test_absent_kinds_leave_no_delimiters() {
    // Element and pseudo-element only: no '#', '.', '[', ':' in between
    let sel = element("p").unwrap().pseudo_element("first-line").unwrap();
    assert_eq!(sel.stringify(), "p::first-line");
}

#[test]
fn test_empty_singletons_render_nothing() {
    assert_eq!(id("").unwrap().stringify(), "");
    assert_eq!(pseudo_element("").unwrap().stringify(), "");
    assert_eq!(element("").unwrap().stringify(), "");
    assert!(id("").unwrap().is_empty());

    let sel = element("a").unwrap().id("").unwrap().class("x").unwrap();
    assert_eq!(sel.stringify(), "a.x");
    assert_eq!(sel.id_name(), None);
}

#[test]
fn test_empty_singleton_can_be_set_again() {
    assert_eq!(element("").unwrap().element("a").unwrap().stringify(), "a");
    assert_eq!(id("").unwrap().id("x").unwrap().stringify(), "#x");
    assert_eq!(
        pseudo_element("")
            .unwrap()
            .pseudo_element("after")
            .unwrap()
            .stringify(),
        "::after"
    );
}

#[test]
fn test_empty_singleton_still_checks_order() {
    let err = class("x").unwrap().id("").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            kind: PartKind::Id,
            after: PartKind::Class,
        }
    );
}

#[test]
fn test_repeated_classes_kept_in_insertion_order() {
    let sel = class("b").unwrap().class("a").unwrap().class("b").unwrap();
    assert_eq!(sel.classes(), ["b", "a", "b"]);
    assert_eq!(sel.stringify(), ".b.a.b");
}

#[test]
fn test_multiple_attributes_and_pseudo_classes() {
    let sel = attr("href")
        .unwrap()
        .attr(r#"target="_blank""#)
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("not(.x)")
        .unwrap();
    assert_eq!(sel.stringify(), r#"[href][target="_blank"]:hover:not(.x)"#);
}

#[test]
fn test_stringify_is_repeatable() {
    let sel = element("li").unwrap().class("item").unwrap();
    let first = sel.stringify();
    assert_eq!(sel.stringify(), first);
    assert_eq!(sel.to_string(), first);
}

#[test]
fn test_stringify_mid_construction() {
    let mut sel = Selector::new();
    let _ = sel.set_element("ul").unwrap();
    assert_eq!(sel.stringify(), "ul");
    let _ = sel.add_class("menu").unwrap();
    assert_eq!(sel.stringify(), "ul.menu");
}

// Borrowing mutators

#[test]
fn test_borrowing_chain() {
    let mut sel = Selector::new();
    let _ = sel
        .set_element("a")
        .unwrap()
        .set_id("home")
        .unwrap()
        .add_class("nav")
        .unwrap()
        .add_attribute("href")
        .unwrap()
        .add_pseudo_class("visited")
        .unwrap()
        .set_pseudo_element("before")
        .unwrap();
    assert_eq!(sel.stringify(), "a#home.nav[href]:visited::before");
    assert_eq!(sel.element_name(), Some("a"));
    assert_eq!(sel.id_name(), Some("home"));
    assert_eq!(sel.attributes(), ["href"]);
    assert_eq!(sel.pseudo_classes(), ["visited"]);
    assert_eq!(sel.pseudo_element_name(), Some("before"));
}

#[test]
fn test_push_dispatches_on_kind() {
    let mut sel = Selector::new();
    let _ = sel.push(PartKind::Element, "td").unwrap();
    let _ = sel.push(PartKind::PseudoClass, "nth-of-type(even)").unwrap();
    assert_eq!(sel.stringify(), "td:nth-of-type(even)");
}

#[test]
fn test_parts_in_render_order() {
    let sel = element("a").unwrap().class("x").unwrap().attr("y").unwrap();
    let parts: Vec<_> = sel.parts().collect();
    assert_eq!(
        parts,
        [
            (PartKind::Element, "a"),
            (PartKind::Class, "x"),
            (PartKind::Attribute, "y"),
        ]
    );
}

// Ordering errors
// element < id < class < attribute < pseudo-class < pseudo-element

#[test]
fn test_id_after_class_is_order_error() {
    let err = class("x").unwrap().id("main").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            kind: PartKind::Id,
            after: PartKind::Class,
        }
    );
}

#[test]
fn test_class_after_attribute_is_order_error() {
    let mut sel = attr("y").unwrap();
    let err = sel.add_class("x").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Order {
            kind: PartKind::Class,
            ..
        }
    ));

    // The failed call changed nothing
    assert_eq!(sel.attributes(), ["y"]);
    assert!(sel.classes().is_empty());
    assert_eq!(sel.stringify(), "[y]");
}

#[test]
fn test_element_after_anything_is_order_error() {
    for kind in [
        PartKind::Id,
        PartKind::Class,
        PartKind::Attribute,
        PartKind::PseudoClass,
        PartKind::PseudoElement,
    ] {
        let mut sel = Selector::new();
        let _ = sel.push(kind, "v").unwrap();
        assert_eq!(
            sel.set_element("div").unwrap_err(),
            SelectorError::Order {
                kind: PartKind::Element,
                after: kind,
            }
        );
    }
}

#[test]
fn test_attribute_after_pseudo_class_is_order_error() {
    let err = pseudo_class("hover").unwrap().attr("href").unwrap_err();
    assert!(matches!(err, SelectorError::Order { .. }));
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_order_error() {
    let err = pseudo_element("before")
        .unwrap()
        .pseudo_class("hover")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            kind: PartKind::PseudoClass,
            after: PartKind::PseudoElement,
        }
    );
}

#[test]
fn test_order_reports_latest_kind_present() {
    let err = element("a")
        .unwrap()
        .class("x")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .id("main")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            kind: PartKind::Id,
            after: PartKind::PseudoClass,
        }
    );
}

// Duplicate singletons

#[test]
fn test_second_element_is_duplicate() {
    let err = element("div").unwrap().element("span").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicatePart {
            kind: PartKind::Element
        }
    );
}

#[test]
fn test_second_id_is_duplicate() {
    let err = id("a").unwrap().id("b").unwrap_err();
    assert_eq!(err, SelectorError::DuplicatePart { kind: PartKind::Id });
}

#[test]
fn test_second_pseudo_element_is_duplicate() {
    let mut sel = pseudo_element("before").unwrap();
    let err = sel.set_pseudo_element("after").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicatePart {
            kind: PartKind::PseudoElement
        }
    );
    assert_eq!(sel.pseudo_element_name(), Some("before"));
}

#[test]
fn test_error_messages() {
    let dup = id("a").unwrap().id("b").unwrap_err();
    assert!(
        dup.to_string()
            .starts_with("Element, id and pseudo-element should not occur more then one time")
    );

    let order = class("x").unwrap().id("main").unwrap_err();
    assert!(order.to_string().starts_with(
        "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element"
    ));
    assert!(order.to_string().ends_with("(id after class)"));
}

// Specificity
// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)

#[test]
fn test_compound_specificity() {
    let sel = element("div")
        .unwrap()
        .id("main")
        .unwrap()
        .class("container")
        .unwrap()
        .class("draggable")
        .unwrap();
    assert_eq!(sel.specificity(), Specificity(1, 2, 1));
}

#[test]
fn test_attribute_pseudo_specificity() {
    // [href]:hover::before → 0 ids, attribute + pseudo-class, pseudo-element
    let sel = attr("href")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_element("before")
        .unwrap();
    assert_eq!(sel.specificity(), Specificity(0, 2, 1));
    assert_eq!(Selector::new().specificity(), Specificity::default());
}
