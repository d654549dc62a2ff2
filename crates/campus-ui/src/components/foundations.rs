//! Shared props and helpers for stateless container wrappers.

use yew::prelude::*;
use yew::virtual_dom::VTag;

/// Minimal common props shared by slot-style containers.
#[derive(Properties, PartialEq)]
pub struct BasicProps {
    /// Optional element id.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes appended to the base class.
    #[prop_or_default]
    pub class: Classes,
    /// Optional `data-testid`.
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
    /// Slot content.
    #[prop_or_default]
    pub children: Children,
}

/// Merge a base class with any consumer-provided classes.
#[must_use]
pub fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    let mut classes = Classes::from(base);
    if !extra.is_empty() {
        classes.push(extra.clone());
    }
    classes
}

/// Render `tag` with a base class, the caller's classes and its children.
#[must_use]
pub fn render_container(tag: &'static str, base_class: &'static str, props: &BasicProps) -> Html {
    let mut node = VTag::new(tag);
    if let Some(id) = &props.id {
        node.add_attribute("id", id.clone());
    }
    if let Some(test_id) = &props.test_id {
        node.add_attribute("data-testid", test_id.clone());
    }
    node.add_attribute("class", merge_classes(base_class, &props.class).to_string());
    for child in props.children.iter() {
        node.add_child(child);
    }
    node.into()
}
