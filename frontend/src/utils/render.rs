use leptos::html::{self, AnyElement, HtmlElement};
use leptos::*;
use listkit_shared::{Element, GridCell, Node, Tag};

use crate::components::grid_col::GridCol;
use crate::utils::content::Content;

/// Caller attributes spread onto the root element of a rendered tree.
pub type Spread = Vec<(&'static str, Attribute)>;

/// Converts a rendered node tree into a Leptos view. `spread` lands on the
/// first element encountered, which is the item or meta `<div>`; a grid
/// column wrapping it is not an element of the tree.
pub fn node_view(node: Node<Content>, spread: &mut Option<Spread>) -> View {
    match node {
        Node::Content(content) => content.into_view(),
        Node::Element(el) => element_view(el, spread),
        Node::Cell(cell) => cell_view(cell, spread),
    }
}

fn element_view(el: Element<Content>, spread: &mut Option<Spread>) -> View {
    let mut node = tag_element(el.tag);
    if let Some(class) = el.class {
        node = node.attr("class", class);
    }
    if let Some(style) = el.style {
        node = node.attr("style", style);
    }
    if let Some(key) = el.key {
        node = node.attr("data-key", key);
    }
    for (name, value) in el.attrs {
        node = node.attr(name, value);
    }
    if let Some(attrs) = spread.take() {
        node = node.attrs(attrs);
    }
    for child in el.children {
        node = node.child(node_view(child, spread));
    }
    node.into_view()
}

fn cell_view(cell: GridCell<Content>, spread: &mut Option<Spread>) -> View {
    let GridCell { spans, child } = cell;
    let child = node_view(*child, spread);
    view! { <GridCol spans=spans>{child}</GridCol> }.into_view()
}

fn tag_element(tag: Tag) -> HtmlElement<AnyElement> {
    match tag {
        Tag::Div => html::div().into_any(),
        Tag::H4 => html::h4().into_any(),
        Tag::Ul => html::ul().into_any(),
        Tag::Li => html::li().into_any(),
        Tag::Em => html::em().into_any(),
    }
}
