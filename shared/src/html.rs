use std::fmt::Display;

use crate::classes::COL_PREFIX_CLS;
use crate::node::{Element, GridCell, Node};

/// Serialises a node tree to static HTML. Content and attribute values are
/// escaped; attributes with unusable names are dropped. Grid cells become
/// the grid primitive's column `<div>`.
pub fn to_html<C: Display>(node: &Node<C>) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// `text` with the HTML-significant characters replaced by entities.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped(&mut out, text);
    out
}

/// Whether `name` can be written as an attribute name without changing the
/// surrounding markup.
pub fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|ch| {
            !ch.is_whitespace()
                && !ch.is_control()
                && !matches!(ch, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn write_node<C: Display>(out: &mut String, node: &Node<C>) {
    match node {
        Node::Content(content) => push_escaped(out, &content.to_string()),
        Node::Element(el) => write_element(out, el),
        Node::Cell(cell) => write_cell(out, cell),
    }
}

fn write_element<C: Display>(out: &mut String, el: &Element<C>) {
    let tag = el.tag.as_str();
    out.push('<');
    out.push_str(tag);
    if let Some(class) = &el.class {
        write_attr(out, "class", class);
    }
    if let Some(style) = &el.style {
        write_attr(out, "style", style);
    }
    if let Some(key) = &el.key {
        write_attr(out, "data-key", key);
    }
    for (name, value) in &el.attrs {
        if is_valid_attr_name(name) {
            write_attr(out, name, value);
        } else {
            log::warn!("dropping attribute with invalid name {:?}", name);
        }
    }
    out.push('>');
    for child in &el.children {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_cell<C: Display>(out: &mut String, cell: &GridCell<C>) {
    let classes = cell.spans.col_classes(COL_PREFIX_CLS);
    out.push_str("<div");
    if !classes.is_empty() {
        write_attr(out, "class", &classes.join(" "));
    }
    out.push('>');
    write_node(out, &cell.child);
    out.push_str("</div>");
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value);
    out.push('"');
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
