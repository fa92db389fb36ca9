use serde::{Deserialize, Serialize};

use crate::classes::class_string;
use crate::grid::GridSpans;

// ============================================================================
// Tags and Regions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Div,
    H4,
    Ul,
    Li,
    Em,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::H4 => "h4",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Em => "em",
        }
    }
}

/// Every element a list item can emit. The class name of a region is
/// `{prefix}-{suffix}` and is the contract with the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Item,
    Content,
    Actions,
    Action,
    ActionSplit,
    ExtraWrap,
    Main,
    Extra,
    Meta,
    MetaAvatar,
    MetaContent,
    MetaTitle,
    MetaDescription,
}

impl Region {
    /// Class suffix of the region. Action entries are bare `<li>` elements
    /// and have none.
    pub fn suffix(&self) -> Option<&'static str> {
        let suffix = match self {
            Region::Action => return None,
            Region::Item => "item",
            Region::Content => "item-content",
            Region::Actions => "item-action",
            Region::ActionSplit => "item-action-split",
            Region::ExtraWrap => "item-extra-wrap",
            Region::Main => "item-main",
            Region::Extra => "item-extra",
            Region::Meta => "item-meta",
            Region::MetaAvatar => "item-meta-avatar",
            Region::MetaContent => "item-meta-content",
            Region::MetaTitle => "item-meta-title",
            Region::MetaDescription => "item-meta-description",
        };
        Some(suffix)
    }

    pub fn class_name(&self, prefix: &str) -> Option<String> {
        self.suffix().map(|suffix| format!("{}-{}", prefix, suffix))
    }

    pub fn tag(&self) -> Tag {
        match self {
            Region::Actions => Tag::Ul,
            Region::Action => Tag::Li,
            Region::ActionSplit => Tag::Em,
            Region::MetaTitle => Tag::H4,
            _ => Tag::Div,
        }
    }
}

// ============================================================================
// Node Tree
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Element<C> {
    pub region: Region,
    pub tag: Tag,
    pub class: Option<String>,
    pub key: Option<String>,
    pub style: Option<String>,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node<C>>,
}

impl<C> Element<C> {
    /// Element for `region` carrying the region's own class only.
    pub fn region(region: Region, prefix: &str) -> Self {
        Self {
            region,
            tag: region.tag(),
            class: region.class_name(prefix),
            key: None,
            style: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Region element that also takes a caller class, style and
    /// pass-through attributes.
    pub fn styled(
        region: Region,
        prefix: &str,
        class: Option<&str>,
        style: Option<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        let base = region.class_name(prefix).unwrap_or_default();
        Self {
            class: Some(class_string(&base, class)),
            style,
            attrs,
            ..Self::region(region, prefix)
        }
    }

    pub fn with_key(mut self, key: String) -> Self {
        self.key = Some(key);
        self
    }

    pub fn child(mut self, node: Node<C>) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node<C>>) -> Self {
        self.children.extend(nodes);
        self
    }
}

/// Cell of the external grid primitive: render `child` at the given spans.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<C> {
    pub spans: GridSpans,
    pub child: Box<Node<C>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node<C> {
    Element(Element<C>),
    Cell(GridCell<C>),
    Content(C),
}

impl<C> From<Element<C>> for Node<C> {
    fn from(element: Element<C>) -> Self {
        Node::Element(element)
    }
}

impl<C> Node<C> {
    pub fn region(&self) -> Option<Region> {
        match self {
            Node::Element(el) => Some(el.region),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element<C>> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node<C>] {
        match self {
            Node::Element(el) => &el.children,
            Node::Cell(cell) => std::slice::from_ref(&*cell.child),
            Node::Content(_) => &[],
        }
    }

    /// All elements of `region` in document order, including `self`.
    pub fn find_all(&self, region: Region) -> Vec<&Element<C>> {
        let mut found = Vec::new();
        self.collect(region, &mut found);
        found
    }

    fn collect<'a>(&'a self, region: Region, found: &mut Vec<&'a Element<C>>) {
        if let Node::Element(el) = self {
            if el.region == region {
                found.push(el);
            }
        }
        for child in self.children() {
            child.collect(region, found);
        }
    }

    pub fn count(&self, region: Region) -> usize {
        self.find_all(region).len()
    }

    pub fn map_content<D>(self, f: &mut impl FnMut(C) -> D) -> Node<D> {
        match self {
            Node::Content(c) => Node::Content(f(c)),
            Node::Cell(cell) => Node::Cell(GridCell {
                spans: cell.spans,
                child: Box::new(cell.child.map_content(f)),
            }),
            Node::Element(el) => Node::Element(Element {
                region: el.region,
                tag: el.tag,
                class: el.class,
                key: el.key,
                style: el.style,
                attrs: el.attrs,
                children: el.children.into_iter().map(|c| c.map_content(f)).collect(),
            }),
        }
    }
}
