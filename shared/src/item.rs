use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::classes::{action_key, prefix_or_default};
use crate::grid::ListGrid;
use crate::meta::{render_meta, MetaProps};
use crate::node::{Element, GridCell, Node, Region};
use crate::presence::Presence;

// ============================================================================
// Children
// ============================================================================

/// A child of a list item. Meta blocks are tagged by the caller instead of
/// being recognised by type at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
#[serde(bound(deserialize = "C: Deserialize<'de>"))]
pub enum ItemChild<C> {
    Meta(MetaProps<C>),
    Other(C),
}

impl<C> ItemChild<C> {
    pub fn is_meta(&self) -> bool {
        matches!(self, ItemChild::Meta(_))
    }
}

impl<C> From<MetaProps<C>> for ItemChild<C> {
    fn from(meta: MetaProps<C>) -> Self {
        ItemChild::Meta(meta)
    }
}

/// Children split into meta blocks and everything else, each keeping its
/// original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Classified<C> {
    pub meta: Vec<MetaProps<C>>,
    pub other: Vec<C>,
}

pub fn classify<C: Presence>(children: impl IntoIterator<Item = ItemChild<C>>) -> Classified<C> {
    let mut meta = Vec::new();
    let mut other = Vec::new();
    for child in children {
        match child {
            ItemChild::Meta(props) => meta.push(props),
            ItemChild::Other(content) if content.is_present() => other.push(content),
            ItemChild::Other(_) => {}
        }
    }
    Classified { meta, other }
}

// ============================================================================
// Identity
// ============================================================================

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one item instance, used only to key its action entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn from_position(index: usize) -> Self {
        Self(index as u64)
    }

    /// Fresh id from a process-wide counter. Never repeats within a run.
    pub fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Props
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "C: Deserialize<'de>"))]
pub struct ItemProps<C> {
    #[serde(default)]
    pub children: Vec<ItemChild<C>>,
    #[serde(default)]
    pub actions: Vec<C>,
    #[serde(default)]
    pub extra: Option<C>,
    #[serde(default)]
    pub grid: Option<ListGrid>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub prefix_cls: Option<String>,
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
}

impl<C> Default for ItemProps<C> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            actions: Vec::new(),
            extra: None,
            grid: None,
            class: None,
            style: None,
            prefix_cls: None,
            attrs: Vec::new(),
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// How the body of an item is arranged. Exactly one is chosen per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Meta, content and actions as direct children of the item.
    Direct,
    /// Meta, content and actions inside a main column next to the extra.
    WithExtra,
}

impl Layout {
    pub fn select<C: Presence>(extra: &Option<C>) -> Self {
        if extra.is_present() {
            Layout::WithExtra
        } else {
            Layout::Direct
        }
    }
}

/// Regions built from the props, before a layout places them.
struct Regions<C> {
    meta: Vec<Node<C>>,
    content: Node<C>,
    actions: Option<Node<C>>,
}

impl<C> Regions<C> {
    fn into_nodes(self) -> impl Iterator<Item = Node<C>> {
        self.meta
            .into_iter()
            .chain(std::iter::once(self.content))
            .chain(self.actions)
    }
}

// ============================================================================
// Item
// ============================================================================

/// One row or card of a list. Holds nothing but its identity; everything
/// else is derived from the props on each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem {
    id: ItemId,
}

impl Default for ListItem {
    fn default() -> Self {
        Self::new(ItemId::next())
    }
}

impl ListItem {
    pub fn new(id: ItemId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Renders the item. Meta children without their own `prefix_cls` take
    /// the item's prefix, not the default one.
    pub fn render<C: Presence>(&self, props: ItemProps<C>) -> Node<C> {
        let ItemProps {
            children,
            actions,
            extra,
            grid,
            class,
            style,
            prefix_cls,
            attrs,
        } = props;
        let prefix = prefix_or_default(prefix_cls.as_deref());

        let classified = classify(children);
        let regions = self.regions(prefix, classified, actions);
        let layout = Layout::select(&extra);
        log::debug!("rendering list item {} with {:?} layout", self.id, layout);

        let body: Vec<Node<C>> = match (layout, extra) {
            (Layout::WithExtra, Some(extra)) => vec![Element::region(Region::ExtraWrap, prefix)
                .child(
                    Element::region(Region::Main, prefix)
                        .children(regions.into_nodes())
                        .into(),
                )
                .child(
                    Element::region(Region::Extra, prefix)
                        .child(Node::Content(extra))
                        .into(),
                )
                .into()],
            _ => regions.into_nodes().collect(),
        };

        let item: Node<C> = Element::styled(Region::Item, prefix, class.as_deref(), style, attrs)
            .children(body)
            .into();

        match grid {
            Some(grid) => {
                let spans = grid.spans();
                log::debug!("wrapping list item {} in grid cell {:?}", self.id, spans);
                Node::Cell(GridCell {
                    spans,
                    child: Box::new(item),
                })
            }
            None => item,
        }
    }

    fn regions<C: Presence>(
        &self,
        prefix: &str,
        classified: Classified<C>,
        actions: Vec<C>,
    ) -> Regions<C> {
        let meta = classified
            .meta
            .into_iter()
            .map(|props| {
                render_meta(MetaProps {
                    prefix_cls: props.prefix_cls.or_else(|| Some(prefix.to_string())),
                    ..props
                })
            })
            .collect();

        let content = Element::region(Region::Content, prefix)
            .children(classified.other.into_iter().map(Node::Content))
            .into();

        Regions {
            meta,
            content,
            actions: self.actions(prefix, actions),
        }
    }

    fn actions<C>(&self, prefix: &str, actions: Vec<C>) -> Option<Node<C>> {
        if actions.is_empty() {
            return None;
        }
        let last = actions.len() - 1;
        let entries = actions.into_iter().enumerate().map(|(i, action)| {
            let mut entry = Element::region(Region::Action, prefix)
                .with_key(action_key(prefix, self.id.value(), i))
                .child(Node::Content(action));
            if i != last {
                entry = entry.child(Element::region(Region::ActionSplit, prefix).into());
            }
            Node::from(entry)
        });
        Some(
            Element::region(Region::Actions, prefix)
                .children(entries)
                .into(),
        )
    }
}
