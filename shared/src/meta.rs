use serde::{Deserialize, Serialize};

use crate::classes::prefix_or_default;
use crate::node::{Element, Node, Region};
use crate::presence::Presence;

/// Avatar, title and description block of a list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "C: Deserialize<'de>"))]
pub struct MetaProps<C> {
    #[serde(default)]
    pub avatar: Option<C>,
    #[serde(default)]
    pub title: Option<C>,
    #[serde(default)]
    pub description: Option<C>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub prefix_cls: Option<String>,
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
}

impl<C> Default for MetaProps<C> {
    fn default() -> Self {
        Self {
            avatar: None,
            title: None,
            description: None,
            class: None,
            style: None,
            prefix_cls: None,
            attrs: Vec::new(),
        }
    }
}

impl<C> MetaProps<C> {
    pub fn titled(title: C) -> Self {
        Self {
            title: Some(title),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: C) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_avatar(mut self, avatar: C) -> Self {
        self.avatar = Some(avatar);
        self
    }
}

/// Renders the meta block. The avatar slot exists only with an avatar and
/// the content slot only with a title or a description.
pub fn render_meta<C: Presence>(props: MetaProps<C>) -> Node<C> {
    let MetaProps {
        avatar,
        title,
        description,
        class,
        style,
        prefix_cls,
        attrs,
    } = props;
    let prefix = prefix_or_default(prefix_cls.as_deref());

    let avatar = avatar.filter(Presence::is_present);
    let title = title.filter(Presence::is_present);
    let description = description.filter(Presence::is_present);

    let mut meta = Element::styled(Region::Meta, prefix, class.as_deref(), style, attrs);

    if let Some(avatar) = avatar {
        meta = meta.child(
            Element::region(Region::MetaAvatar, prefix)
                .child(Node::Content(avatar))
                .into(),
        );
    }

    if title.is_some() || description.is_some() {
        let mut content = Element::region(Region::MetaContent, prefix);
        if let Some(title) = title {
            content = content.child(
                Element::region(Region::MetaTitle, prefix)
                    .child(Node::Content(title))
                    .into(),
            );
        }
        if let Some(description) = description {
            content = content.child(
                Element::region(Region::MetaDescription, prefix)
                    .child(Node::Content(description))
                    .into(),
            );
        }
        meta = meta.child(content.into());
    }

    meta.into()
}
