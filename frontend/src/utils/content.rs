use leptos::*;
use listkit_shared::Presence;

/// Renderable payload handed to list items: plain text or an arbitrary view.
#[derive(Clone)]
pub enum Content {
    Text(String),
    View(View),
}

impl Presence for Content {
    fn is_present(&self) -> bool {
        match self {
            Content::Text(text) => !text.is_empty(),
            Content::View(_) => true,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<View> for Content {
    fn from(view: View) -> Self {
        Content::View(view)
    }
}

impl IntoView for Content {
    fn into_view(self) -> View {
        match self {
            Content::Text(text) => text.into_view(),
            Content::View(view) => view,
        }
    }
}
