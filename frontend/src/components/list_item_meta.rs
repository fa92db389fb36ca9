use leptos::*;
use listkit_shared::{render_meta, MetaProps};

use crate::utils::content::Content;
use crate::utils::render::node_view;

/// Avatar, title and description block of a list item.
#[component]
pub fn ListItemMeta(
    #[prop(optional, into)] avatar: Option<Content>,
    #[prop(optional, into)] title: Option<Content>,
    #[prop(optional, into)] description: Option<Content>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let node = render_meta(MetaProps {
        avatar,
        title,
        description,
        class,
        style,
        prefix_cls,
        attrs: Vec::new(),
    });

    node_view(node, &mut Some(attributes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(f: impl FnOnce() -> View + 'static) -> web_sys::HtmlElement {
        let container = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document().body().unwrap().append_child(&container).unwrap();
        mount_to(container.clone(), f);
        container
    }

    fn count(root: &web_sys::HtmlElement, selector: &str) -> u32 {
        root.query_selector_all(selector).unwrap().length()
    }

    #[wasm_bindgen_test]
    fn test_meta_slots_and_attributes() {
        let root = mount(|| {
            view! {
                <ListItemMeta title="Title" description="Description" attr:data-y="1" />
            }
            .into_view()
        });

        assert_eq!(count(&root, "div.ant-list-item-meta[data-y]"), 1);
        assert_eq!(count(&root, ".ant-list-item-meta-content > h4.ant-list-item-meta-title"), 1);
        assert_eq!(count(&root, ".ant-list-item-meta-content > .ant-list-item-meta-description"), 1);
        assert_eq!(count(&root, ".ant-list-item-meta-avatar"), 0);
    }

    #[wasm_bindgen_test]
    fn test_meta_avatar_only() {
        let root = mount(|| {
            let avatar = view! { <span class="avatar">"A"</span> }.into_view();
            view! { <ListItemMeta avatar=avatar prefix_cls="my-list" /> }.into_view()
        });

        assert_eq!(count(&root, ".my-list-item-meta > .my-list-item-meta-avatar > span.avatar"), 1);
        assert_eq!(count(&root, ".my-list-item-meta-content"), 0);
    }
}
