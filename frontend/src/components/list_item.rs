use leptos::*;
use listkit_shared::item::{self, ItemChild, ItemId, ItemProps};
use listkit_shared::ListGrid;

use crate::utils::content::Content;
use crate::utils::render::node_view;

/// One row of a list, or one card when `grid` is set.
///
/// `content` takes the item's children; Leptos reserves `children` for
/// view-macro children, so the list is passed explicitly. It mixes meta
/// blocks and free content; meta blocks are always placed first. When `extra` is present the body moves into a main column
/// beside it. Attributes given with `attr:` land on the item `<div>`.
#[component]
pub fn ListItem(
    #[prop(optional)] id: Option<ItemId>,
    #[prop(optional)] content: Vec<ItemChild<Content>>,
    #[prop(optional)] actions: Vec<Content>,
    #[prop(optional, into)] extra: Option<Content>,
    #[prop(optional)] grid: Option<ListGrid>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] prefix_cls: Option<String>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let item = item::ListItem::new(id.unwrap_or_else(ItemId::next));

    let node = item.render(ItemProps {
        children: content,
        actions,
        extra,
        grid,
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
    use listkit_shared::MetaProps;
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

    fn actions(labels: &[&str]) -> Vec<Content> {
        labels.iter().map(|label| Content::from(*label)).collect()
    }

    #[wasm_bindgen_test]
    fn test_grid_item_keeps_attributes_on_item_div() {
        let root = mount(|| {
            view! {
                <ListItem
                    id=ItemId::new(7)
                    grid=ListGrid::columns(4)
                    actions=actions(&["a", "b", "c"])
                    class="card"
                    attr:data-x="1"
                />
            }
            .into_view()
        });

        assert_eq!(count(&root, ".ant-col-6 > .ant-list-item.card[data-x]"), 1);
        assert_eq!(count(&root, ".ant-col-6[data-x]"), 0);
        assert_eq!(count(&root, "ul.ant-list-item-action"), 1);
        assert_eq!(count(&root, "ul.ant-list-item-action > li"), 3);
        assert_eq!(count(&root, "em.ant-list-item-action-split"), 2);
        assert_eq!(count(&root, "li[data-key='ant-list-item-action-7-0'] > em"), 1);
        assert_eq!(count(&root, "li[data-key='ant-list-item-action-7-2'] > em"), 0);
    }

    #[wasm_bindgen_test]
    fn test_plain_item_without_actions() {
        let root = mount(|| view! { <ListItem attr:data-x="2" /> }.into_view());

        assert_eq!(count(&root, "div.ant-list-item[data-x]"), 1);
        assert_eq!(count(&root, "[class^='ant-col']"), 0);
        assert_eq!(count(&root, ".ant-list-item > .ant-list-item-content"), 1);
        assert_eq!(count(&root, ".ant-list-item-action"), 0);
        assert_eq!(count(&root, ".ant-list-item-extra-wrap"), 0);
    }

    #[wasm_bindgen_test]
    fn test_view_extra_moves_body_into_main() {
        let root = mount(|| {
            let extra = view! { <img class="logo" src="/logo.png" /> }.into_view();
            let content = vec![
                ItemChild::Meta(MetaProps::titled(Content::from("Title"))),
                ItemChild::Other(Content::from("Body")),
            ];
            view! {
                <ListItem content=content actions=actions(&["edit"]) extra=extra />
            }
            .into_view()
        });

        assert_eq!(
            count(&root, ".ant-list-item > .ant-list-item-extra-wrap > .ant-list-item-extra > img.logo"),
            1
        );
        assert_eq!(count(&root, ".ant-list-item-main > .ant-list-item-meta"), 1);
        assert_eq!(count(&root, ".ant-list-item-main > .ant-list-item-content"), 1);
        assert_eq!(count(&root, ".ant-list-item-main > .ant-list-item-action"), 1);
        assert_eq!(count(&root, ".ant-list-item > .ant-list-item-content"), 0);
        assert_eq!(count(&root, ".ant-list-item-content"), 1);
        assert_eq!(count(&root, "em.ant-list-item-action-split"), 0);
    }

    #[wasm_bindgen_test]
    fn test_empty_text_extra_is_absent() {
        let root = mount(|| view! { <ListItem extra="" /> }.into_view());

        assert_eq!(count(&root, ".ant-list-item-extra-wrap"), 0);
        assert_eq!(count(&root, ".ant-list-item > .ant-list-item-content"), 1);
    }
}
