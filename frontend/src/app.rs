use leptos::*;
use listkit_shared::{ItemChild, ItemId, ListGrid, MetaProps};

use crate::components::list_item::ListItem;
use crate::utils::content::Content;

struct Sample {
    initial: &'static str,
    title: &'static str,
    description: &'static str,
}

static SAMPLES: [Sample; 3] = [
    Sample {
        initial: "A",
        title: "Ant Design Title 1",
        description: "A design language for background applications",
    },
    Sample {
        initial: "B",
        title: "Ant Design Title 2",
        description: "Refined by Ant UED Team",
    },
    Sample {
        initial: "C",
        title: "Ant Design Title 3",
        description: "Supplying the basic components",
    },
];

const BLURB: &str =
    "We supply a series of design principles, practical patterns and high quality design resources.";

fn meta(sample: &Sample) -> ItemChild<Content> {
    let avatar = view! { <span class="avatar">{sample.initial}</span> }.into_view();
    ItemChild::Meta(
        MetaProps::titled(Content::from(sample.title))
            .with_description(Content::from(sample.description))
            .with_avatar(Content::from(avatar)),
    )
}

fn actions() -> Vec<Content> {
    vec![Content::from("edit"), Content::from("more")]
}

#[component]
fn BasicList() -> impl IntoView {
    let rows = SAMPLES
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let content = vec![meta(sample)];
            view! {
                <ListItem
                    id=ItemId::from_position(i)
                    content=content
                    actions=actions()
                    attr:data-index=i
                />
            }
        })
        .collect_view();

    view! {
        <div class="ant-list ant-list-split">{rows}</div>
    }
}

#[component]
fn VerticalList() -> impl IntoView {
    let rows = SAMPLES
        .iter()
        .map(|sample| {
            let content = vec![meta(sample), ItemChild::Other(Content::from(BLURB))];
            let extra = view! { <img width="272" alt="logo" src="/logo.png" /> }.into_view();
            view! {
                <ListItem content=content actions=actions() extra=extra />
            }
        })
        .collect_view();

    view! {
        <div class="ant-list ant-list-vertical">{rows}</div>
    }
}

#[component]
fn GridList() -> impl IntoView {
    let grid = ListGrid {
        md: Some(2),
        ..ListGrid::columns(4)
    };
    let cards = (0..8)
        .map(|i| {
            let content = vec![ItemChild::Other(Content::from(format!("Card content {}", i + 1)))];
            view! {
                <ListItem id=ItemId::from_position(i) grid=grid content=content />
            }
        })
        .collect_view();

    view! {
        <div class="ant-list ant-list-grid">
            <div class="ant-row">{cards}</div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main>
            <section>
                <h2>"Basic list"</h2>
                <BasicList />
            </section>
            <section>
                <h2>"Vertical list with extra"</h2>
                <VerticalList />
            </section>
            <section>
                <h2>"Grid list"</h2>
                <GridList />
            </section>
        </main>
    }
}
