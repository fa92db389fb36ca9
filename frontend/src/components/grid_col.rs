use leptos::*;
use listkit_shared::classes::COL_PREFIX_CLS;
use listkit_shared::GridSpans;

/// Column of the responsive grid, sized per breakpoint in 24ths.
#[component]
pub fn GridCol(
    spans: GridSpans,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let mut classes = spans.col_classes(COL_PREFIX_CLS);
    if let Some(extra) = class {
        classes.push(extra);
    }
    let full_class = classes.join(" ");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}
