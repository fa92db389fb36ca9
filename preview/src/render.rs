use listkit_shared::{escape, to_html, ItemId, ItemProps, ListItem};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::PreviewError;

pub fn load_items(path: &Path) -> Result<Vec<ItemProps<String>>, PreviewError> {
    let json = fs::read_to_string(path).map_err(|source| PreviewError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<ItemProps<String>> = serde_json::from_str(&json)?;
    log::info!("Loaded {} list items from {}", items.len(), path.display());
    Ok(items)
}

/// Renders the items as one list. Items are keyed by position; items
/// without a prefix take the configured one.
pub fn render_list(items: Vec<ItemProps<String>>, config: &Config) -> Result<String, PreviewError> {
    let prefix = config.prefix_cls.as_str();
    let grid = items.iter().any(|item| item.grid.is_some());

    let mut body = String::new();
    for (index, mut props) in items.into_iter().enumerate() {
        if let Some(grid) = &props.grid {
            if let Err(source) = grid.validate() {
                if config.strict_grid {
                    return Err(PreviewError::Grid { index, source });
                }
            }
        }
        if props.prefix_cls.is_none() {
            props.prefix_cls = Some(prefix.to_string());
        }
        let node = ListItem::new(ItemId::from_position(index)).render(props);
        body.push_str(&to_html(&node));
    }

    let prefix = escape(prefix);
    Ok(if grid {
        format!(
            "<div class=\"{prefix} {prefix}-grid\"><div class=\"ant-row\">{body}</div></div>",
            prefix = prefix,
            body = body
        )
    } else {
        format!(
            "<div class=\"{prefix} {prefix}-split\">{body}</div>",
            prefix = prefix,
            body = body
        )
    })
}
