pub mod grid_col;
pub mod list_item;
pub mod list_item_meta;

pub use grid_col::GridCol;
pub use list_item::ListItem;
pub use list_item_meta::ListItemMeta;
