pub mod classes;
pub mod error;
pub mod grid;
pub mod html;
pub mod item;
pub mod meta;
pub mod node;
pub mod presence;

pub use classes::DEFAULT_PREFIX_CLS;
pub use error::GridError;
pub use grid::{Breakpoint, GridSpans, ListGrid};
pub use html::{escape, to_html};
pub use item::{classify, Classified, ItemChild, ItemId, ItemProps, Layout, ListItem};
pub use meta::{render_meta, MetaProps};
pub use node::{Element, GridCell, Node, Region, Tag};
pub use presence::Presence;
