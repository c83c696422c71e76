pub mod config;
pub mod content;
pub mod logger;
pub mod post_list;
pub mod post_store;
pub mod render;
pub mod text_utils;
pub mod util;
pub mod view;
mod test_data;

pub use crate::content::normalize::{normalize_list_items, normalize_tags};
pub use crate::content::{Block, Post};
pub use crate::render::display_tree::render_display_tree;
pub use crate::render::sandbox::{render_sandbox_document, SandboxDocument};
