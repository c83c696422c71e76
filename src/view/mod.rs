pub mod article_renderer;
pub mod list_renderer;
