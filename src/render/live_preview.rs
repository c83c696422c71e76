use spdlog::debug;

use crate::config;
use crate::content::Block;
use crate::render::sandbox::render_sandbox_document;

pub const DEFAULT_PLACEHOLDER: &str = "<!doctype html><html><body><pre>No HTML/CSS/JS blocks.</pre></body></html>";

/// Host side of the live preview: turns the blocks being edited into the
/// page loaded by the isolated preview frame.
pub struct LivePreview {
    placeholder: String,
}

impl Default for LivePreview {
    fn default() -> Self {
        LivePreview {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl LivePreview {
    pub fn new(cfg: &config::LivePreview) -> LivePreview {
        match cfg.placeholder {
            Some(ref placeholder) => LivePreview { placeholder: placeholder.clone() },
            None => LivePreview::default(),
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn document_for(&self, blocks: &[Block]) -> String {
        match render_sandbox_document(blocks) {
            Some(doc) => doc.to_markup(),
            None => {
                debug!("No runnable blocks among {}, using placeholder", blocks.len());
                self.placeholder.clone()
            }
        }
    }
}
