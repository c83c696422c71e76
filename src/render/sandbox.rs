use std::fmt;
use std::fmt::{Display, Formatter};

use crate::content::{Block, CodeLang};

/// Script runtime errors are appended to the page as red text instead of
/// leaving the preview blank.
const SCRIPT_GUARD_CATCH: &str = "catch(e){var p=document.createElement('pre');p.style.color='red';p.textContent=String(e);document.body.appendChild(p);}";

/// A self-contained page built from the HTML, CSS and JS code blocks of a
/// post. Block content is embedded verbatim: the page is meant to run in an
/// isolated frame, not to be sanitized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandboxDocument {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl SandboxDocument {
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_empty() && self.js.is_empty()
    }

    pub fn to_markup(&self) -> String {
        self.to_string()
    }
}

impl Display for SandboxDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "<!doctype html><html><head><meta charset=\"utf-8\"><style>{}</style></head><body>", self.css)?;
        writeln!(f, "{}", self.html)?;
        writeln!(f, "<script>try{{\n{}}}{}</script>", self.js, SCRIPT_GUARD_CATCH)?;
        write!(f, "</body></html>")
    }
}

/// Collects the runnable code blocks, in block order, one buffer per
/// language. Returns `None` when no block is HTML, CSS or JS; choosing what
/// to show instead is up to the caller.
pub fn render_sandbox_document(blocks: &[Block]) -> Option<SandboxDocument> {
    let mut doc = SandboxDocument::default();

    for block in blocks {
        let Block::Code { lang, code, .. } = block else {
            continue;
        };
        if lang.is_empty() {
            continue;
        }
        let buffer = match CodeLang::classify(lang) {
            Some(CodeLang::Html) => &mut doc.html,
            Some(CodeLang::Css) => &mut doc.css,
            Some(CodeLang::Js) => &mut doc.js,
            None => continue,
        };
        buffer.push_str(code);
        buffer.push('\n');
    }

    if doc.is_empty() {
        None
    } else {
        Some(doc)
    }
}

#[cfg(test)]
mod tests {
    use crate::content::ListStyle;

    use super::*;

    #[test]
    fn test_css_and_js() {
        let blocks = vec![
            Block::code("CSS", "", "body{color:red}"),
            Block::code("js", "", "document.title='x'"),
        ];
        let doc = render_sandbox_document(&blocks).unwrap();
        assert_eq!(doc.css, "body{color:red}\n");
        assert_eq!(doc.js, "document.title='x'\n");
        assert_eq!(doc.html, "");

        let markup = doc.to_markup();
        assert!(markup.starts_with("<!doctype html>"));
        assert!(markup.contains("<style>body{color:red}\n</style>"));
        assert!(markup.contains("<script>try{\ndocument.title='x'\n}catch(e){"));
        assert!(markup.contains("p.textContent=String(e)"));
        assert!(markup.ends_with("</body></html>"));
    }

    #[test]
    fn test_buffers_follow_block_order() {
        let blocks = vec![
            Block::code("html", "", "<p>1</p>"),
            Block::text("between"),
            Block::code("JavaScript", "", "a()"),
            Block::code("HTML", "", "<p>2</p>"),
            Block::code("js", "", "b()"),
        ];
        let doc = render_sandbox_document(&blocks).unwrap();
        assert_eq!(doc.html, "<p>1</p>\n<p>2</p>\n");
        assert_eq!(doc.js, "a()\nb()\n");
        assert_eq!(doc.css, "");
        assert!(doc.to_markup().contains("<body>\n<p>1</p>\n<p>2</p>\n\n<script>"));
    }

    #[test]
    fn test_no_executable_content() {
        let blocks = vec![
            Block::text("hello"),
            Block::code("rust", "", "fn main() {}"),
            Block::code("", "", "<p>no lang</p>"),
            Block::list(ListStyle::Ordered, "a"),
            Block::Divider,
            Block::Unknown(serde_json::json!({"type": "embed", "code": "x"})),
        ];
        assert_eq!(render_sandbox_document(&blocks), None);
        assert_eq!(render_sandbox_document(&[]), None);
    }

    #[test]
    fn test_empty_code_still_counts() {
        let doc = render_sandbox_document(&[Block::code("css", "", "")]).unwrap();
        assert_eq!(doc.css, "\n");
    }

    #[test]
    fn test_content_is_not_sanitized() {
        let doc = render_sandbox_document(&[Block::code("html", "", "<script>alert(1)</script>")]).unwrap();
        assert!(doc.to_markup().contains("<script>alert(1)</script>"));
    }
}
