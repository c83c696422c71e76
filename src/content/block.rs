use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::null_as_default;

/// One unit of post content. The `type` field selects the variant.
///
/// `Unknown` keeps the raw record of any block this version can't read, so
/// saving a post writes it back untouched. Renderers skip it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
    },
    Code {
        #[serde(default, deserialize_with = "null_as_default")]
        lang: String,
        #[serde(default, deserialize_with = "null_as_default")]
        caption: String,
        #[serde(default, deserialize_with = "null_as_default")]
        code: String,
    },
    Quote {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default, deserialize_with = "null_as_default")]
        cite: String,
    },
    List {
        #[serde(default)]
        style: ListStyle,
        #[serde(default, deserialize_with = "null_as_default")]
        items: String,
    },
    Divider,
    #[serde(untagged)]
    Unknown(Value),
}

impl Block {
    pub fn text(text: &str) -> Block {
        Block::Text { text: text.to_string() }
    }

    pub fn code(lang: &str, caption: &str, code: &str) -> Block {
        Block::Code {
            lang: lang.to_string(),
            caption: caption.to_string(),
            code: code.to_string(),
        }
    }

    pub fn quote(text: &str, cite: &str) -> Block {
        Block::Quote {
            text: text.to_string(),
            cite: cite.to_string(),
        }
    }

    pub fn list(style: ListStyle, items: &str) -> Block {
        Block::List {
            style,
            items: items.to_string(),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Block::Text { .. } => "text",
            Block::Code { .. } => "code",
            Block::Quote { .. } => "quote",
            Block::List { .. } => "list",
            Block::Divider => "divider",
            Block::Unknown(raw) => raw.get("type").and_then(Value::as_str).unwrap_or("unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

impl ListStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListStyle::Ordered => "ol",
            ListStyle::Unordered => "ul",
        }
    }

    pub fn parse(raw: &str) -> ListStyle {
        match raw.trim() {
            "ol" | "ordered" => ListStyle::Ordered,
            _ => ListStyle::Unordered,
        }
    }
}

impl From<Option<String>> for ListStyle {
    fn from(value: Option<String>) -> Self {
        value.map(|s| ListStyle::parse(&s)).unwrap_or_default()
    }
}

impl From<ListStyle> for String {
    fn from(value: ListStyle) -> Self {
        value.as_str().to_string()
    }
}

/// Languages the live preview knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLang {
    Html,
    Css,
    Js,
}

impl CodeLang {
    pub fn classify(lang: &str) -> Option<CodeLang> {
        match lang.to_lowercase().as_str() {
            "html" => Some(CodeLang::Html),
            "css" => Some(CodeLang::Css),
            "js" | "javascript" => Some(CodeLang::Js),
            _ => None,
        }
    }
}
