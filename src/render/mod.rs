pub mod display_tree;
pub mod html_writer;
pub mod live_preview;
pub mod sandbox;

/// What a display node stands for. The presentation layer decides how each
/// role is materialized; [`html_writer`] maps them onto HTML elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Article,
    Heading,
    Paragraph,
    TextRun,
    LineBreak,
    Details,
    Summary,
    Preformatted,
    Code,
    Blockquote,
    Attribution,
    OrderedList,
    UnorderedList,
    ListItem,
    Separator,
}

impl Role {
    pub fn tag_name(&self) -> &'static str {
        match self {
            Role::Article => "article",
            Role::Heading => "h1",
            Role::Paragraph => "p",
            Role::TextRun => "",
            Role::LineBreak => "br",
            Role::Details => "details",
            Role::Summary => "summary",
            Role::Preformatted => "pre",
            Role::Code => "code",
            Role::Blockquote => "blockquote",
            Role::Attribution => "div",
            Role::OrderedList => "ol",
            Role::UnorderedList => "ul",
            Role::ListItem => "li",
            Role::Separator => "hr",
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, Role::LineBreak | Role::Separator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeText {
    /// Plain text. Must be shown as is, never read as markup.
    Literal(String),
    /// Text whose `& < > "` are already escaped.
    Escaped(String),
}

impl NodeText {
    pub fn as_str(&self) -> &str {
        match self {
            NodeText::Literal(s) => s.as_str(),
            NodeText::Escaped(s) => s.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNode {
    pub role: Role,
    pub text: Option<NodeText>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<DisplayNode>,
}

impl DisplayNode {
    pub fn new(role: Role) -> DisplayNode {
        DisplayNode {
            role,
            text: None,
            attributes: vec![],
            children: vec![],
        }
    }

    pub fn literal(role: Role, text: &str) -> DisplayNode {
        let mut node = DisplayNode::new(role);
        node.text = Some(NodeText::Literal(text.to_string()));
        node
    }

    pub fn escaped_run(text: String) -> DisplayNode {
        let mut node = DisplayNode::new(Role::TextRun);
        node.text = Some(NodeText::Escaped(text));
        node
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> DisplayNode {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: DisplayNode) -> DisplayNode {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Language hint for a syntax highlighter, taken from the
    /// `language-*` class of a code node.
    pub fn highlight_hint(&self) -> Option<&str> {
        if self.role != Role::Code {
            return None;
        }
        self.attribute("class")
            .and_then(|class| class.strip_prefix("language-"))
    }

    /// Depth-first search for the first node with the given role.
    pub fn find(&self, role: Role) -> Option<&DisplayNode> {
        if self.role == role {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(role))
    }
}
