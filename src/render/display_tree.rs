use crate::content::normalize::normalize_list_items;
use crate::content::{Block, ListStyle, Post};
use crate::render::{DisplayNode, Role};
use crate::text_utils::escape_html;

/// Projects a post into the tree shown by the editor preview and the public
/// article view.
///
/// The result only depends on `post`, so rendering an unchanged post twice
/// yields equal trees. Blocks of an unknown type produce nothing.
pub fn render_display_tree(post: &Post) -> DisplayNode {
    let mut article = DisplayNode::new(Role::Article)
        .with_child(DisplayNode::literal(Role::Heading, post.display_title()));

    if !post.description.is_empty() {
        article.children.push(
            DisplayNode::literal(Role::Paragraph, &post.description).with_attribute("class", "desc")
        );
    }

    for block in post.blocks.iter() {
        if let Some(node) = render_block(block) {
            article.children.push(node);
        }
    }

    article
}

fn render_block(block: &Block) -> Option<DisplayNode> {
    let node = match block {
        Block::Text { text } => {
            let mut p = DisplayNode::new(Role::Paragraph);
            p.children = escaped_lines(text);
            p
        }
        Block::Code { lang, caption, code } => render_code(lang, caption, code),
        Block::Quote { text, cite } => {
            let mut quote = DisplayNode::new(Role::Blockquote);
            quote.children = escaped_lines(text);
            if !cite.is_empty() {
                quote.children.push(DisplayNode::new(Role::LineBreak));
                quote.children.push(
                    DisplayNode::literal(Role::Attribution, &format!("— {}", cite))
                        .with_attribute("class", "muted")
                );
            }
            quote
        }
        Block::List { style, items } => {
            let role = match style {
                ListStyle::Ordered => Role::OrderedList,
                ListStyle::Unordered => Role::UnorderedList,
            };
            let mut list = DisplayNode::new(role);
            list.children = normalize_list_items(items).iter()
                .map(|item| DisplayNode::literal(Role::ListItem, item))
                .collect();
            list
        }
        Block::Divider => DisplayNode::new(Role::Separator),
        Block::Unknown(_) => return None,
    };

    Some(node)
}

fn render_code(lang: &str, caption: &str, code: &str) -> DisplayNode {
    let summary = if !caption.is_empty() {
        caption.to_string()
    } else if !lang.is_empty() {
        format!("{} code", lang.to_uppercase())
    } else {
        "Code block".to_string()
    };

    let mut code_node = DisplayNode::literal(Role::Code, code);
    if !lang.is_empty() {
        code_node = code_node.with_attribute("class", &format!("language-{}", lang.to_lowercase()));
    }

    DisplayNode::new(Role::Details)
        .with_attribute("open", "")
        .with_child(DisplayNode::literal(Role::Summary, &summary))
        .with_child(DisplayNode::new(Role::Preformatted).with_child(code_node))
}

// Escaped runs with a line break wherever the text had a newline.
fn escaped_lines(text: &str) -> Vec<DisplayNode> {
    let mut nodes = vec![];
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            nodes.push(DisplayNode::new(Role::LineBreak));
        }
        if !line.is_empty() {
            nodes.push(DisplayNode::escaped_run(escape_html(line)));
        }
    }
    nodes
}
