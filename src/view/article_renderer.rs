use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::content::Post;
use crate::render::display_tree::render_display_tree;
use crate::render::html_writer::to_html;
use crate::text_utils::split_timestamp;

pub const DEFAULT_ARTICLE_TPL: &str = r##"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
</head>
<body>
<div class="meta">{{date}} {{time}}{{#tags}} <span class="tag">{{tag}}</span>{{/tags}}</div>
{{{article}}}
{{#has_permalink}}<p><a href="{{permalink}}">Permalink</a></p>{{/has_permalink}}
</body>
</html>
"##;

#[derive(ramhorns::Content)]
struct ViewTag<'a> {
    tag: &'a str,
}

#[derive(ramhorns::Content)]
struct ArticlePage<'a> {
    title: &'a str,
    status: &'a str,
    tags: Vec<ViewTag<'a>>,
    date: &'a str,
    time: &'a str,
    has_permalink: bool,
    permalink: &'a str,
    article: &'a str,
}

/// Full public page for a post: the display tree serialized to HTML,
/// wrapped by a ramhorns template.
pub struct ArticleRenderer<'a> {
    pub template: Template<'a>,
}

impl<'a> ArticleRenderer<'a> {
    pub fn new(article_tpl_src: &'a str) -> io::Result<ArticleRenderer<'a>> {
        let template = match Template::new(article_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing article template: {}", e)));
            }
        };

        Ok(ArticleRenderer {
            template,
        })
    }

    pub fn render(&self, post: &Post, permalink: Option<&str>) -> String {
        let article = to_html(&render_display_tree(post));
        let tags = post.tags.iter().map(|t| ViewTag { tag: t.as_str() }).collect();
        let (date, time) = match post.updated {
            Some(ref updated) => split_timestamp(updated),
            None => (String::new(), String::new()),
        };

        self.template.render(&ArticlePage {
            title: post.display_title(),
            status: post.status.as_str(),
            tags,
            date: date.as_str(),
            time: time.as_str(),
            has_permalink: permalink.is_some(),
            permalink: permalink.unwrap_or(""),
            article: article.as_str(),
        })
    }
}
