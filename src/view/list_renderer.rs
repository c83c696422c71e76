use std::io;
use std::io::ErrorKind;

use ramhorns::Template;

use crate::post_list::{permalink, PostEntry};
use crate::text_utils::split_timestamp;

/// Terminal listing, one post per line.
pub const DEFAULT_LIST_TPL: &str = "{{#post_list}}{{{id}}}  {{status}}  {{date}} {{time}}  {{{title}}}{{#has_tags}}  [{{{tags}}}]{{/has_tags}}\n{{/post_list}}{{^post_list}}No posts.\n{{/post_list}}";

#[derive(ramhorns::Content)]
struct ListPage<'a> {
    post_list: Vec<PostItem<'a>>,
    tags: Vec<ViewTag<'a>>,
}

#[derive(ramhorns::Content)]
struct PostItem<'a> {
    id: &'a str,
    status: &'a str,
    date: String,
    time: String,
    link: String,
    title: &'a str,
    has_tags: bool,
    tags: String,
}

#[derive(ramhorns::Content)]
struct ViewTag<'a> {
    tag: &'a str,
}

pub struct ListRenderer<'a> {
    pub template: Template<'a>,
    pub base_url: String,
}

impl<'a> ListRenderer<'a> {
    pub fn new(list_tpl_src: &'a str, base_url: &str) -> io::Result<ListRenderer<'a>> {
        let template = match Template::new(list_tpl_src) {
            Ok(x) => x,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error parsing list template: {}", e)));
            }
        };

        Ok(ListRenderer {
            template,
            base_url: base_url.to_string(),
        })
    }

    pub fn render(&self, entries: &[&PostEntry], tags: &[String]) -> String {
        let mut post_list = vec![];
        for entry in entries {
            let post = &entry.post;
            let (date, time) = split_timestamp(post.updated.as_deref().unwrap_or(""));
            post_list.push(PostItem {
                id: entry.id.0.as_str(),
                status: post.status.as_str(),
                date,
                time,
                link: permalink(&self.base_url, &post.slug),
                title: post.display_title(),
                has_tags: !post.tags.is_empty(),
                tags: post.tags.join(", "),
            });
        }

        let tags: Vec<_> = tags.iter().map(|t| ViewTag { tag: t.as_str() }).collect();
        self.template.render(&ListPage {
            post_list,
            tags,
        })
    }
}
