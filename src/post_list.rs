use std::collections::BTreeSet;

use crate::content::{Post, PostId, PostStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct PostEntry {
    pub id: PostId,
    pub post: Post,
}

/// Posts ordered by last update, newest first. Posts never saved go last.
pub struct PostList {
    entries: Vec<PostEntry>,
}

impl PostList {
    pub fn new(mut entries: Vec<PostEntry>) -> Self {
        entries.sort_by(|a, b| b.post.updated.cmp(&a.post.updated));
        PostList {
            entries,
        }
    }

    pub fn entries(&self) -> &[PostEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Public view: drafts are never listed.
    pub fn published_only(self) -> PostList {
        let entries = self.entries.into_iter()
            .filter(|e| e.post.status == PostStatus::Published)
            .collect();
        PostList { entries }
    }

    /// Case-insensitive match of `query` on the title or on the tags, and
    /// tag membership when `tag` is given. Both are compared the way tags are
    /// stored, trimmed and lower-cased. A blank query matches everything.
    pub fn filter(&self, query: &str, tag: Option<&str>) -> Vec<&PostEntry> {
        let query = query.trim().to_lowercase();
        let tag = tag.map(|t| t.trim().to_lowercase());
        self.entries.iter()
            .filter(|e| query.is_empty() || Self::matches(&e.post, &query))
            .filter(|e| match tag {
                None => true,
                Some(ref tag) => e.post.tags.iter().any(|t| t == tag),
            })
            .collect()
    }

    fn matches(post: &Post, query: &str) -> bool {
        post.title.to_lowercase().contains(query)
            || post.tags.join(",").to_lowercase().contains(query)
    }

    /// Every tag in use, sorted and without repetition.
    pub fn all_tags(&self) -> Vec<String> {
        let tags: BTreeSet<&String> = self.entries.iter()
            .flat_map(|e| e.post.tags.iter())
            .collect();
        tags.into_iter().cloned().collect()
    }

    pub fn find(&self, id: &PostId) -> Option<&PostEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&PostEntry> {
        self.entries.iter().find(|e| e.post.slug == slug)
    }
}

/// Shareable link to a post, `base?slug=<slug>`.
pub fn permalink(base: &str, slug: &str) -> String {
    let query = serde_urlencoded::to_string([("slug", slug)]).unwrap_or_default();
    format!("{}?{}", base, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, title: &str, tags: &[&str], status: PostStatus, updated: Option<&str>) -> PostEntry {
        PostEntry {
            id: PostId(id.to_string()),
            post: Post {
                title: title.to_string(),
                slug: format!("{}-slug", id),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                status,
                updated: updated.map(|u| u.to_string()),
                ..Default::default()
            },
        }
    }

    fn sample() -> PostList {
        PostList::new(vec![
            entry("a", "Rust tips", &["rust", "tips"], PostStatus::Published, Some("2024-01-01T00:00:00.000Z")),
            entry("b", "Never saved", &[], PostStatus::Draft, None),
            entry("c", "CSS grid", &["css", "web"], PostStatus::Draft, Some("2024-03-01T00:00:00.000Z")),
            entry("d", "Web things", &["web"], PostStatus::Published, Some("2024-02-01T00:00:00.000Z")),
        ])
    }

    fn ids(entries: &[&PostEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.0.clone()).collect()
    }

    #[test]
    fn test_sorted_by_updated() {
        let list = sample();
        let order: Vec<&str> = list.entries().iter().map(|e| e.id.0.as_str()).collect();
        assert_eq!(order, ["c", "d", "a", "b"]);
    }

    #[test]
    fn test_search() {
        let list = sample();
        assert_eq!(ids(&list.filter("RUST", None)), ["a"]);
        assert_eq!(ids(&list.filter("web", None)), ["c", "d"]);
        assert_eq!(ids(&list.filter("  ", None)).len(), 4);
        assert!(list.filter("nothing", None).is_empty());
    }

    #[test]
    fn test_tag_filter() {
        let list = sample();
        assert_eq!(ids(&list.filter("", Some("web"))), ["c", "d"]);
        assert_eq!(ids(&list.filter("css", Some("web"))), ["c"]);
        assert!(list.filter("", Some("we")).is_empty());
        assert_eq!(ids(&list.filter("", Some(" Web "))), ["c", "d"]);
    }

    #[test]
    fn test_published_only() {
        let list = sample().published_only();
        assert_eq!(list.len(), 2);
        assert_eq!(list.all_tags(), ["rust", "tips", "web"]);
    }

    #[test]
    fn test_all_tags() {
        assert_eq!(sample().all_tags(), ["css", "rust", "tips", "web"]);
    }

    #[test]
    fn test_find() {
        let list = sample();
        assert_eq!(list.find_by_slug("d-slug").map(|e| e.post.title.as_str()), Some("Web things"));
        assert!(list.find_by_slug("").is_none());
        assert!(list.find(&PostId("b".to_string())).is_some());
    }

    #[test]
    fn test_permalink() {
        assert_eq!(permalink("https://x.com/", "hello-world"), "https://x.com/?slug=hello-world");
        assert_eq!(permalink("/", "a b&c"), "/?slug=a+b%26c");
    }
}
