use crate::content::normalize::normalize_tags;
use crate::content::{Block, Post, PostStatus};

/// Raw editor field values, as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub slug: String,
    pub tags: String,
    pub description: String,
    pub status: String,
    pub blocks: Vec<Block>,
}

impl PostForm {
    pub fn from_post(post: &Post) -> PostForm {
        PostForm {
            title: post.title.clone(),
            slug: post.slug.clone(),
            tags: post.tags.join(", "),
            description: post.description.clone(),
            status: post.status.as_str().to_string(),
            blocks: post.blocks.clone(),
        }
    }

    /// Builds the post being edited. Timestamps and author are left for
    /// [`Post::stamp_for_save`], so an existing `created` must be carried
    /// over by the caller.
    pub fn into_post(self) -> Post {
        let blocks = self.blocks.into_iter().map(Self::clean_block).collect();
        Post {
            title: self.title,
            slug: self.slug.trim().to_string(),
            tags: normalize_tags(&self.tags),
            description: self.description,
            status: PostStatus::parse(&self.status),
            blocks,
            ..Default::default()
        }
    }

    fn clean_block(block: Block) -> Block {
        match block {
            Block::Code { lang, caption, code } => Block::Code {
                lang: lang.trim().to_string(),
                caption,
                code,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::content::ListStyle;

    use super::*;

    #[test]
    fn test_into_post() {
        let form = PostForm {
            title: "My post".to_string(),
            slug: " my-post ".to_string(),
            tags: "Rust, WEB,,".to_string(),
            description: "".to_string(),
            status: "published".to_string(),
            blocks: vec![Block::code(" JS ", "", "alert(1)"), Block::list(ListStyle::Ordered, "a")],
        };
        let post = form.into_post();
        assert_eq!(post.slug, "my-post");
        assert_eq!(post.tags, ["rust", "web"]);
        assert_eq!(post.status, PostStatus::Published);
        assert_eq!(post.blocks[0], Block::code("JS", "", "alert(1)"));
        assert_eq!(post.blocks[1], Block::list(ListStyle::Ordered, "a"));
        assert_eq!(post.created, None);
    }

    #[test]
    fn test_empty_status_is_draft() {
        let post = PostForm::default().into_post();
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post, Post::default());
    }

    #[test]
    fn test_from_post_joins_tags() {
        let post = Post {
            tags: vec!["a".to_string(), "b".to_string()],
            status: PostStatus::Published,
            ..Default::default()
        };
        let form = PostForm::from_post(&post);
        assert_eq!(form.tags, "a, b");
        assert_eq!(form.status, "published");
        assert_eq!(form.into_post().tags, post.tags);
    }
}
