use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

pub use crate::content::block::{Block, CodeLang, ListStyle};

pub mod block;
pub mod form;
pub mod normalize;

pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct PostId(pub String);

impl Display for PostId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }

    /// Anything other than `published` is a draft.
    pub fn parse(raw: &str) -> PostStatus {
        match raw.trim() {
            "published" => PostStatus::Published,
            _ => PostStatus::Draft,
        }
    }
}

impl From<Option<String>> for PostStatus {
    fn from(value: Option<String>) -> Self {
        value.map(|s| PostStatus::parse(&s)).unwrap_or_default()
    }
}

impl From<PostStatus> for String {
    fn from(value: PostStatus) -> Self {
        value.as_str().to_string()
    }
}

impl Display for PostStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A post as it is edited, stored and rendered.
///
/// Field names follow the stored record layout, so a record written by any
/// other client round-trips through this type unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub status: PostStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub author_uid: Option<String>,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, status={}, updated={}\ntitle={}\nblocks={}",
               self.slug,
               self.status,
               self.updated.as_deref().unwrap_or("-"),
               self.display_title(),
               self.blocks.len()
        )
    }
}

impl Post {
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            UNTITLED
        } else {
            title
        }
    }

    /// Applies the save-time rules: `updated` always moves to `now`,
    /// `created` is only set the first time.
    pub fn stamp_for_save(&mut self, now: &str, author_uid: Option<&str>) {
        self.title = self.display_title().to_string();
        self.slug = self.slug.trim().to_string();
        self.updated = Some(now.to_string());
        if self.created.is_none() {
            self.created = Some(now.to_string());
        }
        self.author_uid = author_uid.map(|s| s.to_string());
    }

    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn insert_block(&mut self, index: usize, block: Block) {
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        if index < self.blocks.len() {
            Some(self.blocks.remove(index))
        } else {
            None
        }
    }

    pub fn replace_block(&mut self, index: usize, block: Block) -> Option<Block> {
        let slot = self.blocks.get_mut(index)?;
        Some(std::mem::replace(slot, block))
    }

    /// Moves a block up (negative delta) or down. Returns false and leaves
    /// the sequence untouched when either end would fall outside it.
    pub fn move_block(&mut self, index: usize, delta: isize) -> bool {
        if index >= self.blocks.len() {
            return false;
        }
        let target = index as isize + delta;
        if target < 0 || target as usize >= self.blocks.len() {
            return false;
        }
        let block = self.blocks.remove(index);
        self.blocks.insert(target as usize, block);
        true
    }
}

/// Stored records may carry explicit nulls where a value is expected.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
