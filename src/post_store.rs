use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{fs, io};

use spdlog::{debug, info, warn};
use uuid::Uuid;

use crate::content::{Post, PostId};
use crate::post_list::PostEntry;

const POST_EXTENSION: &str = "json";

/// Posts kept as `<id>.json` files in a single directory.
pub struct PostStore {
    pub root_dir: PathBuf,
}

impl PostStore {
    pub fn new(root_dir: &Path) -> PostStore {
        PostStore {
            root_dir: root_dir.to_path_buf(),
        }
    }

    fn path_for(&self, id: &PostId) -> io::Result<PathBuf> {
        let PostId(ref name) = *id;
        if name.is_empty() || name.contains(&['/', '\\'][..]) || name.starts_with('.') {
            return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post id: {}", name)));
        }
        Ok(self.root_dir.join(format!("{}.{}", name, POST_EXTENSION)))
    }

    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        if !self.root_dir.exists() {
            return Ok(posts);
        }

        for entry in fs::read_dir(self.root_dir.as_path())? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(POST_EXTENSION) {
                posts.push(path);
            }
        }
        Ok(posts)
    }

    /// Reads every post in the directory. Files that do not parse are
    /// reported and left out.
    pub fn load_all(&self) -> io::Result<Vec<PostEntry>> {
        let mut entries = vec![];
        for path in self.retrieve_files()? {
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match Self::read_post(&path) {
                Ok(post) => entries.push(PostEntry {
                    id: PostId(id.to_string()),
                    post,
                }),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }
        debug!("Loaded {} posts from {}", entries.len(), self.root_dir.display());
        Ok(entries)
    }

    pub fn load(&self, id: &PostId) -> io::Result<Post> {
        Self::read_post(&self.path_for(id)?)
    }

    fn read_post(path: &Path) -> io::Result<Post> {
        let content = fs::read_to_string(path)?;
        match serde_json::from_str::<Post>(&content) {
            Ok(post) => Ok(post),
            Err(e) => Err(io::Error::new(ErrorKind::InvalidData, format!("Error parsing post {}: {}", path.display(), e))),
        }
    }

    /// Stores `post` under `id`, or under a fresh id when `id` is `None`.
    /// An already stored post keeps its original `created` timestamp.
    pub fn save(&self, id: Option<&PostId>, mut post: Post, author_uid: Option<&str>, now: &str) -> io::Result<PostId> {
        let id = match id {
            Some(id) => id.clone(),
            None => PostId(Uuid::new_v4().to_string()),
        };
        let path = self.path_for(&id)?;

        if path.exists() {
            let stored = Self::read_post(&path)?;
            post.created = stored.created.or(post.created);
        }
        post.stamp_for_save(now, author_uid);

        let json = match serde_json::to_string_pretty(&post) {
            Ok(json) => json,
            Err(e) => return Err(io::Error::new(ErrorKind::InvalidData, format!("Error serializing post {}: {}", id, e))),
        };
        fs::create_dir_all(&self.root_dir)?;
        fs::write(&path, json)?;
        info!("Saved post {} ({})", id, post.display_title());

        Ok(id)
    }

    pub fn delete(&self, id: &PostId) -> io::Result<()> {
        fs::remove_file(self.path_for(id)?)?;
        info!("Deleted post {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::content::Block;
    use crate::test_data::POST_JSON;

    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> TempDir {
            TempDir(env::temp_dir().join(format!("minicms-test-{}", Uuid::new_v4())))
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_save_new_and_load() -> io::Result<()> {
        let dir = TempDir::new();
        let store = PostStore::new(&dir.0);

        let post = Post { title: "First".to_string(), blocks: vec![Block::text("hi")], ..Default::default() };
        let id = store.save(None, post, Some("uid-1"), "2024-01-01T00:00:00.000Z")?;

        let loaded = store.load(&id)?;
        assert_eq!(loaded.title, "First");
        assert_eq!(loaded.blocks, vec![Block::text("hi")]);
        assert_eq!(loaded.created.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(loaded.author_uid.as_deref(), Some("uid-1"));
        Ok(())
    }

    #[test]
    fn test_update_keeps_created() -> io::Result<()> {
        let dir = TempDir::new();
        let store = PostStore::new(&dir.0);

        let id = store.save(None, Post::default(), None, "2024-01-01T00:00:00.000Z")?;
        let edited = Post { title: "Edited".to_string(), ..Default::default() };
        let same_id = store.save(Some(&id), edited, None, "2024-05-01T00:00:00.000Z")?;
        assert_eq!(id, same_id);

        let loaded = store.load(&id)?;
        assert_eq!(loaded.title, "Edited");
        assert_eq!(loaded.created.as_deref(), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(loaded.updated.as_deref(), Some("2024-05-01T00:00:00.000Z"));
        Ok(())
    }

    #[test]
    fn test_resave_keeps_unknown_blocks() -> io::Result<()> {
        let dir = TempDir::new();
        fs::create_dir_all(&dir.0)?;
        fs::write(dir.0.join("p1.json"), r#"{"title":"x","blocks":[{"type":"embed","url":"https://x"},{"type":"divider"}]}"#)?;

        let store = PostStore::new(&dir.0);
        let id = PostId("p1".to_string());
        let post = store.load(&id)?;
        store.save(Some(&id), post, None, "2024-05-01T00:00:00.000Z")?;

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(dir.0.join("p1.json"))?)?;
        assert_eq!(raw["blocks"][0], serde_json::json!({"type": "embed", "url": "https://x"}));
        assert_eq!(raw["blocks"][1], serde_json::json!({"type": "divider"}));
        Ok(())
    }

    #[test]
    fn test_load_all_skips_broken_files() -> io::Result<()> {
        let dir = TempDir::new();
        fs::create_dir_all(&dir.0)?;
        fs::write(dir.0.join("good.json"), POST_JSON)?;
        fs::write(dir.0.join("broken.json"), "{ not json")?;
        fs::write(dir.0.join("notes.txt"), "ignored")?;

        let store = PostStore::new(&dir.0);
        let entries = store.load_all()?;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, PostId("good".to_string()));
        assert_eq!(entries[0].post.slug, "hello-blocks");
        Ok(())
    }

    #[test]
    fn test_missing_dir_is_empty() -> io::Result<()> {
        let dir = TempDir::new();
        let store = PostStore::new(&dir.0);
        assert!(store.load_all()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_delete() -> io::Result<()> {
        let dir = TempDir::new();
        let store = PostStore::new(&dir.0);
        let id = store.save(None, Post::default(), None, "2024-01-01T00:00:00.000Z")?;
        store.delete(&id)?;
        assert_eq!(store.load(&id).err().map(|e| e.kind()), Some(ErrorKind::NotFound));
        Ok(())
    }

    #[test]
    fn test_invalid_id() {
        let store = PostStore::new(Path::new("posts"));
        let err = store.load(&PostId("../etc/passwd".to_string())).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
