use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub template_dir: Option<PathBuf>,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            posts_dir: PathBuf::from("posts"),
            template_dir: None,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct Site {
    /// Page the `?slug=` permalinks are appended to
    pub base_url: String,
}

#[derive(Deserialize, Default)]
pub struct LivePreview {
    pub placeholder: Option<String>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
    /// Daily files kept before the oldest is removed
    #[serde(default = "default_max_files")]
    pub max_files: usize,
}

fn default_max_files() -> usize {
    30
}

#[derive(Deserialize, Copy, Clone)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub site: Site,
    #[serde(default)]
    pub live_preview: LivePreview,
    pub log: Option<Log>,
}

fn parse_path(path: PathBuf) -> PathBuf {
    if !path.starts_with("${exe_dir}") {
        return path;
    }

    let exe_dir = env::current_exe().ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_string_lossy().to_string()));
    match exe_dir {
        Some(exe_dir) => PathBuf::from(path.to_string_lossy().replace("${exe_dir}", &exe_dir)),
        None => path,
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir),
        template_dir: cfg.paths.template_dir.map(parse_path),
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let cfg = parse_config(r##"
[paths]
posts_dir = "data/posts"
template_dir = "template"

[site]
base_url = "https://example.com/blog"

[live_preview]
placeholder = "<p>nothing</p>"

[log]
level = "Debug"
log_to_console = true
"##).unwrap();
        assert_eq!(cfg.paths.posts_dir, PathBuf::from("data/posts"));
        assert_eq!(cfg.paths.template_dir, Some(PathBuf::from("template")));
        assert_eq!(cfg.site.base_url, "https://example.com/blog");
        assert_eq!(cfg.live_preview.placeholder.as_deref(), Some("<p>nothing</p>"));
        let log = cfg.log.unwrap();
        assert!(matches!(log.level, LogLevel::Debug));
        assert!(log.location.is_none());
        assert_eq!(log.max_files, 30);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.paths.posts_dir, PathBuf::from("posts"));
        assert!(cfg.paths.template_dir.is_none());
        assert!(cfg.log.is_none());
        assert!(cfg.live_preview.placeholder.is_none());
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config("[paths]\nposts_dir = 3").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_exe_dir_expansion() {
        let path = parse_path(PathBuf::from("${exe_dir}/posts"));
        assert!(!path.to_string_lossy().contains("${exe_dir}"));
        assert!(path.ends_with("posts"));
        assert_eq!(parse_path(PathBuf::from("posts")), PathBuf::from("posts"));
    }
}
