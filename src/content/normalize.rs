use lazy_static::lazy_static;
use regex::Regex;

/// Turns the comma separated tags input into lower-cased tokens,
/// keeping the order they were typed in.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// One entry per non-empty line. Accepts LF and CRLF line endings.
pub fn normalize_list_items(raw: &str) -> Vec<String> {
    lazy_static! {
        static ref LINE_BREAK: Regex = Regex::new(r"\r?\n").unwrap();
    }

    LINE_BREAK.split(raw)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags() {
        assert_eq!(normalize_tags("A, b ,, C"), ["a", "b", "c"]);
        assert_eq!(normalize_tags("Rust,rust"), ["rust", "rust"]);
        assert_eq!(normalize_tags("  web dev , CSS"), ["web dev", "css"]);
    }

    #[test]
    fn test_normalize_tags_degenerate() {
        assert!(normalize_tags("").is_empty());
        assert!(normalize_tags(" , ,, ").is_empty());
    }

    #[test]
    fn test_normalize_list_items() {
        assert_eq!(normalize_list_items("one\n\ntwo\r\nthree"), ["one", "two", "three"]);
        assert_eq!(normalize_list_items("a\nb\n"), ["a", "b"]);
        assert_eq!(normalize_list_items("\r\n\r\n"), Vec::<String>::new());
        assert!(normalize_list_items("").is_empty());
    }

    #[test]
    fn test_list_items_keep_whitespace_lines() {
        assert_eq!(normalize_list_items(" \nx"), [" ", "x"]);
    }
}
