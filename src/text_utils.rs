use chrono::{DateTime, SecondsFormat, Utc};

/// Escapes the characters that would otherwise be read as markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// ISO-8601 in UTC with millisecond precision. Sorts lexicographically.
pub fn format_timestamp(date_time: &DateTime<Utc>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_timestamp() -> String {
    format_timestamp(&Utc::now())
}

/// Splits a stored timestamp into date and time for display.
pub fn split_timestamp(timestamp: &str) -> (String, String) {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => {
            let dt = dt.with_timezone(&Utc);
            (dt.format("%Y-%m-%d").to_string(), dt.format("%H:%M:%S").to_string())
        }
        Err(_) => (timestamp.to_string(), String::new()),
    }
}

/// Permalink-friendly slug: transliterated to ASCII, lower-cased, runs of
/// anything else collapsed into a single `-`.
pub fn slug_from_title(title: &str) -> String {
    let ascii = unidecode::unidecode(title);
    let mut slug = String::new();
    let mut prev_dash = true;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
