#[cfg(test)]
pub const POST_JSON: &str = r##"{
  "title": "Hello blocks",
  "slug": "hello-blocks",
  "tags": ["rust", "cms"],
  "description": "A post with every kind of block",
  "status": "published",
  "blocks": [
    {"type": "text", "text": "First line\n<b>second</b> & more"},
    {"type": "code", "lang": "CSS", "caption": "", "code": "body{color:red}"},
    {"type": "code", "lang": "rust", "caption": "Main", "code": "fn main() {}"},
    {"type": "quote", "text": "Simple is better", "cite": "Someone"},
    {"type": "list", "style": "ol", "items": "a\nb"},
    {"type": "divider"},
    {"type": "embed", "url": "https://example.com"}
  ],
  "created": "2024-04-02T12:05:00.000Z",
  "updated": "2024-04-03T08:00:00.000Z",
  "authorUid": "uid-42"
}"##;

#[cfg(test)]
pub const ARTICLE_TPL: &str = r##"TITLE=[{{title}}]
STATUS=[{{status}}]
TAGS=[{{#tags}}({{tag}}){{/tags}}]
UPDATED=[{{date}} {{time}}]
ARTICLE=[{{{article}}}]"##;
