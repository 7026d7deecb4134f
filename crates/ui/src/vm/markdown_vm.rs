use std::collections::{HashMap, HashSet};

/// Render a topic body to sanitized HTML.
///
/// Fenced code blocks keep their `language-*` class so the highlighter can
/// pick them up; untagged blocks default to SQL.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options).map(default_code_language);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

fn default_code_language(event: pulldown_cmark::Event<'_>) -> pulldown_cmark::Event<'_> {
    use pulldown_cmark::{CodeBlockKind, Event, Tag};

    match event {
        Event::Start(Tag::CodeBlock(CodeBlockKind::Indented)) => {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced("sql".into())))
        }
        Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) if lang.is_empty() => {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced("sql".into())))
        }
        other => other,
    }
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td", "del",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("code", ["class"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

/// Whether rendered HTML contains at least one code block worth highlighting.
#[must_use]
pub fn has_code_block(html: &str) -> bool {
    html.contains("<pre>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_sql_keeps_language_class() {
        let html = markdown_to_html("Intro\n\n```sql\nSELECT 1;\n```");
        assert!(html.contains(r#"<code class="language-sql">"#), "{html}");
        assert!(has_code_block(&html));
    }

    #[test]
    fn untagged_fence_defaults_to_sql() {
        let html = markdown_to_html("```\nSELECT 1;\n```");
        assert!(html.contains("language-sql"), "{html}");
    }

    #[test]
    fn scripts_are_stripped() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script"), "{html}");
        assert!(html.contains("hello"));
    }

    #[test]
    fn plain_text_has_no_code_block() {
        assert!(!has_code_block(&markdown_to_html("just text")));
    }
}
