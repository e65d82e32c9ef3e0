//! Markdown rendering for post bodies

use pulldown_cmark::{html, Event, Options, Parser};

const WORDS_PER_MINUTE: usize = 200;

/// Renders MDX bodies as CommonMark
///
/// JSX elements pass through as raw HTML and top-level `import`/`export`
/// lines are dropped; nothing is evaluated.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        // YAML metadata blocks stay off, FrontMatter::parse owns those
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        Self { options }
    }

    /// Render a body to HTML
    pub fn render(&self, body: &str) -> String {
        let source = strip_esm(body);
        let parser = Parser::new_ext(&source, self.options);

        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, parser);
        out
    }

    /// Estimated reading time in whole minutes, at least one
    pub fn reading_minutes(&self, body: &str) -> usize {
        let source = strip_esm(body);
        let words: usize = Parser::new_ext(&source, self.options)
            .filter_map(|event| match event {
                Event::Text(text) | Event::Code(text) => Some(text.split_whitespace().count()),
                _ => None,
            })
            .sum();
        words.div_ceil(WORDS_PER_MINUTE).max(1)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop MDX module lines outside fenced code blocks
fn strip_esm(body: &str) -> String {
    let mut in_fence = false;
    let mut kept = Vec::new();

    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
        }
        if !in_fence && (line.starts_with("import ") || line.starts_with("export ")) {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n")
}
