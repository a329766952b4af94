/// Ordered list of document lines joined with `\n`.
///
/// Sections with no content (an empty rule list, say) are skipped entirely,
/// so renderers can describe every section unconditionally.
#[derive(Debug, Clone, Default)]
pub struct DocBuilder {
    lines: Vec<String>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// YAML frontmatter block. Values are written as given; use
    /// [`yaml_scalar`] for free text.
    pub fn frontmatter(mut self, fields: &[(&str, String)]) -> Self {
        self.lines.push("---".to_string());
        for (key, value) in fields {
            self.lines.push(format!("{key}: {value}"));
        }
        self.lines.push("---".to_string());
        self
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    pub fn blank(mut self) -> Self {
        if self.lines.last().is_some_and(|l| !l.is_empty()) {
            self.lines.push(String::new());
        }
        self
    }

    pub fn heading(self, level: usize, title: &str) -> Self {
        self.line(format!("{} {title}", "#".repeat(level)))
    }

    /// A multi-line block, trimmed of surrounding whitespace.
    pub fn text(mut self, block: &str) -> Self {
        self.lines.extend(block.trim().lines().map(str::to_string));
        self
    }

    pub fn bullets(mut self, items: &[String]) -> Self {
        self.lines.extend(items.iter().map(|i| format!("- {i}")));
        self
    }

    /// `heading` + bullets, followed by a blank line; omitted when `items` is empty.
    pub fn bullet_section(self, heading: &str, items: &[String]) -> Self {
        if items.is_empty() {
            return self;
        }
        self.line(heading).bullets(items).blank()
    }

    /// Join all lines and end with exactly one newline.
    pub fn build(self) -> String {
        let mut out = self.lines.join("\n");
        let trimmed = out.trim_end_matches('\n').len();
        out.truncate(trimmed);
        out.push('\n');
        out
    }
}

/// Render `value` as a YAML scalar, double-quoting when plain style would
/// be ambiguous.
pub fn yaml_scalar(value: &str) -> String {
    const SPECIAL: &[char] = &[
        ':', '#', '{', '}', '[', ']', ',', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`', '\n',
        '\r', '\t', '\\',
    ];
    let needs_quotes = value.is_empty()
        || value.trim() != value
        || value.starts_with(['-', '?'])
        || value.contains(SPECIAL)
        || matches!(
            value.to_lowercase().as_str(),
            "true" | "false" | "yes" | "no" | "null" | "~" | "on" | "off"
        )
        || value.parse::<f64>().is_ok();
    if !needs_quotes {
        return value.to_string();
    }
    format!("\"{}\"", escape_double_quoted(value))
}

/// Escape for a double-quoted YAML / TOML basic string.
pub fn escape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
