//! Markdown output helpers.

/// Markdown building blocks shared by commands.
pub struct MarkdownOutput;

impl MarkdownOutput {
    /// A `# Title` section listing `items`, or `- None` when empty.
    pub fn section<I, S>(title: &str, items: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut output = format!("# {}\n", title);
        let mut any = false;

        for item in items {
            any = true;
            output.push_str(&format!(" - {}\n", Self::escape(item.as_ref())));
        }

        if !any {
            output.push_str(" - None\n");
        }

        output
    }

    /// Escape characters Markdown would otherwise interpret.
    pub fn escape(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            if matches!(ch, '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '|') {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        escaped
    }
}
