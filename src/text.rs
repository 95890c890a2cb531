//! Text preparation for surface content: markup neutralization and
//! line-break preservation.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_ENDINGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n?").expect("line ending pattern is valid"));

/// How a text body is written into a surface node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    /// Neutralize injected markup in the text.
    pub escape_markup: bool,
    /// Keep line breaks visible by rewriting them as `<br>`.
    pub preserve_line_breaks: bool,
}

impl TextOptions {
    /// Verbatim text: no escaping, no line-break rewriting.
    pub fn plain() -> Self {
        Self::default()
    }
}

/// Apply `options` to a raw text body. Line endings are normalized to `\n`
/// first so carriage returns never leak into the rendered content.
pub fn prepare(text: &str, options: &TextOptions) -> String {
    let normalized = LINE_ENDINGS.replace_all(text, "\n");
    let mut out = if options.escape_markup {
        escape_markup(&normalized)
    } else {
        normalized.into_owned()
    };
    if options.preserve_line_breaks {
        out = out.replace('\n', "<br>");
    }
    out
}

/// Escape the characters that would otherwise be interpreted as markup.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_leaves_text_untouched() {
        assert_eq!(prepare("hello <b>world</b>", &TextOptions::plain()), "hello <b>world</b>");
    }

    #[test]
    fn test_escape_neutralizes_markup() {
        let options = TextOptions {
            escape_markup: true,
            preserve_line_breaks: false,
        };
        assert_eq!(
            prepare("<script>alert('hi')</script>", &options),
            "&lt;script&gt;alert(&#39;hi&#39;)&lt;/script&gt;"
        );
        assert_eq!(prepare("a & b", &options), "a &amp; b");
    }

    #[test]
    fn test_line_breaks_become_br() {
        let options = TextOptions {
            escape_markup: false,
            preserve_line_breaks: true,
        };
        assert_eq!(prepare("one\ntwo", &options), "one<br>two");
        // CRLF and bare CR normalize before the rewrite.
        assert_eq!(prepare("one\r\ntwo\rthree", &options), "one<br>two<br>three");
    }

    #[test]
    fn test_escape_runs_before_break_rewrite() {
        let options = TextOptions {
            escape_markup: true,
            preserve_line_breaks: true,
        };
        // The injected <br> markers must survive escaping.
        assert_eq!(prepare("<a>\n<b>", &options), "&lt;a&gt;<br>&lt;b&gt;");
    }
}
