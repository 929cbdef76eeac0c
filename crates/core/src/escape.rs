//! Markup escaping for user-supplied text.
//!
//! Anything typed by the user is escaped before it is handed to the view as
//! rendered content. Bot answers arrive as pre-rendered HTML from the server
//! and must NOT pass through here.

/// Escape the five markup-significant characters; all others pass through.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_special_characters() {
        assert_eq!(escape("&"), "&amp;");
        assert_eq!(escape("<"), "&lt;");
        assert_eq!(escape(">"), "&gt;");
        assert_eq!(escape("\""), "&quot;");
        assert_eq!(escape("'"), "&#39;");
    }

    #[test]
    fn test_escape_markup_fragment() {
        assert_eq!(
            escape("<script>alert('hi')</script>"),
            "&lt;script&gt;alert(&#39;hi&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_passes_plain_text_through() {
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape(""), "");
        assert_eq!(escape("über café 日本語"), "über café 日本語");
    }

    #[test]
    fn test_escape_is_not_idempotent() {
        // Escaping already-escaped text escapes the ampersands again; callers
        // must escape exactly once.
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_escape_mixed_content() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
    }
}
