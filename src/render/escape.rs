//! HTML escaping for text inserted into markup.

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            escape_html(r#"<img src="x" onerror='alert(1)'> & co"#),
            "&lt;img src=&quot;x&quot; onerror=&#039;alert(1)&#039;&gt; &amp; co"
        );
    }

    #[test]
    fn test_existing_entities_are_escaped_again() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("Café com leite"), "Café com leite");
    }
}
