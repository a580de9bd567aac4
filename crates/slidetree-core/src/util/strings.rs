/// Escape text for inclusion in the HTML text-body markup.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}

/// Whether formatted text carries anything a reader would see once markup
/// is stripped. Whitespace, `&nbsp;` and empty runs do not count.
pub fn has_visible_text(html: &str) -> bool {
    let mut in_tag = false;
    let mut text = String::new();

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.replace("&nbsp;", " ")
        .replace('\u{00A0}', " ")
        .chars()
        .any(|c| !c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_replaces_markup_characters() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn markup_only_content_is_not_visible() {
        assert!(!has_visible_text("<p style=\"\"><span>  </span></p>"));
        assert!(!has_visible_text("<p><span>&nbsp;</span><br/></p>"));
        assert!(!has_visible_text(""));
    }

    #[test]
    fn any_glyph_is_visible() {
        assert!(has_visible_text("<p><span>x</span></p>"));
        assert!(has_visible_text("plain"));
    }
}
