use std::borrow::Cow;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Joins the non-empty class fragments with single spaces.
pub fn cn(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_plain_text_borrowed() {
        assert!(matches!(escape("HavenMaids LLC"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(
            escape(r#"Residential & "Commercial" <Cleaning>"#),
            "Residential &amp; &quot;Commercial&quot; &lt;Cleaning&gt;"
        );
        assert_eq!(escape("property's"), "property&#39;s");
    }

    #[test]
    fn test_cn_skips_empty_fragments() {
        assert_eq!(cn(&["a", "", "  ", "b c", " d "]), "a b c d");
        assert_eq!(cn(&[]), "");
    }
}
