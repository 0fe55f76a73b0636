//! Plain-text view of note bodies, which are stored as HTML fragments.

/// Drop tags, decode the common entities and collapse whitespace.
///
/// A tag counts as a word break, so `a<br>b` reads as `a b`.
pub fn plain_text(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    decode_entities(&text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_become_word_breaks() {
        assert_eq!(
            plain_text("<p>Hello <b>world</b></p><br><i>again</i>"),
            "Hello world again"
        );
        assert_eq!(plain_text("one<br>two"), "one two");
    }

    #[test]
    fn test_entities_are_decoded() {
        assert_eq!(plain_text("a &amp; b&nbsp;c &lt;tag&gt;"), "a & b c <tag>");
    }

    #[test]
    fn test_plain_input_is_unchanged() {
        assert_eq!(plain_text("split code into modules"), "split code into modules");
        assert_eq!(plain_text(""), "");
    }
}
