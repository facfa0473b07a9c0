//! Markdown resume flattening.

use pulldown_cmark::{Event, Parser, TagEnd};

/// Reduces markdown to its text content.
///
/// Markup is dropped; block boundaries become newlines so words from adjacent headings,
/// paragraphs and list items never run together.
pub fn markdown_to_text(content: &str) -> String {
    let mut text = String::with_capacity(content.len());

    for event in Parser::new(content) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak
            | Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableCell,
            ) => text.push('\n'),
            _ => {}
        }
    }

    text.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markup() {
        let md = "# Jane Doe\n\n**Machine learning** and `python`.\n\n- data structures\n- teaching\n";
        let text = markdown_to_text(md);
        assert_eq!(
            text,
            "Jane Doe\nMachine learning and python.\ndata structures\nteaching"
        );
    }

    #[test]
    fn test_links_keep_label() {
        let text = markdown_to_text("See [my thesis](https://example.com/thesis.pdf).");
        assert_eq!(text, "See my thesis.");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(markdown_to_text(""), "");
    }
}
