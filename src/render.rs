//! Markdown to HTML rendering.

use pulldown_cmark::{html, Options, Parser};

/// Render CommonMark markdown to HTML.
///
/// Pure and deterministic. Tables, strikethrough, and footnotes are enabled
/// since provider documentation uses all three; embedded raw HTML passes
/// through unescaped.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_heading() {
        let html = render_html("# aws_instance");
        assert!(html.contains("<h1>aws_instance</h1>"));
    }

    #[test]
    fn test_renders_code_block() {
        let html = render_html("```hcl\nresource \"aws_instance\" \"web\" {}\n```");
        assert!(html.contains("<code"));
        assert!(html.contains("aws_instance"));
    }

    #[test]
    fn test_renders_table() {
        let md = "| Name | Type |\n|------|------|\n| ami | string |";
        let html = render_html(md);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>ami</td>"));
    }

    #[test]
    fn test_raw_html_passes_through() {
        let html = render_html("<div class=\"note\">See also.</div>");
        assert!(html.contains("<div class=\"note\">See also.</div>"));
    }

    #[test]
    fn test_deterministic() {
        let md = "## Argument Reference\n\n* `ami` - (Required) AMI to use.";
        assert_eq!(render_html(md), render_html(md));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_html(""), "");
    }
}
