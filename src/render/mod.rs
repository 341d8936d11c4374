//! Page Rendering
//!
//! Turns a section layout into something a person can look at:
//!
//! - **html**: Self-contained dashboard page with inline CSS and SVG charts
//! - **text**: Terminal report for the CLI

pub mod html;
pub mod text;

pub use html::{render_page, PageOptions};
pub use text::render_text;

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Sitamarhi, Bihar"), "Sitamarhi, Bihar");
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }
}
