/// Assembles a parsed tool into a standalone document and writes it into an
/// isolated frame.
use crate::error::RenderError;
use crate::sanitizer::{parse, ParsedToolDocument};

pub const CHART_LIBRARY_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
pub const WEB_FONT_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap";

/// Class on the `<div>` wrapping the generated markup
pub const CONTAINER_CLASS: &str = "tool-container";

const BASE_STYLESHEET: &str = r#"<style>
  *, *::before, *::after { box-sizing: border-box; }
  html, body { margin: 0; padding: 0; }
  body { font-family: 'Inter', system-ui, sans-serif; color: #1f2937; background: #ffffff; line-height: 1.5; }
  .tool-container { padding: 16px; max-width: 100%; }
  button { font: inherit; cursor: pointer; }
  input, select, textarea { font: inherit; }
  canvas { max-width: 100%; }
</style>"#;

/// Which assets get injected into the head of every rendered tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub inject_base_stylesheet: bool,
    pub inject_charting_library: bool,
    pub inject_web_font: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            inject_base_stylesheet: true,
            inject_charting_library: true,
            inject_web_font: true,
        }
    }
}

/// A browsing context that owns its own document.
///
/// Implementations replace the whole document on every call; the host page
/// never shares DOM nodes with the target.
pub trait RenderTarget {
    fn replace_document(&self, html: &str) -> Result<(), RenderError>;
}

/// Build the full HTML document for a parsed tool
pub fn assemble_document(doc: &ParsedToolDocument, options: &RenderOptions) -> String {
    let mut head = vec![
        r#"<meta charset="utf-8">"#.to_string(),
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#.to_string(),
    ];

    if options.inject_web_font {
        head.push(format!(r#"<link rel="stylesheet" href="{}">"#, WEB_FONT_URL));
    }
    if options.inject_charting_library {
        head.push(format!(r#"<script src="{}"></script>"#, CHART_LIBRARY_URL));
    }
    if options.inject_base_stylesheet {
        head.push(BASE_STYLESHEET.to_string());
    }
    if !doc.style_block.is_empty() {
        head.push(doc.style_block.clone());
    }

    let mut body = vec![format!(
        r#"<div class="{}">{}</div>"#,
        CONTAINER_CLASS, doc.markup
    )];
    if !doc.script_block.is_empty() {
        body.push(doc.script_block.clone());
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n{}\n</head>\n<body>\n{}\n</body>\n</html>",
        head.join("\n"),
        body.join("\n")
    )
}

/// Parse a raw blob and rebuild the target's document from scratch.
///
/// A target that is not mounted yet is skipped; the caller renders again on
/// the next blob change.
pub fn render(raw: &str, target: &dyn RenderTarget, options: &RenderOptions) {
    let doc = parse(raw);
    let html = assemble_document(&doc, options);

    match target.replace_document(&html) {
        Ok(()) => log::debug!("Rendered tool document ({} bytes)", html.len()),
        Err(e) => log::debug!("Skipped tool render: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTarget {
        writes: RefCell<Vec<String>>,
    }

    impl RenderTarget for RecordingTarget {
        fn replace_document(&self, html: &str) -> Result<(), RenderError> {
            self.writes.borrow_mut().push(html.to_string());
            Ok(())
        }
    }

    struct UnmountedTarget;

    impl RenderTarget for UnmountedTarget {
        fn replace_document(&self, _html: &str) -> Result<(), RenderError> {
            Err(RenderError::NotReady)
        }
    }

    fn body_of(html: &str) -> &str {
        let start = html.find("<body>").unwrap() + "<body>".len();
        let end = html.find("</body>").unwrap();
        &html[start..end]
    }

    fn head_of(html: &str) -> &str {
        let start = html.find("<head>").unwrap() + "<head>".len();
        let end = html.find("</head>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_assemble_empty_document() {
        let html = assemble_document(&ParsedToolDocument::default(), &RenderOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(body_of(&html).trim(), r#"<div class="tool-container"></div>"#);
        assert!(head_of(&html).contains(CHART_LIBRARY_URL));
        assert!(head_of(&html).contains(WEB_FONT_URL));
        assert!(head_of(&html).contains(".tool-container"));
    }

    #[test]
    fn test_assemble_places_parts() {
        let doc = parse("<div>Hi</div><style>body{color:red}</style><script>console.log(1)</script>");
        let html = assemble_document(&doc, &RenderOptions::default());

        let head = head_of(&html);
        let body = body_of(&html);

        assert!(head.contains("<style>body{color:red}</style>"));
        assert!(body.contains(r#"<div class="tool-container"><div>Hi</div></div>"#));
        assert!(body.trim_end().ends_with("<script>console.log(1)</script>"));
        assert!(!body.contains("<style>"));
    }

    #[test]
    fn test_assemble_user_style_after_base() {
        let doc = parse("<style>body{background:black}</style>");
        let html = assemble_document(&doc, &RenderOptions::default());

        let base = html.find(".tool-container {").unwrap();
        let user = html.find("body{background:black}").unwrap();
        assert!(base < user);
    }

    #[test]
    fn test_assemble_respects_options() {
        let options = RenderOptions {
            inject_base_stylesheet: false,
            inject_charting_library: false,
            inject_web_font: false,
        };
        let html = assemble_document(&ParsedToolDocument::default(), &options);

        assert!(!html.contains(CHART_LIBRARY_URL));
        assert!(!html.contains(WEB_FONT_URL));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_render_replaces_whole_document_each_time() {
        let target = RecordingTarget::default();

        render("```html\n<p>v1</p>\n```", &target, &RenderOptions::default());
        render("<p>v2</p>", &target, &RenderOptions::default());

        let writes = target.writes.borrow();
        assert_eq!(writes.len(), 2);
        assert!(writes[0].contains("<p>v1</p>"));
        assert!(!writes[1].contains("v1"));
        assert!(writes[1].starts_with("<!DOCTYPE html>"));
        assert!(writes[1].contains("<p>v2</p>"));
    }

    #[test]
    fn test_render_unmounted_target_is_noop() {
        render("<p>nothing</p>", &UnmountedTarget, &RenderOptions::default());
    }
}
