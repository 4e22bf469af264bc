/// Tool code cleanup: turns a raw generated blob into markup, style and script
use regex::Regex;
use std::sync::LazyLock;

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```[a-z0-9_+-]*[ \t]*\r?\n?").unwrap());
static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
// `//` right after a `:` is a URL scheme separator, not a comment
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|[^:])//[^\n]*").unwrap());
static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style\s*>").unwrap());
static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

/// A generated tool split into its three renderable parts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedToolDocument {
    pub markup: String,
    pub style_block: String,
    pub script_block: String,
}

impl ParsedToolDocument {
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.style_block.is_empty() && self.script_block.is_empty()
    }
}

/// Parse a raw tool blob from the generation backend
///
/// Steps, in order:
/// 1. Drop markdown fences (```` ```lang ```` openers and bare ```` ``` ````), anywhere in the text
/// 2. Drop every backslash (the generator over-escapes quotes and newlines)
/// 3. Drop `/* */`, `// ...` and `<!-- -->` comments
/// 4. Capture the first `<style>` block, tags included
/// 5. Capture the first `<script>` block, tags included
/// 6. Strip every style and script block from the rest to get the markup
///
/// Never fails: a blob with nothing recognisable comes back as plain markup.
pub fn parse(raw: &str) -> ParsedToolDocument {
    let text = strip_fences(raw);
    let text = text.replace('\\', "");
    let text = strip_comments(&text);

    let style_block = first_match(&STYLE_BLOCK, &text);
    let script_block = first_match(&SCRIPT_BLOCK, &text);

    // A removed block leaves a space so its neighbours can't fuse into `//` or `/*`
    let markup = STYLE_BLOCK.replace_all(&text, " ");
    let markup = SCRIPT_BLOCK.replace_all(&markup, " ");

    ParsedToolDocument {
        markup: markup.trim().to_string(),
        style_block,
        script_block,
    }
}

/// Join the parts back into a single blob
///
/// Style and script go first: leftover fragments such as an unclosed `<script>`
/// stay in the markup, and must not swallow the captured blocks on a re-parse.
pub fn reconstruct(doc: &ParsedToolDocument) -> String {
    [&doc.style_block, &doc.script_block, &doc.markup]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn strip_fences(text: &str) -> String {
    FENCE_OPEN.replace_all(text, "").replace("```", "")
}

fn strip_comments(text: &str) -> String {
    let text = BLOCK_COMMENT.replace_all(text, "");
    let text = HTML_COMMENT.replace_all(&text, "");
    LINE_COMMENT.replace_all(&text, "$1").into_owned()
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squash(s: &str) -> String {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_parse_fenced_tool() {
        let raw = "```html\n<div>Hi</div><style>body{color:red}</style><script>console.log(1)</script>\n```";
        let doc = parse(raw);

        assert_eq!(doc.markup, "<div>Hi</div>");
        assert_eq!(doc.style_block, "<style>body{color:red}</style>");
        assert_eq!(doc.script_block, "<script>console.log(1)</script>");
    }

    #[test]
    fn test_parse_empty() {
        let doc = parse("");

        assert_eq!(doc, ParsedToolDocument::default());
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_plain_markup() {
        let doc = parse("<section><h1>Calculator</h1></section>");

        assert_eq!(doc.markup, "<section><h1>Calculator</h1></section>");
        assert_eq!(doc.style_block, "");
        assert_eq!(doc.script_block, "");
    }

    #[test]
    fn test_parse_strips_fences_and_comments_without_blocks() {
        let raw = "```HTML\n<p>Budget</p>\n/* layout\n notes */\n<span>42</span> // total\n<!-- hidden -->\n```";
        let doc = parse(raw);

        assert!(doc.style_block.is_empty());
        assert!(doc.script_block.is_empty());
        assert!(!doc.markup.contains("```"));
        assert!(!doc.markup.contains("/*"));
        assert!(!doc.markup.contains("//"));
        assert!(!doc.markup.contains("<!--"));
        assert_eq!(squash(&doc.markup), "<p>Budget</p> <span>42</span>");
    }

    #[test]
    fn test_parse_fenced_matches_inner() {
        let inner = "<div id=\"app\"></div>\n<style>#app{margin:0}</style>";
        let fenced = format!("```html\n{}\n```", inner);

        assert_eq!(parse(&fenced).markup, parse(inner).markup);
        assert_eq!(parse(&fenced), parse(inner));
    }

    #[test]
    fn test_parse_fence_in_middle_of_text() {
        let raw = "Here is your tool:\n```html\n<div>Tool</div>\n```\nEnjoy!";
        let doc = parse(raw);

        assert!(!doc.markup.contains("```"));
        assert!(doc.markup.contains("<div>Tool</div>"));
    }

    #[test]
    fn test_parse_removes_backslashes() {
        let doc = parse(r#"<div class=\"card\">Quote</div>"#);

        assert_eq!(doc.markup, r#"<div class="card">Quote</div>"#);
    }

    #[test]
    fn test_parse_keeps_url_scheme() {
        let doc = parse(r#"<a href="https://example.com/post">Read</a> // link"#);

        assert_eq!(doc.markup, r#"<a href="https://example.com/post">Read</a>"#);
    }

    #[test]
    fn test_parse_strips_comments_inside_script() {
        let raw = "<script>\n// setup\nconst total = 1; /* sum */\n</script>";
        let doc = parse(raw);

        assert!(!doc.script_block.contains("setup"));
        assert!(!doc.script_block.contains("sum"));
        assert!(doc.script_block.contains("const total = 1;"));
    }

    #[test]
    fn test_parse_case_insensitive_tags() {
        let raw = "<DIV>x</DIV><STYLE type=\"text/css\">p{}</STYLE><Script defer>run()</SCRIPT>";
        let doc = parse(raw);

        assert_eq!(doc.markup, "<DIV>x</DIV>");
        assert_eq!(doc.style_block, "<STYLE type=\"text/css\">p{}</STYLE>");
        assert_eq!(doc.script_block, "<Script defer>run()</SCRIPT>");
    }

    #[test]
    fn test_parse_single_blocks_removed_from_markup() {
        let raw = "<style>h1{}</style><h1>Quiz</h1><script>start()</script>";
        let doc = parse(raw);

        assert!(!doc.markup.contains("<style"));
        assert!(!doc.markup.contains("<script"));
        assert_eq!(doc.markup, "<h1>Quiz</h1>");
    }

    #[test]
    fn test_parse_two_scripts_keeps_first() {
        let raw = "<div>a</div><script>first()</script><p>b</p><script>second()</script>";
        let doc = parse(raw);

        assert_eq!(doc.script_block, "<script>first()</script>");
        assert!(!doc.markup.contains("first"));
        assert!(!doc.markup.contains("second"));
        assert_eq!(doc.markup, "<div>a</div> <p>b</p>");
    }

    #[test]
    fn test_parse_multiline_blocks() {
        let raw = "<style>\n  .row {\n    display: flex;\n  }\n</style>\n<div class=\"row\"></div>";
        let doc = parse(raw);

        assert!(doc.style_block.starts_with("<style>"));
        assert!(doc.style_block.ends_with("</style>"));
        assert!(doc.style_block.contains("display: flex;"));
        assert_eq!(doc.markup, "<div class=\"row\"></div>");
    }

    #[test]
    fn test_parse_unclosed_script_is_markup() {
        let raw = "<div>half</div><script>never closed";
        let doc = parse(raw);

        assert_eq!(doc.script_block, "");
        assert_eq!(doc.markup, raw);
    }

    #[test]
    fn test_parse_missing_closing_fence() {
        let doc = parse("```html\n<div>open</div>");

        assert_eq!(doc.markup, "<div>open</div>");
    }

    #[test]
    fn test_parse_is_idempotent() {
        let samples = [
            "```html\n<div>Hi</div><style>body{color:red}</style><script>console.log(1)</script>\n```",
            "<main>\n<canvas id=\"c\"></canvas>\n</main>\n<script src=\"x.js\"></script><script>draw()</script>",
            "<p>only markup</p>",
            "",
            "<div>a</div><script>first()</script><script>second()",
            "<p>1/<style>p{}</style>/2</p>",
            "<style>a{}</style><p>x</p><style>b{}</style><script>go()</script><script>",
        ];

        for raw in samples {
            let first = parse(raw);
            let second = parse(&reconstruct(&first));

            assert_eq!(squash(&second.markup), squash(&first.markup), "markup for {raw:?}");
            assert_eq!(squash(&second.style_block), squash(&first.style_block));
            assert_eq!(squash(&second.script_block), squash(&first.script_block));
        }
    }

    #[test]
    fn test_reconstruct_skips_empty_parts() {
        let doc = ParsedToolDocument {
            markup: "<p>x</p>".to_string(),
            style_block: String::new(),
            script_block: "<script>go()</script>".to_string(),
        };

        assert_eq!(reconstruct(&doc), "<script>go()</script>\n<p>x</p>");
    }

    #[test]
    fn test_parse_truncated_trailing_script_stays_markup() {
        let raw = "<div>a</div><script>first()</script><script>second()";
        let doc = parse(raw);
        let again = parse(&reconstruct(&doc));

        assert_eq!(doc.script_block, "<script>first()</script>");
        assert_eq!(squash(&doc.markup), "<div>a</div> <script>second()");
        assert_eq!(again, doc);
    }

    #[test]
    fn test_parse_block_removal_does_not_create_comment() {
        let doc = parse("<p>1/<style>p{}</style>/2</p>");

        assert_eq!(doc.style_block, "<style>p{}</style>");
        assert_eq!(doc.markup, "<p>1/ /2</p>");
        assert_eq!(parse(&reconstruct(&doc)).markup, "<p>1/ /2</p>");
    }
}
