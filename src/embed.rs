/// Embed snippets and names for published tools
use regex::Regex;
use std::sync::LazyLock;

static TIMESTAMP_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\d+\.html$").unwrap());

/// `<iframe>` snippet for pasting a published tool into another page
pub fn iframe_embed(url: &str) -> String {
    format!(
        r#"<iframe src="{}" width="100%" height="300" style="border:none;overflow:auto;"></iframe>"#,
        escape_attr(url)
    )
}

/// "budget-planner-1712.html" → "Budget Planner"
pub fn format_tool_title(filename: &str) -> String {
    let name = TIMESTAMP_SUFFIX.replace(filename, "");
    let name = name.strip_suffix(".html").unwrap_or(&*name);

    name.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// File-safe slug for publishing, derived from the chosen idea
pub fn suggest_tool_name(idea: Option<&str>) -> String {
    let slug = idea
        .unwrap_or_default()
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .take(8)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "interactive-tool".to_string()
    } else {
        slug
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
