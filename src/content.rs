/// Content submission: pasted text or a blog post URL
use crate::error::InputError;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    #[default]
    Text,
    Url,
}

impl ContentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Text => "Text Input",
            ContentKind::Url => "URL Input",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContentKind::Text => "Paste your blog post content here...",
            ContentKind::Url => "Enter the URL of your blog post...",
        }
    }
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Text(String),
    Url(Url),
}

/// Check user input before anything goes to the backend
pub fn validate_submission(kind: ContentKind, input: &str) -> Result<Submission, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Blank);
    }

    match kind {
        ContentKind::Text => Ok(Submission::Text(trimmed.to_string())),
        ContentKind::Url => {
            let url = Url::parse(trimmed).map_err(|_| InputError::InvalidUrl(trimmed.to_string()))?;
            match url.scheme() {
                "http" | "https" => Ok(Submission::Url(url)),
                other => Err(InputError::UnsupportedScheme(other.to_string())),
            }
        }
    }
}
