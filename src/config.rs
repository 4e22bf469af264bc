/// Build-time app configuration
use crate::renderer::RenderOptions;

pub const DEFAULT_BACKEND_URL: &str = "https://interactive-content-backend.onrender.com";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub memberstack_public_key: Option<String>,
    pub render: RenderOptions,
}

impl AppConfig {
    /// Read `BACKEND_URL` and `MEMBERSTACK_PUBLIC_KEY` baked in at compile time
    pub fn from_build_env() -> AppConfig {
        AppConfig::from_values(option_env!("BACKEND_URL"), option_env!("MEMBERSTACK_PUBLIC_KEY"))
    }

    fn from_values(backend_url: Option<&str>, public_key: Option<&str>) -> AppConfig {
        let backend_url = backend_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string();

        let memberstack_public_key = public_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string);

        AppConfig {
            backend_url,
            memberstack_public_key,
            render: RenderOptions::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig::from_values(None, None)
    }
}
