/// HTTP client for the content generation backend
use crate::error::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ExtractRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct ExtractResponse {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct IdeasRequest<'a> {
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct IdeasResponse {
    #[serde(default)]
    ideas: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    content: &'a str,
    idea: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateRequest<'a> {
    content: &'a str,
    current_tool: &'a str,
    feedback: &'a str,
}

#[derive(Debug, Deserialize)]
struct ToolResponse {
    #[serde(default)]
    tool: String,
}

#[derive(Debug, Serialize)]
struct PublishRequest<'a> {
    name: &'a str,
    tool: &'a str,
}

#[derive(Debug, Deserialize)]
struct ToolsResponse {
    #[serde(default)]
    tools: Vec<PublishedTool>,
}

/// A tool hosted by the backend's static publishing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedTool {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BackendClient {
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> BackendClient {
        BackendClient {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch a blog post's text through the backend's extractor
    pub async fn extract_content(&self, url: &str) -> Result<String, ApiError> {
        let resp: ExtractResponse = self.post_json("/extract", &ExtractRequest { url }, None).await?;
        extracted_content(resp)
    }

    pub async fn generate_ideas(&self, content: &str) -> Result<Vec<String>, ApiError> {
        let resp: IdeasResponse = self.post_json("/ideas", &IdeasRequest { content }, None).await?;
        Ok(clean_ideas(resp.ideas))
    }

    pub async fn generate_tool(&self, content: &str, idea: &str) -> Result<String, ApiError> {
        let resp: ToolResponse = self
            .post_json("/generate", &GenerateRequest { content, idea }, None)
            .await?;
        Ok(resp.tool)
    }

    /// Ask the backend to revise the current tool from free-form feedback
    pub async fn update_tool(
        &self,
        content: &str,
        current_tool: &str,
        feedback: &str,
    ) -> Result<String, ApiError> {
        let body = UpdateRequest {
            content,
            current_tool,
            feedback,
        };
        let resp: ToolResponse = self.post_json("/update", &body, None).await?;
        Ok(resp.tool)
    }

    pub async fn publish_tool(&self, token: &str, name: &str, tool: &str) -> Result<PublishedTool, ApiError> {
        self.post_json("/publish", &PublishRequest { name, tool }, Some(token))
            .await
    }

    pub async fn recent_tools(&self, token: &str) -> Result<Vec<PublishedTool>, ApiError> {
        let request = with_token(Request::get(&self.endpoint("/tools")), Some(token));
        let resp = request.send().await?;
        let resp: ToolsResponse = read_json("/tools", resp).await?;
        Ok(resp.tools)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", path);
        let request = with_token(Request::post(&self.endpoint(path)), token).json(body)?;
        let resp = request.send().await?;
        read_json(path, resp).await
    }
}

fn with_token(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_json<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        log::warn!("{} failed with HTTP {}", path, resp.status());
        return Err(ApiError::Status {
            endpoint: path.to_string(),
            status: resp.status(),
        });
    }
    Ok(resp.json::<T>().await?)
}

fn extracted_content(resp: ExtractResponse) -> Result<String, ApiError> {
    resp.content
        .filter(|content| !content.trim().is_empty())
        .ok_or(ApiError::MissingField {
            endpoint: "/extract".to_string(),
            field: "content",
        })
}

/// Drop blank entries and duplicates, keeping backend order
fn clean_ideas(ideas: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ideas
        .into_iter()
        .map(|idea| idea.trim().to_string())
        .filter(|idea| !idea.is_empty() && seen.insert(idea.clone()))
        .collect()
}
