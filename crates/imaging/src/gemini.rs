//! Google Gemini image-editing client.
//!
//! Wraps the `models/{model}:generateContent` REST endpoint using
//! [`reqwest`]. One request per edit, no retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ImagingError;
use crate::headshot::{
    EditedImage, HeadshotEditor, SourceImage, DEFAULT_OUTPUT_MIME, HEADSHOT_INSTRUCTION,
};

/// Default public API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default image-editing model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// HTTP client for the Gemini image model.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key_set", &!self.api_key.is_empty())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Content<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 2],
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    #[serde(rename_all = "camelCase")]
    Inline { inline_data: InlineDataRef<'a> },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineDataRef<'a> {
    data: &'a str,
    mime_type: &'a str,
}

/// Response body of `generateContent`, reduced to the fields we read.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    #[serde(default)]
    pub inline_data: Option<InlineData>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub data: String,
    #[serde(default)]
    pub mime_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl GeminiClient {
    /// Create a client against the public endpoint and default model.
    ///
    /// An empty `api_key` is accepted; every edit will then fail.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(
            reqwest::Client::new(),
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_MODEL.to_string(),
            api_key.into(),
        )
    }

    /// Create a client reusing an existing [`reqwest::Client`] and a custom
    /// endpoint / model.
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        model: String,
        api_key: String,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Send one edit request and extract the resulting image.
    pub async fn generate(&self, image: &SourceImage) -> Result<EditedImage, ImagingError> {
        if !self.has_api_key() {
            return Err(ImagingError::MissingApiKey);
        }

        let body = build_request(image);
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ImagingError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<GenerateResponse>().await?;
        extract_image(parsed).ok_or(ImagingError::NoImage)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl HeadshotEditor for GeminiClient {
    async fn edit(&self, image: &SourceImage) -> Option<EditedImage> {
        match self.generate(image).await {
            Ok(edited) => {
                tracing::info!(
                    model = %self.model,
                    mime_type = %edited.mime_type,
                    bytes = edited.data.len(),
                    "Headshot transformation succeeded",
                );
                Some(edited)
            }
            Err(e) => {
                tracing::error!(model = %self.model, error = %e, "Headshot transformation failed");
                None
            }
        }
    }
}

fn build_request(image: &SourceImage) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: Content {
            parts: [
                RequestPart::Inline {
                    inline_data: InlineDataRef {
                        data: &image.data,
                        mime_type: &image.mime_type,
                    },
                },
                RequestPart::Text {
                    text: HEADSHOT_INSTRUCTION,
                },
            ],
        },
    }
}

/// Take the first inline image from the first candidate.
pub fn extract_image(response: GenerateResponse) -> Option<EditedImage> {
    let content = response.candidates.into_iter().next()?.content?;
    content
        .parts
        .into_iter()
        .filter_map(|part| part.inline_data)
        .find(|inline| !inline.data.is_empty())
        .map(|inline| EditedImage {
            mime_type: inline
                .mime_type
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_OUTPUT_MIME.to_string()),
            data: inline.data,
        })
}
