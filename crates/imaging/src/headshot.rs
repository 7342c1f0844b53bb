//! Headshot transformation contract.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ImagingError;

/// Instruction sent alongside every photo.
pub const HEADSHOT_INSTRUCTION: &str = "Please edit this photo to look like a professional, \
high-quality passport photo for a religious official (Imam/Bilal). \
1. Add a traditional black Malay songkok on the head, ensuring it is positioned neatly and perfectly. \
2. Change the clothing to a neat, professional dark blazer over a clean white shirt. \
3. Ensure the overall appearance is tidy, sharp, and aesthetically pleasing. \
4. Use a solid, professional light background. \
5. Crop to a standard passport headshot ratio (35mm x 45mm). \
Return only the edited image.";

/// MIME type assumed for edited images when the service omits one.
pub const DEFAULT_OUTPUT_MIME: &str = "image/png";

/// An uploaded photo, base64-encoded without any data URL prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub mime_type: String,
    pub data: String,
}

impl SourceImage {
    /// Build a source image from client input.
    ///
    /// `payload` may be bare base64 or a `data:<mime>;base64,<data>` URL; the
    /// prefix is stripped. An explicit `mime_type` wins over the one in the
    /// data URL.
    pub fn from_upload(payload: &str, mime_type: Option<&str>) -> Result<Self, ImagingError> {
        let payload = payload.trim();
        let (url_mime, data) = split_data_url(payload);

        if data.is_empty() {
            return Err(ImagingError::InvalidImage("image payload is empty".into()));
        }
        STANDARD
            .decode(data)
            .map_err(|e| ImagingError::InvalidImage(format!("not valid base64: {e}")))?;

        let mime_type = mime_type
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .or(url_mime)
            .ok_or_else(|| ImagingError::InvalidImage("image MIME type is missing".into()))?;

        if !mime_type.starts_with("image/") {
            return Err(ImagingError::InvalidImage(format!(
                "unsupported MIME type '{mime_type}'"
            )));
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }
}

/// An edited image returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditedImage {
    pub mime_type: String,
    pub data: String,
}

impl EditedImage {
    /// Render as a `data:` URL, the form stored in `image_data`.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// Applies the headshot styling to a photo.
///
/// Implementations make a single attempt. Any failure (quota, malformed
/// input, outage, empty result) is logged and reported as `None`.
#[async_trait]
pub trait HeadshotEditor: Send + Sync {
    async fn edit(&self, image: &SourceImage) -> Option<EditedImage>;
}

/// Split `data:<mime>;base64,<data>` into its MIME type and payload.
///
/// Input without a data URL prefix is returned unchanged with no MIME type.
fn split_data_url(payload: &str) -> (Option<&str>, &str) {
    let Some(rest) = payload.strip_prefix("data:") else {
        return (None, payload);
    };
    match rest.split_once(',') {
        Some((header, data)) => {
            let mime = header.split(';').next().filter(|m| !m.is_empty());
            (mime, data)
        }
        None => (None, ""),
    }
}
