/// Errors from the image transformation layer.
///
/// These never cross the [`crate::HeadshotEditor`] boundary; they are
/// logged and collapsed into an empty result there.
#[derive(Debug, thiserror::Error)]
pub enum ImagingError {
    /// No API key was configured.
    #[error("Image service API key is not configured")]
    MissingApiKey,

    /// The uploaded payload is empty or not valid base64.
    #[error("Invalid source image: {0}")]
    InvalidImage(String),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Image service error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered but the payload held no edited image.
    #[error("Image service returned no image")]
    NoImage,
}
