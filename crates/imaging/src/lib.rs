//! Headshot styling through an external generative image service.
//!
//! The service itself is opaque: image bytes and a fixed instruction go in,
//! an edited image or nothing comes out. [`HeadshotEditor`] is the seam the
//! API layer depends on; [`gemini::GeminiClient`] is the production
//! implementation.

pub mod error;
pub mod gemini;
pub mod headshot;

pub use error::ImagingError;
pub use headshot::{EditedImage, HeadshotEditor, SourceImage, HEADSHOT_INSTRUCTION};
