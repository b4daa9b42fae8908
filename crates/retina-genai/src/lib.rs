//! retina-genai
//!
//! Text-generation boundary: the injectable generator trait, the Gemini
//! HTTP client, a deterministic stub, and prompt construction.

pub mod error;
pub mod gemini;
pub mod generator;
pub mod prompt;
