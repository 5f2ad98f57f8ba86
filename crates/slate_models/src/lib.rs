//! LLM provider integration for the Slate screenwriting toolkit.
//!
//! Currently one provider: Google Gemini over its REST `generateContent`
//! endpoint. The client implements
//! [`TextGenerator`](slate_interface::TextGenerator), so the analysis facade
//! never depends on this crate directly.

mod gemini;

pub use gemini::{API_KEY_VAR, DEFAULT_MODEL, GeminiClient};
