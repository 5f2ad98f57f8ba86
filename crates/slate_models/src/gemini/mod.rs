mod client;
mod dto;

pub use client::{API_KEY_VAR, DEFAULT_MODEL, GeminiClient};
