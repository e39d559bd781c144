pub mod client;
pub mod error;
pub mod retry;
pub mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL, EMPTY_RESULT_TEXT};
pub use error::GenerateError;
