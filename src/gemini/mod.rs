mod client;
pub mod parse;
pub mod prompt;
mod types;

pub use client::GeminiClient;
