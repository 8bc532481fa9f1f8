pub mod auth;
pub mod config;
pub mod error;
pub mod fetch;
pub mod gemini;
pub mod server;

pub use error::{Error, Result};
