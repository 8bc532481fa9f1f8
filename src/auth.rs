use crate::{Error, Result};

/// Validates the inbound bearer credential against the configured secret.
///
/// An empty configured secret is a deployment mistake and is reported as a
/// configuration error rather than silently letting every caller through.
/// The secret itself is never logged.
pub fn check_bearer(auth_header: Option<&str>, expected_secret: &str) -> Result<()> {
    if expected_secret.is_empty() {
        return Err(Error::config("Server API_KEY not configured"));
    }

    let expected = format!("Bearer {expected_secret}");
    match auth_header {
        Some(header) if header.trim() == expected => Ok(()),
        _ => Err(Error::Forbidden),
    }
}
