use crate::{Error, Result};
use std::time::Duration;
use tracing::{debug, error};

const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Guesses a MIME type from the URL's file extension, case-insensitively.
///
/// Known limitation: this trusts the trailing characters of the URL and never
/// inspects the fetched bytes, so a mislabeled URL produces a wrong MIME type.
pub fn guess_mime(url: &str) -> &'static str {
    let u = url.to_lowercase();
    if u.ends_with(".png") {
        "image/png"
    } else if u.ends_with(".jpg") || u.ends_with(".jpeg") {
        "image/jpeg"
    } else if u.ends_with(".webp") {
        "image/webp"
    } else {
        // default
        "image/png"
    }
}

/// Fetches raw image bytes from a pre-authenticated URL.
///
/// Returns the body bytes and the guessed MIME type. No validation that the
/// bytes decode as an image.
pub async fn fetch_image(client: &reqwest::Client, url: &str) -> Result<(Vec<u8>, &'static str)> {
    let mime_type = guess_mime(url);

    let response = client
        .get(url)
        .timeout(FETCH_TIMEOUT)
        .send()
        .await
        .map_err(|e| {
            error!("Image fetch failed: {}", e);
            Error::ImageUnreachable(e.to_string())
        })?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        error!("Image fetch returned status {}", status);
        return Err(Error::ImageFetch {
            status: status.as_u16(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::ImageUnreachable(e.to_string()))?;

    debug!(len = bytes.len(), mime = mime_type, "Fetched image bytes");

    Ok((bytes.to_vec(), mime_type))
}
