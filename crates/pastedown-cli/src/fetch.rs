//! Bounded page fetching for `--url` input.
//!
//! Redirects are followed manually so that every hop is re-validated;
//! responses are capped at 2 MB and decoded with the charset the server
//! declares, falling back to UTF-8.

use std::io::Read;
use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use pastedown::UrlError;
use thiserror::Error;
use url::Url;

/// Default User-Agent for fetches.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; PastedownBot/1.0; +https://github.com/pastedown/pastedown)";

const MAX_HTML_BYTES: usize = 2_000_000;
const FETCH_TIMEOUT: Duration = Duration::from_secs(20);
const MAX_REDIRECTS: usize = 5;

/// Failures while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Url(#[from] UrlError),
    #[error("Fetch failed ({0})")]
    Status(u16),
    #[error("Redirect response missing location header")]
    MissingLocation,
    #[error("Too many redirects")]
    TooManyRedirects,
    #[error("Page is too large to import")]
    TooLarge,
    #[error("Unsupported content type for import")]
    UnsupportedContentType,
    #[error("Fetch failed: {0}")]
    Transport(String),
}

/// A fetched page: the URL after redirects and the decoded body.
pub struct FetchedPage {
    pub final_url: String,
    pub body: String,
}

/// Fetch `raw_url` with redirect, size, and content-type limits.
pub fn fetch_html(
    raw_url: &str,
    user_agent: &str,
    allow_local: bool,
) -> Result<FetchedPage, FetchError> {
    let mut current: Url = pastedown::url::validate_fetch_url(raw_url, allow_local)?;

    let agent = ureq::AgentBuilder::new()
        .timeout(FETCH_TIMEOUT)
        .redirects(0)
        .user_agent(user_agent)
        .build();

    for _ in 0..MAX_REDIRECTS {
        tracing::debug!(url = %current, "fetching");
        let response = match agent
            .request_url("GET", &current)
            .set("Accept", "text/html,text/plain;q=0.9,*/*;q=0.8")
            .call()
        {
            Ok(response) => response,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(err) => return Err(FetchError::Transport(err.to_string())),
        };

        let status = response.status();
        if matches!(status, 301 | 302 | 303 | 307 | 308) {
            let location = response
                .header("location")
                .ok_or(FetchError::MissingLocation)?;
            let next = current.join(location).map_err(|_| UrlError::Invalid)?;
            current = pastedown::url::validate_fetch_url(next.as_str(), allow_local)?;
            continue;
        }

        if let Some(length) = response
            .header("content-length")
            .and_then(|value| value.parse::<usize>().ok())
        {
            if length > MAX_HTML_BYTES {
                return Err(FetchError::TooLarge);
            }
        }

        let content_type = response.header("content-type").map(str::to_owned);
        if let Some(value) = content_type.as_deref() {
            let lower = value.to_ascii_lowercase();
            if !lower.contains("text/html") && !lower.contains("text/plain") {
                return Err(FetchError::UnsupportedContentType);
            }
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .take(MAX_HTML_BYTES as u64 + 1)
            .read_to_end(&mut body)
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        if body.len() > MAX_HTML_BYTES {
            return Err(FetchError::TooLarge);
        }

        let text = decode_body(&body, content_type.as_deref());
        return Ok(FetchedPage {
            final_url: current.to_string(),
            body: text,
        });
    }

    Err(FetchError::TooManyRedirects)
}

fn decode_body(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let part = part.trim().to_ascii_lowercase();
        part.strip_prefix("charset=")
            .map(|label| label.trim_matches('"').to_string())
    })
}
