//! URL checks: scheme sanitization for rendered links and the safety
//! validation that gates page fetching.

use std::net::Ipv4Addr;

use url::Url;

use crate::error::UrlError;

/// Sanitize a link target for rendering.
///
/// Trims the value and rejects `javascript:`, `vbscript:`, and `data:`
/// schemes case-insensitively. Returns `None` for empty or rejected
/// values, which renders as "no link" rather than an error.
#[must_use]
pub fn sanitize_url(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    let lower = value.to_ascii_lowercase();
    if lower.starts_with("javascript:")
        || lower.starts_with("vbscript:")
        || lower.starts_with("data:")
    {
        return None;
    }
    Some(value.to_string())
}

/// Validate a URL before fetching it.
///
/// Requires http/https, refuses embedded credentials, non-standard ports,
/// localhost-like hosts, and private-network IPv4 literals. This is not a
/// complete SSRF defense (DNS could still resolve to private addresses);
/// it blocks the obvious cases. With `allow_local` the port and host
/// checks are skipped, which local testing needs.
///
/// # Errors
///
/// Returns the [`UrlError`] variant naming the first failed check.
pub fn validate_fetch_url(raw: &str, allow_local: bool) -> Result<Url, UrlError> {
    let parsed = Url::parse(raw.trim()).map_err(|_| UrlError::Invalid)?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlError::UnsupportedScheme),
    }

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(UrlError::Credentials);
    }

    if allow_local {
        return Ok(parsed);
    }

    if let Some(port) = parsed.port() {
        if port != 80 && port != 443 {
            return Err(UrlError::NonStandardPort);
        }
    }

    let host = parsed.host_str().ok_or(UrlError::Invalid)?.to_ascii_lowercase();
    if host == "localhost"
        || host.ends_with(".localhost")
        || host.ends_with(".local")
        || host == "0.0.0.0"
    {
        return Err(UrlError::LocalHost);
    }

    if let Ok(addr) = host.parse::<Ipv4Addr>() {
        let [a, b, _, _] = addr.octets();
        let private =
            a == 10 || (a == 172 && (16..=31).contains(&b)) || (a == 192 && b == 168) || a == 127;
        if private {
            return Err(UrlError::PrivateAddress);
        }
    }

    Ok(parsed)
}
