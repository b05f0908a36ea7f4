//! Error types for conversion and URL validation.

use thiserror::Error;

/// Convenience alias for conversion results.
pub type Result<T> = std::result::Result<T, ConversionError>;

/// Errors produced by the conversion pipeline.
///
/// Conversion degrades rather than fails: malformed, unbalanced, or unknown
/// markup produces best-effort output. The only error path is the parser
/// refusing the input outright, which lenient parsing makes effectively
/// unreachable in practice.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The HTML parser could not produce a tree for the input.
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

/// Rejections from [`crate::url::validate_fetch_url`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The input could not be parsed as an absolute URL.
    #[error("Invalid URL")]
    Invalid,
    /// Scheme other than `http` or `https`.
    #[error("Only http(s) URLs are supported")]
    UnsupportedScheme,
    /// The URL embeds a username or password.
    #[error("Refusing URLs with credentials")]
    Credentials,
    /// The URL targets a port other than 80 or 443.
    #[error("Refusing non-standard ports")]
    NonStandardPort,
    /// The host is localhost or a link-local name.
    #[error("Refusing to fetch local URLs")]
    LocalHost,
    /// The host is a private-network IPv4 literal.
    #[error("Refusing to fetch private-network IPs")]
    PrivateAddress,
}
