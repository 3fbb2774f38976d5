//! Parsing of range lists such as `"11-22,95-115,998-1012"`.
//!
//! Tokens are separated by commas and may span lines; whitespace around a
//! token and empty tokens are ignored. Reversed bounds are normalized.

use crate::error::{ParseError, Result};
use crate::range::IdRange;

/// Parse one `lo-hi` token.
pub fn parse_range(token: &str) -> Result<IdRange> {
    let token = token.trim();
    let (lo, hi) = token
        .split_once('-')
        .ok_or_else(|| ParseError::MissingSeparator {
            token: token.to_string(),
        })?;
    let bound = |text: &str| {
        let text = text.trim();
        text.parse::<i64>()
            .map_err(|source| ParseError::InvalidBound {
                token: token.to_string(),
                text: text.to_string(),
                source,
            })
    };
    Ok(IdRange::new(bound(lo)?, bound(hi)?))
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Parse a comma-separated range list, failing on the first malformed token.
pub fn parse_ranges(text: &str) -> Result<Vec<IdRange>> {
    tokens(text).map(parse_range).collect()
}

/// Parse a comma-separated range list, skipping malformed tokens.
pub fn parse_ranges_lossy(text: &str) -> Vec<IdRange> {
    tokens(text)
        .filter_map(|token| match parse_range(token) {
            Ok(range) => Some(range),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "skipping malformed range");
                None
            }
        })
        .collect()
}
