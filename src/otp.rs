//! OTP extraction
//!
//! High-precision extraction of one-time passwords from message bodies.
//! A numeric token only qualifies when an OTP-indicating keyword sits within
//! a small character window of it; a missed code is preferred over surfacing
//! an account number or amount as a copyable OTP.

use regex::Regex;

use crate::error::Result;
use crate::metrics;

/// Bodies longer than this many characters are skipped entirely
pub const DEFAULT_MAX_BODY_CHARS: usize = 1000;

/// Maximum character gap between a numeric token and the nearest keyword
pub const DEFAULT_KEYWORD_WINDOW: usize = 40;

/// Extracts one-time passwords from message bodies
pub struct OtpExtractor {
    keyword_pattern: Regex,
    token_pattern: Regex,
    max_body_chars: usize,
    keyword_window: usize,
}

impl OtpExtractor {
    /// Create an extractor with the default body limit and keyword window
    pub fn new() -> Result<Self> {
        Self::with_limits(DEFAULT_MAX_BODY_CHARS, DEFAULT_KEYWORD_WINDOW)
    }

    /// Create an extractor with explicit limits
    pub fn with_limits(max_body_chars: usize, keyword_window: usize) -> Result<Self> {
        let keyword_pattern = Regex::new(
            r"(?i)\b(?:otp|one[ -]time password|verification code|security code|login code|passcode)\b",
        )?;
        // 4-8 digits bounded by word boundaries; longer runs (full phone
        // numbers, account numbers) never match
        let token_pattern = Regex::new(r"\b\d{4,8}\b")?;

        Ok(Self {
            keyword_pattern,
            token_pattern,
            max_body_chars,
            keyword_window,
        })
    }

    /// Return the first numeric token close enough to an OTP keyword, if any.
    ///
    /// Total over arbitrary input; oversized bodies return `None` without a
    /// partial scan (a performance guard, not a correctness one).
    #[must_use]
    pub fn extract(&self, body: &str) -> Option<String> {
        if body.chars().count() > self.max_body_chars {
            metrics::record_otp_extraction(false);
            return None;
        }

        let keywords: Vec<(usize, usize)> = self
            .keyword_pattern
            .find_iter(body)
            .map(|m| (m.start(), m.end()))
            .collect();

        if !keywords.is_empty() {
            for token in self.token_pattern.find_iter(body) {
                let gap = keywords
                    .iter()
                    .map(|&(start, end)| span_gap(token.start(), token.end(), start, end))
                    .min()
                    .unwrap_or(usize::MAX);

                if gap <= self.keyword_window {
                    metrics::record_otp_extraction(true);
                    return Some(token.as_str().to_string());
                }
            }
        }

        metrics::record_otp_extraction(false);
        None
    }
}

/// Character gap between two spans; zero when they touch or overlap
const fn span_gap(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> usize {
    if a_start >= b_end {
        a_start - b_end
    } else if b_start >= a_end {
        b_start - a_end
    } else {
        0
    }
}
