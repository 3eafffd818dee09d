//! Sender classification
//!
//! Two-stage categorization of SMS senders: address-based classification of
//! the raw sender ID (TRAI header grammar, phone-number and short-code
//! heuristics), with a content-based keyword fallback for senders whose
//! address alone is not conclusive.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::models::MessageCategory;

/// Default number of recent message bodies sampled for content inference
pub const DEFAULT_SAMPLE_SIZE: usize = 5;

/// Marketing and advertising vocabulary
const PROMOTIONAL_KEYWORDS: &[&str] = &[
    "offer",
    "sale",
    "discount",
    "cashback",
    "coupon",
    "deal",
    "free",
    "win",
    "shop now",
    "buy now",
    "limited time",
    "unsubscribe",
];

/// Banking and payment vocabulary
const TRANSACTIONAL_KEYWORDS: &[&str] = &[
    "debited",
    "credited",
    "a/c",
    "account balance",
    "transaction",
    "txn",
    "payment",
    "upi",
    "withdrawn",
    "deposited",
    "neft",
    "imps",
];

/// Automated service vocabulary
const SERVICE_KEYWORDS: &[&str] = &[
    "otp",
    "verification code",
    "booking",
    "appointment",
    "order",
    "delivery",
    "recharge",
    "ticket",
    "reminder",
    "password",
    "login",
];

/// Public-sector vocabulary
const GOVERNMENT_KEYWORDS: &[&str] = &[
    "govt",
    "government",
    "aadhaar",
    "election",
    "ministry",
    "municipal",
    "tax",
    "census",
    "vaccination",
    "passport",
];

/// Sender classifier combining address grammar and content keywords
pub struct Classifier {
    trai_with_suffix: Regex,
    trai_without_suffix: Regex,
    sample_size: usize,
}

impl Classifier {
    /// Create a classifier with the default content sample size
    pub fn new() -> Result<Self> {
        Self::with_sample_size(DEFAULT_SAMPLE_SIZE)
    }

    /// Create a classifier sampling up to `sample_size` recent bodies
    /// during content inference
    pub fn with_sample_size(sample_size: usize) -> Result<Self> {
        // TRAI sender-ID grammar: two-letter access-provider/region prefix,
        // 1-6 alphanumeric header, optional single-letter category suffix
        let trai_with_suffix = Regex::new(r"^[A-Z]{2}-[A-Z0-9]{1,6}-([A-Z])$")?;
        let trai_without_suffix = Regex::new(r"^[A-Z]{2}-[A-Z0-9]{1,6}$")?;

        Ok(Self {
            trai_with_suffix,
            trai_without_suffix,
            sample_size,
        })
    }

    /// Classify a raw sender address string.
    ///
    /// Total over arbitrary input: malformed or empty addresses fall through
    /// to `Unknown` rather than failing. Matching is done on an uppercased
    /// copy; the original casing is untouched for display elsewhere.
    #[must_use]
    pub fn classify_address(&self, address: &str) -> MessageCategory {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return MessageCategory::Unknown;
        }

        let upper = trimmed.to_uppercase();

        if let Some(caps) = self.trai_with_suffix.captures(&upper) {
            return match caps.get(1).map(|m| m.as_str()) {
                Some("P") => MessageCategory::Promotional,
                Some("T") => MessageCategory::Transactional,
                Some("S") => MessageCategory::Service,
                Some("G") => MessageCategory::Government,
                _ => MessageCategory::Unknown,
            };
        }

        // Header without a category suffix: defer to content inference
        if self.trai_without_suffix.is_match(&upper) {
            return MessageCategory::Unknown;
        }

        let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
        match digits.len() {
            // Covers E.164 and bare 10-digit local numbers
            10..=15 => MessageCategory::Personal,
            // Short codes used by automated senders
            3..=8 => MessageCategory::Service,
            _ => MessageCategory::Unknown,
        }
    }

    /// Infer a category from recent message bodies of a thread.
    ///
    /// Samples up to the configured number of bodies, concatenates and
    /// lowercases them, and counts how many distinct keywords from each
    /// category list occur as plain substrings. The strictly highest count
    /// wins; ties resolve in the order Promotional, Transactional, Service,
    /// Government. With no samples or no keyword hits at all the result is
    /// `Service`.
    #[must_use]
    pub fn infer_from_content(&self, recent_bodies: &[String]) -> MessageCategory {
        if recent_bodies.is_empty() {
            return MessageCategory::Service;
        }

        let sample = recent_bodies
            .iter()
            .take(self.sample_size)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        let haystack = sample.nfc().collect::<String>().to_lowercase();

        let counts = [
            (MessageCategory::Promotional, count_hits(&haystack, PROMOTIONAL_KEYWORDS)),
            (MessageCategory::Transactional, count_hits(&haystack, TRANSACTIONAL_KEYWORDS)),
            (MessageCategory::Service, count_hits(&haystack, SERVICE_KEYWORDS)),
            (MessageCategory::Government, count_hits(&haystack, GOVERNMENT_KEYWORDS)),
        ];

        // Later lists must beat the running best strictly, which encodes the
        // tie precedence above
        let mut best = MessageCategory::Service;
        let mut best_count = 0;
        for (category, count) in counts {
            if count > best_count {
                best = category;
                best_count = count;
            }
        }
        best
    }

    /// Classify an address, escalating to content inference when the
    /// address alone resolves to `Unknown`
    #[must_use]
    pub fn classify(&self, address: &str, recent_bodies: &[String]) -> MessageCategory {
        match self.classify_address(address) {
            MessageCategory::Unknown => self.infer_from_content(recent_bodies),
            category => category,
        }
    }
}

/// Count how many distinct keywords occur in the haystack as substrings
fn count_hits(haystack: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| haystack.contains(**kw)).count()
}
