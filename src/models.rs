//! Data models for message triage
//!
//! This module contains the data structures shared across the triage
//! pipeline: messages, sender categories, and search results.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A message with sender, timestamp, and content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsMessage {
    /// Raw sender address as delivered (TRAI header, phone number, or short code)
    pub sender: String,
    /// Timestamp when the message was received
    pub timestamp: DateTime<Local>,
    /// Message text content
    pub body: String,
}

/// Category assigned to a sender or thread
///
/// Exactly one category applies per sender at any time. `Unknown` marks an
/// address-level classification that still awaits content inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageCategory {
    /// Real person, identified by a phone number
    Personal,
    /// Marketing and advertising senders
    Promotional,
    /// Bank and payment notifications
    Transactional,
    /// Automated service senders (OTPs, bookings, reminders)
    Service,
    /// Government and public-sector senders
    Government,
    /// No confident classification yet
    Unknown,
}

impl MessageCategory {
    /// Parse from the cache's string representation.
    ///
    /// Unrecognized names resolve to `Unknown` rather than failing, so stale
    /// or foreign cache values degrade safely.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "personal" => Self::Personal,
            "promotional" => Self::Promotional,
            "transactional" => Self::Transactional,
            "service" => Self::Service,
            "government" => Self::Government,
            _ => Self::Unknown,
        }
    }

    /// Convert to the cache's string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Promotional => "promotional",
            Self::Transactional => "transactional",
            Self::Service => "service",
            Self::Government => "government",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Promotional => "Promotional",
            Self::Transactional => "Transactional",
            Self::Service => "Service",
            Self::Government => "Government",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A message annotated with its search relevance score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched message
    pub message: SmsMessage,
    /// Non-negative relevance score; zero-score items are filtered out
    pub score: f64,
}
