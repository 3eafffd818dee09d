//! SMS Triage - Sender Classification and Message Heuristics
//!
//! A Rust library for triaging SMS messages: categorizing senders into
//! Personal/Promotional/Transactional/Service/Government buckets, extracting
//! one-time passwords from message bodies, and ranking messages for search.
//!
//! # Features
//!
//! - TRAI sender-ID parsing with phone-number and short-code fallbacks
//! - Content-based category inference from recent message bodies
//! - Versioned, persistent classification cache
//! - Keyword-proximity OTP extraction
//! - Fuzzy search scoring and ranking

/// Classification cache and key-value store
pub mod cache;
/// Sender and content classification
pub mod classifier;
/// Configuration management
pub mod config;
/// Error types
pub mod error;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// OTP extraction
pub mod otp;
/// Fuzzy search scoring
pub mod search;

// Re-export key components for easier access
pub use cache::{CategoryCache, KeyValueStore, SledStore};
pub use classifier::Classifier;
pub use models::{MessageCategory, SearchResult, SmsMessage};
pub use otp::OtpExtractor;
