//! Metrics collection
//!
//! Thin helpers over the `metrics` facade. Recording is a no-op unless the
//! embedding application installs a recorder.

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};

use crate::models::MessageCategory;

const CLASSIFICATIONS_TOTAL: &str = "sms_triage_classifications_total";
const CACHE_LOOKUPS_TOTAL: &str = "sms_triage_cache_lookups_total";
const CACHE_INVALIDATIONS_TOTAL: &str = "sms_triage_cache_invalidations_total";
const OTP_EXTRACTIONS_TOTAL: &str = "sms_triage_otp_extractions_total";
const SEARCH_DURATION_SECONDS: &str = "sms_triage_search_duration_seconds";
const SEARCH_RESULTS: &str = "sms_triage_search_results";

/// Register metric descriptions with the installed recorder
pub fn describe() {
    describe_counter!(
        CLASSIFICATIONS_TOTAL,
        "Sender classifications by category and source"
    );
    describe_counter!(CACHE_LOOKUPS_TOTAL, "Classification cache lookups by outcome");
    describe_counter!(
        CACHE_INVALIDATIONS_TOTAL,
        "Whole-cache invalidations triggered by schema version bumps"
    );
    describe_counter!(OTP_EXTRACTIONS_TOTAL, "OTP extraction attempts by outcome");
    describe_histogram!(
        SEARCH_DURATION_SECONDS,
        Unit::Seconds,
        "Fuzzy search duration"
    );
    describe_histogram!(SEARCH_RESULTS, "Results returned per search");
}

/// Record a completed sender classification
pub fn record_classification(category: MessageCategory, source: &str) {
    counter!(
        CLASSIFICATIONS_TOTAL,
        "category" => category.as_str(),
        "source" => source.to_string()
    )
    .increment(1);
}

/// Record a cache lookup outcome
pub fn record_cache_lookup(hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    counter!(CACHE_LOOKUPS_TOTAL, "outcome" => outcome).increment(1);
}

/// Record a whole-cache invalidation
pub fn record_cache_invalidation() {
    counter!(CACHE_INVALIDATIONS_TOTAL).increment(1);
}

/// Record an OTP extraction attempt
pub fn record_otp_extraction(found: bool) {
    let outcome = if found { "found" } else { "absent" };
    counter!(OTP_EXTRACTIONS_TOTAL, "outcome" => outcome).increment(1);
}

/// Record a search run
pub fn record_search(result_count: usize, duration: Duration) {
    histogram!(SEARCH_DURATION_SECONDS).record(duration.as_secs_f64());
    histogram!(SEARCH_RESULTS).record(result_count as f64);
}
