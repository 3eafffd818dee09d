//! Fuzzy search scoring
//!
//! Additive relevance scoring for in-app message search. Whole-phrase matches
//! dominate, multi-word queries degrade to per-word matching, and short typo'd
//! queries fall back to an in-order character subsequence match. Scores are
//! heuristic weights, not probabilities; zero means "no match".

use std::cmp::Ordering;
use std::time::Instant;

use unicode_normalization::UnicodeNormalization;

use crate::metrics;
use crate::models::{SearchResult, SmsMessage};

/// Score a message body against a search query.
///
/// Blank queries score 0.0 for every body. The result is non-negative and
/// reproducible: the same body/query pair always yields the same score.
#[must_use]
pub fn score(body: &str, query: &str) -> f64 {
    let query = query.trim();
    if query.is_empty() {
        return 0.0;
    }

    let body_norm = normalize(body);
    let query_norm = normalize(query);
    let mut total = 0.0;

    // Whole-phrase match dominates everything else
    if let Some(first) = body_norm.find(&query_norm) {
        total += 100.0;
        if first == 0 {
            total += 50.0;
        }
        if on_word_boundary(&body_norm, first) {
            total += 30.0;
        }
        total += 5.0 * count_occurrences(&body_norm, &query_norm) as f64;
        return total;
    }

    // Per-word matching for multi-word queries
    let words: Vec<&str> = query_norm.split_whitespace().collect();
    if words.len() >= 2 {
        let mut word_score = 0.0;
        let mut found = 0;
        for word in &words {
            if let Some(pos) = body_norm.find(word) {
                found += 1;
                word_score += 20.0;
                if on_word_boundary(&body_norm, pos) {
                    word_score += 10.0;
                }
            }
        }
        if found == words.len() {
            total += word_score + 30.0;
        } else {
            // Partial-match penalty
            total += word_score / 2.0;
        }
    }

    // Subsequence fallback for near-miss single terms
    if total == 0.0 && query_norm.chars().count() >= 3 {
        let composite = subsequence_score(&body_norm, &query_norm);
        if composite > 0.6 {
            total += composite * 30.0;
        }
    }

    total
}

/// Rank a collection of messages against a query.
///
/// Sender matches contribute at half weight. Zero-score items are filtered
/// out and results sort descending by score; the sort is stable, so equal
/// scores keep the input's recency order. A blank query returns everything
/// in recency order (newest first) with zero scores.
#[must_use]
pub fn search(messages: &[SmsMessage], query: &str) -> Vec<SearchResult> {
    let start = Instant::now();

    let results: Vec<SearchResult> = if query.trim().is_empty() {
        let mut all: Vec<SearchResult> = messages
            .iter()
            .map(|message| SearchResult {
                message: message.clone(),
                score: 0.0,
            })
            .collect();
        all.sort_by(|a, b| b.message.timestamp.cmp(&a.message.timestamp));
        all
    } else {
        let mut matched: Vec<SearchResult> = messages
            .iter()
            .filter_map(|message| {
                let combined = score(&message.body, query) + 0.5 * score(&message.sender, query);
                (combined > 0.0).then(|| SearchResult {
                    message: message.clone(),
                    score: combined,
                })
            })
            .collect();
        matched.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matched
    };

    metrics::record_search(results.len(), start.elapsed());
    tracing::debug!(results = results.len(), "Search scored");
    results
}

/// NFC-normalize and lowercase for case-insensitive matching
fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// A match at `pos` begins on a word boundary when it is at the start of the
/// body or preceded by a non-alphanumeric character
fn on_word_boundary(body: &str, pos: usize) -> bool {
    pos == 0
        || body[..pos]
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_alphanumeric())
}

/// Non-overlapping occurrence count via consecutive forward scans
fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let mut count = 0;
    let mut offset = 0;
    while let Some(pos) = haystack[offset..].find(needle) {
        count += 1;
        offset += pos + needle.len();
    }
    count
}

/// In-order character subsequence match between query and body.
///
/// Returns 0.7 x (matched character ratio) + 0.3 x (longest consecutive run
/// ratio), both relative to query length and clamped to [0, 1].
fn subsequence_score(body: &str, query: &str) -> f64 {
    let query_chars: Vec<char> = query.chars().collect();
    if query_chars.is_empty() {
        return 0.0;
    }

    let mut next = 0;
    let mut matched = 0usize;
    let mut run = 0usize;
    let mut longest_run = 0usize;
    let mut last_match: Option<usize> = None;

    for (pos, c) in body.chars().enumerate() {
        if next == query_chars.len() {
            break;
        }
        if c == query_chars[next] {
            matched += 1;
            next += 1;
            run = match last_match {
                Some(prev) if pos == prev + 1 => run + 1,
                _ => 1,
            };
            longest_run = longest_run.max(run);
            last_match = Some(pos);
        }
    }

    let query_len = query_chars.len() as f64;
    let matched_ratio = (matched as f64 / query_len).clamp(0.0, 1.0);
    let run_ratio = (longest_run as f64 / query_len).clamp(0.0, 1.0);
    0.7 * matched_ratio + 0.3 * run_ratio
}
