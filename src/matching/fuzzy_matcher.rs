//! Fuzzy name matching for record lookup.
//!
//! This module provides approximate matching of a query against contact names:
//! - Exact (normalized) matches score 95
//! - Substring matches score 10-95 depending on how much of the name is covered
//! - Levenshtein similarity scores 0-85 when at most half the characters differ

use crate::models::Record;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-95)
    pub confidence: u8,
}

/// Record matcher scoring names against a free-text query.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

impl NameMatcher {
    /// Create a new NameMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records whose name matches the query.
    ///
    /// # Arguments
    /// * `query` - Name (or part of a name) to search for
    /// * `records` - Records to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// A vector of MatchResult, sorted by confidence (highest first), then name
    pub fn find_matches<'a>(
        &self,
        query: &str,
        records: impl IntoIterator<Item = &'a Record>,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let query = Self::normalize_name(query);

        let mut results: Vec<MatchResult<'a>> = records
            .into_iter()
            .filter_map(|record| {
                let name = Self::normalize_name(record.name().as_str());
                let confidence = Self::calculate_fuzzy_score(&query, &name);
                (confidence > 0 && confidence >= min_confidence)
                    .then_some(MatchResult { record, confidence })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().as_str().cmp(b.record.name().as_str()))
        });
        results.truncate(max_results);

        results
    }

    /// Score how well `query` matches `target`. Both must already be normalized.
    ///
    /// Returns a confidence score from 0-95.
    pub fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut row: Vec<usize> = (0..=s2_chars.len()).collect();

        for (i, c1) in s1_chars.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }

        row[s2_chars.len()]
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
