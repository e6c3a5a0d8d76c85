//! Fuzzy matching implementation for contact lookup.
//!
//! This module provides contact matching with:
//! - Exact matching on phone numbers (digits only)
//! - Fuzzy name matching (substring and edit distance)
//! - Confidence scoring (0-100 scale)

use crate::models::{AddressBook, Record};

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The matched record
    pub record: Record,

    /// Confidence score (0-100, where 100 is an exact phone match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher with fuzzy name and exact phone matching.
pub struct ContactMatcher;

impl ContactMatcher {
    /// Create a new ContactMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find records matching `query` by phone or by name.
    ///
    /// # Arguments
    /// * `query` - A phone number or (part of) a name
    /// * `book` - The address book to search
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Returns
    /// A vector of MatchResult, sorted by confidence (highest first), then by name
    pub fn find_matches(
        &self,
        query: &str,
        book: &AddressBook,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = Vec::new();

        for record in book.records() {
            // Exact phone matches take priority
            if self.match_phone(query, record) {
                results.push(MatchResult {
                    record: record.clone(),
                    confidence: 100,
                    match_type: MatchType::ExactPhone,
                });
                continue;
            }

            if let Some(confidence) = self.fuzzy_match_name(query, record.name().as_str()) {
                if confidence >= min_confidence {
                    results.push(MatchResult {
                        record: record.clone(),
                        confidence,
                        match_type: MatchType::FuzzyName,
                    });
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().as_str().cmp(b.record.name().as_str()))
        });

        results.truncate(max_results);

        results
    }

    /// Whether any phone on the record equals the query's digits.
    fn match_phone(&self, query: &str, record: &Record) -> bool {
        let normalized_query = Self::normalize_phone(query);
        if normalized_query.is_empty() {
            return false;
        }

        record
            .phones()
            .iter()
            .any(|phone| phone.as_str() == normalized_query)
    }

    /// Fuzzy match names.
    ///
    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (100 is reserved for phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        // Substring of the name: 10-95 depending on coverage
        if target.contains(query) {
            let ratio = query.chars().count() as f64 / target.chars().count() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

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

        // Two rolling rows instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = if c1 == c2 { 0 } else { 1 };
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    /// Normalize a phone number for comparison.
    ///
    /// Keeps only ASCII digits; anything else is formatting.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Normalize a name for fuzzy matching.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ContactMatcher {
    fn default() -> Self {
        Self::new()
    }
}
