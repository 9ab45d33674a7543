//! Fuzzy contact matching for search and "did you mean" hints.
//!
//! Scores are on a 0-100 scale:
//! - 100 for a contact holding the queried phone number
//! - 95 for an exact (normalized) name match
//! - 10-95 when the query is a substring of the name
//! - up to 85 by Levenshtein similarity, 0 beyond 50% edits

use crate::models::Contact;

/// A match result containing a contact and its confidence score.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
    /// The matched contact
    pub contact: &'a Contact,

    /// Confidence score (0-100, where 100 is an exact phone match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// One of the contact's phones contains the query digits
    Phone,

    /// Fuzzy name match
    FuzzyName,
}

/// Contact matcher over names and phone numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameMatcher;

impl NameMatcher {
    /// Create a new NameMatcher.
    pub fn new() -> Self {
        Self
    }

    /// Find contacts matching `query`.
    ///
    /// A query made only of digits is matched against phone numbers first.
    /// Results are sorted by confidence (highest first), then by name, and
    /// truncated to `max_results`.
    pub fn find_matches<'a>(
        &self,
        query: &str,
        contacts: impl IntoIterator<Item = &'a Contact>,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let normalized_query = Self::normalize_name(query);
        let digits_query = !normalized_query.is_empty()
            && normalized_query.chars().all(|c| c.is_ascii_digit());

        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for contact in contacts {
            if digits_query
                && contact
                    .phones()
                    .iter()
                    .any(|phone| phone.as_str().contains(normalized_query.as_str()))
            {
                results.push(MatchResult {
                    contact,
                    confidence: 100,
                    match_type: MatchType::Phone,
                });
                continue;
            }

            let name = Self::normalize_name(contact.name().as_str());
            let confidence = Self::calculate_fuzzy_score(&normalized_query, &name);
            if confidence > 0 && confidence >= min_confidence {
                results.push(MatchResult {
                    contact,
                    confidence,
                    match_type: MatchType::FuzzyName,
                });
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.contact.name().cmp(b.contact.name()))
        });
        results.truncate(max_results);

        results
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

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
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
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
