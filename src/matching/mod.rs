//! Fuzzy matching utilities for contact lookup.
//!
//! This module provides name and phone matching used by the `search`
//! command and by "did you mean" hints on lookup misses.

pub mod name_matcher;

pub use name_matcher::{MatchResult, MatchType, NameMatcher};
