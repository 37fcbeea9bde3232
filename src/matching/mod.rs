//! Fuzzy matching utilities for record discovery.
//!
//! This module provides approximate name matching so records can be found
//! without knowing the exact spelling of the name they are stored under.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{MatchResult, NameMatcher};
