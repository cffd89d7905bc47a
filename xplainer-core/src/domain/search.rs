//! Search domain model
//!
//! Represents the answer the backend generates for one question.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Answer to a single question about a repository
///
/// Ephemeral: a view holds at most one and drops it when the next question
/// is asked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Generated natural-language answer
    pub summary: String,

    /// Seconds spent retrieving context
    pub search_time: f64,

    /// Seconds spent loading the index
    pub load_time: f64,

    /// Exact prompt sent to the reasoning engine
    pub prompt: String,
}

impl SearchResult {
    /// Retrieval time as a `Duration`, or `None` if the backend sent a
    /// negative or non-finite value
    pub fn search_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.search_time).ok()
    }

    /// Index load time as a `Duration`
    pub fn load_duration(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.load_time).ok()
    }
}
