//! Frequency aggregation of answer strings

use std::collections::HashMap;

/// Count of how many times each distinct answer string appears across
/// all processed documents.
///
/// Equality is exact string equality; answers are trimmed at extraction
/// time and never normalized for case or punctuation here. Invariants:
/// the sum of all counts equals the number of qualifying answer lines
/// observed, and the key count equals the number of distinct strings.
#[derive(Debug, Default)]
pub struct Frequencies {
    counts: HashMap<String, u64>,
}

impl Frequencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of an answer string.
    pub fn record(&mut self, answer: String) {
        *self.counts.entry(answer).or_insert(0) += 1;
    }

    /// Fold one file's worth of answers into the tally.
    pub fn extend<I>(&mut self, answers: I)
    where
        I: IntoIterator<Item = String>,
    {
        for answer in answers {
            self.record(answer);
        }
    }

    /// Number of distinct answer strings.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total answer lines observed (sum of all counts).
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrences of a specific answer string.
    pub fn count(&self, answer: &str) -> u64 {
        self.counts.get(answer).copied().unwrap_or(0)
    }

    /// All pairs sorted ascending by count. The relative order of
    /// equal-count entries is unspecified.
    pub fn sorted_ascending(&self) -> Vec<(&str, u64)> {
        let mut pairs: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(answer, &count)| (answer.as_str(), count))
            .collect();
        pairs.sort_by_key(|&(_, count)| count);
        pairs
    }
}
