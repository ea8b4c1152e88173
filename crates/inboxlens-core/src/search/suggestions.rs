//! Query suggestions: fixed examples plus recently submitted queries.

/// Example queries offered under the smart search box.
pub const SUGGESTED_QUERIES: [&str; 5] = [
    "urgent emails from my manager last week",
    "positive feedback from customers this month",
    "meeting requests for next week",
    "emails about project deadlines",
    "unread messages from VIP contacts",
];

/// Most-recent-first list of accepted queries, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentQueries {
    queries: Vec<String>,
    limit: usize,
}

impl RecentQueries {
    /// Creates an empty list keeping at most `limit` entries.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            queries: Vec::new(),
            limit,
        }
    }

    /// Moves `query` to the front, dropping the oldest entry past the limit.
    pub fn track(&mut self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        self.queries.retain(|q| q != query);
        self.queries.insert(0, query.to_string());
        self.queries.truncate(self.limit);
    }

    /// Entries, newest first.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.queries
    }

    /// Recent queries, then the fixed examples, whose text starts with
    /// `prefix` (case-insensitive). Duplicates appear once.
    #[must_use]
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut out: Vec<String> = Vec::new();

        let candidates = self
            .queries
            .iter()
            .map(String::as_str)
            .chain(SUGGESTED_QUERIES);
        for candidate in candidates {
            if out.len() >= limit {
                break;
            }
            if candidate.to_lowercase().starts_with(&prefix) && !out.iter().any(|q| q == candidate)
            {
                out.push(candidate.to_string());
            }
        }
        out
    }
}
