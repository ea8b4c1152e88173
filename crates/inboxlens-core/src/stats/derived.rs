//! Aggregate counts over a set of email records.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::email::{EmailRecord, KNOWN_CATEGORIES, Sentiment, Urgency};

/// Display counts derived from a (possibly filtered) set of records.
///
/// Never stored authoritatively; recompute whenever the records or the
/// filter change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedStats {
    /// Number of records.
    pub total: usize,
    /// Records with the starred flag.
    pub starred: usize,
    /// Records not yet read.
    pub unread: usize,
    /// Count per category, only for categories present.
    pub by_category: BTreeMap<String, usize>,
    /// Count per urgency, only for levels present.
    pub by_urgency: BTreeMap<Urgency, usize>,
    /// Count per sentiment, only for sentiments present.
    pub by_sentiment: BTreeMap<Sentiment, usize>,
    /// Count per sender, only for senders present.
    pub by_sender: BTreeMap<String, usize>,
}

impl DerivedStats {
    /// Count for `category`, zero if absent.
    #[must_use]
    pub fn category_count(&self, category: &str) -> usize {
        self.by_category.get(category).copied().unwrap_or(0)
    }

    /// Count for `urgency`, zero if absent.
    #[must_use]
    pub fn urgency_count(&self, urgency: Urgency) -> usize {
        self.by_urgency.get(&urgency).copied().unwrap_or(0)
    }

    /// Count for `sentiment`, zero if absent.
    #[must_use]
    pub fn sentiment_count(&self, sentiment: Sentiment) -> usize {
        self.by_sentiment.get(&sentiment).copied().unwrap_or(0)
    }

    /// Number of high-urgency records.
    #[must_use]
    pub fn urgent(&self) -> usize {
        self.urgency_count(Urgency::High)
    }

    /// Share of `category` in the total, as a percentage in `0.0..=100.0`.
    #[must_use]
    pub fn category_share(&self, category: &str) -> f64 {
        self.percent(self.category_count(category))
    }

    /// Sender with the most records and its count.
    ///
    /// Ties go to the alphabetically first sender. `None` when empty.
    #[must_use]
    pub fn top_sender(&self) -> Option<(&str, usize)> {
        self.by_sender
            .iter()
            .fold(None, |best: Option<(&String, usize)>, (sender, &count)| {
                match best {
                    Some((_, top)) if top >= count => best,
                    _ => Some((sender, count)),
                }
            })
            .map(|(sender, count)| (sender.as_str(), count))
    }

    /// Share of the top sender in the total, as a percentage.
    #[must_use]
    pub fn top_sender_share(&self) -> f64 {
        self.top_sender()
            .map_or(0.0, |(_, count)| self.percent(count))
    }

    #[allow(clippy::cast_precision_loss)] // Counts stay far below 2^52
    fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 * 100.0 / self.total as f64
    }

    /// Rows for the category chart: every known category (zero-filled), then
    /// any other category present, alphabetically.
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<(String, usize)> {
        let known = KNOWN_CATEGORIES
            .iter()
            .map(|c| ((*c).to_string(), self.category_count(c)));
        let others = self
            .by_category
            .iter()
            .filter(|(c, _)| !KNOWN_CATEGORIES.contains(&c.as_str()))
            .map(|(c, n)| (c.clone(), *n));
        known.chain(others).collect()
    }
}

/// Computes totals, starred/unread counts and per-dimension breakdowns.
///
/// Pure and deterministic; an empty input yields all-zero stats.
pub fn compute_stats<'a, I>(records: I) -> DerivedStats
where
    I: IntoIterator<Item = &'a EmailRecord>,
{
    let mut stats = DerivedStats::default();
    for record in records {
        stats.total += 1;
        stats.starred += usize::from(record.starred);
        stats.unread += usize::from(!record.read);
        *stats.by_category.entry(record.category.clone()).or_default() += 1;
        *stats.by_urgency.entry(record.urgency).or_default() += 1;
        *stats.by_sentiment.entry(record.sentiment).or_default() += 1;
        *stats.by_sender.entry(record.sender.clone()).or_default() += 1;
    }
    stats
}
