//! Replaceable data sources used to seed an [`EmailCollection`].
//!
//! [`EmailCollection`]: super::EmailCollection

use std::future::Future;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

use super::model::{EmailRecord, Sentiment, Urgency};
use crate::Result;

/// Something that yields the records a session starts with.
pub trait EmailSource {
    /// Loads every record, in display order.
    fn load(&self) -> impl Future<Output = Result<Vec<EmailRecord>>> + Send;
}

/// The fixed five-email sample mailbox.
///
/// Arrival times are derived from `anchor` so that the relative display
/// timestamps and the filterable dates agree.
#[derive(Debug, Clone, Copy)]
pub struct SampleMailbox {
    anchor: DateTime<Utc>,
}

impl SampleMailbox {
    /// Sample mailbox anchored at the current time.
    #[must_use]
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    /// Sample mailbox whose "now" is `anchor`.
    #[must_use]
    pub const fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self { anchor }
    }

    /// Builds the sample records synchronously.
    #[must_use]
    pub fn records(&self) -> Vec<EmailRecord> {
        let ago = |d: Duration| self.anchor - d;

        vec![
            EmailRecord::new(
                "1",
                "Sarah Johnson",
                "Q4 Marketing Strategy Review - Urgent",
                Urgency::High,
                Sentiment::Neutral,
                "inbox",
            )
            .with_preview(
                "Hi team, I need your input on the Q4 marketing strategy. The budget allocation \
                 needs to be finalized by tomorrow. Please review the attached documents and let \
                 me know your thoughts...",
            )
            .with_timestamp("2 hours ago")
            .received_at(ago(Duration::hours(2)))
            .starred(),
            EmailRecord::new(
                "2",
                "Alex Chen",
                "Great job on the presentation!",
                Urgency::Low,
                Sentiment::Positive,
                "inbox",
            )
            .with_preview(
                "Your presentation yesterday was fantastic. The client was really impressed with \
                 the creative approach. Looking forward to working on the next phase of the \
                 project...",
            )
            .with_timestamp("5 hours ago")
            .received_at(ago(Duration::hours(5)))
            .read(),
            EmailRecord::new(
                "3",
                "Microsoft Teams",
                "Meeting reminder: Weekly standup",
                Urgency::Medium,
                Sentiment::Neutral,
                "updates",
            )
            .with_preview(
                "Your meeting 'Weekly standup' will start in 30 minutes. Join the meeting by \
                 clicking the link below...",
            )
            .with_timestamp("30 min ago")
            .received_at(ago(Duration::minutes(30))),
            EmailRecord::new(
                "4",
                "LinkedIn",
                "You have 3 new connection requests",
                Urgency::Low,
                Sentiment::Positive,
                "social",
            )
            .with_preview(
                "John Smith, Maria Garcia, and David Wilson would like to connect with you on \
                 LinkedIn. View their profiles and accept their invitations...",
            )
            .with_timestamp("1 day ago")
            .received_at(ago(Duration::days(1)))
            .read(),
            EmailRecord::new(
                "5",
                "Jennifer Williams",
                "Project deadline concerns",
                Urgency::High,
                Sentiment::Negative,
                "inbox",
            )
            .with_preview(
                "I'm concerned about meeting the project deadline. We're facing some technical \
                 challenges that might delay the delivery. Can we schedule a quick call to \
                 discuss?",
            )
            .with_timestamp("3 hours ago")
            .received_at(ago(Duration::hours(3))),
        ]
    }
}

impl Default for SampleMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailSource for SampleMailbox {
    async fn load(&self) -> Result<Vec<EmailRecord>> {
        Ok(self.records())
    }
}

/// Loads records from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EmailSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<EmailRecord>> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let records: Vec<EmailRecord> = serde_json::from_str(&contents)?;
        tracing::debug!(path = ?self.path, count = records.len(), "Loaded email records");
        Ok(records)
    }
}
