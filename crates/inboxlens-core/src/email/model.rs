//! Email record data models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Categories offered by the dashboard's category picker.
///
/// Records may carry any category string; this list only defines what strict
/// filter validation accepts and which categories always appear in charts.
pub const KNOWN_CATEGORIES: [&str; 5] = ["inbox", "promotions", "social", "updates", "forums"];

/// Editorial priority tag on an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Needs attention now.
    High,
    /// Worth a look today.
    Medium,
    /// Can wait.
    Low,
}

impl Urgency {
    /// Parse from the lowercase wire form. Returns `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Convert to the lowercase wire form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// All urgency levels, highest first.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::High, Self::Medium, Self::Low]
    }
}

/// Editorial tone tag on an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Friendly or appreciative.
    Positive,
    /// Concerned, critical or unhappy.
    Negative,
    /// Informational.
    Neutral,
}

impl Sentiment {
    /// Parse from the lowercase wire form. Returns `None` for anything else.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }

    /// Convert to the lowercase wire form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// All sentiments.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Positive, Self::Negative, Self::Neutral]
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single email as shown on the dashboard.
///
/// `timestamp` is a display string ("2 hours ago") and is never parsed.
/// Date filtering uses `received_at` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecord {
    /// Unique identifier within a collection.
    pub id: String,
    /// Sender display name.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Preview snippet.
    #[serde(default)]
    pub preview: String,
    /// Relative display timestamp.
    #[serde(default)]
    pub timestamp: String,
    /// Priority tag.
    pub urgency: Urgency,
    /// Tone tag.
    pub sentiment: Sentiment,
    /// Free-form category label.
    pub category: String,
    /// Whether the email is starred.
    #[serde(default)]
    pub starred: bool,
    /// Whether the email has been read.
    #[serde(default)]
    pub read: bool,
    /// When the email arrived, used for date-range filtering.
    #[serde(default)]
    pub received_at: Option<DateTime<Utc>>,
}

impl EmailRecord {
    /// Creates an unread, unstarred record with empty preview and timestamp.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        sender: impl Into<String>,
        subject: impl Into<String>,
        urgency: Urgency,
        sentiment: Sentiment,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            subject: subject.into(),
            preview: String::new(),
            timestamp: String::new(),
            urgency,
            sentiment,
            category: category.into(),
            starred: false,
            read: false,
            received_at: None,
        }
    }

    /// Sets the preview snippet.
    #[must_use]
    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = preview.into();
        self
    }

    /// Sets the display timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Sets the arrival time used for date filtering.
    #[must_use]
    pub const fn received_at(mut self, at: DateTime<Utc>) -> Self {
        self.received_at = Some(at);
        self
    }

    /// Marks the record as starred.
    #[must_use]
    pub const fn starred(mut self) -> Self {
        self.starred = true;
        self
    }

    /// Marks the record as read.
    #[must_use]
    pub const fn read(mut self) -> Self {
        self.read = true;
        self
    }

    /// Calendar date (UTC) the email arrived on, if known.
    #[must_use]
    pub fn received_on(&self) -> Option<NaiveDate> {
        self.received_at.map(|at| at.date_naive())
    }

    /// Check if this record carries the high urgency tag.
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        matches!(self.urgency, Urgency::High)
    }
}
