//! Filter criteria data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::email::EmailRecord;
use crate::{Error, Result};

/// Calendar date range with optionally open ends.
///
/// Both bounds are inclusive. When both are present, `start <= end`, also
/// for deserialized ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = Error;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a range from optional bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if `start` is after `end`.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(start), Some(end)) = (start, end)
            && start > end
        {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a closed range `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if `start` is after `end`.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Self::new(Some(start), Some(end))
    }

    /// Range with only a lower bound.
    #[must_use]
    pub const fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Range with only an upper bound.
    #[must_use]
    pub const fn until(end: NaiveDate) -> Self {
        Self {
            start: None,
            end: Some(end),
        }
    }

    /// Lower bound, if any.
    #[must_use]
    pub const fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Upper bound, if any.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Whether neither bound is set.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const FORMAT: &str = "%b %d, %Y";
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                write!(f, "{} - {}", start.format(FORMAT), end.format(FORMAT))
            }
            (Some(start), None) => write!(f, "from {}", start.format(FORMAT)),
            (None, Some(end)) => write!(f, "until {}", end.format(FORMAT)),
            (None, None) => f.write_str("any date"),
        }
    }
}

/// One dimension of [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    /// Arrival date range.
    DateRange,
    /// Urgency tag.
    Urgency,
    /// Sentiment tag.
    Sentiment,
    /// Category label.
    Category,
}

impl FilterField {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DateRange => "date_range",
            Self::Urgency => "urgency",
            Self::Sentiment => "sentiment",
            Self::Category => "category",
        }
    }

    /// Label used on active filter badges.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::DateRange => "Date Range",
            Self::Urgency => "Urgency",
            Self::Sentiment => "Sentiment",
            Self::Category => "Category",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A replacement value for exactly one filter field. `None` unsets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    /// Replace the date range.
    DateRange(Option<DateRange>),
    /// Replace the urgency value.
    Urgency(Option<String>),
    /// Replace the sentiment value.
    Sentiment(Option<String>),
    /// Replace the category value.
    Category(Option<String>),
}

impl FilterUpdate {
    /// The field this update replaces.
    #[must_use]
    pub const fn field(&self) -> FilterField {
        match self {
            Self::DateRange(_) => FilterField::DateRange,
            Self::Urgency(_) => FilterField::Urgency,
            Self::Sentiment(_) => FilterField::Sentiment,
            Self::Category(_) => FilterField::Category,
        }
    }
}

/// The set of optional constraints narrowing the displayed emails.
///
/// Every field is independent; `None` means no constraint on that dimension.
/// String values are compared verbatim against records and are not
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Arrival date range.
    pub date_range: Option<DateRange>,
    /// Required urgency, compared to [`Urgency::as_str`](crate::Urgency::as_str).
    pub urgency: Option<String>,
    /// Required sentiment, compared to [`Sentiment::as_str`](crate::Sentiment::as_str).
    pub sentiment: Option<String>,
    /// Required category.
    pub category: Option<String>,
}

impl FilterCriteria {
    /// Whether no dimension is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of constrained dimensions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(self.date_range.is_some_and(|r| !r.is_unbounded()))
            + usize::from(self.urgency.is_some())
            + usize::from(self.sentiment.is_some())
            + usize::from(self.category.is_some())
    }

    /// Badge labels for the constrained dimensions, in sidebar order.
    #[must_use]
    pub fn active_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(4);
        if let Some(urgency) = &self.urgency {
            labels.push(format!("{}: {urgency}", FilterField::Urgency.display_name()));
        }
        if let Some(sentiment) = &self.sentiment {
            labels.push(format!(
                "{}: {sentiment}",
                FilterField::Sentiment.display_name()
            ));
        }
        if let Some(category) = &self.category {
            labels.push(format!(
                "{}: {category}",
                FilterField::Category.display_name()
            ));
        }
        if self.date_range.is_some_and(|r| !r.is_unbounded()) {
            labels.push(FilterField::DateRange.display_name().to_string());
        }
        labels
    }

    /// Whether `record` satisfies every constrained dimension.
    #[must_use]
    pub fn matches(&self, record: &EmailRecord) -> bool {
        if let Some(urgency) = &self.urgency
            && record.urgency.as_str() != urgency
        {
            return false;
        }
        if let Some(sentiment) = &self.sentiment
            && record.sentiment.as_str() != sentiment
        {
            return false;
        }
        if let Some(category) = &self.category
            && record.category != *category
        {
            return false;
        }
        match self.date_range {
            Some(range) if !range.is_unbounded() => {
                record.received_on().is_some_and(|day| range.contains(day))
            }
            _ => true,
        }
    }

    /// Applies a single-field update, leaving other fields untouched.
    pub fn apply(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::DateRange(range) => self.date_range = range,
            FilterUpdate::Urgency(value) => self.urgency = value,
            FilterUpdate::Sentiment(value) => self.sentiment = value,
            FilterUpdate::Category(value) => self.category = value,
        }
    }
}
