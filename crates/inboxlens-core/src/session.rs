//! The dashboard session: one owner for the emails, filters and search box.

use tracing::info;

use crate::config::DashboardSettings;
use crate::email::{EmailCollection, EmailRecord, EmailSource, JsonFileSource, SampleMailbox};
use crate::filter::{FilterCriteria, FilterState, FilterUpdate, ListenerId};
use crate::search::{SearchQueryState, SubmitStatus};
use crate::stats::{DerivedStats, WeeklyActivity, compute_stats, weekly_activity};
use crate::Result;

/// Numbers for the insights tab, over the whole mailbox.
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    /// Monday-to-Sunday volume.
    pub activity: WeeklyActivity,
    /// High-urgency emails.
    pub urgent: usize,
    /// Unread emails.
    pub unread: usize,
    /// All emails.
    pub total: usize,
    /// Sender with the most emails and its count.
    pub top_sender: Option<(String, usize)>,
    /// Top sender's share of all emails, as a percentage.
    pub top_sender_share: f64,
}

/// A single interactive session.
///
/// State is mutated only through the methods below; filter changes are
/// observable via [`Dashboard::on_filter_change`].
#[derive(Debug)]
pub struct Dashboard {
    emails: EmailCollection,
    filters: FilterState,
    search: SearchQueryState,
    settings: DashboardSettings,
}

impl Dashboard {
    /// Creates a session over an already built collection.
    #[must_use]
    pub fn new(emails: EmailCollection, settings: DashboardSettings) -> Self {
        Self {
            emails,
            filters: FilterState::with_mode(settings.filter_mode),
            search: SearchQueryState::new(settings.search_latency(), settings.recent_query_limit),
            settings,
        }
    }

    /// Seeds a session from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load or yields duplicate ids.
    pub async fn open<S: EmailSource>(source: &S, settings: DashboardSettings) -> Result<Self> {
        let emails = EmailCollection::new(source.load().await?)?;
        info!(count = emails.len(), "Dashboard opened");
        Ok(Self::new(emails, settings))
    }

    /// Seeds a session from the settings' data file, or the sample mailbox
    /// when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file cannot be loaded.
    pub async fn from_settings(settings: DashboardSettings) -> Result<Self> {
        match settings.data_file.clone() {
            Some(path) => Self::open(&JsonFileSource::new(path), settings).await,
            None => Self::open(&SampleMailbox::new(), settings).await,
        }
    }

    /// Every email, in order.
    #[must_use]
    pub const fn emails(&self) -> &EmailCollection {
        &self.emails
    }

    /// Settings the session was opened with.
    #[must_use]
    pub const fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Current filter criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        self.filters.criteria()
    }

    /// Registers a listener for filter changes.
    pub fn on_filter_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&FilterCriteria) + Send + 'static,
    {
        self.filters.on_change(listener)
    }

    /// Unregisters a filter listener.
    pub fn remove_filter_listener(&mut self, id: ListenerId) -> bool {
        self.filters.remove_listener(id)
    }

    /// Emails matching `criteria`, in collection order.
    #[must_use]
    pub fn apply_filter(&self, criteria: &FilterCriteria) -> Vec<&EmailRecord> {
        self.emails.apply_filter(criteria)
    }

    /// Emails matching the current filter.
    #[must_use]
    pub fn visible_emails(&self) -> Vec<&EmailRecord> {
        self.emails.apply_filter(self.filters.criteria())
    }

    /// Stats for an arbitrary set of records.
    pub fn compute_stats<'a, I>(records: I) -> DerivedStats
    where
        I: IntoIterator<Item = &'a EmailRecord>,
    {
        compute_stats(records)
    }

    /// Stats for the emails matching the current filter.
    #[must_use]
    pub fn stats(&self) -> DerivedStats {
        compute_stats(self.visible_emails())
    }

    /// Replaces one filter field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterValue`](crate::Error::InvalidFilterValue)
    /// for unknown values when the session runs in strict mode.
    pub fn set_filter_field(&mut self, update: FilterUpdate) -> Result<FilterCriteria> {
        self.filters.set_field(update)
    }

    /// Resets every filter field.
    pub fn clear_filters(&mut self) -> FilterCriteria {
        self.filters.clear()
    }

    /// Smart search state.
    #[must_use]
    pub const fn search(&self) -> &SearchQueryState {
        &self.search
    }

    /// Mutable smart search state, for editing the query box.
    pub const fn search_mut(&mut self) -> &mut SearchQueryState {
        &mut self.search
    }

    /// Submits a smart search query. Must be called within a tokio runtime.
    pub fn submit_query(&mut self, text: &str) -> SubmitStatus {
        self.search.submit(text)
    }

    /// Insights tab numbers, ignoring the current filter.
    #[must_use]
    pub fn insights(&self) -> Insights {
        let stats = compute_stats(&self.emails);
        Insights {
            activity: weekly_activity(&self.emails),
            urgent: stats.urgent(),
            unread: stats.unread,
            total: stats.total,
            top_sender: stats
                .top_sender()
                .map(|(sender, count)| (sender.to_string(), count)),
            top_sender_share: stats.top_sender_share(),
        }
    }
}
