//! Observable filter state.

use tracing::{debug, warn};

use super::criteria::{DateRange, FilterCriteria, FilterField, FilterUpdate};
use crate::config::FilterMode;
use crate::email::{KNOWN_CATEGORIES, Sentiment, Urgency};
use crate::{Error, Result};

/// Handle returned by [`FilterState::on_change`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&FilterCriteria) + Send>;

/// Current filter selection plus the listeners observing it.
///
/// Every successful mutation emits the full resulting criteria to each
/// listener, in registration order.
pub struct FilterState {
    criteria: FilterCriteria,
    mode: FilterMode,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl FilterState {
    /// Creates an empty, permissive filter state.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mode(FilterMode::default())
    }

    /// Creates an empty filter state with the given validation mode.
    #[must_use]
    pub const fn with_mode(mode: FilterMode) -> Self {
        Self {
            criteria: FilterCriteria {
                date_range: None,
                urgency: None,
                sentiment: None,
                category: None,
            },
            mode,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current criteria.
    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Validation mode.
    #[must_use]
    pub const fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Registers a listener called after every change.
    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&FilterCriteria) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregisters a listener. Returns false if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Replaces the date range and notifies listeners. `None` clears it.
    ///
    /// Ranges are validated on construction, so this cannot fail.
    pub fn set_date_range(&mut self, range: Option<DateRange>) -> FilterCriteria {
        self.commit(normalize(FilterUpdate::DateRange(range)))
    }

    /// Replaces the urgency value. A blank value clears it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterValue`] in strict mode for an unknown value.
    pub fn set_urgency(&mut self, value: impl Into<String>) -> Result<FilterCriteria> {
        self.set_field(FilterUpdate::Urgency(non_blank(value.into())))
    }

    /// Replaces the sentiment value. A blank value clears it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterValue`] in strict mode for an unknown value.
    pub fn set_sentiment(&mut self, value: impl Into<String>) -> Result<FilterCriteria> {
        self.set_field(FilterUpdate::Sentiment(non_blank(value.into())))
    }

    /// Replaces the category value. A blank value clears it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterValue`] in strict mode for an unknown value.
    pub fn set_category(&mut self, value: impl Into<String>) -> Result<FilterCriteria> {
        self.set_field(FilterUpdate::Category(non_blank(value.into())))
    }

    /// Replaces exactly one field and notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilterValue`] in strict mode when a string
    /// value is outside its known domain. The state is left unchanged and no
    /// listener is called.
    pub fn set_field(&mut self, update: FilterUpdate) -> Result<FilterCriteria> {
        let update = normalize(update);
        self.check(&update)?;
        Ok(self.commit(update))
    }

    /// Resets every field and notifies listeners.
    pub fn clear(&mut self) -> FilterCriteria {
        self.criteria = FilterCriteria::default();
        debug!("Filters cleared");
        self.notify();
        self.criteria.clone()
    }

    fn commit(&mut self, update: FilterUpdate) -> FilterCriteria {
        debug!(field = %update.field(), "Filter changed");
        self.criteria.apply(update);
        self.notify();
        self.criteria.clone()
    }

    fn check(&self, update: &FilterUpdate) -> Result<()> {
        let (field, value) = match update {
            FilterUpdate::Urgency(Some(v)) => (FilterField::Urgency, v),
            FilterUpdate::Sentiment(Some(v)) => (FilterField::Sentiment, v),
            FilterUpdate::Category(Some(v)) => (FilterField::Category, v),
            _ => return Ok(()),
        };

        if is_known(field, value) {
            return Ok(());
        }

        match self.mode {
            FilterMode::Permissive => {
                debug!(%field, %value, "Accepting unrecognized filter value");
                Ok(())
            }
            FilterMode::Strict => {
                warn!(%field, %value, "Rejecting unrecognized filter value");
                Err(Error::InvalidFilterValue {
                    field,
                    value: value.clone(),
                })
            }
        }
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.criteria);
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FilterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterState")
            .field("criteria", &self.criteria)
            .field("mode", &self.mode)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn normalize(update: FilterUpdate) -> FilterUpdate {
    match update {
        FilterUpdate::Urgency(v) => FilterUpdate::Urgency(v.and_then(non_blank)),
        FilterUpdate::Sentiment(v) => FilterUpdate::Sentiment(v.and_then(non_blank)),
        FilterUpdate::Category(v) => FilterUpdate::Category(v.and_then(non_blank)),
        FilterUpdate::DateRange(range) => {
            FilterUpdate::DateRange(range.filter(|r| !r.is_unbounded()))
        }
    }
}

fn is_known(field: FilterField, value: &str) -> bool {
    match field {
        FilterField::Urgency => Urgency::parse(value).is_some(),
        FilterField::Sentiment => Sentiment::parse(value).is_some(),
        FilterField::Category => KNOWN_CATEGORIES.contains(&value),
        FilterField::DateRange => true,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;

    fn recorder(state: &mut FilterState) -> Arc<Mutex<Vec<FilterCriteria>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        state.on_change(move |criteria| sink.lock().unwrap().push(criteria.clone()));
        seen
    }

    #[test]
    fn test_setters_replace_one_field() {
        let mut state = FilterState::new();

        state.set_urgency("high").unwrap();
        state.set_category("inbox").unwrap();
        let criteria = state.set_sentiment("neutral").unwrap();

        assert_eq!(criteria.urgency.as_deref(), Some("high"));
        assert_eq!(criteria.sentiment.as_deref(), Some("neutral"));
        assert_eq!(criteria.category.as_deref(), Some("inbox"));
        assert!(criteria.date_range.is_none());
        assert_eq!(&criteria, state.criteria());
    }

    #[test]
    fn test_every_change_notifies_with_full_criteria() {
        let mut state = FilterState::new();
        let seen = recorder(&mut state);

        state.set_urgency("low").unwrap();
        state.set_category("social").unwrap();
        state.clear();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].urgency.as_deref(), Some("low"));
        assert!(seen[0].category.is_none());
        assert_eq!(seen[1].urgency.as_deref(), Some("low"));
        assert_eq!(seen[1].category.as_deref(), Some("social"));
        assert_eq!(seen[2], FilterCriteria::default());
    }

    #[test]
    fn test_multiple_listeners_and_removal() {
        let mut state = FilterState::new();
        let first = recorder(&mut state);
        let second = recorder(&mut state);
        let first_id = ListenerId(0);

        state.set_urgency("high").unwrap();
        assert!(state.remove_listener(first_id));
        assert!(!state.remove_listener(first_id));
        state.set_urgency("low").unwrap();

        assert_eq!(first.lock().unwrap().len(), 1);
        assert_eq!(second.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_permissive_accepts_unknown_values() {
        let mut state = FilterState::new();

        let criteria = state.set_urgency("critical").unwrap();
        assert_eq!(criteria.urgency.as_deref(), Some("critical"));

        let criteria = state.set_category("receipts").unwrap();
        assert_eq!(criteria.category.as_deref(), Some("receipts"));
    }

    #[test]
    fn test_strict_rejects_unknown_values_without_notifying() {
        let mut state = FilterState::with_mode(FilterMode::Strict);
        let seen = recorder(&mut state);

        state.set_sentiment("positive").unwrap();
        let err = state.set_sentiment("ecstatic").unwrap_err();

        assert!(matches!(
            err,
            Error::InvalidFilterValue { field: FilterField::Sentiment, ref value } if value == "ecstatic"
        ));
        assert_eq!(state.criteria().sentiment.as_deref(), Some("positive"));
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_blank_value_clears_field() {
        let mut state = FilterState::with_mode(FilterMode::Strict);
        state.set_category("updates").unwrap();

        let criteria = state.set_category("  ").unwrap();

        assert!(criteria.category.is_none());
    }

    #[test]
    fn test_date_range_setter() {
        let mut state = FilterState::new();
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let range = DateRange::between(start, end).unwrap();

        let seen = recorder(&mut state);

        let criteria = state.set_date_range(Some(range));
        assert_eq!(criteria.date_range, Some(range));

        let criteria = state.set_date_range(Some(DateRange::default()));
        assert!(criteria.date_range.is_none());

        state.set_date_range(Some(range));
        let criteria = state.set_date_range(None);
        assert!(criteria.date_range.is_none());
        assert_eq!(seen.lock().unwrap().len(), 4);
    }

    fn value_strategy() -> impl Strategy<Value = Option<String>> {
        proptest::option::of("[a-z ]{0,10}")
    }

    fn update_strategy() -> impl Strategy<Value = FilterUpdate> {
        prop_oneof![
            value_strategy().prop_map(FilterUpdate::Urgency),
            value_strategy().prop_map(FilterUpdate::Sentiment),
            value_strategy().prop_map(FilterUpdate::Category),
            (0u32..60, 0u32..60).prop_map(|(a, b)| {
                let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
                let (lo, hi) = (a.min(b), a.max(b));
                FilterUpdate::DateRange(
                    DateRange::between(
                        base + chrono::Days::new(u64::from(lo)),
                        base + chrono::Days::new(u64::from(hi)),
                    )
                    .ok(),
                )
            }),
        ]
    }

    proptest! {
        #[test]
        fn prop_clear_restores_initial_state(updates in proptest::collection::vec(update_strategy(), 0..20)) {
            let mut state = FilterState::new();
            for update in updates {
                state.set_field(update).unwrap();
            }

            prop_assert_eq!(state.clear(), FilterCriteria::default());
            prop_assert!(state.criteria().is_empty());
        }
    }
}
