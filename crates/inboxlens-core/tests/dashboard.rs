//! End-to-end tests over the sample mailbox.
//!
//! These drive the public API the way a front end would: seed a session,
//! change filters, read stats and submit searches.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use inboxlens_core::{
    Dashboard, DashboardSettings, DateRange, EmailCollection, EmailRecord, FilterCriteria,
    FilterUpdate, SampleMailbox, SearchPhase, Sentiment, SubmitStatus, Urgency, compute_stats,
};

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 5, 12, 0, 0).unwrap()
}

async fn sample_dashboard() -> Dashboard {
    Dashboard::open(
        &SampleMailbox::anchored_at(anchor()),
        DashboardSettings::default(),
    )
    .await
    .unwrap()
}

fn ids(records: &[&EmailRecord]) -> Vec<String> {
    records.iter().map(|r| r.id.clone()).collect()
}

#[tokio::test]
async fn inbox_category_scenario() {
    let dashboard = sample_dashboard().await;
    let criteria = FilterCriteria {
        category: Some("inbox".to_string()),
        ..FilterCriteria::default()
    };

    let inbox = dashboard.apply_filter(&criteria);
    assert_eq!(ids(&inbox), vec!["1", "2", "5"]);

    let stats = Dashboard::compute_stats(inbox);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.starred, 1);
}

#[tokio::test]
async fn unset_criteria_returns_full_collection() {
    let dashboard = sample_dashboard().await;

    let all = dashboard.apply_filter(&FilterCriteria::default());

    assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(compute_stats(all).total, 5);
}

#[tokio::test]
async fn combined_filters_are_conjunctive() {
    let mut dashboard = sample_dashboard().await;

    dashboard
        .set_filter_field(FilterUpdate::Urgency(Some("high".into())))
        .unwrap();
    dashboard
        .set_filter_field(FilterUpdate::Sentiment(Some("negative".into())))
        .unwrap();
    assert_eq!(ids(&dashboard.visible_emails()), vec!["5"]);

    let today = anchor().date_naive();
    dashboard
        .set_filter_field(FilterUpdate::DateRange(Some(DateRange::until(
            today.pred_opt().unwrap(),
        ))))
        .unwrap();
    assert!(dashboard.visible_emails().is_empty());

    let criteria = dashboard.clear_filters();
    assert_eq!(criteria, FilterCriteria::default());
    assert_eq!(dashboard.visible_emails().len(), 5);
}

#[tokio::test]
async fn date_range_uses_arrival_time() {
    let dashboard = sample_dashboard().await;
    let yesterday = NaiveDate::from_ymd_opt(2024, 6, 4).unwrap();
    let criteria = FilterCriteria {
        date_range: Some(DateRange::between(yesterday, yesterday).unwrap()),
        ..FilterCriteria::default()
    };

    assert_eq!(ids(&dashboard.apply_filter(&criteria)), vec!["4"]);
}

#[test]
fn empty_collection_stats() {
    let dashboard = Dashboard::new(EmailCollection::default(), DashboardSettings::default());

    let stats = dashboard.stats();

    assert_eq!(stats.total, 0);
    assert_eq!(stats.starred, 0);
    assert!(stats.by_category.is_empty());
    assert_eq!(dashboard.insights().activity.max_emails(), 0);
}

#[tokio::test(start_paused = true)]
async fn search_lifecycle() {
    let mut dashboard = sample_dashboard().await;

    assert_eq!(dashboard.submit_query(""), SubmitStatus::RejectedEmpty);
    assert_eq!(dashboard.submit_query("   "), SubmitStatus::RejectedEmpty);
    assert_eq!(dashboard.search().phase(), SearchPhase::Idle);

    assert_eq!(dashboard.submit_query("urgent emails"), SubmitStatus::Accepted);
    assert_eq!(dashboard.search().phase(), SearchPhase::Busy);
    assert_eq!(
        dashboard.submit_query("urgent emails"),
        SubmitStatus::RejectedBusy
    );
    assert_eq!(dashboard.search().phase(), SearchPhase::Busy);

    tokio::time::sleep(Duration::from_millis(2001)).await;
    tokio::task::yield_now().await;
    dashboard.search().wait_idle().await;

    assert_eq!(dashboard.search().phase(), SearchPhase::Idle);
    assert_eq!(dashboard.submit_query("urgent emails"), SubmitStatus::Accepted);
}

fn urgency() -> impl Strategy<Value = Urgency> {
    prop_oneof![Just(Urgency::High), Just(Urgency::Medium), Just(Urgency::Low)]
}

fn sentiment() -> impl Strategy<Value = Sentiment> {
    prop_oneof![
        Just(Sentiment::Positive),
        Just(Sentiment::Negative),
        Just(Sentiment::Neutral)
    ]
}

fn category() -> impl Strategy<Value = String> {
    prop_oneof![Just("inbox"), Just("social"), Just("updates")].prop_map(str::to_string)
}

fn records() -> impl Strategy<Value = Vec<EmailRecord>> {
    proptest::collection::vec((urgency(), sentiment(), category(), 0i64..10), 0..30).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (urgency, sentiment, category, days_ago))| {
                    EmailRecord::new(i.to_string(), "s", "t", urgency, sentiment, category)
                        .received_at(anchor() - chrono::Duration::days(days_ago))
                })
                .collect()
        },
    )
}

fn criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        proptest::option::of(urgency()),
        proptest::option::of(sentiment()),
        proptest::option::of(category()),
        proptest::option::of((0i64..10, 0i64..10)),
    )
        .prop_map(|(urgency, sentiment, category, days)| FilterCriteria {
            urgency: urgency.map(|u| u.as_str().to_string()),
            sentiment: sentiment.map(|s| s.as_str().to_string()),
            category,
            date_range: days.map(|(a, b)| {
                let today = anchor().date_naive();
                let start = today - chrono::Duration::days(a.max(b));
                let end = today - chrono::Duration::days(a.min(b));
                DateRange::between(start, end).unwrap()
            }),
        })
}

fn matches_every_dimension(record: &EmailRecord, criteria: &FilterCriteria) -> bool {
    criteria
        .urgency
        .as_deref()
        .is_none_or(|u| record.urgency.as_str() == u)
        && criteria
            .sentiment
            .as_deref()
            .is_none_or(|s| record.sentiment.as_str() == s)
        && criteria
            .category
            .as_deref()
            .is_none_or(|c| record.category == c)
        && criteria.date_range.is_none_or(|range| {
            record
                .received_on()
                .is_some_and(|day| range.contains(day))
        })
}

proptest! {
    #[test]
    fn filter_keeps_exactly_matching_records_in_order(rows in records(), filter in criteria()) {
        let collection = EmailCollection::new(rows.clone()).unwrap();

        let filtered = collection.apply_filter(&filter);
        let expected: Vec<&EmailRecord> = rows
            .iter()
            .filter(|r| matches_every_dimension(r, &filter))
            .collect();

        prop_assert_eq!(ids(&filtered), ids(&expected));
        prop_assert_eq!(compute_stats(filtered).total, expected.len());
    }
}
