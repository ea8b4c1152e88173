//! Plain-text rendering of dashboard views.

use std::fmt::Write;

use inboxlens_core::{Dashboard, DerivedStats, EmailRecord, FilterCriteria, Insights};

/// Width of the longest activity bar, in characters.
const BAR_WIDTH: usize = 30;

/// The email list with its heading and active filter badges.
pub fn email_list(dashboard: &Dashboard) -> String {
    let emails = dashboard.visible_emails();
    let mut out = String::new();

    let _ = writeln!(out, "Your Emails ({})", emails.len());
    push_active_filters(&mut out, dashboard.criteria());
    for email in emails {
        push_email(&mut out, email);
    }
    out
}

fn push_email(out: &mut String, email: &EmailRecord) {
    let star = if email.starred { "*" } else { " " };
    let unread = if email.read { " " } else { "+" };
    let _ = writeln!(
        out,
        "{unread}{star} [{}] {} - {} ({})",
        email.id, email.sender, email.subject, email.timestamp
    );
    let _ = writeln!(
        out,
        "      {} | {} | {}",
        email.urgency, email.sentiment, email.category
    );
}

fn push_active_filters(out: &mut String, criteria: &FilterCriteria) {
    if criteria.is_empty() {
        return;
    }
    let mut labels = criteria.active_labels();
    if let Some(range) = criteria.date_range {
        for label in &mut labels {
            if label == "Date Range" {
                *label = format!("Date Range: {range}");
            }
        }
    }
    let _ = writeln!(out, "Active filters: {}", labels.join(", "));
}

/// Quick stats and the category breakdown.
pub fn stats(criteria: &FilterCriteria, stats: &DerivedStats) -> String {
    let mut out = String::new();

    push_active_filters(&mut out, criteria);
    let _ = writeln!(out, "Total:    {}", stats.total);
    let _ = writeln!(out, "Starred:  {}", stats.starred);
    let _ = writeln!(out, "Unread:   {}", stats.unread);
    let _ = writeln!(out, "Urgent:   {}", stats.urgent());
    let _ = writeln!(out, "Categories:");
    for (category, count) in stats.category_breakdown() {
        let _ = writeln!(
            out,
            "  {category:<12} {count:>4}  {:>5.1}%",
            stats.category_share(&category)
        );
    }
    out
}

/// Numbered suggestion list.
pub fn suggestions(suggestions: &[String]) -> String {
    let mut out = String::from("Try these examples:\n");
    for (i, suggestion) in suggestions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {suggestion}", i + 1);
    }
    out
}

/// Weekly activity bars plus headline numbers.
pub fn insights(insights: &Insights) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Urgent emails: {}", insights.urgent);
    let _ = writeln!(out, "Unread emails: {}", insights.unread);
    if let Some((sender, count)) = &insights.top_sender {
        let _ = writeln!(
            out,
            "Top sender:    {sender} ({count}, {:.0}%)",
            insights.top_sender_share
        );
    }
    let _ = writeln!(out, "Weekly activity:");
    for day in insights.activity.days() {
        let bar = bar_len(insights.activity.volume_ratio(day.weekday));
        let _ = write!(
            out,
            "  {:<4}{:<BAR_WIDTH$} {:>3}",
            day.weekday.to_string(),
            "#".repeat(bar),
            day.emails
        );
        if day.urgent > 0 {
            let _ = write!(out, "  ({} urgent)", day.urgent);
        }
        out.push('\n');
    }
    out
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_len(ratio: f64) -> usize {
    (ratio * BAR_WIDTH as f64).round() as usize
}
