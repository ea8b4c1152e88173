//! Weekly activity chart data.

use chrono::{Datelike, Weekday};
use serde::Serialize;

use crate::email::EmailRecord;

/// Email volume for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayActivity {
    /// Day of the week.
    pub weekday: Weekday,
    /// Emails received on this weekday.
    pub emails: usize,
    /// High-urgency emails among them.
    pub urgent: usize,
}

/// Monday-to-Sunday email volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyActivity {
    days: [DayActivity; 7],
}

impl WeeklyActivity {
    /// Rows from Monday to Sunday.
    #[must_use]
    pub const fn days(&self) -> &[DayActivity; 7] {
        &self.days
    }

    /// Activity for a single weekday.
    #[must_use]
    pub fn day(&self, weekday: Weekday) -> &DayActivity {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    /// Largest daily volume, used to scale the bars.
    #[must_use]
    pub fn max_emails(&self) -> usize {
        self.days.iter().map(|d| d.emails).max().unwrap_or(0)
    }

    /// Total emails across the week.
    #[must_use]
    pub fn total(&self) -> usize {
        self.days.iter().map(|d| d.emails).sum()
    }

    /// Bar length for `weekday` relative to the busiest day, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn volume_ratio(&self, weekday: Weekday) -> f64 {
        let max = self.max_emails();
        if max == 0 {
            return 0.0;
        }
        self.day(weekday).emails as f64 / max as f64
    }

    /// Urgent share of `weekday`'s emails, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn urgent_ratio(&self, weekday: Weekday) -> f64 {
        let day = self.day(weekday);
        if day.emails == 0 {
            return 0.0;
        }
        day.urgent as f64 / day.emails as f64
    }
}

/// Buckets records by the UTC weekday they arrived on.
///
/// Records without an arrival time are skipped.
pub fn weekly_activity<'a, I>(records: I) -> WeeklyActivity
where
    I: IntoIterator<Item = &'a EmailRecord>,
{
    let mut weekday = Weekday::Mon;
    let mut days = [DayActivity {
        weekday,
        emails: 0,
        urgent: 0,
    }; 7];
    for day in &mut days {
        day.weekday = weekday;
        weekday = weekday.succ();
    }

    for record in records {
        let Some(at) = record.received_at else {
            continue;
        };
        let day = &mut days[at.weekday().num_days_from_monday() as usize];
        day.emails += 1;
        day.urgent += usize::from(record.is_urgent());
    }

    WeeklyActivity { days }
}
