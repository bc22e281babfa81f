//! Reporting time window

use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Inclusive `[start, end]` range of UTC timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Earliest timestamp in the window
    pub start: DateTime<Utc>,
    /// Latest timestamp in the window (the run's "now")
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Window of `hours` hours ending at `now`
    ///
    /// Fails with [`Error::Config`] when the start would fall outside the
    /// representable date range.
    pub fn ending_at(now: DateTime<Utc>, hours: u32) -> Result<Self> {
        let start = Duration::try_hours(i64::from(hours))
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| Error::Config(format!("window of {hours} hours is out of range")))?;
        Ok(Self { start, end: now })
    }

    /// Check if a timestamp falls inside the window (both ends inclusive)
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts <= self.end
    }

    /// Check an optional timestamp; `None` is never inside
    #[must_use]
    pub fn contains_opt(&self, ts: Option<DateTime<Utc>>) -> bool {
        ts.is_some_and(|t| self.contains(t))
    }

    /// Report date of the window end, e.g. `2024.05.01`, shifted by `utc_offset_hours`
    #[must_use]
    pub fn report_date(&self, utc_offset_hours: i32) -> String {
        let offset =
            FixedOffset::east_opt(utc_offset_hours.saturating_mul(3600)).unwrap_or_else(|| Utc.fix());
        self.end.with_timezone(&offset).format("%Y.%m.%d").to_string()
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ~ {}",
            self.start.format("%Y-%m-%d %H:%M UTC"),
            self.end.format("%Y-%m-%d %H:%M UTC")
        )
    }
}
