//! Calendar-day bucketing policy for dashboard aggregation.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use mockable::Clock;

/// Timezone used to map instants onto calendar days.
///
/// The policy is explicit so callers choose per-user localization
/// (`Local`), a fixed deployment timezone (`Fixed`), or UTC, instead of
/// inheriting whichever timezone the host happens to run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezonePolicy {
    /// Bucket by UTC calendar day.
    Utc,
    /// Bucket by the host's local calendar day.
    Local,
    /// Bucket by a fixed UTC offset.
    Fixed(FixedOffset),
}

impl TimezonePolicy {
    /// Returns the calendar day the instant falls on under this policy.
    #[must_use]
    pub fn date_of(self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Utc => instant.date_naive(),
            Self::Local => instant.with_timezone(&Local).date_naive(),
            Self::Fixed(offset) => instant.with_timezone(&offset).date_naive(),
        }
    }

    /// Returns the current calendar day under this policy.
    #[must_use]
    pub fn today(self, clock: &impl Clock) -> NaiveDate {
        match self {
            Self::Local => clock.local().date_naive(),
            Self::Utc | Self::Fixed(_) => self.date_of(clock.utc()),
        }
    }
}

impl Default for TimezonePolicy {
    fn default() -> Self {
        Self::Local
    }
}
