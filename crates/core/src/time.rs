use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// A simple clock abstraction for deterministic dates in services and tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::Default => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Returns the current calendar date in the local time zone.
    ///
    /// Saved reports and the export `Date:` line use this date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today_in(&Local)
    }

    /// Returns the current calendar date in UTC, used for export file names.
    #[must_use]
    pub fn utc_today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the current calendar date in `tz`.
    #[must_use]
    pub fn today_in<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        self.now().with_timezone(tz).date_naive()
    }
}

/// Formats a date the way it is shown on saved reports (`M/D/YYYY`).
#[must_use]
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Formats a date as `YYYY-MM-DD`, used in export file names.
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Deterministic timestamp for tests and examples (2023-11-14T12:00:00Z).
///
/// Noon UTC falls on the same calendar day in every local zone from UTC-12 to
/// UTC+11, so local-date assertions do not depend on the host's zone.
pub const FIXED_TEST_TIMESTAMP: i64 = 1_699_963_200;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn fixed_clock_reports_fixed_date() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), fixed_now());
        assert_eq!(
            clock.utc_today(),
            NaiveDate::from_ymd_opt(2023, 11, 14).unwrap()
        );
        assert_eq!(clock.today(), fixed_now().with_timezone(&Local).date_naive());
    }

    #[test]
    fn local_date_lags_utc_west_of_greenwich_near_midnight() {
        let at = Utc.with_ymd_and_hms(2023, 11, 15, 3, 0, 0).unwrap();
        let clock = Clock::fixed(at);
        let los_angeles = FixedOffset::west_opt(8 * 3600).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();

        assert_eq!(clock.utc_today(), NaiveDate::from_ymd_opt(2023, 11, 15).unwrap());
        assert_eq!(
            clock.today_in(&los_angeles),
            NaiveDate::from_ymd_opt(2023, 11, 14).unwrap()
        );
        assert_eq!(clock.today_in(&tokyo), NaiveDate::from_ymd_opt(2023, 11, 15).unwrap());
        assert_eq!(format_report_date(clock.today_in(&los_angeles)), "11/14/2023");
    }

    #[test]
    fn report_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_report_date(date), "3/5/2024");
        assert_eq!(format_iso_date(date), "2024-03-05");
    }
}
