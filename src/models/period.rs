//! Period keys for habit weeks and money months
//!
//! Every stored record is scoped to a period: habit weeks are identified by
//! the ISO date of their Monday, money records by a `YYYY-MM` calendar month.
//! Both the live stores and the history aggregator derive keys through this
//! module, so the date-to-key logic exists exactly once.

use std::fmt;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::error::{FlowError, FlowResult};

/// Identifies a habit week by the date of its Monday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    /// Get the week containing the given date
    ///
    /// Sunday belongs to the week of the preceding Monday.
    pub fn for_date(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday();
        Self(date - Duration::days(offset as i64))
    }

    /// Get the current real-world week
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Parse a week key from an ISO date string
    ///
    /// Any date is accepted and normalized to the Monday of its week.
    pub fn parse(s: &str) -> FlowResult<Self> {
        let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| FlowError::Validation(format!("Invalid week date: {}", s)))?;
        Ok(Self::for_date(date))
    }

    /// The Monday this week starts on
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    /// The Sunday this week ends on (inclusive)
    pub fn end(&self) -> NaiveDate {
        self.0 + Duration::days(6)
    }

    /// The previous week
    pub fn prev(&self) -> Self {
        Self(self.0 - Duration::days(7))
    }

    /// The next week, clamped so navigation cannot pass the current week
    pub fn next_clamped(&self) -> Self {
        let next = Self(self.0 + Duration::days(7));
        let current = Self::current();
        if next.0 > current.0 {
            current
        } else {
            next
        }
    }

    /// The week `n` weeks before this one
    pub fn minus_weeks(&self, n: u32) -> Self {
        Self(self.0 - Duration::days(7 * n as i64))
    }

    /// Whether this is the current real-world week
    pub fn is_current(&self) -> bool {
        *self == Self::current()
    }

    /// The month the Monday of this week falls in
    pub fn month(&self) -> MonthKey {
        MonthKey::for_date(self.0)
    }

    /// Human-readable range label, e.g. "5 Aug - 11 Aug"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start().format("%-d %b"),
            self.end().format("%-d %b")
        )
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Identifies a money record by calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key from year and month (1-12)
    pub fn new(year: i32, month: u32) -> FlowResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(FlowError::Validation(format!("Invalid month: {}", month)));
        }
        Ok(Self { year, month })
    }

    /// Get the month containing the given date
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the current calendar month
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Parse a month key from a "YYYY-MM" string
    pub fn parse(s: &str) -> FlowResult<Self> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| FlowError::Validation(format!("Invalid month key: {}", s)))?;
        let year: i32 = year
            .parse()
            .map_err(|_| FlowError::Validation(format!("Invalid month key: {}", s)))?;
        let month: u32 = month
            .parse()
            .map_err(|_| FlowError::Validation(format!("Invalid month key: {}", s)))?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // new() guards the month range, so this cannot fail
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Last day of the month (inclusive)
    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// Number of days in the month
    pub fn day_count(&self) -> u32 {
        self.last_day().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The previous month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The next month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The next month, clamped so navigation cannot pass the current month
    pub fn next_clamped(&self) -> Self {
        self.next().clamp_to_current()
    }

    /// This month, or the current month if this one lies in the future
    pub fn clamp_to_current(self) -> Self {
        let current = Self::current();
        if self > current {
            current
        } else {
            self
        }
    }

    /// The month `n` months before this one
    pub fn minus_months(&self, n: u32) -> Self {
        let mut key = *self;
        for _ in 0..n {
            key = key.prev();
        }
        key
    }

    /// Whether this is the current real-world month
    pub fn is_current(&self) -> bool {
        *self == Self::current()
    }

    /// All habit weeks whose Monday falls inside this month
    ///
    /// This is the window the history aggregator scans.
    pub fn mondays(&self) -> Vec<WeekKey> {
        let mut weeks = Vec::new();
        let mut date = self.first_day();
        while self.contains(date) {
            if date.weekday() == Weekday::Mon {
                weeks.push(WeekKey::for_date(date));
            }
            date += Duration::days(1);
        }
        weeks
    }

    /// Human-readable label, e.g. "August 2026"
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_for_monday_is_identity() {
        // 2026-08-24 is a Monday
        let week = WeekKey::for_date(date(2026, 8, 24));
        assert_eq!(week.start(), date(2026, 8, 24));
    }

    #[test]
    fn test_week_for_midweek_date() {
        // Wednesday rolls back to the same week's Monday
        let week = WeekKey::for_date(date(2026, 8, 26));
        assert_eq!(week.start(), date(2026, 8, 24));
    }

    #[test]
    fn test_sunday_belongs_to_preceding_monday() {
        let week = WeekKey::for_date(date(2026, 8, 30));
        assert_eq!(week.start(), date(2026, 8, 24));
    }

    #[test]
    fn test_week_end_and_display() {
        let week = WeekKey::for_date(date(2026, 8, 24));
        assert_eq!(week.end(), date(2026, 8, 30));
        assert_eq!(week.to_string(), "2026-08-24");
    }

    #[test]
    fn test_week_parse_normalizes() {
        let week = WeekKey::parse("2026-08-27").unwrap();
        assert_eq!(week.to_string(), "2026-08-24");
        assert!(WeekKey::parse("not-a-date").is_err());
    }

    #[test]
    fn test_week_navigation() {
        let week = WeekKey::for_date(date(2026, 8, 24));
        assert_eq!(week.prev().start(), date(2026, 8, 17));
        assert_eq!(week.minus_weeks(2).start(), date(2026, 8, 10));
    }

    #[test]
    fn test_next_clamped_stops_at_current_week() {
        let current = WeekKey::current();
        assert_eq!(current.next_clamped(), current);
        // A past week advances normally
        let past = current.minus_weeks(3);
        assert_eq!(past.next_clamped(), current.minus_weeks(2));
    }

    #[test]
    fn test_month_parse_and_display() {
        let month = MonthKey::parse("2026-08").unwrap();
        assert_eq!(month.year(), 2026);
        assert_eq!(month.month(), 8);
        assert_eq!(month.to_string(), "2026-08");
        assert!(MonthKey::parse("2026").is_err());
        assert!(MonthKey::parse("2026-13").is_err());
    }

    #[test]
    fn test_month_bounds() {
        let month = MonthKey::new(2026, 2).unwrap();
        assert_eq!(month.first_day(), date(2026, 2, 1));
        assert_eq!(month.last_day(), date(2026, 2, 28));
        assert_eq!(month.day_count(), 28);

        // Leap year
        let month = MonthKey::new(2028, 2).unwrap();
        assert_eq!(month.day_count(), 29);
    }

    #[test]
    fn test_month_navigation_wraps_year() {
        let january = MonthKey::new(2026, 1).unwrap();
        assert_eq!(january.prev(), MonthKey::new(2025, 12).unwrap());
        let december = MonthKey::new(2025, 12).unwrap();
        assert_eq!(december.next(), january);
    }

    #[test]
    fn test_month_next_clamped_stops_at_current() {
        let current = MonthKey::current();
        assert_eq!(current.next_clamped(), current);
        assert_eq!(current.minus_months(2).next_clamped(), current.minus_months(1));
    }

    #[test]
    fn test_month_clamp_to_current() {
        let current = MonthKey::current();
        assert_eq!(current.next().next().clamp_to_current(), current);
        assert_eq!(current.clamp_to_current(), current);
        let past = current.minus_months(3);
        assert_eq!(past.clamp_to_current(), past);
    }

    #[test]
    fn test_mondays_in_month() {
        // August 2026 has Mondays on 3, 10, 17, 24 and 31
        let month = MonthKey::new(2026, 8).unwrap();
        let mondays = month.mondays();
        assert_eq!(mondays.len(), 5);
        assert_eq!(mondays[0].start(), date(2026, 8, 3));
        assert_eq!(mondays[4].start(), date(2026, 8, 31));
    }

    #[test]
    fn test_week_month_round_trip() {
        let week = WeekKey::for_date(date(2026, 8, 24));
        assert_eq!(week.month(), MonthKey::new(2026, 8).unwrap());
    }
}
