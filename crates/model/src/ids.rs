use std::{fmt, str::FromStr};

use chrono::{Datelike as _, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use time::DateError;

/// Calendar day with no time component. Rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayId(NaiveDate);

impl DayId {
    pub fn new(date: NaiveDate) -> Self {
        DayId(date)
    }

    pub fn today() -> Self {
        DayId(time::today())
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(DayId)
            .ok_or_else(|| DateError::Invalid(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn week_day(&self) -> Weekday {
        self.0.weekday()
    }

    pub fn next(&self) -> Result<Self, DateError> {
        time::shift_days(self.0, 1).map(DayId)
    }

    pub fn prev(&self) -> Result<Self, DateError> {
        time::shift_days(self.0, -1).map(DayId)
    }

    pub fn shift_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        time::shift_weeks(self.0, weeks).map(DayId)
    }

    pub fn week(&self) -> Result<WeekId, DateError> {
        WeekId::new(*self)
    }
}

impl From<NaiveDate> for DayId {
    fn from(date: NaiveDate) -> Self {
        DayId(date)
    }
}

impl FromStr for DayId {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        time::parse_date(s).map(DayId)
    }
}

impl TryFrom<String> for DayId {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayId> for String {
    fn from(day: DayId) -> Self {
        day.to_string()
    }
}

impl fmt::Display for DayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(time::DATE_FORMAT))
    }
}

/// Sunday-to-Saturday window, identified by its Sunday.
///
/// Construction guarantees that all seven days are representable, so
/// [`WeekId::days`] never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct WeekId(NaiveDate);

impl WeekId {
    pub fn new(day: DayId) -> Result<Self, DateError> {
        let sunday = time::at_sunday(day.0)?;
        time::at_saturday(sunday)?;
        Ok(WeekId(sunday))
    }

    pub fn first_day(&self) -> DayId {
        DayId(self.0)
    }

    pub fn last_day(&self) -> DayId {
        self.day(Weekday::Sat)
    }

    pub fn day(&self, weekday: Weekday) -> DayId {
        DayId(self.0 + Days::new(weekday.num_days_from_sunday() as u64))
    }

    pub fn days(&self) -> [DayId; 7] {
        std::array::from_fn(|offset| DayId(self.0 + Days::new(offset as u64)))
    }

    pub fn contains(&self, day: DayId) -> bool {
        self.first_day() <= day && day <= self.last_day()
    }

    pub fn next(&self) -> Result<Self, DateError> {
        self.shift(1)
    }

    pub fn prev(&self) -> Result<Self, DateError> {
        self.shift(-1)
    }

    pub fn shift(&self, weeks: i64) -> Result<Self, DateError> {
        WeekId::new(self.first_day().shift_weeks(weeks)?)
    }
}

impl From<WeekId> for String {
    fn from(week: WeekId) -> Self {
        week.first_day().to_string()
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.first_day(), self.last_day())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(id: u64) -> Self {
        SessionId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SessionId {
    fn from(id: u64) -> Self {
        SessionId(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(SessionId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayId {
        s.parse().unwrap()
    }

    #[test]
    fn test_week_window_for_wednesday() {
        let week = WeekId::new(day("2024-08-28")).unwrap();
        let days = week.days();
        assert_eq!(days[0], day("2024-08-25"));
        assert_eq!(days[6], day("2024-08-31"));
        assert_eq!(week.to_string(), "2024-08-25..2024-08-31");
    }

    #[test]
    fn test_week_window_contains_reference() {
        let mut current = day("2023-12-20");
        for _ in 0..120 {
            let week = WeekId::new(current).unwrap();
            assert!(week.contains(current));
            assert!(week.days().contains(&current));
            current = current.next().unwrap();
        }
    }

    #[test]
    fn test_week_window_is_idempotent() {
        let week = WeekId::new(day("2024-02-28")).unwrap();
        for member in week.days() {
            assert_eq!(WeekId::new(member).unwrap(), week);
            assert_eq!(member.week().unwrap().days(), week.days());
        }
    }

    #[test]
    fn test_week_window_order() {
        let week = WeekId::new(day("2024-12-31")).unwrap();
        let days = week.days();
        assert_eq!(days[0].week_day(), Weekday::Sun);
        assert_eq!(days[6].week_day(), Weekday::Sat);
        for pair in days.windows(2) {
            assert_eq!(pair[0].next().unwrap(), pair[1]);
        }
        assert_eq!(days[6], day("2025-01-04"));
    }

    #[test]
    fn test_week_day_lookup() {
        let week = WeekId::new(day("2024-08-28")).unwrap();
        assert_eq!(week.day(Weekday::Sun), day("2024-08-25"));
        assert_eq!(week.day(Weekday::Thu), day("2024-08-29"));
        assert_eq!(week.last_day(), day("2024-08-31"));
        assert!(!week.contains(day("2024-09-01")));
        assert!(!week.contains(day("2024-08-24")));
    }

    #[test]
    fn test_week_navigation() {
        let week = WeekId::new(day("2024-08-28")).unwrap();
        assert_eq!(week.next().unwrap().first_day(), day("2024-09-01"));
        assert_eq!(week.prev().unwrap().first_day(), day("2024-08-18"));
        assert_eq!(week.shift(52).unwrap().first_day(), day("2025-08-24"));
        assert_eq!(week.next().unwrap().prev().unwrap(), week);
    }

    #[test]
    fn test_week_out_of_range() {
        let last = WeekId::new(DayId::new(NaiveDate::MAX)).and_then(|week| week.next());
        assert!(last.is_err());
        assert!(DayId::new(NaiveDate::MAX).next().is_err());
    }

    #[test]
    fn test_invalid_day() {
        assert!("2024-13-01".parse::<DayId>().is_err());
        assert!("yesterday".parse::<DayId>().is_err());
        assert!(DayId::from_ymd(2023, 2, 29).is_err());
        assert_eq!(DayId::from_ymd(2024, 2, 29).unwrap(), day("2024-02-29"));
    }

    #[test]
    fn test_day_serde() {
        let json = serde_json::to_string(&day("2024-08-26")).unwrap();
        assert_eq!(json, "\"2024-08-26\"");
        let parsed: DayId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, day("2024-08-26"));
        assert!(serde_json::from_str::<DayId>("\"2024-02-30\"").is_err());
    }

    #[test]
    fn test_session_id() {
        assert_eq!("42".parse::<SessionId>().unwrap(), SessionId::new(42));
        assert_eq!(SessionId::from(7).to_string(), "7");
        assert!("abc".parse::<SessionId>().is_err());
    }
}
