use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::ids::SessionId;

/// One scheduled training activity. Completion is tracked outside of the
/// session, so a `Session` is never mutated after it is created.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub coach: String,
    #[serde(with = "time_of_day")]
    pub start_at: NaiveTime,
    pub duration_min: u32,
    #[serde(rename = "type")]
    pub kind: SessionKind,
    pub intensity: Intensity,
    pub location: String,
}

impl Session {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: SessionId,
        title: String,
        coach: String,
        start_at: NaiveTime,
        duration_min: u32,
        kind: SessionKind,
        intensity: Intensity,
        location: String,
    ) -> Session {
        Session {
            id,
            title,
            coach,
            start_at,
            duration_min,
            kind,
            intensity,
            location,
        }
    }

    /// Wraps past midnight.
    pub fn end_at(&self) -> NaiveTime {
        self.start_at + Duration::minutes(self.duration_min as i64)
    }
}

#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
)]
pub enum SessionKind {
    Cardio,
    Strength,
    Recovery,
    Team,
    Personal,
    Skills,
}

#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

mod time_of_day {
    use chrono::NaiveTime;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";
    const FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let value = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&value, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(&value, FORMAT_WITH_SECONDS))
            .map_err(|_| D::Error::custom(format!("invalid time of day: {:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    fn session(start: &str, duration_min: u32) -> Session {
        Session::new(
            SessionId::new(1),
            "Morning Run".to_owned(),
            "Coach Sarah".to_owned(),
            NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            duration_min,
            SessionKind::Cardio,
            Intensity::Medium,
            "Track Field".to_owned(),
        )
    }

    #[test]
    fn test_end_at() {
        let s = session("07:00", 90);
        assert_eq!(s.end_at(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn test_end_at_wraps_midnight() {
        let s = session("23:30", 60);
        assert_eq!(s.end_at(), NaiveTime::from_hms_opt(0, 30, 0).unwrap());
    }

    #[test]
    fn test_session_json() {
        let json = r#"{
            "id": 3,
            "title": "Strength Training",
            "coach": "Coach Mike",
            "start_at": "17:30",
            "duration_min": 60,
            "type": "Strength",
            "intensity": "High",
            "location": "Gym A"
        }"#;
        let parsed: Session = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, SessionId::new(3));
        assert_eq!(parsed.start_at, NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert_eq!(parsed.kind, SessionKind::Strength);
        assert_eq!(parsed.intensity, Intensity::High);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["start_at"], "17:30");
        assert_eq!(back["type"], "Strength");
    }

    #[test]
    fn test_session_json_with_seconds() {
        let json = r#"{"id":1,"title":"t","coach":"c","start_at":"06:15:00",
            "duration_min":30,"type":"Recovery","intensity":"Low","location":"Pool"}"#;
        let parsed: Session = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.start_at, NaiveTime::from_hms_opt(6, 15, 0).unwrap());
    }

    #[test]
    fn test_session_json_bad_time() {
        let json = r#"{"id":1,"title":"t","coach":"c","start_at":"25:00",
            "duration_min":30,"type":"Recovery","intensity":"Low","location":"Pool"}"#;
        assert!(serde_json::from_str::<Session>(json).is_err());
    }

    #[test]
    fn test_kind_names() {
        let names = SessionKind::iter().map(|k| k.to_string()).collect::<Vec<_>>();
        assert_eq!(
            names,
            ["Cardio", "Strength", "Recovery", "Team", "Personal", "Skills"]
        );
        assert_eq!("Team".parse::<SessionKind>().unwrap(), SessionKind::Team);
        assert_eq!(Intensity::iter().count(), 3);
    }
}
