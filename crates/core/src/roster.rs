//! Duty roster domain rules.
//!
//! Defines the closed set of duty tasks and prayer types, and the
//! validation that turns loosely-typed request fields into a
//! [`NewDutyRecord`] the store can persist.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Message returned when any required create field is absent or blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Storage format for `duty_date`. Lexicographic order equals date order.
pub const DUTY_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Task type
// ---------------------------------------------------------------------------

/// The duty a person performs for a prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskType {
    Imam,
    Bilal,
}

impl TaskType {
    pub const ALL: [TaskType; 2] = [Self::Imam, Self::Bilal];

    /// Parse a task string as stored in the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "Imam" => Ok(Self::Imam),
            "Bilal" => Ok(Self::Bilal),
            _ => Err(CoreError::Validation(format!(
                "Invalid task '{s}'. Must be one of: Imam, Bilal"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Imam => "Imam",
            Self::Bilal => "Bilal",
        }
    }
}

// ---------------------------------------------------------------------------
// Prayer type
// ---------------------------------------------------------------------------

/// The prayer a duty applies to.
///
/// Rows created before the `prayer_type` column existed read back as
/// [`PrayerType::Fardu`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerType {
    #[default]
    #[serde(rename = "Solat Fardu")]
    Fardu,
    #[serde(rename = "Solat Terawih")]
    Terawih,
    #[serde(rename = "Solat Jumaat")]
    Jumaat,
    #[serde(rename = "Lain-lain")]
    Lain,
}

impl PrayerType {
    pub const ALL: [PrayerType; 4] = [Self::Fardu, Self::Terawih, Self::Jumaat, Self::Lain];

    /// Parse a prayer type string as stored in the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "Solat Fardu" => Ok(Self::Fardu),
            "Solat Terawih" => Ok(Self::Terawih),
            "Solat Jumaat" => Ok(Self::Jumaat),
            "Lain-lain" => Ok(Self::Lain),
            _ => Err(CoreError::Validation(format!(
                "Invalid prayer type '{s}'. Must be one of: \
                 Solat Fardu, Solat Terawih, Solat Jumaat, Lain-lain"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fardu => "Solat Fardu",
            Self::Terawih => "Solat Terawih",
            Self::Jumaat => "Solat Jumaat",
            Self::Lain => "Lain-lain",
        }
    }
}

// ---------------------------------------------------------------------------
// Validated create input
// ---------------------------------------------------------------------------

/// A duty record that passed validation and is ready to insert.
///
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDutyRecord {
    pub name: String,
    pub task: TaskType,
    pub prayer_type: PrayerType,
    pub duty_date: NaiveDate,
    pub image_data: Option<String>,
}

impl NewDutyRecord {
    /// Validate raw create fields.
    ///
    /// Presence of all four required fields is checked first, so a request
    /// missing any of them always yields [`MISSING_FIELDS_MESSAGE`] no matter
    /// what the other fields contain. Blank `image_data` becomes `None`.
    pub fn validate(
        name: Option<&str>,
        task: Option<&str>,
        prayer_type: Option<&str>,
        duty_date: Option<&str>,
        image_data: Option<&str>,
    ) -> Result<Self, CoreError> {
        let (Some(name), Some(task), Some(prayer_type), Some(duty_date)) = (
            non_blank(name),
            non_blank(task),
            non_blank(prayer_type),
            non_blank(duty_date),
        ) else {
            return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        };

        Ok(Self {
            name: name.to_string(),
            task: TaskType::from_str_db(task)?,
            prayer_type: PrayerType::from_str_db(prayer_type)?,
            duty_date: parse_duty_date(duty_date)?,
            image_data: non_blank(image_data).map(str::to_string),
        })
    }
}

/// Parse a `YYYY-MM-DD` duty date.
pub fn parse_duty_date(s: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(s, DUTY_DATE_FORMAT).map_err(|_| {
        CoreError::Validation(format!(
            "Invalid duty date '{s}'. Expected format YYYY-MM-DD"
        ))
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid(
        name: Option<&str>,
        task: Option<&str>,
        prayer: Option<&str>,
        date: Option<&str>,
    ) -> Result<NewDutyRecord, CoreError> {
        NewDutyRecord::validate(name, task, prayer, date, None)
    }

    // -- TaskType --

    #[test]
    fn task_from_str_valid() {
        assert_eq!(TaskType::from_str_db("Imam").unwrap(), TaskType::Imam);
        assert_eq!(TaskType::from_str_db("Bilal").unwrap(), TaskType::Bilal);
    }

    #[test]
    fn task_from_str_is_case_sensitive() {
        assert!(TaskType::from_str_db("imam").is_err());
        assert!(TaskType::from_str_db("Muazzin").is_err());
    }

    #[test]
    fn task_serializes_as_db_string() {
        for task in TaskType::ALL {
            let json = serde_json::to_value(task).unwrap();
            assert_eq!(json, task.as_str());
        }
    }

    // -- PrayerType --

    #[test]
    fn prayer_type_as_str_roundtrip() {
        for prayer in PrayerType::ALL {
            assert_eq!(PrayerType::from_str_db(prayer.as_str()).unwrap(), prayer);
        }
    }

    #[test]
    fn prayer_type_defaults_to_fardu() {
        assert_eq!(PrayerType::default().as_str(), "Solat Fardu");
    }

    #[test]
    fn prayer_type_serde_uses_display_names() {
        let parsed: PrayerType = serde_json::from_str(r#""Solat Jumaat""#).unwrap();
        assert_eq!(parsed, PrayerType::Jumaat);
        assert_eq!(
            serde_json::to_string(&PrayerType::Lain).unwrap(),
            r#""Lain-lain""#
        );
    }

    // -- NewDutyRecord --

    #[test]
    fn validate_accepts_complete_input() {
        let record = NewDutyRecord::validate(
            Some("  Ali bin Ahmad "),
            Some("Imam"),
            Some("Solat Jumaat"),
            Some("2024-06-07"),
            Some("data:image/png;base64,AAAA"),
        )
        .unwrap();

        assert_eq!(record.name, "Ali bin Ahmad");
        assert_eq!(record.task, TaskType::Imam);
        assert_eq!(record.prayer_type, PrayerType::Jumaat);
        assert_eq!(record.duty_date, NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
        assert_eq!(record.image_data.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn validate_rejects_each_missing_field() {
        let cases = [
            valid(None, Some("Bilal"), Some("Solat Fardu"), Some("2024-06-01")),
            valid(Some("Ali"), None, Some("Solat Fardu"), Some("2024-06-01")),
            valid(Some("Ali"), Some("Bilal"), None, Some("2024-06-01")),
            valid(Some("Ali"), Some("Bilal"), Some("Solat Fardu"), None),
        ];
        for result in cases {
            assert_matches!(result, Err(CoreError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn validate_treats_blank_as_missing() {
        let result = valid(Some(""), Some("Bilal"), Some("Solat Fardu"), Some("2024-06-01"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE);

        let result = valid(Some("Ali"), Some("Bilal"), Some("Solat Fardu"), Some("   "));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn missing_fields_reported_before_invalid_enum() {
        let result = valid(Some(""), Some("Muazzin"), Some("Solat Fardu"), Some("2024-06-01"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn validate_rejects_unknown_enum_values() {
        let result = valid(Some("Ali"), Some("Muazzin"), Some("Solat Fardu"), Some("2024-06-01"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("Invalid task"));

        let result = valid(Some("Ali"), Some("Imam"), Some("Solat Subuh"), Some("2024-06-01"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("Invalid prayer type"));
    }

    #[test]
    fn validate_rejects_malformed_date() {
        let result = valid(Some("Ali"), Some("Imam"), Some("Solat Fardu"), Some("07/06/2024"));
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg.contains("Invalid duty date"));
    }

    #[test]
    fn blank_image_data_becomes_none() {
        let record = NewDutyRecord::validate(
            Some("Ali"),
            Some("Bilal"),
            Some("Lain-lain"),
            Some("2024-06-01"),
            Some(""),
        )
        .unwrap();
        assert_eq!(record.image_data, None);
    }
}
