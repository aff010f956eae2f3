//! Reservation Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, as_integer, parse_date, parse_time, present, required_text,
};

/// Reservation lifecycle status
///
/// ```text
/// booked ──seat──▶ seated ──finish──▶ finished
///    │
///    └──cancel──▶ cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type), sqlx(rename_all = "lowercase"))]
pub enum ReservationStatus {
    #[default]
    Booked,
    Seated,
    Finished,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 4] = [
        ReservationStatus::Booked,
        ReservationStatus::Seated,
        ReservationStatus::Finished,
        ReservationStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Seated => "seated",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_booked(&self) -> bool {
        *self == Self::Booked
    }

    /// Check a status change requested through the status endpoint.
    ///
    /// Only `booked → cancelled` (or an unchanged status) is accepted here.
    /// `seated` and `finished` belong to the table seat/clear operations, so
    /// a reservation never reaches them without a table.
    pub fn transition_to(self, next: ReservationStatus) -> AppResult<ReservationStatus> {
        let not_allowed = |message: String| -> AppResult<ReservationStatus> {
            Err(AppError::with_message(ErrorCode::StatusChangeNotAllowed, message)
                .with_detail("from", self.as_str())
                .with_detail("to", next.as_str()))
        };

        match (self, next) {
            (Self::Finished, _) => Err(AppError::with_message(
                ErrorCode::ReservationFinished,
                "a finished reservation cannot be updated",
            )
            .with_detail("status", self.as_str())),
            (_, Self::Seated) => {
                not_allowed("a reservation is seated by assigning it to a table".into())
            }
            (_, Self::Finished) => {
                not_allowed("a reservation is finished by clearing its table".into())
            }
            (Self::Seated, _) => {
                not_allowed(format!("a seated reservation cannot be set to {next}"))
            }
            (Self::Cancelled, Self::Booked) => {
                not_allowed("a cancelled reservation cannot be booked again".into())
            }
            (Self::Booked, _) | (Self::Cancelled, Self::Cancelled) => Ok(next),
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::InvalidStatus, format!("unknown status: {s}"))
                    .with_detail("status", s)
            })
    }
}

/// Reservation entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub reservation_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    /// Party size
    pub people: i64,
    pub status: ReservationStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create/update reservation payload as received from the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationDraft {
    #[serde(default)]
    pub first_name: Option<Value>,
    #[serde(default)]
    pub last_name: Option<Value>,
    #[serde(default)]
    pub mobile_number: Option<Value>,
    #[serde(default)]
    pub reservation_date: Option<Value>,
    #[serde(default)]
    pub reservation_time: Option<Value>,
    #[serde(default)]
    pub people: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
}

/// Validated reservation payload. New reservations are always booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub people: i64,
}

const REQUIRED_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "mobile_number",
    "reservation_date",
    "reservation_time",
    "people",
];

impl ReservationDraft {
    fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "first_name" => self.first_name.as_ref(),
            "last_name" => self.last_name.as_ref(),
            "mobile_number" => self.mobile_number.as_ref(),
            "reservation_date" => self.reservation_date.as_ref(),
            "reservation_time" => self.reservation_time.as_ref(),
            "people" => self.people.as_ref(),
            _ => None,
        }
    }

    /// Validate the draft. Every required property is checked for presence
    /// first (in declaration order), then formats, then the status.
    pub fn validate(self) -> AppResult<NewReservation> {
        if let Some(missing) = REQUIRED_FIELDS
            .iter()
            .find(|name| present(self.field(name).cloned()).is_none())
        {
            return Err(AppError::required(missing));
        }

        let first_name = required_text(self.first_name, "first_name", MAX_NAME_LEN)?;
        let last_name = required_text(self.last_name, "last_name", MAX_NAME_LEN)?;
        let mobile_number = required_text(self.mobile_number, "mobile_number", MAX_SHORT_TEXT_LEN)?;

        let reservation_date = self
            .reservation_date
            .as_ref()
            .and_then(Value::as_str)
            .and_then(parse_date)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidFormat,
                    "reservation_date must be a date (YYYY-MM-DD)",
                )
                .with_detail("field", "reservation_date")
            })?;

        let reservation_time = self
            .reservation_time
            .as_ref()
            .and_then(Value::as_str)
            .and_then(parse_time)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidFormat,
                    "reservation_time must be a time (HH:MM)",
                )
                .with_detail("field", "reservation_time")
            })?;

        let people = self
            .people
            .as_ref()
            .and_then(as_integer)
            .filter(|p| *p >= 1)
            .ok_or_else(|| {
                AppError::validation("people must be a number of at least 1")
                    .with_detail("field", "people")
            })?;

        if let Some(status) = present(self.status) {
            let status = status.as_str().unwrap_or_default().to_string();
            if status != ReservationStatus::Booked.as_str() {
                return Err(AppError::with_message(
                    ErrorCode::ReservationNotBooked,
                    format!("status cannot be '{status}', a reservation starts as booked"),
                )
                .with_detail("status", status));
            }
        }

        Ok(NewReservation {
            first_name,
            last_name,
            mobile_number,
            reservation_date,
            reservation_time,
            people,
        })
    }
}

impl From<NewReservation> for ReservationDraft {
    fn from(r: NewReservation) -> Self {
        Self {
            first_name: Some(Value::String(r.first_name)),
            last_name: Some(Value::String(r.last_name)),
            mobile_number: Some(Value::String(r.mobile_number)),
            reservation_date: Some(Value::String(r.reservation_date.to_string())),
            reservation_time: Some(Value::String(r.reservation_time.format("%H:%M").to_string())),
            people: Some(Value::from(r.people)),
            status: None,
        }
    }
}

/// Status update payload as received from the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusDraft {
    #[serde(default)]
    pub status: Option<Value>,
}

impl StatusDraft {
    pub fn validate(self) -> AppResult<ReservationStatus> {
        match present(self.status) {
            None => Err(AppError::required("status")),
            Some(Value::String(s)) => s.parse(),
            Some(other) => Err(AppError::with_message(
                ErrorCode::InvalidStatus,
                format!("unknown status: {other}"),
            )),
        }
    }
}

/// Status update response (`{ "status": "seated" }`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: ReservationStatus,
}

/// Keep only the digits of a phone number, for search
pub fn normalize_mobile_number(mobile_number: &str) -> String {
    mobile_number.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_json() -> Value {
        json!({
            "first_name": "Rick",
            "last_name": "Sanchez",
            "mobile_number": "202-555-0164",
            "reservation_date": "2035-01-02",
            "reservation_time": "13:30",
            "people": 2
        })
    }

    fn draft(value: Value) -> ReservationDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_reservation() {
        let r = draft(valid_json()).validate().unwrap();
        assert_eq!(r.first_name, "Rick");
        assert_eq!(r.reservation_date, NaiveDate::from_ymd_opt(2035, 1, 2).unwrap());
        assert_eq!(r.reservation_time, NaiveTime::from_hms_opt(13, 30, 0).unwrap());
        assert_eq!(r.people, 2);
    }

    #[test]
    fn test_each_missing_field_is_reported() {
        for field in REQUIRED_FIELDS {
            let mut value = valid_json();
            value.as_object_mut().unwrap().remove(field);
            let err = draft(value).validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField, "field {field}");
            assert_eq!(err.message, format!("A '{field}' property is required."));
        }
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut value = valid_json();
        value["last_name"] = json!("");
        let err = draft(value).validate().unwrap_err();
        assert_eq!(err.message, "A 'last_name' property is required.");
    }

    #[test]
    fn test_bad_date_and_time() {
        let mut value = valid_json();
        value["reservation_date"] = json!("not-a-date");
        let err = draft(value).validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.contains("reservation_date"));

        let mut value = valid_json();
        value["reservation_time"] = json!("noon");
        let err = draft(value).validate().unwrap_err();
        assert!(err.message.contains("reservation_time"));
    }

    #[test]
    fn test_people_must_be_positive_number() {
        for people in [json!("2"), json!(0), json!(1.5)] {
            let mut value = valid_json();
            value["people"] = people;
            let err = draft(value).validate().unwrap_err();
            assert_eq!(err.message, "people must be a number of at least 1");
        }
    }

    #[test]
    fn test_status_must_be_booked_when_present() {
        let mut value = valid_json();
        value["status"] = json!("booked");
        assert!(draft(value).validate().is_ok());

        for status in ["seated", "finished"] {
            let mut value = valid_json();
            value["status"] = json!(status);
            let err = draft(value).validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::ReservationNotBooked);
            assert!(err.message.contains(status));
        }
    }

    #[test]
    fn test_status_parse_and_transition() {
        assert_eq!("seated".parse::<ReservationStatus>().unwrap(), ReservationStatus::Seated);
        let err = "unknown".parse::<ReservationStatus>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStatus);

        assert_eq!(
            ReservationStatus::Booked
                .transition_to(ReservationStatus::Cancelled)
                .unwrap(),
            ReservationStatus::Cancelled
        );
        let err = ReservationStatus::Finished
            .transition_to(ReservationStatus::Seated)
            .unwrap_err();
        assert_eq!(err.message, "a finished reservation cannot be updated");
    }

    #[test]
    fn test_seated_and_finished_only_through_tables() {
        use ReservationStatus::*;

        for from in [Booked, Seated, Cancelled] {
            for to in [Seated, Finished] {
                let err = from.transition_to(to).unwrap_err();
                assert_eq!(err.code, ErrorCode::StatusChangeNotAllowed, "{from} -> {to}");
            }
        }
        let err = Seated.transition_to(Booked).unwrap_err();
        assert_eq!(err.message, "a seated reservation cannot be set to booked");
        assert!(Seated.transition_to(Cancelled).is_err());
        assert!(Cancelled.transition_to(Booked).is_err());

        assert_eq!(Booked.transition_to(Booked).unwrap(), Booked);
        assert_eq!(Cancelled.transition_to(Cancelled).unwrap(), Cancelled);
    }

    #[test]
    fn test_status_draft() {
        let draft: StatusDraft = serde_json::from_value(json!({"status": "cancelled"})).unwrap();
        assert_eq!(draft.validate().unwrap(), ReservationStatus::Cancelled);

        let err = StatusDraft::default().validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let draft: StatusDraft = serde_json::from_value(json!({"status": 3})).unwrap();
        assert_eq!(draft.validate().unwrap_err().code, ErrorCode::InvalidStatus);
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_value(ReservationStatus::Finished).unwrap(),
            json!("finished")
        );
    }

    #[test]
    fn test_new_reservation_round_trips_through_draft() {
        let r = draft(valid_json()).validate().unwrap();
        let again = ReservationDraft::from(r.clone()).validate().unwrap();
        assert_eq!(r, again);
    }

    #[test]
    fn test_normalize_mobile_number() {
        assert_eq!(normalize_mobile_number("(202) 555-0164"), "2025550164");
    }
}
