//! Dining Table Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult, ErrorCode};
use crate::validation::{MAX_NAME_LEN, as_integer, present};

/// Minimum length of a table name
pub const MIN_TABLE_NAME_LEN: usize = 2;

/// Dining table entity
///
/// A table is free when `reservation_id` is `None` and occupied otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Table {
    pub table_id: i64,
    pub table_name: String,
    pub capacity: i64,
    /// Reservation currently seated at this table
    pub reservation_id: Option<i64>,
}

impl Table {
    pub fn is_free(&self) -> bool {
        self.reservation_id.is_none()
    }

    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }
}

/// Create table payload as received from the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableDraft {
    #[serde(default)]
    pub table_name: Option<Value>,
    #[serde(default)]
    pub capacity: Option<Value>,
}

/// Validated create table payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTable {
    pub table_name: String,
    pub capacity: i64,
}

impl TableDraft {
    /// Validate the draft. Checks run in order and the first failure is returned:
    /// both properties present, name length, capacity numeric, capacity ≥ 1.
    pub fn validate(self) -> AppResult<NewTable> {
        let table_name = present(self.table_name).ok_or_else(|| AppError::required("table_name"))?;
        let capacity = present(self.capacity).ok_or_else(|| AppError::required("capacity"))?;

        let table_name = match table_name {
            Value::String(name)
                if name.chars().count() >= MIN_TABLE_NAME_LEN
                    && name.chars().count() <= MAX_NAME_LEN =>
            {
                name
            }
            Value::String(name) if name.chars().count() > MAX_NAME_LEN => {
                return Err(AppError::validation(format!(
                    "table_name is too long (max {MAX_NAME_LEN} chars)"
                )));
            }
            _ => {
                return Err(AppError::validation(
                    "table_name needs to be longer than one character",
                )
                .with_detail("field", "table_name"));
            }
        };

        if !capacity.is_number() {
            return Err(AppError::validation("capacity needs to be a number")
                .with_detail("field", "capacity"));
        }
        let capacity = as_integer(&capacity)
            .filter(|c| *c >= 1)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::ValueOutOfRange,
                    "capacity must be a whole number of at least 1",
                )
                .with_detail("field", "capacity")
            })?;

        Ok(NewTable {
            table_name,
            capacity,
        })
    }
}

impl From<NewTable> for TableDraft {
    fn from(table: NewTable) -> Self {
        Self {
            table_name: Some(Value::String(table.table_name)),
            capacity: Some(Value::from(table.capacity)),
        }
    }
}

/// Seat request payload as received from the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatDraft {
    #[serde(default)]
    pub reservation_id: Option<Value>,
}

/// Validated seat request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRequest {
    pub reservation_id: i64,
}

impl SeatDraft {
    /// `reservation_id` must be present; numeric strings are accepted.
    pub fn validate(self) -> AppResult<SeatRequest> {
        let missing = || AppError::invalid_request("request needs a body that has reservation_id");
        let value = present(self.reservation_id).ok_or_else(missing)?;
        let reservation_id = match &value {
            Value::String(s) => s.trim().parse::<i64>().ok(),
            other => as_integer(other),
        }
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::InvalidFormat, "reservation_id must be a number")
        })?;
        if reservation_id == 0 {
            return Err(missing());
        }
        Ok(SeatRequest { reservation_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(value: Value) -> TableDraft {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_table() {
        let table = draft(json!({"table_name": "A1", "capacity": 4}))
            .validate()
            .unwrap();
        assert_eq!(
            table,
            NewTable {
                table_name: "A1".into(),
                capacity: 4
            }
        );
    }

    #[test]
    fn test_missing_properties_reported_in_order() {
        let err = draft(json!({})).validate().unwrap_err();
        assert_eq!(err.message, "A 'table_name' property is required.");

        let err = draft(json!({"table_name": "A1"})).validate().unwrap_err();
        assert_eq!(err.message, "A 'capacity' property is required.");
    }

    #[test]
    fn test_short_table_name() {
        let err = draft(json!({"table_name": "A", "capacity": 4}))
            .validate()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "table_name needs to be longer than one character");
    }

    #[test]
    fn test_name_checked_before_capacity() {
        let err = draft(json!({"table_name": "A", "capacity": "four"}))
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "table_name needs to be longer than one character");
    }

    #[test]
    fn test_non_numeric_capacity() {
        let err = draft(json!({"table_name": "Bar #1", "capacity": "4"}))
            .validate()
            .unwrap_err();
        assert_eq!(err.message, "capacity needs to be a number");
        assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_capacity_out_of_range() {
        for capacity in [json!(0), json!(-2), json!(2.5)] {
            let err = draft(json!({"table_name": "Bar #1", "capacity": capacity}))
                .validate()
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        }
    }

    #[test]
    fn test_seat_draft() {
        let seat: SeatDraft = serde_json::from_value(json!({"reservation_id": 7})).unwrap();
        assert_eq!(seat.validate().unwrap().reservation_id, 7);

        let seat: SeatDraft = serde_json::from_value(json!({"reservation_id": "12"})).unwrap();
        assert_eq!(seat.validate().unwrap().reservation_id, 12);

        let err = SeatDraft::default().validate().unwrap_err();
        assert_eq!(err.message, "request needs a body that has reservation_id");

        let seat: SeatDraft = serde_json::from_value(json!({"reservation_id": "abc"})).unwrap();
        assert_eq!(seat.validate().unwrap_err().code, ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_table_free_and_occupied() {
        let mut table = Table {
            table_id: 1,
            table_name: "A1".into(),
            capacity: 4,
            reservation_id: None,
        };
        assert!(table.is_free());
        table.reservation_id = Some(3);
        assert!(table.is_occupied());
    }
}
