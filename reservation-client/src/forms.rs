//! Form models
//!
//! Each form keeps its inputs as the strings the user typed, converts them
//! on submit and reports where the page should go next. Server errors are
//! kept in `error` for display; an aborted request is not an error.

use serde_json::Value;
use shared::models::{ReservationDraft, SeatDraft, TableDraft};
use tokio_util::sync::CancellationToken;

use crate::ClientError;
use crate::api::ReservationApi;

pub const DASHBOARD: &str = "/dashboard";

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Navigate to this location
    Redirect(String),
    /// The request failed; the form's `error` holds the message
    Failed,
    /// The request was cancelled, nothing to show
    Aborted,
}

/// Number conversion used for numeric inputs: blank is 0, anything that is
/// not a number is sent as `null` and left for the server to reject.
pub fn to_number(input: &str) -> Value {
    let input = input.trim();
    if input.is_empty() {
        return Value::from(0);
    }
    if let Ok(n) = input.parse::<i64>() {
        return Value::from(n);
    }
    match input.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
            Value::from(n as i64)
        }
        Ok(n) if n.is_finite() => Value::from(n),
        _ => Value::Null,
    }
}

fn settle<T>(
    error: &mut Option<String>,
    result: Result<T, ClientError>,
    on_ok: impl FnOnce(T) -> String,
) -> Submission {
    match result {
        Ok(value) => Submission::Redirect(on_ok(value)),
        Err(ClientError::Aborted) => {
            tracing::debug!("Form submission aborted");
            Submission::Aborted
        }
        Err(e) => {
            *error = Some(e.to_string());
            Submission::Failed
        }
    }
}

/// New reservation form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub people: String,
    pub error: Option<String>,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            mobile_number: String::new(),
            reservation_date: String::new(),
            reservation_time: String::new(),
            people: "1".into(),
            error: None,
        }
    }
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one input by name. Unknown names are ignored.
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) -> bool {
        let field = match name {
            "first_name" => &mut self.first_name,
            "last_name" => &mut self.last_name,
            "mobile_number" => &mut self.mobile_number,
            "reservation_date" => &mut self.reservation_date,
            "reservation_time" => &mut self.reservation_time,
            "people" => &mut self.people,
            _ => return false,
        };
        *field = value.into();
        true
    }

    /// Request body, with `people` converted to a number
    pub fn to_draft(&self) -> ReservationDraft {
        ReservationDraft {
            first_name: Some(Value::String(self.first_name.clone())),
            last_name: Some(Value::String(self.last_name.clone())),
            mobile_number: Some(Value::String(self.mobile_number.clone())),
            reservation_date: Some(Value::String(self.reservation_date.clone())),
            reservation_time: Some(Value::String(self.reservation_time.clone())),
            people: Some(to_number(&self.people)),
            status: None,
        }
    }

    /// Create the reservation, then go to the dashboard for its date
    pub async fn submit<A>(&mut self, api: &A, signal: &CancellationToken) -> Submission
    where
        A: ReservationApi + ?Sized,
    {
        self.error = None;
        let result = api.create_reservation(&self.to_draft(), signal).await;
        settle(&mut self.error, result, |created| {
            format!("{DASHBOARD}?date={}", created.reservation_date)
        })
    }
}

/// New table form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableForm {
    pub table_name: String,
    pub capacity: String,
    pub error: Option<String>,
}

impl TableForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) -> bool {
        let field = match name {
            "table_name" => &mut self.table_name,
            "capacity" => &mut self.capacity,
            _ => return false,
        };
        *field = value.into();
        true
    }

    pub fn to_draft(&self) -> TableDraft {
        TableDraft {
            table_name: Some(Value::String(self.table_name.clone())),
            capacity: Some(to_number(&self.capacity)),
        }
    }

    pub async fn submit<A>(&mut self, api: &A, signal: &CancellationToken) -> Submission
    where
        A: ReservationApi + ?Sized,
    {
        self.error = None;
        let result = api.create_table(&self.to_draft(), signal).await;
        settle(&mut self.error, result, |_| DASHBOARD.to_string())
    }
}

/// Seat form: picks a table for one reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatForm {
    pub reservation_id: i64,
    /// Selected table (`<select>` value)
    pub table_id: String,
    pub error: Option<String>,
}

impl SeatForm {
    pub fn new(reservation_id: i64) -> Self {
        Self {
            reservation_id,
            table_id: String::new(),
            error: None,
        }
    }

    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) -> bool {
        if name != "table_id" {
            return false;
        }
        self.table_id = value.into();
        true
    }

    pub async fn submit<A>(&mut self, api: &A, signal: &CancellationToken) -> Submission
    where
        A: ReservationApi + ?Sized,
    {
        self.error = None;
        let Ok(table_id) = self.table_id.trim().parse::<i64>() else {
            self.error = Some("Please select a table".into());
            return Submission::Failed;
        };
        let seat = SeatDraft {
            reservation_id: Some(Value::from(self.reservation_id)),
        };
        let result = api.seat_table(table_id, &seat, signal).await;
        settle(&mut self.error, result, |_| DASHBOARD.to_string())
    }
}
