//! Request types for the shared crate
//!
//! Every JSON body is wrapped in a `data` envelope: `{ "data": { ... } }`.

use serde::{Deserialize, Serialize};

/// Request body envelope
///
/// `data` is optional so that a missing envelope reaches validation and is
/// reported by the same rules as a missing property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRequest<T> {
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> DataRequest<T> {
    pub fn new(data: T) -> Self {
        Self { data: Some(data) }
    }

    /// Unwrap the envelope, treating a missing `data` as an empty draft
    pub fn into_draft(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

/// `GET /tables` query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableQuery {
    pub date: Option<String>,
}

/// `GET /reservations` query parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationQuery {
    /// Day to list (`YYYY-MM-DD`)
    pub date: Option<String>,
    /// Partial phone number to search for
    pub mobile_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TableDraft;

    #[test]
    fn test_missing_data_becomes_empty_draft() {
        let req: DataRequest<TableDraft> = serde_json::from_str("{}").unwrap();
        let draft = req.into_draft();
        assert!(draft.table_name.is_none());
        assert!(draft.capacity.is_none());
    }

    #[test]
    fn test_data_envelope() {
        let req: DataRequest<TableDraft> =
            serde_json::from_str(r#"{"data":{"table_name":"A1","capacity":4}}"#).unwrap();
        let table = req.into_draft().validate().unwrap();
        assert_eq!(table.table_name, "A1");
    }
}
