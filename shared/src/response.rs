//! API Response types
//!
//! Successful responses are wrapped in a `data` envelope:
//! ```json
//! { "data": { ... } }
//! ```
//! Failures use [`crate::error::ErrorBody`] instead.

use serde::{Deserialize, Serialize};

/// Success response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T: Serialize> axum::response::IntoResponse for DataResponse<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_envelope() {
        let json = serde_json::to_string(&DataResponse::new(vec![1, 2])).unwrap();
        assert_eq!(json, r#"{"data":[1,2]}"#);
    }

    #[test]
    fn test_deserialize_envelope() {
        let resp: DataResponse<String> = serde_json::from_str(r#"{"data":"ok"}"#).unwrap();
        assert_eq!(resp.into_inner(), "ok");
    }
}
