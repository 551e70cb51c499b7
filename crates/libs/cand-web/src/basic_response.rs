//! Status/message envelope used for every non-success response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Key casing of a serialized [`BasicResponse`].
///
/// Clients of the service depend on the payload error using `status`/`message`
/// while the endpoint fallback uses `Status`/`Message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldCase {
    #[default]
    Lower,
    Pascal,
}

/// `{"status": <code>, "message": <text>}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicResponse {
    pub status: StatusCode,
    pub message: String,
    pub case: FieldCase,
}

impl BasicResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            case: FieldCase::default(),
        }
    }

    pub fn with_case(mut self, case: FieldCase) -> Self {
        self.case = case;
        self
    }
}

impl Serialize for BasicResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (status_key, message_key) = match self.case {
            FieldCase::Lower => ("status", "message"),
            FieldCase::Pascal => ("Status", "Message"),
        };
        let mut envelope = serializer.serialize_struct("BasicResponse", 2)?;
        envelope.serialize_field(status_key, &self.status.as_u16())?;
        envelope.serialize_field(message_key, &self.message)?;
        envelope.end()
    }
}

/// The HTTP status always matches the envelope's `status` field.
impl IntoResponse for BasicResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_case_envelope() {
        let body = BasicResponse::new(StatusCode::BAD_REQUEST, "Invalid request payload");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"status":400,"message":"Invalid request payload"}"#
        );
    }

    #[test]
    fn pascal_case_envelope() {
        let body = BasicResponse::new(StatusCode::METHOD_NOT_ALLOWED, "No such endpoint")
            .with_case(FieldCase::Pascal);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"Status":405,"Message":"No such endpoint"}"#
        );
    }

    #[test]
    fn response_status_matches_envelope() {
        let response = BasicResponse::new(StatusCode::IM_A_TEAPOT, "short and stout").into_response();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(
            response.headers()[axum::http::header::CONTENT_TYPE],
            "application/json"
        );
    }
}
