use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::types::MessageResponse;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            // Body read failures (e.g. over the size limit) keep their own status
            other => {
                return (
                    other.status(),
                    Json(MessageResponse::new(other.body_text())),
                )
                    .into_response();
            }
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Record identifier taken from the `{id}` path segment.
///
/// Any integer is accepted; ids that were never assigned simply find no row.
/// Non-integer segments are rejected as a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl RecordId {
    /// Never assigned by SQLite AUTOINCREMENT
    const UNASSIGNED: i64 = 0;

    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Ok(RecordId(id));
        }

        // Integers outside the i64 range cannot name a stored row
        let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(RecordId(Self::UNASSIGNED));
        }

        Err(AppError::Validation(format!("Invalid record id: '{}'", raw)))
    }
}

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;

        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_parse() {
        assert_eq!(RecordId::parse("5").unwrap(), RecordId(5));
        assert_eq!(RecordId::parse("999999").unwrap(), RecordId(999999));
        assert_eq!(RecordId::parse("0").unwrap(), RecordId(0));
        assert_eq!(RecordId::parse("-3").unwrap(), RecordId(-3));
        assert_eq!(
            RecordId::parse("99999999999999999999").unwrap(),
            RecordId(0)
        );
        assert!(RecordId::parse("abc").is_err());
        assert!(RecordId::parse("1.5").is_err());
        assert!(RecordId::parse("-").is_err());
        assert!(RecordId::parse("").is_err());
    }
}
