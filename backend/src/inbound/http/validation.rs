//! Shared validation helpers for inbound HTTP adapters.

use actix_web::{HttpRequest, error::JsonPayloadError, error::QueryPayloadError, web};
use serde_json::json;
use tracing::warn;

use crate::domain::{Error, IdentifierValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidIdentifier,
    MalformedBody,
    MalformedQuery,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidIdentifier => "invalid_identifier",
            ErrorCode::MalformedBody => "malformed_body",
            ErrorCode::MalformedQuery => "malformed_query",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("{} is required", field.as_str())).with_details(json!({
        "field": field.as_str(),
        "code": ErrorCode::MissingField.as_str(),
    }))
}

/// Parse a caller-supplied identifier; an empty value counts as missing.
pub(crate) fn parse_identifier<T>(raw: String, field: FieldName) -> Result<T, Error>
where
    T: TryFrom<String, Error = IdentifierValidationError>,
{
    T::try_from(raw).map_err(|err| match err {
        IdentifierValidationError::Empty { .. } => missing_field_error(field),
        IdentifierValidationError::SurroundingWhitespace { .. } => {
            Error::invalid_request(format!("{} is not a valid identifier", field.as_str()))
                .with_details(json!({
                    "field": field.as_str(),
                    "code": ErrorCode::InvalidIdentifier.as_str(),
                }))
        }
    })
}

pub(crate) fn parse_optional_identifier<T>(
    raw: Option<String>,
    field: FieldName,
) -> Result<Option<T>, Error>
where
    T: TryFrom<String, Error = IdentifierValidationError>,
{
    raw.map(|value| parse_identifier(value, field)).transpose()
}

/// Require a non-blank free-text field.
pub(crate) fn require_text(raw: String, field: FieldName) -> Result<String, Error> {
    if raw.trim().is_empty() {
        Err(missing_field_error(field))
    } else {
        Ok(raw)
    }
}

fn malformed(code: ErrorCode, message: String) -> actix_web::Error {
    warn!(%message, "rejected malformed request");
    Error::invalid_request(message)
        .with_details(json!({ "code": code.as_str() }))
        .into()
}

/// JSON extractor configuration rendering decode failures as API errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        malformed(ErrorCode::MalformedBody, format!("invalid request body: {err}"))
    })
}

/// Query extractor configuration rendering decode failures as API errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: QueryPayloadError, _req: &HttpRequest| {
        malformed(ErrorCode::MalformedQuery, format!("invalid query string: {err}"))
    })
}
