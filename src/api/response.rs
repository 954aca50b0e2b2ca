//! API response helpers

use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

use crate::storage;

/// Hold data for a successful API interaction
///
/// The data is sent as-is, without a wrapper
pub struct Success<V>
where
    V: Serialize,
{
    status_code: StatusCode,
    data: Option<V>,
}

impl<V> Success<V>
where
    V: Serialize,
{
    pub fn ok(data: V) -> Self {
        Self {
            status_code: StatusCode::OK,
            data: Some(data),
        }
    }

    pub fn created(data: V) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            data: Some(data),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status_code: StatusCode::NO_CONTENT,
            data: None,
        }
    }
}

impl<V> IntoResponse for Success<V>
where
    V: Serialize,
{
    fn into_response(self) -> Response {
        if let Some(data) = self.data {
            (self.status_code, Json(data)).into_response()
        } else {
            self.status_code.into_response()
        }
    }
}

/// Hold data for a failed API interaction
#[derive(Debug)]
pub struct Error {
    status_code: StatusCode,
    message: String,
    description: Option<String>,
}

impl Error {
    pub fn bad_request<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            message: message.to_string(),
            description: None,
        }
    }

    pub fn not_found<M>(message: M) -> Self
    where
        M: ToString,
    {
        Self {
            status_code: StatusCode::NOT_FOUND,
            message: message.to_string(),
            description: None,
        }
    }

    pub fn with_description<M>(self, description: M) -> Self
    where
        M: ToString,
    {
        Self {
            description: Some(description.to_string()),
            ..self
        }
    }
}

impl From<storage::Error> for Error {
    fn from(err: storage::Error) -> Self {
        match err {
            storage::Error::NoteNotFound | storage::Error::CategoryNotFound => {
                Self::not_found(err)
            }
            storage::Error::UnknownCategory
            | storage::Error::NotATodo
            | storage::Error::GeneralCategory
            | storage::Error::CategoryInUse(_) => Self::bad_request(err),
        }
    }
}

#[derive(Serialize)]
struct ErrorWrapper<D>
where
    D: Serialize,
{
    error: D,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<D>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (
            self.status_code,
            Json(ErrorWrapper {
                error: self.message,
                description: self.description,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_status_codes() {
        let cases = [
            (storage::Error::NoteNotFound, StatusCode::NOT_FOUND),
            (storage::Error::CategoryNotFound, StatusCode::NOT_FOUND),
            (storage::Error::UnknownCategory, StatusCode::BAD_REQUEST),
            (storage::Error::NotATodo, StatusCode::BAD_REQUEST),
            (storage::Error::GeneralCategory, StatusCode::BAD_REQUEST),
            (storage::Error::CategoryInUse(2), StatusCode::BAD_REQUEST),
        ];

        for (err, status_code) in cases {
            assert_eq!(status_code, Error::from(err).status_code);
        }
    }

    #[test]
    fn test_message_comes_from_storage_error() {
        let err = Error::from(storage::Error::CategoryInUse(3));
        assert_eq!("Category is in use by 3 note(s)", err.message);
        assert_eq!(None, err.description);
    }
}
