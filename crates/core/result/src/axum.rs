use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error_type {
            ErrorType::UnknownUser => StatusCode::NOT_FOUND,

            ErrorType::UnknownReport => StatusCode::NOT_FOUND,
            ErrorType::UnknownCategory => StatusCode::BAD_REQUEST,
            ErrorType::CategoryExists => StatusCode::CONFLICT,
            ErrorType::CategoryInUse => StatusCode::CONFLICT,

            ErrorType::UnknownMatch => StatusCode::NOT_FOUND,
            ErrorType::AlreadyResolved => StatusCode::CONFLICT,

            ErrorType::UnknownNotification => StatusCode::NOT_FOUND,

            ErrorType::NotPrivileged => StatusCode::FORBIDDEN,
            ErrorType::NotOwner => StatusCode::FORBIDDEN,

            ErrorType::DatabaseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::InvalidOperation => StatusCode::BAD_REQUEST,
            ErrorType::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ErrorType::FailedValidation { .. } => StatusCode::BAD_REQUEST,
        };

        (status, Json(&self)).into_response()
    }
}
