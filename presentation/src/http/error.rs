//! Error-to-HTTP mapping

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quizcheck_application::ServiceError;
use serde::Serialize;
use tracing::{error, warn};

/// Body of every error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// An error on its way to becoming an HTTP response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }
}

/// Status code for each [`ServiceError`] class
pub(crate) fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Configuration(_) | ServiceError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ServiceError::Upstream(_) | ServiceError::Parse(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Shape(_) => StatusCode::BAD_REQUEST,
        ServiceError::Match(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self {
            status: status_for(&error),
            code: error.code(),
            message: error.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            code: "invalid_request",
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), code = self.code, "{}", self.message);
        } else {
            warn!(status = self.status.as_u16(), code = self.code, "{}", self.message);
        }

        let body = ErrorBody {
            error: self.code,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizcheck_domain::{MatchError, ShapeError};

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServiceError::Configuration("no key".into()), 500),
            (ServiceError::Upstream("refused".into()), 502),
            (ServiceError::Parse("not json".into()), 502),
            (ServiceError::Shape(ShapeError::IndexOutOfRange(9)), 400),
            (
                ServiceError::Match(MatchError {
                    final_answer: 1.0,
                    unparseable: 0,
                }),
                422,
            ),
            (ServiceError::Internal("boom".into()), 500),
        ];
        for (error, status) in cases {
            assert_eq!(status_for(&error).as_u16(), status, "{error}");
        }
    }

    #[test]
    fn test_code_is_carried_over() {
        let api = ApiError::from(ServiceError::Configuration("no key".into()));
        assert_eq!(api.code(), "configuration_error");
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
