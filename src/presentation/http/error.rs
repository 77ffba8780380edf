use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Application failure rendered as `{"status", "error", "message"}`, where
/// `error` is a stable machine-readable kind.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidImageRequest(msg) => {
                Self::new(StatusCode::BAD_REQUEST, "invalid_image_request", msg)
            }
            ApplicationError::InvalidDocument(msg) => {
                tracing::error!(error = %msg, "database returned an unusable view result");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "invalid_document", msg)
            }
            ApplicationError::Internal(msg) => {
                tracing::error!(error = %msg, "responding with internal server error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", msg)
            }
        }
    }

    fn new(status: StatusCode, kind: &'static str, message: String) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    error: &'static str,
    message: &'a str,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            status: self.status.as_u16(),
            error: self.kind,
            message: &self.message,
        })
        .into_response();
        (self.status, body).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// Lets handlers finish with `service.call(..).into_http()?`.
pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from)
    }
}
