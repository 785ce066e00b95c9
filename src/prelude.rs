use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use standard_error::{Interpolate, StandardError, Status};

pub type Result<T> = core::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("job `{0}` already exists")]
    DuplicateKey(String),
    #[error("job `{0}` not found")]
    NotFound(String),
    #[error("invalid job posting: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<AppError> for StandardError {
    fn from(err: AppError) -> StandardError {
        let detail = err.to_string();
        match err {
            AppError::DuplicateKey(_) => StandardError::new("ERR-JOB-409")
                .code(StatusCode::CONFLICT)
                .interpolate_err(detail),
            AppError::NotFound(_) => StandardError::new("ERR-JOB-404")
                .code(StatusCode::NOT_FOUND)
                .interpolate_err(detail),
            AppError::Validation(_) => StandardError::new("ERR-JOB-422")
                .code(StatusCode::UNPROCESSABLE_ENTITY)
                .interpolate_err(detail),
            // internals stay in the logs
            _ => StandardError::new("ERR-SRV-500").code(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::DuplicateKey(_) | AppError::NotFound(_) | AppError::Validation(_) => {
                tracing::debug!(error = %self, "request rejected")
            }
            _ => tracing::error!(error = %self, "request failed"),
        }
        StandardError::from(self).into_response()
    }
}
