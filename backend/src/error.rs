use rocket::http::Status;
use rocket::response::Responder;
use thiserror::Error;
use tracing::error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Question not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Errors are rendered by the registered catchers, so only the status travels.
impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        match self {
            ApiError::NotFound => Err(Status::NotFound),
            ApiError::Internal(msg) => {
                error!("{} {} failed: {}", req.method(), req.uri(), msg);
                Err(Status::InternalServerError)
            }
        }
    }
}
