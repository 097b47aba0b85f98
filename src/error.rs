use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

use crate::middleware::logging::ErrorTrace;

pub type StoreResult<T> = Result<T, StoreError>;

/// Everything the stores can fail with, one variant per caller-visible category.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Database error: {0}")]
    Transport(#[from] DbErr),
}

impl StoreError {
    pub fn product_not_found(product_id: i32) -> Self {
        StoreError::NotFound(format!("No product with {} id was found", product_id))
    }

    pub fn entry_not_found(id: i32) -> Self {
        StoreError::NotFound(format!("No entry with {} id was found", id))
    }

    fn status(&self) -> StatusCode {
        match self {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Conflict(_) => StatusCode::CONFLICT,
            StoreError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    //the driver detail goes to the log, not to the client
    fn client_message(&self) -> String {
        match self {
            StoreError::Transport(_) => "Internal server error.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.client_message();
        let mut response = (status, Json(json!({ "message": message }))).into_response();
        response.extensions_mut().insert(ErrorTrace(self.to_string()));
        response
    }
}

/// Failure of a two-step move between the cart and the wishlist. The variant
/// tells the caller whether any state was already changed: `StepOne` means
/// nothing happened, `StepTwo` means the first step is committed and stays.
#[derive(Debug, Error)]
pub enum MoveError {
    #[error("{0}")]
    StepOne(#[source] StoreError),
    #[error("Move was partially applied: {0}")]
    StepTwo(#[source] StoreError),
}

impl MoveError {
    fn client_message(&self) -> String {
        match self {
            MoveError::StepOne(source) => source.client_message(),
            MoveError::StepTwo(source) => {
                format!("Move was partially applied: {}", source.client_message())
            }
        }
    }
}

impl IntoResponse for MoveError {
    fn into_response(self) -> Response {
        match self {
            MoveError::StepOne(source) => source.into_response(),
            step_two @ MoveError::StepTwo(_) => {
                let message = step_two.client_message();
                let mut response = (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message })),
                )
                    .into_response();
                response
                    .extensions_mut()
                    .insert(ErrorTrace(step_two.to_string()));
                response
            }
        }
    }
}
