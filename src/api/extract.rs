use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

/// Json extractor that rejects malformed or invalid bodies with the same
/// `{message}` shape the rest of the API uses, before any handler runs.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": rejection.body_text() })),
                )
                    .into_response()
            })?;

        value.validate().map_err(|err| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": format!("Failed to validate: {}", err) })),
            )
                .into_response()
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Query-string counterpart of [`ValidatedJson`], rejecting with the same
/// `{message}` shape.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": rejection.body_text() })),
                )
                    .into_response()
            })?;

        value.validate().map_err(|err| {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": format!("Failed to validate: {}", err) })),
            )
                .into_response()
        })?;

        Ok(ValidatedQuery(value))
    }
}
