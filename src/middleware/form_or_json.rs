use axum::{
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Body extractor accepting either a JSON or a urlencoded form body,
/// chosen by the request's `Content-Type`.
pub struct FormOrJson<T>(pub T);

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::InvalidInput(e.body_text()))?;
            return Ok(Self(value));
        }

        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidInput(e.body_text()))?;
        Ok(Self(value))
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("application/json"))
}
