use axum::{
    async_trait,
    extract::{
        path::ErrorKind,
        rejection::PathRejection,
        FromRequest, FromRequestParts, Path, Request,
    },
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// `axum::Json` whose rejections use the service's JSON error envelope (400).
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Cuerpo de la petición inválido",
                Some(rejection.body_text()),
            )),
        }
    }
}

/// Not-found message of the record kind served by a router, installed with
/// `Extension` and used when a path id is numeric but out of range.
#[derive(Debug, Clone, Copy)]
pub struct NotFoundMessage(pub &'static str);

/// `axum::extract::Path` with JSON rejections. A numeric id too large for the
/// target type names no stored record, so it is a 404 rather than a 400.
pub struct JsonPath<T>(pub T);

fn is_integer_literal(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn out_of_range(kind: &ErrorKind) -> bool {
    match kind {
        ErrorKind::ParseErrorAtKey { value, .. }
        | ErrorKind::ParseErrorAtIndex { value, .. }
        | ErrorKind::ParseError { value, .. } => is_integer_literal(value),
        _ => false,
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for JsonPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(JsonPath(value)),
            Err(PathRejection::FailedToDeserializePathParams(e)) if out_of_range(e.kind()) => {
                let message = parts
                    .extensions
                    .get::<NotFoundMessage>()
                    .map(|m| m.0)
                    .unwrap_or("Registro no encontrado");
                Err(JsonApiError::new(StatusCode::NOT_FOUND, message, None))
            }
            Err(rejection) => Err(JsonApiError::new(
                StatusCode::BAD_REQUEST,
                "Identificador inválido",
                Some(rejection.body_text()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals() {
        assert!(is_integer_literal("99999999999"));
        assert!(is_integer_literal("-99999999999"));
        assert!(!is_integer_literal("abc"));
        assert!(!is_integer_literal("12a"));
        assert!(!is_integer_literal("-"));
        assert!(!is_integer_literal(""));
    }
}
