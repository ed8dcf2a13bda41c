//! Extractors whose rejections are reported as [`AppError`] JSON bodies.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `Json<T>` that rejects with a fixed `BadRequest` instead of axum's plain-text body.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(value))
    }
}

pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(AppPath(value))
    }
}

pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(AppQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        email: String,
    }

    #[derive(Debug, Deserialize)]
    struct Page {
        #[allow(dead_code)]
        page: i32,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn bad_request_text(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_field_is_bad_request_without_echo() {
        let err = AppJson::<Payload>::from_request(json_request(r#"{"name":"Dupont"}"#), &())
            .await
            .err()
            .unwrap();
        let msg = bad_request_text(err);
        assert!(!msg.contains("email"));
        assert!(!msg.contains("Dupont"));
    }

    #[tokio::test]
    async fn broken_json_is_bad_request() {
        let err = AppJson::<Payload>::from_request(json_request(r#"{"email": "#), &())
            .await
            .err()
            .unwrap();
        assert_eq!(bad_request_text(err), "request body is not valid JSON");
    }

    #[tokio::test]
    async fn missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"email":"a@b.c"}"#))
            .unwrap();
        let err = AppJson::<Payload>::from_request(request, &())
            .await
            .err()
            .unwrap();
        assert_eq!(
            bad_request_text(err),
            "Content-Type must be application/json"
        );
    }

    #[tokio::test]
    async fn mistyped_query_is_bad_request_without_echo() {
        let (mut parts, _) = Request::builder()
            .uri("/?page=lots")
            .body(Body::empty())
            .unwrap()
            .into_parts();
        let err = AppQuery::<Page>::from_request_parts(&mut parts, &())
            .await
            .err()
            .unwrap();
        let msg = bad_request_text(err);
        assert_eq!(msg, "query string is malformed");
    }
}
