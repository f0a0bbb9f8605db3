//! Pagination extractor.

use axum::{
    async_trait,
    extract::{rejection::QueryRejection, FromRequestParts, Query},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use fleet_service::MultiCarResponse;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters of the car listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarListQuery {
    /// Zero-based page index.
    pub page: u32,
    /// Page size, at least one.
    pub size: u32,
    /// `desc` for newest first; anything else sorts ascending.
    #[serde(default)]
    pub sort: Option<String>,
}

/// Rejection for a missing or malformed listing query.
#[derive(Debug)]
pub struct CarListQueryRejection(pub QueryRejection);

impl IntoResponse for CarListQueryRejection {
    fn into_response(self) -> Response {
        let description = format!("Invalid page request: {}", self.0.body_text());
        (StatusCode::BAD_REQUEST, Json(MultiCarResponse::empty(description))).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CarListQuery
where
    S: Send + Sync,
{
    type Rejection = CarListQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Self>::from_request_parts(parts, state)
            .await
            .map_err(CarListQueryRejection)?;
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<CarListQuery, CarListQueryRejection> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        CarListQuery::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_parses_all_parameters() {
        let query = extract("/cars?page=2&size=5&sort=desc").await.unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.size, 5);
        assert_eq!(query.sort.as_deref(), Some("desc"));
    }

    #[tokio::test]
    async fn test_sort_is_optional() {
        let query = extract("/cars?page=0&size=1").await.unwrap();
        assert!(query.sort.is_none());
    }

    #[tokio::test]
    async fn test_missing_size_is_bad_request() {
        let rejection = extract("/cars?page=0").await.unwrap_err();
        assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_negative_page_is_bad_request() {
        assert!(extract("/cars?page=-1&size=10").await.is_err());
    }
}
