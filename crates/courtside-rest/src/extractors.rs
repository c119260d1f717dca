//! Request extractors that reject with the API error envelope.

use crate::responses::AppError;
use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    FromRequestParts,
};
use courtside_core::CourtsideError;

/// Query string extractor; a bad query becomes a `VALIDATION_ERROR`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Path extractor; a bad path segment becomes a `VALIDATION_ERROR`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self(CourtsideError::validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self(CourtsideError::validation(rejection.body_text()))
    }
}
