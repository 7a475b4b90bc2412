use axum::extract::FromRequestParts;

use crate::server::error::AppError;

/// Path parameter extractor that reports rejections through `AppError`.
///
/// An id segment that does not parse as the expected integer matches no resource, so it
/// yields a 404 in the API's standard error shape instead of axum's plain-text 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);
