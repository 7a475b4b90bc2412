use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor that reports rejections through `AppError`.
///
/// Behaves like `axum::Json` but a malformed body or a wrongly typed field yields a
/// 400 validation error in the API's standard error shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
