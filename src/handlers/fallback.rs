//! 매칭되지 않은 요청을 위한 폴백 핸들러
//!
//! - 등록되지 않은 경로 → 404 `{"error": "Endpoint not found"}`
//! - 등록된 경로의 지원하지 않는 메서드 → 405 `{"error": "Method not allowed"}`

use actix_web::{HttpRequest, HttpResponse};
use log::debug;
use crate::core::errors::AppError;

pub const ENDPOINT_NOT_FOUND_MESSAGE: &str = "Endpoint not found";

/// 앱 전체의 default service
pub async fn endpoint_not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    debug!("매칭되는 엔드포인트 없음: {} {}", req.method(), req.path());
    Err(AppError::NotFound(ENDPOINT_NOT_FOUND_MESSAGE.to_string()))
}

/// 리소스별 default service
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    debug!("허용되지 않은 메서드: {} {}", req.method(), req.path());
    Err(AppError::MethodNotAllowed)
}
