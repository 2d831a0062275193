//! # Application Error Handling System
//!
//! 사용자 서비스 전체에서 사용하는 통합 에러 타입입니다.
//! 각 핸들러는 `Result<HttpResponse, AppError>`를 반환하고,
//! `actix_web::ResponseError` 구현이 경계에서 HTTP 상태 코드로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `InvalidJson` | 400 Bad Request | 잘못된 JSON 또는 Content-Type 누락 |
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `NotFound` | 404 Not Found | 사용자 또는 엔드포인트 없음 |
//! | `MethodNotAllowed` | 405 Method Not Allowed | 알려진 경로, 지원하지 않는 메서드 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 모든 응답 본문은 `{"error": "<message>"}` 형식입니다.
//! `InternalError`의 상세 내용은 로그에만 남기고 클라이언트에는
//! `"Internal server error"`만 전달합니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 500 응답에 고정으로 사용하는 메시지
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트 에러(4xx)와 서버 장애(5xx)를 구분합니다.
/// 4xx 변형의 메시지는 그대로 응답 본문의 `error` 필드가 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문을 JSON으로 해석할 수 없음 (400 Bad Request)
    #[error("{0}")]
    InvalidJson(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// # 예제
    /// ```rust,ignore
    /// if !email.contains('@') {
    ///     return Err(AppError::ValidationError("Invalid email format".to_string()));
    /// }
    /// ```
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 경로는 존재하지만 메서드가 맞지 않음 (405 Method Not Allowed)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 저장소 잠금 실패 등 클라이언트가 해결할 수 없는 오류입니다.
    /// 메시지는 서버 로그에만 기록됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지를 반환합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::InternalError(_) => INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 상세 정보를 `error!` 로그로 남기고 본문에는 고정 메시지만 담습니다.
    fn error_response(&self) -> HttpResponse {
        if let AppError::InternalError(detail) = self {
            log::error!("요청 처리 중 내부 오류 발생: {}", detail);
        }

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.client_message()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러를 `AppError::InternalError`로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let users = self.users.read().context("사용자 저장소 읽기 잠금 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
