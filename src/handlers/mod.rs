//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, api_smoke, Browser)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 메모리 저장소                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/DTOs - 도메인 모델                    ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 예외를 삼키지 않고 `Result<HttpResponse, AppError>`를 반환합니다.
//! 상태 코드 변환은 `AppError`의 `ResponseError` 구현 한 곳에서만 일어납니다.
//!
//! ```rust,ignore
//! pub async fn get_user(
//!     user_id: web::Path<String>,
//!     service: web::Data<UserService>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.get_user_by_id(&user_id)?;   // NotFound → 404
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 목록/생성/조회
//! - **`fallback`**: 404 Endpoint not found, 405 Method not allowed

pub mod users;
pub mod fallback;
