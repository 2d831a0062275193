//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 클라이언트 에러(4xx)와 서버 장애(5xx)를 구분하는 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 경계에서 상태 코드 변환
//! - **ErrorContext**: 외부 에러를 `InternalError`로 감싸는 확장 trait
//!
//! ## 에러 처리 흐름
//!
//! ```text
//! Repository (잠금 실패) ──┐
//! Service (NotFound) ──────┼──► Result<_, AppError> ──► Handler ──► ResponseError ──► HTTP
//! DTO 검증 (Validation) ───┘
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn find(&self, id: &str) -> AppResult<UserResponse> {
//!     self.user_repo
//!         .find_by_id(id)?
//!         .map(UserResponse::from)
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))
//! }
//! ```

pub mod errors;

pub use errors::*;
