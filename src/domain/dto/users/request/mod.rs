//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 검증된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: 핸들러에서 Content-Type과 JSON 구문 확인 (`InvalidJson`)
//! 2. **구조 검증**: 본문이 JSON 객체인지 확인
//! 3. **필드 검증**: `validator` 크레이트의 커스텀 규칙 (이름 → 이메일 순서)
//!
//! ## 에러 핸들링
//!
//! 검증 실패는 `AppError::ValidationError`로 변환되어 400 Bad Request가 됩니다.
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let request = CreateUserRequest::from_json(&payload)?;
//! ```

pub mod create_user;

pub use create_user::CreateUserRequest;
