//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티(내부 표현)와 DTO(외부 계약)를 분리하여, 저장 구조가 바뀌어도
//! 응답 JSON 형식은 유지됩니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/              # 사용자 관련 DTO
//! │   ├── request/        # 요청 DTO (클라이언트 → 서버)
//! │   └── response/       # 응답 DTO (서버 → 클라이언트)
//! └── health.rs           # 헬스체크 응답
//! ```
//!
//! ## 핸들러에서의 사용
//!
//! ```rust,ignore
//! let request = CreateUserRequest::from_json(&payload)?;
//! let response: UserResponse = service.create_user(request)?;
//! Ok(HttpResponse::Created().json(response))
//! ```

pub mod users;
pub mod health;
