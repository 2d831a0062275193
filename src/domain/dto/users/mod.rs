//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버 요청 DTO
//! │   └── create_user.rs         # 사용자 생성 요청 + 검증
//! └── response/                   # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs       # 단일 사용자 / 목록 응답
//! ```

pub mod request;
pub mod response;
