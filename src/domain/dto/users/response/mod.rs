//! # 사용자 관련 응답 DTO 모듈
//!
//! 서버에서 클라이언트로 나가는 사용자 데이터 구조를 정의합니다.
//!
//! | DTO | 엔드포인트 | 형식 |
//! |-----|------------|------|
//! | `UserResponse` | `POST /users`, `GET /users/{id}` | `{id, name, email, created_at}` |
//! | `UserListResponse` | `GET /users` | `{users: [...], count: N}` |

pub mod user_response;

pub use user_response::{UserListResponse, UserResponse};
