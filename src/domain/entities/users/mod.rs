//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new("  Alice  ", "alice@example.com");
//! assert_eq!(user.name, "Alice");
//! ```

pub mod user;
