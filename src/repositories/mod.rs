//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 `main`(또는 테스트)에서 명시적으로 생성되어 `Arc`로 서비스에 주입됩니다.
//! 테스트마다 독립된 저장소를 만들 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = Arc::new(UserRepository::new());
//! let users = user_repo.find_all()?;
//! ```

pub mod users;
