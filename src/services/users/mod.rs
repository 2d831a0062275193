//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성, 조회, 목록 비즈니스 로직을 담당하는 [`UserService`](user_service::UserService)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! let response = user_service.create_user(request)?;
//! ```

pub mod user_service;
