//! 사용자 관리 서비스 백엔드
//!
//! 메모리 기반 사용자 저장소를 제공하는 Actix-web REST 서비스입니다.
//! 사용자 생성, 목록 조회, ID 조회와 헬스체크를 지원합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성(`POST /users`), 목록(`GET /users`), 조회(`GET /users/{id}`)
//! - **입력 검증**: `validator` 크레이트 기반 이름/이메일 규칙
//! - **명시적 의존성 주입**: 저장소와 서비스를 `main`에서 생성해 `web::Data`로 전달
//! - **일관된 에러 응답**: 모든 실패는 `{"error": "..."}` JSON
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (404/405 폴백 포함)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 파싱/응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← RwLock<IndexMap> 메모리 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_service_backend::repositories::users::user_repo::UserRepository;
//! use user_service_backend::services::users::user_service::UserService;
//! use user_service_backend::routes::configure_all_routes;
//!
//! let user_service = web::Data::new(UserService::new(Arc::new(UserRepository::new())));
//! let app = App::new()
//!     .app_data(user_service.clone())
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
