//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 메모리 기반 사용자 저장소를 제공합니다.

pub mod user_repo;
