//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리를 생성자로 주입받으며, 핸들러에는 `web::Data`로 전달됩니다.
//!
//! # Features
//!
//! - 사용자 생성 (입력 정리, ID/생성 시각 부여)
//! - 사용자 단건 조회 및 NotFound 변환
//! - 사용자 목록 조회

pub mod users;
