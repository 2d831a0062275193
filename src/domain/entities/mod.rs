//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 저장소에 보관되는 내부 표현이며, HTTP 응답에는
//! `dto::users::response`의 DTO로 변환되어 나갑니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장소에 보관되는 엔티티)
//! └── dto/          ← 데이터 전송 객체
//! ```

pub mod users;
