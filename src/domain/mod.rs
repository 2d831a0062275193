//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 저장소에 보관되는 사용자 엔티티
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (In-memory Repository)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! `User`는 생성 시 ID와 생성 시각이 부여되며 이후 변경되지 않습니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! 요청 DTO는 검증 규칙을, 응답 DTO는 JSON 형식을 담당합니다.

pub mod entities;
pub mod dto;
