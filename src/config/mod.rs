//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 환경 변수(및 `.env` 파일)에서 읽으며, 값이 없거나
//! 파싱할 수 없으면 기본값을 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩 설정
//! - [`cors_config`] - CORS 허용 Origin 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"        # 기본값: 0.0.0.0
//! export PORT="5000"           # 기본값: 5000
//! export WORKERS="4"           # 기본값: 4
//!
//! # 환경 설정
//! export ENVIRONMENT="development"  # development, test, staging, production
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000"
//!
//! # 로깅
//! export RUST_LOG="info,actix_web=info"
//! ```

pub mod data_config;
pub mod cors_config;

pub use data_config::*;
pub use cors_config::*;
