//! 공통 유틸리티 함수 모듈
//!
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 미디어 타입 판별
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::is_valid_string;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! assert!(is_valid_string("  John  "));
//! print_boxed_title("User Service");
//! ```

pub mod string_utils;
pub mod display_terminal;
