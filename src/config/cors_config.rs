//! CORS 설정 모듈
//!
//! 브라우저 클라이언트에 허용할 Origin 목록을 환경 변수에서 읽어옵니다.

use std::env;

/// `CORS_ALLOWED_ORIGINS`가 없을 때 허용하는 개발용 Origin
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5000",
    "http://127.0.0.1:5000",
];

/// CORS 허용 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 허용할 Origin 목록을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    ///
    /// # Examples
    ///
    /// ```bash
    /// CORS_ALLOWED_ORIGINS="https://admin.example.com,https://app.example.com"
    /// ```
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    fn parse_origins(raw: Option<&str>) -> Vec<String> {
        let origins: Vec<String> = raw
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            DEFAULT_ALLOWED_ORIGINS.iter().map(|origin| origin.to_string()).collect()
        } else {
            origins
        }
    }
}
