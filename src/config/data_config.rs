//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 바인딩 주소, 워커 수, 실행 환경 관련 설정을 관리합니다.

use std::env;

/// 기본 바인딩 호스트 (모든 인터페이스)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// 기본 바인딩 포트
pub const DEFAULT_PORT: u16 = 5000;

/// 기본 워커 스레드 수
pub const DEFAULT_WORKERS: usize = 4;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env == Environment::Development {
    ///     println!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));

        Self::from_name(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 환경의 표시 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 5000)
    pub fn port() -> u16 {
        Self::parse_port(env::var("PORT").ok().as_deref())
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST")
            .ok()
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    /// Actix 워커 스레드 수를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `WORKERS`: 1 이상의 정수 (기본값: 4)
    pub fn workers() -> usize {
        Self::parse_workers(env::var("WORKERS").ok().as_deref())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    fn parse_port(raw: Option<&str>) -> u16 {
        raw.and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT)
    }

    fn parse_workers(raw: Option<&str>) -> usize {
        raw.and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|workers| *workers >= 1)
            .unwrap_or(DEFAULT_WORKERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_round_trips_through_name() {
        for env in [
            Environment::Development,
            Environment::Test,
            Environment::Staging,
            Environment::Production,
        ] {
            assert_eq!(Environment::from_name(env.as_str()), env);
        }
    }

    #[test]
    fn test_port_parsing_falls_back_to_default() {
        assert_eq!(ServerConfig::parse_port(None), DEFAULT_PORT);
        assert_eq!(ServerConfig::parse_port(Some("not-a-port")), DEFAULT_PORT);
        assert_eq!(ServerConfig::parse_port(Some("70000")), DEFAULT_PORT);
        assert_eq!(ServerConfig::parse_port(Some(" 8081 ")), 8081);
    }

    #[test]
    fn test_workers_must_be_positive() {
        assert_eq!(ServerConfig::parse_workers(None), DEFAULT_WORKERS);
        assert_eq!(ServerConfig::parse_workers(Some("0")), DEFAULT_WORKERS);
        assert_eq!(ServerConfig::parse_workers(Some("-2")), DEFAULT_WORKERS);
        assert_eq!(ServerConfig::parse_workers(Some("8")), 8);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 5000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }
}
