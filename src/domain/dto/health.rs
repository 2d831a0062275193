//! 헬스체크 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 헬스체크 응답에 사용하는 서비스 이름
pub const SERVICE_NAME: &str = "user_service";

/// `GET /health` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// 항상 `"healthy"`
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// 현재 시각으로 정상 상태 응답을 생성합니다.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_response() {
        let before = Utc::now();
        let health = HealthResponse::healthy();

        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
        assert!(health.timestamp >= before);
    }
}
