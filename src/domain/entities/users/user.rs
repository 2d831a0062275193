//! User Entity Implementation
//!
//! 메모리 저장소에 보관되는 사용자 엔티티입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::string_utils::trim_string;

/// 사용자 엔티티
///
/// `id`와 `created_at`은 생성 시 서버에서 한 번만 설정되며 이후 변경되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// UUID v4 문자열
    pub id: String,
    /// 사용자 이름 (trim 적용)
    pub name: String,
    /// 사용자 이메일 (trim 적용, 중복 허용)
    pub email: String,
    /// 생성 시간 (UTC)
    pub created_at: DateTime<Utc>,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 이름과 이메일의 앞뒤 공백을 제거하고, 새 ID와 현재 UTC 시각을 부여합니다.
    /// 입력값 검증은 호출 전에 `CreateUserRequest`에서 끝나 있어야 합니다.
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: trim_string(name),
            email: trim_string(email),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_trims_fields() {
        let user = User::new("  Idaya Seidu ", "\tiseiduu@andrew.cmu.edu\n");

        assert_eq!(user.name, "Idaya Seidu");
        assert_eq!(user.email, "iseiduu@andrew.cmu.edu");
    }

    #[test]
    fn test_new_user_gets_uuid_id() {
        let user = User::new("Ayisha Nuhu", "anhuhu@andrew.cmu.edu");

        assert!(!user.id.is_empty());
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_identical_input_yields_distinct_ids() {
        let first = User::new("Same", "same@example.com");
        let second = User::new("Same", "same@example.com");

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_created_at_serializes_as_utc_rfc3339() {
        let user = User::new("Mariam Suleiman", "msuleiman@andrew.cmu.edu");
        let json = serde_json::to_value(&user).unwrap();
        let raw = json["created_at"].as_str().unwrap();

        assert!(raw.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(raw).is_ok());
    }
}
