use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            created_at,
        } = user;

        Self {
            id,
            name,
            email,
            created_at,
        }
    }
}

/// 사용자 목록 응답 DTO
///
/// `count`는 항상 `users.len()`과 같습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
    pub count: usize,
}

impl From<Vec<User>> for UserListResponse {
    fn from(users: Vec<User>) -> Self {
        let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
        let count = users.len();

        Self { users, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_json_shape() {
        let user = User::new("Ahmed Issah Tahiru", "aissah@andrew.cmu.edu");
        let json = serde_json::to_value(UserResponse::from(user.clone())).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["id"], user.id);
        assert_eq!(object["name"], "Ahmed Issah Tahiru");
        assert_eq!(object["email"], "aissah@andrew.cmu.edu");
        assert!(object["created_at"].is_string());
    }

    #[test]
    fn test_list_response_counts_users() {
        let list = UserListResponse::from(vec![
            User::new("a", "a@x"),
            User::new("b", "b@x"),
        ]);

        assert_eq!(list.count, 2);
        assert_eq!(list.users.len(), 2);
    }

    #[test]
    fn test_empty_list_response() {
        let json = serde_json::to_value(UserListResponse::from(Vec::new())).unwrap();

        assert_eq!(json, serde_json::json!({ "users": [], "count": 0 }));
    }
}
