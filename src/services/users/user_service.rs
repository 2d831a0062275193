//! # 사용자 관리 서비스 구현
//!
//! 사용자 생성, 단건 조회, 목록 조회 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  UserService                  │
//! │  • create_user     CreateUserRequest → User   │
//! │  • get_user_by_id  NotFound 변환              │
//! │  • list_users      Entity → DTO, count 계산    │
//! └───────────────────────────────────────────────┘
//!                         │
//!                         ▼
//! ┌───────────────────────────────────────────────┐
//! │                UserRepository                 │
//! │  • RwLock<IndexMap<id, User>>                 │
//! └───────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use log::info;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{
            request::CreateUserRequest,
            response::{UserListResponse, UserResponse},
        },
        entities::users::user::User,
    },
    repositories::users::user_repo::UserRepository,
};

/// 사용자 조회 실패 시 응답 메시지
pub const USER_NOT_FOUND_MESSAGE: &str = "User not found";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 리포지토리를 생성자로 주입받습니다. Actix에는 `web::Data<UserService>`로
/// 등록되어 모든 워커가 같은 인스턴스(와 같은 저장소)를 공유합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use actix_web::web;
///
/// let user_repo = Arc::new(UserRepository::new());
/// let user_service = web::Data::new(UserService::new(user_repo));
///
/// App::new().app_data(user_service.clone());
/// ```
#[derive(Debug, Clone)]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 생성
    ///
    /// 검증을 마친 요청으로 엔티티를 만들고(trim, ID, 생성 시각) 저장합니다.
    /// 이름/이메일 중복은 허용됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 저장된 사용자
    /// * `Err(AppError::InternalError)` - 저장소 잠금 실패
    pub fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        let user = User::new(&request.name, &request.email);
        let created_user = self.user_repo.create(user)?;

        info!("User creation took: {:?}", start_time.elapsed());

        Ok(UserResponse::from(created_user))
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 전체 사용자 목록 조회
    ///
    /// 순서는 저장소가 반환하는 순서를 그대로 따르며 호출자에게 보장하지 않습니다.
    pub fn list_users(&self) -> AppResult<UserListResponse> {
        let users = self.user_repo.find_all()?;

        Ok(UserListResponse::from(users))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> UserService {
        UserService::new(Arc::new(UserRepository::new()))
    }

    fn request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn test_create_user_trims_and_stores() {
        let service = service();

        let created = service
            .create_user(request("  Idaya Seidu  ", " iseiduu@andrew.cmu.edu "))
            .unwrap();

        assert_eq!(created.name, "Idaya Seidu");
        assert_eq!(created.email, "iseiduu@andrew.cmu.edu");
        assert!(!created.id.is_empty());
        assert_eq!(service.get_user_by_id(&created.id).unwrap(), created);
    }

    #[test]
    fn test_get_unknown_user_is_not_found() {
        let result = service().get_user_by_id("non-existent-id");

        match result {
            Err(AppError::NotFound(message)) => assert_eq!(message, USER_NOT_FOUND_MESSAGE),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_list_users_counts_all_created() {
        let service = service();
        assert_eq!(service.list_users().unwrap().count, 0);

        for i in 0..3 {
            service
                .create_user(request(&format!("user-{}", i), "dup@example.com"))
                .unwrap();
        }

        let list = service.list_users().unwrap();
        assert_eq!(list.count, 3);
        assert_eq!(list.users.len(), 3);
    }

    #[test]
    fn test_duplicate_input_creates_distinct_users() {
        let service = service();

        let first = service.create_user(request("Same", "same@example.com")).unwrap();
        let second = service.create_user(request("Same", "same@example.com")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(service.list_users().unwrap().count, 2);
    }

    #[test]
    fn test_services_sharing_a_repository_see_the_same_users() {
        let repo = Arc::new(UserRepository::new());
        let writer = UserService::new(Arc::clone(&repo));
        let reader = UserService::new(repo);

        let created = writer.create_user(request("Shared", "shared@example.com")).unwrap();

        assert_eq!(reader.get_user_by_id(&created.id).unwrap(), created);
    }
}
