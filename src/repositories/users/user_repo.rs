//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 프로세스 메모리에만 데이터를 보관하며, 재시작하면 모든 사용자가 사라집니다.
//!
//! ## 특징
//!
//! - **명시적 생성**: 전역 싱글톤이 아니라 `UserRepository::new()`로 만들어 주입
//! - **동시성 안전**: `RwLock`으로 모든 접근을 보호 (Actix 워커는 여러 스레드에서 실행)
//! - **삽입 순서 보존**: `IndexMap`을 사용하므로 `find_all`은 생성 순서대로 반환
//! - **추가 전용**: 수정/삭제 연산은 제공하지 않음

use std::sync::RwLock;
use indexmap::IndexMap;
use log::{debug, info};
use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::users::user::User;

/// 사용자 데이터 액세스 리포지토리
///
/// ID → `User` 매핑을 보관합니다. 잠금이 poison 상태가 되면
/// 모든 연산이 `AppError::InternalError`를 반환합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::user_repo::UserRepository;
///
/// let repo = Arc::new(UserRepository::new());
/// let created = repo.create(User::new("Alice", "alice@example.com"))?;
/// let found = repo.find_by_id(&created.id)?;
/// assert_eq!(found, Some(created));
/// ```
#[derive(Debug, Default)]
pub struct UserRepository {
    users: RwLock<IndexMap<String, User>>,
}

impl UserRepository {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(IndexMap::new()),
        }
    }

    /// 사용자 저장
    ///
    /// ID 충돌은 UUID v4 특성상 고려하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 저장된 사용자
    /// * `Err(AppError::InternalError)` - 잠금 획득 실패
    pub fn create(&self, user: User) -> AppResult<User> {
        let mut users = self
            .users
            .write()
            .context("사용자 저장소 쓰기 잠금 실패")?;

        users.insert(user.id.clone(), user.clone());
        info!("사용자 저장 완료: id={}, total={}", user.id, users.len());

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self
            .users
            .read()
            .context("사용자 저장소 읽기 잠금 실패")?;

        let user = users.get(id).cloned();
        if user.is_none() {
            debug!("사용자 조회 결과 없음: id={}", id);
        }

        Ok(user)
    }

    /// 저장된 모든 사용자를 생성 순서대로 반환
    pub fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self
            .users
            .read()
            .context("사용자 저장소 읽기 잠금 실패")?;

        Ok(users.values().cloned().collect())
    }

    /// 잠금이 poison 상태인 저장소 (서버 장애 경로 테스트용)
    #[cfg(test)]
    pub(crate) fn poisoned() -> Self {
        let repo = Self::new();
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = repo.users.write();
            panic!("poison the store lock");
        }));
        repo
    }
}
