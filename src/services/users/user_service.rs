//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 전체 생명주기를 관리하는 비즈니스 로직입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 UserService                 │
//! │  • 입력 검증 (utils::validation)             │
//! │  • 이메일 고유성 사전 검사                    │
//! │  • 부분 수정 병합                             │
//! └──────────────────────┬──────────────────────┘
//!                        ▼
//! ┌─────────────────────────────────────────────┐
//! │          Arc<dyn UserStore> (주입)           │
//! │  • InMemoryUserStore / MongoUserStore        │
//! │  • 고유성의 최종 보장 (원자적 insert/replace)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 모든 검증은 저장소 변경 이전에 끝나므로 실패한 요청은 부분 쓰기를 남기지 않습니다.

use std::sync::Arc;

use log::{info, warn};

use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::request::{CreateUserRequest, UpdateUserRequest},
        entities::users::user::{User, UserChanges},
    },
    repositories::UserStore,
    utils::validation::{validate_create, validate_date},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 에러 처리 전략
///
/// - **MissingFields / InvalidDate**: 입력값 검증 실패 (400)
/// - **ConflictError**: 다른 사용자가 같은 이메일을 사용 중 (400)
/// - **NotFound**: 해당 ID의 사용자 없음 (404)
/// - **DatabaseError / InternalError**: 저장소 오류 (500)
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// 현재 사용 중인 저장소 이름
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// 새 사용자 생성
    ///
    /// # 처리 과정
    ///
    /// 1. 필수 필드 검증 → `MissingFields`
    /// 2. 생년월일 파싱 → `InvalidDate`
    /// 3. 이메일 중복 확인 → `ConflictError`
    /// 4. 새 UUID를 발급하여 저장
    ///
    /// 성공 시 정확히 한 번 저장하며, 실패 시 저장소는 변하지 않습니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let new_user = validate_create(request)?;

        if self.store.find_by_email(&new_user.email).await?.is_some() {
            warn!("Rejected user creation: email already in use");
            return Err(AppError::duplicate_email());
        }

        let created = self.store.insert(User::create(new_user)).await?;
        info!("Created user {}", created.id);

        Ok(created)
    }

    /// 저장된 모든 사용자를 저장 순서대로 반환합니다.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.store.list().await
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<User> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }

    /// 사용자 부분 수정 (merge)
    ///
    /// 요청에 값이 있는 필드만 덮어쓰고 나머지는 기존 값을 유지합니다.
    ///
    /// # 처리 과정
    ///
    /// 1. 대상 조회 → 없으면 `NotFound`
    /// 2. 생년월일이 있으면 파싱 → `InvalidDate`
    /// 3. 이메일이 있으면 **수정 대상 자신을 제외하고** 중복 확인 → `ConflictError`
    /// 4. 병합 후 교체
    ///
    /// 자신의 현재 이메일을 다시 보내는 요청은 충돌이 아닙니다.
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<User> {
        let current = self.get_user_by_id(id).await?;

        let date_of_birth = validate_date(request.date_of_birth())?;

        if let Some(email) = request.email() {
            if let Some(owner) = self.store.find_by_email(email).await? {
                if owner.id != current.id {
                    warn!("Rejected update of user {}: email already in use", id);
                    return Err(AppError::duplicate_email());
                }
            }
        }

        let changes = UserChanges {
            name: request.name().map(str::to_string),
            email: request.email().map(str::to_string),
            date_of_birth,
        };

        let updated = self
            .store
            .replace(current.merged_with(changes))
            .await?
            .ok_or_else(|| AppError::user_not_found(id))?;

        info!("Updated user {}", updated.id);
        Ok(updated)
    }

    /// 사용자 삭제
    ///
    /// 삭제된 레코드를 반환합니다. 같은 ID로 다시 호출하면 `NotFound`입니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<User> {
        let removed = self
            .store
            .delete(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))?;

        info!("Deleted user {}", removed.id);
        Ok(removed)
    }
}
