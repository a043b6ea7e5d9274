//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`] trait이 사용자 저장소의 계약이며, 두 가지 구현을 제공합니다.
//!
//! - [`InMemoryUserStore`](users::memory_store::InMemoryUserStore): 프로세스 메모리 저장소
//! - [`MongoUserStore`](users::mongo_store::MongoUserStore): MongoDB `users` 컬렉션
//!
//! # 원자성
//!
//! 각 연산은 원자적이어야 하며, 이메일 고유성은 `insert`/`replace` 내부에서
//! 저장소가 직접 보장합니다. 서비스 계층의 사전 조회는 정확한 에러 메시지를 위한 것이고,
//! 동시 요청 간 경쟁은 저장소 경계에서 닫힙니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::{UserStore, users::memory_store::InMemoryUserStore};
//!
//! let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
//! let user = store.find_by_email("user@example.com").await?;
//! ```

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::users::user::User;

pub mod users;

pub use users::memory_store::InMemoryUserStore;
pub use users::mongo_store::MongoUserStore;

/// 사용자 저장소 계약
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 로그에 표시할 저장소 이름
    fn name(&self) -> &str;

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 모든 사용자를 반환합니다.
    ///
    /// 순서는 저장소마다 다릅니다. 인메모리 저장소는 삽입 순서를 보장하고,
    /// MongoDB 저장소는 서버가 돌려주는 자연 순서(`$natural`)를 따릅니다.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// 새 사용자를 저장합니다.
    ///
    /// 같은 이메일이 이미 있으면 `AppError::ConflictError`를 반환하며 아무 것도 기록하지 않습니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 같은 `id`의 레코드를 통째로 교체합니다.
    ///
    /// * `Ok(None)` - 해당 `id`가 없음
    /// * `Err(AppError::ConflictError)` - 다른 레코드가 이미 새 이메일을 사용 중
    async fn replace(&self, user: User) -> AppResult<Option<User>>;

    /// 삭제된 레코드를 반환합니다. 없으면 `Ok(None)`.
    async fn delete(&self, id: &str) -> AppResult<Option<User>>;
}
