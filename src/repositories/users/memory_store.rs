//! 인메모리 사용자 저장소
//!
//! `RwLock<Vec<User>>` 하나로 모든 레코드를 보관합니다. 삽입 순서가 목록 순서이며,
//! 고유성 검사와 쓰기가 같은 쓰기 잠금 안에서 이루어지므로 동시 생성/수정 간 경쟁이 없습니다.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::user::User;
use crate::repositories::UserStore;

const LOCK_POISONED: &str = "user store lock poisoned";

#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 데이터를 가진 저장소를 생성합니다.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&[User]) -> T) -> AppResult<T> {
        let users = self.users.read().context(LOCK_POISONED)?;
        Ok(f(&users))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.read(|users| users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.read(|users| users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        self.read(|users| users.to_vec())
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().context(LOCK_POISONED)?;

        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::duplicate_email());
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn replace(&self, user: User) -> AppResult<Option<User>> {
        let mut users = self.users.write().context(LOCK_POISONED)?;

        if users.iter().any(|u| u.email == user.email && u.id != user.id) {
            return Err(AppError::duplicate_email());
        }

        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<Option<User>> {
        let mut users = self.users.write().context(LOCK_POISONED)?;

        Ok(users
            .iter()
            .position(|u| u.id == id)
            .map(|index| users.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user(id: &str, email: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("user {}", id),
            email: email.to_string(),
            date_of_birth: Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[actix_web::test]
    async fn test_insert_and_lookup() {
        let store = InMemoryUserStore::new();
        store.insert(user("1", "a@example.com")).await.unwrap();

        assert_eq!(store.find_by_id("1").await.unwrap().unwrap().email, "a@example.com");
        assert_eq!(store.find_by_email("a@example.com").await.unwrap().unwrap().id, "1");
        assert!(store.find_by_id("2").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_insert_rejects_duplicate_email() {
        let store = InMemoryUserStore::with_users(vec![user("1", "a@example.com")]);

        let result = store.insert(user("2", "a@example.com")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_replace_allows_own_email_and_rejects_others() {
        let store = InMemoryUserStore::with_users(vec![
            user("1", "a@example.com"),
            user("2", "b@example.com"),
        ]);

        let mut renamed = user("1", "a@example.com");
        renamed.name = "renamed".to_string();
        assert_eq!(store.replace(renamed).await.unwrap().unwrap().name, "renamed");

        let result = store.replace(user("1", "b@example.com")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(store.find_by_id("1").await.unwrap().unwrap().email, "a@example.com");
    }

    #[actix_web::test]
    async fn test_replace_missing_id() {
        let store = InMemoryUserStore::new();
        assert!(store.replace(user("9", "z@example.com")).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_delete_preserves_order_of_remaining() {
        let store = InMemoryUserStore::with_users(vec![
            user("1", "a@example.com"),
            user("2", "b@example.com"),
            user("3", "c@example.com"),
        ]);

        assert_eq!(store.delete("2").await.unwrap().unwrap().id, "2");
        assert!(store.delete("2").await.unwrap().is_none());

        let ids: Vec<_> = store.list().await.unwrap().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
