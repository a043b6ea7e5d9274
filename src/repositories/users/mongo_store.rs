//! MongoDB 사용자 저장소
//!
//! `users` 컬렉션에 문서 하나당 사용자 하나를 저장합니다. 문서의 `_id`가 사용자 ID입니다.
//! 이메일 고유성은 `email_unique` 인덱스로 데이터베이스가 원자적으로 보장하며,
//! 중복 키 에러(11000)는 `AppError::ConflictError`로 변환됩니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::repositories::UserStore;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct MongoUserStore {
    db: Database,
}

impl MongoUserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 이메일 유니크 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(database_error)?;

        log::info!("📇 {}.{} 인덱스 확인 완료", self.db.database_name(), COLLECTION_NAME);
        Ok(())
    }
}

fn is_duplicate_key(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn database_error(error: MongoError) -> AppError {
    AppError::DatabaseError(error.to_string())
}

/// 쓰기 에러 중 중복 키는 충돌로, 나머지는 데이터베이스 에러로 변환합니다.
fn write_error(error: MongoError) -> AppError {
    if is_duplicate_key(&error) {
        AppError::duplicate_email()
    } else {
        database_error(error)
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(database_error)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(database_error)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "$natural": 1 })
            .await
            .map_err(database_error)?;

        cursor.try_collect().await.map_err(database_error)
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        self.collection()
            .insert_one(&user)
            .await
            .map_err(write_error)?;

        Ok(user)
    }

    async fn replace(&self, user: User) -> AppResult<Option<User>> {
        let result = self
            .collection()
            .replace_one(doc! { "_id": user.id.as_str() }, &user)
            .await
            .map_err(write_error)?;

        if result.matched_count == 0 {
            return Ok(None);
        }

        Ok(Some(user))
    }

    async fn delete(&self, id: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one_and_delete(doc! { "_id": id })
            .await
            .map_err(database_error)
    }
}
