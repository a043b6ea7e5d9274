//! User Entity Implementation
//!
//! 저장소에 보관되는 사용자 엔티티입니다.
//! `id`는 생성 시점에 한 번 발급되며 이후 절대 변경되지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 저장소에 영속되는 사용자 레코드
///
/// MongoDB 문서와 동일한 형태로 직렬화되므로 `id`는 `_id`로 저장됩니다.
/// 클라이언트에게는 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로
/// 변환되어 노출됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub date_of_birth: DateTime<Utc>,
}

/// 검증을 통과한 신규 사용자 데이터 (아직 ID 없음)
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub date_of_birth: DateTime<Utc>,
}

/// 부분 수정 요청에서 추출한 변경 필드 집합
///
/// `None`인 필드는 기존 값을 유지합니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
}

impl User {
    /// 새 UUID v4 식별자를 발급하여 사용자를 생성합니다.
    pub fn create(new_user: NewUser) -> Self {
        let NewUser { name, email, date_of_birth } = new_user;

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            date_of_birth,
        }
    }

    /// 변경 필드를 병합한 새 레코드를 반환합니다.
    ///
    /// 지정된 필드만 덮어쓰고 나머지는 현재 값을 유지합니다. `id`는 보존됩니다.
    pub fn merged_with(&self, changes: UserChanges) -> Self {
        Self {
            id: self.id.clone(),
            name: changes.name.unwrap_or_else(|| self.name.clone()),
            email: changes.email.unwrap_or_else(|| self.email.clone()),
            date_of_birth: changes.date_of_birth.unwrap_or(self.date_of_birth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> User {
        User::create(NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            date_of_birth: Utc.with_ymd_and_hms(1815, 12, 10, 0, 0, 0).unwrap(),
        })
    }

    #[test]
    fn test_create_assigns_distinct_ids() {
        assert_ne!(sample().id, sample().id);
    }

    #[test]
    fn test_merge_keeps_omitted_fields() {
        let user = sample();
        let merged = user.merged_with(UserChanges {
            name: Some("Augusta".to_string()),
            ..Default::default()
        });

        assert_eq!(merged.id, user.id);
        assert_eq!(merged.name, "Augusta");
        assert_eq!(merged.email, user.email);
        assert_eq!(merged.date_of_birth, user.date_of_birth);
    }

    #[test]
    fn test_domain_reexports_entity() {
        let user: crate::domain::User = sample();
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn test_entity_serializes_id_as_document_key() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("_id").is_some());
        assert!(value.get("id").is_none());
    }
}
