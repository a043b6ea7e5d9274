use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::entities::users::user::User;

/// 클라이언트에 노출되는 사용자 표현
///
/// ```json
/// {
///   "id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "dateOfBirth": "1990-05-17T08:00:00.000Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub date_of_birth: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email, date_of_birth } = user;

        Self { id, name, email, date_of_birth }
    }
}

/// 밀리초 정밀도의 RFC 3339 UTC 표기 (`1990-05-17T08:00:00.000Z`)
fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// 생성/조회/수정 응답의 `data` 페이로드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub user: UserResponse,
}

/// 목록 응답의 `data` 페이로드
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListPayload {
    pub users: Vec<UserResponse>,
}

/// 삭제 응답의 `data` 페이로드
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUserPayload {
    pub deleted_user: UserResponse,
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self { user: user.into() }
    }
}

impl From<Vec<User>> for UserListPayload {
    fn from(users: Vec<User>) -> Self {
        Self {
            users: users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

impl From<User> for DeletedUserPayload {
    fn from(user: User) -> Self {
        Self { deleted_user: user.into() }
    }
}
