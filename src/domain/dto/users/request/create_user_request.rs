//! 사용자 생성 요청 DTO
//!
//! `POST /user` 본문을 표현합니다. 세 필드 모두 필수이며 빈 문자열은
//! 누락과 동일하게 취급됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::string_or_none;

/// 사용자 생성 요청
///
/// ```json
/// {
///   "name": "Jane Doe",
///   "email": "jane@example.com",
///   "dateOfBirth": "1990-05-17T10:00:00.000+02:00"
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(required, length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(required, length(min = 1, message = "email must not be empty"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(required, length(min = 1, message = "dateOfBirth must not be empty"))]
    pub date_of_birth: Option<String>,
}
