//! 사용자 수정 요청 DTO
//!
//! `PUT /user/{id}` 본문입니다. 병합(merge) 의미를 가지므로 모든 필드가 선택적이며,
//! 없거나 빈 값인 필드는 기존 값을 유지합니다.

use serde::{Deserialize, Serialize};

use super::string_or_none;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "string_or_none")]
    pub date_of_birth: Option<String>,
}

impl UpdateUserRequest {
    /// 빈 문자열을 제외한 이름 값
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    /// 빈 문자열을 제외한 이메일 값
    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    /// 빈 문자열을 제외한 생년월일 원문
    pub fn date_of_birth(&self) -> Option<&str> {
        non_empty(&self.date_of_birth)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
