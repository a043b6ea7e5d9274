//! # 사용자 관련 요청 DTO 모듈
//!
//! 요청 본문을 연산별 구조체로 변환합니다. 모든 필드는 타입 수준에서
//! 선택적(`Option`)이며, 문자열이 아닌 JSON 값은 누락된 것으로 취급합니다.
//! 실제 검증은 [`crate::utils::validation`]에서 수행됩니다.

pub mod create_user_request;
pub mod update_user_request;

pub use create_user_request::CreateUserRequest;
pub use update_user_request::UpdateUserRequest;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// 문자열 값만 `Some`으로, 그 외 JSON 값(null, 숫자, 객체 등)은 `None`으로 역직렬화합니다.
pub(crate) fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
