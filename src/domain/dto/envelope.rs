//! 응답 봉투(envelope)
//!
//! 성공 시 `{ "status": "OK", "data": ... }`, 실패 시
//! `{ "status": "Not Found", "description": "..." }` 형태를 가집니다.
//! `status`는 HTTP 상태 코드의 표준 사유 구문(reason phrase)입니다.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope<T> {
    pub status: String,
    pub data: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub description: String,
}
