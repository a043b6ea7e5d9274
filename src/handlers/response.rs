//! # Response Writer
//!
//! 처리 결과와 에러를 공통 JSON 봉투로 렌더링합니다.
//!
//! ```json
//! { "status": "Created", "data": { "user": { ... } } }
//! { "status": "Bad Request", "description": "Invalid date format!" }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::dto::envelope::{ErrorEnvelope, SuccessEnvelope};

/// 상태 코드의 표준 사유 구문 (`200` → `"OK"`)
fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

/// 성공 응답을 `{ status, data }` 형태로 렌더링합니다.
pub fn respond_with_json<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status).json(SuccessEnvelope {
        status: reason_phrase(status),
        data,
    })
}

/// 에러 응답을 `{ status, description }` 형태로 렌더링합니다.
pub fn respond_with_error(status: StatusCode, description: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorEnvelope {
        status: reason_phrase(status),
        description: description.to_string(),
    })
}
