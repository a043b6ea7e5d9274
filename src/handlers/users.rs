//! # User Management HTTP Handlers
//!
//! 라우터가 선택한 사용자 연산을 실행하고 결과를 응답 봉투로 변환합니다.
//!
//! | 메서드 | 경로 | 핸들러 | 상태 코드 |
//! |--------|------|--------|-----------|
//! | `POST` | `/user` | [`create_user`] | 201 Created |
//! | `GET` | `/user` | [`list_users`] | 200 OK |
//! | `GET` | `/user/{id}` | [`get_user`] | 200 OK |
//! | `PUT` | `/user/{id}` | [`update_user`] | 200 OK |
//! | `DELETE` | `/user/{id}` | [`delete_user`] | 200 OK |
//!
//! 본문은 라우터가 이미 JSON으로 파싱한 값(`Option<Value>`)으로 전달됩니다.
//! 본문이 없으면 빈 요청으로 취급합니다.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{DeletedUserPayload, UserListPayload, UserPayload};
use crate::handlers::response::respond_with_json;
use crate::services::users::UserService;

/// 파싱된 본문을 연산별 요청 타입으로 변환합니다.
///
/// 객체가 아닌 본문(배열, 숫자 등)은 모든 필드가 없는 요청과 같습니다.
fn request_from_body<T>(body: Option<Value>) -> T
where
    T: DeserializeOwned + Default,
{
    match body {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    }
}

/// 사용자 생성 핸들러
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "status": "Created",
///   "data": {
///     "user": {
///       "id": "3f2c...",
///       "name": "Jane Doe",
///       "email": "jane@example.com",
///       "dateOfBirth": "1990-05-17T08:00:00.000Z"
///     }
///   }
/// }
/// ```
///
/// ## 실패 사례 (400 Bad Request)
/// - `Missing request body attributes!`
/// - `Invalid date format!`
/// - `User with same email already exists`
pub async fn create_user(
    service: &UserService,
    body: Option<Value>,
) -> Result<HttpResponse, AppError> {
    let request: CreateUserRequest = request_from_body(body);
    let user = service.create_user(request).await?;

    Ok(respond_with_json(StatusCode::CREATED, UserPayload::from(user)))
}

/// 사용자 목록 핸들러 (페이징 없음)
pub async fn list_users(service: &UserService) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(respond_with_json(StatusCode::OK, UserListPayload::from(users)))
}

/// 사용자 조회 핸들러
///
/// 없으면 404 `User with ID {id} not found!`
pub async fn get_user(service: &UserService, user_id: &str) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(user_id).await?;

    Ok(respond_with_json(StatusCode::OK, UserPayload::from(user)))
}

/// 사용자 부분 수정 핸들러
///
/// ```bash
/// curl -X PUT http://localhost:8000/user/3f2c... \
///   -H "Content-Type: application/json" \
///   -d '{ "name": "New Name" }'
/// ```
pub async fn update_user(
    service: &UserService,
    user_id: &str,
    body: Option<Value>,
) -> Result<HttpResponse, AppError> {
    let request: UpdateUserRequest = request_from_body(body);
    let user = service.update_user(user_id, request).await?;

    Ok(respond_with_json(StatusCode::OK, UserPayload::from(user)))
}

/// 사용자 삭제 핸들러
///
/// 삭제된 레코드를 `deletedUser`로 돌려줍니다.
pub async fn delete_user(service: &UserService, user_id: &str) -> Result<HttpResponse, AppError> {
    let user = service.delete_user(user_id).await?;

    Ok(respond_with_json(StatusCode::OK, DeletedUserPayload::from(user)))
}
