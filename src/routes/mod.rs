//! # Request Router
//!
//! 모든 요청은 actix-web의 기본 서비스(default service)로 들어와 [`RequestRouter`]가
//! 메서드와 경로를 보고 핸들러를 선택합니다.
//!
//! ## 매칭 규칙 (순서대로)
//!
//! 1. 본문이 비어있지 않으면 JSON으로 파싱, 실패 시 400 (핸들러 실행 안 함)
//! 2. `/user` → `POST` 생성, `GET` 목록
//! 3. `/user/{id}` (슬래시 없는 비어있지 않은 세그먼트 하나) → `GET` 조회, `PUT` 수정, `DELETE` 삭제
//! 4. 그 외 → 404 `Cannot {METHOD} {path}`
//!
//! 경로는 쿼리 문자열을 제외한 URL 경로입니다.

use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::core::errors::AppError;
use crate::handlers::users;
use crate::services::users::UserService;

const COLLECTION_PATH: &str = "/user";

/// 요청 본문 최대 크기 (16 MiB)
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// 요청 하나에 대한 라우팅 문맥
///
/// 라우터가 요청 처리 동안만 소유하며 저장되거나 공유되지 않습니다.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub raw_body: web::Bytes,
}

impl RequestContext {
    pub fn new(method: Method, path: impl Into<String>, raw_body: impl Into<web::Bytes>) -> Self {
        Self {
            method,
            path: path.into(),
            raw_body: raw_body.into(),
        }
    }

    /// 본문을 JSON으로 파싱합니다. 빈 본문은 `Ok(None)`입니다.
    pub fn parsed_body(&self) -> Result<Option<Value>, AppError> {
        if self.raw_body.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&self.raw_body)
            .map(Some)
            .map_err(|_| AppError::MalformedJson)
    }
}

/// 라우팅 결과로 선택된 연산
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CreateUser,
    ListUsers,
    GetUser(String),
    UpdateUser(String),
    DeleteUser(String),
}

pub struct RequestRouter;

impl RequestRouter {
    /// 메서드와 경로에 해당하는 연산을 찾습니다. 일치하는 것이 없으면 `None`.
    pub fn resolve(method: &Method, path: &str) -> Option<Route> {
        if path == COLLECTION_PATH {
            return match *method {
                Method::POST => Some(Route::CreateUser),
                Method::GET => Some(Route::ListUsers),
                _ => None,
            };
        }

        let user_id = Self::user_id(path)?;

        match *method {
            Method::GET => Some(Route::GetUser(user_id.to_string())),
            Method::PUT => Some(Route::UpdateUser(user_id.to_string())),
            Method::DELETE => Some(Route::DeleteUser(user_id.to_string())),
            _ => None,
        }
    }

    /// `/user/{id}`에서 `{id}`를 추출합니다.
    fn user_id(path: &str) -> Option<&str> {
        path.strip_prefix(COLLECTION_PATH)?
            .strip_prefix('/')
            .filter(|segment| !segment.is_empty() && !segment.contains('/'))
    }

    /// 요청을 처리하고 응답을 반환합니다.
    pub async fn dispatch(
        context: RequestContext,
        service: &UserService,
    ) -> Result<HttpResponse, AppError> {
        let body = context.parsed_body()?;

        let route = Self::resolve(&context.method, &context.path).ok_or_else(|| {
            AppError::NotFound(format!("Cannot {} {}", context.method, context.path))
        })?;

        log::debug!("{} {} → {:?}", context.method, context.path, route);

        match route {
            Route::CreateUser => users::create_user(service, body).await,
            Route::ListUsers => users::list_users(service).await,
            Route::GetUser(id) => users::get_user(service, &id).await,
            Route::UpdateUser(id) => users::update_user(service, &id, body).await,
            Route::DeleteUser(id) => users::delete_user(service, &id).await,
        }
    }
}

/// 본문 추출 실패를 응답 봉투로 표현할 수 있는 에러로 바꿉니다.
fn read_body(body: Result<web::Bytes, actix_web::Error>) -> Result<web::Bytes, AppError> {
    body.map_err(|e| {
        log::warn!("요청 본문 읽기 실패: {}", e);
        AppError::UnreadableBody(e.to_string())
    })
}

/// actix-web 진입점: 버퍼링된 요청을 [`RequestRouter`]로 넘깁니다.
async fn dispatch(
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let body = read_body(body)?;
    let context = RequestContext::new(req.method().clone(), req.path(), body);

    RequestRouter::dispatch(context, service.get_ref()).await
}

/// 모든 요청을 라우터로 보내도록 설정합니다.
///
/// 본문은 [`MAX_BODY_BYTES`]까지 버퍼링합니다.
///
/// ```rust,ignore
/// App::new()
///     .app_data(web::Data::new(user_service))
///     .configure(configure_all_routes)
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .default_service(web::to(dispatch));
}
