//! # Application Error Handling System
//!
//! 사용자 API 전반에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! 모든 에러가 동일한 JSON 봉투(envelope)로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `MalformedJson` | 400 Bad Request | 본문이 있으나 JSON 파싱 실패 |
//! | `UnreadableBody` | 400 Bad Request | 본문 크기 초과 또는 읽기 실패 |
//! | `MissingFields` | 400 Bad Request | 생성 요청의 필수 필드 누락 |
//! | `InvalidDate` | 400 Bad Request | 날짜 필드 파싱 실패 |
//! | `ConflictError` | 400 Bad Request | 이메일 중복 |
//! | `NotFound` | 404 Not Found | 사용자 없음, 라우트 불일치 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 드라이버 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "status": "Not Found",
//!   "description": "User with ID 42 not found!"
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::handlers::response::respond_with_error;

/// 애플리케이션 전역 에러 타입
///
/// `Display` 결과가 그대로 응답의 `description` 필드가 됩니다.
/// 검증 에러는 모두 저장소 변경 이전에 발생하므로 부분 쓰기가 남지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문이 비어있지 않지만 유효한 JSON이 아님 (400)
    #[error("Bad request body: request body must be valid JSON!")]
    MalformedJson,

    /// 요청 본문을 끝까지 읽지 못함 (크기 초과, 연결 끊김 등) (400)
    #[error("Bad request body: {0}")]
    UnreadableBody(String),

    /// 생성 요청에서 name/email/dateOfBirth 중 하나 이상이 없거나 비어있음 (400)
    #[error("Missing request body attributes!")]
    MissingFields,

    /// 날짜 값이 존재하지만 달력상 유효한 시각으로 해석되지 않음 (400)
    #[error("Invalid date format!")]
    InvalidDate,

    /// 다른 사용자가 이미 같은 이메일을 사용 중 (400)
    ///
    /// 원래 API 계약상 409가 아닌 400으로 응답합니다.
    #[error("{0}")]
    ConflictError(String),

    /// 사용자 또는 라우트를 찾을 수 없음 (404)
    #[error("{0}")]
    NotFound(String),

    /// 저장소 드라이버 에러 (500)
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(&user).await
    ///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 이메일 중복 에러를 생성합니다.
    pub fn duplicate_email() -> Self {
        AppError::ConflictError("User with same email already exists".to_string())
    }

    /// 특정 ID의 사용자가 없을 때의 에러를 생성합니다.
    pub fn user_not_found(id: &str) -> Self {
        AppError::NotFound(format!("User with ID {} not found!", id))
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedJson
            | AppError::UnreadableBody(_)
            | AppError::MissingFields
            | AppError::InvalidDate
            | AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 500 계열은 원인 추적을 위해 `error` 레벨로 기록합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        respond_with_error(status, &self.to_string())
    }
}

/// `Result<T, AppError>`의 축약형
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러에 문맥 정보를 덧붙여 `AppError::InternalError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
