//! # 요청 검증
//!
//! 요청 DTO를 서비스 계층이 바로 쓸 수 있는 값으로 변환합니다.
//! 검증은 저장소 변경 이전에 모두 끝나므로 실패한 요청은 아무 것도 기록하지 않습니다.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::entities::users::user::NewUser;
use crate::utils::date_utils::parse_timestamp;

/// 생성 요청을 검증합니다.
///
/// # 반환값
///
/// * `Ok(NewUser)` - 세 필드가 모두 있고 날짜가 유효한 경우
/// * `Err(AppError::MissingFields)` - name/email/dateOfBirth 중 누락 또는 빈 값
/// * `Err(AppError::InvalidDate)` - dateOfBirth 파싱 실패
pub fn validate_create(request: CreateUserRequest) -> Result<NewUser, AppError> {
    request.validate().map_err(|_| AppError::MissingFields)?;

    let CreateUserRequest {
        name: Some(name),
        email: Some(email),
        date_of_birth: Some(date_of_birth),
    } = request
    else {
        return Err(AppError::MissingFields);
    };

    let date_of_birth = parse_timestamp(&date_of_birth).ok_or(AppError::InvalidDate)?;

    Ok(NewUser { name, email, date_of_birth })
}

/// 선택적 날짜 값을 검증합니다.
///
/// 값이 없으면 `Ok(None)`으로 "기존 값 유지"를 뜻합니다.
/// 값이 있는데 해석할 수 없을 때만 `InvalidDate`를 반환합니다.
pub fn validate_date(value: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) => parse_timestamp(raw).map(Some).ok_or(AppError::InvalidDate),
    }
}
