//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`date_utils`] - ISO-8601 계열 날짜 문자열 파싱
//! - [`validation`] - 생성/수정 요청 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::validation::{validate_create, validate_date};
//!
//! let new_user = validate_create(request)?;
//! let dob = validate_date(update.date_of_birth())?;
//! ```

pub mod date_utils;
pub mod validation;
