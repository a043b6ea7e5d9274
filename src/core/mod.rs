//! # Core Module
//!
//! 서비스 전반에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 자동 응답 변환
//! - **ErrorContext**: 외부 에러를 문맥과 함께 `AppError`로 변환
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn find(id: &str) -> AppResult<User> {
//!     store.get(id).ok_or_else(|| AppError::user_not_found(id))
//! }
//! ```

pub mod errors;

pub use errors::*;
