//! # HTTP Request Handlers Module
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   routes - RequestRouter (메서드/경로 분기)
//! ├─────────────────────────────────────────────┤
//!   handlers (이 모듈) - 연산 실행, 응답 렌더링     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   repositories - UserStore                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! - [`users`]: 다섯 가지 사용자 연산 핸들러
//! - [`response`]: 성공/에러 응답 봉투 렌더링

pub mod response;
pub mod users;
