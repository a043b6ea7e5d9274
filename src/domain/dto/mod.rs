//! # Data Transfer Objects Module
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 데이터 구조입니다.
//!
//! - [`envelope`]: 모든 응답이 공유하는 `{ status, data | description }` 봉투
//! - [`users`]: 사용자 요청/응답 DTO

pub mod envelope;
pub mod users;

pub use envelope::*;
pub use users::*;
