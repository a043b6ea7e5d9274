//! 사용자 관리 서비스 모듈
//!
//! 생성, 목록, 단건 조회, 부분 수정, 삭제 다섯 가지 연산을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let created = user_service.create_user(request).await?;
//! let updated = user_service.update_user(&created.id, changes).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
