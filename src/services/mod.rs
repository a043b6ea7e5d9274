//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 싱글톤이 아니라 생성 시 저장소를 주입받아 `web::Data`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::UserService;
//! use crate::repositories::InMemoryUserStore;
//!
//! let user_service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let user = user_service.get_user_by_id("...").await?;
//! ```

pub mod users;
