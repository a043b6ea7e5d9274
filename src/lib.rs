//! 사용자 리소스 REST 서비스 백엔드
//!
//! 단일 리소스(User)의 생성, 목록, 조회, 부분 수정, 삭제를 제공하는 HTTP API입니다.
//! 저장소는 인메모리 또는 MongoDB 중에서 선택하며, 서비스에 주입됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  RequestRouter  │ ← 메서드/경로 분기, JSON 본문 파싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 연산 실행, 응답 봉투 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 고유성 검사, 병합
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← InMemoryUserStore / MongoUserStore
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use user_service_backend::repositories::InMemoryUserStore;
//! use user_service_backend::routes::configure_all_routes;
//! use user_service_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let app = App::new()
//!     .app_data(web::Data::new(service))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
