//! # Domain Module
//!
//! 사용자 리소스의 도메인 타입을 정의합니다.
//!
//! ```text
//! domain/
//! ├── entities/     ← 저장소에 영속되는 엔티티
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```

pub mod entities;
pub mod dto;

pub use entities::users::user::{NewUser, User, UserChanges};
