//! # Domain Entities Module
//!
//! 저장소(`UserStore`)와 직접 주고받는 엔티티를 정의합니다.
//! 인메모리 저장소와 MongoDB 문서가 동일한 구조를 공유합니다.

pub mod users;

pub use users::*;
