//! 사용자 저장소 구현 모듈
//!
//! 설정(`USER_STORE`)에 따라 둘 중 하나가 [`UserStore`](crate::repositories::UserStore)로 사용됩니다.

pub mod memory_store;
pub mod mongo_store;
