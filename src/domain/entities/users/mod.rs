//! Users Entity Module
//!
//! 사용자 엔티티와 생성/수정에 사용하는 값 타입을 포함합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{NewUser, User};
//!
//! let user = User::create(NewUser { name, email, date_of_birth });
//! ```

pub mod user;

pub use user::{NewUser, User, UserChanges};
