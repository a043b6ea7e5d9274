//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 계약을 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user_request.rs   # POST /user
//! │   └── update_user_request.rs   # PUT /user/{id}
//! └── response/
//!     └── user_response.rs         # 사용자 표현 및 data 페이로드
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
