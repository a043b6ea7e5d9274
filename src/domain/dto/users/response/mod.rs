//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 노출할 JSON 표현으로 변환합니다.
//! 각 연산의 `data` 페이로드는 컬렉션 이름을 키로 가집니다.
//!
//! | 연산 | `data` |
//! |------|--------|
//! | 생성/조회/수정 | `{ "user": {...} }` |
//! | 목록 | `{ "users": [...] }` |
//! | 삭제 | `{ "deletedUser": {...} }` |

pub mod user_response;

pub use user_response::*;
