//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 환경 변수에서 읽으며, `main`에서 `PROFILE`에 맞는 dotenv 파일을
//! 먼저 로드합니다. 각 설정 타입은 `from_env()`와 테스트용 `from_source()`를 가집니다.

pub mod data_config;

pub use data_config::*;
