//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩, 저장소 백엔드, Rate Limiting 설정을 관리합니다.
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` | `8000` |
//! | `SERVER_WORKERS` | `4` |
//! | `USER_STORE` | `memory` (`mongodb` 선택 가능) |
//! | `MONGODB_URI` | `mongodb://localhost:27017` |
//! | `DATABASE_NAME` | `user_service` |
//! | `RATE_LIMIT_PER_SECOND` | `100` |
//! | `RATE_LIMIT_BURST_SIZE` | `200` |

use std::env;
use std::str::FromStr;

use log::error;

fn env_source(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// 값을 파싱하고, 실패하면 에러를 기록한 뒤 기본값을 사용합니다.
fn parse_or<T, F>(source: &F, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match source(key) {
        None => default,
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_source(env_source)
    }

    pub fn from_source<F>(source: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: source("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&source, "SERVER_PORT", 8000),
            workers: parse_or(&source, "SERVER_WORKERS", 4),
        }
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 사용자 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// 프로세스 메모리 (재시작 시 초기화)
    Memory,
    /// MongoDB 컬렉션
    MongoDb,
}

impl StoreBackend {
    /// 대소문자 무관. 알 수 없는 값은 `Memory`로 처리합니다.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mongodb" | "mongo" => StoreBackend::MongoDb,
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            other => {
                error!("알 수 없는 USER_STORE 값: {}. memory 저장소 사용", other);
                StoreBackend::Memory
            }
        }
    }
}

/// 저장소 설정
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub mongodb_uri: String,
    pub database_name: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self::from_source(env_source)
    }

    pub fn from_source<F>(source: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            backend: source("USER_STORE")
                .map(|s| StoreBackend::parse(&s))
                .unwrap_or(StoreBackend::Memory),
            mongodb_uri: source("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: source("DATABASE_NAME").unwrap_or_else(|| "user_service".to_string()),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_env() -> Self {
        Self::from_source(env_source)
    }

    pub fn from_source<F>(source: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            per_second: parse_or(&source, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or(&source, "RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}
