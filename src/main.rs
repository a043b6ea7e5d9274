//! 사용자 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 저장소를 초기화한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use user_service_backend::config::{RateLimitConfig, ServerConfig, StoreBackend, StoreConfig};
use user_service_backend::core::errors::AppError;
use user_service_backend::db::Database;
use user_service_backend::repositories::{InMemoryUserStore, MongoUserStore, UserStore};
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_logging();
    load_env_file();

    info!("🚀 사용자 서비스 시작중...");

    let store = initialize_user_store(&StoreConfig::from_env())
        .await
        .map_err(io::Error::other)?;

    let user_service = web::Data::new(UserService::new(store));
    info!("✅ 사용자 저장소 준비 완료: {}", user_service.store_name());

    start_http_server(user_service, ServerConfig::from_env(), RateLimitConfig::from_env()).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅 미들웨어를 적용하고
/// 모든 요청을 `RequestRouter`로 보냅니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    user_service: web::Data<UserService>,
    server_config: ServerConfig,
    rate_limit_config: RateLimitConfig,
) -> io::Result<()> {
    let bind_address = server_config.bind_address();

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(server_config.workers)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 파일이 없으면 기록만 하고 프로세스 환경 변수를 그대로 사용합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정에 따라 사용자 저장소를 생성합니다
///
/// MongoDB를 선택한 경우 연결을 검증하고 이메일 유니크 인덱스를 생성합니다.
async fn initialize_user_store(config: &StoreConfig) -> Result<Arc<dyn UserStore>, AppError> {
    match config.backend {
        StoreBackend::Memory => {
            info!("🗂️ 인메모리 사용자 저장소 사용 (재시작 시 데이터가 초기화됩니다)");
            Ok(Arc::new(InMemoryUserStore::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::connect(config).await?;
            let store = MongoUserStore::new(database);
            store.ensure_indexes().await?;

            Ok(Arc::new(store))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드 개발 서버와 자체 서버 출처를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8000")
        .allowed_origin("http://127.0.0.1:8000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
