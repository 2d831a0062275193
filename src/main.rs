//! 사용자 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 메모리 저장소와 서비스를 생성해 모든 워커에 주입합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{info, warn};
use user_service_backend::config::{CorsConfig, Environment, ServerConfig};
use user_service_backend::repositories::users::user_repo::UserRepository;
use user_service_backend::routes::configure_all_routes;
use user_service_backend::services::users::user_service::UserService;
use user_service_backend::utils::display_terminal::print_boxed_title;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file_status = load_env_file();
    init_logging();

    print_boxed_title("User Service");
    info!("🚀 사용자 서비스 시작중... (environment: {})", Environment::current().as_str());
    match env_file_status {
        Ok(source) => info!("{} 파일 로드 됨", source),
        Err(reason) => warn!("{}", reason),
    }

    // 저장소와 서비스를 명시적으로 생성 (프로세스 수명 동안 유지)
    let user_repo = Arc::new(UserRepository::new());
    let user_service = web::Data::new(UserService::new(user_repo));

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
///
/// # Examples
///
/// ```rust,ignore
/// // 기본값으로 0.0.0.0:5000에서 실행됩니다
/// // Health check: http://127.0.0.1:5000/health
/// // Users API:    http://127.0.0.1:5000/users
/// ```
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    let allowed_origins = CorsConfig::allowed_origins();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/users", bind_address);
    info!("🛡️ CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        let cors = configure_cors(&allowed_origins);

        App::new()
            .app_data(user_service.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거가 초기화되기 전에 호출되므로 결과를 반환하고, 로깅은 호출자가 합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            return dotenv()
                .map(|path| path.display().to_string())
                .map_err(|e| format!("기본 .env 파일 로드 실패: {}", e));
        }
    };

    dotenv::from_filename(filename)
        .map(|_| filename.to_string())
        .map_err(|e| format!("{} 파일 로드 실패 (profile: {}): {}", filename, profile, e))
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// # Examples
///
/// ```bash
/// # 저장소 조회 로그까지 보기
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=info,user_service_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// `CORS_ALLOWED_ORIGINS` 환경 변수 또는 로컬 개발용 기본 Origin 목록
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "HEAD", "POST", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
