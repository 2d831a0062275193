//! API 라우트 설정 모듈
//!
//! 사용자 CRUD 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET` | `/health` | [`health_check`] |
//! | `GET` | `/users` | `handlers::users::list_users` |
//! | `POST` | `/users` | `handlers::users::create_user` |
//! | `GET` | `/users/{user_id}` | `handlers::users::get_user` |
//!
//! `GET` 경로는 같은 핸들러로 `HEAD`에도 응답합니다.
//!
//! 각 경로는 `web::resource`로 등록되며, 메서드가 맞지 않으면 리소스의
//! default service가 405를, 경로 자체가 없으면 앱의 default service가 404를 반환합니다.
//!
//! `UserService`는 이 모듈이 아닌 호출자(`main` 또는 테스트)가 `app_data`로 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(UserService::new(user_repo)))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};
use crate::domain::dto::health::HealthResponse;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(
        web::resource("/health")
            .route(web::get().to(health_check))
            .route(web::head().to(health_check))
            .default_service(web::to(handlers::fallback::method_not_allowed)),
    );

    configure_user_routes(cfg);

    cfg.default_service(web::to(handlers::fallback::endpoint_not_found));
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Examples
///
/// ```bash
/// # 목록
/// curl http://localhost:5000/users
///
/// # 생성
/// curl -X POST http://localhost:5000/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Idaya Seidu","email":"iseiduu@andrew.cmu.edu"}'
///
/// # 단건 조회
/// curl http://localhost:5000/users/5f0c6c4e-2b8a-4d53-9a51-0f8f3c1c9b1e
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(handlers::users::list_users))
            .route(web::head().to(handlers::users::list_users))
            .route(web::post().to(handlers::users::create_user))
            .default_service(web::to(handlers::fallback::method_not_allowed)),
    );

    cfg.service(
        web::resource("/users/{user_id}")
            .route(web::get().to(handlers::users::get_user))
            .route(web::head().to(handlers::users::get_user))
            .default_service(web::to(handlers::fallback::method_not_allowed)),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 실패 경로는 없습니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::http::{Method, StatusCode};
    use actix_web::{middleware, test, App};
    use serde_json::{json, Value};
    use crate::repositories::users::user_repo::UserRepository;
    use crate::services::users::user_service::UserService;

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(UserService::new(Arc::new(UserRepository::new()))))
                    .wrap(middleware::NormalizePath::trim())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = init_app!();

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn test_unknown_endpoint_is_404() {
        let app = init_app!();

        for uri in ["/", "/nope", "/users/abc/extra", "/api/v1/users"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri: {}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Endpoint not found" }));
        }
    }

    #[actix_web::test]
    async fn test_wrong_method_on_known_path_is_405() {
        let app = init_app!();

        let requests = [
            test::TestRequest::delete().uri("/users"),
            test::TestRequest::put().uri("/users"),
            test::TestRequest::post().uri("/users/some-id"),
            test::TestRequest::delete().uri("/users/some-id"),
            test::TestRequest::post().uri("/health"),
        ];

        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "error": "Method not allowed" }));
        }
    }

    #[actix_web::test]
    async fn test_head_is_answered_on_get_routes() {
        let app = init_app!();
        let head = |uri: &str| test::TestRequest::default().method(Method::HEAD).uri(uri).to_request();

        for uri in ["/health", "/users"] {
            let resp = test::call_service(&app, head(uri)).await;
            assert_eq!(resp.status(), StatusCode::OK, "uri: {}", uri);
        }

        let resp = test::call_service(&app, head("/users/non-existent-id")).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_trailing_slash_is_normalized() {
        let app = init_app!();

        let resp = test::call_service(&app, test::TestRequest::get().uri("/users/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_apps_do_not_share_stores() {
        let first = init_app!();
        let second = init_app!();

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": "Only Here", "email": "here@example.com" }))
            .to_request();
        test::call_service(&first, req).await;

        let list: Value =
            test::call_and_read_body_json(&second, test::TestRequest::get().uri("/users").to_request()).await;
        assert_eq!(list["count"], 0);
    }
}
