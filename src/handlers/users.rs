//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users` | 사용자 목록 조회 | 200 OK |
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created / 400 |
//! | `GET` | `/users/{user_id}` | 사용자 조회 | 200 OK / 404 |
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 `{"error": ...}` 응답이 됩니다.
//! 서비스는 `web::Data<UserService>`로 주입받습니다.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use log::warn;
use serde_json::Value;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::CreateUserRequest;
use crate::services::users::user_service::UserService;
use crate::utils::string_utils::is_json_media_type;

/// JSON 파싱 실패 또는 Content-Type 누락 시 응답 메시지
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON or Content-Type header missing";

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "users": [
///     {
///       "id": "5f0c6c4e-2b8a-4d53-9a51-0f8f3c1c9b1e",
///       "name": "Idaya Seidu",
///       "email": "iseiduu@andrew.cmu.edu",
///       "created_at": "2024-01-01T00:00:00Z"
///     }
///   ],
///   "count": 1
/// }
/// ```
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let response = service.list_users()?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Idaya Seidu",
///   "email": "iseiduu@andrew.cmu.edu"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "5f0c6c4e-2b8a-4d53-9a51-0f8f3c1c9b1e",
///   "name": "Idaya Seidu",
///   "email": "iseiduu@andrew.cmu.edu",
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 실패 사례 (400 Bad Request)
///
/// - JSON이 아니거나 Content-Type이 JSON이 아님: `Invalid JSON or Content-Type header missing`
/// - 본문이 객체가 아님: `Request body must be a JSON object`
/// - 이름 누락/공백: `Name is required and cannot be empty`
/// - 이메일 누락/공백: `Email is required and cannot be empty`
/// - 이메일에 `@` 없음: `Invalid email format`
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:5000/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Idaya Seidu","email":"iseiduu@andrew.cmu.edu"}'
/// ```
pub async fn create_user(
    req: HttpRequest,
    payload: web::Payload,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let body = read_body(payload).await?;
    let payload = parse_json_body(&req, &body)?;
    let request = CreateUserRequest::from_json(&payload)?;
    let response = service.create_user(request)?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// ## 사용자 없음 (404 Not Found)
/// ```json
/// { "error": "User not found" }
/// ```
pub async fn get_user(
    user_id: web::Path<String>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 요청 본문 스트림을 끝까지 읽습니다.
///
/// `web::Bytes` 추출기와 달리 크기 제한을 두지 않습니다.
/// 스트림이 중간에 끊기면 JSON 파싱 실패와 같은 400으로 처리합니다.
async fn read_body(mut payload: web::Payload) -> AppResult<web::BytesMut> {
    let mut body = web::BytesMut::new();

    while let Some(chunk) = payload.next().await {
        match chunk {
            Ok(chunk) => body.extend_from_slice(&chunk),
            Err(e) => {
                warn!("요청 본문 수신 실패: {}", e);
                return Err(AppError::InvalidJson(INVALID_JSON_MESSAGE.to_string()));
            }
        }
    }

    Ok(body)
}

/// Content-Type을 확인하고 본문을 임의의 JSON 값으로 파싱합니다.
///
/// JSON `null`은 본문이 없는 것으로 취급합니다.
fn parse_json_body(req: &HttpRequest, body: &[u8]) -> AppResult<Value> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    if !content_type.is_some_and(is_json_media_type) {
        warn!("JSON이 아닌 Content-Type으로 사용자 생성 요청: {:?}", content_type);
        return Err(AppError::InvalidJson(INVALID_JSON_MESSAGE.to_string()));
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => Err(AppError::InvalidJson(INVALID_JSON_MESSAGE.to_string())),
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("요청 본문 JSON 파싱 실패: {}", e);
            Err(AppError::InvalidJson(INVALID_JSON_MESSAGE.to_string()))
        }
    }
}
