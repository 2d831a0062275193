//! 사용자 생성 요청 DTO
//!
//! `POST /users` 요청 본문을 검증된 요청 타입으로 변환합니다.
//! 본문은 먼저 임의의 JSON 값으로 파싱된 뒤 이 모듈에서 검사됩니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::is_valid_string;

pub const BODY_NOT_OBJECT_MESSAGE: &str = "Request body must be a JSON object";
pub const NAME_REQUIRED_MESSAGE: &str = "Name is required and cannot be empty";
pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required and cannot be empty";
pub const EMAIL_FORMAT_MESSAGE: &str = "Invalid email format";

/// 검증 실패 메시지를 고를 때의 필드 우선순위
const FIELD_ORDER: [&str; 2] = ["name", "email"];

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// 이메일 규칙은 `@` 포함 여부 확인뿐이며,
/// 중복 여부는 검사하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름 (trim 후 비어 있지 않아야 함)
    #[validate(custom(function = "validate_name"))]
    pub name: String,

    /// 이메일 주소 (trim 후 비어 있지 않고 `@` 포함)
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
}

impl CreateUserRequest {
    /// 디코딩된 JSON 본문에서 요청을 만들고 검증합니다.
    ///
    /// 키가 없거나 값이 문자열이 아닌 필드는 빈 값으로 취급합니다.
    /// 여러 규칙이 실패하면 이름 → 이메일 순서로 첫 번째 실패 사유를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserRequest)` - 검증을 통과한 요청 (값은 아직 trim 전)
    /// * `Err(AppError::ValidationError)` - 사람이 읽을 수 있는 실패 사유
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({ "name": "X", "email": "noatsign" });
    /// let err = CreateUserRequest::from_json(&body).unwrap_err();
    /// assert_eq!(err.to_string(), "Invalid email format");
    /// ```
    pub fn from_json(body: &Value) -> AppResult<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| AppError::ValidationError(BODY_NOT_OBJECT_MESSAGE.to_string()))?;

        let string_field = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let request = Self {
            name: string_field("name"),
            email: string_field("email"),
        };

        request
            .validate()
            .map_err(|errors| AppError::ValidationError(first_failure(&errors)))?;

        Ok(request)
    }
}

/// 필드 우선순위에 따라 첫 번째 검증 실패 메시지를 고릅니다.
fn first_failure(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .filter_map(|entries| entries.first())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if !is_valid_string(name) {
        return Err(ValidationError::new("name_required")
            .with_message(NAME_REQUIRED_MESSAGE.into()));
    }
    Ok(())
}

fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !is_valid_string(email) {
        return Err(ValidationError::new("email_required")
            .with_message(EMAIL_REQUIRED_MESSAGE.into()));
    }

    if !email.contains('@') {
        return Err(ValidationError::new("email_format")
            .with_message(EMAIL_FORMAT_MESSAGE.into()));
    }

    Ok(())
}
