//! # 문자열 유틸리티
//!
//! 요청 필드 검증과 엔티티 생성에서 공통으로 쓰는 문자열 함수들입니다.

/// 문자열 정리 (trim 후 반환)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::trim_string;
///
/// assert_eq!(trim_string("  Hello World  "), "Hello World");
/// ```
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Hello"), true);
/// assert_eq!(is_valid_string("   "), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `application/json` 또는 `application/*+json` 미디어 타입인지 확인
///
/// 파라미터(`; charset=utf-8`)는 무시하며 대소문자를 구분하지 않습니다.
pub fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_string() {
        assert_eq!(trim_string("  Alice  "), "Alice");
        assert_eq!(trim_string("\tbob@example.com\n"), "bob@example.com");
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("x"));
        assert!(is_valid_string("  x  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string(" \t\n "));
    }

    #[test]
    fn test_is_json_media_type() {
        assert!(is_json_media_type("application/json"));
        assert!(is_json_media_type("application/json; charset=utf-8"));
        assert!(is_json_media_type("Application/JSON"));
        assert!(is_json_media_type("application/merge-patch+json"));
        assert!(!is_json_media_type("text/plain"));
        assert!(!is_json_media_type("application/x-www-form-urlencoded"));
        assert!(!is_json_media_type(""));
    }
}
