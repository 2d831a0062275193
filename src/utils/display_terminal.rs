//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 시작 배너와 `api_smoke` 바이너리의 시나리오 출력에 사용하는 함수들입니다.

/// 구분선 너비
const RULE_WIDTH: usize = 60;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("User Service");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                   User Service                   ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// Output:
/// ```text
/// → Step 3: Create a valid user
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("\n→ Step {}: {}", step, description);
}

/// 서브 작업의 상태를 표시합니다
///
/// Output:
/// ```text
///    ├─ Mariam Suleiman: 201 Created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// HTTP 응답 블록을 출력합니다
///
/// 본문이 JSON이면 들여쓰기하여, 아니면 원문 그대로 출력합니다.
///
/// Output:
/// ```text
/// ============================================================
/// Health Check
/// ============================================================
/// Status Code: 200
/// Response: {
///   "status": "healthy"
/// }
/// ```
pub fn print_response_block(description: &str, status: u16, body: &str) {
    let rule = "=".repeat(RULE_WIDTH);

    println!("\n{}", rule);
    println!("{}", description);
    println!("{}", rule);
    println!("Status Code: {}", status);
    println!("{}", format_body(body));
}

fn format_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => {
            let pretty = serde_json::to_string_pretty(&json).unwrap_or_else(|_| body.to_string());
            format!("Response: {}", pretty)
        }
        Err(_) => format!("Response (raw): {}", body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_body_pretty_prints_json() {
        let formatted = format_body(r#"{"status":"healthy"}"#);

        assert!(formatted.starts_with("Response: {"));
        assert!(formatted.contains("\n  \"status\": \"healthy\""));
    }

    #[test]
    fn test_format_body_falls_back_to_raw() {
        assert_eq!(format_body("<html>oops</html>"), "Response (raw): <html>oops</html>");
    }
}
