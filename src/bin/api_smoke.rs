//! 실행 중인 사용자 서비스에 대한 엔드투엔드 스모크 테스트
//!
//! 헬스체크부터 사용자 생성/조회/실패 케이스까지 순서대로 호출하고
//! 각 응답의 상태 코드와 본문을 출력합니다.
//!
//! # Usage
//!
//! ```bash
//! # 기본값: http://localhost:5000
//! cargo run --bin api_smoke
//!
//! # 환경 변수 또는 첫 번째 인자로 대상 지정
//! API_URL=http://10.0.0.5:5000 cargo run --bin api_smoke
//! cargo run --bin api_smoke -- http://172.20.10.3:5000
//! ```

use reqwest::{header, Client, StatusCode};
use serde_json::{json, Value};
use user_service_backend::utils::display_terminal::{
    print_boxed_title, print_response_block, print_step_start, print_sub_task,
};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[actix_web::main]
async fn main() {
    let base_url = resolve_base_url(std::env::args().nth(1), std::env::var("API_URL").ok());

    print_boxed_title("User API Smoke Test");
    println!("Testing API at: {}", base_url);

    let client = Client::new();
    match run_scenario(&client, &base_url).await {
        Ok(()) => println!("\nAll tests completed"),
        Err(e) if e.is_connect() => {
            eprintln!("\nError: Could not connect to API at {}", base_url);
            eprintln!("\nPossible issues:");
            eprintln!("1. Make sure the API server is running: cargo run --bin user_service_backend");
            eprintln!("2. Check if the server is running on a different address");
            eprintln!("3. Try: cargo run --bin api_smoke -- http://172.20.10.3:5000");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("\nUnexpected error: {}", e);
            std::process::exit(1);
        }
    }
}

/// 명령행 인자 → `API_URL` → 기본값 순서로 대상 주소를 고릅니다.
fn resolve_base_url(arg: Option<String>, env: Option<String>) -> String {
    arg.or(env)
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

async fn run_scenario(client: &Client, base_url: &str) -> Result<(), reqwest::Error> {
    let users_url = format!("{}/users", base_url);

    print_step_start(1, "Health check");
    let response = client.get(format!("{}/health", base_url)).send().await?;
    report(response, "Health Check").await?;

    print_step_start(2, "List users");
    let response = client.get(&users_url).send().await?;
    report(response, "List Users").await?;

    print_step_start(3, "Create a user with valid data");
    let response = client
        .post(&users_url)
        .json(&json!({ "name": "Idaya Seidu", "email": "iseiduu@andrew.cmu.edu" }))
        .send()
        .await?;
    let (status, created) = report(response, "Create Valid User").await?;

    if status == StatusCode::CREATED {
        if let Some(user_id) = created.as_ref().and_then(|user| user["id"].as_str()) {
            print_step_start(4, "Get the created user by ID");
            let response = client.get(format!("{}/{}", users_url, user_id)).send().await?;
            report(response, "Get Valid User").await?;

            print_step_start(5, "List users (with data)");
            let response = client.get(&users_url).send().await?;
            report(response, "List Users With Data").await?;
        }
    }

    print_step_start(6, "Create a user with missing name");
    let response = client
        .post(&users_url)
        .json(&json!({ "email": "rest.api@example.com" }))
        .send()
        .await?;
    report(response, "Create Missing Name").await?;

    print_step_start(7, "Create a user with invalid email");
    let response = client
        .post(&users_url)
        .json(&json!({ "name": "Test User", "email": "invalid-email" }))
        .send()
        .await?;
    report(response, "Create Invalid Email").await?;

    print_step_start(8, "Get a user with unknown ID");
    let response = client.get(format!("{}/non-existent-id", users_url)).send().await?;
    report(response, "Get Unknown User").await?;

    print_step_start(9, "Create a user with invalid JSON");
    let response = client
        .post(&users_url)
        .header(header::CONTENT_TYPE, "application/json")
        .body("not json")
        .send()
        .await?;
    report(response, "Create Invalid JSON").await?;

    print_step_start(10, "Create multiple users");
    let people = [
        ("Ahmed Issah Tahiru", "aissah@andrew.cmu.edu"),
        ("Mariam Suleiman", "msuleiman@andrew.cmu.edu"),
        ("Ayisha Nuhu", "anhuhu@andrew.cmu.edu"),
    ];
    for (name, email) in people {
        let response = client
            .post(&users_url)
            .json(&json!({ "name": name, "email": email }))
            .send()
            .await?;
        let outcome = if response.status() == StatusCode::CREATED {
            "created".to_string()
        } else {
            format!("failed ({})", response.status())
        };
        print_sub_task(name, &outcome);
    }

    print_step_start(11, "List all users");
    let response = client.get(&users_url).send().await?;
    report(response, "List All Users").await?;

    Ok(())
}

/// 응답을 출력하고 상태 코드와 (JSON이면) 파싱된 본문을 돌려줍니다.
async fn report(
    response: reqwest::Response,
    description: &str,
) -> Result<(StatusCode, Option<Value>), reqwest::Error> {
    let status = response.status();
    let body = response.text().await?;

    print_response_block(description, status.as_u16(), &body);

    Ok((status, serde_json::from_str(&body).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_prefers_argument() {
        let url = resolve_base_url(
            Some("http://172.20.10.3:5000/".to_string()),
            Some("http://env:5000".to_string()),
        );

        assert_eq!(url, "http://172.20.10.3:5000");
    }

    #[test]
    fn test_resolve_base_url_uses_env_then_default() {
        assert_eq!(
            resolve_base_url(None, Some("http://env:5000".to_string())),
            "http://env:5000"
        );
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some("  ".to_string()), None), DEFAULT_BASE_URL);
    }
}
