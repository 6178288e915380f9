use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn nwatch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nwatch"));
    cmd.env_remove("RUST_LOG")
        .env("NWATCH__LOGGING__LEVEL", "warn")
        .env("NWATCH__NAVIGATION__REDIRECT_DELAY_MS", "10");
    cmd
}

fn register(cmd: &mut Command, api_url: &str, email: &str) {
    cmd.args(["--api-url", api_url, "register", "--first-name", "Jo", "--last-name", "Li"])
        .args(["--email", email]);
}

#[test]
fn test_help_lists_register() {
    nwatch().arg("--help").assert().success().stdout(predicate::str::contains("register"));
}

#[test]
fn test_invalid_input_fails_before_any_request() {
    nwatch()
        .args(["--api-url", "http://127.0.0.1:9", "register", "--first-name", "J", "--email", "nope"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("First name: First name must be at least 2 characters."))
        .stdout(predicate::str::contains("Last name: Last name is required."))
        .stdout(predicate::str::contains("Email: Please enter a valid email address."));
}

#[test]
fn test_config_source_is_logged_once_logger_is_up() {
    nwatch()
        .env("NWATCH__LOGGING__LEVEL", "info")
        .args(["--api-url", "http://127.0.0.1:9", "register", "--email", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration loaded"))
        .stderr(predicate::str::contains("http://127.0.0.1:9"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    nwatch()
        .args(["--config", "does-not-exist.toml", "register"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_successful_registration_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(body_json(json!({
            "fullName": "Jo Li",
            "email": "jo@example.com",
            "notificationEnabled": false
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        let mut cmd = nwatch();
        register(&mut cmd, &uri, "jo@example.com");
        cmd.arg("--no-notifications").assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("User registered successfully!"))
        .stdout(predicate::str::contains("Redirected to /"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_conflict_exits_with_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(409))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        let mut cmd = nwatch();
        register(&mut cmd, &uri, "taken@example.com");
        cmd.assert()
    })
    .await
    .unwrap();

    assert
        .code(1)
        .stdout(predicate::str::contains("A user with this email already exists."))
        .stdout(predicate::str::contains("Redirected").not());
}
