//! Tests for `keyrelay --check`.

use crate::support::*;
use mockito::{Matcher, Server};

#[test]
fn test_check_reports_every_key_in_order() {
    let mut server = Server::new();
    let valid = mock_answer(&mut server, KEY_1, "Hello!", 1);
    let limited = mock_key(&mut server, KEY_2, 429, RATE_LIMIT_BODY, 1);
    let invalid = mock_key(&mut server, KEY_3, 401, INVALID_KEY_BODY, 1);
    let valid_again = mock_answer(&mut server, KEY_4, "Hi!", 1);
    let t = Test::with_keys(&[KEY_1, KEY_2, KEY_3, KEY_4]);

    let output = t.check(&server.url());
    assert_success(&output);

    valid.assert();
    limited.assert();
    invalid.assert();
    valid_again.assert();

    assert_stdout_in_order(
        &output,
        &[
            "API key K1 is valid",
            "API key K2 is rate-limited",
            "API key K3 is invalid",
            "API key K4 is valid",
        ],
    );
    let status_lines = stdout(&output)
        .lines()
        .filter(|l| l.contains("API key K"))
        .count();
    assert_eq!(status_lines, 4);
}

#[test]
fn test_check_does_not_stop_after_success() {
    let mut server = Server::new();
    let first = mock_answer(&mut server, KEY_1, "Hello!", 1);
    let second = mock_answer(&mut server, KEY_2, "Hello!", 1);
    let t = Test::with_keys(&[KEY_1, KEY_2]);

    let output = t.check(&server.url());
    assert_success(&output);

    first.assert();
    second.assert();
    assert!(answer_lines(&output).is_empty());
}

#[test]
fn test_check_sends_hello() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "messages": [{ "role": "user", "content": "Hello" }]
        })))
        .with_status(200)
        .with_body(completion_body("Hi"))
        .expect(1)
        .create();
    let t = Test::with_keys(&[KEY_1]);

    let output = t.check(&server.url());
    assert_success(&output);

    mock.assert();
}

#[test]
fn test_check_wins_over_prompt() {
    let mut server = Server::new();
    let mock = mock_answer(&mut server, KEY_1, "Hi", 1);
    let t = Test::with_keys(&[KEY_1]);
    let url = server.url();

    let output = t
        .cmd()
        .args(["--endpoint", url.as_str(), "-C", "tell me a story"])
        .output()
        .unwrap();
    assert_success(&output);

    mock.assert();
    assert_stdout_contains(&output, "API key K1 is valid");
    assert_stdout_excludes(&output, "K1: Hi");
}

#[test]
fn test_check_without_keys() {
    let mut server = Server::new();
    let any = server.mock("POST", Matcher::Any).expect(0).create();
    let t = Test::new();

    let output = t.check(&server.url());
    assert_success(&output);

    any.assert();
    assert_stderr_contains(&output, "no API keys found");
}
