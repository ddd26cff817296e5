//! Tests for error handling and CLI flags.

use crate::support::*;
use mockito::Server;

#[test]
fn test_help_lists_flags() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("Usage"));
    assert!(out.contains("--check"));
    assert!(out.contains("--interactive"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains("keyrelay"));
}

#[test]
fn test_unknown_flag_fails() {
    let t = Test::new();

    let output = t.cmd().arg("--bogus").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_malformed_key_file_fails() {
    let t = Test::new();
    std::fs::write(t.keys_path(), "{not json").unwrap();

    let output = t.cmd().arg("hello").output().unwrap();
    assert_failure(&output);

    assert_stderr_contains(&output, "malformed key file");
    assert_stdout_contains(&output, "JSON array of strings");
}

#[test]
fn test_malformed_settings_fails() {
    let t = Test::with_keys(&[KEY_1]);
    t.write_settings("model = [\n");

    let output = t.cmd().arg("hello").output().unwrap();
    assert_failure(&output);

    assert_stderr_contains(&output, "invalid settings");
}

#[test]
fn test_invalid_endpoint_fails() {
    let t = Test::with_keys(&[KEY_1]);

    let output = t
        .cmd()
        .args(["--endpoint", "api.openai.com", "hello"])
        .output()
        .unwrap();
    assert_failure(&output);

    assert_stderr_contains(&output, "invalid value for endpoint");
}

#[cfg(target_os = "linux")]
#[test]
fn test_global_settings_file_is_read() {
    let t = Test::new();
    let config_dir = t.home.path().join(".config").join("keyrelay");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "keys_file = \"elsewhere.json\"\n").unwrap();
    std::fs::write(t.dir.path().join("elsewhere.json"), "not json").unwrap();

    let output = t.cmd().arg("hello").output().unwrap();
    assert_failure(&output);

    assert_stderr_contains(&output, "malformed key file elsewhere.json");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::with_keys(&[KEY_1]);

    let output = t.cmd().output().unwrap();
    assert_success(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_verbose_flag_logs_only_masked_keys() {
    let mut server = Server::new();
    let limited = mock_key(&mut server, KEY_1, 429, RATE_LIMIT_BODY, 1);
    let good = mock_answer(&mut server, KEY_2, "Hello!", 1);
    let t = Test::with_keys(&[KEY_1, KEY_2]);

    let output = t
        .cmd()
        .args(["--verbose", "--endpoint", server.url().as_str(), "Hi"])
        .output()
        .unwrap();
    assert_success(&output);

    limited.assert();
    good.assert();
    assert_stdout_contains(&output, "K2: Hello!");

    let err = stderr(&output);
    assert!(err.contains("DEBUG"), "verbose mode should log at debug level");
    assert!(err.contains("sending prompt"), "key attempts should be logged");
    assert!(err.contains("sk-test-aa..."), "first key should appear masked");
    assert!(err.contains("sk-test-bb..."), "second key should appear masked");
    assert!(!err.contains(KEY_1), "secrets must not be logged");
    assert!(!err.contains(KEY_2), "secrets must not be logged");
}

#[test]
fn test_log_env_var() {
    let t = Test::with_keys(&[KEY_1]);

    let output = t
        .cmd()
        .env("KEYRELAY_LOG", "keyrelay=debug")
        .output()
        .unwrap();
    assert_success(&output);

    assert_stderr_contains(&output, "settings resolved");
}
