use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, DEFAULT_CORPUS_FILENAME, DEFAULT_DATABASE_FILENAME, DEFAULT_PORT};

use std::fs;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_empty_config_dir_when_load_then_defaults_used() {
    // Given
    let _temp = setup_config_dir();
    let _key = EnvGuard::remove("HD_GENAI_API_KEY");
    let _gemini_key = EnvGuard::remove("GEMINI_API_KEY");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(DEFAULT_PORT));
    assert_that!(config.database.path.as_str(), eq(DEFAULT_DATABASE_FILENAME));
    assert_that!(config.corpus.path.as_str(), eq(DEFAULT_CORPUS_FILENAME));
    assert_that!(config.genai.api_key.is_none(), eq(true));
}

#[test]
#[serial]
fn given_toml_file_when_load_then_values_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    fs::write(
        temp.path().join("config.toml"),
        r#"
[server]
port = 4100

[corpus]
path = "transcripts.json"

[genai]
voice = "Puck"
"#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(4100));
    assert_that!(config.corpus.path.as_str(), eq("transcripts.json"));
    assert_that!(config.genai.voice.as_str(), eq("Puck"));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    fs::write(temp.path().join("config.toml"), "not [valid toml").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    fs::write(temp.path().join("config.toml"), "[server]\nport = 4100\n").unwrap();
    let _port = EnvGuard::set("HD_SERVER_PORT", "5200");
    let _db = EnvGuard::set("HD_DATABASE_PATH", "other.db");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(5200));
    assert_that!(config.database.path.as_str(), eq("other.db"));
}

#[test]
#[serial]
fn given_api_key_env_when_load_then_key_set() {
    // Given
    let _temp = setup_config_dir();
    let _key = EnvGuard::set("HD_GENAI_API_KEY", "test-key");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.genai.api_key.as_deref(), eq(Some("test-key")));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _db = EnvGuard::set("HD_DATABASE_PATH", "/etc/hamdam.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_corpus_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _corpus = EnvGuard::set("HD_CORPUS_PATH", "../podcasts.json");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_defaults_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_config_when_bind_addr_then_host_and_port_joined() {
    // Given
    let _temp = setup_config_dir();
    let _host = EnvGuard::set("HD_SERVER_HOST", "127.0.0.1");
    let _port = EnvGuard::set("HD_SERVER_PORT", "8080");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr().as_str(), eq("127.0.0.1:8080"));
}

#[test]
#[serial]
fn given_config_dir_when_database_path_then_joined_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.database_path().unwrap();

    // Then
    assert_that!(path, eq(&temp.path().join(DEFAULT_DATABASE_FILENAME)));
}
