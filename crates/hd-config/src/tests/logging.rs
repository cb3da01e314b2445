use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LogLevel};

use std::fs;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;
use serial_test::serial;

#[test]
fn given_level_name_when_parsed_then_matching_filter() {
    assert_that!("debug".parse::<LogLevel>().unwrap().0, eq(LevelFilter::Debug));
    assert_that!("WARN".parse::<LogLevel>().unwrap().0, eq(LevelFilter::Warn));
}

#[test]
fn given_unknown_level_name_when_parsed_then_default_kept() {
    let level = "loud".parse::<LogLevel>().unwrap();
    assert_that!(level.0, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_level_in_toml_when_load_then_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    fs::write(temp.path().join("config.toml"), "[logging]\nlevel = \"trace\"\n").unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Trace));
}

#[test]
#[serial]
fn given_level_env_when_load_then_env_wins() {
    // Given
    let (temp, _guard) = setup_config_dir();
    fs::write(temp.path().join("config.toml"), "[logging]\nlevel = \"trace\"\n").unwrap();
    let _level = EnvGuard::set("HD_LOG_LEVEL", "error");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Error));
}
