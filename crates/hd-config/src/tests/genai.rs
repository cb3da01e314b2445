use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_temperature_above_two_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _t = EnvGuard::set("HD_GENAI_TEMPERATURE", "2.5");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_temperature_at_bounds_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _t = EnvGuard::set("HD_GENAI_TEMPERATURE", "2.0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_empty_base_url_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("HD_GENAI_BASE_URL", "");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_image_count_over_limit_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _count = EnvGuard::set("HD_GENAI_ARTICLE_IMAGE_COUNT", "20");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unparseable_temperature_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _t = EnvGuard::set("HD_GENAI_TEMPERATURE", "warm");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.genai.temperature, eq(0.8));
}
