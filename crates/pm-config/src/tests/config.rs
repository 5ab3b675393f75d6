use crate::Config;
use crate::form_rules::{DEFAULT_DESCRIPTION_MIN_LENGTH, DEFAULT_TEAM_SIZE_MAX, DEFAULT_TEAM_SIZE_MIN};
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(
        config.form.description_min_length,
        eq(DEFAULT_DESCRIPTION_MIN_LENGTH)
    );
    assert_that!(config.form.team_size_min, eq(DEFAULT_TEAM_SIZE_MIN));
    assert_that!(config.form.team_size_max, eq(DEFAULT_TEAM_SIZE_MAX));
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_then_nothing_written() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    Config::load().unwrap();

    // Then
    let entries = std::fs::read_dir(temp.path()).unwrap().count();
    assert_that!(entries, eq(0));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_ok_and_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
              [logging]
              level = "debug"
              file = "pm.log"

              [form]
              description_min_length = 10
              team_size_max = 8
          "#,
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.logging.file.as_deref(), some(eq("pm.log")));
    assert_that!(config.form.description_min_length, eq(10));
    assert_that!(config.form.team_size_min, eq(DEFAULT_TEAM_SIZE_MIN));
    assert_that!(config.form.team_size_max, eq(8));
}

#[test]
#[serial]
fn given_explicit_dir_when_load_from_then_reads_that_dir() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let other = tempfile::TempDir::new().unwrap();
    std::fs::write(
        other.path().join("config.toml"),
        "[form]\nteam_size_max = 9",
    )
    .unwrap();

    // When
    let config = Config::load_from(other.path()).unwrap();

    // Then
    assert_that!(config.form.team_size_max, eq(9));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[form]\nteam_size_max = 9").unwrap();
    let _max = EnvGuard::set("PM_FORM_TEAM_SIZE_MAX", "7");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.form.team_size_max, eq(7));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("PM_LOG_LEVEL", "trace");
    let _colored = EnvGuard::set("PM_LOG_COLORED", "false");
    let _file = EnvGuard::set("PM_LOG_FILE", "board.log");
    let _desc = EnvGuard::set("PM_FORM_DESCRIPTION_MIN_LENGTH", "3");
    let _min = EnvGuard::set("PM_FORM_TEAM_SIZE_MIN", "2");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Trace));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file.as_deref(), some(eq("board.log")));
    assert_that!(config.form.description_min_length, eq(3));
    assert_that!(config.form.team_size_min, eq(2));
}

#[test]
#[serial]
fn given_unparseable_env_override_when_load_then_value_kept() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _max = EnvGuard::set("PM_FORM_TEAM_SIZE_MAX", "lots");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.form.team_size_max, eq(DEFAULT_TEAM_SIZE_MAX));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_joined_under_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("PM_LOG_FILE", "pm.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path(temp.path());

    // Then
    assert_that!(path, some(eq(&temp.path().join("log").join("pm.log"))));
}

#[test]
#[serial]
fn given_no_config_dir_env_when_config_dir_then_dot_pm_under_cwd() {
    // Given
    let _guard = EnvGuard::remove("PM_CONFIG_DIR");

    // When
    let dir = Config::config_dir().unwrap();

    // Then
    assert_that!(dir, eq(&std::env::current_dir().unwrap().join(".pm")));
}
