use serial_test::serial;
use std::{env, panic};
use visitor_portal::{
    AppConfig,
    config::{ConfigError, DEFAULT_BIND_ADDR, DEFAULT_REDIRECT_DELAY_MS, Env},
};

const CONFIG_VARS: [&str; 3] = ["APP_ENV", "BIND_ADDR", "REDIRECT_DELAY_MS"];

// --- Setup/Teardown Utilities ---

/// Runs `test` with the config variables cleared, then restores whatever the
/// process had before, even if the test panicked.
fn run_with_env<T, R>(test: T) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(&str, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|&var| (var, env::var(var).ok()))
        .collect();

    for var in CONFIG_VARS {
        unsafe { env::remove_var(var) };
    }

    let result = panic::catch_unwind(test);

    for (key, original_value) in originals {
        unsafe {
            match original_value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_app_config_production_fail_fast() {
    let result = run_with_env(|| {
        unsafe { env::set_var("APP_ENV", "production") };
        // BIND_ADDR is missing
        AppConfig::load()
    });

    assert_eq!(result.unwrap_err(), ConfigError::Missing("BIND_ADDR"));
}

#[test]
#[serial]
fn test_app_config_production_success() {
    let config = run_with_env(|| {
        unsafe {
            env::set_var("APP_ENV", "production");
            env::set_var("BIND_ADDR", "0.0.0.0:8080");
            env::set_var("REDIRECT_DELAY_MS", "500");
        }
        AppConfig::load()
    })
    .expect("production config should load");

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.redirect_delay_ms, 500);
    assert!(config.secure_cookies);
}

#[test]
#[serial]
fn test_app_config_local_defaults() {
    let config = run_with_env(AppConfig::load).expect("local config should load");

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS);
    assert!(!config.secure_cookies);
}

#[test]
#[serial]
fn test_app_config_unknown_env_is_local() {
    let config = run_with_env(|| {
        unsafe { env::set_var("APP_ENV", "staging") };
        AppConfig::load()
    })
    .expect("unknown APP_ENV falls back to local");

    assert_eq!(config.env, Env::Local);
}

#[test]
#[serial]
fn test_app_config_rejects_bad_delay() {
    let result = run_with_env(|| {
        unsafe { env::set_var("REDIRECT_DELAY_MS", "two seconds") };
        AppConfig::load()
    });

    assert_eq!(
        result.unwrap_err(),
        ConfigError::InvalidNumber {
            name: "REDIRECT_DELAY_MS",
            value: "two seconds".to_string(),
        }
    );
}

#[test]
fn test_default_config_needs_no_environment() {
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.redirect_delay_ms, 2000);
    assert!(!config.secure_cookies);
}
