use habit_tracker::config::Config;
use std::env;
use std::sync::Mutex;

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HABIT_DATA_FILE", "/tmp/test-habits.json");
    env::set_var("DEFAULT_TIMEZONE", "UTC+3");
    env::set_var("CACHE_TTL_SECS", "10");
    env::set_var("REMINDER_HOUR", "21");

    let config = Config::from_env().unwrap();

    assert_eq!(config.data_file, "/tmp/test-habits.json");
    assert_eq!(config.default_timezone, "UTC+3");
    assert_eq!(config.cache_ttl_secs, 10);
    assert_eq!(config.reminder_hour, 21);

    // Clean up
    env::remove_var("HABIT_DATA_FILE");
    env::remove_var("DEFAULT_TIMEZONE");
    env::remove_var("CACHE_TTL_SECS");
    env::remove_var("REMINDER_HOUR");
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::remove_var("HABIT_DATA_FILE");
    env::remove_var("DEFAULT_TIMEZONE");
    env::remove_var("CACHE_TTL_SECS");
    env::remove_var("REMINDER_HOUR");

    let config = Config::from_env().unwrap();

    assert_eq!(config.data_file, "./data/habits.json");
    assert_eq!(config.default_timezone, "UTC");
    assert_eq!(config.cache_ttl_secs, 30);
    assert_eq!(config.reminder_hour, 9);
}

#[test]
fn test_config_empty_values_fall_back_to_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HABIT_DATA_FILE", "   ");
    env::set_var("DEFAULT_TIMEZONE", "");
    env::remove_var("CACHE_TTL_SECS");
    env::remove_var("REMINDER_HOUR");

    let config = Config::from_env().unwrap();

    assert_eq!(config.data_file, "./data/habits.json");
    assert_eq!(config.default_timezone, "UTC");

    env::remove_var("HABIT_DATA_FILE");
    env::remove_var("DEFAULT_TIMEZONE");
}

#[test]
fn test_config_rejects_invalid_reminder_hour() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("REMINDER_HOUR", "24");
    assert!(Config::from_env().is_err());

    env::set_var("REMINDER_HOUR", "not-a-number");
    assert!(Config::from_env().is_err());

    env::remove_var("REMINDER_HOUR");
}

#[test]
fn test_config_rejects_invalid_cache_ttl() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("CACHE_TTL_SECS", "soon");
    assert!(Config::from_env().is_err());

    env::remove_var("CACHE_TTL_SECS");
}
