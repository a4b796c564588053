use super::*;
use serial_test::serial;
use std::env;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_pairwise_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("PAIRWISE_SLIDER_QUANTIZED");
        env::remove_var("PAIRWISE_SLIDER_VALUE_COUNT");
        env::remove_var("PAIRWISE_SLIDER_MIN");
        env::remove_var("PAIRWISE_SLIDER_MAX");
        env::remove_var("PAIRWISE_SLIDER_PRECISION");
        env::remove_var("PAIRWISE_COMMENT_REQUIRED");
        env::remove_var("PAIRWISE_PREFERENCE_REQUIRED");
        env::remove_var("PAIRWISE_HORIZONTAL_MIN_WIDTH");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(!config.slider.enabled);
    assert_eq!(config.slider.value_count, 10);
    assert_eq!(config.slider.min, 0.0);
    assert_eq!(config.slider.max, 100.0);
    assert!(!config.comment_required);
    assert!(config.preference_required);
    assert_eq!(config.horizontal_min_width, 1200);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_pairwise_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_from_env_quantized_slider() {
    clear_pairwise_env();

    with_env_vars(
        &[
            ("PAIRWISE_SLIDER_QUANTIZED", "true"),
            ("PAIRWISE_SLIDER_VALUE_COUNT", "5"),
            ("PAIRWISE_SLIDER_MIN", "1"),
            ("PAIRWISE_SLIDER_MAX", "5"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert!(config.slider.enabled);
            assert_eq!(config.slider.value_count, 5);
            assert_eq!(config.slider.min, 1.0);
            assert_eq!(config.slider.max, 5.0);
            assert_eq!(config.slider.quality_classes.len(), 10);
        },
    );
}

#[test]
#[serial]
fn test_from_env_boolean_spellings() {
    clear_pairwise_env();

    with_env_vars(
        &[
            ("PAIRWISE_COMMENT_REQUIRED", "YES"),
            ("PAIRWISE_PREFERENCE_REQUIRED", "off"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert!(config.comment_required);
            assert!(!config.preference_required);
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_value_uses_default() {
    clear_pairwise_env();

    with_env_vars(&[("PAIRWISE_SLIDER_MAX", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.slider.max, 100.0);
    });
}

#[test]
#[serial]
fn test_from_env_invalid_bool() {
    clear_pairwise_env();

    with_env_vars(&[("PAIRWISE_COMMENT_REQUIRED", "maybe")], || {
        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBool {
                name: "PAIRWISE_COMMENT_REQUIRED",
                ..
            })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_invalid_numbers() {
    clear_pairwise_env();

    with_env_vars(&[("PAIRWISE_SLIDER_MIN", "low")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::FloatParseError { .. })
        ));
    });

    with_env_vars(&[("PAIRWISE_SLIDER_VALUE_COUNT", "ten")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::IntParseError { .. })
        ));
    });

    with_env_vars(&[("PAIRWISE_HORIZONTAL_MIN_WIDTH", "-5")], || {
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::IntParseError { .. })
        ));
    });
}

#[test]
#[serial]
fn test_from_env_negative_value_count_is_accepted() {
    clear_pairwise_env();

    with_env_vars(&[("PAIRWISE_SLIDER_VALUE_COUNT", "-2")], || {
        let config = Config::from_env().expect("degenerate counts are not config errors");
        assert_eq!(config.slider.value_count, -2);
        assert!(config.validate().is_ok());
    });
}

#[test]
fn test_validate_rejects_inverted_range() {
    let mut config = Config::default();
    config.slider.min = 10.0;
    config.slider.max = 1.0;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRange { .. })
    ));
}

#[test]
fn test_validate_rejects_non_finite_bounds() {
    let mut config = Config::default();
    config.slider.max = f64::INFINITY;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NonFiniteBound { name: "max" })
    ));
}

#[test]
fn test_validate_rejects_excessive_precision() {
    let mut config = Config::default();
    config.slider.precision = 20;

    assert!(matches!(
        config.validate(),
        Err(ConfigError::PrecisionTooLarge { value: 20, .. })
    ));
}

#[test]
fn test_equal_bounds_are_valid() {
    let mut config = Config::default();
    config.slider.min = 5.0;
    config.slider.max = 5.0;

    assert!(config.validate().is_ok());
}
