use std::time::Duration;

use overlay_scrollbar::{ConfigError, ScrollbarConfig, Thickness};

#[test]
fn test_defaults() {
    let config = ScrollbarConfig::default();
    assert_eq!(config.thickness, Thickness::Thin);
    assert_eq!(config.thickness.px(), 4.0);
    assert_eq!(config.fade_timeout, Duration::from_millis(1000));
    assert!(config.track_visible);
    assert_eq!(config.validated(), Ok(ScrollbarConfig::default()));
}

#[test]
fn test_parse_named_thickness() {
    assert_eq!("thin".parse::<Thickness>(), Ok(Thickness::Thin));
    assert_eq!("S".parse::<Thickness>(), Ok(Thickness::Thin));
    assert_eq!(" medium ".parse::<Thickness>(), Ok(Thickness::Medium));
    assert_eq!("m".parse::<Thickness>().map(Thickness::px), Ok(8.0));
}

#[test]
fn test_parse_pixel_thickness() {
    assert_eq!("6".parse::<Thickness>(), Ok(Thickness::Pixels(6.0)));
    assert_eq!("12px".parse::<Thickness>(), Ok(Thickness::Pixels(12.0)));
    assert_eq!("2.5 px".parse::<Thickness>(), Ok(Thickness::Pixels(2.5)));
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(
        "wide".parse::<Thickness>(),
        Err(ConfigError::InvalidThickness("wide".to_string()))
    );
    assert_eq!(
        "0px".parse::<Thickness>(),
        Err(ConfigError::NonPositiveThickness(0.0))
    );
    assert!("-3".parse::<Thickness>().is_err());
}

#[test]
fn test_validated_rejects_bad_values() {
    let zero_timeout = ScrollbarConfig::new().fade_timeout(Duration::ZERO);
    assert_eq!(zero_timeout.validated(), Err(ConfigError::ZeroFadeTimeout));

    let negative = ScrollbarConfig::new().thickness(Thickness::Pixels(-1.0));
    assert_eq!(
        negative.validated(),
        Err(ConfigError::NonPositiveThickness(-1.0))
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::ZeroFadeTimeout.to_string(),
        "Fade timeout must be greater than zero"
    );
    assert!(ConfigError::InvalidThickness("x".into())
        .to_string()
        .contains("'x'"));
}
