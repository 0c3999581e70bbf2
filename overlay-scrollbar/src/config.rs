//! Scrollbar configuration surface.

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Bar thickness across its axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Thickness {
    /// 4 px.
    #[default]
    Thin,
    /// 8 px.
    Medium,
    /// Explicit pixel value.
    Pixels(f64),
}

impl Thickness {
    pub fn px(self) -> f64 {
        match self {
            Thickness::Thin => 4.0,
            Thickness::Medium => 8.0,
            Thickness::Pixels(px) => px,
        }
    }
}

impl FromStr for Thickness {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_lowercase().as_str() {
            "thin" | "s" => return Ok(Thickness::Thin),
            "medium" | "m" => return Ok(Thickness::Medium),
            _ => {}
        }

        let number = token.strip_suffix("px").unwrap_or(token).trim();
        let px: f64 = number
            .parse()
            .map_err(|_| ConfigError::InvalidThickness(s.to_string()))?;
        if !px.is_finite() || px <= 0.0 {
            return Err(ConfigError::NonPositiveThickness(px));
        }
        Ok(Thickness::Pixels(px))
    }
}

/// Errors raised while building a [`ScrollbarConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid thickness '{0}': expected thin, medium or a pixel value")]
    InvalidThickness(String),

    #[error("Thickness must be a positive pixel value, got {0}")]
    NonPositiveThickness(f64),

    #[error("Fade timeout must be greater than zero")]
    ZeroFadeTimeout,
}

/// Per-instance scrollbar configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarConfig {
    /// Bar thickness.
    pub thickness: Thickness,

    /// Inactivity before the bars auto-hide.
    pub fade_timeout: Duration,

    /// Whether the track background renders, or only the thumb.
    pub track_visible: bool,

    /// Length of the opacity animation when the bars show or hide.
    /// Zero makes visibility changes instant.
    pub fade_duration: Duration,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            thickness: Thickness::default(),
            fade_timeout: Duration::from_millis(1000),
            track_visible: true,
            fade_duration: Duration::from_millis(150),
        }
    }
}

impl ScrollbarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bar thickness.
    pub fn thickness(mut self, thickness: Thickness) -> Self {
        self.thickness = thickness;
        self
    }

    /// Set the auto-hide delay.
    pub fn fade_timeout(mut self, timeout: Duration) -> Self {
        self.fade_timeout = timeout;
        self
    }

    /// Show or hide the track background.
    pub fn track_visible(mut self, visible: bool) -> Self {
        self.track_visible = visible;
        self
    }

    /// Set the show/hide animation length.
    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    /// Check the values and hand the config back.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let px = self.thickness.px();
        if !px.is_finite() || px <= 0.0 {
            return Err(ConfigError::NonPositiveThickness(px));
        }
        if self.fade_timeout.is_zero() {
            return Err(ConfigError::ZeroFadeTimeout);
        }
        Ok(self)
    }
}
