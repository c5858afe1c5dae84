// Copyright 2026 the Slideway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use slideway_gesture::ArbiterConfig;

/// Timing and distance tunables for a [`Carousel`](crate::Carousel).
///
/// All durations are in host milliseconds. The defaults reproduce the usual
/// feel: one wheel notch per 700 ms, one swipe per 600 ms, and a 40 px swipe
/// threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Cooldown after an accepted wheel step.
    pub wheel_cooldown_ms: u64,
    /// Cooldown after an accepted touch step.
    pub touch_cooldown_ms: u64,
    /// Cooldown after a direct navigation request.
    pub navigation_cooldown_ms: u64,
    /// Net touch travel that must be exceeded before a swipe counts.
    pub touch_threshold_px: f64,
    /// Delay before asking the host to measure again after a degenerate layout.
    pub remeasure_delay_ms: u64,
    /// Scroll drift tolerated after a relayout before the offset is corrected.
    pub scroll_epsilon_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            wheel_cooldown_ms: ArbiterConfig::WHEEL_COOLDOWN_MS,
            touch_cooldown_ms: ArbiterConfig::TOUCH_COOLDOWN_MS,
            navigation_cooldown_ms: 700,
            touch_threshold_px: ArbiterConfig::TOUCH_THRESHOLD_PX,
            remeasure_delay_ms: 100,
            scroll_epsilon_px: 0.5,
        }
    }
}

impl CarouselConfig {
    /// The subset used by the input arbiter.
    #[must_use]
    pub fn arbiter(&self) -> ArbiterConfig {
        ArbiterConfig {
            wheel_cooldown_ms: self.wheel_cooldown_ms,
            touch_cooldown_ms: self.touch_cooldown_ms,
            touch_threshold_px: self.touch_threshold_px,
        }
    }

    /// Checks that every value is usable.
    ///
    /// Cooldowns must be non-zero, otherwise nothing limits the step rate.
    /// Distances must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("wheel_cooldown_ms", self.wheel_cooldown_ms),
            ("touch_cooldown_ms", self.touch_cooldown_ms),
            ("navigation_cooldown_ms", self.navigation_cooldown_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroCooldown { field });
            }
        }
        for (field, value) in [
            ("touch_threshold_px", self.touch_threshold_px),
            ("scroll_epsilon_px", self.scroll_epsilon_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistance { field, value });
            }
        }
        Ok(())
    }

    /// Parses and validates a configuration from TOML.
    ///
    /// Missing keys take their default values.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        config.validate()?;
        Ok(config)
    }
}

/// Reasons a [`CarouselConfig`] is rejected.
#[derive(Debug)]
pub enum ConfigError {
    /// A cooldown is zero.
    ZeroCooldown {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A distance is negative, infinite, or NaN.
    InvalidDistance {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The TOML input could not be parsed.
    #[cfg(feature = "toml")]
    Toml(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCooldown { field } => write!(f, "{field} must be greater than zero"),
            Self::InvalidDistance { field, value } => {
                write!(f, "{field} must be finite and non-negative, got {value}")
            }
            #[cfg(feature = "toml")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        #[cfg(feature = "toml")]
        if let Self::Toml(e) = self {
            return Some(e);
        }
        None
    }
}
