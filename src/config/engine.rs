//! Engine limits configuration
//!
//! `[engine]` section: digit limit and rounding precision.

use crate::engine::{EngineConfig, DEFAULT_DECIMAL_PRECISION, DEFAULT_MAX_DIGITS};
use serde::Deserialize;

/// Largest accepted digit limit (an `f64` carries ~15-17 significant digits)
pub const MAX_DIGITS_CEILING: usize = 15;

/// Largest accepted rounding precision
pub const PRECISION_CEILING: u32 = 15;

/// Engine settings
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Maximum digits per typed operand (1..=15)
    pub max_digits: usize,
    /// Fractional digits kept after a computation (0..=15)
    pub decimal_precision: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            decimal_precision: DEFAULT_DECIMAL_PRECISION,
        }
    }
}

/// Engine settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileEngine {
    pub max_digits: Option<usize>,
    pub decimal_precision: Option<u32>,
}

impl EngineSettings {
    /// Create from file config with env overrides, clamping out-of-range values
    pub fn from_file(
        file: Option<FileEngine>,
        env_max_digits: Option<usize>,
        env_precision: Option<u32>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let max_digits = env_max_digits
            .or(file.max_digits)
            .unwrap_or(defaults.max_digits);
        let decimal_precision = env_precision
            .or(file.decimal_precision)
            .unwrap_or(defaults.decimal_precision);

        Self {
            max_digits: clamp_warn("max_digits", max_digits, 1, MAX_DIGITS_CEILING),
            decimal_precision: clamp_warn("decimal_precision", decimal_precision, 0, PRECISION_CEILING),
        }
    }

    /// Engine construction parameters
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_digits: self.max_digits,
            decimal_precision: self.decimal_precision,
        }
    }
}

/// Clamp a setting into range, telling the user when it was adjusted
///
/// Runs before the subscriber is installed, so warnings go to stderr.
fn clamp_warn<T>(name: &str, value: T, min: T, max: T) -> T
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    let clamped = if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    };
    if clamped != value {
        eprintln!(
            "Warning: engine.{} = {} is out of range ({}..={}), using {}",
            name, value, min, max, clamped
        );
    }
    clamped
}
