//! Error types shared across the crate.

use thiserror::Error;

/// Failures raised by checked constructors, parsers, wheel rendering and
/// clipboard access.
///
/// The plain conversion functions never return this; they clamp instead.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("{channel} channel value {value} is outside 0..=255")]
    ChannelOutOfRange { channel: &'static str, value: i64 },
    #[error("{component} value {value} is outside {min}..={max}")]
    ComponentOutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("malformed rgb string: {0:?}")]
    MalformedRgb(String),
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    #[error("wheel size out of range: {0}")]
    InvalidSize(u32),
    #[error(transparent)]
    Clipboard(#[from] arboard::Error),
}

impl ColorError {
    pub(crate) fn component(component: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::ComponentOutOfRange {
            component,
            value,
            min,
            max,
        }
    }
}

/// Failures while loading a [`WheelConfig`](crate::WheelConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid config: {0}")]
    Invalid(#[from] ColorError),
}
