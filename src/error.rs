//! Error types for firetrail.
//!
//! The per-frame numeric paths never fail: degenerate geometry and warm-up
//! states resolve to neutral values locally. The only fallible surface is
//! construction and runtime reconfiguration, which validates knob ranges
//! before any state is rebuilt.

use std::fmt;

/// Errors produced when validating trail configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Spline capacity below the four-point Catmull-Rom window.
    SplineCapacityTooSmall(usize),
    /// Rope shorter than the three particles normal derivation needs.
    RopeTooShort(usize),
    /// Fewer than two resampling positions requested.
    SampleCountTooSmall(usize),
    /// A scalar knob outside its documented range, or not finite.
    InvalidKnob { name: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SplineCapacityTooSmall(n) => write!(
                f,
                "Spline capacity must be at least 4 control points, got {}",
                n
            ),
            ConfigError::RopeTooShort(n) => {
                write!(f, "Rope needs at least 3 particles, got {}", n)
            }
            ConfigError::SampleCountTooSmall(n) => {
                write!(f, "Trail resampling needs at least 2 positions, got {}", n)
            }
            ConfigError::InvalidKnob { name, value } => {
                write!(f, "Configuration knob '{}' has invalid value {}", name, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
