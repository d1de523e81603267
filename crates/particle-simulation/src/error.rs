//! Configuration errors raised while building a scene

use std::fmt;

/// Parameters that cannot produce a valid particle field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Radius must be positive and finite.
    InvalidRadius(f32),
    /// At least one color is needed to paint particles.
    EmptyPalette,
    /// A single particle does not fit inside the viewport.
    ViewportTooSmall {
        width: f32,
        height: f32,
        diameter: f32,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidRadius(radius) => {
                write!(f, "particle radius must be positive and finite, got {}", radius)
            }
            FieldError::EmptyPalette => write!(f, "palette must contain at least one color"),
            FieldError::ViewportTooSmall {
                width,
                height,
                diameter,
            } => write!(
                f,
                "viewport {}x{} cannot hold a particle of diameter {}",
                width, height, diameter
            ),
        }
    }
}

impl std::error::Error for FieldError {}
