// src/math/error.rs
use bevy::math::Vec2;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Input point #{index} is not finite: ({x}, {y})")]
    NonFinitePoint { index: usize, x: f32, y: f32 },

    #[error("Site {site:?} has no closed region inside the bounds")]
    UnboundedRegion { site: Vec2 },

    #[error("Region of site {site:?} is degenerate (signed area {area})")]
    DegenerateRegion { site: Vec2, area: f32 },

    #[error("Geometric calculation failed: {operation}")]
    GeometricFailure { operation: String },

    #[error("Debug output failed: {message}")]
    DebugOutput { message: String },
}

pub type MathResult<T> = Result<T, MathError>;
