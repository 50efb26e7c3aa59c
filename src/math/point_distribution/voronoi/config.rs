// src/math/point_distribution/voronoi/config.rs

use crate::math::{
    error::{MathError, MathResult},
    types::Bounds2D,
};
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

/// Konfiguration für die Erzeugung eines Voronoi-Diagramms über den
/// `VoronoiBuilder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoronoiConfig {
    /// Clipping-Rechteck des Diagramms.
    pub bounds: Bounds2D,
    /// Anzahl der Lloyd-Relaxationsiterationen nach dem ersten Aufbau.
    pub lloyd_iterations: usize,
    /// Optionaler Seed für die Site-Gewichte.
    pub seed: Option<u64>,
    /// Nur in Debug-Builds: Ziel für ein SVG des fertigen Diagramms.
    pub debug_svg_path: Option<String>,
}

impl Default for VoronoiConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds2D::from_points(Vec2::new(-100.0, -100.0), Vec2::new(100.0, 100.0)),
            lloyd_iterations: 0,
            seed: None,
            debug_svg_path: None,
        }
    }
}

impl VoronoiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(mut self, bounds: Bounds2D) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_lloyd_iterations(mut self, iterations: usize) -> Self {
        self.lloyd_iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_debug_svg(mut self, path: impl Into<String>) -> Self {
        self.debug_svg_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.bounds.is_valid() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Voronoi bounds are invalid: {}", self.bounds),
            });
        }
        if self.debug_svg_path.as_deref().is_some_and(str::is_empty) {
            return Err(MathError::InvalidConfiguration {
                message: "Debug SVG path must not be empty.".to_string(),
            });
        }
        Ok(())
    }
}
