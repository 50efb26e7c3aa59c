// src/math/point_distribution/voronoi/builder.rs

#[cfg(debug_assertions)]
use crate::debug::visualization::svg::create_diagram_svg;
use crate::math::{
    algorithms::point_relaxation::{LloydConfig, LloydRelaxation},
    error::{MathError, MathResult},
    point_distribution::voronoi::{config::VoronoiConfig, voronoi_diagram::VoronoiDiagram},
};
use bevy::log::{debug, info};
use bevy::math::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Pixelgröße des Debug-SVGs.
#[cfg(debug_assertions)]
const DEBUG_SVG_SIZE: u32 = 800;

/// Baut Voronoi-Diagramme nach einer `VoronoiConfig`.
/// Orchestriert die Schritte: Aufbau per Sweep, optionale Lloyd-Relaxation
/// und (in Debug-Builds) die SVG-Ausgabe.
pub struct VoronoiBuilder {
    config: VoronoiConfig,
}

impl VoronoiBuilder {
    pub fn new(config: VoronoiConfig) -> MathResult<Self> {
        config.validate()?; // Validiert die übergebene Konfiguration
        Ok(Self { config })
    }

    pub fn config(&self) -> &VoronoiConfig {
        &self.config
    }

    pub fn build(&self, points: &[Vec2]) -> MathResult<VoronoiDiagram> {
        match self.config.seed {
            Some(seed) => self.build_with_rng(points, &mut StdRng::seed_from_u64(seed)),
            None => self.build_with_rng(points, &mut rand::rng()),
        }
    }

    fn build_with_rng<R: Rng>(&self, points: &[Vec2], rng: &mut R) -> MathResult<VoronoiDiagram> {
        let step_description =
            |step_name: &str| format!("VoronoiBuilder::build - Step: {}", step_name);
        let bounds = self.config.bounds;

        // 1. Sweep
        let step_name = "Sweep";
        debug!(
            "{}: {} input points, bounds {}",
            step_description(step_name),
            points.len(),
            bounds
        );
        let mut diagram = VoronoiDiagram::with_rng(points, bounds, rng)?;
        debug!(
            "{}: {} sites, {} edges, {} vertices",
            step_description(step_name),
            diagram.sites().len(),
            diagram.edges().len(),
            diagram.vertices().len()
        );

        // 2. Lloyd-Relaxation
        let step_name = "LloydRelaxation";
        if self.config.lloyd_iterations > 0 {
            let relaxation = LloydRelaxation::new(LloydConfig {
                iterations: self.config.lloyd_iterations,
            });
            let (relaxed, stats) = relaxation.relax_with_rng(&diagram, rng).map_err(|e| {
                MathError::GeometricFailure {
                    operation: format!(
                        "{} - relaxation of {} sites failed: {}",
                        step_description(step_name),
                        diagram.sites().len(),
                        e
                    ),
                }
            })?;
            debug!("{}: stats {:?}", step_description(step_name), stats);
            diagram = relaxed;
        }

        // 3. Debug-Ausgabe
        #[cfg(debug_assertions)]
        if let Some(path) = &self.config.debug_svg_path {
            create_diagram_svg(path, &diagram, DEBUG_SVG_SIZE)?;
            info!("{}: wrote {}", step_description("DebugSvg"), path);
        }

        info!(
            "VoronoiBuilder: diagram with {} sites ready",
            diagram.sites().len()
        );
        Ok(diagram)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Bounds2D;

    fn grid_points() -> Vec<Vec2> {
        let mut points = Vec::new();
        for i in 0..6 {
            for j in 0..5 {
                // leicht versetzt, damit keine Kreise mit vier Sites entstehen
                let jitter = ((i * 7 + j * 3) % 5) as f32 * 0.37;
                points.push(Vec2::new(i as f32 * 15.0 + jitter, j as f32 * 18.0 + jitter * 0.5));
            }
        }
        points
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = VoronoiConfig::new().with_bounds(Bounds2D {
            min: Vec2::new(0.0, 0.0),
            max: Vec2::new(-1.0, 5.0),
        });
        assert!(VoronoiBuilder::new(config).is_err());
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let config = VoronoiConfig::new()
            .with_bounds(Bounds2D::from_rect(-5.0, -5.0, 100.0, 100.0).unwrap())
            .with_seed(17);
        let builder = VoronoiBuilder::new(config).unwrap();

        let a = builder.build(&grid_points()).unwrap();
        let b = builder.build(&grid_points()).unwrap();
        let weights = |d: &VoronoiDiagram| d.sites().iter().map(|s| s.weight()).collect::<Vec<_>>();
        assert_eq!(weights(&a), weights(&b));
        assert!(weights(&a).iter().all(|w| (0.0..100.0).contains(w)));
    }

    #[test]
    fn test_build_with_relaxation() {
        let config = VoronoiConfig::new()
            .with_bounds(Bounds2D::from_rect(-5.0, -5.0, 100.0, 100.0).unwrap())
            .with_lloyd_iterations(2)
            .with_seed(3);
        let diagram = VoronoiBuilder::new(config).unwrap().build(&grid_points()).unwrap();
        assert_eq!(diagram.sites().len(), 30);
        assert!(diagram.regions().iter().all(|r| r.len() >= 3));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_debug_svg_is_written() {
        let path = std::env::temp_dir().join("voronoi_sweep_builder_test.svg");
        let config = VoronoiConfig::new()
            .with_bounds(Bounds2D::from_rect(-5.0, -5.0, 100.0, 100.0).unwrap())
            .with_debug_svg(path.to_string_lossy());
        VoronoiBuilder::new(config).unwrap().build(&grid_points()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }
}
