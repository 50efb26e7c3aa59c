// src/math/algorithms/point_relaxation/lloyd.rs

use crate::math::{
    error::MathResult,
    geometry::polygon_centroid,
    point_distribution::voronoi::VoronoiDiagram,
};
use bevy::log::debug;
use bevy::math::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Konfiguration für den Lloyd-Relaxationsalgorithmus.
///
/// Es gibt keinen Konvergenztest; es werden immer genau `iterations`
/// Durchläufe ausgeführt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LloydConfig {
    pub iterations: usize,
}

/// Führt Lloyd-Relaxation auf einem Voronoi-Diagramm durch: jede Site wird
/// durch den Schwerpunkt ihrer Region ersetzt und das Diagramm neu gebaut.
pub struct LloydRelaxation {
    config: LloydConfig,
}

/// Statistiken, die während einer Lloyd-Relaxationsdurchlauf gesammelt werden.
#[derive(Debug, Clone, Default)]
pub struct LloydRelaxationStats {
    pub iterations_performed: usize,
    /// Quadratisches Mittel der Site-Verschiebung im letzten Durchlauf.
    pub total_movement_last_iteration: f32,
    pub max_movement_last_iteration: f32,
}

impl LloydRelaxation {
    pub fn new(config: LloydConfig) -> Self {
        Self { config }
    }

    pub fn relax(
        &self,
        diagram: &VoronoiDiagram,
    ) -> MathResult<(VoronoiDiagram, LloydRelaxationStats)> {
        self.relax_with_rng(diagram, &mut rand::rng())
    }

    /// Wie `relax`; `rng` liefert die Gewichte der neu erzeugten Sites.
    ///
    /// Schlägt fehl, sobald eine Region offen (`UnboundedRegion`) oder
    /// entartet (`DegenerateRegion`) ist.
    pub fn relax_with_rng<R: Rng>(
        &self,
        diagram: &VoronoiDiagram,
        rng: &mut R,
    ) -> MathResult<(VoronoiDiagram, LloydRelaxationStats)> {
        let bounds = *diagram.bounds();
        let mut stats = LloydRelaxationStats::default();

        // Der erste Durchlauf liest direkt aus `diagram`
        let mut current: Option<VoronoiDiagram> = None;
        for iteration in 0..self.config.iterations {
            let source = current.as_ref().unwrap_or(diagram);
            let old_points = source.site_coordinates();
            let centroids = Self::centroids(source)?;

            let mut total_movement_sq = 0.0_f32;
            let mut max_movement_sq = 0.0_f32;
            for (old, new) in old_points.iter().zip(&centroids) {
                let movement_sq = old.distance_squared(*new);
                total_movement_sq += movement_sq;
                max_movement_sq = max_movement_sq.max(movement_sq);
            }

            current = Some(VoronoiDiagram::with_rng(&centroids, bounds, rng)?);

            stats.iterations_performed = iteration + 1;
            stats.total_movement_last_iteration = if centroids.is_empty() {
                0.0
            } else {
                (total_movement_sq / centroids.len() as f32).sqrt()
            };
            stats.max_movement_last_iteration = max_movement_sq.sqrt();

            debug!(
                "LloydRelaxation: iteration {} of {}, rms movement {:.5}, max movement {:.5}",
                iteration + 1,
                self.config.iterations,
                stats.total_movement_last_iteration,
                stats.max_movement_last_iteration
            );
        }

        let relaxed = match current {
            Some(relaxed) => relaxed,
            None => VoronoiDiagram::with_rng(&diagram.site_coordinates(), bounds, rng)?,
        };
        Ok((relaxed, stats))
    }

    /// Schwerpunkte aller Regionen in Site-Reihenfolge.
    pub fn centroids(diagram: &VoronoiDiagram) -> MathResult<Vec<Vec2>> {
        diagram
            .sites()
            .iter()
            .map(|site| {
                let region = site.region(diagram.edges(), diagram.bounds());
                polygon_centroid(region, site.coordinate())
            })
            .collect()
    }

    /// Summe der quadrierten Abstände zwischen Site und Regionsschwerpunkt.
    pub fn centroid_energy(diagram: &VoronoiDiagram) -> MathResult<f32> {
        let centroids = Self::centroids(diagram)?;
        Ok(diagram
            .sites()
            .iter()
            .zip(centroids)
            .map(|(site, centroid)| site.coordinate().distance_squared(centroid))
            .sum())
    }
}
