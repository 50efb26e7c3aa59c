// src/math/point_distribution/voronoi/voronoi_diagram.rs

use super::{
    edge::{Edge, EdgeId},
    fortune::SweepEngine,
    reorder::{ChainCriterion, EdgeReorderer},
    site::{Site, SiteId, SiteList},
};
use crate::math::{
    algorithms::{
        point_relaxation::{LloydConfig, LloydRelaxation, LloydRelaxationStats},
        spanning_tree::{KruskalType, kruskal},
    },
    error::{MathError, MathResult},
    geometry::{Circle, LineSegment},
    types::{Bounds2D, PointKey},
};
use bevy::log::{debug, warn};
use bevy::math::Vec2;
use rand::Rng;
use std::collections::HashMap;

/// Fertiges Voronoi-Diagramm samt dualer Delaunay-Triangulation.
///
/// Alle Abfragen über Koordinaten verwenden exakte Gleichheit; unbekannte
/// Koordinaten liefern leere Ergebnisse.
#[derive(Debug)]
pub struct VoronoiDiagram {
    sites: SiteList,
    sites_by_location: HashMap<PointKey, SiteId>,
    edges: Vec<Edge>,
    vertices: Vec<Vec2>,
    bounds: Bounds2D,
    duplicates_skipped: usize,
}

impl VoronoiDiagram {
    /// Baut das Diagramm über `points`, geclippt auf `bounds`.
    pub fn new(points: &[Vec2], bounds: Bounds2D) -> MathResult<Self> {
        Self::with_rng(points, bounds, &mut rand::rng())
    }

    /// Wie `new`, mit anschließender Lloyd-Relaxation.
    pub fn with_relaxation(points: &[Vec2], bounds: Bounds2D, iterations: usize) -> MathResult<Self> {
        let mut diagram = Self::new(points, bounds)?;
        if iterations > 0 {
            diagram.lloyd_relaxation(iterations)?;
        }
        Ok(diagram)
    }

    /// Baut das Diagramm; `rng` liefert die (informativen) Site-Gewichte.
    pub fn with_rng<R: Rng>(
        points: &[Vec2],
        bounds: Bounds2D,
        rng: &mut R,
    ) -> MathResult<Self> {
        if !bounds.is_valid() {
            return Err(MathError::InvalidConfiguration {
                message: format!("Invalid diagram bounds: {}", bounds),
            });
        }

        let mut sites = SiteList::new();
        let mut seen: HashMap<PointKey, usize> = HashMap::with_capacity(points.len());
        let mut duplicates_skipped = 0;

        for (index, &p) in points.iter().enumerate() {
            if !p.is_finite() {
                return Err(MathError::NonFinitePoint {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }

            let key = PointKey::new(p);
            if let Some(&first) = seen.get(&key) {
                warn!(
                    "VoronoiDiagram: point #{} at {:?} duplicates point #{}, skipped",
                    index, p, first
                );
                duplicates_skipped += 1;
                continue;
            }
            seen.insert(key, index);

            let weight = rng.random::<f32>() * 100.0;
            sites.add(Site::new(p, sites.len(), weight));
        }

        sites.sort();
        let output = SweepEngine::run(&mut sites, &bounds);

        let sites_by_location = sites
            .iter()
            .map(|site| (PointKey::new(site.coordinate()), site.id()))
            .collect();

        debug!(
            "VoronoiDiagram: {} sites ({} duplicates skipped), {} edges, {} vertices",
            sites.len(),
            duplicates_skipped,
            output.edges.len(),
            output.vertices.len()
        );

        Ok(Self {
            sites,
            sites_by_location,
            edges: output.edges,
            vertices: output.vertices,
            bounds,
            duplicates_skipped,
        })
    }

    pub fn sites(&self) -> &SiteList {
        &self.sites
    }

    /// Site mit exakt dieser Koordinate.
    pub fn site_at(&self, coord: Vec2) -> Option<&Site> {
        self.sites_by_location
            .get(&PointKey::new(coord))
            .map(|&id| self.sites.get(id))
    }

    /// Alle Kanten, auch die außerhalb des Rechtecks.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.0]
    }

    /// Finale Voronoi-Knoten, indiziert über `VertexRef::Finite`.
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn bounds(&self) -> &Bounds2D {
        &self.bounds
    }

    pub fn duplicates_skipped(&self) -> usize {
        self.duplicates_skipped
    }

    pub fn site_coordinates(&self) -> Vec<Vec2> {
        self.sites.site_coordinates()
    }

    /// Regionspolygon der Site bei `coord`; leer, wenn keine Site dort liegt
    /// oder die Region nicht geschlossen werden kann.
    pub fn region(&self, coord: Vec2) -> Vec<Vec2> {
        self.site_at(coord)
            .map(|site| site.region(&self.edges, &self.bounds).to_vec())
            .unwrap_or_default()
    }

    /// Regionen aller Sites in Site-Reihenfolge.
    pub fn regions(&self) -> Vec<Vec<Vec2>> {
        self.sites
            .iter()
            .map(|site| site.region(&self.edges, &self.bounds).to_vec())
            .collect()
    }

    pub fn neighbor_sites_for_site(&self, coord: Vec2) -> Vec<Vec2> {
        let Some(site) = self.site_at(coord) else {
            return Vec::new();
        };
        site.neighbor_sites(&self.edges, &self.bounds)
            .into_iter()
            .map(|id| self.sites.get(id).coordinate())
            .collect()
    }

    pub fn circles(&self) -> Vec<Circle> {
        self.sites.circles(&self.edges)
    }

    fn edges_for_site(&self, coord: Vec2) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(move |edge| edge.touches_site_at(coord))
    }

    /// Sichtbare Voronoi-Kanten der Site bei `coord`.
    pub fn voronoi_boundary_for_site(&self, coord: Vec2) -> Vec<LineSegment> {
        self.edges_for_site(coord)
            .filter_map(Edge::voronoi_edge)
            .collect()
    }

    pub fn delaunay_lines_for_site(&self, coord: Vec2) -> Vec<LineSegment> {
        self.edges_for_site(coord)
            .map(Edge::delaunay_line)
            .collect()
    }

    /// Alle sichtbaren, auf das Rechteck geclippten Voronoi-Kanten.
    pub fn voronoi_diagram(&self) -> Vec<LineSegment> {
        self.edges.iter().filter_map(Edge::voronoi_edge).collect()
    }

    /// Delaunay-Kante (Site zu Site) für jede Kante.
    pub fn delaunay_triangulation(&self) -> Vec<LineSegment> {
        self.edges.iter().map(Edge::delaunay_line).collect()
    }

    pub fn hull_edges(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|edge| edge.is_part_of_convex_hull())
            .map(Edge::index)
            .collect()
    }

    /// Delaunay-Kanten der konvexen Hülle, ungeordnet.
    pub fn hull(&self) -> Vec<LineSegment> {
        self.hull_edges()
            .into_iter()
            .map(|id| self.edges[id.0].delaunay_line())
            .collect()
    }

    /// Hüllpunkte als geordneter Ring.
    pub fn hull_points_in_order(&self) -> Vec<Vec2> {
        let hull_edges = self.hull_edges();
        let chain = EdgeReorderer::new(&hull_edges, &self.edges, ChainCriterion::Site);

        chain
            .edges()
            .iter()
            .zip(chain.orientations())
            .map(|(id, &orientation)| self.edges[id.0].site_coordinate(orientation))
            .collect()
    }

    /// Minimaler bzw. maximaler Spannbaum über die Delaunay-Kanten.
    pub fn spanning_tree(&self, kind: KruskalType) -> Vec<LineSegment> {
        kruskal(&self.delaunay_triangulation(), kind)
    }

    /// Ersetzt das Diagramm durch das Ergebnis von `iterations`
    /// Lloyd-Schritten.
    pub fn lloyd_relaxation(&mut self, iterations: usize) -> MathResult<LloydRelaxationStats> {
        let relaxation = LloydRelaxation::new(LloydConfig { iterations });
        let (relaxed, stats) = relaxation.relax(self)?;
        *self = relaxed;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::comparison::compare_by_y_then_x;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};
    use spade::{DelaunayTriangulation, Point2, Triangulation};
    use std::collections::HashSet;

    fn bounds10() -> Bounds2D {
        Bounds2D::from_rect(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    fn diagram(points: &[(f32, f32)], bounds: Bounds2D) -> VoronoiDiagram {
        let points: Vec<Vec2> = points.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        VoronoiDiagram::with_rng(&points, bounds, &mut StdRng::seed_from_u64(7)).unwrap()
    }

    fn random_points(seed: u64, count: usize, bounds: &Bounds2D) -> Vec<Vec2> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                Vec2::new(
                    bounds.min.x + rng.random::<f32>() * bounds.width(),
                    bounds.min.y + rng.random::<f32>() * bounds.height(),
                )
            })
            .collect()
    }

    /// Ungeordnetes Site-Paar, normalisiert über die Sweep-Ordnung.
    fn pair_key(segment: &LineSegment) -> (PointKey, PointKey) {
        let (a, b) = if compare_by_y_then_x(segment.p0, segment.p1).is_lt() {
            (segment.p0, segment.p1)
        } else {
            (segment.p1, segment.p0)
        };
        (PointKey::new(a), PointKey::new(b))
    }

    fn delaunay_pairs(diagram: &VoronoiDiagram) -> HashSet<(PointKey, PointKey)> {
        diagram.delaunay_triangulation().iter().map(pair_key).collect()
    }

    fn area(polygon: &[Vec2]) -> f32 {
        crate::math::geometry::polygon_area(polygon)
    }

    #[test]
    fn test_square_corners() {
        let d = diagram(
            &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)],
            bounds10(),
        );

        assert_eq!(d.vertices().len(), 1);
        assert_relative_eq!(d.vertices()[0].x, 5.0, epsilon = 1e-4);
        assert_relative_eq!(d.vertices()[0].y, 5.0, epsilon = 1e-4);

        // Die Diagonale schrumpft auf den Mittelpunkt und ist unsichtbar
        let visible = d.voronoi_diagram();
        assert_eq!(visible.len(), 4);
        assert_eq!(d.edges().len(), 5);
        let midpoints = [
            Vec2::new(5.0, 0.0),
            Vec2::new(10.0, 5.0),
            Vec2::new(5.0, 10.0),
            Vec2::new(0.0, 5.0),
        ];
        for segment in &visible {
            let (inner, outer) = if segment.p0.distance(Vec2::splat(5.0)) < 1e-3 {
                (segment.p0, segment.p1)
            } else {
                (segment.p1, segment.p0)
            };
            assert!(inner.distance(Vec2::splat(5.0)) < 1e-3);
            assert!(midpoints.iter().any(|m| m.distance(outer) < 1e-3), "{outer:?}");
        }

        // Durch die y-dann-x-Ordnung entsteht die Diagonale (0,0)-(10,10)
        let key = |x: f32, y: f32| PointKey::new(Vec2::new(x, y));
        let expected: HashSet<(PointKey, PointKey)> = [
            (key(0.0, 0.0), key(10.0, 0.0)),
            (key(0.0, 0.0), key(0.0, 10.0)),
            (key(10.0, 0.0), key(10.0, 10.0)),
            (key(0.0, 0.0), key(10.0, 10.0)),
            (key(0.0, 10.0), key(10.0, 10.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(delaunay_pairs(&d), expected);

        for region in d.regions() {
            assert_relative_eq!(area(&region), 25.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_square_corners_hull_and_circles() {
        let d = diagram(
            &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)],
            bounds10(),
        );

        assert_eq!(d.hull_edges().len(), 4);
        let ring = d.hull_points_in_order();
        assert_eq!(ring.len(), 4);
        let unique: HashSet<PointKey> = ring.iter().map(|&p| PointKey::new(p)).collect();
        assert_eq!(unique.len(), 4);
        for i in 0..ring.len() {
            let next = ring[(i + 1) % ring.len()];
            assert_relative_eq!(ring[i].distance(next), 10.0, epsilon = 1e-4);
        }

        // Nächste Kante liegt jeweils auf der Hülle
        assert!(d.circles().iter().all(|c| c.radius == 0.0));

        let mut neighbors = d.neighbor_sites_for_site(Vec2::new(0.0, 0.0));
        neighbors.sort_by(|a, b| compare_by_y_then_x(*a, *b));
        assert_eq!(
            neighbors,
            vec![Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0)]
        );
    }

    #[test]
    fn test_two_points() {
        let d = diagram(&[(2.0, 5.0), (8.0, 5.0)], bounds10());

        assert_eq!(d.edges().len(), 1);
        assert!(d.vertices().is_empty());
        let segments = d.voronoi_diagram();
        assert_eq!(segments.len(), 1);
        let ys = [segments[0].p0.y, segments[0].p1.y];
        assert!(segments.iter().all(|s| s.p0.x == 5.0 && s.p1.x == 5.0));
        assert!(ys.contains(&0.0) && ys.contains(&10.0));

        assert_relative_eq!(area(&d.region(Vec2::new(2.0, 5.0))), 50.0, epsilon = 1e-3);
        assert_relative_eq!(area(&d.region(Vec2::new(8.0, 5.0))), 50.0, epsilon = 1e-3);
        assert_eq!(d.hull_edges().len(), 1);
    }

    #[test]
    fn test_three_collinear_points() {
        let d = diagram(&[(1.0, 5.0), (5.0, 5.0), (9.0, 5.0)], bounds10());

        assert_eq!(d.edges().len(), 2);
        assert!(d.vertices().is_empty());
        for edge in d.edges() {
            assert_eq!(edge.a, 1.0);
            assert_eq!(edge.b, 0.0);
        }

        let areas: Vec<f32> = [1.0, 5.0, 9.0]
            .iter()
            .map(|&x| area(&d.region(Vec2::new(x, 5.0))))
            .collect();
        assert_relative_eq!(areas[0], 30.0, epsilon = 1e-3);
        assert_relative_eq!(areas[1], 40.0, epsilon = 1e-3);
        assert_relative_eq!(areas[2], 30.0, epsilon = 1e-3);
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let d = diagram(&[(1.0, 1.0), (5.0, 5.0), (1.0, 1.0), (-0.0, 3.0), (0.0, 3.0)], bounds10());
        assert_eq!(d.sites().len(), 3);
        assert_eq!(d.duplicates_skipped(), 2);
    }

    #[test]
    fn test_rejects_bad_input() {
        let result = VoronoiDiagram::new(&[Vec2::new(1.0, 1.0), Vec2::new(f32::NAN, 0.0)], bounds10());
        assert!(matches!(result, Err(MathError::NonFinitePoint { index: 1, .. })));

        let inverted = Bounds2D {
            min: Vec2::new(10.0, 10.0),
            max: Vec2::new(0.0, 0.0),
        };
        let result = VoronoiDiagram::new(&[Vec2::new(1.0, 1.0)], inverted);
        assert!(matches!(result, Err(MathError::InvalidConfiguration { .. })));
    }

    #[test]
    fn test_single_and_empty_input() {
        let d = diagram(&[], bounds10());
        assert!(d.edges().is_empty());
        assert!(d.regions().is_empty());

        let d = diagram(&[(3.0, 3.0)], bounds10());
        assert_eq!(d.sites().len(), 1);
        assert!(d.edges().is_empty());
        assert!(d.region(Vec2::new(3.0, 3.0)).is_empty());
        assert!(d.hull_points_in_order().is_empty());
    }

    #[test]
    fn test_unknown_coordinate_queries_are_empty() {
        let d = diagram(&[(2.0, 5.0), (8.0, 5.0)], bounds10());
        let unknown = Vec2::new(4.0, 4.0);
        assert!(d.region(unknown).is_empty());
        assert!(d.neighbor_sites_for_site(unknown).is_empty());
        assert!(d.voronoi_boundary_for_site(unknown).is_empty());
        assert!(d.delaunay_lines_for_site(unknown).is_empty());
    }

    #[test]
    fn test_interior_site_circle_and_neighbors() {
        // Groß genug, damit alle drei Knoten innerhalb liegen
        let bounds = Bounds2D::from_rect(-20.0, -20.0, 50.0, 50.0).unwrap();
        let d = diagram(&[(0.0, 0.0), (10.0, 0.0), (5.0, 10.0), (5.0, 4.0)], bounds);
        let center = Vec2::new(5.0, 4.0);

        let circle = d
            .circles()
            .into_iter()
            .find(|c| c.center == center)
            .unwrap();
        assert_relative_eq!(circle.radius, 3.0, epsilon = 1e-5);

        let neighbors: HashSet<PointKey> = d
            .neighbor_sites_for_site(center)
            .into_iter()
            .map(PointKey::new)
            .collect();
        assert_eq!(neighbors.len(), 3);
        assert_eq!(d.delaunay_lines_for_site(center).len(), 3);
        assert_eq!(d.voronoi_boundary_for_site(center).len(), 3);
        assert_eq!(d.region(center).len(), 3);
    }

    #[test]
    fn test_random_regions_partition_bounds() {
        let bounds = Bounds2D::from_rect(-50.0, -20.0, 100.0, 60.0).unwrap();
        for seed in [1_u64, 2, 3] {
            let points = random_points(seed, 40, &bounds);
            let d = VoronoiDiagram::new(&points, bounds).unwrap();

            let regions = d.regions();
            assert_eq!(regions.len(), 40);
            assert!(regions.iter().all(|r| r.len() >= 3));
            let total: f32 = regions.iter().map(|r| area(r)).sum();
            assert_relative_eq!(total, bounds.area(), max_relative = 1e-3);

            for region in &regions {
                for p in region {
                    assert!(p.x >= bounds.min.x - 1e-3 && p.x <= bounds.max.x + 1e-3);
                    assert!(p.y >= bounds.min.y - 1e-3 && p.y <= bounds.max.y + 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_unit_square_with_center_partitions_bounds() {
        let bounds = Bounds2D::from_rect(0.0, 0.0, 1.0, 1.0).unwrap();
        let d = diagram(
            &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.5)],
            bounds,
        );

        for site in d.site_coordinates() {
            let expected = if site == Vec2::new(0.5, 0.5) { 0.5 } else { 0.125 };
            assert_relative_eq!(area(&d.region(site)), expected, epsilon = 1e-5);
        }
        let total: f32 = d.regions().iter().map(|r| area(r)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_sites_on_bounds_corners_and_sides() {
        let mut points = Vec::new();
        for y in [0.0, 5.0, 10.0] {
            for x in [0.0, 5.0, 10.0] {
                points.push((x, y));
            }
        }
        let d = diagram(&points, bounds10());

        let total: f32 = d.regions().iter().map(|r| area(r)).sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-2);
        assert_relative_eq!(area(&d.region(Vec2::new(5.0, 5.0))), 25.0, epsilon = 1e-3);
        assert_relative_eq!(area(&d.region(Vec2::new(0.0, 0.0))), 6.25, epsilon = 1e-3);
        assert_relative_eq!(area(&d.region(Vec2::new(10.0, 5.0))), 12.5, epsilon = 1e-3);

        // Nicht-kozirkulär: Sites auf dem Rand in allgemeiner Lage
        let d = diagram(
            &[
                (0.0, 0.0),
                (3.0, 0.0),
                (10.0, 4.0),
                (10.0, 10.0),
                (6.0, 10.0),
                (0.0, 7.0),
                (4.0, 5.0),
            ],
            bounds10(),
        );
        let regions = d.regions();
        assert!(regions.iter().all(|r| r.len() >= 3));
        let total: f32 = regions.iter().map(|r| area(r)).sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-2);
    }

    #[test]
    fn test_sites_outside_bounds() {
        let d = diagram(
            &[(-2.0, 5.0), (12.0, 5.0), (5.0, -2.0), (5.0, 12.0), (5.0, 5.0)],
            bounds10(),
        );

        // Bisektoren zum Zentrum bei 1.5 bzw. 8.5
        assert_relative_eq!(area(&d.region(Vec2::new(5.0, 5.0))), 49.0, epsilon = 1e-3);
        for outer in [(-2.0, 5.0), (12.0, 5.0), (5.0, -2.0), (5.0, 12.0)] {
            let region = d.region(Vec2::new(outer.0, outer.1));
            assert_relative_eq!(area(&region), 12.75, epsilon = 1e-3);
        }
        let total: f32 = d.regions().iter().map(|r| area(r)).sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-2);
    }

    #[test]
    fn test_random_sites_around_bounds_partition_bounds() {
        let bounds = bounds10();
        let spread = Bounds2D::from_rect(-5.0, -5.0, 20.0, 20.0).unwrap();
        for seed in [31_u64, 32, 33, 34] {
            let points = random_points(seed, 30, &spread);
            let d = VoronoiDiagram::new(&points, bounds).unwrap();

            // Sites weit außerhalb haben keine Region im Rechteck
            let total: f32 = d.regions().iter().map(|r| area(r)).sum();
            assert_relative_eq!(total, bounds.area(), max_relative = 1e-3);
        }
    }

    #[test]
    fn test_delaunay_edges_connect_distinct_sites() {
        let bounds = bounds10();
        let points = random_points(11, 30, &bounds);
        let d = VoronoiDiagram::new(&points, bounds).unwrap();
        let inputs: HashSet<PointKey> = points.iter().map(|&p| PointKey::new(p)).collect();

        for segment in d.delaunay_triangulation() {
            assert!(inputs.contains(&PointKey::new(segment.p0)));
            assert!(inputs.contains(&PointKey::new(segment.p1)));
            assert_ne!(PointKey::new(segment.p0), PointKey::new(segment.p1));
        }
    }

    #[test]
    fn test_euler_relation() {
        let bounds = Bounds2D::from_rect(0.0, 0.0, 100.0, 100.0).unwrap();
        for seed in [5_u64, 6, 7, 8] {
            let points = random_points(seed, 25, &bounds);
            let d = VoronoiDiagram::new(&points, bounds).unwrap();
            let v = d.vertices().len() as i64;
            let e = d.edges().len() as i64;
            let n = d.sites().len() as i64;
            assert_eq!(v - e + n, 1, "seed {seed}");
        }
    }

    #[test]
    fn test_matches_spade_delaunay() {
        let bounds = Bounds2D::from_rect(0.0, 0.0, 100.0, 100.0).unwrap();
        for seed in 20_u64..30 {
            let count = 4 + (seed as usize % 7);
            let points = random_points(seed, count, &bounds);
            let d = VoronoiDiagram::new(&points, bounds).unwrap();

            let mut reference: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
            for p in &points {
                reference
                    .insert(Point2::new(p.x as f64, p.y as f64))
                    .unwrap();
            }
            let expected: HashSet<(PointKey, PointKey)> = reference
                .undirected_edges()
                .map(|edge| {
                    let [a, b] = edge.vertices();
                    let (pa, pb) = (a.position(), b.position());
                    pair_key(&LineSegment::new(
                        Vec2::new(pa.x as f32, pa.y as f32),
                        Vec2::new(pb.x as f32, pb.y as f32),
                    ))
                })
                .collect();

            assert_eq!(delaunay_pairs(&d), expected, "seed {seed}");
        }
    }

    #[test]
    fn test_spanning_tree_over_square_with_center() {
        let d = diagram(
            &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.5)],
            Bounds2D::from_rect(0.0, 0.0, 1.0, 1.0).unwrap(),
        );
        assert_eq!(d.delaunay_triangulation().len(), 8);

        let min_tree = d.spanning_tree(KruskalType::Minimum);
        let max_tree = d.spanning_tree(KruskalType::Maximum);
        assert_eq!(min_tree.len(), 4);
        assert_eq!(max_tree.len(), 4);

        let total = |tree: &[LineSegment]| tree.iter().map(LineSegment::length).sum::<f32>();
        assert_relative_eq!(total(&min_tree), 2.0 * 2.0_f32.sqrt(), epsilon = 1e-5);
        assert_relative_eq!(total(&max_tree), 3.0 + 0.5 * 2.0_f32.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_with_relaxation_keeps_site_count() {
        let bounds = Bounds2D::from_rect(0.0, 0.0, 100.0, 100.0).unwrap();
        let points = random_points(42, 30, &bounds);
        let d = VoronoiDiagram::with_relaxation(&points, bounds, 3).unwrap();
        assert_eq!(d.sites().len(), 30);
        let total: f32 = d.regions().iter().map(|r| area(r)).sum();
        assert_relative_eq!(total, bounds.area(), max_relative = 1e-3);
    }
}
