// src/math/point_distribution/voronoi/edge.rs

use super::{
    side::{Side, SidePair},
    site::SiteId,
    vertex::VertexRef,
};
use crate::math::{geometry::LineSegment, types::Bounds2D, utils::comparison};
use bevy::math::Vec2;
use std::cmp::Ordering;

/// Index einer Kante in `VoronoiDiagram::edges()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// Bisektor zwischen zwei Sites.
///
/// Die Gerade liegt in der Form `a*x + b*y = c` vor, wobei genau einer der
/// Koeffizienten `a`/`b` gleich 1 ist (gewählt nach der dominanten Achse
/// zwischen den beiden Sites). Fehlt einer der beiden Endknoten, reicht die
/// Kante ins Unendliche und gehört zur konvexen Hülle.
#[derive(Debug, Clone)]
pub struct Edge {
    index: EdgeId,
    sites: SidePair<SiteId>,
    site_coords: SidePair<Vec2>,
    vertices: SidePair<Option<VertexRef>>,
    pub a: f32,
    pub b: f32,
    pub c: f32,
    clipped_ends: Option<SidePair<Vec2>>,
}

impl Edge {
    /// Erzeugt den Bisektor zwischen `site0` (links) und `site1` (rechts).
    pub fn create_bisecting(
        index: EdgeId,
        site0: SiteId,
        p0: Vec2,
        site1: SiteId,
        p1: Vec2,
    ) -> Self {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let mut c = p0.x * dx + p0.y * dy + (dx * dx + dy * dy) * 0.5;

        let (a, b) = if dx.abs() > dy.abs() {
            c /= dx;
            (1.0, dy / dx)
        } else {
            c /= dy;
            (dx / dy, 1.0)
        };

        Self {
            index,
            sites: SidePair::new(site0, site1),
            site_coords: SidePair::new(p0, p1),
            vertices: SidePair::new(None, None),
            a,
            b,
            c,
            clipped_ends: None,
        }
    }

    pub fn index(&self) -> EdgeId {
        self.index
    }

    pub fn site(&self, side: Side) -> SiteId {
        self.sites[side]
    }

    pub fn site_coordinate(&self, side: Side) -> Vec2 {
        self.site_coords[side]
    }

    pub fn vertex(&self, side: Side) -> Option<VertexRef> {
        self.vertices[side]
    }

    pub(crate) fn set_vertex(&mut self, side: Side, vertex: VertexRef) {
        self.vertices[side] = Some(vertex);
    }

    pub fn touches_infinity(&self) -> bool {
        [Side::Left, Side::Right]
            .into_iter()
            .any(|side| self.vertices[side] == Some(VertexRef::AtInfinity))
    }

    pub fn is_part_of_convex_hull(&self) -> bool {
        self.vertices[Side::Left].is_none() || self.vertices[Side::Right].is_none()
    }

    /// Die jeweils andere Site der Kante, falls `site` an ihr beteiligt ist.
    pub fn neighbor_site(&self, site: SiteId) -> Option<SiteId> {
        if site == self.sites[Side::Left] {
            Some(self.sites[Side::Right])
        } else if site == self.sites[Side::Right] {
            Some(self.sites[Side::Left])
        } else {
            None
        }
    }

    pub fn touches_site_at(&self, coord: Vec2) -> bool {
        self.site_coords[Side::Left] == coord || self.site_coords[Side::Right] == coord
    }

    pub fn sites_distance(&self) -> f32 {
        self.site_coords[Side::Left].distance(self.site_coords[Side::Right])
    }

    /// Absteigend nach Site-Abstand.
    pub fn compare_sites_distances_max(edge0: &Edge, edge1: &Edge) -> Ordering {
        edge1
            .sites_distance()
            .partial_cmp(&edge0.sites_distance())
            .unwrap_or(Ordering::Equal)
    }

    /// Aufsteigend nach Site-Abstand.
    pub fn compare_sites_distances(edge0: &Edge, edge1: &Edge) -> Ordering {
        Self::compare_sites_distances_max(edge0, edge1).reverse()
    }

    /// Sichtbar ist eine Kante, wenn nach dem Clipping Endpunkte existieren.
    pub fn visible(&self) -> bool {
        self.clipped_ends.is_some()
    }

    pub fn clipped_ends(&self) -> Option<&SidePair<Vec2>> {
        self.clipped_ends.as_ref()
    }

    pub fn clipped_end(&self, side: Side) -> Option<Vec2> {
        self.clipped_ends.map(|ends| ends[side])
    }

    pub fn delaunay_line(&self) -> LineSegment {
        LineSegment::new(self.site_coords[Side::Left], self.site_coords[Side::Right])
    }

    pub fn voronoi_edge(&self) -> Option<LineSegment> {
        self.clipped_ends
            .map(|ends| LineSegment::new(ends[Side::Left], ends[Side::Right]))
    }

    /// Schneidet die Kante auf `bounds` zu.
    ///
    /// Gelaufen wird entlang der dominanten Achse der Geradengleichung: von
    /// einem vorhandenen Endknoten bzw. vom Rand bis zum gegenüberliegenden
    /// Rand. Liegt die Kante vollständig außerhalb, bleibt sie unsichtbar.
    pub(crate) fn clip_vertices(&mut self, bounds: &Bounds2D, vertices: &[Vec2]) {
        let (x_min, y_min) = (bounds.min.x, bounds.min.y);
        let (x_max, y_max) = (bounds.max.x, bounds.max.y);
        let (a, b, c) = (self.a, self.b, self.c);

        let (vertex0, vertex1) = if a == 1.0 && b >= 0.0 {
            (self.vertices[Side::Right], self.vertices[Side::Left])
        } else {
            (self.vertices[Side::Left], self.vertices[Side::Right])
        };
        // NaN (Knoten im Unendlichen) besteht keinen der Vergleiche unten
        let coord0 = vertex0.map(|v| v.coordinate(vertices));
        let coord1 = vertex1.map(|v| v.coordinate(vertices));

        let (mut x0, mut y0, mut x1, mut y1);

        if a == 1.0 {
            y0 = y_min;
            if let Some(v) = coord0.filter(|v| v.y > y_min) {
                y0 = v.y;
            }
            if y0 > y_max {
                return;
            }
            x0 = c - b * y0;

            y1 = y_max;
            if let Some(v) = coord1.filter(|v| v.y < y_max) {
                y1 = v.y;
            }
            if y1 < y_min {
                return;
            }
            x1 = c - b * y1;

            if (x0 > x_max && x1 > x_max) || (x0 < x_min && x1 < x_min) {
                return;
            }

            if x0 > x_max {
                x0 = x_max;
                y0 = (c - x0) / b;
            } else if x0 < x_min {
                x0 = x_min;
                y0 = (c - x0) / b;
            }

            if x1 > x_max {
                x1 = x_max;
                y1 = (c - x1) / b;
            } else if x1 < x_min {
                x1 = x_min;
                y1 = (c - x1) / b;
            }
        } else {
            x0 = x_min;
            if let Some(v) = coord0.filter(|v| v.x > x_min) {
                x0 = v.x;
            }
            if x0 > x_max {
                return;
            }
            y0 = c - a * x0;

            x1 = x_max;
            if let Some(v) = coord1.filter(|v| v.x < x_max) {
                x1 = v.x;
            }
            if x1 < x_min {
                return;
            }
            y1 = c - a * x1;

            if (y0 > y_max && y1 > y_max) || (y0 < y_min && y1 < y_min) {
                return;
            }

            if y0 > y_max {
                y0 = y_max;
                x0 = (c - y0) / a;
            } else if y0 < y_min {
                y0 = y_min;
                x0 = (c - y0) / a;
            }

            if y1 > y_max {
                y1 = y_max;
                x1 = (c - y1) / a;
            } else if y1 < y_min {
                y1 = y_min;
                x1 = (c - y1) / a;
            }
        }

        let start = Vec2::new(x0, y0);
        let end = Vec2::new(x1, y1);
        // Auf einen Punkt geschrumpft (zusammenfallende Knoten oder Ecke): unsichtbar
        if comparison::close_enough(start, end) {
            return;
        }
        // Vergleich der Verweise, nicht der Richtung: zwei fehlende Knoten gelten als gleich
        self.clipped_ends = Some(if vertex0 == self.vertices[Side::Left] {
            SidePair::new(start, end)
        } else {
            SidePair::new(end, start)
        });
    }
}
