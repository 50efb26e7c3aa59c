// src/math/point_distribution/voronoi/vertex.rs

use super::{
    edge::Edge,
    half_edge::{HalfEdgeArena, HalfEdgeId},
    side::Side,
};
use crate::math::utils::{comparison, constants};
use bevy::math::Vec2;
use std::cmp::Ordering;

/// Ein (vorläufiger oder finaler) Voronoi-Knoten.
///
/// Vorläufige Knoten leben nur in der Halbkante, die auf das zugehörige
/// Kreisereignis wartet. Erst beim Abarbeiten des Ereignisses erhält der
/// Knoten einen Index in der Knotenliste des Diagramms (`VertexRef::Finite`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub coord: Vec2,
}

impl Vertex {
    /// Markierung für unbeschränkte Richtungen (NaN-Koordinate).
    pub const AT_INFINITY: Vertex = Vertex { coord: Vec2::NAN };

    pub fn new(x: f32, y: f32) -> Self {
        if x.is_nan() || y.is_nan() {
            return Self::AT_INFINITY;
        }
        Self {
            coord: Vec2::new(x, y),
        }
    }

    pub fn is_at_infinity(&self) -> bool {
        self.coord.is_nan()
    }

    pub fn x(&self) -> f32 {
        self.coord.x
    }

    pub fn y(&self) -> f32 {
        self.coord.y
    }

    /// Schnittpunkt der Bisektoren zweier benachbarter Halbkanten, sofern
    /// er auf der richtigen Seite beider Halbkanten liegt.
    ///
    /// `None` bei Wächtern, gelöschten Kanten, gleicher rechter Site oder
    /// (numerisch) parallelen Bisektoren.
    pub(crate) fn intersect(
        half_edges: &HalfEdgeArena,
        edges: &[Edge],
        half_edge0: HalfEdgeId,
        half_edge1: HalfEdgeId,
    ) -> Option<Vertex> {
        let he0 = half_edges.get(half_edge0);
        let he1 = half_edges.get(half_edge1);
        let edge0 = &edges[he0.edge.live()?.0];
        let edge1 = &edges[he1.edge.live()?.0];

        if edge0.site(Side::Right) == edge1.site(Side::Right) {
            return None;
        }

        let determinant = edge0.a * edge1.b - edge0.b * edge1.a;
        if determinant.abs() < constants::PARALLEL_DETERMINANT {
            return None;
        }

        let intersection_x = (edge0.c * edge1.b - edge1.c * edge0.b) / determinant;
        let intersection_y = (edge1.c * edge0.a - edge0.c * edge1.a) / determinant;

        // Maßgeblich ist die Halbkante mit der (in Sweep-Ordnung) kleineren rechten Site
        let (half_edge, edge) = if comparison::compare_by_y_then_x(
            edge0.site_coordinate(Side::Right),
            edge1.site_coordinate(Side::Right),
        ) == Ordering::Less
        {
            (he0, edge0)
        } else {
            (he1, edge1)
        };

        let right_of_site = intersection_x >= edge.site_coordinate(Side::Right).x;
        match (right_of_site, half_edge.side) {
            (true, Some(Side::Left)) | (false, Some(Side::Right)) => None,
            _ => Some(Vertex::new(intersection_x, intersection_y)),
        }
    }
}

/// Verweis einer Kante auf einen ihrer Endknoten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexRef {
    AtInfinity,
    /// Index in `VoronoiDiagram::vertices()`.
    Finite(usize),
}

impl VertexRef {
    pub fn index(self) -> Option<usize> {
        match self {
            VertexRef::AtInfinity => None,
            VertexRef::Finite(index) => Some(index),
        }
    }

    pub fn coordinate(self, vertices: &[Vec2]) -> Vec2 {
        match self {
            VertexRef::AtInfinity => Vertex::AT_INFINITY.coord,
            VertexRef::Finite(index) => vertices[index],
        }
    }
}
