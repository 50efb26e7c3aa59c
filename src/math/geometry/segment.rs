// src/math/geometry/segment.rs

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ein Liniensegment zwischen zwei Punkten.
///
/// Wird sowohl für sichtbare Voronoi-Kanten als auch für Delaunay-Kanten
/// (Site zu Site) verwendet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p0: Vec2,
    pub p1: Vec2,
}

impl LineSegment {
    pub fn new(p0: Vec2, p1: Vec2) -> Self {
        Self { p0, p1 }
    }

    pub fn length(&self) -> f32 {
        self.p0.distance(self.p1)
    }

    /// Absteigend nach Länge (das längste Segment zuerst).
    pub fn compare_lengths_max(a: &LineSegment, b: &LineSegment) -> Ordering {
        b.length()
            .partial_cmp(&a.length())
            .unwrap_or(Ordering::Equal)
    }

    /// Aufsteigend nach Länge.
    pub fn compare_lengths(a: &LineSegment, b: &LineSegment) -> Ordering {
        Self::compare_lengths_max(a, b).reverse()
    }
}

/// Kreis um eine Site, Radius halber Abstand zum nächsten Nachbarn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self {
            center: Vec2::new(center_x, center_y),
            radius,
        }
    }
}
