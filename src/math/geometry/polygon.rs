// src/math/geometry/polygon.rs

//! Fläche, Umlaufsinn und Schwerpunkt einfacher Polygone.
//!
//! Polygone werden als offener Punktring übergeben (letzter Punkt != erster
//! Punkt). Fläche und Umlaufsinn werden über `geo` berechnet.

use crate::math::{
    error::{MathError, MathResult},
    utils::comparison,
};
use bevy::math::Vec2;
use geo::{Area, LineString, Polygon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonWinding {
    Clockwise,
    CounterClockwise,
    None,
}

fn to_geo_polygon(points: &[Vec2]) -> Polygon<f32> {
    let exterior: LineString<f32> = points
        .iter()
        .map(|p| (p.x, p.y))
        .collect::<Vec<_>>()
        .into();
    Polygon::new(exterior, vec![])
}

/// Vorzeichenbehaftete Fläche (positiv bei Gegen-Uhrzeigersinn, y nach oben).
pub fn signed_polygon_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    to_geo_polygon(points).signed_area()
}

pub fn polygon_area(points: &[Vec2]) -> f32 {
    signed_polygon_area(points).abs()
}

pub fn polygon_winding(points: &[Vec2]) -> PolygonWinding {
    let signed_area = signed_polygon_area(points);
    if signed_area < 0.0 {
        PolygonWinding::Clockwise
    } else if signed_area > 0.0 {
        PolygonWinding::CounterClockwise
    } else {
        PolygonWinding::None
    }
}

/// Schwerpunkt über die flächengewichtete Eckpunktformel.
///
/// `site` dient nur der Fehlermeldung. Bei (nahezu) verschwindender Fläche
/// wird `DegenerateRegion` zurückgegeben statt NaN/Inf zu liefern.
pub fn polygon_centroid(points: &[Vec2], site: Vec2) -> MathResult<Vec2> {
    let n = points.len();
    if n == 0 {
        return Err(MathError::UnboundedRegion { site });
    }

    let mut area_sum_doubled = 0.0;
    let mut centroid_x_sum = 0.0;
    let mut centroid_y_sum = 0.0;

    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n]; // Nächster Punkt mit Umlauf

        let cross_term = p1.x * p2.y - p2.x * p1.y;
        area_sum_doubled += cross_term;
        centroid_x_sum += (p1.x + p2.x) * cross_term;
        centroid_y_sum += (p1.y + p2.y) * cross_term;
    }

    let signed_area = 0.5 * area_sum_doubled;
    if comparison::nearly_zero(signed_area) {
        return Err(MathError::DegenerateRegion {
            site,
            area: signed_area,
        });
    }

    let six_times_area = 6.0 * signed_area;
    Ok(Vec2::new(
        centroid_x_sum / six_times_area,
        centroid_y_sum / six_times_area,
    ))
}
