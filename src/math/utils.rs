// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    /// Toleranz, unter der zwei Regionspunkte als identisch gelten.
    pub const CLOSE_ENOUGH: f32 = 0.005;
    /// Determinanten-Schwelle, unter der zwei Bisektoren als parallel gelten.
    pub const PARALLEL_DETERMINANT: f32 = 1.0e-10;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::{CLOSE_ENOUGH, EPSILON};
    use bevy::math::Vec2;
    use std::cmp::Ordering;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }

    /// Zwei Punkte liegen näher als `CLOSE_ENOUGH` beieinander.
    pub fn close_enough(p0: Vec2, p1: Vec2) -> bool {
        p0.distance(p1) < CLOSE_ENOUGH
    }

    /// Sweep-Ordnung: zuerst y aufsteigend, bei Gleichstand x aufsteigend.
    pub fn compare_by_y_then_x(a: Vec2, b: Vec2) -> Ordering {
        a.y.partial_cmp(&b.y)
            .unwrap_or(Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    }

}
