// src/math/types/point.rs
use super::*;

/// Hashbarer Schlüssel für die exakte Identität einer Koordinate.
///
/// Zwei Punkte erhalten genau dann denselben Schlüssel, wenn beide Komponenten
/// bitweise gleich sind; `-0.0` wird vorher auf `0.0` normalisiert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey {
    x: u32,
    y: u32,
}

impl PointKey {
    pub fn new(point: Point2D) -> Self {
        // -0.0 + 0.0 == +0.0
        Self {
            x: (point.x + 0.0).to_bits(),
            y: (point.y + 0.0).to_bits(),
        }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f32::from_bits(self.x), f32::from_bits(self.y))
    }
}

// Conversion traits
impl From<Vec2> for PointKey {
    fn from(v: Vec2) -> Self {
        Self::new(v)
    }
}

impl From<PointKey> for Vec2 {
    fn from(key: PointKey) -> Self {
        key.to_vec2()
    }
}
