// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod polygon;
pub mod segment;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen
pub use self::polygon::{
    PolygonWinding, polygon_area, polygon_centroid, polygon_winding, signed_polygon_area,
};
pub use self::segment::{Circle, LineSegment};
