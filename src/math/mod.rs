// src/math/mod.rs
pub mod algorithms;
pub mod error;
pub mod geometry;
pub mod point_distribution;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        algorithms::{
            point_relaxation::{LloydConfig, LloydRelaxation, LloydRelaxationStats},
            spanning_tree::{KruskalType, kruskal},
        },
        error::{MathError, MathResult},
        geometry::{Circle, LineSegment, PolygonWinding},
        point_distribution::voronoi::{
            ChainCriterion, Edge, EdgeId, EdgeReorderer, Side, SidePair, Site, SiteId,
            VertexRef, VoronoiBuilder, VoronoiConfig, VoronoiDiagram,
        },
        types::*,
    };
}
