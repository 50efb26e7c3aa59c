// src/math/point_distribution/voronoi/mod.rs

// Öffentliche Bausteine
pub mod builder;
pub mod config;
pub mod edge;
pub mod reorder;
pub mod side;
pub mod site;
pub mod vertex;
pub mod voronoi_diagram;

// Interne Sweep-Strukturen
mod edge_list;
mod event_queue;
mod fortune;
mod half_edge;
mod region;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Voronoi-Elemente
pub use self::builder::VoronoiBuilder;
pub use self::config::VoronoiConfig;
pub use self::edge::{Edge, EdgeId};
pub use self::region::{BoundsCheck, SiteTopology};
pub use self::reorder::{ChainCriterion, EdgeReorderer};
pub use self::side::{Side, SidePair};
pub use self::site::{Site, SiteId, SiteList};
pub use self::vertex::{Vertex, VertexRef};
pub use self::voronoi_diagram::VoronoiDiagram;
