// src/math/algorithms/mod.rs

// Deklaration der verschiedenen Algorithmus-Kategorien
pub mod point_relaxation;
pub mod spanning_tree;

pub use self::point_relaxation::{LloydConfig, LloydRelaxation, LloydRelaxationStats};
pub use self::spanning_tree::{KruskalType, kruskal};
