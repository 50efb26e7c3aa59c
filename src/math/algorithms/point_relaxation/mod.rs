// src/math/algorithms/point_relaxation/mod.rs

pub mod lloyd;

pub use self::lloyd::{LloydConfig, LloydRelaxation, LloydRelaxationStats};
