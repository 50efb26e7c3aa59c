// src/lib.rs

// Eigene Module deklarieren
pub mod debug;
pub mod math;

pub use math::prelude;
