// src/math/point_distribution/voronoi/side.rs

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seite einer Kante bzw. Halbkante relativ zu ihrem Bisektor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    fn slot(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Zwei Werte, adressiert über `Side` statt über eine Hash-Map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SidePair<T>([T; 2]);

impl<T> SidePair<T> {
    pub fn new(left: T, right: T) -> Self {
        Self([left, right])
    }

    pub fn left(&self) -> &T {
        &self.0[0]
    }

    pub fn right(&self) -> &T {
        &self.0[1]
    }
}

impl<T> Index<Side> for SidePair<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.0[side.slot()]
    }
}

impl<T> IndexMut<Side> for SidePair<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.0[side.slot()]
    }
}
