// src/math/algorithms/spanning_tree.rs

//! Minimaler bzw. maximaler Spannbaum nach Kruskal.
//!
//! Die Knoten ergeben sich implizit aus den Endpunkten der Segmente; zwei
//! Endpunkte sind genau dann derselbe Knoten, wenn ihre Koordinaten exakt
//! übereinstimmen.

use crate::math::{geometry::LineSegment, types::PointKey};
use bevy::math::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KruskalType {
    #[default]
    Minimum,
    Maximum,
}

/// Disjunkte Mengen mit Vereinigung nach Größe und Pfadkompression.
#[derive(Debug, Default)]
struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    nodes: HashMap<PointKey, usize>,
}

impl UnionFind {
    fn node(&mut self, point: Vec2) -> usize {
        let next = self.parent.len();
        let node = *self.nodes.entry(PointKey::new(point)).or_insert(next);
        if node == next {
            self.parent.push(next);
            self.size.push(1);
        }
        node
    }

    /// Iterativ, damit lange Ketten den Stack nicht belasten.
    fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union_roots(&mut self, root0: usize, root1: usize) {
        if self.size[root0] >= self.size[root1] {
            self.parent[root1] = root0;
            self.size[root0] += self.size[root1];
        } else {
            self.parent[root0] = root1;
            self.size[root1] += self.size[root0];
        }
    }
}

/// Kruskal über die gegebenen Segmente. Die Eingabe bleibt unverändert.
pub fn kruskal(line_segments: &[LineSegment], kind: KruskalType) -> Vec<LineSegment> {
    let mut segments = line_segments.to_vec();
    // Verarbeitung von hinten nach vorne, daher die umgekehrten Vergleiche
    match kind {
        KruskalType::Maximum => segments.sort_by(LineSegment::compare_lengths),
        KruskalType::Minimum => segments.sort_by(LineSegment::compare_lengths_max),
    }

    let mut sets = UnionFind::default();
    let mut tree = Vec::new();

    for segment in segments.into_iter().rev() {
        let node0 = sets.node(segment.p0);
        let node1 = sets.node(segment.p1);
        let root0 = sets.find(node0);
        let root1 = sets.find(node1);
        if root0 == root1 {
            continue;
        }

        tree.push(segment);
        sets.union_roots(root0, root1);
    }

    tree
}
