// src/math/point_distribution/voronoi/edge_list.rs

use super::{
    edge::Edge,
    half_edge::{EdgeLink, HalfEdgeArena, HalfEdgeId},
};
use bevy::math::Vec2;

/// Sweep-Status (Beach-Line) als doppelt verkettete Liste von Halbkanten.
///
/// Die Liste wird links und rechts von je einer Wächter-Halbkante begrenzt.
/// Eine Hash-Tabelle über die x-Achse merkt sich zuletzt gefundene
/// Halbkanten, sodass `left_neighbor` nur noch ein kurzes Stück linear
/// suchen muss.
#[derive(Debug)]
pub(crate) struct EdgeList {
    x_min: f32,
    delta_x: f32,
    hash: Vec<Option<HalfEdgeId>>,
    left_end: HalfEdgeId,
    right_end: HalfEdgeId,
}

impl EdgeList {
    pub fn new(
        half_edges: &mut HalfEdgeArena,
        x_min: f32,
        delta_x: f32,
        sqrt_site_count: usize,
    ) -> Self {
        let hash_size = 2 * sqrt_site_count;
        let left_end = half_edges.create_sentinel();
        let right_end = half_edges.create_sentinel();
        half_edges.get_mut(left_end).right_neighbor = Some(right_end);
        half_edges.get_mut(right_end).left_neighbor = Some(left_end);

        let mut hash = vec![None; hash_size];
        hash[0] = Some(left_end);
        hash[hash_size - 1] = Some(right_end);

        Self {
            x_min,
            delta_x,
            hash,
            left_end,
            right_end,
        }
    }

    pub fn right_neighbor(half_edges: &HalfEdgeArena, half_edge: HalfEdgeId) -> HalfEdgeId {
        match half_edges.get(half_edge).right_neighbor {
            Some(neighbor) => neighbor,
            None => panic!("half-edge {:?} has no right neighbor", half_edge),
        }
    }

    pub fn left_neighbor_of(half_edges: &HalfEdgeArena, half_edge: HalfEdgeId) -> HalfEdgeId {
        match half_edges.get(half_edge).left_neighbor {
            Some(neighbor) => neighbor,
            None => panic!("half-edge {:?} has no left neighbor", half_edge),
        }
    }

    /// Fügt `new_half_edge` direkt rechts von `left` ein.
    pub fn insert(
        &self,
        half_edges: &mut HalfEdgeArena,
        left: HalfEdgeId,
        new_half_edge: HalfEdgeId,
    ) {
        let right = Self::right_neighbor(half_edges, left);
        {
            let inserted = half_edges.get_mut(new_half_edge);
            inserted.left_neighbor = Some(left);
            inserted.right_neighbor = Some(right);
        }
        half_edges.get_mut(right).left_neighbor = Some(new_half_edge);
        half_edges.get_mut(left).right_neighbor = Some(new_half_edge);
    }

    /// Hängt die Halbkante aus und markiert sie als gelöscht. Der Slot
    /// selbst wird erst vom Aufrufer freigegeben.
    pub fn remove(&self, half_edges: &mut HalfEdgeArena, half_edge: HalfEdgeId) {
        let left = Self::left_neighbor_of(half_edges, half_edge);
        let right = Self::right_neighbor(half_edges, half_edge);
        half_edges.get_mut(left).right_neighbor = Some(right);
        half_edges.get_mut(right).left_neighbor = Some(left);

        let removed = half_edges.get_mut(half_edge);
        removed.edge = EdgeLink::Deleted;
        removed.left_neighbor = None;
        removed.right_neighbor = None;
    }

    /// Die Halbkante unmittelbar links von `p`.
    pub fn left_neighbor(
        &mut self,
        half_edges: &HalfEdgeArena,
        edges: &[Edge],
        p: Vec2,
    ) -> HalfEdgeId {
        let hash_size = self.hash.len() as isize;

        // NaN (delta_x == 0) wird von `as` auf 0 abgebildet
        let bucket = (((p.x - self.x_min) / self.delta_x) * hash_size as f32) as isize;
        let bucket = bucket.clamp(0, hash_size - 1);

        let mut half_edge = self.get_hash(half_edges, bucket);
        let mut offset = 1;
        let mut half_edge = loop {
            if let Some(found) = half_edge {
                break found;
            }
            half_edge = self
                .get_hash(half_edges, bucket - offset)
                .or_else(|| self.get_hash(half_edges, bucket + offset));
            offset += 1;
        };

        let is_left_of = |id: HalfEdgeId| half_edges.get(id).is_left_of(p, edges);

        if half_edge == self.left_end || (half_edge != self.right_end && is_left_of(half_edge)) {
            loop {
                half_edge = Self::right_neighbor(half_edges, half_edge);
                if half_edge == self.right_end || !is_left_of(half_edge) {
                    break;
                }
            }
            half_edge = Self::left_neighbor_of(half_edges, half_edge);
        } else {
            loop {
                half_edge = Self::left_neighbor_of(half_edges, half_edge);
                if half_edge == self.left_end || is_left_of(half_edge) {
                    break;
                }
            }
        }

        if bucket > 0 && bucket < hash_size - 1 {
            self.hash[bucket as usize] = Some(half_edge);
        }
        half_edge
    }

    fn get_hash(&mut self, half_edges: &HalfEdgeArena, bucket: isize) -> Option<HalfEdgeId> {
        if bucket < 0 || bucket >= self.hash.len() as isize {
            return None;
        }
        let entry = self.hash[bucket as usize]?;
        match half_edges.try_get(entry) {
            Some(half_edge) if half_edge.edge != EdgeLink::Deleted => Some(entry),
            // Gelöschter oder bereits freigegebener Eintrag
            _ => {
                self.hash[bucket as usize] = None;
                None
            }
        }
    }

    /// Gibt alle noch verketteten Halbkanten inklusive der Wächter frei.
    pub fn teardown(self, half_edges: &mut HalfEdgeArena) {
        let mut current = Some(self.left_end);
        while let Some(id) = current {
            current = half_edges.get(id).right_neighbor;
            half_edges.release(id);
        }
    }
}
