// src/math/point_distribution/voronoi/event_queue.rs

use super::half_edge::{HalfEdgeArena, HalfEdgeId};
use bevy::math::Vec2;

/// Bucket-Queue der vorhergesagten Kreisereignisse.
///
/// Die Buckets teilen den y-Bereich der Sites gleichmäßig auf; jeder Bucket
/// hält eine nach `ystar` (dann x des Knotens) sortierte einfach verkettete
/// Liste. Da immer ab dem kleinsten nicht-leeren Bucket gesucht wird, ist das
/// Minimum exakt, auch wenn die Bucket-Zuordnung nur grob ist.
#[derive(Debug)]
pub(crate) struct EventQueue {
    heads: Vec<Option<HalfEdgeId>>,
    count: usize,
    min_bucket: usize,
    y_min: f32,
    delta_y: f32,
}

impl EventQueue {
    pub fn new(y_min: f32, delta_y: f32, sqrt_site_count: usize) -> Self {
        Self {
            heads: vec![None; 4 * sqrt_site_count],
            count: 0,
            min_bucket: 0,
            y_min,
            delta_y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn bucket(&self, ystar: f32) -> usize {
        let hash_size = self.heads.len() as isize;
        let bucket = (((ystar - self.y_min) / self.delta_y) * hash_size as f32) as isize;
        bucket.clamp(0, hash_size - 1) as usize
    }

    /// Reiht eine Halbkante mit gesetztem Knoten und `ystar` ein.
    pub fn insert(&mut self, half_edges: &mut HalfEdgeArena, half_edge: HalfEdgeId) {
        let (ystar, x) = {
            let he = half_edges.get(half_edge);
            match he.vertex {
                Some(vertex) => (he.ystar, vertex.x()),
                None => panic!("queued half-edge {:?} carries no vertex", half_edge),
            }
        };

        let bucket = self.bucket(ystar);
        if bucket < self.min_bucket {
            self.min_bucket = bucket;
        }

        let mut previous: Option<HalfEdgeId> = None;
        let mut next = self.heads[bucket];
        while let Some(candidate) = next {
            let other = half_edges.get(candidate);
            let other_x = other.vertex.map_or(f32::NAN, |v| v.x());
            if ystar > other.ystar || (ystar == other.ystar && x > other_x) {
                previous = Some(candidate);
                next = other.next_in_queue;
            } else {
                break;
            }
        }

        half_edges.get_mut(half_edge).next_in_queue = next;
        match previous {
            Some(previous) => half_edges.get_mut(previous).next_in_queue = Some(half_edge),
            None => self.heads[bucket] = Some(half_edge),
        }
        self.count += 1;
    }

    /// Nimmt ein anstehendes Ereignis der Halbkante zurück. Ohne Knoten
    /// (nicht eingereiht) passiert nichts.
    pub fn remove(&mut self, half_edges: &mut HalfEdgeArena, half_edge: HalfEdgeId) {
        let (ystar, queued) = {
            let he = half_edges.get(half_edge);
            (he.ystar, he.vertex.is_some())
        };
        if !queued {
            return;
        }

        let bucket = self.bucket(ystar);
        let following = half_edges.get(half_edge).next_in_queue;

        if self.heads[bucket] == Some(half_edge) {
            self.heads[bucket] = following;
        } else {
            let mut previous = match self.heads[bucket] {
                Some(head) => head,
                None => panic!("half-edge {:?} missing from its event bucket", half_edge),
            };
            loop {
                match half_edges.get(previous).next_in_queue {
                    Some(next) if next == half_edge => break,
                    Some(next) => previous = next,
                    None => panic!("half-edge {:?} missing from its event bucket", half_edge),
                }
            }
            half_edges.get_mut(previous).next_in_queue = following;
        }

        self.count -= 1;
        let removed = half_edges.get_mut(half_edge);
        removed.vertex = None;
        removed.next_in_queue = None;
    }

    fn adjust_min_bucket(&mut self) {
        while self.min_bucket < self.heads.len() - 1 && self.heads[self.min_bucket].is_none() {
            self.min_bucket += 1;
        }
    }

    /// Koordinate `(x des Knotens, ystar)` des kleinsten Ereignisses.
    pub fn min(&mut self, half_edges: &HalfEdgeArena) -> Vec2 {
        assert!(!self.is_empty(), "min() called on an empty event queue");
        self.adjust_min_bucket();
        let head = self.min_head();
        let he = half_edges.get(head);
        match he.vertex {
            Some(vertex) => Vec2::new(vertex.x(), he.ystar),
            None => panic!("queued half-edge {:?} carries no vertex", head),
        }
    }

    /// Entnimmt das kleinste Ereignis. Der Knoten bleibt an der Halbkante.
    pub fn extract_min(&mut self, half_edges: &mut HalfEdgeArena) -> HalfEdgeId {
        assert!(!self.is_empty(), "extract_min() called on an empty event queue");
        self.adjust_min_bucket();
        let head = self.min_head();
        let he = half_edges.get_mut(head);
        self.heads[self.min_bucket] = he.next_in_queue.take();
        self.count -= 1;
        head
    }

    fn min_head(&self) -> HalfEdgeId {
        match self.heads[self.min_bucket] {
            Some(head) => head,
            None => panic!("event queue count and buckets are out of sync"),
        }
    }
}
