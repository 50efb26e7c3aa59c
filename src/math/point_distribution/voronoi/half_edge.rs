// src/math/point_distribution/voronoi/half_edge.rs

use super::{
    edge::{Edge, EdgeId},
    side::Side,
    vertex::Vertex,
};
use bevy::math::Vec2;

/// Handle auf eine Halbkante in der `HalfEdgeArena`.
///
/// Die Generation macht Handles auf bereits freigegebene (und evtl. neu
/// vergebene) Slots erkennbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct HalfEdgeId {
    index: u32,
    generation: u32,
}

/// Kantenbezug einer Halbkante.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeLink {
    /// Begrenzungs-Halbkante der Sweep-Line ohne Geometrie.
    Sentinel,
    /// Aus der Sweep-Line entfernt.
    Deleted,
    Live(EdgeId),
}

impl EdgeLink {
    pub fn live(self) -> Option<EdgeId> {
        match self {
            EdgeLink::Live(id) => Some(id),
            EdgeLink::Sentinel | EdgeLink::Deleted => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HalfEdge {
    pub edge: EdgeLink,
    pub side: Option<Side>,
    /// Vorhergesagter Knoten des anstehenden Kreisereignisses.
    pub vertex: Option<Vertex>,
    /// y-Koordinate des Ereignisses im transformierten Raum (Sortierschlüssel).
    pub ystar: f32,
    pub left_neighbor: Option<HalfEdgeId>,
    pub right_neighbor: Option<HalfEdgeId>,
    pub next_in_queue: Option<HalfEdgeId>,
}

impl HalfEdge {
    fn new(edge: EdgeLink, side: Option<Side>) -> Self {
        Self {
            edge,
            side,
            vertex: None,
            ystar: 0.0,
            left_neighbor: None,
            right_neighbor: None,
            next_in_queue: None,
        }
    }

    /// Liegt `p` links vom Bisektor dieser Halbkante?
    ///
    /// Für `a == 1` wird zuerst über das Vorzeichen von `b` entschieden; nur
    /// wenn das nicht reicht, folgt die quadratische Ungleichung aus der
    /// Geradengleichung. Andernfalls werden quadrierte Abstände verglichen.
    pub fn is_left_of(&self, p: Vec2, edges: &[Edge]) -> bool {
        let (edge, side) = match (self.edge, self.side) {
            (EdgeLink::Live(id), Some(side)) => (&edges[id.0], side),
            _ => panic!("is_left_of queried on a sentinel or deleted half-edge"),
        };

        let top_site = edge.site_coordinate(Side::Right);
        let right_of_site = p.x > top_site.x;
        if right_of_site && side == Side::Left {
            return true;
        }
        if !right_of_site && side == Side::Right {
            return false;
        }

        let above = if edge.a == 1.0 {
            let dyp = p.y - top_site.y;
            let dxp = p.x - top_site.x;
            let mut fast = false;
            let mut above;

            if (!right_of_site && edge.b < 0.0) || (right_of_site && edge.b >= 0.0) {
                above = dyp >= edge.b * dxp;
                fast = above;
            } else {
                above = p.x + p.y * edge.b > edge.c;
                if edge.b < 0.0 {
                    above = !above;
                }
                if !above {
                    fast = true;
                }
            }

            if !fast {
                let dxs = top_site.x - edge.site_coordinate(Side::Left).x;
                above = edge.b * (dxp * dxp - dyp * dyp)
                    < dxs * dyp * (1.0 + 2.0 * dxp / dxs + edge.b * edge.b);
                if edge.b < 0.0 {
                    above = !above;
                }
            }
            above
        } else {
            let yl = edge.c - edge.a * p.x;
            let t1 = p.y - yl;
            let t2 = p.x - top_site.x;
            let t3 = yl - top_site.y;
            t1 * t1 > t2 * t2 + t3 * t3
        };

        match side {
            Side::Left => above,
            Side::Right => !above,
        }
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    value: Option<HalfEdge>,
}

/// Arena für alle Halbkanten eines Sweeps.
///
/// Ersetzt den Objekt-Pool: freigegebene Slots werden wiederverwendet,
/// alte Handles darauf sind über die Generation als ungültig erkennbar.
#[derive(Debug, Default)]
pub(crate) struct HalfEdgeArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl HalfEdgeArena {
    pub fn create(&mut self, edge: EdgeId, side: Side) -> HalfEdgeId {
        self.insert(HalfEdge::new(EdgeLink::Live(edge), Some(side)))
    }

    pub fn create_sentinel(&mut self) -> HalfEdgeId {
        self.insert(HalfEdge::new(EdgeLink::Sentinel, None))
    }

    fn insert(&mut self, half_edge: HalfEdge) -> HalfEdgeId {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(half_edge);
            return HalfEdgeId {
                index,
                generation: slot.generation,
            };
        }

        self.slots.push(Slot {
            generation: 0,
            value: Some(half_edge),
        });
        HalfEdgeId {
            index: (self.slots.len() - 1) as u32,
            generation: 0,
        }
    }

    /// Panics bei einem Handle auf einen freigegebenen Slot.
    pub fn get(&self, id: HalfEdgeId) -> &HalfEdge {
        match self.try_get(id) {
            Some(half_edge) => half_edge,
            None => panic!("stale half-edge handle {:?}", id),
        }
    }

    pub fn get_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        match self.slots.get_mut(id.index as usize) {
            Some(Slot {
                generation,
                value: Some(half_edge),
            }) if *generation == id.generation => half_edge,
            _ => panic!("stale half-edge handle {:?}", id),
        }
    }

    pub fn try_get(&self, id: HalfEdgeId) -> Option<&HalfEdge> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn release(&mut self, id: HalfEdgeId) {
        if self.try_get(id).is_none() {
            return;
        }
        let slot = &mut self.slots[id.index as usize];
        slot.value = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
    }

    pub fn live_count(&self) -> usize {
        self.live
    }
}
