// src/math/point_distribution/voronoi/reorder.rs

use super::{
    edge::{Edge, EdgeId},
    side::Side,
    site::SiteId,
    vertex::VertexRef,
};
use bevy::log::warn;
use std::collections::VecDeque;

/// Woran zwei Kanten einer Kette zusammenhängen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainCriterion {
    /// Gemeinsame Site (Reihenfolge der konvexen Hülle).
    Site,
    /// Gemeinsamer Knoten (Rand eines Regionspolygons).
    Vertex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainPoint {
    Site(SiteId),
    Vertex(VertexRef),
    /// Offenes Kantenende; passt zu keinem anderen Kettenpunkt.
    Open(EdgeId, Side),
}

impl ChainPoint {
    fn of(edge: &Edge, side: Side, criterion: ChainCriterion) -> Self {
        match criterion {
            ChainCriterion::Site => ChainPoint::Site(edge.site(side)),
            ChainCriterion::Vertex => match edge.vertex(side) {
                Some(vertex) => ChainPoint::Vertex(vertex),
                None => ChainPoint::Open(edge.index(), side),
            },
        }
    }

    fn is_at_infinity(self) -> bool {
        self == ChainPoint::Vertex(VertexRef::AtInfinity)
    }
}

/// Ordnet eine ungeordnete Kantenmenge zu einer zusammenhängenden Kette.
///
/// Ausgehend von der ersten Kante werden beide freien Enden der Kette so
/// lange verlängert, bis alle Kanten platziert sind. Zu jeder Kante wird die
/// Orientierung gemerkt: `Left` heißt, die Kante wird von ihrem linken zum
/// rechten Endpunkt durchlaufen.
///
/// Offene Kantenenden verbinden sich mit nichts; eine Hüllregion ergibt
/// also eine Kette von offenem Ende zu offenem Ende. Berührt eine Kante den
/// Knoten im Unendlichen oder lässt sich die Kette nicht schließen, ist das
/// Ergebnis leer.
#[derive(Debug, Clone, Default)]
pub struct EdgeReorderer {
    edges: Vec<EdgeId>,
    orientations: Vec<Side>,
}

impl EdgeReorderer {
    pub fn new(edge_ids: &[EdgeId], all_edges: &[Edge], criterion: ChainCriterion) -> Self {
        if edge_ids.is_empty() {
            return Self::default();
        }
        Self::reorder(edge_ids, all_edges, criterion).unwrap_or_default()
    }

    fn reorder(
        edge_ids: &[EdgeId],
        all_edges: &[Edge],
        criterion: ChainCriterion,
    ) -> Option<Self> {
        let n = edge_ids.len();
        let mut done = vec![false; n];
        let mut n_done = 1;

        let first_edge = &all_edges[edge_ids[0].0];
        let mut first_point = ChainPoint::of(first_edge, Side::Left, criterion);
        let mut last_point = ChainPoint::of(first_edge, Side::Right, criterion);
        if first_point.is_at_infinity() || last_point.is_at_infinity() {
            return None;
        }
        done[0] = true;

        let mut chain: VecDeque<(EdgeId, Side)> = VecDeque::with_capacity(n);
        chain.push_back((edge_ids[0], Side::Left));

        while n_done < n {
            let done_before_pass = n_done;

            for i in 1..n {
                if done[i] {
                    continue;
                }

                let edge = &all_edges[edge_ids[i].0];
                let left_point = ChainPoint::of(edge, Side::Left, criterion);
                let right_point = ChainPoint::of(edge, Side::Right, criterion);
                if left_point.is_at_infinity() || right_point.is_at_infinity() {
                    return None;
                }

                if left_point == last_point {
                    last_point = right_point;
                    chain.push_back((edge_ids[i], Side::Left));
                } else if right_point == first_point {
                    first_point = left_point;
                    chain.push_front((edge_ids[i], Side::Left));
                } else if left_point == first_point {
                    first_point = right_point;
                    chain.push_front((edge_ids[i], Side::Right));
                } else if right_point == last_point {
                    last_point = left_point;
                    chain.push_back((edge_ids[i], Side::Right));
                } else {
                    continue;
                }

                done[i] = true;
                n_done += 1;
            }

            if n_done == done_before_pass {
                warn!(
                    "EdgeReorderer: {} of {} edges could not be chained ({:?})",
                    n - n_done,
                    n,
                    criterion
                );
                return None;
            }
        }

        let (edges, orientations) = chain.into_iter().unzip();
        Some(Self {
            edges,
            orientations,
        })
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn orientations(&self) -> &[Side] {
        &self.orientations
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn into_parts(self) -> (Vec<EdgeId>, Vec<Side>) {
        (self.edges, self.orientations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;

    fn edge(index: usize, left: usize, right: usize) -> Edge {
        Edge::create_bisecting(
            EdgeId(index),
            SiteId(left),
            Vec2::new(left as f32, 0.0),
            SiteId(right),
            Vec2::new(right as f32, 1.0),
        )
    }

    fn with_vertices(mut edge: Edge, left: VertexRef, right: VertexRef) -> Edge {
        edge.set_vertex(Side::Left, left);
        edge.set_vertex(Side::Right, right);
        edge
    }

    #[test]
    fn test_site_chain_orders_hull() {
        // Hüllkanten eines Vierecks 0-1-2-3, durcheinander und teils umgedreht
        let edges = vec![edge(0, 0, 1), edge(1, 3, 2), edge(2, 3, 0), edge(3, 1, 2)];
        let ids: Vec<EdgeId> = (0..4).map(EdgeId).collect();

        let reorderer = EdgeReorderer::new(&ids, &edges, ChainCriterion::Site);
        assert_eq!(reorderer.edges().len(), 4);

        // Aufeinanderfolgende Kanten teilen sich eine Site
        let endpoints: Vec<(SiteId, SiteId)> = reorderer
            .edges()
            .iter()
            .zip(reorderer.orientations())
            .map(|(id, &side)| {
                let e = &edges[id.0];
                (e.site(side), e.site(side.other()))
            })
            .collect();
        for pair in endpoints.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_vertex_chain_closes_ring() {
        let edges = vec![
            with_vertices(edge(0, 0, 1), VertexRef::Finite(0), VertexRef::Finite(1)),
            with_vertices(edge(1, 0, 2), VertexRef::Finite(2), VertexRef::Finite(1)),
            with_vertices(edge(2, 0, 3), VertexRef::Finite(2), VertexRef::Finite(0)),
        ];
        let ids = [EdgeId(0), EdgeId(1), EdgeId(2)];
        let reorderer = EdgeReorderer::new(&ids, &edges, ChainCriterion::Vertex);

        assert_eq!(reorderer.edges(), &[EdgeId(0), EdgeId(1), EdgeId(2)]);
        assert_eq!(
            reorderer.orientations(),
            &[Side::Left, Side::Right, Side::Left]
        );
    }

    #[test]
    fn test_vertex_at_infinity_yields_empty_chain() {
        let edges = vec![
            with_vertices(edge(0, 0, 1), VertexRef::Finite(0), VertexRef::Finite(1)),
            with_vertices(edge(1, 0, 2), VertexRef::AtInfinity, VertexRef::Finite(1)),
        ];
        let ids = [EdgeId(0), EdgeId(1)];
        assert!(EdgeReorderer::new(&ids, &edges, ChainCriterion::Vertex).is_empty());
        assert!(EdgeReorderer::new(&[], &edges, ChainCriterion::Vertex).is_empty());
    }

    #[test]
    fn test_disconnected_edges_yield_empty_chain() {
        let edges = vec![
            with_vertices(edge(0, 0, 1), VertexRef::Finite(0), VertexRef::Finite(1)),
            with_vertices(edge(1, 2, 3), VertexRef::Finite(5), VertexRef::Finite(6)),
        ];
        let ids = [EdgeId(0), EdgeId(1)];
        assert!(EdgeReorderer::new(&ids, &edges, ChainCriterion::Vertex).is_empty());
    }

    #[test]
    fn test_open_ends_are_never_joined() {
        // Hüllsite: zwei offene Kanten, verbunden über eine endliche Kante
        let mut open_low = edge(0, 0, 1);
        open_low.set_vertex(Side::Right, VertexRef::Finite(0));
        let mut open_high = edge(2, 0, 3);
        open_high.set_vertex(Side::Left, VertexRef::Finite(1));
        let edges = vec![
            open_low,
            with_vertices(edge(1, 0, 2), VertexRef::Finite(1), VertexRef::Finite(0)),
            open_high,
        ];
        let ids = [EdgeId(0), EdgeId(2), EdgeId(1)];
        let reorderer = EdgeReorderer::new(&ids, &edges, ChainCriterion::Vertex);

        // Kette läuft offen -> 0 -> 1 -> offen, nicht über die offenen Enden
        assert_eq!(reorderer.edges(), &[EdgeId(0), EdgeId(1), EdgeId(2)]);
        assert_eq!(
            reorderer.orientations(),
            &[Side::Left, Side::Right, Side::Left]
        );
    }

    #[test]
    fn test_two_fully_open_edges_do_not_chain() {
        // Mittlere Site dreier kollinearer Punkte
        let edges = vec![edge(0, 0, 1), edge(1, 1, 2)];
        let ids = [EdgeId(0), EdgeId(1)];
        assert!(EdgeReorderer::new(&ids, &edges, ChainCriterion::Vertex).is_empty());
    }
}
