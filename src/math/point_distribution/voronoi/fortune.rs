// src/math/point_distribution/voronoi/fortune.rs

//! Sweep-Line-Konstruktion (Fortune) des Voronoi-Diagramms.

use super::{
    edge::{Edge, EdgeId},
    edge_list::EdgeList,
    event_queue::EventQueue,
    half_edge::{EdgeLink, HalfEdgeArena, HalfEdgeId},
    side::Side,
    site::{SiteId, SiteList},
    vertex::{Vertex, VertexRef},
};
use crate::math::{types::Bounds2D, utils::comparison};
use bevy::log::debug;
use bevy::math::Vec2;
use std::cmp::Ordering;

/// Ergebnis eines Sweeps: alle Kanten (bereits geclippt) und die finalen
/// Knoten, indiziert über `VertexRef::Finite`.
#[derive(Debug, Default)]
pub(crate) struct SweepOutput {
    pub edges: Vec<Edge>,
    pub vertices: Vec<Vec2>,
}

/// Zustand eines einzelnen Sweeps. Zähler und Arena gehören ausschließlich
/// zu dieser Konstruktion.
#[derive(Debug, Default)]
pub(crate) struct SweepEngine {
    half_edges: HalfEdgeArena,
    edges: Vec<Edge>,
    vertices: Vec<Vec2>,
}

impl SweepEngine {
    /// Führt den Sweep über alle Sites aus und schneidet das Ergebnis auf
    /// `bounds` zu. Die Sites müssen sortiert sein.
    pub fn run(sites: &mut SiteList, bounds: &Bounds2D) -> SweepOutput {
        let mut engine = SweepEngine::default();

        let data_bounds = sites.site_bounds();
        let sqrt_site_count = ((sites.len() + 4) as f32).sqrt() as usize;
        let mut queue = EventQueue::new(data_bounds.min.y, data_bounds.height(), sqrt_site_count);
        let mut edge_list = EdgeList::new(
            &mut engine.half_edges,
            data_bounds.min.x,
            data_bounds.width(),
            sqrt_site_count,
        );

        sites.reset_cursor();
        if let Some(bottom_most) = sites.next() {
            let mut new_site = sites.next();

            loop {
                let min_event = if queue.is_empty() {
                    None
                } else {
                    Some(queue.min(&engine.half_edges))
                };

                // Site-Ereignis zuerst, solange die Site vor dem nächsten Kreisereignis liegt
                let site_first = match (new_site, min_event) {
                    (Some(site), Some(star)) => {
                        comparison::compare_by_y_then_x(sites.get(site).coordinate(), star)
                            == Ordering::Less
                    }
                    (Some(_), None) => true,
                    (None, _) => false,
                };

                match (new_site, min_event, site_first) {
                    (Some(site), _, true) => {
                        engine.site_event(sites, &mut edge_list, &mut queue, bottom_most, site);
                        new_site = sites.next();
                    }
                    (_, Some(_), _) => {
                        engine.circle_event(sites, &mut edge_list, &mut queue, bottom_most);
                    }
                    (_, None, _) => break,
                }
            }
        }

        edge_list.teardown(&mut engine.half_edges);
        debug_assert!(queue.is_empty());
        debug_assert_eq!(engine.half_edges.live_count(), 0);

        debug!(
            "Sweep finished: {} sites, {} edges, {} vertices",
            sites.len(),
            engine.edges.len(),
            engine.vertices.len()
        );

        let SweepEngine {
            mut edges,
            vertices,
            ..
        } = engine;
        for edge in &mut edges {
            edge.clip_vertices(bounds, &vertices);
        }

        SweepOutput { edges, vertices }
    }

    /// Die neue Site trifft den Bogen zwischen `lbnd` und `rbnd` und teilt ihn.
    fn site_event(
        &mut self,
        sites: &mut SiteList,
        edge_list: &mut EdgeList,
        queue: &mut EventQueue,
        bottom_most: SiteId,
        new_site: SiteId,
    ) {
        let site_coord = sites.get(new_site).coordinate();

        let lbnd = edge_list.left_neighbor(&self.half_edges, &self.edges, site_coord);
        let rbnd = EdgeList::right_neighbor(&self.half_edges, lbnd);
        let bottom_site = self.right_region(lbnd, bottom_most);

        let edge = self.create_bisecting_edge(sites, bottom_site, new_site);

        let bisector = self.half_edges.create(edge, Side::Left);
        edge_list.insert(&mut self.half_edges, lbnd, bisector);

        // Das Tripel (lbnd, rbnd) existiert nicht mehr
        queue.remove(&mut self.half_edges, lbnd);
        if let Some(vertex) = Vertex::intersect(&self.half_edges, &self.edges, lbnd, bisector) {
            self.schedule(queue, lbnd, vertex, site_coord);
        }

        let left = bisector;
        let bisector = self.half_edges.create(edge, Side::Right);
        edge_list.insert(&mut self.half_edges, left, bisector);

        if let Some(vertex) = Vertex::intersect(&self.half_edges, &self.edges, bisector, rbnd) {
            self.schedule(queue, bisector, vertex, site_coord);
        }
    }

    /// Der Bogen zwischen `lbnd` und `rbnd` verschwindet; ihr gemeinsamer
    /// Knoten wird final.
    fn circle_event(
        &mut self,
        sites: &mut SiteList,
        edge_list: &mut EdgeList,
        queue: &mut EventQueue,
        bottom_most: SiteId,
    ) {
        let lbnd = queue.extract_min(&mut self.half_edges);
        let llbnd = EdgeList::left_neighbor_of(&self.half_edges, lbnd);
        let rbnd = EdgeList::right_neighbor(&self.half_edges, lbnd);
        let rrbnd = EdgeList::right_neighbor(&self.half_edges, rbnd);
        let mut bottom_site = self.left_region(lbnd, bottom_most);
        let mut top_site = self.right_region(rbnd, bottom_most);

        let vertex = match self.half_edges.get(lbnd).vertex {
            Some(vertex) => vertex,
            None => panic!("circle event half-edge {:?} lost its vertex", lbnd),
        };
        // Kozirkuläre Sites: derselbe Knoten wird mehrfach final
        let finalized = match self
            .coincident_vertex(lbnd, vertex.coord)
            .or_else(|| self.coincident_vertex(rbnd, vertex.coord))
        {
            Some(existing) => existing,
            None => {
                self.vertices.push(vertex.coord);
                VertexRef::Finite(self.vertices.len() - 1)
            }
        };

        self.close_edge(lbnd, finalized);
        self.close_edge(rbnd, finalized);

        edge_list.remove(&mut self.half_edges, lbnd);
        queue.remove(&mut self.half_edges, rbnd);
        edge_list.remove(&mut self.half_edges, rbnd);
        self.half_edges.release(lbnd);
        self.half_edges.release(rbnd);

        let mut side = Side::Left;
        if sites.get(bottom_site).y() > sites.get(top_site).y() {
            std::mem::swap(&mut bottom_site, &mut top_site);
            side = Side::Right;
        }
        let bottom_coord = sites.get(bottom_site).coordinate();

        let edge = self.create_bisecting_edge(sites, bottom_site, top_site);
        let bisector = self.half_edges.create(edge, side);
        edge_list.insert(&mut self.half_edges, llbnd, bisector);
        self.edges[edge.0].set_vertex(side.other(), finalized);

        // Das Tripel (llbnd, lbnd) existiert nicht mehr
        queue.remove(&mut self.half_edges, llbnd);
        if let Some(vertex) = Vertex::intersect(&self.half_edges, &self.edges, llbnd, bisector) {
            self.schedule(queue, llbnd, vertex, bottom_coord);
        }
        if let Some(vertex) = Vertex::intersect(&self.half_edges, &self.edges, bisector, rrbnd) {
            self.schedule(queue, bisector, vertex, bottom_coord);
        }
    }

    fn schedule(
        &mut self,
        queue: &mut EventQueue,
        half_edge: HalfEdgeId,
        vertex: Vertex,
        site_coord: Vec2,
    ) {
        if vertex.is_at_infinity() {
            debug!("Skipping circle event at infinity for {:?}", half_edge);
            return;
        }
        let he = self.half_edges.get_mut(half_edge);
        he.vertex = Some(vertex);
        he.ystar = vertex.y() + site_coord.distance(vertex.coord);
        queue.insert(&mut self.half_edges, half_edge);
    }

    /// Ein bereits finaler Knoten der Kante unter `half_edge`, der mit
    /// `coord` zusammenfällt.
    fn coincident_vertex(&self, half_edge: HalfEdgeId, coord: Vec2) -> Option<VertexRef> {
        let EdgeLink::Live(edge) = self.half_edges.get(half_edge).edge else {
            return None;
        };
        let edge = &self.edges[edge.0];
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(|side| edge.vertex(side))
            .find(|vertex| match *vertex {
                VertexRef::Finite(index) => comparison::close_enough(self.vertices[index], coord),
                VertexRef::AtInfinity => false,
            })
    }

    fn close_edge(&mut self, half_edge: HalfEdgeId, vertex: VertexRef) {
        let he = self.half_edges.get(half_edge);
        if let (EdgeLink::Live(edge), Some(side)) = (he.edge, he.side) {
            self.edges[edge.0].set_vertex(side, vertex);
        }
    }

    fn create_bisecting_edge(&mut self, sites: &mut SiteList, site0: SiteId, site1: SiteId) -> EdgeId {
        let id = EdgeId(self.edges.len());
        let edge = Edge::create_bisecting(
            id,
            site0,
            sites.get(site0).coordinate(),
            site1,
            sites.get(site1).coordinate(),
        );
        sites.get_mut(site0).add_edge(id);
        sites.get_mut(site1).add_edge(id);
        self.edges.push(edge);
        id
    }

    fn left_region(&self, half_edge: HalfEdgeId, bottom_most: SiteId) -> SiteId {
        let he = self.half_edges.get(half_edge);
        match (he.edge, he.side) {
            (EdgeLink::Live(edge), Some(side)) => self.edges[edge.0].site(side),
            _ => bottom_most,
        }
    }

    fn right_region(&self, half_edge: HalfEdgeId, bottom_most: SiteId) -> SiteId {
        let he = self.half_edges.get(half_edge);
        match (he.edge, he.side) {
            (EdgeLink::Live(edge), Some(side)) => self.edges[edge.0].site(side.other()),
            _ => bottom_most,
        }
    }
}
