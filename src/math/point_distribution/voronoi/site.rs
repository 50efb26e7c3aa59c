// src/math/point_distribution/voronoi/site.rs

use super::{
    edge::{Edge, EdgeId},
    region::SiteTopology,
};
use crate::math::{geometry::Circle, types::Bounds2D, utils::comparison};
use bevy::math::Vec2;
use std::sync::OnceLock;

/// Position einer Site in der (sortierten) `SiteList`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(pub usize);

/// Eingabepunkt mit seiner Voronoi-Region.
#[derive(Debug)]
pub struct Site {
    id: SiteId,
    coord: Vec2,
    index: usize,
    weight: f32,
    edges: Vec<EdgeId>,
    /// Umsortierte Kanten und Regionspolygon, beim ersten Zugriff berechnet.
    pub(super) topology: OnceLock<SiteTopology>,
}

impl Site {
    pub fn new(coord: Vec2, index: usize, weight: f32) -> Self {
        Self {
            id: SiteId(0),
            coord,
            index,
            weight,
            edges: Vec::new(),
            topology: OnceLock::new(),
        }
    }

    /// Position in der sortierten `SiteList`.
    pub fn id(&self) -> SiteId {
        self.id
    }

    pub fn coordinate(&self) -> Vec2 {
        self.coord
    }

    pub fn x(&self) -> f32 {
        self.coord.x
    }

    pub fn y(&self) -> f32 {
        self.coord.y
    }

    /// Kanonischer Index; nach dem Sortieren entlang der Sweep-Ordnung vergeben.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Nur informativ, vom Algorithmus nicht verwendet.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Inzidente Kanten in Erzeugungsreihenfolge.
    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn add_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub fn distance(&self, p: Vec2) -> f32 {
        self.coord.distance(p)
    }

    /// Kante zum nächstgelegenen Delaunay-Nachbarn.
    pub fn nearest_edge<'a>(&self, edges: &'a [Edge]) -> Option<&'a Edge> {
        self.edges
            .iter()
            .map(|id| &edges[id.0])
            .min_by(|a, b| Edge::compare_sites_distances(a, b))
    }
}

/// Sammlung der Sites und Quelle der Site-Ereignisse.
///
/// `next` liefert die Sites in Sweep-Ordnung (y, dann x aufsteigend) und ist
/// erst nach `sort` erlaubt.
#[derive(Debug, Default)]
pub struct SiteList {
    sites: Vec<Site>,
    current_index: usize,
    sorted: bool,
}

impl SiteList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, mut site: Site) -> usize {
        self.sorted = false;
        site.id = SiteId(self.sites.len());
        self.sites.push(site);
        self.sites.len()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Sortiert in Sweep-Ordnung und setzt den Cursor zurück.
    ///
    /// Die kanonischen Indizes werden anschließend aufsteigend entlang der
    /// neuen Reihenfolge verteilt.
    pub fn sort(&mut self) {
        self.sites
            .sort_by(|a, b| comparison::compare_by_y_then_x(a.coord, b.coord));

        let mut indices: Vec<usize> = self.sites.iter().map(|s| s.index).collect();
        indices.sort_unstable();
        for (position, (site, index)) in self.sites.iter_mut().zip(indices).enumerate() {
            site.id = SiteId(position);
            site.index = index;
        }

        self.current_index = 0;
        self.sorted = true;
    }

    pub fn next(&mut self) -> Option<SiteId> {
        assert!(self.sorted, "SiteList::next(): sites have not been sorted");
        if self.current_index < self.sites.len() {
            self.current_index += 1;
            Some(SiteId(self.current_index - 1))
        } else {
            None
        }
    }

    pub fn reset_cursor(&mut self) {
        self.current_index = 0;
    }

    /// Ausdehnung der Sites. Die y-Grenzen werden direkt aus der Sortierung
    /// abgelesen.
    pub fn site_bounds(&self) -> Bounds2D {
        assert!(self.sorted, "SiteList::site_bounds(): sites have not been sorted");
        let (Some(first), Some(last)) = (self.sites.first(), self.sites.last()) else {
            return Bounds2D::from_points(Vec2::ZERO, Vec2::ZERO);
        };

        let (x_min, x_max) = self
            .sites
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), s| (lo.min(s.x()), hi.max(s.x())));
        Bounds2D::from_points(Vec2::new(x_min, first.y()), Vec2::new(x_max, last.y()))
    }

    pub fn get(&self, id: SiteId) -> &Site {
        &self.sites[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: SiteId) -> &mut Site {
        &mut self.sites[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Site> {
        self.sites.iter()
    }

    pub fn site_coordinates(&self) -> Vec<Vec2> {
        self.sites.iter().map(Site::coordinate).collect()
    }

    /// Pro Site ein Kreis mit dem halben Abstand zum nächsten Nachbarn; liegt
    /// diese Kante auf der Hülle, ist der Radius 0.
    pub fn circles(&self, edges: &[Edge]) -> Vec<Circle> {
        self.sites
            .iter()
            .map(|site| {
                let radius = match site.nearest_edge(edges) {
                    Some(edge) if !edge.is_part_of_convex_hull() => edge.sites_distance() * 0.5,
                    _ => 0.0,
                };
                Circle::new(site.x(), site.y(), radius)
            })
            .collect()
    }
}
