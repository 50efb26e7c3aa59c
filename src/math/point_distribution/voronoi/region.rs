// src/math/point_distribution/voronoi/region.rs

//! Regionspolygone der Sites.
//!
//! Die Kanten einer Site werden über gemeinsame Knoten zu einer Kette
//! geordnet und deren geclippte Endpunkte zu einem Ring verbunden. Lücken
//! zwischen zwei Endpunkten auf dem Rechteckrand werden mit den dazwischen
//! liegenden Rechteckecken geschlossen.

use super::{
    edge::{Edge, EdgeId},
    reorder::{ChainCriterion, EdgeReorderer},
    side::Side,
    site::{Site, SiteId},
};
use crate::math::{
    geometry::{PolygonWinding, polygon_winding},
    types::Bounds2D,
    utils::{comparison, constants},
};
use bevy::log::debug;
use bevy::math::Vec2;

/// Geordnete Kanten und Regionspolygon einer Site.
#[derive(Debug, Clone, Default)]
pub struct SiteTopology {
    pub edges: Vec<EdgeId>,
    pub orientations: Vec<Side>,
    /// Gegen den Uhrzeigersinn orientiert; leer, wenn kein geschlossenes
    /// Polygon existiert.
    pub region: Vec<Vec2>,
}

impl SiteTopology {
    fn build(site: &Site, edges: &[Edge], bounds: &Bounds2D) -> Self {
        if site.edge_ids().is_empty() {
            return Self::default();
        }

        let (ordered, orientations) =
            EdgeReorderer::new(site.edge_ids(), edges, ChainCriterion::Vertex).into_parts();

        let builder = RegionBuilder::new(site, edges, bounds);
        let mut region = if !ordered.is_empty() {
            builder.clip_to_bounds(&ordered, &orientations)
        } else if site.edge_ids().iter().any(|id| edges[id.0].touches_infinity()) {
            Vec::new()
        } else {
            // Nur offene Kanten ohne gemeinsame Knoten (kollineare Sites):
            // Erzeugungsreihenfolge, die Orientierung klärt der Builder
            debug!(
                "Site {:?}: no vertex chain, building region from {} open edges",
                site.coordinate(),
                site.edge_ids().len()
            );
            let fallback = vec![Side::Left; site.edge_ids().len()];
            builder.clip_to_bounds(site.edge_ids(), &fallback)
        };
        if polygon_winding(&region) == PolygonWinding::Clockwise {
            region.reverse();
        }

        Self {
            edges: ordered,
            orientations,
            region,
        }
    }
}

impl Site {
    pub(crate) fn topology(&self, edges: &[Edge], bounds: &Bounds2D) -> &SiteTopology {
        self.topology
            .get_or_init(|| SiteTopology::build(self, edges, bounds))
    }

    /// Regionspolygon gegen den Uhrzeigersinn, geclippt auf `bounds`.
    pub fn region(&self, edges: &[Edge], bounds: &Bounds2D) -> &[Vec2] {
        &self.topology(edges, bounds).region
    }

    /// Nachbar-Sites in Kettenreihenfolge. Lässt sich die Kette nicht
    /// bilden, wird die Erzeugungsreihenfolge der Kanten verwendet.
    pub fn neighbor_sites(&self, edges: &[Edge], bounds: &Bounds2D) -> Vec<SiteId> {
        let topology = self.topology(edges, bounds);
        let ordered = if topology.edges.is_empty() {
            self.edge_ids()
        } else {
            &topology.edges
        };
        ordered
            .iter()
            .filter_map(|id| edges[id.0].neighbor_site(self.id()))
            .collect()
    }
}

/// Bits für die Rechteckseiten, auf denen ein Punkt exakt liegt.
///
/// `TOP` ist die Seite mit `y == min.y`, `BOTTOM` die mit `y == max.y`.
pub struct BoundsCheck;

impl BoundsCheck {
    pub const TOP: u8 = 1;
    pub const BOTTOM: u8 = 2;
    pub const LEFT: u8 = 4;
    pub const RIGHT: u8 = 8;

    pub fn check(point: Vec2, bounds: &Bounds2D) -> u8 {
        let mut value = 0;
        if point.x == bounds.min.x {
            value |= Self::LEFT;
        }
        if point.x == bounds.max.x {
            value |= Self::RIGHT;
        }
        if point.y == bounds.min.y {
            value |= Self::TOP;
        }
        if point.y == bounds.max.y {
            value |= Self::BOTTOM;
        }
        value
    }

    /// Position entlang des Randes, beginnend bei `min` über TOP, RIGHT,
    /// BOTTOM und LEFT zurück.
    fn perimeter_position(point: Vec2, flags: u8, bounds: &Bounds2D) -> f32 {
        let (w, h) = (bounds.width(), bounds.height());
        if flags & Self::TOP != 0 {
            point.x - bounds.min.x
        } else if flags & Self::RIGHT != 0 {
            w + (point.y - bounds.min.y)
        } else if flags & Self::BOTTOM != 0 {
            w + h + (bounds.max.x - point.x)
        } else {
            2.0 * w + h + (bounds.max.y - point.y)
        }
    }
}

struct RegionBuilder<'a> {
    site: Vec2,
    neighbors: Vec<Vec2>,
    edges: &'a [Edge],
    bounds: &'a Bounds2D,
    points: Vec<Vec2>,
}

impl<'a> RegionBuilder<'a> {
    fn new(site: &Site, edges: &'a [Edge], bounds: &'a Bounds2D) -> Self {
        let neighbors = site
            .edge_ids()
            .iter()
            .map(|id| {
                let edge = &edges[id.0];
                if edge.site(Side::Left) == site.id() {
                    edge.site_coordinate(Side::Right)
                } else {
                    edge.site_coordinate(Side::Left)
                }
            })
            .collect();

        Self {
            site: site.coordinate(),
            neighbors,
            edges,
            bounds,
            points: Vec::new(),
        }
    }

    fn clip_to_bounds(mut self, ordered: &[EdgeId], orientations: &[Side]) -> Vec<Vec2> {
        let edges = self.edges;
        let visible: Vec<(&Edge, Side)> = ordered
            .iter()
            .zip(orientations)
            .map(|(id, &side)| (&edges[id.0], side))
            .filter(|(edge, _)| edge.visible())
            .collect();

        let Some(&(first_edge, first_orientation)) = visible.first() else {
            return Vec::new();
        };
        let (Some(start), Some(end)) = (
            first_edge.clipped_end(first_orientation),
            first_edge.clipped_end(first_orientation.other()),
        ) else {
            return Vec::new();
        };
        self.points.push(start);
        self.points.push(end);

        for &(edge, orientation) in &visible[1..] {
            let orientation = self.resolve_orientation(edge, orientation);
            self.connect(edge, orientation, false);
        }
        self.connect(first_edge, first_orientation, true);

        self.points
    }

    /// Kanten ohne beide Endknoten passen in jeder Richtung in die Kette;
    /// dann entscheidet die Nähe zum bisherigen Ringende.
    fn resolve_orientation(&self, edge: &Edge, orientation: Side) -> Side {
        if edge.vertex(Side::Left).is_some() || edge.vertex(Side::Right).is_some() {
            return orientation;
        }
        let (Some(&last), Some(start), Some(end)) = (
            self.points.last(),
            edge.clipped_end(orientation),
            edge.clipped_end(orientation.other()),
        ) else {
            return orientation;
        };
        if last.distance_squared(end) < last.distance_squared(start) {
            orientation.other()
        } else {
            orientation
        }
    }

    fn connect(&mut self, edge: &Edge, orientation: Side, closing_up: bool) {
        let (Some(&right_point), Some(new_point), Some(new_right_point)) = (
            self.points.last(),
            edge.clipped_end(orientation),
            edge.clipped_end(orientation.other()),
        ) else {
            return;
        };

        if !comparison::close_enough(right_point, new_point) {
            let right_check = BoundsCheck::check(right_point, self.bounds);
            let new_check = BoundsCheck::check(new_point, self.bounds);
            if right_check != 0 && new_check != 0 {
                let corners = self.corners_between(right_point, right_check, new_point, new_check);
                self.points.extend(corners);
            }
            if closing_up {
                return;
            }
            self.points.push(new_point);
        }

        // Beim Schließen sind beide Enden der ersten Kante schon im Ring
        if closing_up {
            return;
        }

        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if !comparison::close_enough(first, new_right_point)
            && !comparison::close_enough(last, new_right_point)
        {
            self.points.push(new_right_point);
        }
    }

    /// Rechteckecken zwischen zwei Randpunkten.
    ///
    /// Beide Umlaufrichtungen kommen in Frage; genommen wird die, deren Ecken
    /// alle näher an der eigenen Site liegen als an jedem Nachbarn.
    fn corners_between(&self, from: Vec2, from_flags: u8, to: Vec2, to_flags: u8) -> Vec<Vec2> {
        let bounds = self.bounds;
        let perimeter = 2.0 * (bounds.width() + bounds.height());
        if perimeter <= 0.0 {
            return Vec::new();
        }

        let t_from = BoundsCheck::perimeter_position(from, from_flags, bounds);
        let t_to = BoundsCheck::perimeter_position(to, to_flags, bounds);
        let (w, h) = (bounds.width(), bounds.height());
        let corner_positions = [0.0, w, w + h, 2.0 * w + h];
        let corners = bounds.corners();

        let walk = |forward: bool| -> Vec<Vec2> {
            let span = if forward {
                (t_to - t_from).rem_euclid(perimeter)
            } else {
                (t_from - t_to).rem_euclid(perimeter)
            };
            let mut found: Vec<(f32, Vec2)> = corner_positions
                .iter()
                .zip(corners)
                .map(|(&t, corner)| {
                    let d = if forward {
                        (t - t_from).rem_euclid(perimeter)
                    } else {
                        (t_from - t).rem_euclid(perimeter)
                    };
                    (d, corner)
                })
                .filter(|&(d, _)| d > 0.0 && d < span)
                .collect();
            found.sort_by(|a, b| a.0.total_cmp(&b.0));
            found.into_iter().map(|(_, corner)| corner).collect()
        };

        let forward = walk(true);
        if forward.iter().all(|&c| self.covers(c)) {
            return forward;
        }
        let backward = walk(false);
        if backward.iter().all(|&c| self.covers(c)) {
            return backward;
        }

        debug!(
            "Region of site {:?}: no consistent corner walk between {:?} and {:?}",
            self.site, from, to
        );
        Vec::new()
    }

    /// Liegt `corner` (mit Toleranz) in der Region der Site?
    fn covers(&self, corner: Vec2) -> bool {
        let own = self.site.distance_squared(corner);
        self.neighbors.iter().all(|n| {
            let other = n.distance_squared(corner);
            own <= other + constants::EPSILON * (1.0 + other)
        })
    }
}
