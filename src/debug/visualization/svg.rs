// src/debug/visualization/svg.rs
#[cfg(debug_assertions)]
use crate::math::error::{MathError, MathResult};
use crate::math::{point_distribution::voronoi::VoronoiDiagram, types::Bounds2D};
#[cfg(debug_assertions)]
use bevy::log::info;
use bevy::math::Vec2;
#[cfg(debug_assertions)]
use std::io::Write;

// ===================================================================================
// 1. HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Ein Helfer zum Erstellen einer SVG-Datei.
struct SvgBuilder {
    content: String,
    point_radius: f64,
}

impl SvgBuilder {
    /// Erstellt ein neues SVG-Grundgerüst mit Header, Stil und Hintergrund.
    fn new(display_bounds: &Bounds2D, svg_pixel_size: u32) -> Self {
        let viewbox_min_x = display_bounds.min.x as f64;
        let viewbox_min_y = display_bounds.min.y as f64;
        let viewbox_width = display_bounds.width() as f64;
        let viewbox_height = display_bounds.height() as f64;

        let stroke_w_normal = (viewbox_width + viewbox_height) / 2.0 * 0.004;
        let stroke_w_thin = (viewbox_width + viewbox_height) / 2.0 * 0.002;
        let point_radius = (viewbox_width + viewbox_height) / 2.0 * 0.006;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{svg_pixel_size}" height="{svg_pixel_size}" viewBox="{viewbox_min_x} {viewbox_min_y} {viewbox_width} {viewbox_height}" xmlns="http://www.w3.org/2000/svg">
  <style>
    .background {{ fill: #f0f0f0; fill-opacity: 1.0; }}
    .bounds {{ fill: none; stroke: #888888; stroke-width: {stroke_w_thin}; stroke-dasharray: 2,2; }}
    .region {{ fill: rgba(150, 255, 150, 0.4); stroke: none; }}
    .voronoi-edge {{ stroke: #00aa00; stroke-width: {stroke_w_normal}; }}
    .delaunay-edge {{ stroke: #ffaa00; stroke-width: {stroke_w_thin}; }}
    .hull {{ fill: none; stroke: #5500aa; stroke-width: {stroke_w_normal}; }}
    .site {{ fill: #aaccff; stroke: #0000cc; stroke-width: {stroke_w_thin}; }}
  </style>
  <rect x="{viewbox_min_x}" y="{viewbox_min_y}" width="{viewbox_width}" height="{viewbox_height}" class="background" />
"#,
        );

        Self {
            content,
            point_radius,
        }
    }

    /// Zeichnet ein Polygon.
    fn draw_polygon(&mut self, vertices: &[Vec2], class: &str) {
        if vertices.len() < 2 {
            return;
        }
        let points_str: String = vertices
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"  <polygon points="{}" class="{}" />
"#,
            points_str, class
        ));
    }

    fn draw_line(&mut self, p0: Vec2, p1: Vec2, class: &str) {
        self.content.push_str(&format!(
            r#"  <line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" class="{}" />
"#,
            p0.x, p0.y, p1.x, p1.y, class
        ));
    }

    /// Zeichnet einen Kreis.
    fn draw_circle(&mut self, center: &Vec2, radius: f64, class: &str) {
        self.content.push_str(&format!(
            r#"  <circle cx="{:.3}" cy="{:.3}" r="{:.3}" class="{}" />
"#,
            center.x, center.y, radius, class
        ));
    }

    /// Zeichnet ein Rechteck.
    fn draw_rect(&mut self, bounds: &Bounds2D, class: &str) {
        self.content.push_str(&format!(
            r#"  <rect x="{}" y="{}" width="{}" height="{}" class="{}" />
"#,
            bounds.min.x,
            bounds.min.y,
            bounds.width(),
            bounds.height(),
            class
        ));
    }

    /// Schließt die Tags und gibt das Dokument zurück.
    fn finish(mut self) -> String {
        self.content.push_str("</svg>\n");
        self.content
    }
}

// ===================================================================================
// 2. Diagramm-Ausgabe
// ===================================================================================
/// Erzeugt ein SVG-Dokument mit Regionen, Voronoi- und Delaunay-Kanten,
/// Hülle und Sites. Die ViewBox entspricht dem Clipping-Rechteck.
pub fn render_diagram_svg(diagram: &VoronoiDiagram, svg_pixel_size: u32) -> String {
    let bounds = diagram.bounds();
    let mut svg = SvgBuilder::new(bounds, svg_pixel_size);

    for region in diagram.regions() {
        svg.draw_polygon(&region, "region");
    }
    svg.draw_rect(bounds, "bounds");

    for segment in diagram.voronoi_diagram() {
        svg.draw_line(segment.p0, segment.p1, "voronoi-edge");
    }
    for segment in diagram.delaunay_triangulation() {
        svg.draw_line(segment.p0, segment.p1, "delaunay-edge");
    }
    svg.draw_polygon(&diagram.hull_points_in_order(), "hull");

    let radius = svg.point_radius;
    for site in diagram.sites().iter() {
        svg.draw_circle(&site.coordinate(), radius, "site");
    }

    svg.finish()
}

/// Schreibt `render_diagram_svg` nach `filename`.
#[cfg(debug_assertions)]
pub fn create_diagram_svg(
    filename: &str,
    diagram: &VoronoiDiagram,
    svg_pixel_size: u32,
) -> MathResult<()> {
    let content = render_diagram_svg(diagram, svg_pixel_size);
    let mut file = std::fs::File::create(filename).map_err(|e| MathError::DebugOutput {
        message: format!("cannot create '{}': {}", filename, e),
    })?;
    file.write_all(content.as_bytes())
        .map_err(|e| MathError::DebugOutput {
            message: format!("cannot write '{}': {}", filename, e),
        })?;
    info!("Debug SVG '{}' wurde erstellt.", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_one_circle_per_site() {
        let bounds = Bounds2D::from_rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let points = [
            Vec2::new(1.0, 2.0),
            Vec2::new(8.0, 1.5),
            Vec2::new(4.0, 7.0),
            Vec2::new(6.5, 5.0),
        ];
        let diagram = VoronoiDiagram::new(&points, bounds).unwrap();
        let svg = render_diagram_svg(&diagram, 400);

        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), points.len());
        assert_eq!(svg.matches(r#"class="region""#).count(), points.len());
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_unwritable_path_is_reported() {
        let bounds = Bounds2D::from_rect(0.0, 0.0, 10.0, 10.0).unwrap();
        let diagram = VoronoiDiagram::new(&[Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0)], bounds).unwrap();
        let result = create_diagram_svg("/nonexistent-dir/voronoi.svg", &diagram, 100);
        assert!(matches!(result, Err(MathError::DebugOutput { .. })));
    }
}
