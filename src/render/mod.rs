//! Zeichnen der Bögen, Vorschau, Snap-Ring und Radius-Labels.
//!
//! Die Funktionen arbeiten gegen den `DrawSurface`-Trait und kennen nur
//! Ausgaben der Geometrie (`ResolvedArc`). `EguiSurface` bildet den Trait
//! auf einen `egui::Painter` ab.

mod egui_surface;

pub use crate::shared::RenderScene;
pub use egui_surface::{to_color32, EguiSurface};

use crate::core::tessellate_arc;
use crate::core::ResolvedArc;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Zeichenfläche in Viewport-lokalen Pixeln. Farben sind RGBA in `0.0..=1.0`.
pub trait DrawSurface {
    /// Gefüllter Kreis
    fn fill_circle(&mut self, center: DVec2, radius: f32, color: [f32; 4]);
    /// Kreis-Umriss
    fn stroke_circle(&mut self, center: DVec2, radius: f32, width: f32, color: [f32; 4]);
    /// Offene Polylinie
    fn stroke_polyline(&mut self, points: &[DVec2], width: f32, color: [f32; 4]);
    /// Gefülltes Rechteck
    fn fill_rect(&mut self, min: DVec2, max: DVec2, color: [f32; 4]);
    /// Rechteck-Umriss
    fn stroke_rect(&mut self, min: DVec2, max: DVec2, width: f32, color: [f32; 4]);
    /// Breite des Texts in Pixeln bei gegebener Schriftgröße
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
    /// Text, zentriert auf `center`
    fn text(&mut self, center: DVec2, text: &str, font_size: f32, color: [f32; 4]);
}

/// Gefüllter Punkt-Marker.
pub fn render_point(
    surface: &mut impl DrawSurface,
    point: DVec2,
    color: [f32; 4],
    options: &EditorOptions,
) {
    surface.fill_circle(point, options.point_radius, color);
}

/// Bogen-Polylinie, Marker an Mittelpunkt und definierenden Punkten, Radius-Label.
pub fn render_arc(
    surface: &mut impl DrawSurface,
    arc: &ResolvedArc,
    color: [f32; 4],
    options: &EditorOptions,
) {
    let polyline = tessellate_arc(&arc.circle, &arc.sweep, options.arc_segment_length());
    surface.stroke_polyline(&polyline, options.stroke_width, color);

    render_point(surface, arc.circle.center, color, options);
    for &point in &arc.points {
        render_point(surface, point, color, options);
    }

    render_label(surface, &arc.label(), arc.label_anchor, options);
}

/// Radius-Label in einer Box um den gemessenen Text.
///
/// Als Texthöhe gilt die Schriftgröße.
fn render_label(surface: &mut impl DrawSurface, text: &str, anchor: DVec2, options: &EditorOptions) {
    let width = surface.measure_text(text, options.label_font_size);
    let half = DVec2::new(
        f64::from(width / 2.0 + options.label_padding),
        f64::from(options.label_font_size / 2.0 + options.label_padding),
    );
    let min = anchor - half;
    let max = anchor + half;

    surface.fill_rect(min, max, options.label_fill_color);
    surface.stroke_rect(
        min,
        max,
        options.label_border_width,
        options.label_border_color,
    );
    surface.text(anchor, text, options.label_font_size, options.label_text_color);
}

/// Hohler Ring plus gefüllter Punkt auf dem eingerasteten Anker.
pub fn render_snap_ring(surface: &mut impl DrawSurface, point: DVec2, options: &EditorOptions) {
    surface.stroke_circle(
        point,
        options.snap_ring_radius,
        options.stroke_width,
        options.snap_ring_color,
    );
    surface.fill_circle(point, options.point_radius, options.snap_ring_color);
}

/// Zeichnet einen kompletten Frame: fertige Bögen, Vorschau, Snap-Ring.
pub fn render_scene(surface: &mut impl DrawSurface, scene: &RenderScene) {
    let options = &scene.options;

    for arc in &scene.arcs {
        render_arc(surface, arc, options.arc_color, options);
    }

    if let Some(arc) = &scene.preview_arc {
        render_arc(surface, arc, options.preview_color, options);
    }
    for &point in &scene.preview_points {
        render_point(surface, point, options.preview_color, options);
    }

    if let Some(anchor) = scene.snap_highlight {
        render_snap_ring(surface, anchor, options);
    }
}

#[cfg(test)]
mod tests;
