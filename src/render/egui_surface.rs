//! `DrawSurface`-Implementierung auf einem `egui::Painter`.

use super::DrawSurface;
use eframe::egui;
use glam::DVec2;

/// Zeichnet in einen Viewport; lokale Koordinaten werden um `origin` verschoben.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiSurface<'a> {
    /// `origin` ist die linke obere Ecke des Viewport-Rects in Screen-Koordinaten.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, point: DVec2) -> egui::Pos2 {
        self.origin + egui::vec2(point.x as f32, point.y as f32)
    }

    fn to_rect(&self, min: DVec2, max: DVec2) -> egui::Rect {
        egui::Rect::from_min_max(self.to_screen(min), self.to_screen(max))
    }
}

/// RGBA `0.0..=1.0` → `Color32`.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl DrawSurface for EguiSurface<'_> {
    fn fill_circle(&mut self, center: DVec2, radius: f32, color: [f32; 4]) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f32, width: f32, color: [f32; 4]) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius,
            egui::Stroke::new(width, to_color32(color)),
        );
    }

    fn stroke_polyline(&mut self, points: &[DVec2], width: f32, color: [f32; 4]) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter.add(egui::Shape::line(
            screen,
            egui::Stroke::new(width, to_color32(color)),
        ));
    }

    fn fill_rect(&mut self, min: DVec2, max: DVec2, color: [f32; 4]) {
        self.painter
            .rect_filled(self.to_rect(min, max), 0.0, to_color32(color));
    }

    fn stroke_rect(&mut self, min: DVec2, max: DVec2, width: f32, color: [f32; 4]) {
        self.painter.rect_stroke(
            self.to_rect(min, max),
            0.0,
            egui::Stroke::new(width, to_color32(color)),
            egui::StrokeKind::Middle,
        );
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            egui::FontId::proportional(font_size),
            egui::Color32::BLACK,
        );
        galley.size().x
    }

    fn text(&mut self, center: DVec2, text: &str, font_size: f32, color: [f32; 4]) {
        self.painter.text(
            self.to_screen(center),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(font_size),
            to_color32(color),
        );
    }
}
