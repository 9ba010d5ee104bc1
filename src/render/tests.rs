use super::*;
use crate::core::{resolve_arc, resolve_chord_arc};

/// Aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
enum DrawCall {
    FillCircle {
        center: DVec2,
        radius: f32,
        color: [f32; 4],
    },
    StrokeCircle {
        center: DVec2,
        radius: f32,
        width: f32,
        color: [f32; 4],
    },
    Polyline {
        points: Vec<DVec2>,
        width: f32,
        color: [f32; 4],
    },
    FillRect {
        min: DVec2,
        max: DVec2,
        color: [f32; 4],
    },
    StrokeRect {
        min: DVec2,
        max: DVec2,
        width: f32,
        color: [f32; 4],
    },
    Text {
        center: DVec2,
        text: String,
        font_size: f32,
        color: [f32; 4],
    },
}

/// Zeichenfläche, die alle Befehle mitschreibt. Text ist 8 px pro Zeichen breit.
#[derive(Default)]
struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_circle(&mut self, center: DVec2, radius: f32, color: [f32; 4]) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f32, width: f32, color: [f32; 4]) {
        self.calls.push(DrawCall::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[DVec2], width: f32, color: [f32; 4]) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_rect(&mut self, min: DVec2, max: DVec2, color: [f32; 4]) {
        self.calls.push(DrawCall::FillRect { min, max, color });
    }

    fn stroke_rect(&mut self, min: DVec2, max: DVec2, width: f32, color: [f32; 4]) {
        self.calls.push(DrawCall::StrokeRect {
            min,
            max,
            width,
            color,
        });
    }

    fn measure_text(&self, text: &str, _font_size: f32) -> f32 {
        text.chars().count() as f32 * 8.0
    }

    fn text(&mut self, center: DVec2, text: &str, font_size: f32, color: [f32; 4]) {
        self.calls.push(DrawCall::Text {
            center,
            text: text.to_owned(),
            font_size,
            color,
        });
    }
}

fn reference_arc() -> ResolvedArc {
    resolve_arc(
        DVec2::new(100.0, 100.0),
        DVec2::new(200.0, 100.0),
        DVec2::new(150.0, 200.0),
    )
    .expect("Referenzbogen")
}

#[test]
fn test_render_point_uses_marker_radius() {
    let mut surface = RecordingSurface::default();
    let options = EditorOptions::default();
    render_point(&mut surface, DVec2::new(5.0, 6.0), options.arc_color, &options);

    assert_eq!(
        surface.calls,
        vec![DrawCall::FillCircle {
            center: DVec2::new(5.0, 6.0),
            radius: 3.0,
            color: options.arc_color,
        }]
    );
}

#[test]
fn test_render_arc_strokes_markers_and_label() {
    let mut surface = RecordingSurface::default();
    let options = EditorOptions::default();
    let arc = reference_arc();

    render_arc(&mut surface, &arc, options.arc_color, &options);

    let polylines: Vec<_> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Polyline { points, width, .. } => Some((points, *width)),
            _ => None,
        })
        .collect();
    assert_eq!(polylines.len(), 1);
    let (points, width) = polylines[0];
    assert_eq!(width, 2.0);
    assert!(points.len() > 8);
    for p in points {
        assert!((p.distance(arc.circle.center) - 62.5).abs() < 1e-6);
    }

    // Mittelpunkt + drei definierende Punkte
    assert_eq!(
        surface.count(|c| matches!(c, DrawCall::FillCircle { radius, .. } if *radius == 3.0)),
        4
    );
}

#[test]
fn test_label_box_surrounds_measured_text() {
    let mut surface = RecordingSurface::default();
    let options = EditorOptions::default();
    let arc = reference_arc();

    render_arc(&mut surface, &arc, options.arc_color, &options);

    // "R62.500" = 7 Zeichen × 8 px = 56 px, Padding 4, Höhe = Schriftgröße 16
    let anchor = DVec2::new(150.0, 100.0);
    let expected_min = anchor - DVec2::new(28.0 + 4.0, 8.0 + 4.0);
    let expected_max = anchor + DVec2::new(28.0 + 4.0, 8.0 + 4.0);

    assert!(surface.calls.contains(&DrawCall::FillRect {
        min: expected_min,
        max: expected_max,
        color: options.label_fill_color,
    }));
    assert!(surface.calls.contains(&DrawCall::StrokeRect {
        min: expected_min,
        max: expected_max,
        width: 1.0,
        color: options.label_border_color,
    }));
    assert!(surface.calls.contains(&DrawCall::Text {
        center: anchor,
        text: "R62.500".to_owned(),
        font_size: 16.0,
        color: options.label_text_color,
    }));
}

#[test]
fn test_label_drawn_after_box() {
    let mut surface = RecordingSurface::default();
    let options = EditorOptions::default();
    render_arc(&mut surface, &reference_arc(), options.arc_color, &options);

    let rect_idx = surface
        .calls
        .iter()
        .position(|c| matches!(c, DrawCall::FillRect { .. }))
        .expect("Label-Box");
    let text_idx = surface
        .calls
        .iter()
        .position(|c| matches!(c, DrawCall::Text { .. }))
        .expect("Label-Text");
    assert!(rect_idx < text_idx, "Text muss über der Box liegen");
}

#[test]
fn test_render_snap_ring() {
    let mut surface = RecordingSurface::default();
    let options = EditorOptions::default();
    render_snap_ring(&mut surface, DVec2::new(10.0, 10.0), &options);

    assert_eq!(
        surface.calls,
        vec![
            DrawCall::StrokeCircle {
                center: DVec2::new(10.0, 10.0),
                radius: 5.0,
                width: 2.0,
                color: options.snap_ring_color,
            },
            DrawCall::FillCircle {
                center: DVec2::new(10.0, 10.0),
                radius: 3.0,
                color: options.snap_ring_color,
            },
        ]
    );
}

#[test]
fn test_render_scene_colors() {
    let mut surface = RecordingSurface::default();
    let options = EditorOptions::default();
    let preview = resolve_chord_arc(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0), 1.2)
        .expect("Sehnen-Vorschau");
    let scene = RenderScene {
        arcs: vec![reference_arc()],
        preview_arc: Some(preview),
        preview_points: Vec::new(),
        snap_highlight: Some(DVec2::new(100.0, 100.0)),
        options: options.clone(),
    };

    render_scene(&mut surface, &scene);

    let polyline_colors: Vec<_> = surface
        .calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Polyline { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(polyline_colors, vec![options.arc_color, options.preview_color]);
    assert_eq!(
        surface.count(|c| matches!(c, DrawCall::StrokeCircle { .. })),
        1
    );
    assert!(matches!(
        surface.calls.last(),
        Some(DrawCall::FillCircle { color, .. }) if *color == options.snap_ring_color
    ));
}

#[test]
fn test_render_scene_hover_point_only() {
    let mut surface = RecordingSurface::default();
    let scene = RenderScene {
        preview_points: vec![DVec2::new(7.0, 8.0)],
        ..RenderScene::default()
    };

    render_scene(&mut surface, &scene);

    assert_eq!(
        surface.calls,
        vec![DrawCall::FillCircle {
            center: DVec2::new(7.0, 8.0),
            radius: 3.0,
            color: scene.options.preview_color,
        }]
    );
}

#[test]
fn test_empty_scene_draws_nothing() {
    let mut surface = RecordingSurface::default();
    render_scene(&mut surface, &RenderScene::default());
    assert!(surface.calls.is_empty());
}
