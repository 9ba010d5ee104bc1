//! Vorschau des Bogen-Werkzeugs (verändert den Zustand nicht).

use super::super::ToolPreview;
use super::state::ArcTool;
use crate::core::geometry::{resolve_arc, resolve_chord_arc};
use glam::DVec2;

impl ArcTool {
    /// Berechnet die Vorschau für die aktuelle Cursor-Position.
    ///
    /// - ohne Startpunkt: nur Hover-Punkt
    /// - nur Startpunkt: Sehnen-Bogen Start → Cursor
    /// - Start und zweites Ende: Umkreis-Bogen durch den Cursor
    pub fn preview(&self, cursor: DVec2) -> ToolPreview {
        match (self.arc.start, self.arc.second, self.arc.end) {
            (Some(start), None, _) => ToolPreview {
                points: vec![start, cursor],
                arc: resolve_chord_arc(start, cursor, self.radius_factor),
            },
            (Some(start), Some(second), None) => ToolPreview {
                points: vec![start, second, cursor],
                arc: resolve_arc(start, second, cursor),
            },
            // Fertiger Bogen wird nicht mehr als Vorschau gezeigt
            (Some(_), Some(_), Some(_)) => ToolPreview::default(),
            (None, _, _) => ToolPreview::hover_point(cursor),
        }
    }
}
