//! Zeichenwerkzeuge des Viewports.
//!
//! Werkzeuge sind reine Zustandsautomaten: sie bekommen bereits aufgelöste
//! (gesnappte) Punkte und erzeugen Daten. Snap-Auflösung, ID-Vergabe und das
//! Übernehmen fertiger Bögen in die Zeichnung erledigt der `SessionController`.

/// Drei-Punkt-Bogen-Werkzeug.
pub mod arc_tool;

pub use arc_tool::{advance, ArcTool, ToolPhase};

use crate::core::ResolvedArc;
use glam::DVec2;

/// Rückgabe von `on_pointer_down`, steuert den Tool-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Punkt registriert, weitere Eingabe nötig
    Continue,
    /// Alle drei Punkte gesetzt, Bogen fertig
    Complete,
}

/// Preview-Geometrie für das Rendering eines Frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolPreview {
    /// Bereits gesetzte Punkte, gefolgt von der Cursor-Position
    pub points: Vec<DVec2>,
    /// Vorschau-Bogen (fehlt ohne gesetzten Startpunkt oder bei Sehne der Länge 0)
    pub arc: Option<ResolvedArc>,
}

impl ToolPreview {
    /// Vorschau nur aus einem Hover-Punkt.
    pub fn hover_point(cursor: DVec2) -> Self {
        Self {
            points: vec![cursor],
            arc: None,
        }
    }
}
