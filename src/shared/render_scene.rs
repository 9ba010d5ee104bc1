//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::ResolvedArc;
use glam::DVec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Aufgelöste fertige Bögen in Zeichenreihenfolge
    pub arcs: Vec<ResolvedArc>,
    /// Vorschau-Bogen der laufenden Sitzung
    pub preview_arc: Option<ResolvedArc>,
    /// Vorschau-Punkte (gesetzte Punkte + Cursor), wenn kein Vorschau-Bogen existiert
    pub preview_points: Vec<DVec2>,
    /// Anker, auf den der Cursor gerade einrastet
    pub snap_highlight: Option<DVec2>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
            && self.preview_arc.is_none()
            && self.preview_points.is_empty()
            && self.snap_highlight.is_none()
    }
}
