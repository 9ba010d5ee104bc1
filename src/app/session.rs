//! Sitzungs-Steuerung: besitzt Zeichnung, aktives Werkzeug und ID-Zähler.
//!
//! Es gibt höchstens eine aktive Bogen-Sitzung. Pointer-Events laufen
//! ausschließlich über den `SessionController`; verworfene Sitzungen haben
//! daher keine Handler mehr, die noch Events bekommen könnten.

use super::tools::{ArcTool, ToolAction, ToolPhase, ToolPreview};
use crate::core::geometry::DEFAULT_RADIUS_FACTOR;
use crate::core::{resolve_snap, DrawnArc, Drawing, SnapTarget, DEFAULT_SNAP_RADIUS};
use crate::shared::EditorOptions;
use glam::DVec2;
use thiserror::Error;

/// Fehler beim Steuern der Bogen-Sitzung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Aktivierung während eine Sitzung läuft
    #[error("Bitte zuerst die aktuelle Zeichnung abschließen, bevor ein neues Werkzeug gewählt wird")]
    SessionActive,
}

/// Ergebnis eines Klicks im Viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerDownOutcome {
    /// Keine aktive Sitzung
    Ignored,
    /// Punkt gesetzt, Sitzung läuft weiter
    Advanced(ToolPhase),
    /// Dritter Punkt gesetzt: Bogen übernommen, Sitzung beendet
    Completed(DrawnArc),
}

/// Einstellungen, die der Controller aus den EditorOptions übernimmt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub snap_enabled: bool,
    /// Snap-Radius in Pixeln
    pub snap_radius: f64,
    /// Radiusfaktor der Sehnen-Vorschau
    pub radius_factor: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_radius: DEFAULT_SNAP_RADIUS,
            radius_factor: DEFAULT_RADIUS_FACTOR,
        }
    }
}

impl From<&EditorOptions> for SessionSettings {
    fn from(options: &EditorOptions) -> Self {
        Self {
            snap_enabled: options.snap_enabled,
            snap_radius: f64::from(options.snap_radius.max(0.0)),
            // Faktor < 0.5 ergibt keinen Kreis durch beide Sehnen-Enden
            radius_factor: options.chord_radius_factor.max(0.5),
        }
    }
}

/// Besitzt die Zeichnung und höchstens eine aktive Bogen-Sitzung.
#[derive(Debug, Clone)]
pub struct SessionController {
    drawing: Drawing,
    active: Option<ArcTool>,
    next_arc_id: u64,
    /// Letzte (gesnappte) Cursor-Position im Viewport
    hover: Option<SnapTarget>,
    settings: SessionSettings,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl SessionController {
    /// Erstellt einen Controller mit leerer Zeichnung.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            drawing: Drawing::new(),
            active: None,
            next_arc_id: 1,
            hover: None,
            settings,
        }
    }

    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Übernimmt neue Einstellungen; eine laufende Sitzung bekommt den neuen Radiusfaktor.
    pub fn set_settings(&mut self, settings: SessionSettings) {
        self.settings = settings;
        if let Some(tool) = self.active.as_mut() {
            tool.radius_factor = settings.radius_factor;
        }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    /// Das Werkzeug der laufenden Sitzung.
    pub fn active_tool(&self) -> Option<&ArcTool> {
        self.active.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Phase der laufenden Sitzung (`None` ohne Sitzung).
    pub fn phase(&self) -> Option<ToolPhase> {
        self.active.as_ref().map(ArcTool::phase)
    }

    /// Letzte Hover-Position inkl. Snap-Info.
    pub fn hover(&self) -> Option<SnapTarget> {
        self.hover
    }

    /// Snap-Anker der fertigen Bögen in Zeichenreihenfolge.
    pub fn snap_anchors(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.drawing.snap_anchors()
    }

    /// Startet eine neue Bogen-Sitzung.
    ///
    /// Läuft bereits eine, bleibt deren Zustand unverändert.
    pub fn activate(&mut self) -> Result<(), SessionError> {
        if self.active.is_some() {
            return Err(SessionError::SessionActive);
        }
        self.active = Some(ArcTool::new(self.settings.radius_factor));
        Ok(())
    }

    /// Bricht die laufende Sitzung ab. Gibt zurück, ob eine aktiv war.
    pub fn deactivate(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Verarbeitet einen Klick: snappen, Werkzeug weiterschalten, ggf. übernehmen.
    pub fn handle_pointer_down(&mut self, raw: DVec2) -> PointerDownOutcome {
        let target = self.resolve(raw);
        let Some(tool) = self.active.as_mut() else {
            return PointerDownOutcome::Ignored;
        };

        match tool.on_pointer_down(target.position()) {
            ToolAction::Continue => PointerDownOutcome::Advanced(tool.phase()),
            ToolAction::Complete => {
                let arc = *tool.arc();
                self.active = None;
                let drawn = DrawnArc {
                    id: self.next_arc_id,
                    arc,
                };
                self.next_arc_id += 1;
                self.drawing.push(drawn);
                PointerDownOutcome::Completed(drawn)
            }
        }
    }

    /// Merkt sich die Cursor-Position und liefert die Vorschau der Sitzung.
    pub fn handle_pointer_move(&mut self, raw: DVec2) -> Option<ToolPreview> {
        let target = self.resolve(raw);
        self.hover = Some(target);
        self.active
            .as_ref()
            .map(|tool| tool.preview(target.position()))
    }

    pub fn handle_pointer_up(&mut self, _raw: DVec2) {
        if let Some(tool) = self.active.as_mut() {
            tool.on_pointer_up();
        }
    }

    /// Cursor hat den Viewport verlassen.
    pub fn pointer_left(&mut self) {
        self.hover = None;
    }

    /// Vorschau für die zuletzt bekannte Cursor-Position.
    pub fn preview(&self) -> Option<ToolPreview> {
        let tool = self.active.as_ref()?;
        let hover = self.hover?;
        Some(tool.preview(hover.position()))
    }

    fn resolve(&self, raw: DVec2) -> SnapTarget {
        if self.settings.snap_enabled {
            resolve_snap(raw, self.drawing.snap_anchors(), self.settings.snap_radius)
        } else {
            SnapTarget::Free(raw)
        }
    }
}
