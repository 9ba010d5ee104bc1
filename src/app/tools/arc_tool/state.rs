//! Phasen, Übergangsfunktion und Zustand des Bogen-Werkzeugs.

use crate::core::geometry::DEFAULT_RADIUS_FACTOR;
use crate::core::ThreePointArc;
use glam::DVec2;

/// Phasen des Bogen-Werkzeugs (nur vorwärts, ein Schritt pro Klick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolPhase {
    /// Noch kein Punkt gesetzt
    #[default]
    Idle,
    /// Startpunkt gesetzt
    FirstPointSet,
    /// Start und zweites Bogen-Ende gesetzt
    SecondPointSet,
    /// Alle drei Punkte gesetzt
    Complete,
}

impl ToolPhase {
    /// `true`, solange mindestens ein Punkt gesetzt, der Bogen aber nicht fertig ist.
    pub fn is_drawing(&self) -> bool {
        matches!(self, ToolPhase::FirstPointSet | ToolPhase::SecondPointSet)
    }
}

/// Reine Übergangsfunktion: setzt den zur Phase passenden Punkt.
///
/// `Complete` ist terminal, ein weiterer Punkt ändert nichts.
pub fn advance(phase: ToolPhase, arc: ThreePointArc, point: DVec2) -> (ToolPhase, ThreePointArc) {
    match phase {
        ToolPhase::Idle => (
            ToolPhase::FirstPointSet,
            ThreePointArc {
                start: Some(point),
                ..arc
            },
        ),
        ToolPhase::FirstPointSet => (
            ToolPhase::SecondPointSet,
            ThreePointArc {
                second: Some(point),
                ..arc
            },
        ),
        ToolPhase::SecondPointSet => (
            ToolPhase::Complete,
            ThreePointArc {
                end: Some(point),
                ..arc
            },
        ),
        ToolPhase::Complete => (phase, arc),
    }
}

/// Bogen-Werkzeug einer einzelnen Zeichen-Sitzung.
#[derive(Debug, Clone)]
pub struct ArcTool {
    pub(crate) phase: ToolPhase,
    pub(crate) arc: ThreePointArc,
    /// Radiusfaktor der Sehnen-Vorschau (aus EditorOptions)
    pub(crate) radius_factor: f64,
}

impl ArcTool {
    /// Erstellt ein Werkzeug in Phase `Idle`.
    pub fn new(radius_factor: f64) -> Self {
        Self {
            phase: ToolPhase::Idle,
            arc: ThreePointArc::default(),
            radius_factor,
        }
    }

    pub fn phase(&self) -> ToolPhase {
        self.phase
    }

    /// Bisher gesetzte Punkte.
    pub fn arc(&self) -> &ThreePointArc {
        &self.arc
    }
}

impl Default for ArcTool {
    fn default() -> Self {
        Self::new(DEFAULT_RADIUS_FACTOR)
    }
}
