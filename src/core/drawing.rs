//! Zeichnung: Liste aller fertiggestellten Bögen.

use super::arc::ThreePointArc;
use glam::DVec2;

/// Fertiggestellter, unveränderlicher Bogen mit fortlaufender ID.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnArc {
    /// Vom SessionController vergebene ID (ab 1)
    pub id: u64,
    /// Vollständiger Bogen
    pub arc: ThreePointArc,
}

/// Nur-Anhängen-Liste der fertigen Bögen in Zeichenreihenfolge.
#[derive(Debug, Clone, Default)]
pub struct Drawing {
    arcs: Vec<DrawnArc>,
}

impl Drawing {
    /// Erstellt eine leere Zeichnung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen fertigen Bogen an.
    pub fn push(&mut self, arc: DrawnArc) {
        self.arcs.push(arc);
    }

    /// Alle Bögen in Zeichenreihenfolge.
    pub fn arcs(&self) -> &[DrawnArc] {
        &self.arcs
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Snap-Anker aller Bögen: pro Bogen `start`, dann `second`.
    pub fn snap_anchors(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.arcs.iter().flat_map(|drawn| drawn.arc.snap_anchors())
    }
}
