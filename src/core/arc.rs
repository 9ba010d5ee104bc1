//! Datenmodell des Drei-Punkt-Bogens.

use super::geometry::{resolve_arc, ResolvedArc};
use glam::DVec2;

/// Bogen aus Start-, Zweit- und Endpunkt.
///
/// Gezeichnet wird von `start` nach `second`; `end` ist der Punkt, durch den
/// der Bogen laufen muss. Mittelpunkt und Radius werden nicht gespeichert,
/// sondern bei jedem Rendern aus den Punkten neu berechnet.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThreePointArc {
    /// Erster Klick
    pub start: Option<DVec2>,
    /// Zweiter Klick (zweites Bogen-Ende)
    pub second: Option<DVec2>,
    /// Dritter Klick (Durchgangspunkt)
    pub end: Option<DVec2>,
}

impl ThreePointArc {
    /// Vollständig, wenn alle drei Punkte gesetzt sind.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.second.is_some() && self.end.is_some()
    }

    /// Snap-Anker dieses Bogens: `start` vor `second`, `end` nie.
    pub fn snap_anchors(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.start.into_iter().chain(self.second)
    }

    /// Löst den vollständigen Bogen für das Rendering auf.
    ///
    /// `None` bei unvollständigem Bogen oder Sehne der Länge 0.
    pub fn resolve(&self) -> Option<ResolvedArc> {
        resolve_arc(self.start?, self.second?, self.end?)
    }
}
