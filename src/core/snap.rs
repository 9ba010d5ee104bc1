//! Snap-Auflösung: neue Punkte rasten auf Punkte bereits fertiger Bögen ein.

use glam::DVec2;

/// Standard-Snap-Radius in Pixeln.
pub const DEFAULT_SNAP_RADIUS: f64 = 10.0;

/// Ergebnis einer Snap-Auflösung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapTarget {
    /// Eingerastet auf einen vorhandenen Ankerpunkt
    Anchor(DVec2),
    /// Freie Position (kein Anker in Reichweite)
    Free(DVec2),
}

impl SnapTarget {
    /// Gibt die aufgelöste Position zurück.
    pub fn position(&self) -> DVec2 {
        match self {
            SnapTarget::Anchor(pos) => *pos,
            SnapTarget::Free(pos) => *pos,
        }
    }

    /// `true`, wenn auf einen Anker eingerastet wurde.
    pub fn is_snapped(&self) -> bool {
        matches!(self, SnapTarget::Anchor(_))
    }
}

/// Prüft, ob `b` höchstens `radius` von `a` entfernt ist (inklusive Grenze).
pub fn is_point_near(a: DVec2, b: DVec2, radius: f64) -> bool {
    a.distance_squared(b) <= radius * radius
}

/// Liefert den ERSTEN Anker (Iterationsreihenfolge) innerhalb von `radius`.
///
/// Nicht der nächstgelegene: bei mehreren Treffern entscheidet die Reihenfolge.
pub fn find_snap_point<I>(candidate: DVec2, anchors: I, radius: f64) -> Option<DVec2>
where
    I: IntoIterator<Item = DVec2>,
{
    anchors
        .into_iter()
        .find(|&anchor| is_point_near(candidate, anchor, radius))
}

/// Löst `candidate` gegen die Anker auf: Anker-Position oder freie Position.
pub fn resolve_snap<I>(candidate: DVec2, anchors: I, radius: f64) -> SnapTarget
where
    I: IntoIterator<Item = DVec2>,
{
    match find_snap_point(candidate, anchors, radius) {
        Some(anchor) => SnapTarget::Anchor(anchor),
        None => SnapTarget::Free(candidate),
    }
}
