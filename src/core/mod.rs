//! Core-Domänentypen: Bogen-Geometrie, Snap-Auflösung, Zeichnung.

pub mod arc;
pub mod drawing;
/// Kreis-/Bogen-Konstruktion
///
/// - Umkreis durch drei Punkte mit Sehnen-Fallback
/// - Start-/Endwinkel und Umlaufrichtung
/// - Tessellierung in Polylinien
pub mod geometry;
pub mod snap;

pub use arc::ThreePointArc;
pub use drawing::{DrawnArc, Drawing};
pub use geometry::{
    arc_sweep, chord_circle, circumscribed_circle, resolve_arc, resolve_chord_arc, tessellate_arc,
    ArcSweep, Circle, ResolvedArc,
};
pub use snap::{find_snap_point, is_point_near, resolve_snap, SnapTarget, DEFAULT_SNAP_RADIUS};
