//! Kreis- und Bogen-Geometrie für das Drei-Punkt-Bogen-Werkzeug.
//!
//! Rein-mathematische Funktionen ohne egui-Abhängigkeit. Gerechnet wird in
//! `f64`, damit Bildschirmkoordinaten bis ~10.000 px stabil bleiben.
//!
//! Winkel folgen der Canvas-Konvention des Viewports (Y nach unten):
//! `anticlockwise == false` bedeutet wachsende Winkel.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Unterhalb dieses Determinanten-Betrags gelten drei Punkte als kollinear.
pub const COLLINEAR_EPSILON: f64 = 1e-10;
/// Standard-Radiusfaktor der Sehnen-Konstruktion (Radius = Faktor × Sehnenlänge).
pub const DEFAULT_RADIUS_FACTOR: f64 = 1.2;
/// Minimale Anzahl Polylinien-Segmente pro tesselliertem Bogen.
pub const MIN_ARC_SEGMENTS: usize = 8;
/// Obergrenze der Segmente pro Bogen. Fast kollineare Punkte ergeben riesige
/// Radien; jenseits dieser Zahl ist die Polylinie ohnehin nicht mehr unterscheidbar.
pub const MAX_ARC_SEGMENTS: usize = 4096;

/// Kreis aus Mittelpunkt und Radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Mittelpunkt in Viewport-Koordinaten
    pub center: DVec2,
    /// Radius in Pixeln
    pub radius: f64,
}

/// Start-/Endwinkel und Umlaufrichtung eines Bogens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    /// Startwinkel in `[0, 2π)`
    pub start_angle: f64,
    /// Endwinkel in `[0, 2π)`
    pub end_angle: f64,
    /// `true` = mit fallenden Winkeln zeichnen
    pub anticlockwise: bool,
}

impl ArcSweep {
    /// Vorzeichenbehafteter Überstreichungswinkel vom Start- zum Endwinkel.
    ///
    /// Positiv für `anticlockwise == false`, negativ sonst.
    /// Gleiche Start- und Endwinkel ergeben 0.
    pub fn signed_sweep(&self) -> f64 {
        if self.anticlockwise {
            -(self.start_angle - self.end_angle).rem_euclid(TAU)
        } else {
            (self.end_angle - self.start_angle).rem_euclid(TAU)
        }
    }

    /// Prüft, ob der gezeichnete Bogen den (normalisierten) Winkel überstreicht.
    pub fn covers_angle(&self, angle: f64) -> bool {
        let sweep = self.signed_sweep();
        if self.anticlockwise {
            forward_diff(angle, self.start_angle) <= -sweep
        } else {
            forward_diff(self.start_angle, angle) <= sweep
        }
    }
}

/// Aufgelöster Bogen: alles, was der Renderer für einen Frame braucht.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArc {
    /// Kreis, auf dem der Bogen liegt
    pub circle: Circle,
    /// Winkelbereich und Richtung
    pub sweep: ArcSweep,
    /// Definierende Punkte (2 bei Sehnen-Vorschau, 3 beim Drei-Punkt-Bogen)
    pub points: Vec<DVec2>,
    /// Mittelpunkt der Sehne zwischen den beiden Bogen-Enden (Label-Position)
    pub label_anchor: DVec2,
}

impl ResolvedArc {
    /// Radius-Label, z.B. `R141.421`.
    pub fn label(&self) -> String {
        format!("R{:.3}", self.circle.radius)
    }
}

/// Doppelte vorzeichenbehaftete Dreiecksfläche (Determinante `A`).
pub fn signed_area(p1: DVec2, p2: DVec2, p3: DVec2) -> f64 {
    p1.x * (p2.y - p3.y) - p1.y * (p2.x - p3.x) + p2.x * p3.y - p3.x * p2.y
}

/// Umkreis durch drei Punkte (Determinanten-Methode).
///
/// Bei kollinearen oder zusammenfallenden Punkten (`|A| < 1e-10`) greift die
/// Sehnen-Konstruktion über `p1`/`p2` mit Radius `1.2 × |p1p2|`.
/// `None` nur, wenn auch diese Sehne die Länge 0 hat.
pub fn circumscribed_circle(p1: DVec2, p2: DVec2, p3: DVec2) -> Option<Circle> {
    let a = signed_area(p1, p2, p3);
    if a.abs() < COLLINEAR_EPSILON {
        return chord_circle(p1, p2, DEFAULT_RADIUS_FACTOR);
    }

    let (x1, y1) = (p1.x, p1.y);
    let (x2, y2) = (p2.x, p2.y);
    let (x3, y3) = (p3.x, p3.y);
    let s1 = p1.length_squared();
    let s2 = p2.length_squared();
    let s3 = p3.length_squared();

    let b = s1 * (y3 - y2) + s2 * (y1 - y3) + s3 * (y2 - y1);
    let c = s1 * (x2 - x3) + s2 * (x3 - x1) + s3 * (x1 - x2);
    let d = s1 * (x3 * y2 - x2 * y3) + s2 * (x1 * y3 - x3 * y1) + s3 * (x2 * y1 - x1 * y2);

    let center = DVec2::new(-b / (2.0 * a), -c / (2.0 * a));
    let radius = ((b * b + c * c - 4.0 * a * d) / (4.0 * a * a)).sqrt();
    Some(Circle { center, radius })
}

/// Sehnen-Konstruktion: Kreis durch `p1` und `p2` mit Radius `radius_factor × |p1p2|`.
///
/// Der Mittelpunkt liegt auf der linken Normalen `(-dy, dx)` der Sehne im
/// Abstand `h = sqrt(r² − (d/2)²)` vom Sehnen-Mittelpunkt.
/// Gibt `None` zurück, wenn `p1` und `p2` zusammenfallen.
pub fn chord_circle(p1: DVec2, p2: DVec2, radius_factor: f64) -> Option<Circle> {
    let chord = p2 - p1;
    let distance = chord.length();
    if distance < f64::EPSILON {
        return None;
    }

    let radius = radius_factor * distance;
    let normal = DVec2::new(-chord.y, chord.x) / distance;
    let midpoint = (p1 + p2) * 0.5;
    let half = distance / 2.0;
    // Faktor < 0.5 ergäbe eine negative Wurzel → Mittelpunkt auf der Sehne
    let h = (radius * radius - half * half).max(0.0).sqrt();

    Some(Circle {
        center: midpoint + normal * h,
        radius,
    })
}

/// Normalisiert einen `atan2`-Winkel auf `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

/// Nicht-negativer Vorwärts-Winkelabstand von `from` nach `to` (mod 2π).
pub fn forward_diff(from: f64, to: f64) -> f64 {
    (to - from + TAU) % TAU
}

/// Normalisierter Winkel von `point` relativ zu `center`.
pub fn angle_of(center: DVec2, point: DVec2) -> f64 {
    normalize_angle((point.y - center.y).atan2(point.x - center.x))
}

/// Bestimmt Start-/Endwinkel und Umlaufrichtung für den Bogen von `p1` nach `p2`.
///
/// Ohne `p3` wird der kurze Weg gewählt (`diff > π` → anticlockwise).
/// Mit `p3` muss der Bogen durch dessen Winkelposition laufen.
pub fn arc_sweep(center: DVec2, p1: DVec2, p2: DVec2, p3: Option<DVec2>) -> ArcSweep {
    let a1 = angle_of(center, p1);
    let a2 = angle_of(center, p2);

    let anticlockwise = match p3 {
        None => forward_diff(a1, a2) > PI,
        Some(p3) => {
            let a3 = angle_of(center, p3);
            let diff12 = forward_diff(a1, a2);
            let diff13 = forward_diff(a1, a3);
            let diff32 = forward_diff(a3, a2);

            // Beide Zweige bewusst nicht symmetrisch formuliert.
            if diff12 < PI {
                diff13 > diff12 || diff32 > diff12
            } else {
                !(diff13 < diff12 && diff32 < diff12)
            }
        }
    };

    ArcSweep {
        start_angle: a1,
        end_angle: a2,
        anticlockwise,
    }
}

/// Löst einen Drei-Punkt-Bogen auf: Bogen von `p1` nach `p2` durch `p3`.
pub fn resolve_arc(p1: DVec2, p2: DVec2, p3: DVec2) -> Option<ResolvedArc> {
    let circle = circumscribed_circle(p1, p2, p3)?;
    let sweep = arc_sweep(circle.center, p1, p2, Some(p3));
    Some(ResolvedArc {
        circle,
        sweep,
        points: vec![p1, p2, p3],
        label_anchor: (p1 + p2) * 0.5,
    })
}

/// Löst einen Sehnen-Vorschaubogen von `p1` nach `p2` auf.
pub fn resolve_chord_arc(p1: DVec2, p2: DVec2, radius_factor: f64) -> Option<ResolvedArc> {
    let circle = chord_circle(p1, p2, radius_factor)?;
    let sweep = arc_sweep(circle.center, p1, p2, None);
    Some(ResolvedArc {
        circle,
        sweep,
        points: vec![p1, p2],
        label_anchor: (p1 + p2) * 0.5,
    })
}

/// Anzahl Segmente für eine Bogenlänge, begrenzt auf
/// `MIN_ARC_SEGMENTS..=MAX_ARC_SEGMENTS`.
fn segment_count(arc_length: f64, max_segment_length: f64) -> usize {
    let raw = (arc_length / max_segment_length).ceil();
    if raw.is_nan() || raw <= 0.0 {
        return MIN_ARC_SEGMENTS;
    }
    // Vergleich in f64, damit `as usize` nie sättigen muss
    if raw >= MAX_ARC_SEGMENTS as f64 {
        return MAX_ARC_SEGMENTS;
    }
    (raw as usize).max(MIN_ARC_SEGMENTS)
}

/// Tesselliert einen Bogen in eine Polylinie (inkl. Start- und Endpunkt).
///
/// Die Zeichenfläche kennt kein Bogen-Primitiv; egui zeichnet Polylinien.
pub fn tessellate_arc(circle: &Circle, sweep: &ArcSweep, max_segment_length: f64) -> Vec<DVec2> {
    let total = sweep.signed_sweep();
    let point_at = |angle: f64| circle.center + DVec2::new(angle.cos(), angle.sin()) * circle.radius;

    if total.abs() < f64::EPSILON {
        return vec![point_at(sweep.start_angle)];
    }

    let segments = segment_count(total.abs() * circle.radius, max_segment_length);
    (0..=segments)
        .map(|i| point_at(sweep.start_angle + total * (i as f64 / segments as f64)))
        .collect()
}

#[cfg(test)]
mod tests;
