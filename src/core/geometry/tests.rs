use super::*;
use approx::assert_abs_diff_eq;
use std::f64::consts::FRAC_PI_2;

fn p(x: f64, y: f64) -> DVec2 {
    DVec2::new(x, y)
}

// ── Sehnen-Konstruktion ──

#[test]
fn test_chord_circle_radius_is_factor_times_distance() {
    let pairs = [
        (p(0.0, 0.0), p(10.0, 0.0)),
        (p(100.0, 100.0), p(180.0, 40.0)),
        (p(3.5, 9000.0), p(-250.25, 8700.5)),
        (p(640.0, 480.0), p(641.0, 480.0)),
    ];

    for (p1, p2) in pairs {
        let circle = chord_circle(p1, p2, DEFAULT_RADIUS_FACTOR).expect("Sehne hat Länge > 0");
        assert_eq!(circle.radius, 1.2 * p1.distance(p2));
        assert_abs_diff_eq!(circle.center.distance(p1), circle.radius, epsilon = 1e-9);
        assert_abs_diff_eq!(circle.center.distance(p2), circle.radius, epsilon = 1e-9);
    }
}

#[test]
fn test_chord_circle_center_on_left_normal() {
    let circle = chord_circle(p(0.0, 0.0), p(10.0, 0.0), 1.2).expect("gültige Sehne");
    // h = sqrt(12² − 5²) = sqrt(119), Normale (0, 1)
    assert_abs_diff_eq!(circle.center.x, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(circle.center.y, 119.0_f64.sqrt(), epsilon = 1e-12);
    assert_abs_diff_eq!(circle.radius, 12.0, epsilon = 1e-12);
}

#[test]
fn test_chord_circle_identical_points_yield_none() {
    assert!(chord_circle(p(42.0, 17.0), p(42.0, 17.0), 1.2).is_none());
}

#[test]
fn test_chord_circle_small_factor_clamps_to_midpoint() {
    let circle = chord_circle(p(0.0, 0.0), p(10.0, 0.0), 0.4).expect("gültige Sehne");
    assert!(circle.center.is_finite());
    assert_abs_diff_eq!(circle.center.y, 0.0, epsilon = 1e-12);
}

// ── Umkreis ──

#[test]
fn test_circumscribed_circle_reference_triangle() {
    let circle = circumscribed_circle(p(100.0, 100.0), p(200.0, 100.0), p(150.0, 200.0))
        .expect("nicht-kollineare Punkte");
    // Mittelsenkrechte x = 150, (150 − 100)² + (y − 100)² = (200 − y)² → y = 137.5
    assert_abs_diff_eq!(circle.center.x, 150.0, epsilon = 1e-6);
    assert_abs_diff_eq!(circle.center.y, 137.5, epsilon = 1e-6);
    assert_abs_diff_eq!(circle.radius, 62.5, epsilon = 1e-6);
}

#[test]
fn test_circumscribed_circle_equidistant() {
    let triples = [
        (p(0.0, 0.0), p(100.0, 0.0), p(50.0, -20.0)),
        (p(300.0, 400.0), p(320.0, 380.0), p(100.0, 100.0)),
        (p(1000.0, 1000.0), p(9000.0, 1200.0), p(5000.0, 8000.0)),
        (p(12.25, 7.5), p(13.0, 9.75), p(11.5, 10.0)),
        (p(9999.0, 1.0), p(1.0, 9999.0), p(5000.0, 5000.5)),
    ];

    for (p1, p2, p3) in triples {
        let circle = circumscribed_circle(p1, p2, p3).expect("nicht-kollineare Punkte");
        for point in [p1, p2, p3] {
            assert_abs_diff_eq!(circle.center.distance(point), circle.radius, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_near_collinear_triple_uses_chord_fallback() {
    let p1 = p(0.0, 0.0);
    let p2 = p(10.0, 0.0);
    let p3 = p(5.0, 1e-12);
    assert!(signed_area(p1, p2, p3).abs() < COLLINEAR_EPSILON);

    let circle = circumscribed_circle(p1, p2, p3).expect("Fallback liefert Kreis");
    let fallback = chord_circle(p1, p2, DEFAULT_RADIUS_FACTOR).expect("gültige Sehne");
    assert_eq!(circle, fallback);
    assert_eq!(circle.radius, 12.0);
}

#[test]
fn test_collinear_triple_uses_chord_fallback() {
    let circle = circumscribed_circle(p(0.0, 0.0), p(10.0, 10.0), p(20.0, 20.0))
        .expect("Fallback liefert Kreis");
    let fallback =
        chord_circle(p(0.0, 0.0), p(10.0, 10.0), DEFAULT_RADIUS_FACTOR).expect("gültige Sehne");
    assert_eq!(circle, fallback);
}

#[test]
fn test_collinear_with_coincident_chord_yields_none() {
    assert!(circumscribed_circle(p(5.0, 5.0), p(5.0, 5.0), p(9.0, 9.0)).is_none());
}

// ── Winkel & Umlaufrichtung ──

#[test]
fn test_normalize_angle_range() {
    assert_abs_diff_eq!(normalize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(normalize_angle(1.0), 1.0);
    assert!(normalize_angle(-1e-9) < TAU);
}

#[test]
fn test_two_point_sweep_takes_short_way() {
    let center = DVec2::ZERO;
    let sweep = arc_sweep(center, p(1.0, 0.0), p(0.0, 1.0), None);
    assert!(!sweep.anticlockwise);

    let sweep = arc_sweep(center, p(0.0, 1.0), p(1.0, 0.0), None);
    assert!(sweep.anticlockwise);
}

#[test]
fn test_two_point_sweep_boundary_around_pi() {
    let center = DVec2::ZERO;
    let below = 0.999 * PI;
    let above = 1.001 * PI;

    let sweep = arc_sweep(center, p(1.0, 0.0), p(below.cos(), below.sin()), None);
    assert!(!sweep.anticlockwise, "diff knapp unter π → im Uhrzeigersinn");

    let sweep = arc_sweep(center, p(1.0, 0.0), p(above.cos(), above.sin()), None);
    assert!(sweep.anticlockwise, "diff knapp über π → gegen den Uhrzeigersinn");
}

#[test]
fn test_three_point_sweep_reference_triangle() {
    let (p1, p2, p3) = (p(100.0, 100.0), p(200.0, 100.0), p(150.0, 200.0));
    let circle = circumscribed_circle(p1, p2, p3).expect("Kreis");
    let sweep = arc_sweep(circle.center, p1, p2, Some(p3));

    // diff12 < π, p3 liegt außerhalb des Vorwärtsbogens → rückwärts zeichnen
    assert!(forward_diff(sweep.start_angle, sweep.end_angle) < PI);
    assert!(sweep.anticlockwise);
    assert!(sweep.covers_angle(angle_of(circle.center, p3)));
}

#[test]
fn test_three_point_sweep_swap_flips_direction() {
    let triples = [
        (p(100.0, 100.0), p(200.0, 100.0), p(150.0, 200.0)),
        (p(100.0, 100.0), p(200.0, 100.0), p(150.0, 80.0)),
        (p(0.0, 0.0), p(100.0, 0.0), p(50.0, -20.0)),
        (p(300.0, 400.0), p(320.0, 380.0), p(100.0, 100.0)),
        (p(640.0, 120.0), p(80.0, 700.0), p(900.0, 900.0)),
    ];

    for (p1, p2, p3) in triples {
        let circle = circumscribed_circle(p1, p2, p3).expect("Kreis");
        let a3 = angle_of(circle.center, p3);

        let forward = arc_sweep(circle.center, p1, p2, Some(p3));
        let swapped = arc_sweep(circle.center, p2, p1, Some(p3));

        assert_ne!(
            forward.anticlockwise, swapped.anticlockwise,
            "Tausch von p1/p2 muss die Richtung umkehren ({p1}, {p2}, {p3})"
        );
        assert!(forward.covers_angle(a3), "Bogen verfehlt p3 ({p1}, {p2}, {p3})");
        assert!(swapped.covers_angle(a3), "Getauschter Bogen verfehlt p3");
    }
}

#[test]
fn test_three_point_sweep_inside_forward_arc_is_clockwise() {
    let center = DVec2::ZERO;
    // a1 = 0, a2 = π/2, a3 = π/4 → p3 liegt im Vorwärtsbogen
    let p3 = p(0.5_f64.sqrt(), 0.5_f64.sqrt());
    let sweep = arc_sweep(center, p(1.0, 0.0), p(0.0, 1.0), Some(p3));
    assert!(!sweep.anticlockwise);

    // a1 = 0, a2 = 3π/2 (diff12 ≥ π), a3 = π → innerhalb → nicht anticlockwise
    let sweep = arc_sweep(center, p(1.0, 0.0), p(0.0, -1.0), Some(p(-1.0, 0.0)));
    assert!(!sweep.anticlockwise);

    // a1 = 0, a2 = 3π/2, a3 = 7π/4 → außerhalb → anticlockwise
    let sweep = arc_sweep(center, p(1.0, 0.0), p(0.0, -1.0), Some(p(1.0, -1.0)));
    assert!(sweep.anticlockwise);
}

// ── Überstreichung & Tessellierung ──

#[test]
fn test_signed_sweep_signs() {
    let clockwise = ArcSweep {
        start_angle: 0.0,
        end_angle: FRAC_PI_2,
        anticlockwise: false,
    };
    assert_abs_diff_eq!(clockwise.signed_sweep(), FRAC_PI_2, epsilon = 1e-12);

    let anticlockwise = ArcSweep {
        anticlockwise: true,
        ..clockwise
    };
    assert_abs_diff_eq!(anticlockwise.signed_sweep(), -3.0 * FRAC_PI_2, epsilon = 1e-12);

    let empty = ArcSweep {
        start_angle: 1.0,
        end_angle: 1.0,
        anticlockwise: false,
    };
    assert_eq!(empty.signed_sweep(), 0.0);
}

#[test]
fn test_tessellate_quarter_arc_stays_on_radius() {
    let circle = Circle {
        center: p(50.0, 50.0),
        radius: 10.0,
    };
    let sweep = ArcSweep {
        start_angle: 0.0,
        end_angle: FRAC_PI_2,
        anticlockwise: false,
    };

    let points = tessellate_arc(&circle, &sweep, 1.0);
    assert!(points.len() > MIN_ARC_SEGMENTS);

    let first = points[0];
    let last = points[points.len() - 1];
    assert_abs_diff_eq!(first.x, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.y, 60.0, epsilon = 1e-9);

    for point in &points {
        assert_abs_diff_eq!(point.distance(circle.center), 10.0, epsilon = 1e-9);
    }
}

#[test]
fn test_tessellate_anticlockwise_takes_long_way() {
    let circle = Circle {
        center: DVec2::ZERO,
        radius: 10.0,
    };
    let sweep = ArcSweep {
        start_angle: 0.0,
        end_angle: FRAC_PI_2,
        anticlockwise: true,
    };

    let points = tessellate_arc(&circle, &sweep, 1.0);
    let mid = points[points.len() / 2];
    // Rückwärts von 0 nach π/2 läuft über −3π/4
    assert!(mid.x < 0.0 && mid.y < 0.0, "Mitte bei {mid}");
}

#[test]
fn test_tessellate_zero_sweep_is_single_point() {
    let circle = Circle {
        center: DVec2::ZERO,
        radius: 5.0,
    };
    let sweep = ArcSweep {
        start_angle: 0.0,
        end_angle: 0.0,
        anticlockwise: false,
    };
    assert_eq!(tessellate_arc(&circle, &sweep, 1.0).len(), 1);
}

#[test]
fn test_tessellate_near_collinear_long_way_is_capped() {
    // Gültig (|A| = 4000), aber Radius ~3e7 und Bogen über fast 2π
    let arc = resolve_arc(p(0.0, 0.0), p(5000.0, 0.0), p(10000.0, 0.8))
        .expect("nicht kollinear, Umkreis erwartet");
    assert!(arc.circle.radius > 1e7);
    assert!(arc.sweep.signed_sweep().abs() > PI, "Bogen läuft den langen Weg");

    let points = tessellate_arc(&arc.circle, &arc.sweep, 4.0);
    assert!(
        points.len() <= MAX_ARC_SEGMENTS + 1,
        "Polylinie unbegrenzt: {} Punkte",
        points.len()
    );
    assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 1e-3);
    let last = points[points.len() - 1];
    assert_abs_diff_eq!(last.x, 5000.0, epsilon = 1e-3);
    assert_abs_diff_eq!(last.y, 0.0, epsilon = 1e-3);
}

#[test]
fn test_segment_count_bounds() {
    assert_eq!(segment_count(1.0, 4.0), MIN_ARC_SEGMENTS);
    assert_eq!(segment_count(400.0, 4.0), 100);
    assert_eq!(segment_count(1e12, 4.0), MAX_ARC_SEGMENTS);
    assert_eq!(segment_count(f64::INFINITY, 4.0), MAX_ARC_SEGMENTS);
    assert_eq!(segment_count(f64::NAN, 4.0), MIN_ARC_SEGMENTS);
}

// ── Aufgelöste Bögen ──

#[test]
fn test_resolve_arc_label_and_anchor() {
    let arc = resolve_arc(p(100.0, 100.0), p(200.0, 100.0), p(150.0, 200.0)).expect("Bogen");
    assert_eq!(arc.label(), "R62.500");
    assert_eq!(arc.label_anchor, p(150.0, 100.0));
    assert_eq!(arc.points.len(), 3);
}

#[test]
fn test_resolve_chord_arc_uses_two_points() {
    let arc = resolve_chord_arc(p(0.0, 0.0), p(10.0, 0.0), 1.2).expect("Bogen");
    assert_eq!(arc.points.len(), 2);
    assert_eq!(arc.label(), "R12.000");
    assert!(resolve_chord_arc(p(1.0, 1.0), p(1.0, 1.0), 1.2).is_none());
}
