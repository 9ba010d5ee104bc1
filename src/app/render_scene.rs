//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Mittelpunkt und Radius werden pro Frame aus den Punkten neu berechnet.
pub fn build(state: &AppState) -> RenderScene {
    let arcs = state
        .session
        .drawing()
        .arcs()
        .iter()
        .filter_map(|drawn| {
            let resolved = drawn.arc.resolve();
            if resolved.is_none() {
                log::debug!("Bogen #{} übersprungen: Sehne der Länge 0", drawn.id);
            }
            resolved
        })
        .collect();

    let (preview_arc, preview_points) = match state.session.preview() {
        Some(preview) => match preview.arc {
            Some(arc) => (Some(arc), Vec::new()),
            None => (None, preview.points),
        },
        None => (None, Vec::new()),
    };

    // Snap-Ring nur während einer Sitzung
    let snap_highlight = state
        .session
        .hover()
        .filter(|target| state.session.is_active() && target.is_snapped())
        .map(|target| target.position());

    RenderScene {
        arcs,
        preview_arc,
        preview_points,
        snap_highlight,
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use glam::DVec2;

    fn draw_reference_arc(state: &mut AppState) {
        state.session.activate().expect("Aktivierung");
        state.session.handle_pointer_down(DVec2::new(100.0, 100.0));
        state.session.handle_pointer_down(DVec2::new(200.0, 100.0));
        state.session.handle_pointer_down(DVec2::new(150.0, 200.0));
    }

    #[test]
    fn build_empty_state_is_empty() {
        let state = AppState::new();
        assert!(build(&state).is_empty());
    }

    #[test]
    fn build_contains_finalized_arcs() {
        let mut state = AppState::new();
        draw_reference_arc(&mut state);

        let scene = build(&state);
        assert_eq!(scene.arcs.len(), 1);
        assert_eq!(scene.arcs[0].label(), "R62.500");
        assert!(scene.preview_arc.is_none());
    }

    #[test]
    fn build_hover_point_before_first_click() {
        let mut state = AppState::new();
        state.session.activate().expect("Aktivierung");
        state.session.handle_pointer_move(DVec2::new(30.0, 40.0));

        let scene = build(&state);
        assert!(scene.preview_arc.is_none());
        assert_eq!(scene.preview_points, vec![DVec2::new(30.0, 40.0)]);
    }

    #[test]
    fn build_chord_preview_after_first_click() {
        let mut state = AppState::new();
        state.session.activate().expect("Aktivierung");
        state.session.handle_pointer_down(DVec2::new(0.0, 0.0));
        state.session.handle_pointer_move(DVec2::new(10.0, 0.0));

        let scene = build(&state);
        let arc = scene.preview_arc.expect("Sehnen-Vorschau erwartet");
        assert_eq!(arc.points.len(), 2);
        assert!(scene.preview_points.is_empty());
    }

    #[test]
    fn build_snap_highlight_only_during_session() {
        let mut state = AppState::new();
        draw_reference_arc(&mut state);

        state.session.handle_pointer_move(DVec2::new(103.0, 102.0));
        assert!(build(&state).snap_highlight.is_none());

        state.session.activate().expect("Aktivierung");
        state.session.handle_pointer_move(DVec2::new(103.0, 102.0));
        assert_eq!(
            build(&state).snap_highlight,
            Some(DVec2::new(100.0, 100.0))
        );
    }
}
