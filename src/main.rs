//! Arc-Sketch.
//!
//! Zeichenfläche für Kreisbögen aus drei Klicks mit Snapping und Radius-Label.

use arc_sketch::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Arc-Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title("Arc-Sketch"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Arc-Sketch",
            options,
            Box::new(|_cc| Ok(Box::new(SketchApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SketchApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl SketchApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_events);
    }
}

impl SketchApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_status_bar(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(ui, &response));

                let scene = self.controller.build_render_scene(&self.state);
                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, render::to_color32(scene.options.background_color));

                let mut surface = render::EguiSurface::new(&painter, rect.min);
                render::render_scene(&mut surface, &scene);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if has_events || self.state.show_options_dialog {
            ctx.request_repaint();
        }
    }
}
