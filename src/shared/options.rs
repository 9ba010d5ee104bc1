//! Zentrale Konfiguration für Arc-Sketch.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Snapping ────────────────────────────────────────────────────────

/// Snap-Radius in Pixeln: Klick innerhalb dieses Radius rastet auf einen Bogenpunkt ein.
pub const SNAP_RADIUS: f32 = 10.0;
/// Radius des Snap-Rings in Pixeln.
pub const SNAP_RING_RADIUS: f32 = 5.0;
/// Farbe des Snap-Rings (RGBA: halbtransparentes Orange).
pub const SNAP_RING_COLOR: [f32; 4] = [1.0, 165.0 / 255.0, 0.0, 0.7];

// ── Geometrie ───────────────────────────────────────────────────────

/// Radiusfaktor der Sehnen-Vorschau (Radius = Faktor × Sehnenlänge).
pub const CHORD_RADIUS_FACTOR: f64 = 1.2;
/// Maximale Segmentlänge beim Tessellieren eines Bogens in Pixeln.
pub const ARC_SEGMENT_LENGTH: f32 = 4.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Radius der Punkt-Marker in Pixeln.
pub const POINT_RADIUS: f32 = 3.0;
/// Linienstärke der Bögen in Pixeln.
pub const STROKE_WIDTH: f32 = 2.0;
/// Farbe fertiger Bögen (RGBA: Violett).
pub const ARC_COLOR: [f32; 4] = [83.0 / 255.0, 26.0 / 255.0, 217.0 / 255.0, 1.0];
/// Farbe von Vorschau und Hover-Punkt (RGBA: Hellblau).
pub const PREVIEW_COLOR: [f32; 4] = [109.0 / 255.0, 166.0 / 255.0, 209.0 / 255.0, 1.0];
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Radius-Label ────────────────────────────────────────────────────

/// Schriftgröße des Radius-Labels in Pixeln.
pub const LABEL_FONT_SIZE: f32 = 16.0;
/// Innenabstand der Label-Box in Pixeln.
pub const LABEL_PADDING: f32 = 4.0;
/// Rahmenstärke der Label-Box in Pixeln.
pub const LABEL_BORDER_WIDTH: f32 = 1.0;
/// Füllfarbe der Label-Box (RGBA: Weiß).
pub const LABEL_FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Rahmenfarbe der Label-Box (RGBA: Grau).
pub const LABEL_BORDER_COLOR: [f32; 4] = [141.0 / 255.0, 147.0 / 255.0, 153.0 / 255.0, 1.0];
/// Textfarbe des Labels (RGBA: Grau).
pub const LABEL_TEXT_COLOR: [f32; 4] = [141.0 / 255.0, 147.0 / 255.0, 153.0 / 255.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `arc_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Snapping ────────────────────────────────────────────────
    /// Neue Punkte auf Punkte fertiger Bögen einrasten lassen
    pub snap_enabled: bool,
    /// Snap-Radius in Pixeln
    pub snap_radius: f32,
    /// Radius des Snap-Rings
    pub snap_ring_radius: f32,
    /// Farbe des Snap-Rings
    pub snap_ring_color: [f32; 4],

    // ── Geometrie ───────────────────────────────────────────────
    /// Radiusfaktor der Sehnen-Vorschau
    pub chord_radius_factor: f64,
    /// Maximale Segmentlänge der Bogen-Polylinie
    pub arc_segment_length: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Radius der Punkt-Marker
    pub point_radius: f32,
    /// Linienstärke der Bögen
    pub stroke_width: f32,
    /// Farbe fertiger Bögen
    pub arc_color: [f32; 4],
    /// Farbe der Vorschau
    pub preview_color: [f32; 4],
    /// Hintergrundfarbe der Zeichenfläche
    pub background_color: [f32; 4],

    // ── Radius-Label ────────────────────────────────────────────
    pub label_font_size: f32,
    pub label_padding: f32,
    pub label_border_width: f32,
    pub label_fill_color: [f32; 4],
    pub label_border_color: [f32; 4],
    pub label_text_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_radius: SNAP_RADIUS,
            snap_ring_radius: SNAP_RING_RADIUS,
            snap_ring_color: SNAP_RING_COLOR,

            chord_radius_factor: CHORD_RADIUS_FACTOR,
            arc_segment_length: ARC_SEGMENT_LENGTH,

            point_radius: POINT_RADIUS,
            stroke_width: STROKE_WIDTH,
            arc_color: ARC_COLOR,
            preview_color: PREVIEW_COLOR,
            background_color: BACKGROUND_COLOR,

            label_font_size: LABEL_FONT_SIZE,
            label_padding: LABEL_PADDING,
            label_border_width: LABEL_BORDER_WIDTH,
            label_fill_color: LABEL_FILL_COLOR,
            label_border_color: LABEL_BORDER_COLOR,
            label_text_color: LABEL_TEXT_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("arc_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("arc_sketch.toml")
    }

    /// Segmentlänge für `tessellate_arc` (mindestens 0.5 px).
    pub fn arc_segment_length(&self) -> f64 {
        f64::from(self.arc_segment_length.max(0.5))
    }
}
