//! Begrenztes Protokoll der ausgeführten Commands (Diagnose und Tests).

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    ///
    /// Cursor-Bewegungen werden nicht protokolliert, sie kämen pro Frame.
    /// Bei MAX_ENTRIES wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if matches!(command, AppCommand::ArcPointerMove { .. }) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_pointer_moves_are_not_recorded() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::ArcPointerMove { pos: DVec2::ONE });
        assert!(log.is_empty());
        log.record(&AppCommand::ActivateArcTool);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::DismissStatus);
        }
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);

        log.record(&AppCommand::ActivateArcTool);
        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert!(matches!(
            log.entries().last(),
            Some(AppCommand::ActivateArcTool)
        ));
    }
}
