use std::io::{IsTerminal, stdout};
use std::sync::OnceLock;

use crate::cli::OutputFormat;

/// Process-wide presentation preferences, resolved once at startup.
#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    /// Whether progress indicators should be drawn at all.
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Resolve and store the UI preferences for this run.
///
/// Progress output is only drawn on an interactive terminal, and never when
/// the user asked for quiet mode or machine-readable output.
pub fn init(quiet: bool, format: OutputFormat) {
    let progress = stdout().is_terminal() && !quiet && format != OutputFormat::Json;
    let _ = UI_PREFS.set(UiPrefs { progress });
}

/// Current preferences; defaults to no progress when `init` was never called
/// (tests, library use).
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or(UiPrefs { progress: false })
}
