//! Settings as a GPUI global.

use editor_core::Settings;
use gpui::*;
use std::path::PathBuf;

/// Loaded settings plus the file they are saved to.
pub struct DesktopSettings {
    pub settings: Settings,
    path: PathBuf,
}

impl Global for DesktopSettings {}

pub fn init(cx: &mut App) {
    let path = Settings::default_path();
    let settings = Settings::load();
    tracing::debug!(
        "Settings loaded from {} (origin {})",
        path.display(),
        settings.origin
    );
    cx.set_global(DesktopSettings { settings, path });
}

pub fn current(cx: &App) -> &Settings {
    &cx.global::<DesktopSettings>().settings
}

/// Flip the reduced-motion preference and persist it.
pub fn toggle_reduce_motion(cx: &mut App) -> bool {
    let state = cx.global_mut::<DesktopSettings>();
    state.settings.reduce_motion = !state.settings.reduce_motion;

    if let Err(err) = state.settings.save_to(&state.path) {
        tracing::warn!("Failed to save settings to {}: {}", state.path.display(), err);
    }

    tracing::info!("Reduced motion: {}", state.settings.reduce_motion);
    state.settings.reduce_motion
}
