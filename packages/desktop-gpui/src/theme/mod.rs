//! Theme system for Refinery Desktop
//!
//! Light and dark palettes plus the colors used by animated buttons.

mod colors;
mod themes;

pub use colors::*;
pub use themes::*;

use editor_core::button::{ButtonColor, Shading, ToolkitColor};
use gpui::*;

// ============================================================================
// Theme Structure
// ============================================================================

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // Core colors
    pub primary: Hsla,

    // Status colors
    pub error: Hsla,
    pub warning: Hsla,
    pub success: Hsla,

    // Text colors
    pub text: Hsla,
    pub text_muted: Hsla,

    // Background colors
    pub background: Hsla,
    pub background_panel: Hsla,
    pub background_element: Hsla,

    pub border: Hsla,
}

impl Default for Theme {
    fn default() -> Self {
        themes::refinery_dark()
    }
}

impl Global for Theme {}

/// Colors of one button in one state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonPalette {
    pub text: Hsla,
    pub background: Hsla,
    pub hover: Hsla,
}

impl Theme {
    pub fn by_id(id: &str) -> Option<Theme> {
        match id {
            "dark" => Some(themes::refinery_dark()),
            "light" => Some(themes::refinery_light()),
            _ => None,
        }
    }

    fn toolkit_color(&self, color: ToolkitColor) -> Hsla {
        match color {
            ToolkitColor::Error => self.error,
            ToolkitColor::Warning => self.warning,
            ToolkitColor::Primary => self.primary,
            ToolkitColor::Inherit => self.text,
        }
    }

    /// `shaded` tints the background with the button color; `shaded-dim`
    /// keeps it transparent and mutes the text.
    pub fn button_palette(&self, color: ButtonColor) -> ButtonPalette {
        let base = self.toolkit_color(color.toolkit_color());
        match color.shading() {
            Shading::Shaded => ButtonPalette {
                text: base,
                background: base.opacity(0.08),
                hover: base.opacity(0.16),
            },
            Shading::ShadedDim => ButtonPalette {
                text: self.text_muted,
                background: Hsla::transparent_black(),
                hover: self.text_muted.opacity(0.12),
            },
        }
    }
}

// ============================================================================
// Theme Initialization
// ============================================================================

/// Initialize the theme from the settings
pub fn init(cx: &mut App) {
    let id = crate::settings::current(cx).theme.clone();
    let theme = Theme::by_id(&id).unwrap_or_else(|| {
        tracing::warn!("Theme not found: {}, using default", id);
        Theme::default()
    });

    tracing::debug!("Theme initialized: {}", theme.name);
    cx.set_global(theme);
}
