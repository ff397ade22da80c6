//! Built-in theme definitions
//!
//! Palettes follow the Refinery web editor's light and dark themes.

use super::colors::hex;
use super::Theme;

pub fn refinery_dark() -> Theme {
    Theme {
        name: "Refinery Dark",

        primary: hex("#56b6c2"),
        error: hex("#e06c75"),
        warning: hex("#e5c07b"),
        success: hex("#98c379"),

        text: hex("#ebebff"),
        text_muted: hex("#abb2bf"),

        background: hex("#21252b"),
        background_panel: hex("#282c34"),
        background_element: hex("#2c313a"),

        border: hex("#3e4452"),
    }
}

pub fn refinery_light() -> Theme {
    Theme {
        name: "Refinery Light",

        primary: hex("#038a99"),
        error: hex("#ca1243"),
        warning: hex("#c18401"),
        success: hex("#50a14f"),

        text: hex("#19202b"),
        text_muted: hex("#696c77"),

        background: hex("#fafafa"),
        background_panel: hex("#ffffff"),
        background_element: hex("#f0f0f1"),

        border: hex("#d0d0d0"),
    }
}
