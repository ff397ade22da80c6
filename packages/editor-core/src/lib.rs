//! Refinery Editor Core - toolkit-independent pieces of the editor front end.
//!
//! This crate holds the parts of the Refinery editor that do not depend on a
//! particular UI toolkit:
//!
//! - **Animated width button**: a button model that follows the measured width
//!   of its content and animates toward it
//! - **Layout observation**: a host-side registry that notifies observers when
//!   an element's laid-out width changes
//! - **Backend config**: fetching and validating `config.json`, with defaults
//!   derived from the page origin
//! - **Settings**: the desktop shell's persisted settings
//!
//! # Example
//!
//! ```rust
//! use editor_core::button::{AnimatedWidth, ButtonWidth, ElementId, LayoutRegistry, Pixels};
//! use std::rc::Rc;
//!
//! let registry = Rc::new(LayoutRegistry::new());
//! let contents = ElementId::new(1);
//! registry.report_width(contents, Pixels(72.0));
//!
//! let mut width = AnimatedWidth::new(registry.clone());
//! width.attach_contents(Some(contents));
//! assert_eq!(width.display_width(false), ButtonWidth::Exact(Pixels(100.0)));
//!
//! registry.report_width(contents, Pixels(80.0));
//! assert_eq!(width.display_width(true), ButtonWidth::Exact(Pixels(130.0)));
//! ```

pub mod button;
pub mod config;
pub mod settings;

pub use button::{
    AnimatedWidth, ButtonColor, ButtonProps, ButtonWidth, LayoutRegistry, MeasuredWidth, Pixels,
};
pub use config::{
    fetch_backend_config, BackendConfig, BackendConfigWithDefaults, HostEnvironment, SchemaError,
    ENDPOINT,
};
pub use settings::Settings;

/// Error types for editor-core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid settings file: {0}")]
    SettingsFormat(#[from] toml::de::Error),

    #[error("Failed to write settings: {0}")]
    SettingsWrite(#[from] toml::ser::Error),
}

/// Result type for editor-core operations.
pub type Result<T> = std::result::Result<T, Error>;
