//! Refinery Desktop - GPUI shell for the Refinery editor
//!
//! Hosts the editor toolbar with animated width buttons and loads the backend
//! connection config from the configured server.

mod api;
mod app;
mod components;
mod settings;
mod theme;

use anyhow::Result;
use gpui::prelude::*;
use gpui::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Refinery Desktop");

    Application::new().run(|cx: &mut App| {
        // Settings first: theme and backend origin depend on them
        settings::init(cx);

        theme::init(cx);

        // Layout observation for animated buttons
        components::animated_button::init(cx);

        // Backend client and Tokio runtime
        api::init(cx);

        let opened = cx.open_window(
            WindowOptions {
                titlebar: Some(TitlebarOptions {
                    title: Some("Refinery".into()),
                    appears_transparent: true,
                    ..Default::default()
                }),
                window_bounds: Some(WindowBounds::Windowed(Bounds {
                    origin: point(px(100.0), px(100.0)),
                    size: size(px(960.0), px(640.0)),
                })),
                ..Default::default()
            },
            |_window, cx| cx.new(|cx| app::EditorRoot::new(cx)),
        );

        match opened {
            Ok(_) => tracing::info!("Refinery Desktop window opened"),
            Err(err) => {
                tracing::error!("Failed to open window: {}", err);
                cx.quit();
            }
        }
    });

    Ok(())
}
