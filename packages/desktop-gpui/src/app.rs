//! Root view
//!
//! EditorRoot shows the editor toolbar and the backend connection status.

use gpui::prelude::*;
use gpui::*;
use std::rc::Rc;

use editor_core::button::{self as model, ButtonColor, Icon, StyleOverrides};

use crate::api::{self, BackendState, ConfigStatus};
use crate::components::animated_button::{AnimatedButton, Props};
use crate::settings;
use crate::theme::Theme;

/// Error and warning counts stepped through by the diagnostics button
const SAMPLE_DIAGNOSTICS: [(usize, usize); 5] = [(0, 0), (3, 1), (12, 0), (0, 2), (1, 0)];

// ============================================================================
// Root View
// ============================================================================

pub struct EditorRoot {
    generate: Entity<AnimatedButton>,
    diagnostics: Entity<AnimatedButton>,
    reload: Entity<AnimatedButton>,
    motion: Entity<AnimatedButton>,
    sample: usize,
    generating: bool,
}

impl EditorRoot {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let reduce_motion = settings::current(cx).reduce_motion;

        let props = Self::generate_props(false, cx);
        let generate = cx.new(|cx| AnimatedButton::new(props, cx));
        let props = Self::diagnostics_props(0, cx);
        let diagnostics = cx.new(|cx| AnimatedButton::new(props, cx));
        let props = Self::reload_props(true, cx);
        let reload = cx.new(|cx| AnimatedButton::new(props, cx));
        let props = Self::motion_props(reduce_motion, cx);
        let motion = cx.new(|cx| AnimatedButton::new(props, cx));

        Self::load_backend_config(cx);

        Self {
            generate,
            diagnostics,
            reload,
            motion,
            sample: 0,
            generating: false,
        }
    }

    fn load_backend_config(cx: &mut Context<Self>) {
        let backend = cx.global_mut::<BackendState>();
        backend.config = ConfigStatus::Loading;
        let client = backend.client.clone();
        let env = backend.env.clone();
        let runtime = backend.runtime.clone();

        cx.spawn(async move |this, cx| {
            let status = api::fetch_config(client, env, runtime).await;
            let _ = this.update(cx, |root, cx| {
                cx.global_mut::<BackendState>().config = status;
                let props = Self::reload_props(false, cx);
                root.reload.update(cx, |button, cx| button.set_props(props, cx));
                cx.notify();
            });
        })
        .detach();
    }

    fn reload(&mut self, cx: &mut Context<Self>) {
        let props = Self::reload_props(true, cx);
        self.reload.update(cx, |button, cx| button.set_props(props, cx));
        Self::load_backend_config(cx);
        cx.notify();
    }

    fn next_diagnostics(&mut self, cx: &mut Context<Self>) {
        self.sample = (self.sample + 1) % SAMPLE_DIAGNOSTICS.len();
        let props = Self::diagnostics_props(self.sample, cx);
        self.diagnostics.update(cx, |button, cx| button.set_props(props, cx));
    }

    fn toggle_generate(&mut self, cx: &mut Context<Self>) {
        self.generating = !self.generating;
        let props = Self::generate_props(self.generating, cx);
        self.generate.update(cx, |button, cx| button.set_props(props, cx));
    }

    fn toggle_motion(&mut self, cx: &mut Context<Self>) {
        let reduce_motion = settings::toggle_reduce_motion(cx);
        let props = Self::motion_props(reduce_motion, cx);
        self.motion.update(cx, |button, cx| button.set_props(props, cx));
    }

    // ========================================================================
    // Button props
    // ========================================================================

    fn generate_props(generating: bool, cx: &mut Context<Self>) -> Props {
        let (label, icon) = if generating {
            ("Cancel", "■")
        } else {
            ("Generate", "▶")
        };

        Props::new(ButtonColor::Primary)
            .aria_label("generate")
            .start_icon(Icon::new(icon))
            .children(label)
            .on_click(Rc::new(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.toggle_generate(cx);
            })))
    }

    fn diagnostics_props(sample: usize, cx: &mut Context<Self>) -> Props {
        let (errors, warnings) = SAMPLE_DIAGNOSTICS[sample];
        let (label, color) = diagnostics_label(errors, warnings);

        Props::new(color)
            .aria_label("diagnostics")
            .style(StyleOverrides::margin_x(model::Pixels(4.0)))
            .children(label)
            .on_click(Rc::new(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.next_diagnostics(cx);
            })))
    }

    fn reload_props(loading: bool, cx: &mut Context<Self>) -> Props {
        let label = if loading { "Loading config…" } else { "Reload config" };

        Props::new(ButtonColor::Inherit)
            .aria_label("reload-config")
            .disabled(loading)
            .children(label)
            .on_click(Rc::new(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.reload(cx);
            })))
    }

    fn motion_props(reduce_motion: bool, cx: &mut Context<Self>) -> Props {
        let (label, color) = if reduce_motion {
            ("Reduced motion", ButtonColor::Primary)
        } else {
            ("Motion", ButtonColor::Dim)
        };

        Props::new(color)
            .aria_label("reduce-motion")
            .role("switch")
            .aria_checked(reduce_motion)
            .children(label)
            .on_click(Rc::new(cx.listener(|this, _: &ClickEvent, _window, cx| {
                this.toggle_motion(cx);
            })))
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn render_toolbar(&self, theme: &Theme) -> impl IntoElement {
        div()
            .h(px(48.0))
            .px(px(12.0))
            .flex()
            .items_center()
            .gap(px(8.0))
            .bg(theme.background_panel)
            .border_b_1()
            .border_color(theme.border)
            .child(self.generate.clone())
            .child(div().flex_1())
            .child(self.diagnostics.clone())
            .child(self.reload.clone())
            .child(self.motion.clone())
    }

    fn render_status(
        &self,
        status: &ConfigStatus,
        origin: &str,
        theme: &Theme,
    ) -> impl IntoElement {
        let body = div()
            .m(px(16.0))
            .p(px(12.0))
            .flex()
            .flex_col()
            .gap(px(4.0))
            .rounded(px(6.0))
            .bg(theme.background_element)
            .text_sm();

        match status {
            ConfigStatus::Loading => body.child(
                div()
                    .text_color(theme.text_muted)
                    .child(format!("Loading backend config from {}", origin)),
            ),
            ConfigStatus::Loaded(config) => body
                .child(
                    div()
                        .text_color(theme.success)
                        .font_weight(FontWeight::MEDIUM)
                        .child(format!("Connected to {}", origin)),
                )
                .child(div().child(format!("API: {}", config.api_base)))
                .child(div().child(format!("Xtext service: {}", config.web_socket_url))),
            ConfigStatus::Failed(error) => body
                .child(
                    div()
                        .text_color(theme.error)
                        .font_weight(FontWeight::MEDIUM)
                        .child(format!("Cannot load backend config from {}", origin)),
                )
                .child(div().text_color(theme.text_muted).child(error.clone())),
        }
    }
}

impl Render for EditorRoot {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>().clone();
        let backend = cx.global::<BackendState>();
        let status = backend.config.clone();
        let origin = backend.env.origin().to_string();

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.background)
            .text_color(theme.text)
            .child(self.render_toolbar(&theme))
            .child(self.render_status(&status, &origin, &theme))
    }
}

/// Summary label and color of the diagnostics button
fn diagnostics_label(errors: usize, warnings: usize) -> (String, ButtonColor) {
    fn count(n: usize, noun: &str) -> String {
        if n == 1 {
            format!("1 {noun}")
        } else {
            format!("{n} {noun}s")
        }
    }

    if errors > 0 {
        (count(errors, "error"), ButtonColor::Error)
    } else if warnings > 0 {
        (count(warnings, "warning"), ButtonColor::Warning)
    } else {
        ("Found no problems".to_string(), ButtonColor::Dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[core::prelude::v1::test]
    fn test_diagnostics_label() {
        assert_eq!(
            diagnostics_label(0, 0),
            ("Found no problems".to_string(), ButtonColor::Dim)
        );
        assert_eq!(diagnostics_label(1, 5), ("1 error".to_string(), ButtonColor::Error));
        assert_eq!(diagnostics_label(12, 0), ("12 errors".to_string(), ButtonColor::Error));
        assert_eq!(
            diagnostics_label(0, 2),
            ("2 warnings".to_string(), ButtonColor::Warning)
        );
    }
}
