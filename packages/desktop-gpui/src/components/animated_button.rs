//! Animated width button
//!
//! Renders [`ButtonProps`] and eases the button's width toward the measured
//! width of its label whenever the label changes.

use gpui::prelude::*;
use gpui::*;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use editor_core::button::{
    self as model, button_transitions, AnimatedWidth, ButtonProps, ButtonWidth, Durations,
    LayoutRegistry, TransitionProperty, WidthTween, CONTENT_FONT_FEATURES,
};

use crate::theme::Theme;

/// Click callback with the same shape as GPUI's own click listeners
pub type ClickListener = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>;

pub type Props = ButtonProps<ClickListener>;

/// Width of the leading icon box
const ICON_BOX: f32 = 16.0;
/// Gap between the icon and the label
const ICON_GAP: f32 = 6.0;
/// Horizontal padding on each side of the button
const PADDING_X: f32 = 14.0;

static NEXT_CONTENTS_ID: AtomicU64 = AtomicU64::new(1);

/// Layout observation shared by every animated button in the app
pub struct SharedLayout(pub Rc<LayoutRegistry>);

impl Global for SharedLayout {}

pub fn init(cx: &mut App) {
    cx.set_global(SharedLayout(Rc::new(LayoutRegistry::new())));
}

fn content_font_features() -> FontFeatures {
    FontFeatures(Arc::new(
        CONTENT_FONT_FEATURES
            .iter()
            .map(|&(tag, value)| (tag.to_string(), value))
            .collect(),
    ))
}

/// Element id of a button, unique per contents wrapper.
fn element_id(contents: model::ElementId) -> SharedString {
    SharedString::from(format!("animated-button-{}", contents.raw()))
}

/// GPUI has no accessibility tree: `role` is not rendered, `aria_checked`
/// only affects styling and `aria_label` only appears in logs.
pub struct AnimatedButton {
    props: Props,
    registry: Rc<LayoutRegistry>,
    contents: model::ElementId,
    width: AnimatedWidth,
    tween: WidthTween,
}

impl AnimatedButton {
    pub fn new(props: Props, cx: &mut Context<Self>) -> Self {
        let registry = cx.global::<SharedLayout>().0.clone();
        let contents = model::ElementId::new(NEXT_CONTENTS_ID.fetch_add(1, Ordering::Relaxed));

        Self {
            props,
            width: AnimatedWidth::new(registry.clone()),
            registry,
            contents,
            tween: WidthTween::from_list(&button_transitions(&Durations::default(), false)),
        }
    }

    pub fn set_props(&mut self, props: Props, cx: &mut Context<Self>) {
        self.props = props;
        cx.notify();
    }

    fn render_icon(&self, color: Hsla) -> Option<impl IntoElement> {
        let icon = self.props.start_icon.as_ref()?;
        Some(
            div()
                .flex_none()
                .w(px(ICON_BOX))
                .flex()
                .justify_center()
                .text_color(color)
                .child(icon.name().to_string()),
        )
    }

    /// The label plus a canvas that reports its laid-out width
    fn render_contents(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let registry = self.registry.clone();
        let contents = self.contents;
        let entity = cx.entity();
        let label = self.props.children.clone().unwrap_or_default();

        let mut wrapper = div()
            .flex()
            .flex_row()
            .justify_end()
            .overflow_hidden()
            .flex_1();
        wrapper.style().text.get_or_insert_with(Default::default).font_features = Some(content_font_features());

        wrapper.child(
            div()
                .relative()
                .flex_none()
                .whitespace_nowrap()
                .child(label)
                .child(
                    canvas(
                        move |bounds, _window, cx| {
                            let width = model::Pixels(f32::from(bounds.size.width));
                            if registry.report_width(contents, width) {
                                entity.update(cx, |_, cx| cx.notify());
                            }
                        },
                        |_, _, _, _| {},
                    )
                    .absolute()
                    .size_full(),
                ),
        )
    }
}

impl Drop for AnimatedButton {
    fn drop(&mut self) {
        self.registry.forget(self.contents);
    }
}

impl Render for AnimatedButton {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.global::<Theme>().clone();
        let reduce_motion = crate::settings::current(cx).reduce_motion;
        let now = Instant::now();

        let transitions = button_transitions(&Durations::default(), reduce_motion);
        self.tween
            .set_transition(transitions.get(TransitionProperty::Width).copied(), now);

        // The contents wrapper is always rendered, so it stays attached.
        self.width.attach_contents(Some(self.contents));
        if self.width.take_invalidated() {
            tracing::trace!(
                "Button {} ({}) contents measured at {:?}",
                self.contents.raw(),
                self.props.aria_label.as_deref().unwrap_or("unlabeled"),
                self.width.measured().to_css()
            );
        }

        let width = match self.width.display_width(self.props.has_start_icon()) {
            ButtonWidth::Auto => {
                self.tween.reset();
                None
            }
            ButtonWidth::Exact(target) => {
                self.tween.retarget(target, now);
                self.tween.sample(now)
            }
        };
        if self.tween.is_animating(now) {
            window.request_animation_frame();
        }

        let palette = theme.button_palette(self.props.color);
        let disabled = self.props.disabled;
        let checked = self.props.aria_checked == Some(true);
        let handler = self.props.enabled_handler().cloned();
        let style = self.props.style.clone().unwrap_or_default();

        div()
            .id(element_id(self.contents))
            .flex()
            .flex_row()
            .items_center()
            .gap(px(ICON_GAP))
            .px(px(PADDING_X))
            .py(px(6.0))
            .rounded(px(6.0))
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(palette.text)
            .bg(palette.background)
            .when_some(width, |el, width| el.w(px(width.0)))
            .when_some(style.margin_left, |el, margin| el.ml(px(margin.0)))
            .when_some(style.margin_right, |el, margin| el.mr(px(margin.0)))
            .when_some(style.min_height, |el, height| el.min_h(px(height.0)))
            .when(checked, |el| el.bg(palette.hover))
            .when(disabled, |el| el.opacity(0.5))
            .when(!disabled, |el| {
                let hover = palette.hover;
                el.cursor_pointer().hover(move |style| style.bg(hover))
            })
            .when_some(handler, |el, handler| {
                el.on_click(move |event, window, cx| handler(event, window, cx))
            })
            .children(self.render_icon(palette.text))
            .child(self.render_contents(cx))
    }
}
