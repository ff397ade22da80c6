//! Animated width button model.
//!
//! A button whose width follows the natural width of its content. The host
//! toolkit renders the content wrapper, reports its laid-out width to a
//! [`LayoutRegistry`], and reads the width to apply from [`AnimatedWidth`].
//! [`WidthTween`] turns width jumps into a short transition.

mod layout;
mod transition;
mod width;

pub use layout::*;
pub use transition::*;
pub use width::*;

use std::fmt;
use std::rc::Rc;

// ============================================================================
// Colors
// ============================================================================

/// Color variant requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonColor {
    Error,
    Warning,
    Primary,
    #[default]
    Inherit,
    /// Inherited color with a dimmed shading.
    Dim,
}

/// Color category understood by the underlying toolkit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolkitColor {
    Error,
    Warning,
    Primary,
    Inherit,
}

/// Shading class applied on top of the toolkit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shading {
    Shaded,
    ShadedDim,
}

impl Shading {
    pub fn class(self) -> &'static str {
        match self {
            Shading::Shaded => "shaded",
            Shading::ShadedDim => "shaded-dim",
        }
    }
}

impl ButtonColor {
    /// `Dim` is rendered as `Inherit`; only the shading tells them apart.
    pub fn toolkit_color(self) -> ToolkitColor {
        match self {
            ButtonColor::Error => ToolkitColor::Error,
            ButtonColor::Warning => ToolkitColor::Warning,
            ButtonColor::Primary => ToolkitColor::Primary,
            ButtonColor::Inherit | ButtonColor::Dim => ToolkitColor::Inherit,
        }
    }

    pub fn shading(self) -> Shading {
        match self {
            ButtonColor::Dim => Shading::ShadedDim,
            _ => Shading::Shaded,
        }
    }
}

// ============================================================================
// Props
// ============================================================================

/// Default click handler shape for hosts without their own callback type.
pub type ClickHandler = Rc<dyn Fn()>;

/// Leading icon, identified by name or glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(String);

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Caller-supplied style adjustments that leave the width logic alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    pub margin_left: Option<Pixels>,
    pub margin_right: Option<Pixels>,
    pub min_height: Option<Pixels>,
}

impl StyleOverrides {
    pub fn margin_x(margin: Pixels) -> Self {
        Self {
            margin_left: Some(margin),
            margin_right: Some(margin),
            ..Default::default()
        }
    }
}

/// Presentation configuration of an animated button.
///
/// `H` is the click handler type, so each host can use its own callback
/// signature. Props are rebuilt on every render and never mutated in place.
pub struct ButtonProps<H = ClickHandler> {
    pub aria_label: Option<String>,
    pub role: Option<String>,
    pub aria_checked: Option<bool>,
    pub on_click: Option<H>,
    pub color: ButtonColor,
    pub disabled: bool,
    pub start_icon: Option<Icon>,
    pub style: Option<StyleOverrides>,
    pub children: Option<String>,
}

impl<H> ButtonProps<H> {
    pub fn new(color: ButtonColor) -> Self {
        Self {
            aria_label: None,
            role: None,
            aria_checked: None,
            on_click: None,
            color,
            disabled: false,
            start_icon: None,
            style: None,
            children: None,
        }
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn aria_checked(mut self, checked: bool) -> Self {
        self.aria_checked = Some(checked);
        self
    }

    pub fn on_click(mut self, handler: H) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn start_icon(mut self, icon: Icon) -> Self {
        self.start_icon = Some(icon);
        self
    }

    pub fn style(mut self, style: StyleOverrides) -> Self {
        self.style = Some(style);
        self
    }

    pub fn children(mut self, content: impl Into<String>) -> Self {
        self.children = Some(content.into());
        self
    }

    pub fn has_start_icon(&self) -> bool {
        self.start_icon.is_some()
    }

    pub fn toolkit_color(&self) -> ToolkitColor {
        self.color.toolkit_color()
    }

    /// Class list applied to the rendered button.
    pub fn class_name(&self) -> String {
        format!("rounded {}", self.color.shading().class())
    }

    /// The click handler, or `None` while the button is disabled.
    pub fn enabled_handler(&self) -> Option<&H> {
        if self.disabled {
            None
        } else {
            self.on_click.as_ref()
        }
    }
}

impl ButtonProps<ClickHandler> {
    /// Invoke the click handler. Returns whether a handler ran.
    pub fn click(&self) -> bool {
        match self.enabled_handler() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl<H> fmt::Debug for ButtonProps<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("aria_label", &self.aria_label)
            .field("role", &self.role)
            .field("aria_checked", &self.aria_checked)
            .field("on_click", &self.on_click.is_some())
            .field("color", &self.color)
            .field("disabled", &self.disabled)
            .field("start_icon", &self.start_icon)
            .field("style", &self.style)
            .field("children", &self.children)
            .finish()
    }
}
