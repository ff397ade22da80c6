//! Measured and displayed button widths.

use std::cell::Cell;
use std::fmt;
use std::ops::{Add, Sub};
use std::rc::Rc;

use super::layout::{observe_resize, ElementId, Observation, ResizeSource};

/// Logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Pixels(pub f32);

impl Add for Pixels {
    type Output = Pixels;

    fn add(self, rhs: Pixels) -> Pixels {
        Pixels(self.0 + rhs.0)
    }
}

impl Sub for Pixels {
    type Output = Pixels;

    fn sub(self, rhs: Pixels) -> Pixels {
        Pixels(self.0 - rhs.0)
    }
}

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Room for the label padding when there is no leading icon.
pub const PADDING_WITHOUT_ICON: Pixels = Pixels(28.0);

/// Room for the label padding plus the icon box and its spacing.
pub const PADDING_WITH_ICON: Pixels = Pixels(50.0);

pub fn padding(has_start_icon: bool) -> Pixels {
    if has_start_icon {
        PADDING_WITH_ICON
    } else {
        PADDING_WITHOUT_ICON
    }
}

/// OpenType features applied to the content wrapper.
///
/// Tabular digits keep the content width unchanged when only a number in
/// the label changes.
pub const CONTENT_FONT_FEATURES: [(&str, u32); 1] = [("tnum", 1)];

/// Observed width of the content wrapper, absent until first measured.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasuredWidth(Option<Pixels>);

impl MeasuredWidth {
    pub const UNMEASURED: MeasuredWidth = MeasuredWidth(None);

    pub fn new(width: Pixels) -> Self {
        Self(Some(width))
    }

    pub fn get(self) -> Option<Pixels> {
        self.0
    }

    /// Text form of the width, e.g. `"72.5px"`.
    pub fn to_css(self) -> Option<String> {
        self.0.map(|width| width.to_string())
    }
}

/// Width to apply to the rendered button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonWidth {
    /// Natural size, before the content has been measured.
    Auto,
    Exact(Pixels),
}

impl fmt::Display for ButtonWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonWidth::Auto => f.write_str("auto"),
            ButtonWidth::Exact(width) => write!(f, "{width}"),
        }
    }
}

/// Per-button width state.
///
/// Owns at most one [`Observation`] of the content wrapper. The observation
/// is replaced when the wrapper changes and released when the holder is
/// dropped.
pub struct AnimatedWidth {
    source: Rc<dyn ResizeSource>,
    measured: Rc<Cell<MeasuredWidth>>,
    invalidated: Rc<Cell<bool>>,
    contents: Option<ElementId>,
    observation: Option<Observation>,
}

impl AnimatedWidth {
    pub fn new(source: Rc<dyn ResizeSource>) -> Self {
        Self {
            source,
            measured: Rc::new(Cell::new(MeasuredWidth::UNMEASURED)),
            invalidated: Rc::new(Cell::new(false)),
            contents: None,
            observation: None,
        }
    }

    /// Point the holder at the current content wrapper.
    ///
    /// Called whenever the wrapper reference may have changed. Passing the
    /// same element again keeps the existing observation.
    pub fn attach_contents(&mut self, contents: Option<ElementId>) {
        if self.contents == contents {
            return;
        }

        // Release the previous wrapper before observing the next one.
        self.observation = None;
        self.contents = contents;

        let Some(element) = contents else {
            tracing::trace!("Button contents detached");
            return;
        };

        if let Some(width) = self.source.measure(element) {
            store(&self.measured, &self.invalidated, width);
        }

        let measured = self.measured.clone();
        let invalidated = self.invalidated.clone();
        self.observation = Some(observe_resize(
            self.source.clone(),
            element,
            Rc::new(move |width| store(&measured, &invalidated, width)),
        ));
    }

    /// The element currently observed, if any.
    pub fn contents(&self) -> Option<ElementId> {
        self.contents
    }

    pub fn measured(&self) -> MeasuredWidth {
        self.measured.get()
    }

    /// Content width plus the padding allowance, or `Auto` before measuring.
    pub fn display_width(&self, has_start_icon: bool) -> ButtonWidth {
        match self.measured.get().get() {
            Some(width) => ButtonWidth::Exact(width + padding(has_start_icon)),
            None => ButtonWidth::Auto,
        }
    }

    /// Whether the width changed since the last call.
    pub fn take_invalidated(&self) -> bool {
        self.invalidated.replace(false)
    }
}

impl fmt::Debug for AnimatedWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedWidth")
            .field("measured", &self.measured.get())
            .field("contents", &self.contents)
            .field("observing", &self.observation.is_some())
            .finish()
    }
}

fn store(measured: &Cell<MeasuredWidth>, invalidated: &Cell<bool>, width: Pixels) {
    let next = MeasuredWidth::new(width);
    if measured.get() != next {
        measured.set(next);
        invalidated.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::LayoutRegistry;

    #[test]
    fn test_content_uses_tabular_digits() {
        assert!(CONTENT_FONT_FEATURES.contains(&("tnum", 1)));
    }

    fn setup() -> (Rc<LayoutRegistry>, AnimatedWidth) {
        let registry = Rc::new(LayoutRegistry::new());
        let width = AnimatedWidth::new(registry.clone());
        (registry, width)
    }

    #[test]
    fn test_auto_before_measurement() {
        let (_registry, width) = setup();
        assert_eq!(width.measured(), MeasuredWidth::UNMEASURED);
        assert_eq!(width.display_width(false), ButtonWidth::Auto);
        assert_eq!(width.display_width(true), ButtonWidth::Auto);
        assert_eq!(ButtonWidth::Auto.to_string(), "auto");
    }

    #[test]
    fn test_measures_immediately_on_attach() {
        let (registry, mut width) = setup();
        let contents = ElementId::new(1);
        registry.report_width(contents, Pixels(64.0));

        width.attach_contents(Some(contents));

        assert_eq!(width.measured().to_css().as_deref(), Some("64px"));
        assert!(width.take_invalidated());
        assert!(!width.take_invalidated());
        assert_eq!(registry.observer_count(contents), 1);
    }

    #[test]
    fn test_display_width_tracks_last_observed_width() {
        let (registry, mut width) = setup();
        let contents = ElementId::new(1);
        width.attach_contents(Some(contents));
        assert_eq!(width.display_width(false), ButtonWidth::Auto);

        for content in [10.0, 55.5, 32.0, 32.0, 90.25] {
            registry.report_width(contents, Pixels(content));
            assert_eq!(
                width.display_width(false),
                ButtonWidth::Exact(Pixels(content + 28.0))
            );
            assert_eq!(
                width.display_width(true),
                ButtonWidth::Exact(Pixels(content + 50.0))
            );
        }
    }

    #[test]
    fn test_unchanged_width_does_not_invalidate() {
        let (registry, mut width) = setup();
        let contents = ElementId::new(1);
        width.attach_contents(Some(contents));

        registry.report_width(contents, Pixels(20.0));
        assert!(width.take_invalidated());
        registry.report_width(contents, Pixels(20.0));
        assert!(!width.take_invalidated());
    }

    #[test]
    fn test_reattaching_same_element_keeps_single_observer() {
        let (registry, mut width) = setup();
        let contents = ElementId::new(1);
        width.attach_contents(Some(contents));
        width.attach_contents(Some(contents));
        assert_eq!(registry.observer_count(contents), 1);
    }

    #[test]
    fn test_switching_wrapper_moves_observer() {
        let (registry, mut width) = setup();
        let first = ElementId::new(1);
        let second = ElementId::new(2);

        width.attach_contents(Some(first));
        registry.report_width(first, Pixels(40.0));
        width.attach_contents(Some(second));

        assert_eq!(registry.observer_count(first), 0);
        assert_eq!(registry.observer_count(second), 1);
        assert_eq!(width.contents(), Some(second));

        // The new wrapper has not been laid out yet, so the old width stays.
        assert_eq!(width.measured(), MeasuredWidth::new(Pixels(40.0)));

        registry.report_width(first, Pixels(400.0));
        assert_eq!(width.measured(), MeasuredWidth::new(Pixels(40.0)));

        registry.report_width(second, Pixels(48.0));
        assert_eq!(width.display_width(false), ButtonWidth::Exact(Pixels(76.0)));
    }

    #[test]
    fn test_detach_releases_observer() {
        let (registry, mut width) = setup();
        let contents = ElementId::new(1);
        width.attach_contents(Some(contents));
        width.attach_contents(None);

        assert_eq!(registry.observer_count(contents), 0);
        assert_eq!(width.contents(), None);
    }

    #[test]
    fn test_drop_deregisters_exactly_once() {
        let (registry, mut width) = setup();
        let contents = ElementId::new(1);
        let other = ElementId::new(2);

        // Another observer on the same element must survive the unmount.
        let _other_observer = registry.observe(contents, Rc::new(|_| {}));
        let _unrelated = registry.observe(other, Rc::new(|_| {}));

        width.attach_contents(Some(contents));
        assert_eq!(registry.observer_count(contents), 2);

        drop(width);
        assert_eq!(registry.observer_count(contents), 1);
        assert_eq!(registry.observer_count(other), 1);
    }

    #[test]
    fn test_never_attached_stays_auto() {
        let (registry, width) = setup();
        registry.report_width(ElementId::new(1), Pixels(100.0));
        assert_eq!(width.display_width(true), ButtonWidth::Auto);
        assert!(!width.take_invalidated());
    }
}
