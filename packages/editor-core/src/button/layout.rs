//! Layout observation.
//!
//! The host reports laid-out widths of elements to a [`ResizeSource`], which
//! notifies observers of that element whenever its width changes.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::Pixels;

/// Identifier of a rendered element, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Handle of a single registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Callback invoked with the new width of an observed element.
pub type ResizeListener = Rc<dyn Fn(Pixels)>;

/// A layout-observation facility keyed by rendered element.
pub trait ResizeSource {
    /// Last laid-out width of `element`, if it has been laid out.
    fn measure(&self, element: ElementId) -> Option<Pixels>;

    /// Start notifying `listener` about width changes of `element`.
    fn observe(&self, element: ElementId, listener: ResizeListener) -> ObserverId;

    /// Stop notifying the observer. Unknown observers are ignored.
    fn unobserve(&self, element: ElementId, observer: ObserverId);
}

/// Register `listener` on `source` and tie the registration to the returned guard.
pub fn observe_resize(
    source: Rc<dyn ResizeSource>,
    element: ElementId,
    listener: ResizeListener,
) -> Observation {
    let observer = source.observe(element, listener);
    Observation {
        source,
        element,
        observer,
    }
}

/// An active observation. Dropping it deregisters the observer.
#[must_use = "dropping an Observation deregisters it immediately"]
pub struct Observation {
    source: Rc<dyn ResizeSource>,
    element: ElementId,
    observer: ObserverId,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.source.unobserve(self.element, self.observer);
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation")
            .field("element", &self.element)
            .field("observer", &self.observer)
            .finish()
    }
}

// ============================================================================
// Registry
// ============================================================================

#[derive(Default)]
struct Entry {
    width: Option<Pixels>,
    observers: Vec<(ObserverId, ResizeListener)>,
}

impl Entry {
    fn is_empty(&self) -> bool {
        self.width.is_none() && self.observers.is_empty()
    }
}

/// In-process [`ResizeSource`] fed by the host after each layout pass.
#[derive(Default)]
pub struct LayoutRegistry {
    entries: RefCell<HashMap<ElementId, Entry>>,
    next_observer: Cell<u64>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the laid-out width of `element`.
    ///
    /// The width is kept even with no observers, so an element attached
    /// after its first layout is measured right away. Hosts must call
    /// [`forget`](Self::forget) once the element leaves the render tree.
    ///
    /// Observers are notified only when the width differs from the last
    /// report. Returns whether any observer was notified.
    pub fn report_width(&self, element: ElementId, width: Pixels) -> bool {
        let listeners: Vec<ResizeListener> = {
            let mut entries = self.entries.borrow_mut();
            let entry = entries.entry(element).or_default();
            if entry.width == Some(width) {
                return false;
            }
            entry.width = Some(width);
            entry
                .observers
                .iter()
                .map(|(_, listener)| listener.clone())
                .collect()
        };

        if listeners.is_empty() {
            return false;
        }

        tracing::trace!(
            "Element {} resized to {}, notifying {} observer(s)",
            element.raw(),
            width,
            listeners.len()
        );

        // Listeners may call back into the registry.
        for listener in &listeners {
            listener(width);
        }
        true
    }

    /// Drop the recorded width of an element that left the render tree.
    ///
    /// The entry is removed once it has neither a width nor observers.
    pub fn forget(&self, element: ElementId) {
        let mut entries = self.entries.borrow_mut();
        if let Some(entry) = entries.get_mut(&element) {
            entry.width = None;
            if entry.is_empty() {
                entries.remove(&element);
            }
        }
    }

    /// Number of observers currently registered on `element`.
    pub fn observer_count(&self, element: ElementId) -> usize {
        self.entries
            .borrow()
            .get(&element)
            .map_or(0, |entry| entry.observers.len())
    }
}

impl ResizeSource for LayoutRegistry {
    fn measure(&self, element: ElementId) -> Option<Pixels> {
        self.entries.borrow().get(&element).and_then(|entry| entry.width)
    }

    fn observe(&self, element: ElementId, listener: ResizeListener) -> ObserverId {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);

        self.entries
            .borrow_mut()
            .entry(element)
            .or_default()
            .observers
            .push((id, listener));
        id
    }

    fn unobserve(&self, element: ElementId, observer: ObserverId) {
        let mut entries = self.entries.borrow_mut();
        let Some(entry) = entries.get_mut(&element) else {
            return;
        };
        entry.observers.retain(|(id, _)| *id != observer);
        if entry.is_empty() {
            entries.remove(&element);
        }
    }
}

impl fmt::Debug for LayoutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutRegistry")
            .field("elements", &self.entries.borrow().len())
            .finish()
    }
}
