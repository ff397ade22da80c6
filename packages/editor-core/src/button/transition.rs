//! Button transitions and width interpolation.

use std::fmt;
use std::time::{Duration, Instant};

use super::Pixels;

/// Durations of the button's transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub short: Duration,
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            short: Duration::from_millis(250),
        }
    }
}

/// Timing function, expressed as a cubic Bézier curve from (0, 0) to (1, 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Easing {
    /// Standard ease-in-out curve.
    pub const STANDARD: Easing = Easing {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    pub fn css(self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    /// Map linear progress in `0.0..=1.0` to eased progress.
    pub fn apply(self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        let t = solve_curve_x(x, self.x1, self.x2);
        bezier(t, self.y1, self.y2)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::STANDARD
    }
}

fn bezier(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(t: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate is `x`.
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut t = x;
    for _ in 0..8 {
        let error = bezier(t, x1, x2) - x;
        if error.abs() < EPSILON {
            return t;
        }
        let slope = bezier_slope(t, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    // Newton did not converge; x(t) is monotonic so bisection always does.
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..32 {
        let value = bezier(t, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) / 2.0;
    }
    t
}

// ============================================================================
// Transition lists
// ============================================================================

/// Properties the button animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionProperty {
    BackgroundColor,
    BoxShadow,
    BorderColor,
    Color,
    Width,
}

impl TransitionProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            TransitionProperty::BackgroundColor => "background-color",
            TransitionProperty::BoxShadow => "box-shadow",
            TransitionProperty::BorderColor => "border-color",
            TransitionProperty::Color => "color",
            TransitionProperty::Width => "width",
        }
    }
}

const COLOR_PROPERTIES: [TransitionProperty; 4] = [
    TransitionProperty::BackgroundColor,
    TransitionProperty::BoxShadow,
    TransitionProperty::BorderColor,
    TransitionProperty::Color,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: TransitionProperty,
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl Transition {
    pub fn new(property: TransitionProperty, duration: Duration) -> Self {
        Self {
            property,
            duration,
            easing: Easing::default(),
            delay: Duration::ZERO,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}ms {} {}ms",
            self.property.css_name(),
            self.duration.as_millis(),
            self.easing.css(),
            self.delay.as_millis()
        )
    }
}

/// The set of transitions active on a button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionList(Vec<Transition>);

impl TransitionList {
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.0.iter()
    }

    pub fn get(&self, property: TransitionProperty) -> Option<&Transition> {
        self.0.iter().find(|transition| transition.property == property)
    }

    pub fn contains(&self, property: TransitionProperty) -> bool {
        self.get(property).is_some()
    }

    /// Shorthand `transition` value.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(Transition::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Transitions of the animated button.
///
/// Colors always animate. Width animates too unless the user asked for
/// reduced motion.
pub fn button_transitions(durations: &Durations, reduced_motion: bool) -> TransitionList {
    let mut transitions: Vec<Transition> = COLOR_PROPERTIES
        .iter()
        .map(|&property| Transition::new(property, durations.short))
        .collect();

    if !reduced_motion {
        transitions.push(Transition::new(TransitionProperty::Width, durations.short));
    }

    TransitionList(transitions)
}

// ============================================================================
// Width tween
// ============================================================================

/// Interpolates the displayed width toward its latest target.
#[derive(Debug, Clone)]
pub struct WidthTween {
    transition: Option<Transition>,
    from: Pixels,
    to: Option<Pixels>,
    started: Option<Instant>,
}

impl WidthTween {
    /// `transition` is the width transition, or `None` to jump instantly.
    pub fn new(transition: Option<Transition>) -> Self {
        Self {
            transition,
            from: Pixels::default(),
            to: None,
            started: None,
        }
    }

    pub fn from_list(transitions: &TransitionList) -> Self {
        Self::new(transitions.get(TransitionProperty::Width).copied())
    }

    /// Swap the width transition, e.g. when reduced motion is toggled.
    pub fn set_transition(&mut self, transition: Option<Transition>, now: Instant) {
        if self.transition == transition {
            return;
        }
        if let Some(current) = self.sample(now) {
            self.settle(current);
        }
        self.transition = transition;
    }

    /// Head toward `target`, starting from wherever the tween is right now.
    ///
    /// The first target jumps, since the button had no explicit width yet.
    pub fn retarget(&mut self, target: Pixels, now: Instant) {
        if self.to == Some(target) {
            return;
        }

        let Some(current) = self.sample(now) else {
            self.settle(target);
            return;
        };

        match self.transition {
            Some(transition) if !transition.duration.is_zero() => {
                self.from = current;
                self.to = Some(target);
                self.started = Some(now);
            }
            _ => self.settle(target),
        }
    }

    /// Forget the target; the button goes back to its natural width.
    pub fn reset(&mut self) {
        self.from = Pixels::default();
        self.to = None;
        self.started = None;
    }

    pub fn target(&self) -> Option<Pixels> {
        self.to
    }

    /// Width to paint at `now`, or `None` while there is no target.
    pub fn sample(&self, now: Instant) -> Option<Pixels> {
        let to = self.to?;
        let progress = self.progress(now);
        if progress >= 1.0 {
            return Some(to);
        }

        let easing = self.transition.map(|t| t.easing).unwrap_or_default();
        let eased = easing.apply(progress);
        Some(Pixels(self.from.0 + (to.0 - self.from.0) * eased))
    }

    /// Whether more frames are needed to reach the target.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.to.is_some() && self.progress(now) < 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        let (Some(started), Some(transition)) = (self.started, self.transition) else {
            return 1.0;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed < transition.delay {
            return 0.0;
        }
        let running = elapsed - transition.delay;
        if running >= transition.duration {
            return 1.0;
        }
        running.as_secs_f32() / transition.duration.as_secs_f32()
    }

    fn settle(&mut self, width: Pixels) {
        self.from = width;
        self.to = Some(width);
        self.started = None;
    }
}
