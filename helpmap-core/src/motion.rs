//! Scroll, hover and reveal animation maths.

/// Class added to reveal-on-scroll elements once visible.
pub const IN_VIEW_CLASS: &str = "in-view";
/// Default gap between staggered animations, in milliseconds.
pub const DEFAULT_STAGGER_MS: u32 = 100;
/// Click animations are removed after this long.
pub const CLICK_ANIMATION_MS: u32 = 1000;
/// Default smooth-scroll duration in milliseconds.
pub const SMOOTH_SCROLL_MS: f64 = 500.0;
/// Default parallax speed factor.
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

/// Entrance animations applied when an element scrolls into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    FadeIn,
    SlideInLeft,
    SlideInRight,
    SlideInTop,
    SlideInBottom,
    ScaleIn,
    FlipInX,
}

impl AnimationKind {
    pub const ALL: [Self; 7] = [
        Self::FadeIn,
        Self::SlideInLeft,
        Self::SlideInRight,
        Self::SlideInTop,
        Self::SlideInBottom,
        Self::ScaleIn,
        Self::FlipInX,
    ];

    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::SlideInLeft => "slide-in-left",
            Self::SlideInRight => "slide-in-right",
            Self::SlideInTop => "slide-in-top",
            Self::SlideInBottom => "slide-in-bottom",
            Self::ScaleIn => "scale-in",
            Self::FlipInX => "flip-in-x",
        }
    }

    #[must_use]
    pub fn from_class(class: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class() == class)
    }
}

/// Intersection observer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    /// Page sections fade in once 10% above the bottom edge.
    pub const REVEAL: Self = Self {
        threshold: 0.0,
        root_margin: "0px 0px -10% 0px",
    };

    /// Named entrance animations.
    pub const ANIMATION: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::ANIMATION
    }
}

/// Delay before the `index`-th element of a group starts animating.
#[must_use]
pub const fn stagger_delay_ms(index: u32, step_ms: u32) -> u32 {
    index.saturating_mul(step_ms)
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Scroll position `elapsed_ms` into a smooth scroll from `start` to `target`.
///
/// Returns the position and whether the animation has finished.
#[must_use]
pub fn smooth_scroll_position(
    start: f64,
    target: f64,
    elapsed_ms: f64,
    duration_ms: f64,
) -> (f64, bool) {
    if duration_ms <= 0.0 {
        return (target, true);
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    let position = start + (target - start) * ease_in_out_cubic(progress);
    (position, elapsed_ms >= duration_ms)
}

/// Vertical parallax shift for an element, once the page has scrolled past
/// the point where the element enters the viewport.
#[must_use]
pub fn parallax_offset(
    scroll_y: f64,
    element_top: f64,
    viewport_height: f64,
    speed: f64,
) -> Option<f64> {
    let enters_at = element_top - viewport_height;
    (scroll_y > enters_at).then(|| (scroll_y - enters_at) * speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert!(ease_in_out_cubic(0.0).abs() < f64::EPSILON);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
        assert!((ease_in_out_cubic(0.25) - 0.0625).abs() < 1e-12);
    }

    #[test]
    fn smooth_scroll_reaches_target() {
        let (mid, done) = smooth_scroll_position(1000.0, 0.0, 250.0, SMOOTH_SCROLL_MS);
        assert!((mid - 500.0).abs() < 1e-9);
        assert!(!done);
        let (end, done) = smooth_scroll_position(1000.0, 0.0, 900.0, SMOOTH_SCROLL_MS);
        assert!(end.abs() < 1e-9);
        assert!(done);
    }

    #[test]
    fn parallax_only_after_entry_point() {
        assert_eq!(parallax_offset(100.0, 900.0, 800.0, 0.5), None);
        assert_eq!(parallax_offset(300.0, 900.0, 800.0, 0.5), Some(100.0));
    }

    #[test]
    fn animation_classes_round_trip_names() {
        for kind in AnimationKind::ALL {
            assert_eq!(AnimationKind::from_class(kind.class()), Some(kind));
        }
        assert_eq!(AnimationKind::from_class("wobble"), None);
    }

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger_delay_ms(0, DEFAULT_STAGGER_MS), 0);
        assert_eq!(stagger_delay_ms(4, DEFAULT_STAGGER_MS), 400);
    }
}
