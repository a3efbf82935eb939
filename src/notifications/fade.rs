// SPDX-License-Identifier: MPL-2.0
//! Linear opacity tween for toast entrance and exit.
//!
//! A [`Fade`] does not own a timer. It is evaluated against the instant
//! passed to [`Fade::advance`], which the application feeds from its tick
//! subscription.

use super::message::VisualElement;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Entrance or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeDirection {
    In,
    Out,
}

/// What the animated opacity becomes once the fade is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillBehavior {
    /// Keep the end value.
    HoldEnd,
    /// Revert to the value the element had before the fade started.
    Stop,
}

/// Progress of a fade after an [`advance`](Fade::advance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeState {
    Running,
    Completed,
}

/// An opacity animation of one element.
#[derive(Debug, Clone)]
pub struct Fade {
    element: VisualElement,
    direction: FadeDirection,
    from: f32,
    to: f32,
    duration: Duration,
    started_at: Instant,
    fill: FillBehavior,
    /// Opacity before the fade touched the element.
    base: f32,
}

impl Fade {
    /// Starts a fade-in: the element is made transparent immediately, then
    /// goes 0 → 1 and keeps 1 when done.
    #[must_use]
    pub fn fade_in(element: VisualElement, duration: Duration, now: Instant) -> Self {
        let base = element.opacity();
        element.set_opacity(0.0);
        Self {
            element,
            direction: FadeDirection::In,
            from: 0.0,
            to: 1.0,
            duration,
            started_at: now,
            fill: FillBehavior::HoldEnd,
            base,
        }
    }

    /// Starts a fade-out: 1 → 0, reverting to the pre-fade opacity when done.
    #[must_use]
    pub fn fade_out(element: VisualElement, duration: Duration, now: Instant) -> Self {
        let base = element.opacity();
        element.set_opacity(1.0);
        Self {
            element,
            direction: FadeDirection::Out,
            from: 1.0,
            to: 0.0,
            duration,
            started_at: now,
            fill: FillBehavior::Stop,
            base,
        }
    }

    #[must_use]
    pub fn direction(&self) -> FadeDirection {
        self.direction
    }

    #[must_use]
    pub fn fill(&self) -> FillBehavior {
        self.fill
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn element(&self) -> &VisualElement {
        &self.element
    }

    /// Fraction of the fade elapsed at `now`, in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Opacity the element should have at `now` (linear interpolation).
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        self.from + (self.to - self.from) * t
    }

    /// Moves the element to its opacity at `now`. On the final step the fill
    /// behavior is applied instead of the interpolated value.
    pub fn advance(&self, now: Instant) -> FadeState {
        if self.progress(now) >= 1.0 {
            self.finish();
            FadeState::Completed
        } else {
            self.element.set_opacity(self.value_at(now));
            FadeState::Running
        }
    }

    /// Applies the fill behavior without waiting for the end.
    pub fn finish(&self) {
        match self.fill {
            FillBehavior::HoldEnd => self.element.set_opacity(self.to),
            FillBehavior::Stop => self.element.set_opacity(self.base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(200);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn fade_in_starts_transparent() {
        let element = VisualElement::new();
        let _fade = Fade::fade_in(element.clone(), DURATION, Instant::now());
        assert!(approx(element.opacity(), 0.0));
    }

    #[test]
    fn fade_in_is_linear() {
        let start = Instant::now();
        let element = VisualElement::new();
        let fade = Fade::fade_in(element.clone(), DURATION, start);

        assert_eq!(fade.advance(start + DURATION / 2), FadeState::Running);
        assert!(approx(element.opacity(), 0.5));
        assert_eq!(fade.advance(start + DURATION / 4), FadeState::Running);
        assert!(approx(element.opacity(), 0.25));
    }

    #[test]
    fn fade_in_holds_end_value() {
        let start = Instant::now();
        let element = VisualElement::new();
        let fade = Fade::fade_in(element.clone(), DURATION, start);

        assert_eq!(fade.advance(start + DURATION * 3), FadeState::Completed);
        assert!(approx(element.opacity(), 1.0));
        assert_eq!(fade.fill(), FillBehavior::HoldEnd);
    }

    #[test]
    fn fade_out_reverts_to_base_on_completion() {
        let start = Instant::now();
        let element = VisualElement::with_opacity(0.8);
        let fade = Fade::fade_out(element.clone(), DURATION, start);

        fade.advance(start + DURATION / 2);
        assert!(approx(element.opacity(), 0.5));

        assert_eq!(fade.advance(start + DURATION), FadeState::Completed);
        assert!(approx(element.opacity(), 0.8));
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let start = Instant::now();
        let element = VisualElement::new();
        let fade = Fade::fade_in(element.clone(), Duration::ZERO, start);
        assert_eq!(fade.advance(start), FadeState::Completed);
        assert!(approx(element.opacity(), 1.0));
    }

    #[test]
    fn instants_before_start_count_as_zero_progress() {
        let start = Instant::now() + Duration::from_secs(1);
        let fade = Fade::fade_out(VisualElement::new(), DURATION, start);
        assert!(approx(fade.progress(Instant::now()), 0.0));
    }
}
