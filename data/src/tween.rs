use std::time::{Duration, Instant};

/// Default transition length for geometry changes.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Values that can be blended between two states.
pub trait Interpolate: Clone {
    /// `t == 0.0` yields `self`, `t == 1.0` yields `other`.
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        if t >= 1.0 {
            *other
        } else {
            self + (other - self) * t
        }
    }
}

impl Interpolate for iced_core::Color {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        if t >= 1.0 {
            *other
        } else {
            crate::hue::mix(*self, *other, t)
        }
    }
}

/// Cubic ease-in-out over `[0, 1]`.
pub fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// A transition from one value to another over a fixed window of time.
#[derive(Debug, Clone)]
pub struct Tween<T> {
    from: T,
    to: T,
    start: Instant,
    duration: Duration,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn ends_at(&self) -> Instant {
        self.start + self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.ends_at()
    }

    pub fn value_at(&self, now: Instant) -> T {
        if self.is_finished(now) {
            return self.to.clone();
        }
        let t = ease_cubic_in_out(self.progress(now));
        self.from.interpolate(&self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_anchored_and_symmetric() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_cubic_in_out(0.25) + ease_cubic_in_out(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tween_samples_over_time() {
        let t0 = Instant::now();
        let tween = Tween::new(10.0_f32, 20.0, t0, Duration::from_millis(400));

        assert_eq!(tween.value_at(t0), 10.0);
        assert!((tween.value_at(t0 + Duration::from_millis(200)) - 15.0).abs() < 1e-4);
        assert_eq!(tween.value_at(t0 + Duration::from_millis(400)), 20.0);
        assert_eq!(tween.value_at(t0 + Duration::from_secs(9)), 20.0);
        assert!(tween.is_finished(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let t0 = Instant::now();
        let tween = Tween::new(1.0_f32, 3.0, t0, Duration::ZERO);
        assert_eq!(tween.value_at(t0), 3.0);
    }
}
