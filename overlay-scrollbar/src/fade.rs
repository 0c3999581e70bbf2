use std::time::{Duration, Instant};

/// Easing curve for the opacity animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveFade {
    from: f32,
    to: f32,
    start: Instant,
}

/// Opacity of the bars, eased between hidden (0.0) and shown (1.0).
///
/// Retargeting mid-animation starts from the current interpolated value,
/// so a quick hide/show never jumps.
#[derive(Debug, Clone)]
pub struct FadeAnimation {
    duration: Duration,
    easing: Easing,
    target: f32,
    active: Option<ActiveFade>,
}

impl FadeAnimation {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            target: 0.0,
            active: None,
        }
    }

    /// Start fading towards shown or hidden.
    pub fn retarget(&mut self, visible: bool, now: Instant) {
        let to = if visible { 1.0 } else { 0.0 };
        if to == self.target {
            return;
        }

        let from = self.opacity(now);
        self.target = to;
        if self.duration.is_zero() {
            self.active = None;
            return;
        }
        self.active = Some(ActiveFade {
            from,
            to,
            start: now,
        });
    }

    /// Current opacity.
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(fade) = self.active else {
            return self.target;
        };

        let elapsed = now.saturating_duration_since(fade.start);
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        let eased = self.easing.apply(progress);
        (fade.from + (fade.to - fade.from) * eased).clamp(0.0, 1.0)
    }

    /// Returns true while the animation still has frames to draw.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.active
            .is_some_and(|fade| now.saturating_duration_since(fade.start) < self.duration)
    }

    /// Drop a finished animation.
    pub fn prune(&mut self, now: Instant) {
        if !self.is_animating(now) {
            self.active = None;
        }
    }
}
