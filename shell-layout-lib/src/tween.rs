use crate::length::Length;
use crate::transition::Transition;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    from: Length,
    started_at_ms: f64,
    transition: Transition,
}

/// Interpolates a length towards a target over a [`Transition`].
///
/// The controller owns no clock: every call takes the current time in
/// milliseconds from a monotonic source chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    target: Length,
    transition: Transition,
    segment: Option<Segment>,
}

impl Tween {
    /// A tween at rest on `value`. Nothing animates until the first retarget.
    #[must_use]
    pub fn settled(value: Length, transition: Transition) -> Self {
        Self {
            target: value,
            transition,
            segment: None,
        }
    }

    #[must_use]
    pub fn target(&self) -> Length {
        self.target
    }

    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Used by the next retarget, a running segment keeps its timing.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }

    /// Starts moving from wherever the value is at `now_ms` towards `target`.
    ///
    /// Returns `false` when `target` is already the destination, in which case
    /// the running segment (if any) continues untouched.
    pub fn retarget(&mut self, target: Length, now_ms: f64) -> bool {
        if target == self.target {
            return false;
        }
        let from = self.sample(now_ms);
        tracing::debug!("Padding tween retargeted from {from} to {target}");
        self.target = target;
        self.segment = if from == target || self.transition.total_ms() <= 0.0 {
            None
        } else {
            Some(Segment {
                from,
                started_at_ms: now_ms,
                transition: self.transition,
            })
        };
        true
    }

    /// Value at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> Length {
        match self.segment {
            None => self.target,
            Some(segment) => {
                let elapsed = (now_ms - segment.started_at_ms).max(0.0);
                Length::lerp(segment.from, self.target, segment.transition.progress(elapsed))
            }
        }
    }

    #[must_use]
    pub fn is_settled(&self, now_ms: f64) -> bool {
        match self.segment {
            None => true,
            Some(segment) => now_ms - segment.started_at_ms >= segment.transition.total_ms(),
        }
    }

    /// Drops a finished segment so later samples skip the interpolation.
    pub fn settle_if_done(&mut self, now_ms: f64) -> bool {
        if self.segment.is_some() && self.is_settled(now_ms) {
            tracing::debug!("Padding tween settled at {}", self.target);
            self.segment = None;
        }
        self.segment.is_none()
    }
}
