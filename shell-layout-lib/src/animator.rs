//! Drives the main content padding across layout changes: one tween plus a
//! generation number telling frame loops whether they are still current.

use crate::length::Length;
use crate::transition::Transition;
use crate::tween::Tween;

/// Outcome of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// A newer change took over, the loop asking should stop without writing.
    Stale,
    Running(Length),
    Settled(Length),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaddingAnimator {
    tween: Tween,
    generation: u64,
}

impl PaddingAnimator {
    /// At rest on `target`: a freshly mounted region shows its padding
    /// without animating to it.
    #[must_use]
    pub fn mount(target: Length, transition: Transition) -> Self {
        Self {
            tween: Tween::settled(target, transition),
            generation: 0,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn target(&self) -> Length {
        self.tween.target()
    }

    #[must_use]
    pub fn value(&self, now_ms: f64) -> Length {
        self.tween.sample(now_ms)
    }

    /// Applies the latest layout. Returns the generation of the frame loop
    /// to start, or `None` when the target did not move.
    pub fn update(&mut self, target: Length, transition: Transition, now_ms: f64) -> Option<u64> {
        self.tween.set_transition(transition);
        if !self.tween.retarget(target, now_ms) {
            return None;
        }
        self.generation += 1;
        Some(self.generation)
    }

    pub fn frame(&mut self, generation: u64, now_ms: f64) -> Frame {
        if generation != self.generation {
            return Frame::Stale;
        }
        let value = self.tween.sample(now_ms);
        if self.tween.settle_if_done(now_ms) {
            Frame::Settled(value)
        } else {
            Frame::Running(value)
        }
    }
}
