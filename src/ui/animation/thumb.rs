//! Thumb enlarge/shrink animation
//!
//! Drives the transition between the idle and held thumb visuals with an
//! eased progress value. Begin/end tracking retarget the progress and bump a
//! generation counter; a terminal phase is only committed through
//! [`ThumbAnimation::try_commit`] with the token captured at the trigger, so
//! a completion belonging to a superseded transition cannot overwrite the
//! state of a later one.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Default enlarge/shrink duration.
pub const DEFAULT_THUMB_ANIMATION: Duration = Duration::from_millis(300);

/// Where the thumb visual currently is in its enlarge/shrink cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Normal,
    Enlarging,
    Enlarged,
    Shrinking,
}

/// Eased enlarge/shrink state for a single slider thumb.
#[derive(Debug)]
pub struct ThumbAnimation {
    phase: Phase,
    /// 0.0 = idle thumb, 1.0 = fully enlarged.
    progress: Animated<f32>,
    generation: u64,
    duration: Duration,
}

/// Ease-out to mirror the snap-then-settle feel of the grab gesture.
fn thumb_easing(duration: Duration) -> Easing {
    Easing::EASE_OUT.with_duration(duration)
}

impl Default for ThumbAnimation {
    fn default() -> Self {
        Self::new(DEFAULT_THUMB_ANIMATION)
    }
}

impl ThumbAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            phase: Phase::Normal,
            progress: Animated::transition(0.0, thumb_easing(duration)),
            generation: 0,
            duration,
        }
    }

    /// Change the transition duration; takes effect on the next trigger.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Retarget the progress from its current value so an interrupted
    /// transition continues smoothly instead of jumping.
    fn retarget(&mut self, target: f32) {
        let current = *self.progress.value();
        self.progress = Animated::transition(current, thumb_easing(self.duration));
        self.progress.update(target.into());
        self.generation += 1;
    }

    /// Tracking began: start enlarging. Returns the generation token the
    /// caller hands back to [`Self::try_commit`] once the animation settles.
    pub fn begin_tracking(&mut self) -> u64 {
        self.phase = Phase::Enlarging;
        self.retarget(1.0);
        self.generation
    }

    /// Tracking ended or was cancelled: start shrinking.
    pub fn end_tracking(&mut self) -> u64 {
        self.phase = Phase::Shrinking;
        self.retarget(0.0);
        self.generation
    }

    /// Advance the eased value. Call once per redraw frame.
    pub fn tick(&mut self, now: Instant) {
        self.progress.tick(now);
    }

    /// Commit the terminal phase for the transition identified by `token`.
    ///
    /// Ignored when the token is stale (another begin/end fired since) or
    /// the progress has not settled at its target yet.
    pub fn try_commit(&mut self, token: u64) {
        if token != self.generation || self.progress.value() != self.progress.target() {
            return;
        }

        match self.phase {
            Phase::Enlarging => self.phase = Phase::Enlarged,
            Phase::Shrinking => self.phase = Phase::Normal,
            Phase::Normal | Phase::Enlarged => {}
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Eased enlarge progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (*self.progress.value()).clamp(0.0, 1.0)
    }

    /// Highlighted tints apply from the moment tracking begins until the
    /// shrink is triggered; only geometry eases.
    pub fn is_highlighted(&self) -> bool {
        matches!(self.phase, Phase::Enlarging | Phase::Enlarged)
    }

    /// Whether the halo surface is part of the thumb container. It detaches
    /// only once the shrink has fully settled.
    pub fn halo_attached(&self) -> bool {
        self.phase != Phase::Normal || self.progress() > 0.0
    }

    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick far enough past the duration that the transition settles.
    fn settle(anim: &mut ThumbAnimation) {
        let now = Instant::now();
        anim.tick(now);
        anim.tick(now + Duration::from_secs(2));
    }

    #[test]
    fn begin_then_commit_reaches_enlarged() {
        let mut anim = ThumbAnimation::default();
        assert_eq!(anim.phase(), Phase::Normal);
        assert!(!anim.halo_attached());

        let token = anim.begin_tracking();
        assert_eq!(anim.phase(), Phase::Enlarging);
        assert!(anim.is_highlighted());
        assert!(anim.halo_attached());

        settle(&mut anim);
        anim.try_commit(token);
        assert_eq!(anim.phase(), Phase::Enlarged);
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn end_then_commit_returns_to_normal() {
        let mut anim = ThumbAnimation::default();
        let token = anim.begin_tracking();
        settle(&mut anim);
        anim.try_commit(token);

        let token = anim.end_tracking();
        assert_eq!(anim.phase(), Phase::Shrinking);
        assert!(!anim.is_highlighted());
        assert!(anim.halo_attached());

        settle(&mut anim);
        anim.try_commit(token);
        assert_eq!(anim.phase(), Phase::Normal);
        assert!(!anim.halo_attached());
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn stale_token_does_not_commit() {
        let mut anim = ThumbAnimation::default();

        let stale = anim.begin_tracking();
        let current = anim.end_tracking();

        settle(&mut anim);

        // The enlarge completion fires late; it must not mark Enlarged.
        anim.try_commit(stale);
        assert_eq!(anim.phase(), Phase::Shrinking);

        anim.try_commit(current);
        assert_eq!(anim.phase(), Phase::Normal);
    }

    #[test]
    fn rapid_toggling_follows_last_event() {
        let mut anim = ThumbAnimation::default();

        // begin -> end -> begin -> end without awaiting any completion
        let first = anim.begin_tracking();
        anim.end_tracking();
        anim.begin_tracking();
        let last = anim.end_tracking();

        assert!(!anim.is_highlighted());

        settle(&mut anim);
        anim.try_commit(first);
        anim.try_commit(last);

        assert_eq!(anim.phase(), Phase::Normal);
        assert!(!anim.halo_attached());
    }

    #[test]
    fn unsettled_commit_is_ignored() {
        let mut anim = ThumbAnimation::default();
        let token = anim.begin_tracking();

        // Progress has not reached its target yet.
        anim.try_commit(token);
        assert_eq!(anim.phase(), Phase::Enlarging);
    }

    #[test]
    fn progress_stays_in_unit_interval() {
        let mut anim = ThumbAnimation::default();
        anim.begin_tracking();

        let now = Instant::now();
        for ms in (0..600).step_by(16) {
            anim.tick(now + Duration::from_millis(ms));
            let p = anim.progress();
            assert!((0.0..=1.0).contains(&p));
        }
    }
}
