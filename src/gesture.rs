//! Press timing: long-press detection and the minimum visible expansion.

use crate::timer::{Scheduler, TimerTask, TimerToken};

/// What was known about the press at the moment it was released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Release {
    pub was_pressed: bool,
    pub long_clicked: bool,
}

#[derive(Debug, Default)]
pub struct GestureTiming {
    press_start_ms: u64,
    pressed: bool,
    long_clicked: bool,
    long_press_check: Option<TimerToken>,
    deferred_retract: Option<TimerToken>,
}

impl GestureTiming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a new press and arm the long-press check
    pub fn press(&mut self, now_ms: u64, timeout_ms: u64, scheduler: &mut Scheduler) {
        self.cancel_long_press_check(scheduler);
        self.press_start_ms = now_ms;
        self.pressed = true;
        self.long_clicked = false;
        self.long_press_check =
            Some(scheduler.schedule(TimerTask::LongPressCheck, now_ms + timeout_ms));
    }

    /// End the press. Disarms the long-press check and clears both flags.
    pub fn release(&mut self, scheduler: &mut Scheduler) -> Release {
        self.cancel_long_press_check(scheduler);
        let release = Release {
            was_pressed: self.pressed,
            long_clicked: self.long_clicked,
        };
        self.pressed = false;
        self.long_clicked = false;
        release
    }

    /// The long-press check fired. Returns true if the press became a long press.
    pub fn long_press_elapsed(&mut self, token: TimerToken) -> bool {
        if self.long_press_check != Some(token) {
            return false;
        }
        self.long_press_check = None;
        if self.pressed && !self.long_clicked {
            self.long_clicked = true;
            return true;
        }
        false
    }

    /// Delay before a release may reverse the expansion, so it stays visible
    /// for at least `min_diamond_ms` after the press started.
    pub fn remaining_diamond_ms(&self, now_ms: u64, min_diamond_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.press_start_ms);
        min_diamond_ms.saturating_sub(elapsed)
    }

    /// Replace any pending retraction with one after the remaining floor.
    /// Returns the delay used.
    pub fn schedule_deferred_retract(
        &mut self,
        now_ms: u64,
        min_diamond_ms: u64,
        scheduler: &mut Scheduler,
    ) -> u64 {
        self.cancel_deferred_retract(scheduler);
        let delay = self.remaining_diamond_ms(now_ms, min_diamond_ms);
        self.deferred_retract = Some(scheduler.schedule(TimerTask::DeferredRetract, now_ms + delay));
        delay
    }

    /// Returns true if a retraction was pending.
    pub fn cancel_deferred_retract(&mut self, scheduler: &mut Scheduler) -> bool {
        match self.deferred_retract.take() {
            Some(token) => scheduler.cancel(token),
            None => false,
        }
    }

    /// The deferred retraction fired. Returns false for a stale token.
    pub fn deferred_retract_elapsed(&mut self, token: TimerToken) -> bool {
        if self.deferred_retract != Some(token) {
            return false;
        }
        self.deferred_retract = None;
        self.long_clicked = false;
        true
    }

    /// Forget the press entirely and revoke both timers
    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        self.cancel_long_press_check(scheduler);
        self.cancel_deferred_retract(scheduler);
        self.pressed = false;
        self.long_clicked = false;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_long_clicked(&self) -> bool {
        self.long_clicked
    }

    pub fn press_start_ms(&self) -> u64 {
        self.press_start_ms
    }

    pub fn has_deferred_retract(&self) -> bool {
        self.deferred_retract.is_some()
    }

    fn cancel_long_press_check(&mut self, scheduler: &mut Scheduler) {
        if let Some(token) = self.long_press_check.take() {
            scheduler.cancel(token);
        }
    }
}
