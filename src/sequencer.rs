//! The press feedback state machine.
//!
//! A press expands the dots into a diamond. If the press is held, the diamond
//! chains into a line, the line collapses into the home glyph and the
//! sequence returns to idle. A short press is reversed by a retraction, but
//! never before the diamond has been visible for `min_diamond_ms`.
//!
//! All state lives on one thread and moves only when the host calls one of
//! the entry points below. `advance` fires due timers, then advances the live
//! animation group, chaining stages as anchors land.
//!
//! ```
//! use dotpress::prelude::*;
//!
//! let mut dots = StageSequencer::new(DotsConfig::default(), &OffsetTable::default()).unwrap();
//! dots.on_press_start(0);
//! assert_eq!(dots.stage(), Stage::PressExpand);
//!
//! // Held past the long-press timeout: the whole sequence plays out
//! dots.advance(450);
//! dots.on_press_end(450);
//! dots.advance(2000);
//! assert_eq!(dots.stage(), Stage::Idle);
//! ```

use crate::animation::AnimationGroup;
use crate::color::DotColors;
use crate::config::DotsConfig;
use crate::element::{Element, ElementId, ElementSet};
use crate::error::Result;
use crate::gesture::GestureTiming;
use crate::offsets::{OffsetResolver, Offsets};
use crate::presentation::{PresentationFlags, PresentationPolicy};
use crate::roles::{Orientation, RoleMap};
use crate::stages::{Stage, StageAction, StageBuilder};
use crate::timer::{Scheduler, TimerTask, TimerToken};

pub struct StageSequencer {
    config: DotsConfig,
    offsets: Offsets,
    orientation: Orientation,
    roles: RoleMap,
    elements: ElementSet,
    /// The one live group; `None` exactly when idle
    group: Option<AnimationGroup>,
    gesture: GestureTiming,
    scheduler: Scheduler,
    policy: PresentationPolicy,
}

impl StageSequencer {
    /// Validate the configuration and resolve every pixel offset up front.
    pub fn new(config: DotsConfig, resolver: &dyn OffsetResolver) -> Result<Self> {
        config.validate()?;
        let offsets = Offsets::resolve(resolver)?;
        let policy = PresentationPolicy::new(&config);
        let mut elements = ElementSet::new();
        policy.apply(&mut elements, false);

        Ok(Self {
            config,
            offsets,
            orientation: Orientation::default(),
            roles: RoleMap::default(),
            elements,
            group: None,
            gesture: GestureTiming::new(),
            scheduler: Scheduler::new(),
            policy,
        })
    }

    // ------------------------------------------------------------------------
    // Gesture entry points
    // ------------------------------------------------------------------------

    pub fn on_press_start(&mut self, now_ms: u64) {
        if !self.policy.accepts_gestures() {
            log::debug!("Ignoring press: gestures disabled ({:?})", self.policy.flags());
            return;
        }

        if self.gesture.cancel_deferred_retract(&mut self.scheduler) {
            // The pending retraction is pre-empted: land on its end state
            log::debug!("Press pre-empts pending retraction");
            self.cancel_group();
            self.elements.reset_all();
        } else {
            match self.stage() {
                Stage::Idle => {}
                Stage::Retract => self.end_group(),
                stage => {
                    log::debug!("Ignoring press during {:?}", stage);
                    return;
                }
            }
        }

        self.gesture.press(
            now_ms,
            self.config.long_press_timeout_ms,
            &mut self.scheduler,
        );

        if self.policy.animations_allowed() {
            self.start_stage(Stage::PressExpand, now_ms);
        } else {
            self.skip_to_starting_value();
        }
    }

    pub fn on_press_end(&mut self, now_ms: u64) {
        let release = self.gesture.release(&mut self.scheduler);

        if self.stage() == Stage::PressExpand {
            if release.was_pressed {
                let delay = self.gesture.schedule_deferred_retract(
                    now_ms,
                    self.config.min_diamond_ms,
                    &mut self.scheduler,
                );
                log::debug!("Release during expansion, retracting in {}ms", delay);
            }
            return;
        }

        if release.was_pressed && !release.long_clicked {
            self.retract(now_ms);
        } else {
            log::debug!(
                "Release ignored (pressed: {}, long press: {})",
                release.was_pressed,
                release.long_clicked
            );
        }
    }

    /// Fire due timers, then advance the live group to `now_ms`.
    pub fn advance(&mut self, now_ms: u64) {
        while let Some((token, task, deadline_ms)) = self.scheduler.pop_due(now_ms) {
            self.fire(token, task, deadline_ms);
        }

        loop {
            let Some(group) = self.group.as_mut() else {
                break;
            };
            let Some(action) = group.advance(&mut self.elements, now_ms) else {
                break;
            };
            let landed_ms = group.finishes_at().min(now_ms);
            self.group = None;
            self.apply(action, landed_ms);
        }
    }

    // ------------------------------------------------------------------------
    // Host configuration
    // ------------------------------------------------------------------------

    pub fn set_orientation(&mut self, is_landscape: bool) {
        let orientation = Orientation::from_landscape(is_landscape);
        if orientation == self.orientation {
            return;
        }
        log::info!("Orientation {:?} -> {:?}", self.orientation, orientation);
        if self.group.is_some() || self.gesture.has_deferred_retract() {
            self.skip_to_starting_value();
        }
        self.orientation = orientation;
        self.roles = RoleMap::for_orientation(orientation);
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if !self.policy.set(PresentationFlags::ENABLED, enabled) {
            return;
        }
        log::info!("Dots {}", if enabled { "enabled" } else { "disabled" });
        if !enabled {
            self.halt();
        }
        self.present();
    }

    pub fn set_edit_mode(&mut self, editing: bool) {
        if !self.policy.set(PresentationFlags::EDIT_MODE, editing) {
            return;
        }
        log::info!("Edit mode {}", if editing { "entered" } else { "left" });
        if editing {
            self.halt();
        }
    }

    /// Restrict the dots to the designated home button, and say whether
    /// this button is that one
    pub fn set_home_only(&mut self, home_only: bool, is_home_button: bool) {
        let home_only_changed = self.policy.set(PresentationFlags::HOME_ONLY, home_only);
        let is_home_changed = self.policy.set(PresentationFlags::IS_HOME, is_home_button);
        if home_only_changed || is_home_changed {
            log::info!(
                "Home-only dots: {} (home button: {})",
                home_only,
                is_home_button
            );
            self.present();
        }
    }

    pub fn set_dot_colors(&mut self, colors: DotColors) {
        log::info!("Dot colours: {:?}", colors);
        self.policy.set_colors(colors);
        self.present();
    }

    /// The surface went on or off screen. Going off screen aborts the live
    /// group through its cancel handling and resets the elements.
    pub fn set_window_visible(&mut self, visible: bool) {
        if !self.policy.set(PresentationFlags::WINDOW_VISIBLE, visible) {
            return;
        }
        if !visible {
            if let Some(group) = self.group.take() {
                let stage = group.stage();
                if let Some(action) = group.interrupt() {
                    log::debug!("{:?} interrupted", stage);
                    // Cancel actions never chain, so the timestamp is unused
                    self.apply(action, 0);
                }
            }
            self.gesture.reset(&mut self.scheduler);
        }
        self.skip_to_starting_value();
    }

    /// Show the dots now if the presentation policy allows it. The next
    /// stage change repaints them again.
    pub fn show_dots(&mut self) {
        self.policy.apply(&mut self.elements, true);
    }

    pub fn hide_dots(&mut self) {
        self.policy.apply(&mut self.elements, false);
    }

    /// Abort everything and put every element back at rest.
    pub fn skip_to_starting_value(&mut self) {
        self.cancel_group();
        self.gesture.cancel_deferred_retract(&mut self.scheduler);
        self.elements.reset_all();
        self.present();
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn stage(&self) -> Stage {
        self.group
            .as_ref()
            .map(|group| group.stage())
            .unwrap_or(Stage::Idle)
    }

    pub fn group(&self) -> Option<&AnimationGroup> {
        self.group.as_ref()
    }

    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> &Element {
        self.elements.get(id)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn roles(&self) -> &RoleMap {
        &self.roles
    }

    pub fn config(&self) -> &DotsConfig {
        &self.config
    }

    pub fn policy(&self) -> &PresentationPolicy {
        &self.policy
    }

    pub fn is_pressed(&self) -> bool {
        self.gesture.is_pressed()
    }

    pub fn is_long_clicked(&self) -> bool {
        self.gesture.is_long_clicked()
    }

    pub fn has_pending_retract(&self) -> bool {
        self.gesture.has_deferred_retract()
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    // ------------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------------

    fn fire(&mut self, token: TimerToken, task: TimerTask, at_ms: u64) {
        match task {
            TimerTask::LongPressCheck => {
                if self.gesture.long_press_elapsed(token) {
                    log::debug!("Long press detected at {}ms", at_ms);
                }
            }
            TimerTask::DeferredRetract => {
                if self.gesture.deferred_retract_elapsed(token) {
                    self.retract(at_ms);
                }
            }
        }
    }

    fn retract(&mut self, now_ms: u64) {
        self.cancel_group();
        if self.policy.animations_allowed() {
            self.start_stage(Stage::Retract, now_ms);
        } else {
            self.skip_to_starting_value();
        }
    }

    fn apply(&mut self, action: StageAction, at_ms: u64) {
        match action {
            StageAction::Chain(stage) => self.start_stage(stage, at_ms),
            StageAction::Idle => {
                log::debug!("Sequence idle");
                self.present();
            }
            StageAction::IdleAndHideDots => {
                log::debug!("Sequence collapsed, hiding dots");
                self.elements.reset_all();
                self.present();
            }
        }
    }

    fn start_stage(&mut self, stage: Stage, now_ms: u64) {
        // Never two groups alive at once
        self.cancel_group();

        let builder = StageBuilder {
            roles: &self.roles,
            orientation: self.orientation,
            offsets: &self.offsets,
            config: &self.config,
        };
        let Some(plan) = builder.build(stage) else {
            return;
        };
        log::debug!("Stage -> {:?} at {}ms", stage, now_ms);
        self.group = Some(AnimationGroup::start(plan, &self.elements, now_ms));
        self.policy.refresh_colors();
        self.present();
    }

    /// The dots are on screen while the press sequence plays. They are
    /// hidden at rest and while retracting.
    fn present(&mut self) {
        let on_screen = matches!(
            self.stage(),
            Stage::PressExpand | Stage::LineTransition | Stage::Collapse
        );
        self.policy.apply(&mut self.elements, on_screen);
    }

    fn cancel_group(&mut self) {
        if let Some(group) = self.group.take() {
            group.cancel();
        }
    }

    fn end_group(&mut self) {
        if let Some(group) = self.group.take() {
            group.end(&mut self.elements);
        }
    }

    /// Stop all feedback: disabled or editing
    fn halt(&mut self) {
        self.cancel_group();
        self.gesture.reset(&mut self.scheduler);
        self.elements.reset_all();
        self.present();
    }
}

impl std::fmt::Debug for StageSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageSequencer")
            .field("stage", &self.stage())
            .field("orientation", &self.orientation)
            .field("pressed", &self.gesture.is_pressed())
            .field("long_clicked", &self.gesture.is_long_clicked())
            .field("flags", &self.policy.flags())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offsets::OffsetTable;

    fn sequencer() -> StageSequencer {
        let _ = env_logger::builder().is_test(true).try_init();
        StageSequencer::new(DotsConfig::default(), &OffsetTable::default()).unwrap()
    }

    #[test]
    fn test_new_is_idle_and_at_rest() {
        let dots = sequencer();
        assert_eq!(dots.stage(), Stage::Idle);
        assert!(dots.elements().at_rest());
        assert!(!dots.elements().dots_visible());
        assert_eq!(dots.next_deadline(), None);
    }

    #[test]
    fn test_press_arms_long_press_check() {
        let mut dots = sequencer();
        dots.on_press_start(10);
        assert_eq!(dots.stage(), Stage::PressExpand);
        assert!(dots.is_pressed());
        assert_eq!(dots.next_deadline(), Some(410));

        dots.advance(410);
        assert!(dots.is_long_clicked());
    }

    #[test]
    fn test_press_ignored_while_disabled_or_editing() {
        let mut dots = sequencer();
        dots.set_edit_mode(true);
        dots.on_press_start(0);
        assert_eq!(dots.stage(), Stage::Idle);
        assert!(!dots.is_pressed());

        dots.set_edit_mode(false);
        dots.set_enabled(false);
        dots.on_press_start(0);
        assert_eq!(dots.stage(), Stage::Idle);
        assert!(!dots.elements().dots_visible());
    }

    #[test]
    fn test_press_ignored_during_line() {
        let mut dots = sequencer();
        dots.on_press_start(0);
        dots.advance(200);
        assert_eq!(dots.stage(), Stage::LineTransition);

        dots.on_press_start(250);
        assert_eq!(dots.stage(), Stage::LineTransition);
    }

    #[test]
    fn test_disable_mid_sequence_halts() {
        let mut dots = sequencer();
        dots.on_press_start(0);
        dots.advance(100);
        dots.set_enabled(false);

        assert_eq!(dots.stage(), Stage::Idle);
        assert!(dots.elements().at_rest());
        assert!(!dots.is_pressed());
        assert_eq!(dots.next_deadline(), None);
    }

    #[test]
    fn test_hidden_window_skips_animation() {
        let mut dots = sequencer();
        dots.set_window_visible(false);
        dots.on_press_start(0);
        assert_eq!(dots.stage(), Stage::Idle);
        assert!(dots.elements().at_rest());
        // The press itself is still tracked
        assert!(dots.is_pressed());
    }

    #[test]
    fn test_window_hidden_interrupts_without_chaining() {
        let mut dots = sequencer();
        dots.on_press_start(0);
        dots.advance(150);
        dots.set_window_visible(false);

        assert_eq!(dots.stage(), Stage::Idle);
        assert!(dots.elements().at_rest());

        dots.set_window_visible(true);
        dots.advance(1000);
        assert_eq!(dots.stage(), Stage::Idle);
    }
}
