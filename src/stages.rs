//! Declarative construction of every stage of the press sequence.
//!
//! Builders are pure: they read the role assignment, orientation, resolved
//! offsets and timings, and return a [`StagePlan`]. Moves are expressed as
//! [`PropertyValue::By`] so they apply to wherever each element is when the
//! stage starts, which keeps a stage correct when it is entered mid-flight.

use crate::animation::{AnimationDescriptor, Property, PropertyValue, TimingFunction};
use crate::config::DotsConfig;
use crate::element::ElementId;
use crate::offsets::Offsets;
use crate::roles::{Orientation, Role, RoleMap};

/// One phase of the press feedback sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Nothing running
    Idle,
    /// Dots push outward into a diamond and everything shrinks
    PressExpand,
    /// Dots slide into a line while the home glyph disappears
    LineTransition,
    /// The line folds back and the home glyph reappears
    Collapse,
    /// Everything returns to rest
    Retract,
}

/// What the sequencer does when a group's anchor reports back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageAction {
    Chain(Stage),
    Idle,
    IdleAndHideDots,
}

/// Completion and cancellation handling for a stage, carried as data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageListener {
    pub on_complete: StageAction,
    pub on_cancel: StageAction,
}

/// Everything needed to start a stage.
#[derive(Clone, Debug)]
pub struct StagePlan {
    pub stage: Stage,
    pub descriptors: Vec<AnimationDescriptor>,
    pub listener: StageListener,
}

impl StagePlan {
    fn new(stage: Stage, listener: StageListener) -> Self {
        Self {
            stage,
            descriptors: Vec::new(),
            listener,
        }
    }

    fn push(&mut self, descriptor: AnimationDescriptor) {
        self.descriptors.push(descriptor);
    }

    fn scale_to(
        &mut self,
        target: ElementId,
        scale: f32,
        duration_ms: u64,
        timing: TimingFunction,
    ) {
        for property in [Property::ScaleX, Property::ScaleY] {
            self.push(AnimationDescriptor::new(
                target,
                property,
                PropertyValue::To(scale),
                duration_ms,
                timing,
            ));
        }
    }
}

/// Builds stage plans for the current layout.
#[derive(Clone, Copy, Debug)]
pub struct StageBuilder<'a> {
    pub roles: &'a RoleMap,
    pub orientation: Orientation,
    pub offsets: &'a Offsets,
    pub config: &'a DotsConfig,
}

impl StageBuilder<'_> {
    /// Plan for `stage`, or `None` for [`Stage::Idle`]
    pub fn build(&self, stage: Stage) -> Option<StagePlan> {
        match stage {
            Stage::Idle => None,
            Stage::PressExpand => Some(self.diamond()),
            Stage::LineTransition => Some(self.line()),
            Stage::Collapse => Some(self.collapse()),
            Stage::Retract => Some(self.retract()),
        }
    }

    /// Each dot moves outward along its role's axis and shrinks.
    pub fn diamond(&self) -> StagePlan {
        let duration = self.config.timings.diamond_ms;
        let mut plan = StagePlan::new(
            Stage::PressExpand,
            StageListener {
                on_complete: StageAction::Chain(Stage::LineTransition),
                on_cancel: StageAction::Idle,
            },
        );

        for role in Role::ALL {
            let dot = self.roles.element(role);
            let property = if role.is_vertical() {
                Property::TranslationY
            } else {
                Property::TranslationX
            };
            plan.push(AnimationDescriptor::new(
                dot,
                property,
                PropertyValue::By(role.outward_sign() * self.offsets.diamond),
                duration,
                TimingFunction::DIAMOND,
            ));
            plan.scale_to(
                dot,
                self.config.dot_diamond_scale,
                duration,
                TimingFunction::FAST_OUT_SLOW_IN,
            );
        }
        plan.scale_to(
            ElementId::Home,
            self.config.home_diamond_scale,
            duration,
            TimingFunction::FAST_OUT_SLOW_IN,
        );
        plan
    }

    /// Dots slide into a line across the button; the home glyph vanishes.
    pub fn line(&self) -> StagePlan {
        let timings = &self.config.timings;
        let offsets = self.offsets;
        let (along, cross, sign) = self.line_axes();
        let mut plan = StagePlan::new(
            Stage::LineTransition,
            StageListener {
                on_complete: StageAction::Chain(Stage::Collapse),
                on_cancel: StageAction::Idle,
            },
        );

        let along_moves = [
            (ElementId::Red, -sign * offsets.line_spread_red_yellow),
            (ElementId::Blue, -sign * offsets.line_spread_blue_green),
            (ElementId::Yellow, sign * offsets.line_spread_red_yellow),
            (ElementId::Green, sign * offsets.line_spread_blue_green),
        ];
        // Red and yellow sit off the line after the diamond and come back across it
        let cross_moves = [
            (ElementId::Red, offsets.line_cross),
            (ElementId::Yellow, -offsets.line_cross),
        ];

        for (dot, delta) in along_moves {
            plan.push(AnimationDescriptor::new(
                dot,
                along,
                PropertyValue::By(delta),
                timings.line_along_ms,
                TimingFunction::FAST_OUT_SLOW_IN,
            ));
        }
        for (dot, delta) in cross_moves {
            plan.push(AnimationDescriptor::new(
                dot,
                cross,
                PropertyValue::By(delta),
                timings.line_cross_ms,
                TimingFunction::FAST_OUT_SLOW_IN,
            ));
        }
        plan.scale_to(
            ElementId::Home,
            0.0,
            timings.home_disappear_ms,
            TimingFunction::HOME_DISAPPEAR,
        );
        plan
    }

    /// The line folds into the middle, dots regain full size and the home
    /// glyph reappears once they have settled.
    pub fn collapse(&self) -> StagePlan {
        let timings = &self.config.timings;
        let offsets = self.offsets;
        let (along, _, sign) = self.line_axes();
        let mut plan = StagePlan::new(
            Stage::Collapse,
            StageListener {
                on_complete: StageAction::IdleAndHideDots,
                on_cancel: StageAction::Idle,
            },
        );

        let moves = [
            (
                ElementId::Red,
                sign * offsets.collapse_red_yellow,
                timings.collapse_red_yellow_ms,
            ),
            (
                ElementId::Blue,
                sign * offsets.collapse_blue_green,
                timings.collapse_blue_green_ms,
            ),
            (
                ElementId::Yellow,
                -sign * offsets.collapse_red_yellow,
                timings.collapse_red_yellow_ms,
            ),
            (
                ElementId::Green,
                -sign * offsets.collapse_blue_green,
                timings.collapse_blue_green_ms,
            ),
        ];

        for (dot, delta, duration) in moves {
            plan.push(AnimationDescriptor::new(
                dot,
                along,
                PropertyValue::By(delta),
                duration,
                TimingFunction::FAST_OUT_LINEAR_IN,
            ));
        }
        for dot in ElementId::DOTS {
            plan.scale_to(dot, 1.0, timings.dots_resize_ms, TimingFunction::RETRACT);
        }
        for property in [Property::ScaleX, Property::ScaleY] {
            plan.push(
                AnimationDescriptor::new(
                    ElementId::Home,
                    property,
                    PropertyValue::To(1.0),
                    timings.home_reappear_ms,
                    TimingFunction::FAST_OUT_SLOW_IN,
                )
                .delay(timings.home_reappear_delay_ms),
            );
        }
        plan
    }

    /// Undo every accumulated move and scale.
    pub fn retract(&self) -> StagePlan {
        let duration = self.config.timings.retract_ms;
        let mut plan = StagePlan::new(
            Stage::Retract,
            StageListener {
                on_complete: StageAction::Idle,
                on_cancel: StageAction::Idle,
            },
        );

        for dot in ElementId::DOTS {
            for property in [Property::TranslationX, Property::TranslationY] {
                plan.push(AnimationDescriptor::new(
                    dot,
                    property,
                    PropertyValue::To(0.0),
                    duration,
                    TimingFunction::RETRACT,
                ));
            }
            plan.scale_to(dot, 1.0, duration, TimingFunction::RETRACT);
        }
        plan.scale_to(ElementId::Home, 1.0, duration, TimingFunction::RETRACT);
        plan
    }

    /// (along-line property, cross-line property, along sign). The line is
    /// horizontal in portrait and vertical in landscape; the along direction
    /// flips with it.
    fn line_axes(&self) -> (Property, Property, f32) {
        match self.orientation {
            Orientation::Portrait => (Property::TranslationX, Property::TranslationY, 1.0),
            Orientation::Landscape => (Property::TranslationY, Property::TranslationX, -1.0),
        }
    }
}
