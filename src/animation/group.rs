//! The live set of property animations for the current stage.
//!
//! A group is started atomically from a [`StagePlan`]. Exactly one member,
//! the anchor, carries the stage listener: the member with the greatest
//! `delay + duration`, first inserted on ties. Other members finish silently.

use crate::element::ElementSet;
use crate::stages::{Stage, StageAction, StageListener, StagePlan};

use super::PropertyAnimation;

#[derive(Debug)]
pub struct AnimationGroup {
    stage: Stage,
    animations: Vec<PropertyAnimation>,
    anchor: Option<usize>,
    listener: Option<StageListener>,
    started_ms: u64,
}

impl AnimationGroup {
    /// Start every descriptor of `plan` at `now_ms`
    pub fn start(plan: StagePlan, elements: &ElementSet, now_ms: u64) -> Self {
        let anchor = select_anchor(&plan);
        let animations: Vec<_> = plan
            .descriptors
            .into_iter()
            .map(|descriptor| PropertyAnimation::start(descriptor, elements, now_ms))
            .collect();

        log::trace!(
            "Starting {:?} group: {} animations, anchor {:?}",
            plan.stage,
            animations.len(),
            anchor
        );

        Self {
            stage: plan.stage,
            animations,
            anchor,
            listener: Some(plan.listener),
            started_ms: now_ms,
        }
    }

    /// Advance every member to `now_ms`.
    ///
    /// Returns the completion action once the anchor lands. The listener is
    /// detached as it fires, so the action is reported at most once.
    pub fn advance(&mut self, elements: &mut ElementSet, now_ms: u64) -> Option<StageAction> {
        let mut anchor_done = self.anchor.is_none();
        for (index, animation) in self.animations.iter_mut().enumerate() {
            let done = animation.advance(elements, now_ms);
            if Some(index) == self.anchor {
                anchor_done = done;
            }
        }

        if anchor_done {
            self.listener.take().map(|listener| listener.on_complete)
        } else {
            None
        }
    }

    /// Detach the listener and abort every member where it stands.
    pub fn cancel(self) {
        log::trace!("Cancelled {:?} group", self.stage);
    }

    /// Detach the listener and land every member on its end value.
    pub fn end(mut self, elements: &mut ElementSet) {
        for animation in &mut self.animations {
            animation.finish(elements);
        }
        log::trace!("Ended {:?} group", self.stage);
    }

    /// Abort from outside the sequencer (e.g. the surface went away) with the
    /// listener still attached, reporting its cancel action.
    pub fn interrupt(mut self) -> Option<StageAction> {
        log::trace!("Interrupted {:?} group", self.stage);
        self.listener.take().map(|listener| listener.on_cancel)
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn animations(&self) -> &[PropertyAnimation] {
        &self.animations
    }

    pub fn anchor(&self) -> Option<&PropertyAnimation> {
        self.anchor.map(|index| &self.animations[index])
    }

    /// When the anchor lands
    pub fn finishes_at(&self) -> u64 {
        self.started_ms
            + self
                .anchor()
                .map(|anchor| anchor.descriptor().total_ms())
                .unwrap_or(0)
    }
}

/// Longest `delay + duration`; the earliest such member wins a tie.
fn select_anchor(plan: &StagePlan) -> Option<usize> {
    let mut anchor: Option<(usize, u64)> = None;
    for (index, descriptor) in plan.descriptors.iter().enumerate() {
        let total = descriptor.total_ms();
        match anchor {
            Some((_, best)) if total <= best => {}
            _ => anchor = Some((index, total)),
        }
    }
    anchor.map(|(index, _)| index)
}
