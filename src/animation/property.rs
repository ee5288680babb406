use crate::element::{ElementId, ElementSet};

use super::{Animatable, TimingFunction};

/// The four animatable channels of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    TranslationX,
    TranslationY,
    ScaleX,
    ScaleY,
}

impl Property {
    pub fn read(self, elements: &ElementSet, id: ElementId) -> f32 {
        let transform = &elements.get(id).transform;
        match self {
            Property::TranslationX => transform.translate.0,
            Property::TranslationY => transform.translate.1,
            Property::ScaleX => transform.scale.0,
            Property::ScaleY => transform.scale.1,
        }
    }

    pub fn write(self, elements: &mut ElementSet, id: ElementId, value: f32) {
        let transform = &mut elements.get_mut(id).transform;
        match self {
            Property::TranslationX => transform.translate.0 = value,
            Property::TranslationY => transform.translate.1 = value,
            Property::ScaleX => transform.scale.0 = value,
            Property::ScaleY => transform.scale.1 = value,
        }
    }
}

/// Where a property animation ends up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    /// Animate to this exact value
    To(f32),
    /// Animate by this amount from wherever the property is when the stage starts
    By(f32),
}

impl PropertyValue {
    pub fn resolve(self, current: f32) -> f32 {
        match self {
            PropertyValue::To(target) => target,
            PropertyValue::By(delta) => current + delta,
        }
    }
}

/// Declarative description of one property animation.
#[derive(Clone, Debug)]
pub struct AnimationDescriptor {
    pub target: ElementId,
    pub property: Property,
    pub value: PropertyValue,
    pub duration_ms: u64,
    pub delay_ms: u64,
    pub timing: TimingFunction,
}

impl AnimationDescriptor {
    pub fn new(
        target: ElementId,
        property: Property,
        value: PropertyValue,
        duration_ms: u64,
        timing: TimingFunction,
    ) -> Self {
        Self {
            target,
            property,
            value,
            duration_ms,
            delay_ms: 0,
            timing,
        }
    }

    /// Set the delay before the animation starts
    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Delay plus duration: when this animation lands, measured from group start
    pub fn total_ms(&self) -> u64 {
        self.delay_ms + self.duration_ms
    }
}

/// A started property animation, driven by an external clock.
#[derive(Debug)]
pub struct PropertyAnimation {
    descriptor: AnimationDescriptor,
    /// Value when the animation started
    from: f32,
    /// Resolved end value
    to: f32,
    start_ms: u64,
    finished: bool,
}

impl PropertyAnimation {
    /// Resolve the descriptor against the element's current value and start it
    pub fn start(descriptor: AnimationDescriptor, elements: &ElementSet, now_ms: u64) -> Self {
        let from = descriptor.property.read(elements, descriptor.target);
        let to = descriptor.value.resolve(from);
        Self {
            descriptor,
            from,
            to,
            start_ms: now_ms,
            finished: false,
        }
    }

    /// Advance to `now_ms`, writing the interpolated value. Returns true once
    /// the animation has landed.
    pub fn advance(&mut self, elements: &mut ElementSet, now_ms: u64) -> bool {
        if self.finished {
            return true;
        }

        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed < self.descriptor.delay_ms {
            // Still in delay period
            return false;
        }

        let active = elapsed - self.descriptor.delay_ms;
        if active >= self.descriptor.duration_ms {
            self.finish(elements);
            return true;
        }

        let t = active as f32 / self.descriptor.duration_ms as f32;
        let eased_t = self.descriptor.timing.evaluate(t);
        let value = f32::interpolate(self.from, self.to, eased_t);
        self.descriptor
            .property
            .write(elements, self.descriptor.target, value);
        false
    }

    /// Jump straight to the end value
    pub fn finish(&mut self, elements: &mut ElementSet) {
        self.descriptor
            .property
            .write(elements, self.descriptor.target, self.to);
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn end_value(&self) -> f32 {
        self.to
    }

    pub fn descriptor(&self) -> &AnimationDescriptor {
        &self.descriptor
    }
}
