mod animatable;
mod group;
mod property;
mod timing;

pub use animatable::Animatable;
pub use group::AnimationGroup;
pub use property::{AnimationDescriptor, Property, PropertyAnimation, PropertyValue};
pub use timing::TimingFunction;
