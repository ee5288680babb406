//! Press, hold and release feedback for a button surrounded by four dots.
//!
//! A [`StageSequencer`](sequencer::StageSequencer) owns the five elements of
//! the button (four coloured dots and the home glyph) and plays a strictly
//! ordered sequence of property animations on them in response to presses.
//! The host pushes gestures and a millisecond clock in and paints whatever
//! [`ElementSet`](element::ElementSet) holds after each `advance`.

pub mod animation;
pub mod color;
pub mod config;
pub mod element;
pub mod error;
pub mod gesture;
pub mod offsets;
pub mod presentation;
pub mod roles;
pub mod sequencer;
pub mod stages;
pub mod timer;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::animation::{AnimationDescriptor, Property, PropertyValue, TimingFunction};
    pub use crate::color::{Color, DotColors, DotPalette};
    pub use crate::config::{DotsConfig, Timings};
    pub use crate::element::{Element, ElementId, ElementSet, ElementTransform};
    pub use crate::offsets::{OffsetName, OffsetResolver, OffsetTable};
    pub use crate::roles::{Orientation, Role, RoleMap};
    pub use crate::sequencer::StageSequencer;
    pub use crate::stages::Stage;
    pub use crate::{Error, Result};
}
