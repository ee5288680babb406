//! The five animatable elements of the button: four coloured dots and the
//! home glyph in the middle.

use std::fmt;

use crate::color::{Color, DotPalette};

/// Identifies one of the five elements owned by the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    Red,
    Blue,
    Green,
    Yellow,
    /// The central home glyph
    Home,
}

impl ElementId {
    /// The four peripheral dots, in storage order.
    pub const DOTS: [ElementId; 4] = [
        ElementId::Red,
        ElementId::Blue,
        ElementId::Green,
        ElementId::Yellow,
    ];

    /// Every element, dots first.
    pub const ALL: [ElementId; 5] = [
        ElementId::Red,
        ElementId::Blue,
        ElementId::Green,
        ElementId::Yellow,
        ElementId::Home,
    ];

    fn index(self) -> usize {
        match self {
            ElementId::Red => 0,
            ElementId::Blue => 1,
            ElementId::Green => 2,
            ElementId::Yellow => 3,
            ElementId::Home => 4,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementId::Red => "red",
            ElementId::Blue => "blue",
            ElementId::Green => "green",
            ElementId::Yellow => "yellow",
            ElementId::Home => "home",
        };
        f.write_str(name)
    }
}

/// Paint-time transform of a single element.
///
/// Translation is an offset from the element's laid-out position, so the
/// resting value is always zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTransform {
    /// Translation in x and y
    pub translate: (f32, f32),
    /// Scale in x and y (1.0 = no scale)
    pub scale: (f32, f32),
}

impl ElementTransform {
    /// Identity transform, the baseline every element rests at
    pub const IDENTITY: Self = Self {
        translate: (0.0, 0.0),
        scale: (1.0, 1.0),
    };

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: (x, y),
            ..Self::IDENTITY
        }
    }

    /// Create a scale transform
    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            scale: (x, y),
            ..Self::IDENTITY
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ElementTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// An animatable visual entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub transform: ElementTransform,
    pub visible: bool,
    /// Colour filter painted over the element, if any
    pub tint: Option<Color>,
}

impl Element {
    pub fn new() -> Self {
        Self {
            transform: ElementTransform::IDENTITY,
            visible: true,
            tint: None,
        }
    }

    /// Snap back to the resting transform
    pub fn reset(&mut self) {
        self.transform = ElementTransform::IDENTITY;
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns all five elements for the lifetime of the button.
///
/// Every element exists from construction on, so nothing can be animated
/// before it is resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementSet {
    elements: [Element; 5],
}

impl ElementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    pub fn get_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        ElementId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Snap every element back to its resting transform
    pub fn reset_all(&mut self) {
        for element in &mut self.elements {
            element.reset();
        }
    }

    pub fn set_dots_visible(&mut self, visible: bool) {
        for id in ElementId::DOTS {
            self.get_mut(id).visible = visible;
        }
    }

    /// Tint every dot from `palette`, or clear the tints
    pub fn set_tints(&mut self, palette: Option<&DotPalette>) {
        for id in ElementId::DOTS {
            self.get_mut(id).tint = palette.and_then(|palette| palette.get(id));
        }
    }

    pub fn dots_visible(&self) -> bool {
        ElementId::DOTS.iter().all(|id| self.get(*id).visible)
    }

    /// Whether every element is at rest
    pub fn at_rest(&self) -> bool {
        self.elements.iter().all(|e| e.transform.is_identity())
    }
}
