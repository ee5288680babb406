//! Dot tints and the modes that choose them.

use rand::Rng;

use crate::element::ElementId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Opaque colour with random channels
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }
}

/// One tint per dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPalette {
    pub red: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
}

impl DotPalette {
    pub fn new(red: Color, blue: Color, green: Color, yellow: Color) -> Self {
        Self {
            red,
            blue,
            green,
            yellow,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            Color::random(rng),
            Color::random(rng),
            Color::random(rng),
            Color::random(rng),
        )
    }

    /// Tint for `id`; the home glyph is never tinted
    pub fn get(&self, id: ElementId) -> Option<Color> {
        match id {
            ElementId::Red => Some(self.red),
            ElementId::Blue => Some(self.blue),
            ElementId::Green => Some(self.green),
            ElementId::Yellow => Some(self.yellow),
            ElementId::Home => None,
        }
    }
}

/// How the dots are tinted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DotColors {
    /// No tint: the dots keep their own artwork colours
    #[default]
    Clear,
    /// A fixed tint per dot
    Fixed(DotPalette),
    /// Random tints drawn once, when the mode is selected
    Random,
    /// Fresh random tints every time a stage starts
    RandomEveryStage,
}
