//! Pixel distances each stage moves the dots by.
//!
//! The host resolves them once through an [`OffsetResolver`]; the stage
//! builders only ever see the resolved [`Offsets`].

use crate::error::{Error, Result};

/// Named translation magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OffsetName {
    /// Outward push of every dot on press
    Diamond,
    /// Travel across the line axis that brings the dots back into a row
    LineCross,
    /// Spread of the red and yellow dots along the line
    LineSpreadRedYellow,
    /// Spread of the blue and green dots along the line
    LineSpreadBlueGreen,
    /// Red and yellow travel when the line collapses
    CollapseRedYellow,
    /// Blue and green travel when the line collapses
    CollapseBlueGreen,
}

impl OffsetName {
    pub const ALL: [OffsetName; 6] = [
        OffsetName::Diamond,
        OffsetName::LineCross,
        OffsetName::LineSpreadRedYellow,
        OffsetName::LineSpreadBlueGreen,
        OffsetName::CollapseRedYellow,
        OffsetName::CollapseBlueGreen,
    ];
}

/// Supplies pixel distances, typically from a platform resource system.
pub trait OffsetResolver {
    fn pixel_offset(&self, name: OffsetName) -> Option<f32>;
}

impl<F> OffsetResolver for F
where
    F: Fn(OffsetName) -> Option<f32>,
{
    fn pixel_offset(&self, name: OffsetName) -> Option<f32> {
        self(name)
    }
}

/// Density-independent distances scaled by a display density.
///
/// The defaults are balanced so a full diamond, line and collapse cycle
/// returns every dot to rest: the cross travel equals the diamond push, the
/// red/yellow collapse equals their spread, and the blue/green collapse equals
/// their spread plus the diamond push.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetTable {
    pub density: f32,
    pub diamond: f32,
    pub line_cross: f32,
    pub line_spread_red_yellow: f32,
    pub line_spread_blue_green: f32,
    pub collapse_red_yellow: f32,
    pub collapse_blue_green: f32,
}

impl OffsetTable {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }
}

impl Default for OffsetTable {
    fn default() -> Self {
        Self {
            density: 1.0,
            diamond: 3.0,
            line_cross: 3.0,
            line_spread_red_yellow: 6.0,
            line_spread_blue_green: 16.0,
            collapse_red_yellow: 6.0,
            collapse_blue_green: 19.0,
        }
    }
}

impl OffsetResolver for OffsetTable {
    fn pixel_offset(&self, name: OffsetName) -> Option<f32> {
        let dp = match name {
            OffsetName::Diamond => self.diamond,
            OffsetName::LineCross => self.line_cross,
            OffsetName::LineSpreadRedYellow => self.line_spread_red_yellow,
            OffsetName::LineSpreadBlueGreen => self.line_spread_blue_green,
            OffsetName::CollapseRedYellow => self.collapse_red_yellow,
            OffsetName::CollapseBlueGreen => self.collapse_blue_green,
        };
        Some(dp * self.density)
    }
}

/// Resolved pixel distances.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offsets {
    pub diamond: f32,
    pub line_cross: f32,
    pub line_spread_red_yellow: f32,
    pub line_spread_blue_green: f32,
    pub collapse_red_yellow: f32,
    pub collapse_blue_green: f32,
}

impl Offsets {
    /// Look up every named offset, rejecting missing or unusable values.
    pub fn resolve(resolver: &dyn OffsetResolver) -> Result<Self> {
        let get = |name: OffsetName| -> Result<f32> {
            let value = resolver
                .pixel_offset(name)
                .ok_or(Error::MissingOffset(name))?;
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidOffset { name, value });
            }
            Ok(value)
        };

        Ok(Self {
            diamond: get(OffsetName::Diamond)?,
            line_cross: get(OffsetName::LineCross)?,
            line_spread_red_yellow: get(OffsetName::LineSpreadRedYellow)?,
            line_spread_blue_green: get(OffsetName::LineSpreadBlueGreen)?,
            collapse_red_yellow: get(OffsetName::CollapseRedYellow)?,
            collapse_blue_green: get(OffsetName::CollapseBlueGreen)?,
        })
    }
}
