use crate::color::DotColors;
use crate::error::{Error, Result};

/// Durations of every stage animation, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Outward push and shrink on press
    pub diamond_ms: u64,
    /// Line moves along the line axis
    pub line_along_ms: u64,
    /// Line moves across the line axis
    pub line_cross_ms: u64,
    /// Home glyph shrinking away while the line forms
    pub home_disappear_ms: u64,
    pub collapse_red_yellow_ms: u64,
    pub collapse_blue_green_ms: u64,
    /// Dots growing back to full size during the collapse
    pub dots_resize_ms: u64,
    /// Home glyph reappearance is staggered after the dots settle
    pub home_reappear_delay_ms: u64,
    pub home_reappear_ms: u64,
    pub retract_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            diamond_ms: 200,
            line_along_ms: 133,
            line_cross_ms: 275,
            home_disappear_ms: 83,
            collapse_red_yellow_ms: 83,
            collapse_blue_green_ms: 100,
            dots_resize_ms: 200,
            home_reappear_delay_ms: 33,
            home_reappear_ms: 150,
            retract_ms: 300,
        }
    }
}

/// Controller configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct DotsConfig {
    pub timings: Timings,
    /// Shortest time the press expansion stays visible before it may reverse
    pub min_diamond_ms: u64,
    /// How long a press must be held to count as a long press
    pub long_press_timeout_ms: u64,
    /// Scale of every dot at the height of the press expansion
    pub dot_diamond_scale: f32,
    /// Scale of the home glyph at the height of the press expansion
    pub home_diamond_scale: f32,
    /// Only show the dots on the designated home button
    pub home_only: bool,
    /// Whether this button is the designated home button
    pub is_home_button: bool,
    pub dot_colors: DotColors,
    /// Seed for random dot colours; `None` seeds from the OS
    pub color_seed: Option<u64>,
}

impl Default for DotsConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            min_diamond_ms: 100,
            long_press_timeout_ms: 400,
            dot_diamond_scale: 0.8,
            home_diamond_scale: 0.625,
            home_only: false,
            is_home_button: true,
            dot_colors: DotColors::Clear,
            color_seed: None,
        }
    }
}

impl DotsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }

    pub fn min_diamond_ms(mut self, min_diamond_ms: u64) -> Self {
        self.min_diamond_ms = min_diamond_ms;
        self
    }

    pub fn long_press_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.long_press_timeout_ms = timeout_ms;
        self
    }

    pub fn dot_diamond_scale(mut self, scale: f32) -> Self {
        self.dot_diamond_scale = scale;
        self
    }

    pub fn home_diamond_scale(mut self, scale: f32) -> Self {
        self.home_diamond_scale = scale;
        self
    }

    pub fn home_only(mut self, home_only: bool) -> Self {
        self.home_only = home_only;
        self
    }

    pub fn is_home_button(mut self, is_home_button: bool) -> Self {
        self.is_home_button = is_home_button;
        self
    }

    pub fn dot_colors(mut self, colors: DotColors) -> Self {
        self.dot_colors = colors;
        self
    }

    pub fn color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("dot_diamond_scale", self.dot_diamond_scale),
            ("home_diamond_scale", self.home_diamond_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidScale { name, value });
            }
        }
        if self.min_diamond_ms > self.timings.diamond_ms {
            log::warn!(
                "min_diamond_ms ({}) exceeds the diamond duration ({}); a quick release retracts after the line stage has started",
                self.min_diamond_ms,
                self.timings.diamond_ms
            );
        }
        Ok(())
    }
}
