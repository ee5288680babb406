//! Whether the dots are shown, how they are tinted and whether gestures
//! are accepted.

use bitflags::bitflags;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::{DotColors, DotPalette};
use crate::config::DotsConfig;
use crate::element::ElementSet;

bitflags! {
    /// Host-pushed switches that gate the press sequence
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PresentationFlags: u8 {
        /// The dots feature is turned on
        const ENABLED        = 0b00001;
        /// The host is rearranging buttons; gestures are ignored
        const EDIT_MODE      = 0b00010;
        /// Only the designated home button shows dots
        const HOME_ONLY      = 0b00100;
        /// This button is the designated home button
        const IS_HOME        = 0b01000;
        /// The surface is on screen, so animations can run
        const WINDOW_VISIBLE = 0b10000;
    }
}

#[derive(Clone, Debug)]
pub struct PresentationPolicy {
    flags: PresentationFlags,
    colors: DotColors,
    /// Tints currently painted over the dots
    palette: Option<DotPalette>,
    rng: StdRng,
}

impl PresentationPolicy {
    pub fn new(config: &DotsConfig) -> Self {
        let mut flags = PresentationFlags::ENABLED | PresentationFlags::WINDOW_VISIBLE;
        flags.set(PresentationFlags::HOME_ONLY, config.home_only);
        flags.set(PresentationFlags::IS_HOME, config.is_home_button);

        let mut rng = match config.color_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let palette = pick_palette(config.dot_colors, &mut rng);

        Self {
            flags,
            colors: config.dot_colors,
            palette,
            rng,
        }
    }

    pub fn flags(&self) -> PresentationFlags {
        self.flags
    }

    /// Press and release are only handled when enabled and not editing
    pub fn accepts_gestures(&self) -> bool {
        self.flags.contains(PresentationFlags::ENABLED)
            && !self.flags.contains(PresentationFlags::EDIT_MODE)
    }

    pub fn animations_allowed(&self) -> bool {
        self.flags.contains(PresentationFlags::WINDOW_VISIBLE)
    }

    pub fn dots_shown(&self) -> bool {
        self.flags.contains(PresentationFlags::ENABLED)
            && (!self.flags.contains(PresentationFlags::HOME_ONLY)
                || self.flags.contains(PresentationFlags::IS_HOME))
    }

    /// Set or clear a flag. Returns true if it changed.
    pub fn set(&mut self, flag: PresentationFlags, value: bool) -> bool {
        let before = self.flags;
        self.flags.set(flag, value);
        before != self.flags
    }

    pub fn colors(&self) -> DotColors {
        self.colors
    }

    pub fn palette(&self) -> Option<&DotPalette> {
        self.palette.as_ref()
    }

    /// Switch tint mode. Random modes draw a new palette right away.
    pub fn set_colors(&mut self, colors: DotColors) {
        self.colors = colors;
        self.palette = pick_palette(colors, &mut self.rng);
    }

    /// A stage is starting: redraw the tints if they change every stage
    pub fn refresh_colors(&mut self) {
        if self.colors == DotColors::RandomEveryStage {
            self.palette = Some(DotPalette::random(&mut self.rng));
        }
    }

    /// Paint visibility and tints. `on_screen` says whether the sequence
    /// currently wants the dots shown; the flags can still keep them hidden.
    pub fn apply(&self, elements: &mut ElementSet, on_screen: bool) {
        elements.set_dots_visible(on_screen && self.dots_shown());
        elements.set_tints(self.palette.as_ref());
    }
}

fn pick_palette(colors: DotColors, rng: &mut StdRng) -> Option<DotPalette> {
    match colors {
        DotColors::Clear => None,
        DotColors::Fixed(palette) => Some(palette),
        DotColors::Random | DotColors::RandomEveryStage => Some(DotPalette::random(rng)),
    }
}
