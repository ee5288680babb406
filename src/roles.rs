//! Orientation-dependent assignment of the dots to top/right/bottom/left.

use crate::element::ElementId;

/// Semantic slot around the home glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Top,
    Right,
    Bottom,
    Left,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Top, Role::Right, Role::Bottom, Role::Left];

    /// Top and bottom dots travel vertically, left and right horizontally.
    pub fn is_vertical(self) -> bool {
        matches!(self, Role::Top | Role::Bottom)
    }

    /// Sign of an outward move along the role's axis (screen y grows downward)
    pub fn outward_sign(self) -> f32 {
        match self {
            Role::Top | Role::Left => -1.0,
            Role::Bottom | Role::Right => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_landscape(is_landscape: bool) -> Self {
        if is_landscape {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }

    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }
}

/// Role to dot mapping. Always a bijection over the four dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleMap {
    top: ElementId,
    right: ElementId,
    bottom: ElementId,
    left: ElementId,
}

impl RoleMap {
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => Self {
                top: ElementId::Red,
                right: ElementId::Green,
                bottom: ElementId::Yellow,
                left: ElementId::Blue,
            },
            Orientation::Landscape => Self {
                top: ElementId::Green,
                right: ElementId::Yellow,
                bottom: ElementId::Blue,
                left: ElementId::Red,
            },
        }
    }

    pub fn element(&self, role: Role) -> ElementId {
        match role {
            Role::Top => self.top,
            Role::Right => self.right,
            Role::Bottom => self.bottom,
            Role::Left => self.left,
        }
    }

    /// Reverse lookup. Returns `None` for the home glyph.
    pub fn role_of(&self, element: ElementId) -> Option<Role> {
        Role::ALL.into_iter().find(|role| self.element(*role) == element)
    }
}

impl Default for RoleMap {
    fn default() -> Self {
        Self::for_orientation(Orientation::default())
    }
}
