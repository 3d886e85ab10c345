//! Layout configuration.

use crate::types::Direction;

/// Settings that apply to every pass of a [`FlexTree`](crate::FlexTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Direction of a root whose style says `Inherit`.
    pub direction: Direction,

    /// Clamp negative or unresolved sizes of every visited node to 0 at the
    /// end of a pass, so consumers never see them.
    pub clamp_negative: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Ltr,
            clamp_negative: true,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_clamp_negative(mut self, clamp: bool) -> Self {
        self.clamp_negative = clamp;
        self
    }

    /// Direction used for a root node, never `Inherit`.
    pub(crate) fn root_direction(&self) -> Direction {
        match self.direction {
            Direction::Inherit => Direction::Ltr,
            direction => direction,
        }
    }
}
