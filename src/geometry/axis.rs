//! Axis resolution.
//!
//! A [`FlexDirection`] doubles as an axis: the algorithm only ever needs to
//! know which physical edge leads, which trails, and which dimension the axis
//! measures. Under RTL the two row directions swap.

use crate::types::{Direction, FlexDirection};

use super::style_space::Edge;

/// Index of a dimension in `[width, height]` arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Dimension {
    Width = 0,
    Height = 1,
}

impl FlexDirection {
    #[inline]
    pub fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    #[inline]
    pub fn is_column(self) -> bool {
        matches!(self, Self::Column | Self::ColumnReverse)
    }

    /// Physical edge where flow starts on this axis.
    #[inline]
    pub fn leading_edge(self) -> Edge {
        match self {
            Self::Column => Edge::Top,
            Self::ColumnReverse => Edge::Bottom,
            Self::Row => Edge::Left,
            Self::RowReverse => Edge::Right,
        }
    }

    /// Physical edge where flow ends on this axis.
    #[inline]
    pub fn trailing_edge(self) -> Edge {
        match self {
            Self::Column => Edge::Bottom,
            Self::ColumnReverse => Edge::Top,
            Self::Row => Edge::Right,
            Self::RowReverse => Edge::Left,
        }
    }

    /// Dimension measured along this axis.
    #[inline]
    pub fn dimension(self) -> Dimension {
        if self.is_row() { Dimension::Width } else { Dimension::Height }
    }

    /// Apply the layout direction: row and row-reverse swap under RTL.
    pub fn resolve(self, direction: Direction) -> Self {
        if direction == Direction::Rtl {
            match self {
                Self::Row => return Self::RowReverse,
                Self::RowReverse => return Self::Row,
                _ => {}
            }
        }
        self
    }

    /// Axis perpendicular to `self`, resolved for `direction`.
    pub fn cross(self, direction: Direction) -> Self {
        if self.is_column() {
            Self::Row.resolve(direction)
        } else {
            Self::Column
        }
    }
}
