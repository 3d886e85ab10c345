//! Core types for spark-flex.
//!
//! Style enums shared by the style model and the layout algorithm. Numeric
//! discriminants are stable so drivers that keep styles in flat `u8` arrays
//! can convert with `From<u8>`; out-of-range values fall back to the default.

// =============================================================================
// Direction
// =============================================================================

/// Writing direction. `Inherit` takes the parent's resolved direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Direction {
    #[default]
    Inherit = 0,
    Ltr = 1,
    Rtl = 2,
}

impl From<u8> for Direction {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Ltr,
            2 => Self::Rtl,
            _ => Self::Inherit,
        }
    }
}

// =============================================================================
// Flex Enums - For layout
// =============================================================================

/// Flex direction for container layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FlexDirection {
    #[default]
    Column = 0,
    Row = 1,
    ColumnReverse = 2,
    RowReverse = 3,
}

impl From<u8> for FlexDirection {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Row,
            2 => Self::ColumnReverse,
            3 => Self::RowReverse,
            _ => Self::Column,
        }
    }
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum FlexWrap {
    #[default]
    NoWrap = 0,
    Wrap = 1,
}

impl From<u8> for FlexWrap {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Wrap,
            _ => Self::NoWrap,
        }
    }
}

/// Justify content (main axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum JustifyContent {
    #[default]
    FlexStart = 0,
    Center = 1,
    FlexEnd = 2,
    SpaceBetween = 3,
    SpaceAround = 4,
    SpaceEvenly = 5,
}

impl From<u8> for JustifyContent {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::FlexEnd,
            3 => Self::SpaceBetween,
            4 => Self::SpaceAround,
            5 => Self::SpaceEvenly,
            _ => Self::FlexStart,
        }
    }
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AlignItems {
    #[default]
    Stretch = 0,
    FlexStart = 1,
    Center = 2,
    FlexEnd = 3,
}

impl From<u8> for AlignItems {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::FlexStart,
            2 => Self::Center,
            3 => Self::FlexEnd,
            _ => Self::Stretch,
        }
    }
}

/// Align self (item override for align items).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AlignSelf {
    #[default]
    Auto = 0,
    Stretch = 1,
    FlexStart = 2,
    Center = 3,
    FlexEnd = 4,
}

impl AlignSelf {
    /// Convert to AlignItems, returning None if Auto.
    pub const fn to_align_items(&self) -> Option<AlignItems> {
        match self {
            Self::Auto => None,
            Self::Stretch => Some(AlignItems::Stretch),
            Self::FlexStart => Some(AlignItems::FlexStart),
            Self::Center => Some(AlignItems::Center),
            Self::FlexEnd => Some(AlignItems::FlexEnd),
        }
    }
}

impl From<u8> for AlignSelf {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Stretch,
            2 => Self::FlexStart,
            3 => Self::Center,
            4 => Self::FlexEnd,
            _ => Self::Auto,
        }
    }
}

/// Align content (multi-line cross axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum AlignContent {
    #[default]
    FlexStart = 0,
    Center = 1,
    FlexEnd = 2,
    Stretch = 3,
}

impl From<u8> for AlignContent {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Center,
            2 => Self::FlexEnd,
            3 => Self::Stretch,
            _ => Self::FlexStart,
        }
    }
}

/// Position type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum PositionType {
    #[default]
    Relative = 0,
    Absolute = 1,
}

impl From<u8> for PositionType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Absolute,
            _ => Self::Relative,
        }
    }
}
