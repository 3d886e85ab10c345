//! FlexStyle - the declarative per-node layout input.
//!
//! A style is owned by exactly one node. It is read-only while a layout pass
//! runs and freely mutable between passes (through `FlexTree::style_mut`,
//! which marks the node dirty).
//!
//! The query helpers here are the only place that turns raw style values into
//! numbers the algorithm can add: negative padding/border read as 0, unset
//! offsets read as 0 where an offset is added, and min/max bounds only apply
//! when defined and non-negative.

use crate::geometry::{is_defined, Edge, StyleSpace, UNDEFINED};
use crate::types::{
    AlignContent, AlignItems, AlignSelf, Direction, FlexDirection, FlexWrap, JustifyContent,
    PositionType,
};

/// Per-node flex style.
#[derive(Debug, Clone, Copy)]
pub struct FlexStyle {
    // =========================================================================
    // CONTAINER PROPERTIES
    // =========================================================================
    pub direction: Direction,
    pub flex_direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub flex_wrap: FlexWrap,

    // =========================================================================
    // ITEM PROPERTIES
    // =========================================================================
    pub align_self: AlignSelf,
    pub position_type: PositionType,
    /// Grow factor. Values <= 0 mean "not flexible".
    pub flex: f32,

    // =========================================================================
    // SPACING
    // =========================================================================
    pub margin: StyleSpace,
    pub padding: StyleSpace,
    pub border: StyleSpace,
    /// Offsets (left/top/right/bottom). Unset edges are undefined.
    pub position: StyleSpace,

    // =========================================================================
    // DIMENSIONS (UNDEFINED = let content decide / no bound)
    // =========================================================================
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            direction: Direction::Inherit,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::FlexStart,
            flex_wrap: FlexWrap::NoWrap,

            align_self: AlignSelf::Auto,
            position_type: PositionType::Relative,
            flex: 0.0,

            margin: StyleSpace::default(),
            padding: StyleSpace::default(),
            border: StyleSpace::default(),
            position: StyleSpace::undefined(),

            width: UNDEFINED,
            height: UNDEFINED,
            min_width: UNDEFINED,
            max_width: UNDEFINED,
            min_height: UNDEFINED,
            max_height: UNDEFINED,
        }
    }
}

/// Non-negative padding/border value, 0 when unset or negative.
#[inline]
fn non_negative(value: f32) -> f32 {
    if value >= 0.0 { value } else { 0.0 }
}

impl FlexStyle {
    /// Style with an explicit width and height.
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    // =========================================================================
    // Item classification
    // =========================================================================

    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.position_type == PositionType::Absolute
    }

    /// Relative and with a positive grow factor.
    #[inline]
    pub fn is_flex(&self) -> bool {
        self.position_type == PositionType::Relative && self.flex > 0.0
    }

    #[inline]
    pub fn is_wrap(&self) -> bool {
        self.flex_wrap == FlexWrap::Wrap
    }

    // =========================================================================
    // Dimensions
    // =========================================================================

    /// Styled size along `axis` (may be undefined).
    #[inline]
    pub fn dimension(&self, axis: FlexDirection) -> f32 {
        if axis.is_row() { self.width } else { self.height }
    }

    /// Whether the style fixes the size along `axis`.
    #[inline]
    pub fn is_dimension_defined(&self, axis: FlexDirection) -> bool {
        let value = self.dimension(axis);
        is_defined(value) && value >= 0.0
    }

    /// Clamp `value` to this style's min/max along `axis`.
    ///
    /// Max applies first, then min, so a min larger than the max wins.
    pub fn bound_axis(&self, axis: FlexDirection, value: f32) -> f32 {
        let (min, max) = if axis.is_row() {
            (self.min_width, self.max_width)
        } else {
            (self.min_height, self.max_height)
        };

        let mut bound = value;
        if is_defined(max) && max >= 0.0 && bound > max {
            bound = max;
        }
        if is_defined(min) && min >= 0.0 && bound < min {
            bound = min;
        }
        bound
    }

    // =========================================================================
    // Margin (start/end override the physical edge on row axes)
    // =========================================================================

    pub fn leading_margin(&self, axis: FlexDirection) -> f32 {
        if axis.is_row() {
            let start = self.margin.get(Edge::Start);
            if is_defined(start) {
                return start;
            }
        }
        self.margin.get(axis.leading_edge())
    }

    pub fn trailing_margin(&self, axis: FlexDirection) -> f32 {
        if axis.is_row() {
            let end = self.margin.get(Edge::End);
            if is_defined(end) {
                return end;
            }
        }
        self.margin.get(axis.trailing_edge())
    }

    #[inline]
    pub fn margin_axis(&self, axis: FlexDirection) -> f32 {
        self.leading_margin(axis) + self.trailing_margin(axis)
    }

    // =========================================================================
    // Padding and border (never negative)
    // =========================================================================

    fn leading_of(space: &StyleSpace, axis: FlexDirection) -> f32 {
        if axis.is_row() {
            let start = space.get(Edge::Start);
            if is_defined(start) && start >= 0.0 {
                return start;
            }
        }
        non_negative(space.get(axis.leading_edge()))
    }

    fn trailing_of(space: &StyleSpace, axis: FlexDirection) -> f32 {
        if axis.is_row() {
            let end = space.get(Edge::End);
            if is_defined(end) && end >= 0.0 {
                return end;
            }
        }
        non_negative(space.get(axis.trailing_edge()))
    }

    #[inline]
    pub fn leading_padding(&self, axis: FlexDirection) -> f32 {
        Self::leading_of(&self.padding, axis)
    }

    #[inline]
    pub fn trailing_padding(&self, axis: FlexDirection) -> f32 {
        Self::trailing_of(&self.padding, axis)
    }

    #[inline]
    pub fn leading_border(&self, axis: FlexDirection) -> f32 {
        Self::leading_of(&self.border, axis)
    }

    #[inline]
    pub fn trailing_border(&self, axis: FlexDirection) -> f32 {
        Self::trailing_of(&self.border, axis)
    }

    #[inline]
    pub fn border_axis(&self, axis: FlexDirection) -> f32 {
        self.leading_border(axis) + self.trailing_border(axis)
    }

    #[inline]
    pub fn leading_padding_and_border(&self, axis: FlexDirection) -> f32 {
        self.leading_padding(axis) + self.leading_border(axis)
    }

    #[inline]
    pub fn trailing_padding_and_border(&self, axis: FlexDirection) -> f32 {
        self.trailing_padding(axis) + self.trailing_border(axis)
    }

    #[inline]
    pub fn padding_and_border_axis(&self, axis: FlexDirection) -> f32 {
        self.leading_padding_and_border(axis) + self.trailing_padding_and_border(axis)
    }

    // =========================================================================
    // Position offsets
    // =========================================================================

    #[inline]
    pub fn is_position_defined(&self, edge: Edge) -> bool {
        is_defined(self.position.get(edge))
    }

    /// Offset on `edge`, 0 when unset.
    #[inline]
    pub fn position_offset(&self, edge: Edge) -> f32 {
        let value = self.position.get(edge);
        if is_defined(value) { value } else { 0.0 }
    }

    /// Shift applied along `axis` by relative offsets: the leading offset if
    /// set, otherwise the negated trailing offset.
    pub fn relative_position(&self, axis: FlexDirection) -> f32 {
        let lead = self.position.get(axis.leading_edge());
        if is_defined(lead) {
            return lead;
        }
        -self.position_offset(axis.trailing_edge())
    }
}
