//! StyleSpace - per-edge spacing with fallback resolution.
//!
//! Margin, padding, border and position offsets are all stored as a
//! [`StyleSpace`]: nine slots keyed by [`Edge`] plus a presence bitmask.
//! Zero is a valid explicit value, so "was this edge set" is tracked in
//! [`EdgeFlags`] rather than by a magic value.
//!
//! # Fallback
//!
//! ```text
//! Left / Right  → Horizontal → All → default
//! Top / Bottom  → Vertical   → All → default
//! Horizontal / Vertical      → All → default
//! Start / End   → (no fallback, undefined when unset)
//! ```

use super::UNDEFINED;

/// Edge keys of a [`StyleSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Edge {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
    Vertical = 4,
    Horizontal = 5,
    Start = 6,
    End = 7,
    All = 8,
}

impl Edge {
    pub const COUNT: usize = 9;

    #[inline]
    fn flag(self) -> EdgeFlags {
        EdgeFlags::from_bits_truncate(1 << self as usize)
    }
}

// =============================================================================
// Presence mask (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which edges of a [`StyleSpace`] were explicitly set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EdgeFlags: u16 {
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
        const VERTICAL = 1 << 4;
        const HORIZONTAL = 1 << 5;
        const START = 1 << 6;
        const END = 1 << 7;
        const ALL = 1 << 8;

        /// Any of the shorthand edges that other edges fall back to.
        const ALIASES = Self::VERTICAL.bits() | Self::HORIZONTAL.bits() | Self::ALL.bits();
    }
}

// =============================================================================
// StyleSpace
// =============================================================================

/// Nine-slot spacing record with fallback resolution.
#[derive(Debug, Clone, Copy)]
pub struct StyleSpace {
    values: [f32; Edge::COUNT],
    present: EdgeFlags,
    default_value: f32,
}

impl Default for StyleSpace {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl StyleSpace {
    /// Empty space whose unset edges read as `default_value`.
    pub fn new(default_value: f32) -> Self {
        Self {
            values: [UNDEFINED; Edge::COUNT],
            present: EdgeFlags::empty(),
            default_value,
        }
    }

    /// Empty space whose unset edges read as undefined (position offsets).
    pub fn undefined() -> Self {
        Self::new(UNDEFINED)
    }

    /// Set one edge. Setting an edge to [`UNDEFINED`] clears it.
    ///
    /// Returns whether the stored value changed.
    pub fn set(&mut self, edge: Edge, value: f32) -> bool {
        let slot = &mut self.values[edge as usize];
        if slot.to_bits() == value.to_bits() {
            return false;
        }
        *slot = value;
        self.present.set(edge.flag(), !value.is_nan());
        true
    }

    /// Builder form of [`StyleSpace::set`].
    pub fn with(mut self, edge: Edge, value: f32) -> Self {
        self.set(edge, value);
        self
    }

    /// Resolve an edge with fallback.
    pub fn get(&self, edge: Edge) -> f32 {
        let default = match edge {
            Edge::Start | Edge::End => UNDEFINED,
            _ => self.default_value,
        };

        if self.present.is_empty() {
            return default;
        }
        if self.present.contains(edge.flag()) {
            return self.values[edge as usize];
        }
        if self.present.intersects(EdgeFlags::ALIASES) {
            match edge {
                Edge::Top | Edge::Bottom if self.present.contains(EdgeFlags::VERTICAL) => {
                    return self.values[Edge::Vertical as usize];
                }
                Edge::Left | Edge::Right if self.present.contains(EdgeFlags::HORIZONTAL) => {
                    return self.values[Edge::Horizontal as usize];
                }
                Edge::Start | Edge::End => return default,
                _ => {}
            }
            if self.present.contains(EdgeFlags::ALL) {
                return self.values[Edge::All as usize];
            }
        }
        default
    }

    /// Stored value of `edge` ignoring fallbacks; undefined when unset.
    pub fn get_raw(&self, edge: Edge) -> f32 {
        self.values[edge as usize]
    }

    /// Whether `edge` itself was explicitly set.
    pub fn is_set(&self, edge: Edge) -> bool {
        self.present.contains(edge.flag())
    }
}
