//! # spark-flex
//!
//! Incremental flexbox layout engine.
//!
//! Nodes live in a [`FlexTree`] arena. The driver edits styles and the child
//! lists (which marks nodes dirty), then calls [`FlexTree::compute_layout`].
//! Only dirty subtrees, or subtrees whose constraints changed, are laid out
//! again; the returned [`LayoutPass`] lists which nodes actually moved or
//! resized.
//!
//! ## Architecture
//!
//! ```text
//! FlexStyle edits → dirty propagation → compute_layout → NodeLayout per node
//!                                                      → LayoutPass { touched }
//! ```
//!
//! Leaves with intrinsic content (text) supply a measurement callback that
//! maps an available width to a content size; [`text_measure`] builds one for
//! terminal text.
//!
//! ## Modules
//!
//! - [`types`] - Style enums (direction, justify, align, wrap, position)
//! - [`geometry`] - Undefined sentinel, float comparison, edges, axes
//! - [`engine`] - FlexStyle, FlexNode, FlexTree arena, TreeError
//! - [`layout`] - The layout algorithm, cache layer, text measurement
//! - [`config`] - Per-tree layout settings

pub mod config;
pub mod engine;
pub mod geometry;
pub mod layout;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::LayoutConfig;

pub use geometry::{
    floats_equal, is_defined, is_undefined, values_equal, Edge, EdgeFlags, Size, StyleSpace,
    UNDEFINED,
};

pub use engine::{FlexNode, FlexStyle, FlexTree, MeasureFunc, NodeId, TreeError};

pub use layout::{
    compute_layout, measure_text_height, string_width, text_measure, wrap_text, Frame,
    LayoutPass, NodeLayout,
};
