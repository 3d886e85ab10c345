//! Flex Engine - Node arena, styles and tree editing.
//!
//! The engine owns the data the layout algorithm works on:
//! - FlexStyle: per-node declarative input and its query helpers
//! - FlexNode: one arena slot (style, children, output, cache snapshot)
//! - FlexTree: the arena, free-slot pool and tree-editing API
//! - TreeError: failures of tree-editing operations
//!
//! # Architecture
//!
//! Nodes are NOT heap objects linked by pointers. They are slots in one
//! `Vec`, children are stored as indices:
//!
//! ```text
//! Slot 0: root   (parent=None, children=[1, 2], dirty)
//! Slot 1: text   (parent=0,    measure=Some,    clean)
//! Slot 2: box    (parent=0,    children=[],     clean)
//! ```
//!
//! Per-pass working lists (flexible children, absolute children) are plain
//! `Vec<NodeId>` scratch owned by the algorithm, never stored in the slots.

mod error;
mod flex_node;
mod flex_style;
mod flex_tree;

pub use error::*;
pub use flex_node::*;
pub use flex_style::*;
pub use flex_tree::*;
