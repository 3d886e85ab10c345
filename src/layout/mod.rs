//! Flex Layout Module
//!
//! Flexbox layout computation over a [`FlexTree`](crate::FlexTree).
//!
//! # Architecture
//!
//! The module is split by pass concern:
//!
//! 1. `algorithm` - entry point and the per-node flex procedure
//! 2. `absolute` - sizing and placement of absolute children
//! 3. `cache` - dirty propagation and the re-layout decision
//! 4. `text_measure` - terminal-cell text measurement for text leaves
//!
//! # Incremental layout
//!
//! A pass only enters subtrees that are dirty or whose constraints changed.
//! The returned [`LayoutPass`] lists the nodes whose frame changed, so a
//! renderer can limit its work to them.
//!
//! # Example
//!
//! ```
//! use spark_flex::{FlexStyle, FlexTree, FlexDirection, UNDEFINED};
//!
//! let mut tree = FlexTree::new();
//! let a = tree.new_node(FlexStyle::sized(20.0, 10.0));
//! let b = tree.new_node(FlexStyle::sized(30.0, 10.0));
//! let root = tree
//!     .new_with_children(
//!         FlexStyle {
//!             flex_direction: FlexDirection::Row,
//!             ..FlexStyle::sized(100.0, 10.0)
//!         },
//!         &[a, b],
//!     )
//!     .unwrap();
//!
//! let pass = tree.compute_layout(root, UNDEFINED).unwrap();
//! assert_eq!(tree.layout(b).unwrap().left(), 20.0);
//! assert!(pass.is_touched(b));
//! ```

mod absolute;
mod algorithm;
mod cache;
mod text_measure;
mod types;

pub use algorithm::compute_layout;
pub use text_measure::*;
pub use types::*;
