//! Tree-editing errors.

use thiserror::Error;

use super::NodeId;

/// Error returned by structural tree operations.
///
/// Layout itself never fails on style input; only operations that name
/// nodes the tree does not know, or that would break the tree shape, do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),

    #[error("child index {index} out of bounds for node {parent} with {len} children")]
    ChildIndexOutOfBounds {
        parent: NodeId,
        index: usize,
        len: usize,
    },

    #[error("node {0} already has a parent")]
    AlreadyHasParent(NodeId),

    #[error("adding {child} under {parent} would create a cycle")]
    WouldCreateCycle { parent: NodeId, child: NodeId },

    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
}
