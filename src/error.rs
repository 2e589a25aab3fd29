//! Error types for the contrast audit.
//!
//! Nothing here is fatal to a scan: per-candidate errors are logged and the
//! candidate is skipped.

use thiserror::Error;

use crate::document::NodeId;

/// Result type alias for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;

#[derive(Debug, Error)]
pub enum AuditError {
    /// An element names a parent that does not exist in the document.
    #[error("node {node} references missing parent {parent}")]
    DanglingParent { node: NodeId, parent: NodeId },

    /// Following parent links from an element led back to `node`.
    #[error("parent chain loops back to node {node}")]
    ParentCycle { node: NodeId },

    /// A node id that should name an element does not.
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// The host-supplied document snapshot could not be decoded.
    #[error("invalid document snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
