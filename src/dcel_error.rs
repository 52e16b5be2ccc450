//! DcelError: Unified error type for arrangement-dcel public APIs
//!
//! Every mutating operation validates its preconditions before touching a
//! single record, so any error returned here leaves the structure exactly as
//! it was before the call.

use crate::topology::handle::{FaceId, HalfedgeId, RecordId, VertexId};
use crate::topology::validation::InvariantViolation;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type DcelResult<T> = Result<T, DcelError>;

/// Unified error type for DCEL operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DcelError {
    /// Preconditions on the existing topology are violated.
    #[error("invariant error: {0}")]
    Invariant(#[from] InvariantError),
    /// A vertex/halfedge hint does not belong to the expected rotation or cycle.
    #[error("disconnected topology: vertex {vertex} does not match hint {halfedge:?}")]
    DisconnectedTopology {
        vertex: VertexId,
        halfedge: Option<HalfedgeId>,
    },
    /// The edge separates two faces; `merge_faces` has to remove it instead.
    #[error("edge {edge} separates faces {left} and {right}; merge the faces first")]
    PrecedingMergeRequired {
        edge: HalfedgeId,
        left: FaceId,
        right: FaceId,
    },
    /// A circulator outlived a mutation of the structure it walks.
    #[error("stale circulator: created at epoch {created}, structure is at epoch {current}")]
    StaleCirculator { created: u64, current: u64 },
    /// A handle refers to a record that has been removed (or never existed).
    #[error("stale handle: {0}")]
    StaleHandle(RecordId),
    /// The invariant checker found a violation.
    #[error("{0}")]
    Violation(#[from] InvariantViolation),
}

/// Precondition failures of mutating operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("vertex {0} has not been assigned to an edge or a face yet")]
    UnassignedVertex(VertexId),
    #[error("vertex {0} is still incident to edges or isolated in a face")]
    VertexInUse(VertexId),
    #[error("an edge from vertex {0} to itself needs existing incident edges")]
    SelfLoop(VertexId),
    #[error("operands lie in different faces ({expected} vs {found})")]
    FaceMismatch { expected: FaceId, found: FaceId },
    #[error("halfedge {halfedge} does not lie on a boundary of face {face}")]
    NotOnFace { halfedge: HalfedgeId, face: FaceId },
    #[error("halfedges {0} and {1} do not lie on a common boundary cycle")]
    NotOnCommonCycle(HalfedgeId, HalfedgeId),
    #[error("halfedges {0} and {1} lie on one boundary cycle; use split_face")]
    WouldSplitFace(HalfedgeId, HalfedgeId),
    #[error("cannot split a face along a single halfedge {0}")]
    DegenerateSplit(HalfedgeId),
    #[error("halfedge {halfedge} does not separate faces {f1} and {f2}")]
    NotSeparating {
        halfedge: HalfedgeId,
        f1: FaceId,
        f2: FaceId,
    },
    #[error("cannot merge face {0} with itself")]
    SameFace(FaceId),
    #[error("twin pairing of halfedge {0} is broken")]
    BrokenTwin(HalfedgeId),
    #[error("the two sides of halfedge {0} lie on different cycles of one face")]
    InconsistentCcb(HalfedgeId),
    #[error("halfedge {0} lies on a boundary cycle that belongs to no face")]
    DetachedCcb(HalfedgeId),
    #[error("halfedge {0} does not lie on a hole")]
    NotAHole(HalfedgeId),
    #[error("the hole containing halfedge {0} is already attached to a face")]
    AlreadyAttached(HalfedgeId),
    #[error("vertex {vertex} is not isolated inside face {face}")]
    NotIsolatedIn { vertex: VertexId, face: FaceId },
    #[error("halfedges {0} and {1} are not consecutive around a degree-2 vertex")]
    NotMergeable(HalfedgeId, HalfedgeId),
}
