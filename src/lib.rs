//! # arrangement-dcel
//!
//! The topological core of a planar arrangement: a doubly-connected edge
//! list (DCEL) whose faces may carry holes and isolated vertices.
//!
//! ## Features
//! - Arena-backed records addressed by generation-checked handles, so stale
//!   handles are reported instead of aliasing reused slots
//! - Edge insertion, subdivision, fusion and removal; face splitting and
//!   merging; hole and isolated-vertex bookkeeping
//! - Every mutating operation either succeeds completely or returns an error
//!   without changing anything
//! - Borrowing iterators and epoch-checked detached circulators
//! - A structural invariant checker, optionally run after every mutation
//!
//! ## Geometry
//!
//! The structure is purely combinatorial. Callers that own coordinates decide
//! angular order and containment and pass the answers in through
//! [`EdgeHints`](topology::EdgeHints) and
//! [`Containment`](topology::Containment).
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! arrangement-dcel = "0.1"
//! # Optional: audit the structure after every mutation.
//! # features = ["strict-invariants"]
//! ```
//!
//! ```
//! use arrangement_dcel::prelude::*;
//!
//! let mut dcel: Dcel = Dcel::new();
//! let [a, b, c] = [(); 3].map(|_| dcel.create_vertex());
//! let (ab, ba) = dcel.insert_edge(a, b, EdgeHints::default())?;
//! let (bc, _) = dcel.insert_edge(b, c, EdgeHints::after(Some(ab), None))?;
//! let split = dcel.split_face(dcel.unbounded_face(), bc, ba, &Containment::none())?;
//! assert_eq!(dcel.perimeter_halfedges(split.face)?.len(), 3);
//! dcel.check_invariants()?;
//! # Ok::<(), DcelError>(())
//! ```

pub mod dcel_error;
pub mod debug_invariants;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::dcel_error::{DcelError, DcelResult, InvariantError};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::circulator::{Circulator, CirculatorKind};
    pub use crate::topology::dcel::{Containment, Dcel, EdgeHints, EdgeRemoval, FaceSplit};
    pub use crate::topology::handle::{
        FaceId, HalfedgeId, HoleId, InnerCcb, IsolatedVertexId, OuterCcb, PerimeterId, RecordId,
        VertexId,
    };
    pub use crate::topology::records::{Ccb, VertexState};
    pub use crate::topology::validation::{
        InvariantViolation, UnfinishedHandling, ValidationOptions, ViolationKind,
    };
}
