//! Topological core of a planar arrangement.
//!
//! This module provides the doubly-connected edge list and everything around
//! it:
//! - Generation-checked handles for vertices, halfedges, faces and the
//!   per-face membership records
//! - The [`Dcel`] container with its mutating operations
//! - Circulators around boundary cycles and vertices
//! - A structural invariant checker
//!
//! No coordinates live here. Wherever an operation needs a geometric
//! decision (where a new edge goes in a vertex's rotation, which holes a new
//! face contains) the caller supplies it.

pub(crate) mod _debug_invariants;
pub(crate) mod arena;
pub mod circulator;
pub mod dcel;
pub mod handle;
pub mod records;
pub mod validation;

pub use circulator::{CcbHalfedges, Circulator, CirculatorKind, IncomingHalfedges};
pub use dcel::{Containment, Dcel, EdgeHints, EdgeRemoval, FaceSplit};
pub use handle::*;
pub use records::{Ccb, VertexState};
pub use validation::{
    InvariantViolation, UnfinishedHandling, ValidationOptions, ViolationKind, validate_dcel,
};
