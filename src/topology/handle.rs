//! Handles: strong, generation-checked references into the DCEL arenas
//!
//! Every record (vertex, halfedge, face, CCB membership, isolated-vertex
//! membership) is addressed by a slotmap key: a slot index plus the version
//! the slot had when the record was allocated. Removing a record bumps the
//! slot's version, so a handle kept past removal is detected instead of
//! silently aliasing whatever later reuses the slot.
//!
//! This module provides:
//! - One slotmap key type per arena ([`VertexKey`], [`HalfedgeKey`],
//!   [`FaceKey`], [`MemberKey`]).
//! - Typed handles [`VertexId`], [`HalfedgeId`], [`FaceId`].
//! - One generic [`MemberId`] for records that sit in a face's collection
//!   (perimeters, holes, isolated vertices).
//! - [`RecordId`], a tagged union used in error and violation reports.

use slotmap::{Key, new_key_type};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

new_key_type! {
    /// Slot of a vertex record.
    pub struct VertexKey;
    /// Slot of a halfedge record.
    pub struct HalfedgeKey;
    /// Slot of a face record.
    pub struct FaceKey;
    /// Slot of a perimeter, hole or isolated-vertex membership.
    pub struct MemberKey;
}

// -----------------------------------------------------------------------------
// Typed handles
// -----------------------------------------------------------------------------

macro_rules! handle {
    ($(#[$meta:meta])* $name:ident($key:ty)) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(pub(crate) $key);

        impl $name {
            /// The arena key behind this handle.
            #[inline]
            pub fn key(self) -> $key {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0.data()).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0.data())
            }
        }

        impl From<$key> for $name {
            #[inline]
            fn from(key: $key) -> $name {
                $name(key)
            }
        }
    };
}

handle!(
    /// A 0-dimensional incidence point.
    VertexId(VertexKey)
);
handle!(
    /// One directed side of an undirected edge.
    HalfedgeId(HalfedgeKey)
);
handle!(
    /// A 2-dimensional cell of the subdivision.
    FaceId(FaceKey)
);

impl HalfedgeId {
    /// Placeholder used while a record is being linked; never observable
    /// after an operation returns.
    #[inline]
    pub(crate) fn dangling() -> HalfedgeId {
        HalfedgeId(HalfedgeKey::null())
    }
}

// -----------------------------------------------------------------------------
// Collection members
// -----------------------------------------------------------------------------

/// Marker for the collection a [`MemberId`] belongs to.
pub trait Collection: Copy + fmt::Debug + 'static {
    /// What the member stands for: a representative halfedge for a boundary
    /// cycle, the vertex itself for an isolated point.
    type Item: Copy + Eq + fmt::Debug + fmt::Display;
    const NAME: &'static str;
}

/// The outer boundary of a face (at most one per face).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Perimeters;

/// Boundary cycles lying strictly inside a face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Holes;

/// Vertices without incident edges lying inside a face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IsolatedPoints;

impl Collection for Perimeters {
    type Item = HalfedgeId;
    const NAME: &'static str = "Perimeter";
}

impl Collection for Holes {
    type Item = HalfedgeId;
    const NAME: &'static str = "Hole";
}

impl Collection for IsolatedPoints {
    type Item = VertexId;
    const NAME: &'static str = "IsolatedVertex";
}

/// Handle of a record that sits in one of a face's collections.
///
/// The type parameter only tags which collection; all members share the
/// same layout (owner face plus position in the owner's list).
#[repr(transparent)]
pub struct MemberId<K: Collection>(pub(crate) MemberKey, PhantomData<fn() -> K>);

impl<K: Collection> MemberId<K> {
    #[inline]
    pub(crate) fn from_key(key: MemberKey) -> Self {
        MemberId(key, PhantomData)
    }

    /// The arena key behind this handle.
    #[inline]
    pub fn key(self) -> MemberKey {
        self.0
    }
}

// Manual impls: derives would put bounds on `K`.
impl<K: Collection> Copy for MemberId<K> {}
impl<K: Collection> Clone for MemberId<K> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}
impl<K: Collection> PartialEq for MemberId<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<K: Collection> Eq for MemberId<K> {}
impl<K: Collection> Hash for MemberId<K> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.0.hash(state);
    }
}
impl<K: Collection> PartialOrd for MemberId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<K: Collection> Ord for MemberId<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
impl<K: Collection> fmt::Debug for MemberId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.0.data()).finish()
    }
}
impl<K: Collection> fmt::Display for MemberId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", K::NAME, self.0.data())
    }
}

/// A face's own outer boundary. The arrangement literature calls this
/// record an *inner CCB*.
pub type PerimeterId = MemberId<Perimeters>;
/// A hole of a face. The arrangement literature calls this record an
/// *outer CCB*.
pub type HoleId = MemberId<Holes>;
/// A vertex recorded as lying inside a face.
pub type IsolatedVertexId = MemberId<IsolatedPoints>;

pub type InnerCcb = PerimeterId;
pub type OuterCcb = HoleId;

// -----------------------------------------------------------------------------
// Record ids for reporting
// -----------------------------------------------------------------------------

/// Any record of the structure, used in error and violation reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordId {
    Vertex(VertexId),
    Halfedge(HalfedgeId),
    Face(FaceId),
    Perimeter(PerimeterId),
    Hole(HoleId),
    IsolatedVertex(IsolatedVertexId),
    /// Structure-wide checks that concern no single record.
    Structure,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Vertex(v) => fmt::Display::fmt(v, f),
            RecordId::Halfedge(h) => fmt::Display::fmt(h, f),
            RecordId::Face(x) => fmt::Display::fmt(x, f),
            RecordId::Perimeter(p) => fmt::Display::fmt(p, f),
            RecordId::Hole(h) => fmt::Display::fmt(h, f),
            RecordId::IsolatedVertex(i) => fmt::Display::fmt(i, f),
            RecordId::Structure => f.write_str("structure"),
        }
    }
}

macro_rules! record_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for RecordId {
            #[inline]
            fn from(id: $ty) -> RecordId {
                RecordId::$variant(id)
            }
        }
    };
}

record_from!(VertexId, Vertex);
record_from!(HalfedgeId, Halfedge);
record_from!(FaceId, Face);
record_from!(PerimeterId, Perimeter);
record_from!(HoleId, Hole);
record_from!(IsolatedVertexId, IsolatedVertex);

// -----------------------------------------------------------------------------
// Testing and assertions
// -----------------------------------------------------------------------------

#[cfg(test)]
mod layout_tests {
    use super::*;
    use static_assertions::assert_eq_size;

    assert_eq_size!(VertexId, u64);
    assert_eq_size!(HalfedgeId, u64);
    assert_eq_size!(FaceId, u64);
    assert_eq_size!(HoleId, u64);
    assert_eq_size!(IsolatedVertexId, u64);
}
