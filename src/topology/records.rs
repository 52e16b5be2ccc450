//! Passive records stored in the DCEL arenas.
//!
//! None of these types mutate themselves; all linking and unlinking is done
//! by [`Dcel`](super::dcel::Dcel), which owns every record.

use super::handle::{
    Collection, FaceId, HalfedgeId, HoleId, Holes, IsolatedPoints, IsolatedVertexId, MemberId,
    PerimeterId, Perimeters, VertexId,
};

/// Membership state of a vertex.
///
/// The states are explicit so that "not finished yet" is distinguishable
/// from "corrupted" when the structure is audited.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexState {
    /// Freshly created; neither on an edge nor inside a face.
    Unassigned,
    /// Has no incident edges and no containing face (e.g. after
    /// `remove_isolated_vertex`).
    Detached,
    /// Has no incident edges and lies inside the member's face.
    Isolated(IsolatedVertexId),
    /// Target of the given halfedge; the rest of its rotation is reachable
    /// from there.
    Incident(HalfedgeId),
}

impl VertexState {
    /// `true` if the vertex can be embedded (no edges, no face).
    #[inline]
    pub fn is_free(self) -> bool {
        matches!(self, VertexState::Unassigned | VertexState::Detached)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct VertexRecord<V> {
    pub(crate) state: VertexState,
    pub(crate) data: V,
}

/// The boundary cycle a halfedge belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ccb {
    /// The outer boundary of the face.
    Perimeter(PerimeterId),
    /// A hole of the face.
    Hole(HoleId),
}

impl Ccb {
    #[inline]
    pub fn is_hole(self) -> bool {
        matches!(self, Ccb::Hole(_))
    }
}

impl From<PerimeterId> for Ccb {
    fn from(p: PerimeterId) -> Ccb {
        Ccb::Perimeter(p)
    }
}

impl From<HoleId> for Ccb {
    fn from(h: HoleId) -> Ccb {
        Ccb::Hole(h)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct HalfedgeRecord<H> {
    pub(crate) twin: HalfedgeId,
    pub(crate) next: HalfedgeId,
    pub(crate) prev: HalfedgeId,
    pub(crate) target: VertexId,
    pub(crate) ccb: Ccb,
    pub(crate) data: H,
}

#[derive(Clone, Debug)]
pub(crate) struct FaceRecord<F> {
    pub(crate) unbounded: bool,
    pub(crate) perimeters: Vec<PerimeterId>,
    pub(crate) holes: Vec<HoleId>,
    pub(crate) isolated: Vec<IsolatedVertexId>,
    pub(crate) data: F,
}

impl<F> FaceRecord<F> {
    pub(crate) fn new(unbounded: bool, data: F) -> Self {
        Self {
            unbounded,
            perimeters: Vec::new(),
            holes: Vec::new(),
            isolated: Vec::new(),
            data,
        }
    }
}

/// Owner face plus position in the owner's list.
///
/// `face` is `None` only for a hole detached by `remove_hole` and not yet
/// re-added somewhere.
#[derive(Clone, Debug)]
pub(crate) struct Membership<K: Collection> {
    pub(crate) face: Option<FaceId>,
    pub(crate) slot: usize,
    pub(crate) item: K::Item,
}

/// Gives generic code access to the face list a collection lives in.
pub(crate) trait FaceList: Collection {
    fn list<F>(face: &FaceRecord<F>) -> &Vec<MemberId<Self>>;
    fn list_mut<F>(face: &mut FaceRecord<F>) -> &mut Vec<MemberId<Self>>;
}

impl FaceList for Perimeters {
    #[inline]
    fn list<F>(face: &FaceRecord<F>) -> &Vec<MemberId<Self>> {
        &face.perimeters
    }
    #[inline]
    fn list_mut<F>(face: &mut FaceRecord<F>) -> &mut Vec<MemberId<Self>> {
        &mut face.perimeters
    }
}

impl FaceList for Holes {
    #[inline]
    fn list<F>(face: &FaceRecord<F>) -> &Vec<MemberId<Self>> {
        &face.holes
    }
    #[inline]
    fn list_mut<F>(face: &mut FaceRecord<F>) -> &mut Vec<MemberId<Self>> {
        &mut face.holes
    }
}

impl FaceList for IsolatedPoints {
    #[inline]
    fn list<F>(face: &FaceRecord<F>) -> &Vec<MemberId<Self>> {
        &face.isolated
    }
    #[inline]
    fn list_mut<F>(face: &mut FaceRecord<F>) -> &mut Vec<MemberId<Self>> {
        &mut face.isolated
    }
}
