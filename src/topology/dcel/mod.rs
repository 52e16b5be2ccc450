//! The DCEL container: sole owner of every vertex, halfedge, face and
//! boundary/isolated-vertex membership record.
//!
//! All cross references are arena handles. Mutating operations live in the
//! submodules:
//! - [`edges`]: `insert_edge`, `split_edge`, `merge_edge`, `remove_edge`
//! - [`faces`]: `split_face`, `merge_faces`
//! - [`members`]: holes, isolated vertices, vertex creation and removal
//!
//! Each of them validates its inputs first and only then relinks, so a
//! returned error means nothing changed. A successful mutation bumps the
//! structure's epoch, which is what detached [`Circulator`]s check.
//!
//! [`Circulator`]: crate::topology::circulator::Circulator

pub mod edges;
pub mod faces;
pub mod members;

pub use edges::{EdgeHints, EdgeRemoval};
pub use faces::{Containment, FaceSplit};

use super::arena::Arena;
use super::handle::{
    FaceId, FaceKey, HalfedgeId, HalfedgeKey, HoleId, Holes, IsolatedPoints, IsolatedVertexId,
    MemberId, MemberKey, PerimeterId, Perimeters, RecordId, VertexId, VertexKey,
};
use super::records::{
    Ccb, FaceList, FaceRecord, HalfedgeRecord, Membership, VertexRecord, VertexState,
};
use crate::dcel_error::{DcelError, DcelResult, InvariantError};

/// A doubly-connected edge list with holes and isolated vertices.
///
/// # Type Parameters
/// - `V`: per-vertex payload. Defaults to `()`.
/// - `H`: per-halfedge payload. Defaults to `()`.
/// - `F`: per-face payload. Defaults to `()`.
#[derive(Clone, Debug)]
pub struct Dcel<V = (), H = (), F = ()> {
    pub(crate) vertices: Arena<VertexKey, VertexRecord<V>>,
    pub(crate) halfedges: Arena<HalfedgeKey, HalfedgeRecord<H>>,
    pub(crate) faces: Arena<FaceKey, FaceRecord<F>>,
    pub(crate) perimeters: Arena<MemberKey, Membership<Perimeters>>,
    pub(crate) holes: Arena<MemberKey, Membership<Holes>>,
    pub(crate) isolated: Arena<MemberKey, Membership<IsolatedPoints>>,
    pub(crate) unbounded: FaceId,
    pub(crate) epoch: u64,
}

impl<V, H, F: Default> Default for Dcel<V, H, F> {
    fn default() -> Self {
        Self::with_unbounded_data(F::default())
    }
}

impl<V, H, F: Default> Dcel<V, H, F> {
    /// Creates an empty structure consisting of the unbounded face only.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, H, F> Dcel<V, H, F> {
    /// Creates an empty structure whose unbounded face carries `data`.
    pub fn with_unbounded_data(data: F) -> Self {
        let mut faces = Arena::new();
        let unbounded = FaceId(faces.insert(FaceRecord::new(true, data)));
        Self {
            vertices: Arena::new(),
            halfedges: Arena::new(),
            faces,
            perimeters: Arena::new(),
            holes: Arena::new(),
            isolated: Arena::new(),
            unbounded,
            epoch: 0,
        }
    }

    // -------------------------------------------------------------------------
    // Counts
    // -------------------------------------------------------------------------

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
    pub fn num_halfedges(&self) -> usize {
        self.halfedges.len()
    }
    /// Number of undirected edges (twin pairs).
    pub fn num_edges(&self) -> usize {
        self.halfedges.len() / 2
    }
    /// Number of faces including the unbounded face.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
    /// Number of holes over all faces, detached holes included.
    pub fn num_holes(&self) -> usize {
        self.holes.len()
    }
    pub fn num_isolated_vertices(&self) -> usize {
        self.isolated.len()
    }

    /// Mutation counter; bumped by every successful mutating operation.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    // -------------------------------------------------------------------------
    // Iteration
    // -------------------------------------------------------------------------

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|(h, _)| VertexId(h))
    }

    pub fn halfedges(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        self.halfedges.iter().map(|(h, _)| HalfedgeId(h))
    }

    /// One halfedge per undirected edge.
    pub fn edges(&self) -> impl Iterator<Item = HalfedgeId> + '_ {
        self.halfedges
            .iter()
            .filter(|(h, rec)| *h < rec.twin.0)
            .map(|(h, _)| HalfedgeId(h))
    }

    pub fn faces(&self) -> impl Iterator<Item = FaceId> + '_ {
        self.faces.iter().map(|(h, _)| FaceId(h))
    }

    // -------------------------------------------------------------------------
    // Checked record access
    // -------------------------------------------------------------------------

    #[inline]
    pub(crate) fn vertex_rec(&self, v: VertexId) -> DcelResult<&VertexRecord<V>> {
        self.vertices
            .get(v.0)
            .ok_or(DcelError::StaleHandle(v.into()))
    }

    #[inline]
    pub(crate) fn halfedge_rec(&self, h: HalfedgeId) -> DcelResult<&HalfedgeRecord<H>> {
        self.halfedges
            .get(h.0)
            .ok_or(DcelError::StaleHandle(h.into()))
    }

    #[inline]
    pub(crate) fn face_rec(&self, f: FaceId) -> DcelResult<&FaceRecord<F>> {
        self.faces.get(f.0).ok_or(DcelError::StaleHandle(f.into()))
    }

    #[inline]
    pub(crate) fn member_rec<K: MemberArena>(
        &self,
        id: MemberId<K>,
    ) -> DcelResult<&Membership<K>> {
        K::arena(self)
            .get(id.0)
            .ok_or(DcelError::StaleHandle(K::record(id)))
    }

    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(v.0)
    }
    pub fn contains_halfedge(&self, h: HalfedgeId) -> bool {
        self.halfedges.contains(h.0)
    }
    pub fn contains_face(&self, f: FaceId) -> bool {
        self.faces.contains(f.0)
    }

    // -------------------------------------------------------------------------
    // Vertex queries
    // -------------------------------------------------------------------------

    pub fn vertex_state(&self, v: VertexId) -> DcelResult<VertexState> {
        Ok(self.vertex_rec(v)?.state)
    }

    /// An incoming halfedge of `v`, if it has any edges.
    pub fn incident_halfedge(&self, v: VertexId) -> DcelResult<Option<HalfedgeId>> {
        match self.vertex_rec(v)?.state {
            VertexState::Incident(h) => Ok(Some(h)),
            VertexState::Unassigned => Err(InvariantError::UnassignedVertex(v).into()),
            _ => Ok(None),
        }
    }

    /// `true` if `v` has no incident edges.
    pub fn is_isolated(&self, v: VertexId) -> DcelResult<bool> {
        Ok(self.incident_halfedge(v)?.is_none())
    }

    /// The face `v` is isolated in, if any.
    pub fn isolated_face(&self, v: VertexId) -> DcelResult<Option<FaceId>> {
        match self.vertex_rec(v)?.state {
            VertexState::Isolated(rec) => Ok(self.member_rec(rec)?.face),
            VertexState::Unassigned => Err(InvariantError::UnassignedVertex(v).into()),
            _ => Ok(None),
        }
    }

    /// The isolated-vertex record of `v`, if it is isolated in a face.
    pub fn isolated_record(&self, v: VertexId) -> DcelResult<Option<IsolatedVertexId>> {
        match self.vertex_rec(v)?.state {
            VertexState::Isolated(rec) => Ok(Some(rec)),
            _ => Ok(None),
        }
    }

    /// Number of edges incident to `v` (a loop counts twice).
    pub fn degree(&self, v: VertexId) -> DcelResult<usize> {
        Ok(self.incoming_halfedges(v)?.count())
    }

    pub fn vertex_data(&self, v: VertexId) -> DcelResult<&V> {
        Ok(&self.vertex_rec(v)?.data)
    }

    pub fn vertex_data_mut(&mut self, v: VertexId) -> DcelResult<&mut V> {
        self.vertices
            .get_mut(v.0)
            .map(|rec| &mut rec.data)
            .ok_or(DcelError::StaleHandle(v.into()))
    }

    // -------------------------------------------------------------------------
    // Halfedge queries
    // -------------------------------------------------------------------------

    pub fn twin(&self, h: HalfedgeId) -> DcelResult<HalfedgeId> {
        Ok(self.halfedge_rec(h)?.twin)
    }

    pub fn next(&self, h: HalfedgeId) -> DcelResult<HalfedgeId> {
        Ok(self.halfedge_rec(h)?.next)
    }

    pub fn prev(&self, h: HalfedgeId) -> DcelResult<HalfedgeId> {
        Ok(self.halfedge_rec(h)?.prev)
    }

    pub fn target(&self, h: HalfedgeId) -> DcelResult<VertexId> {
        Ok(self.halfedge_rec(h)?.target)
    }

    pub fn source(&self, h: HalfedgeId) -> DcelResult<VertexId> {
        let twin = self.halfedge_rec(h)?.twin;
        self.target(twin)
    }

    /// The boundary cycle record `h` belongs to.
    pub fn ccb(&self, h: HalfedgeId) -> DcelResult<Ccb> {
        Ok(self.halfedge_rec(h)?.ccb)
    }

    /// The face lying to the left of `h`.
    pub fn face(&self, h: HalfedgeId) -> DcelResult<FaceId> {
        let ccb = self.halfedge_rec(h)?.ccb;
        self.ccb_face_checked(ccb)?
            .ok_or_else(|| InvariantError::DetachedCcb(h).into())
    }

    /// `true` if `h` lies on a hole rather than on its face's perimeter.
    pub fn is_on_hole(&self, h: HalfedgeId) -> DcelResult<bool> {
        Ok(self.halfedge_rec(h)?.ccb.is_hole())
    }

    pub fn halfedge_data(&self, h: HalfedgeId) -> DcelResult<&H> {
        Ok(&self.halfedge_rec(h)?.data)
    }

    pub fn halfedge_data_mut(&mut self, h: HalfedgeId) -> DcelResult<&mut H> {
        self.halfedges
            .get_mut(h.0)
            .map(|rec| &mut rec.data)
            .ok_or(DcelError::StaleHandle(h.into()))
    }

    // -------------------------------------------------------------------------
    // Face queries
    // -------------------------------------------------------------------------

    /// The single unbounded face.
    #[inline]
    pub fn unbounded_face(&self) -> FaceId {
        self.unbounded
    }

    pub fn is_unbounded(&self, f: FaceId) -> DcelResult<bool> {
        Ok(self.face_rec(f)?.unbounded)
    }

    /// Perimeter record of `f`; `None` for the unbounded face.
    pub fn perimeter(&self, f: FaceId) -> DcelResult<Option<PerimeterId>> {
        Ok(self.face_rec(f)?.perimeters.first().copied())
    }

    /// A halfedge on the outer boundary of `f`; `None` for the unbounded face.
    pub fn outer_boundary(&self, f: FaceId) -> DcelResult<Option<HalfedgeId>> {
        match self.perimeter(f)? {
            Some(p) => Ok(Some(self.member_rec(p)?.item)),
            None => Ok(None),
        }
    }

    /// Holes of `f`, in the order of the face's hole list.
    pub fn holes(&self, f: FaceId) -> DcelResult<impl Iterator<Item = HoleId> + '_> {
        Ok(self.face_rec(f)?.holes.iter().copied())
    }

    pub fn hole_count(&self, f: FaceId) -> DcelResult<usize> {
        Ok(self.face_rec(f)?.holes.len())
    }

    /// A halfedge on the boundary cycle of `hole`.
    pub fn hole_boundary(&self, hole: HoleId) -> DcelResult<HalfedgeId> {
        Ok(self.member_rec(hole)?.item)
    }

    /// The face containing `hole`; `None` while it is detached.
    pub fn hole_face(&self, hole: HoleId) -> DcelResult<Option<FaceId>> {
        Ok(self.member_rec(hole)?.face)
    }

    /// Vertices isolated inside `f`.
    pub fn isolated_vertices(&self, f: FaceId) -> DcelResult<impl Iterator<Item = VertexId> + '_> {
        let rec = self.face_rec(f)?;
        Ok(rec.isolated.iter().map(|&iso| self.isolated[iso.0].item))
    }

    /// Isolated-vertex records of `f`.
    pub fn isolated_records(
        &self,
        f: FaceId,
    ) -> DcelResult<impl Iterator<Item = IsolatedVertexId> + '_> {
        Ok(self.face_rec(f)?.isolated.iter().copied())
    }

    pub fn isolated_vertex(&self, rec: IsolatedVertexId) -> DcelResult<VertexId> {
        Ok(self.member_rec(rec)?.item)
    }

    pub fn isolated_vertex_face(&self, rec: IsolatedVertexId) -> DcelResult<Option<FaceId>> {
        Ok(self.member_rec(rec)?.face)
    }

    pub fn face_data(&self, f: FaceId) -> DcelResult<&F> {
        Ok(&self.face_rec(f)?.data)
    }

    pub fn face_data_mut(&mut self, f: FaceId) -> DcelResult<&mut F> {
        self.faces
            .get_mut(f.0)
            .map(|rec| &mut rec.data)
            .ok_or(DcelError::StaleHandle(f.into()))
    }

    // -------------------------------------------------------------------------
    // Internal linking helpers (callers have validated every handle)
    // -------------------------------------------------------------------------

    /// `a.next = b` and `b.prev = a`.
    #[inline]
    pub(crate) fn set_next(&mut self, a: HalfedgeId, b: HalfedgeId) {
        self.halfedges[a.0].next = b;
        self.halfedges[b.0].prev = a;
    }

    #[inline]
    pub(crate) fn he(&self, h: HalfedgeId) -> &HalfedgeRecord<H> {
        &self.halfedges[h.0]
    }

    #[inline]
    pub(crate) fn he_mut(&mut self, h: HalfedgeId) -> &mut HalfedgeRecord<H> {
        &mut self.halfedges[h.0]
    }

    /// Allocates a twin pair with `first.target == to`, `second.target == from`.
    /// Both halves are self-looped on `next`/`prev` until the caller links them.
    pub(crate) fn alloc_pair(
        &mut self,
        from: VertexId,
        to: VertexId,
        ccb: (Ccb, Ccb),
        data: (H, H),
    ) -> (HalfedgeId, HalfedgeId) {
        let placeholder = HalfedgeId::dangling();
        let first = HalfedgeId(self.halfedges.insert(HalfedgeRecord {
            twin: placeholder,
            next: placeholder,
            prev: placeholder,
            target: to,
            ccb: ccb.0,
            data: data.0,
        }));
        let second = HalfedgeId(self.halfedges.insert(HalfedgeRecord {
            twin: first,
            next: first,
            prev: first,
            target: from,
            ccb: ccb.1,
            data: data.1,
        }));
        let rec = self.he_mut(first);
        rec.twin = second;
        rec.next = second;
        rec.prev = second;
        let rec = self.he_mut(second);
        rec.next = first;
        rec.prev = first;
        (first, second)
    }

    pub(crate) fn free_pair(&mut self, h: HalfedgeId) {
        let twin = self.he(h).twin;
        self.halfedges.remove(h.0);
        self.halfedges.remove(twin.0);
    }

    /// Sets the CCB label of every halfedge on the cycle through `start`.
    pub(crate) fn relabel_cycle(&mut self, start: HalfedgeId, ccb: Ccb) {
        let mut cur = start;
        loop {
            let rec = self.he_mut(cur);
            rec.ccb = ccb;
            cur = rec.next;
            if cur == start {
                break;
            }
        }
    }

    /// `true` if `needle` lies on the cycle through `start`.
    #[cfg(test)]
    pub(crate) fn cycle_contains(&self, start: HalfedgeId, needle: HalfedgeId) -> bool {
        let mut cur = start;
        loop {
            if cur == needle {
                return true;
            }
            cur = self.he(cur).next;
            if cur == start {
                return false;
            }
        }
    }

    pub(crate) fn set_state(&mut self, v: VertexId, state: VertexState) {
        self.vertices[v.0].state = state;
    }

    /// Re-points the incident halfedge of `v` to `replacement` if it is `removed`.
    pub(crate) fn retarget_incident(
        &mut self,
        v: VertexId,
        removed: HalfedgeId,
        replacement: HalfedgeId,
    ) {
        if self.vertices[v.0].state == VertexState::Incident(removed) {
            self.vertices[v.0].state = VertexState::Incident(replacement);
        }
    }

    // -------------------------------------------------------------------------
    // CCB helpers
    // -------------------------------------------------------------------------

    pub(crate) fn ccb_face(&self, ccb: Ccb) -> Option<FaceId> {
        match ccb {
            Ccb::Perimeter(p) => self.perimeters[p.0].face,
            Ccb::Hole(h) => self.holes[h.0].face,
        }
    }

    fn ccb_face_checked(&self, ccb: Ccb) -> DcelResult<Option<FaceId>> {
        match ccb {
            Ccb::Perimeter(p) => Ok(self.member_rec(p)?.face),
            Ccb::Hole(h) => Ok(self.member_rec(h)?.face),
        }
    }

    pub(crate) fn ccb_rep(&self, ccb: Ccb) -> HalfedgeId {
        match ccb {
            Ccb::Perimeter(p) => self.perimeters[p.0].item,
            Ccb::Hole(h) => self.holes[h.0].item,
        }
    }

    pub(crate) fn set_ccb_rep(&mut self, ccb: Ccb, rep: HalfedgeId) {
        match ccb {
            Ccb::Perimeter(p) => self.perimeters[p.0].item = rep,
            Ccb::Hole(h) => self.holes[h.0].item = rep,
        }
    }

    /// Keeps the representative of `ccb` off a halfedge about to be freed.
    pub(crate) fn retarget_ccb_rep(&mut self, ccb: Ccb, removed: &[HalfedgeId], to: HalfedgeId) {
        if removed.contains(&self.ccb_rep(ccb)) {
            self.set_ccb_rep(ccb, to);
        }
    }

    /// Unlinks and frees a CCB membership record.
    pub(crate) fn free_ccb(&mut self, ccb: Ccb) {
        match ccb {
            Ccb::Perimeter(p) => {
                self.free_member(p);
            }
            Ccb::Hole(h) => {
                self.free_member(h);
            }
        }
    }

    // -------------------------------------------------------------------------
    // Generic membership bookkeeping
    // -------------------------------------------------------------------------

    /// Appends a new member for `item` to `face`'s list of kind `K`.
    pub(crate) fn attach<K: MemberArena>(&mut self, face: FaceId, item: K::Item) -> MemberId<K> {
        let slot = K::list(&self.faces[face.0]).len();
        let id = MemberId::from_key(K::arena_mut(self).insert(Membership {
            face: Some(face),
            slot,
            item,
        }));
        K::list_mut(&mut self.faces[face.0]).push(id);
        id
    }

    /// Removes `id` from its owner's list in O(1) (swap-remove, fixing the
    /// slot of the member that moved). The record itself stays allocated.
    pub(crate) fn unlink_member<K: MemberArena>(&mut self, id: MemberId<K>) {
        let (face, slot) = {
            let m = &K::arena(self)[id.0];
            (m.face, m.slot)
        };
        let Some(face) = face else {
            return;
        };
        let moved = {
            let list = K::list_mut(&mut self.faces[face.0]);
            debug_assert_eq!(list.get(slot), Some(&id), "membership slot out of sync");
            list.swap_remove(slot);
            list.get(slot).copied()
        };
        let arena = K::arena_mut(self);
        if let Some(moved) = moved {
            arena[moved.0].slot = slot;
        }
        arena[id.0].face = None;
    }

    /// Appends an unlinked member to `face`'s list.
    pub(crate) fn relink_member<K: MemberArena>(&mut self, id: MemberId<K>, face: FaceId) {
        let slot = {
            let list = K::list_mut(&mut self.faces[face.0]);
            list.push(id);
            list.len() - 1
        };
        let m = &mut K::arena_mut(self)[id.0];
        m.face = Some(face);
        m.slot = slot;
    }

    pub(crate) fn move_member<K: MemberArena>(&mut self, id: MemberId<K>, to: FaceId) {
        self.unlink_member(id);
        self.relink_member(id, to);
    }

    /// Unlinks and frees `id`, returning its item.
    pub(crate) fn free_member<K: MemberArena>(&mut self, id: MemberId<K>) -> K::Item {
        self.unlink_member(id);
        let item = K::arena(self)[id.0].item;
        K::arena_mut(self).remove(id.0);
        item
    }

    /// Moves every member of kind `K` from `from` to `to`.
    pub(crate) fn move_all<K: MemberArena>(&mut self, from: FaceId, to: FaceId) {
        let members: Vec<MemberId<K>> = K::list(&self.faces[from.0]).clone();
        for id in members {
            self.move_member(id, to);
        }
    }

    /// Bookkeeping after every successful mutation.
    pub(crate) fn touch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        crate::topology::_debug_invariants::debug_invariants!(self);
    }
}

/// Routes a collection marker to the arena holding its members.
pub(crate) trait MemberArena: FaceList {
    fn arena<V, H, F>(dcel: &Dcel<V, H, F>) -> &Arena<MemberKey, Membership<Self>>;
    fn arena_mut<V, H, F>(dcel: &mut Dcel<V, H, F>) -> &mut Arena<MemberKey, Membership<Self>>;
    fn record(id: MemberId<Self>) -> RecordId;
}

impl MemberArena for Perimeters {
    fn arena<V, H, F>(dcel: &Dcel<V, H, F>) -> &Arena<MemberKey, Membership<Self>> {
        &dcel.perimeters
    }
    fn arena_mut<V, H, F>(dcel: &mut Dcel<V, H, F>) -> &mut Arena<MemberKey, Membership<Self>> {
        &mut dcel.perimeters
    }
    fn record(id: MemberId<Self>) -> RecordId {
        RecordId::Perimeter(id)
    }
}

impl MemberArena for Holes {
    fn arena<V, H, F>(dcel: &Dcel<V, H, F>) -> &Arena<MemberKey, Membership<Self>> {
        &dcel.holes
    }
    fn arena_mut<V, H, F>(dcel: &mut Dcel<V, H, F>) -> &mut Arena<MemberKey, Membership<Self>> {
        &mut dcel.holes
    }
    fn record(id: MemberId<Self>) -> RecordId {
        RecordId::Hole(id)
    }
}

impl MemberArena for IsolatedPoints {
    fn arena<V, H, F>(dcel: &Dcel<V, H, F>) -> &Arena<MemberKey, Membership<Self>> {
        &dcel.isolated
    }
    fn arena_mut<V, H, F>(dcel: &mut Dcel<V, H, F>) -> &mut Arena<MemberKey, Membership<Self>> {
        &mut dcel.isolated
    }
    fn record(id: MemberId<Self>) -> RecordId {
        RecordId::IsolatedVertex(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_structure_has_only_the_unbounded_face() {
        let dcel: Dcel = Dcel::new();
        assert_eq!(dcel.num_faces(), 1);
        assert_eq!(dcel.num_vertices(), 0);
        assert_eq!(dcel.num_halfedges(), 0);
        let f = dcel.unbounded_face();
        assert!(dcel.is_unbounded(f).unwrap());
        assert_eq!(dcel.outer_boundary(f).unwrap(), None);
        assert_eq!(dcel.hole_count(f).unwrap(), 0);
        assert_eq!(dcel.epoch(), 0);
    }

    #[test]
    fn unlink_member_fixes_moved_slot() {
        let mut dcel: Dcel = Dcel::new();
        let f = dcel.unbounded_face();
        let vs: Vec<_> = (0..3).map(|_| dcel.create_vertex()).collect();
        let recs: Vec<IsolatedVertexId> = vs
            .iter()
            .map(|&v| dcel.add_isolated_vertex(f, v).unwrap())
            .collect();
        dcel.unlink_member(recs[0]);
        // the last record moved into slot 0
        assert_eq!(dcel.isolated[recs[2].0].slot, 0);
        assert_eq!(dcel.faces[f.0].isolated, vec![recs[2], recs[1]]);
        assert_eq!(dcel.isolated[recs[0].0].face, None);
    }

    #[test]
    fn stale_handles_are_reported() {
        let mut dcel: Dcel = Dcel::new();
        let v = dcel.create_vertex();
        dcel.remove_vertex(v).unwrap();
        assert_eq!(
            dcel.vertex_state(v),
            Err(DcelError::StaleHandle(RecordId::Vertex(v)))
        );
        assert!(!dcel.contains_vertex(v));
    }

    #[test]
    fn payloads_are_reachable() {
        let mut dcel: Dcel<&str, u8, String> = Dcel::with_unbounded_data("outside".to_string());
        let f = dcel.unbounded_face();
        assert_eq!(dcel.face_data(f).unwrap(), "outside");
        let v = dcel.create_vertex_with("a");
        *dcel.vertex_data_mut(v).unwrap() = "b";
        assert_eq!(*dcel.vertex_data(v).unwrap(), "b");
    }
}
