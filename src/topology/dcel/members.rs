//! Vertex lifecycle plus hole and isolated-vertex bookkeeping.
//!
//! These operations never touch next/prev links; they only move
//! membership records between faces.

use super::Dcel;
use crate::dcel_error::{DcelResult, InvariantError};
use crate::topology::handle::{FaceId, HalfedgeId, HoleId, IsolatedVertexId, VertexId};
use crate::topology::records::{Ccb, VertexRecord, VertexState};

impl<V, H, F> Dcel<V, H, F> {
    /// Creates a vertex carrying `V::default()`.
    ///
    /// The vertex starts out unassigned: it must become an edge endpoint or
    /// an isolated vertex before the structure passes a strict check.
    pub fn create_vertex(&mut self) -> VertexId
    where
        V: Default,
    {
        self.create_vertex_with(V::default())
    }

    pub fn create_vertex_with(&mut self, data: V) -> VertexId {
        let v = VertexId(self.vertices.insert(VertexRecord {
            state: VertexState::Unassigned,
            data,
        }));
        log::trace!("create_vertex {v}");
        self.touch();
        v
    }

    /// Deletes a vertex that has no edges and lies in no face, returning its
    /// payload.
    pub fn remove_vertex(&mut self, v: VertexId) -> DcelResult<V> {
        if !self.vertex_rec(v)?.state.is_free() {
            return Err(InvariantError::VertexInUse(v).into());
        }
        let rec = self
            .vertices
            .remove(v.0)
            .ok_or(InvariantError::VertexInUse(v))?;
        log::trace!("remove_vertex {v}");
        self.touch();
        Ok(rec.data)
    }

    /// Records the free vertex `v` as lying inside `f`.
    pub fn add_isolated_vertex(&mut self, f: FaceId, v: VertexId) -> DcelResult<IsolatedVertexId> {
        self.face_rec(f)?;
        if !self.vertex_rec(v)?.state.is_free() {
            return Err(InvariantError::VertexInUse(v).into());
        }
        let rec = self.attach(f, v);
        self.set_state(v, VertexState::Isolated(rec));
        log::trace!("add_isolated_vertex {v} in {f}");
        self.touch();
        Ok(rec)
    }

    /// Drops the isolated-vertex record; the vertex itself survives,
    /// detached from every face.
    pub fn remove_isolated_vertex(&mut self, rec: IsolatedVertexId) -> DcelResult<VertexId> {
        self.member_rec(rec)?;
        let v = self.free_member(rec);
        self.set_state(v, VertexState::Detached);
        log::trace!("remove_isolated_vertex {v}");
        self.touch();
        Ok(v)
    }

    pub fn move_isolated_vertex(&mut self, rec: IsolatedVertexId, to: FaceId) -> DcelResult<()> {
        let from = self.member_rec(rec)?.face;
        self.face_rec(to)?;
        self.move_member(rec, to);
        log::debug!("move_isolated_vertex {rec}: {from:?} -> {to}");
        self.touch();
        Ok(())
    }

    /// Re-attaches the hole containing `h` to face `f`.
    ///
    /// The hole must be detached (see [`Dcel::remove_hole`]); a halfedge on
    /// a perimeter is rejected.
    pub fn add_hole(&mut self, f: FaceId, h: HalfedgeId) -> DcelResult<HoleId> {
        self.face_rec(f)?;
        let Ccb::Hole(hole) = self.halfedge_rec(h)?.ccb else {
            return Err(InvariantError::NotAHole(h).into());
        };
        if self.member_rec(hole)?.face.is_some() {
            return Err(InvariantError::AlreadyAttached(h).into());
        }
        self.relink_member(hole, f);
        log::trace!("add_hole {hole} to {f}");
        self.touch();
        Ok(hole)
    }

    /// Detaches `hole` from its face and returns a halfedge on it.
    ///
    /// The boundary cycle stays intact and keeps its record, so it can be
    /// re-added with [`Dcel::add_hole`]. Until then the structure fails a
    /// strict check.
    pub fn remove_hole(&mut self, hole: HoleId) -> DcelResult<HalfedgeId> {
        let rec = self.member_rec(hole)?;
        let rep = rec.item;
        if rec.face.is_none() {
            return Err(InvariantError::DetachedCcb(rep).into());
        }
        self.unlink_member(hole);
        log::trace!("remove_hole {hole}");
        self.touch();
        Ok(rep)
    }

    pub fn move_hole(&mut self, hole: HoleId, to: FaceId) -> DcelResult<()> {
        let rec = self.member_rec(hole)?;
        if rec.face.is_none() {
            return Err(InvariantError::DetachedCcb(rec.item).into());
        }
        let from = rec.face;
        self.face_rec(to)?;
        self.move_member(hole, to);
        log::debug!("move_hole {hole}: {from:?} -> {to}");
        self.touch();
        Ok(())
    }
}
