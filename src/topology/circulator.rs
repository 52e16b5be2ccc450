//! Circulators: walks around a boundary cycle or around a vertex.
//!
//! Two flavours:
//! - Borrowing iterators ([`CcbHalfedges`], [`IncomingHalfedges`]) hold a
//!   shared borrow of the [`Dcel`], so the borrow checker already rules out
//!   mutation while they run.
//! - [`Circulator`] is a detached cursor (a few handles plus the epoch it was
//!   created at). It can be kept across calls and steps in both directions;
//!   any successful mutation in between makes it fail with
//!   [`DcelError::StaleCirculator`].
//!
//! Both walks are bounded by the number of halfedges, so a corrupted cycle
//! cannot make them loop forever.

use crate::dcel_error::{DcelError, DcelResult, InvariantError};
use crate::topology::dcel::Dcel;
use crate::topology::handle::{FaceId, HalfedgeId, HoleId, VertexId};

/// Halfedges of one boundary cycle, following `next`.
pub struct CcbHalfedges<'a, V, H, F> {
    dcel: &'a Dcel<V, H, F>,
    start: HalfedgeId,
    current: Option<HalfedgeId>,
    remaining: usize,
}

impl<V, H, F> Iterator for CcbHalfedges<'_, V, H, F> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<HalfedgeId> {
        let cur = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;
        let next = self.dcel.halfedges.get(cur.0).map(|rec| rec.next);
        self.current = next.filter(|&n| n != self.start);
        Some(cur)
    }
}

/// Incoming halfedges of one vertex, in rotation order (`h -> h.next.twin`).
pub struct IncomingHalfedges<'a, V, H, F> {
    dcel: &'a Dcel<V, H, F>,
    start: HalfedgeId,
    current: Option<HalfedgeId>,
    remaining: usize,
}

impl<V, H, F> Iterator for IncomingHalfedges<'_, V, H, F> {
    type Item = HalfedgeId;

    fn next(&mut self) -> Option<HalfedgeId> {
        let cur = self.current?;
        if self.remaining == 0 {
            self.current = None;
            return None;
        }
        self.remaining -= 1;
        let next = self
            .dcel
            .halfedges
            .get(cur.0)
            .and_then(|rec| self.dcel.halfedges.get(rec.next.0))
            .map(|rec| rec.twin);
        self.current = next.filter(|&n| n != self.start);
        Some(cur)
    }
}

impl<V, H, F> Dcel<V, H, F> {
    /// Walks the boundary cycle through `h`, starting at `h`.
    pub fn ccb_halfedges(&self, h: HalfedgeId) -> DcelResult<CcbHalfedges<'_, V, H, F>> {
        self.halfedge_rec(h)?;
        Ok(CcbHalfedges {
            dcel: self,
            start: h,
            current: Some(h),
            remaining: self.num_halfedges(),
        })
    }

    /// Walks the halfedges pointing into `v`. Empty for a vertex without
    /// edges.
    pub fn incoming_halfedges(&self, v: VertexId) -> DcelResult<IncomingHalfedges<'_, V, H, F>> {
        let start = self.incident_halfedge(v)?;
        Ok(IncomingHalfedges {
            dcel: self,
            start: start.unwrap_or(HalfedgeId::dangling()),
            current: start,
            remaining: self.num_halfedges(),
        })
    }

    /// Halfedges leaving `v`, in rotation order.
    pub fn outgoing_halfedges(
        &self,
        v: VertexId,
    ) -> DcelResult<impl Iterator<Item = HalfedgeId> + '_> {
        Ok(self
            .incoming_halfedges(v)?
            .filter_map(move |h| self.halfedges.get(h.0).map(|rec| rec.twin)))
    }

    /// Vertices adjacent to `v`, one per incident halfedge.
    pub fn neighbors(&self, v: VertexId) -> DcelResult<impl Iterator<Item = VertexId> + '_> {
        Ok(self
            .outgoing_halfedges(v)?
            .filter_map(move |h| self.halfedges.get(h.0).map(|rec| rec.target)))
    }

    /// The halfedges along the outer boundary of `f`; empty for the
    /// unbounded face.
    pub fn perimeter_halfedges(&self, f: FaceId) -> DcelResult<Vec<HalfedgeId>> {
        match self.outer_boundary(f)? {
            Some(h) => Ok(self.ccb_halfedges(h)?.collect()),
            None => Ok(Vec::new()),
        }
    }

    pub fn hole_halfedges(&self, hole: HoleId) -> DcelResult<CcbHalfedges<'_, V, H, F>> {
        let rep = self.hole_boundary(hole)?;
        self.ccb_halfedges(rep)
    }

    /// Detached cursor over the boundary cycle through `h`.
    pub fn ccb_circulator(&self, h: HalfedgeId) -> DcelResult<Circulator> {
        self.halfedge_rec(h)?;
        Ok(Circulator::new(CirculatorKind::Ccb, h, self.epoch))
    }

    /// Detached cursor over the incoming halfedges of `v`; `None` if `v` has
    /// no edges.
    pub fn vertex_circulator(&self, v: VertexId) -> DcelResult<Option<Circulator>> {
        Ok(self
            .incident_halfedge(v)?
            .map(|h| Circulator::new(CirculatorKind::Vertex, h, self.epoch)))
    }
}

/// What a [`Circulator`] walks around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CirculatorKind {
    /// A boundary cycle, stepping along `next`/`prev`.
    Ccb,
    /// The incoming halfedges of a vertex.
    Vertex,
}

/// A cursor positioned on one halfedge of a cycle.
///
/// Two circulators compare equal when they walk the same kind of cycle and
/// sit on the same halfedge, regardless of where they started.
#[derive(Copy, Clone, Debug)]
pub struct Circulator {
    kind: CirculatorKind,
    start: HalfedgeId,
    current: HalfedgeId,
    created: u64,
}

impl PartialEq for Circulator {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.current == other.current
    }
}

impl Eq for Circulator {}

impl Circulator {
    fn new(kind: CirculatorKind, start: HalfedgeId, created: u64) -> Self {
        Self {
            kind,
            start,
            current: start,
            created,
        }
    }

    #[inline]
    pub fn kind(&self) -> CirculatorKind {
        self.kind
    }

    #[inline]
    pub fn current(&self) -> HalfedgeId {
        self.current
    }

    #[inline]
    pub fn start(&self) -> HalfedgeId {
        self.start
    }

    #[inline]
    pub fn is_at_start(&self) -> bool {
        self.current == self.start
    }

    pub fn restart(&mut self) {
        self.current = self.start;
    }

    fn check<V, H, F>(&self, dcel: &Dcel<V, H, F>) -> DcelResult<()> {
        if self.created != dcel.epoch() {
            return Err(DcelError::StaleCirculator {
                created: self.created,
                current: dcel.epoch(),
            });
        }
        Ok(())
    }

    /// Moves one step forward and returns the new position.
    pub fn advance<V, H, F>(&mut self, dcel: &Dcel<V, H, F>) -> DcelResult<HalfedgeId> {
        self.check(dcel)?;
        let rec = dcel.halfedge_rec(self.current)?;
        self.current = match self.kind {
            CirculatorKind::Ccb => rec.next,
            CirculatorKind::Vertex => dcel.halfedge_rec(rec.next)?.twin,
        };
        Ok(self.current)
    }

    /// Moves one step backward and returns the new position.
    pub fn retreat<V, H, F>(&mut self, dcel: &Dcel<V, H, F>) -> DcelResult<HalfedgeId> {
        self.check(dcel)?;
        let rec = dcel.halfedge_rec(self.current)?;
        self.current = match self.kind {
            CirculatorKind::Ccb => rec.prev,
            CirculatorKind::Vertex => dcel.halfedge_rec(rec.twin)?.prev,
        };
        Ok(self.current)
    }

    /// Moves `n` steps, backward for negative `n`.
    pub fn step<V, H, F>(&mut self, dcel: &Dcel<V, H, F>, n: isize) -> DcelResult<HalfedgeId> {
        self.check(dcel)?;
        for _ in 0..n.unsigned_abs() {
            if n < 0 {
                self.retreat(dcel)?;
            } else {
                self.advance(dcel)?;
            }
        }
        Ok(self.current)
    }

    /// One full turn from the current position, current halfedge first.
    pub fn collect<V, H, F>(&self, dcel: &Dcel<V, H, F>) -> DcelResult<Vec<HalfedgeId>> {
        self.check(dcel)?;
        let mut cursor = *self;
        let mut out = vec![cursor.current];
        for _ in 0..dcel.num_halfedges() {
            let h = cursor.advance(dcel)?;
            if h == self.current {
                return Ok(out);
            }
            out.push(h);
        }
        Err(InvariantError::InconsistentCcb(self.current).into())
    }
}
