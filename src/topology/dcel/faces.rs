//! Face-level mutations: closing a cycle into a new face and removing the
//! edge between two faces.

use super::Dcel;
use crate::dcel_error::{DcelResult, InvariantError};
use crate::topology::handle::{
    FaceId, HalfedgeId, HoleId, Holes, IsolatedPoints, IsolatedVertexId, Perimeters, VertexId,
};
use crate::topology::records::{Ccb, FaceRecord, VertexState};

/// Which holes and isolated vertices of the split face end up inside the
/// new face.
///
/// Deciding containment is geometry; the caller does it and hands the
/// answer in. Holes are named by any halfedge on their boundary cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Containment {
    pub holes: Vec<HalfedgeId>,
    pub isolated_vertices: Vec<VertexId>,
}

impl Containment {
    /// Nothing moves into the new face.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Result of [`Dcel::split_face`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceSplit {
    /// The newly created face.
    pub face: FaceId,
    /// The new halfedge bounding `face`, directed from `target(h1)` to
    /// `target(h2)`.
    pub halfedge: HalfedgeId,
    /// Its twin, left on the original face's side.
    pub twin: HalfedgeId,
}

impl<V, H, F: Clone> Dcel<V, H, F> {
    /// Closes a cycle by connecting `target(h1)` to `target(h2)`, where both
    /// halfedges lie on the same boundary cycle of `f`.
    ///
    /// The part of the cycle running from `h2.next` around to `h1`, closed by
    /// the new halfedge, becomes the perimeter of a new face; the rest stays
    /// with `f`. The new face copies `f`'s payload. Holes and isolated
    /// vertices listed in `inside` move to the new face.
    pub fn split_face(
        &mut self,
        f: FaceId,
        h1: HalfedgeId,
        h2: HalfedgeId,
        inside: &Containment,
    ) -> DcelResult<FaceSplit>
    where
        H: Default,
    {
        self.split_face_with(f, h1, h2, inside, (H::default(), H::default()))
    }

    /// Like [`Dcel::split_face`] with explicit payloads for the new
    /// halfedge and its twin.
    pub fn split_face_with(
        &mut self,
        f: FaceId,
        h1: HalfedgeId,
        h2: HalfedgeId,
        inside: &Containment,
        data: (H, H),
    ) -> DcelResult<FaceSplit> {
        self.face_rec(f)?;
        let c1 = self.halfedge_rec(h1)?.ccb;
        let c2 = self.halfedge_rec(h2)?.ccb;
        if h1 == h2 {
            return Err(InvariantError::DegenerateSplit(h1).into());
        }
        if self.ccb_face(c1) != Some(f) {
            return Err(InvariantError::NotOnFace { halfedge: h1, face: f }.into());
        }
        if c1 != c2 {
            return Err(if self.ccb_face(c2) != Some(f) {
                InvariantError::NotOnFace { halfedge: h2, face: f }
            } else {
                InvariantError::NotOnCommonCycle(h1, h2)
            }
            .into());
        }
        let moved_holes = self.contained_holes(f, c1, &inside.holes)?;
        let moved_isolated = self.contained_isolated(f, &inside.isolated_vertices)?;

        let v1 = self.he(h1).target;
        let v2 = self.he(h2).target;
        let face_data = self.faces[f.0].data.clone();
        let face = FaceId(self.faces.insert(FaceRecord::new(false, face_data)));
        let perimeter = Ccb::Perimeter(self.attach::<Perimeters>(face, HalfedgeId::dangling()));
        let (he1, he2) = self.alloc_pair(v1, v2, (perimeter, c1), data);
        let n1 = self.he(h1).next;
        let n2 = self.he(h2).next;
        self.set_next(h1, he1);
        self.set_next(he1, n2);
        self.set_next(h2, he2);
        self.set_next(he2, n1);
        self.set_ccb_rep(perimeter, he1);
        self.relabel_cycle(he1, perimeter);
        self.set_ccb_rep(c1, he2);

        for hole in moved_holes {
            self.move_member(hole, face);
        }
        for iso in moved_isolated {
            self.move_member(iso, face);
        }

        log::debug!("split_face {f}: new {face} bounded by {he1}");
        self.touch();
        Ok(FaceSplit {
            face,
            halfedge: he1,
            twin: he2,
        })
    }

    fn contained_holes(
        &self,
        f: FaceId,
        split: Ccb,
        named: &[HalfedgeId],
    ) -> DcelResult<Vec<HoleId>> {
        let mut out: Vec<HoleId> = Vec::with_capacity(named.len());
        for &h in named {
            let ccb = self.halfedge_rec(h)?.ccb;
            let Ccb::Hole(hole) = ccb else {
                return Err(InvariantError::NotAHole(h).into());
            };
            if ccb == split {
                return Err(InvariantError::NotAHole(h).into());
            }
            if self.member_rec(hole)?.face != Some(f) {
                return Err(InvariantError::NotOnFace { halfedge: h, face: f }.into());
            }
            if !out.contains(&hole) {
                out.push(hole);
            }
        }
        Ok(out)
    }

    fn contained_isolated(&self, f: FaceId, named: &[VertexId]) -> DcelResult<Vec<IsolatedVertexId>> {
        let mut out: Vec<IsolatedVertexId> = Vec::with_capacity(named.len());
        for &v in named {
            let rec = match self.vertex_rec(v)?.state {
                VertexState::Isolated(rec) if self.member_rec(rec)?.face == Some(f) => rec,
                _ => return Err(InvariantError::NotIsolatedIn { vertex: v, face: f }.into()),
            };
            if !out.contains(&rec) {
                out.push(rec);
            }
        }
        Ok(out)
    }
}

impl<V, H, F> Dcel<V, H, F> {
    /// Removes the edge of `h`, which must separate `f1` from `f2`, and
    /// merges the two faces into one.
    ///
    /// `f1` survives unless `f2` is the unbounded face; the other face is
    /// removed together with its payload, its holes and isolated vertices
    /// moving to the survivor. Returns the surviving face.
    pub fn merge_faces(&mut self, f1: FaceId, f2: FaceId, h: HalfedgeId) -> DcelResult<FaceId> {
        self.face_rec(f1)?;
        self.face_rec(f2)?;
        if f1 == f2 {
            return Err(InvariantError::SameFace(f1).into());
        }
        let t = self.halfedge_rec(h)?.twin;
        self.halfedge_rec(t)?;
        let (ch, ct) = (self.he(h).ccb, self.he(t).ccb);
        let left = self.ccb_face(ch).ok_or(InvariantError::DetachedCcb(h))?;
        let right = self.ccb_face(ct).ok_or(InvariantError::DetachedCcb(t))?;
        let separates = (left == f1 && right == f2) || (left == f2 && right == f1);
        if !separates {
            return Err(InvariantError::NotSeparating { halfedge: h, f1, f2 }.into());
        }

        let (survivor, victim) = if self.faces[f2.0].unbounded {
            (f2, f1)
        } else {
            (f1, f2)
        };
        // A hole stays a hole of the merged face; between two perimeters the
        // survivor's wins.
        let (keep, drop, drop_start) = match (ch, ct) {
            (Ccb::Hole(_), _) => (ch, ct, t),
            (_, Ccb::Hole(_)) => (ct, ch, h),
            _ if left == survivor => (ch, ct, t),
            _ => (ct, ch, h),
        };

        let u = self.he(t).target;
        let w = self.he(h).target;
        let (hn, hp) = (self.he(h).next, self.he(h).prev);
        let (tn, tp) = (self.he(t).next, self.he(t).prev);
        self.relabel_cycle(drop_start, keep);
        let mut freed = None;
        match (hn == h, tn == t) {
            // A lone loop: both cycles vanish and its vertex is left bare.
            (true, true) => {
                self.free_ccb(keep);
                freed = Some(w);
            }
            (true, false) => {
                self.set_next(tp, tn);
                self.retarget_incident(w, h, tp);
                self.retarget_incident(u, t, tp);
                self.retarget_ccb_rep(keep, &[h, t], tp);
            }
            (false, true) => {
                self.set_next(hp, hn);
                self.retarget_incident(w, h, hp);
                self.retarget_incident(u, t, hp);
                self.retarget_ccb_rep(keep, &[h, t], hp);
            }
            (false, false) => {
                self.set_next(hp, tn);
                self.set_next(tp, hn);
                self.retarget_incident(w, h, tp);
                self.retarget_incident(u, t, hp);
                self.retarget_ccb_rep(keep, &[h, t], hp);
            }
        }
        self.free_ccb(drop);
        self.free_pair(h);

        self.move_all::<Perimeters>(victim, survivor);
        self.move_all::<Holes>(victim, survivor);
        self.move_all::<IsolatedPoints>(victim, survivor);
        self.faces.remove(victim.0);
        if let Some(v) = freed {
            let rec = self.attach::<IsolatedPoints>(survivor, v);
            self.set_state(v, VertexState::Isolated(rec));
        }

        log::debug!("merge_faces: {victim} merged into {survivor} across {h}");
        self.touch();
        Ok(survivor)
    }
}
