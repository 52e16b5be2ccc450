//! Edge-level mutations: insertion, subdivision, fusion and removal.
//!
//! Conventions: a vertex stores one *incoming* halfedge, and a new edge
//! attaches at a vertex `v` right after a caller-supplied predecessor `p`
//! with `p.target == v` (the new outgoing halfedge becomes `p.next`). The
//! core never decides angular order itself.

use super::Dcel;
use crate::dcel_error::{DcelError, DcelResult, InvariantError};
use crate::topology::handle::{
    FaceId, HalfedgeId, HoleId, Holes, IsolatedPoints, IsolatedVertexId, VertexId,
};
use crate::topology::records::{Ccb, VertexState};

/// Where a new edge attaches.
///
/// `pred1`/`pred2` name the halfedge after which the new edge is spliced
/// into the rotation of `v1`/`v2`; they are required for endpoints that
/// already have edges and forbidden for endpoints that do not. `face` pins
/// the face for an edge between two free vertices (defaults to the
/// unbounded face).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeHints {
    pub pred1: Option<HalfedgeId>,
    pub pred2: Option<HalfedgeId>,
    pub face: Option<FaceId>,
}

impl EdgeHints {
    /// An edge between two free vertices inside `face`.
    pub fn in_face(face: FaceId) -> Self {
        Self {
            face: Some(face),
            ..Self::default()
        }
    }

    /// An edge attached after the given predecessors.
    pub fn after(pred1: Option<HalfedgeId>, pred2: Option<HalfedgeId>) -> Self {
        Self {
            pred1,
            pred2,
            face: None,
        }
    }
}

/// What `remove_edge` changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRemoval {
    /// The face the edge lay in.
    pub face: FaceId,
    /// Endpoints left without edges, now isolated in `face`.
    pub isolated: Vec<VertexId>,
    /// The hole split off when the edge was a bridge.
    pub new_hole: Option<HoleId>,
}

/// A validated endpoint of an edge about to be inserted.
#[derive(Copy, Clone, Debug)]
enum End {
    Free {
        iso: Option<IsolatedVertexId>,
        face: Option<FaceId>,
    },
    Attached {
        pred: HalfedgeId,
        ccb: Ccb,
        face: FaceId,
    },
}

impl End {
    fn face(self) -> Option<FaceId> {
        match self {
            End::Free { face, .. } => face,
            End::Attached { face, .. } => Some(face),
        }
    }
}

/// All `Some` faces must coincide.
fn agree(faces: [Option<FaceId>; 3]) -> DcelResult<Option<FaceId>> {
    let mut found: Option<FaceId> = None;
    for f in faces.into_iter().flatten() {
        match found {
            Some(expected) if expected != f => {
                return Err(InvariantError::FaceMismatch { expected, found: f }.into());
            }
            _ => found = Some(f),
        }
    }
    Ok(found)
}

impl<V, H: Clone, F> Dcel<V, H, F> {
    fn resolve_end(&self, v: VertexId, pred: Option<HalfedgeId>) -> DcelResult<End> {
        let state = self.vertex_rec(v)?.state;
        if let VertexState::Incident(_) = state {
            let Some(p) = pred else {
                return Err(DcelError::DisconnectedTopology {
                    vertex: v,
                    halfedge: None,
                });
            };
            let rec = self.halfedge_rec(p)?;
            if rec.target != v {
                return Err(DcelError::DisconnectedTopology {
                    vertex: v,
                    halfedge: Some(p),
                });
            }
            let face = self
                .ccb_face(rec.ccb)
                .ok_or(InvariantError::DetachedCcb(p))?;
            return Ok(End::Attached {
                pred: p,
                ccb: rec.ccb,
                face,
            });
        }
        if let Some(p) = pred {
            return Err(DcelError::DisconnectedTopology {
                vertex: v,
                halfedge: Some(p),
            });
        }
        match state {
            VertexState::Isolated(iso) => Ok(End::Free {
                iso: Some(iso),
                face: self.member_rec(iso)?.face,
            }),
            _ => Ok(End::Free {
                iso: None,
                face: None,
            }),
        }
    }

    /// Inserts an edge between `v1` and `v2` that does not create a face.
    ///
    /// Returns `(h, h.twin)` with `h` directed from `v1` to `v2`. New halfedges
    /// carry `H::default()`.
    ///
    /// # Errors
    /// - [`DcelError::DisconnectedTopology`] if a predecessor hint is missing,
    ///   superfluous, or does not point at its vertex.
    /// - [`InvariantError::FaceMismatch`] if the hints disagree on the face.
    /// - [`InvariantError::WouldSplitFace`] if both predecessors lie on one
    ///   boundary cycle; that insertion is [`Dcel::split_face`].
    /// - [`InvariantError::SelfLoop`] for `v1 == v2` without edges.
    pub fn insert_edge(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        hints: EdgeHints,
    ) -> DcelResult<(HalfedgeId, HalfedgeId)>
    where
        H: Default,
    {
        self.insert_edge_with(v1, v2, hints, H::default())
    }

    /// Like [`Dcel::insert_edge`], cloning `data` onto both halfedges.
    pub fn insert_edge_with(
        &mut self,
        v1: VertexId,
        v2: VertexId,
        hints: EdgeHints,
        data: H,
    ) -> DcelResult<(HalfedgeId, HalfedgeId)> {
        let end1 = self.resolve_end(v1, hints.pred1)?;
        let end2 = self.resolve_end(v2, hints.pred2)?;
        if let Some(f) = hints.face {
            self.face_rec(f)?;
        }
        let face = agree([end1.face(), end2.face(), hints.face])?.unwrap_or(self.unbounded);

        let (he1, he2) = match (end1, end2) {
            (End::Free { iso: i1, .. }, End::Free { iso: i2, .. }) => {
                if v1 == v2 {
                    return Err(InvariantError::SelfLoop(v1).into());
                }
                self.drop_isolation(i1);
                self.drop_isolation(i2);
                let hole = Ccb::Hole(self.attach::<Holes>(face, HalfedgeId::dangling()));
                let (he1, he2) = self.alloc_pair(v1, v2, (hole, hole), (data.clone(), data));
                self.set_ccb_rep(hole, he1);
                self.set_state(v1, VertexState::Incident(he2));
                self.set_state(v2, VertexState::Incident(he1));
                (he1, he2)
            }
            (End::Attached { pred: p1, ccb, .. }, End::Free { iso: i2, .. }) => {
                self.drop_isolation(i2);
                let (he1, he2) = self.alloc_pair(v1, v2, (ccb, ccb), (data.clone(), data));
                let n1 = self.he(p1).next;
                self.set_next(p1, he1);
                self.set_next(he1, he2);
                self.set_next(he2, n1);
                self.set_state(v2, VertexState::Incident(he1));
                (he1, he2)
            }
            (End::Free { iso: i1, .. }, End::Attached { pred: p2, ccb, .. }) => {
                self.drop_isolation(i1);
                let (he1, he2) = self.alloc_pair(v1, v2, (ccb, ccb), (data.clone(), data));
                let n2 = self.he(p2).next;
                self.set_next(p2, he2);
                self.set_next(he2, he1);
                self.set_next(he1, n2);
                self.set_state(v1, VertexState::Incident(he2));
                (he1, he2)
            }
            (
                End::Attached {
                    pred: p1, ccb: c1, ..
                },
                End::Attached {
                    pred: p2, ccb: c2, ..
                },
            ) => {
                if c1 == c2 {
                    return Err(InvariantError::WouldSplitFace(p1, p2).into());
                }
                // A perimeter absorbs a hole; of two holes the first survives.
                let (keep, drop, drop_start) = match (c1, c2) {
                    (Ccb::Hole(_), Ccb::Perimeter(_)) => (c2, c1, p1),
                    _ => (c1, c2, p2),
                };
                self.relabel_cycle(drop_start, keep);
                self.free_ccb(drop);
                let (he1, he2) = self.alloc_pair(v1, v2, (keep, keep), (data.clone(), data));
                let n1 = self.he(p1).next;
                let n2 = self.he(p2).next;
                self.set_next(p1, he1);
                self.set_next(he1, n2);
                self.set_next(p2, he2);
                self.set_next(he2, n1);
                (he1, he2)
            }
        };

        log::trace!("insert_edge {v1} -> {v2} as {he1}/{he2} in {face}");
        self.touch();
        Ok((he1, he2))
    }

    fn drop_isolation(&mut self, iso: Option<IsolatedVertexId>) {
        if let Some(iso) = iso {
            self.free_member(iso);
        }
    }

    /// Subdivides the edge of `h` at the free (or isolated) vertex `v`.
    ///
    /// With `h: u → w`, returns `(u → v, v → w)`; `h` itself becomes `u → v`
    /// and the new halves copy the payloads of `h` and its twin. Face
    /// assignment and next/prev order on both sides are preserved.
    pub fn split_edge(&mut self, h: HalfedgeId, v: VertexId) -> DcelResult<(HalfedgeId, HalfedgeId)> {
        let t = self.halfedge_rec(h)?.twin;
        if self.halfedge_rec(t)?.twin != h {
            return Err(InvariantError::BrokenTwin(h).into());
        }
        let iso = match self.vertex_rec(v)?.state {
            VertexState::Incident(_) => return Err(InvariantError::VertexInUse(v).into()),
            VertexState::Isolated(iso) => {
                let inside = self.member_rec(iso)?.face;
                let left = self.ccb_face(self.he(h).ccb);
                let right = self.ccb_face(self.he(t).ccb);
                if let Some(found) = inside {
                    if Some(found) != left && Some(found) != right {
                        let expected = left.or(right).unwrap_or(self.unbounded);
                        return Err(InvariantError::FaceMismatch { expected, found }.into());
                    }
                }
                Some(iso)
            }
            VertexState::Unassigned | VertexState::Detached => None,
        };

        self.drop_isolation(iso);
        let w = self.he(h).target;
        let (hc, tc) = (self.he(h).ccb, self.he(t).ccb);
        let data = (self.he(h).data.clone(), self.he(t).data.clone());
        let (h_new, t_new) = self.alloc_pair(v, w, (hc, tc), data);
        // t_new goes in front of t first, so a dangling `w` (h.next == t)
        // ends up as h -> h_new -> t_new -> t.
        let tp = self.he(t).prev;
        self.set_next(tp, t_new);
        self.set_next(t_new, t);
        let hn = self.he(h).next;
        self.set_next(h_new, hn);
        self.set_next(h, h_new);
        self.he_mut(h).target = v;
        self.retarget_incident(w, h, h_new);
        self.set_state(v, VertexState::Incident(h));

        log::trace!("split_edge {h} at {v}: new halves {h_new}/{t_new}");
        self.touch();
        Ok((h, h_new))
    }

    /// Fuses `h1` and `h2 = h1.next` across their shared degree-2 vertex,
    /// which is removed together with `h2` and its twin. Inverse of
    /// [`Dcel::split_edge`]; returns `h1`, now spanning the fused edge.
    pub fn merge_edge(&mut self, h1: HalfedgeId, h2: HalfedgeId) -> DcelResult<HalfedgeId> {
        let r1 = self.halfedge_rec(h1)?;
        let (t1, next1, v) = (r1.twin, r1.next, r1.target);
        let t2 = self.halfedge_rec(h2)?.twin;
        if h1 == h2 || next1 != h2 || h2 == t1 || self.he(t2).next != t1 {
            return Err(InvariantError::NotMergeable(h1, h2).into());
        }

        let w = self.he(h2).target;
        let hn = match self.he(h2).next {
            n if n == t2 => t1,
            n => n,
        };
        let tp = match self.he(t2).prev {
            p if p == h2 => h1,
            p => p,
        };
        let (c1, ct) = (self.he(h1).ccb, self.he(t1).ccb);
        self.retarget_ccb_rep(c1, &[h2, t2], h1);
        self.retarget_ccb_rep(ct, &[h2, t2], t1);
        self.set_next(h1, hn);
        self.set_next(tp, t1);
        self.he_mut(h1).target = w;
        self.retarget_incident(w, h2, h1);
        self.free_pair(h2);
        self.vertices.remove(v.0);

        log::trace!("merge_edge {h1} + {h2}: removed {v}");
        self.touch();
        Ok(h1)
    }

    /// Removes the edge of `h` when both of its sides lie in the same face.
    ///
    /// Endpoints left without edges become isolated vertices of that face.
    /// If the edge is a bridge of its boundary cycle, the cycle on `h`'s
    /// source side keeps its role and the cycle on `h`'s target side becomes
    /// a new hole of the face. On a perimeter, `h` must therefore point from
    /// the outer part toward the part left floating inside the face.
    ///
    /// # Errors
    /// [`DcelError::PrecedingMergeRequired`] if the edge separates two
    /// faces; use [`Dcel::merge_faces`] for that.
    pub fn remove_edge(&mut self, h: HalfedgeId) -> DcelResult<EdgeRemoval> {
        let t = self.halfedge_rec(h)?.twin;
        self.halfedge_rec(t)?;
        let (ch, ct) = (self.he(h).ccb, self.he(t).ccb);
        if ch != ct {
            return Err(match (self.ccb_face(ch), self.ccb_face(ct)) {
                (Some(left), Some(right)) if left != right => {
                    DcelError::PrecedingMergeRequired {
                        edge: h,
                        left,
                        right,
                    }
                }
                _ => InvariantError::InconsistentCcb(h).into(),
            });
        }
        let face = self.ccb_face(ch).ok_or(InvariantError::DetachedCcb(h))?;

        let (hn, hp) = (self.he(h).next, self.he(h).prev);
        let (tn, tp) = (self.he(t).next, self.he(t).prev);
        let u = self.he(t).target;
        let w = self.he(h).target;
        let mut freed = Vec::new();
        let mut new_hole = None;

        if hn == t && tn == h {
            // The edge is a whole component on its own.
            self.free_ccb(ch);
            freed.push(u);
            if w != u {
                freed.push(w);
            }
        } else if hn == t {
            self.retarget_ccb_rep(ch, &[h, t], hp);
            self.set_next(hp, tn);
            self.retarget_incident(u, t, hp);
            freed.push(w);
        } else if tn == h {
            self.retarget_ccb_rep(ch, &[h, t], tp);
            self.set_next(tp, hn);
            self.retarget_incident(w, h, tp);
            freed.push(u);
        } else {
            self.set_next(hp, tn);
            self.set_next(tp, hn);
            self.retarget_incident(u, t, hp);
            self.retarget_incident(w, h, tp);
            self.set_ccb_rep(ch, hp);
            let hole: HoleId = self.attach(face, hn);
            self.relabel_cycle(hn, Ccb::Hole(hole));
            new_hole = Some(hole);
        }
        self.free_pair(h);
        for &x in &freed {
            let rec = self.attach::<IsolatedPoints>(face, x);
            self.set_state(x, VertexState::Isolated(rec));
        }

        log::trace!("remove_edge {h} in {face}: isolated {freed:?}, new hole {new_hole:?}");
        self.touch();
        Ok(EdgeRemoval {
            face,
            isolated: freed,
            new_hole,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::validation::ValidationOptions;

    fn path3() -> (Dcel, [VertexId; 3], HalfedgeId, HalfedgeId) {
        let mut d: Dcel = Dcel::new();
        let a = d.create_vertex();
        let b = d.create_vertex();
        let c = d.create_vertex();
        let (ab, _) = d.insert_edge(a, b, EdgeHints::default()).unwrap();
        let (bc, _) = d.insert_edge(b, c, EdgeHints::after(Some(ab), None)).unwrap();
        (d, [a, b, c], ab, bc)
    }

    #[test]
    fn antenna_extends_existing_cycle() {
        let (d, [a, b, c], ab, bc) = path3();
        assert_eq!(d.next(ab).unwrap(), bc);
        assert_eq!(d.degree(a).unwrap(), 1);
        assert_eq!(d.degree(b).unwrap(), 2);
        assert_eq!(d.degree(c).unwrap(), 1);
        assert_eq!(d.ccb_halfedges(ab).unwrap().count(), 4);
        d.check_invariants().unwrap();
    }

    #[test]
    fn missing_predecessor_is_disconnected_topology() {
        let (mut d, [_, b, _], _, _) = path3();
        let x = d.create_vertex();
        let before = format!("{d:?}");
        let err = d.insert_edge(b, x, EdgeHints::default()).unwrap_err();
        assert_eq!(
            err,
            DcelError::DisconnectedTopology {
                vertex: b,
                halfedge: None
            }
        );
        assert_eq!(before, format!("{d:?}"));
    }

    #[test]
    fn predecessor_of_wrong_vertex_is_rejected() {
        let (mut d, [a, _, _], ab, _) = path3();
        let x = d.create_vertex();
        // ab targets b, not a
        let err = d
            .insert_edge(a, x, EdgeHints::after(Some(ab), None))
            .unwrap_err();
        assert_eq!(
            err,
            DcelError::DisconnectedTopology {
                vertex: a,
                halfedge: Some(ab)
            }
        );
    }

    #[test]
    fn same_cycle_insertion_asks_for_split_face() {
        let (mut d, [a, _, c], ab, bc) = path3();
        let ba = d.twin(ab).unwrap();
        let err = d
            .insert_edge(c, a, EdgeHints::after(Some(bc), Some(ba)))
            .unwrap_err();
        assert!(matches!(
            err,
            DcelError::Invariant(InvariantError::WouldSplitFace(_, _))
        ));
    }

    #[test]
    fn free_self_loop_is_rejected() {
        let mut d: Dcel = Dcel::new();
        let a = d.create_vertex();
        assert_eq!(
            d.insert_edge(a, a, EdgeHints::default()),
            Err(InvariantError::SelfLoop(a).into())
        );
    }

    #[test]
    fn connecting_two_holes_fuses_them() {
        let mut d: Dcel = Dcel::new();
        let f = d.unbounded_face();
        let [a, b, c, e] = [(); 4].map(|_| d.create_vertex());
        let (ab, _) = d.insert_edge(a, b, EdgeHints::default()).unwrap();
        let (ce, _) = d.insert_edge(c, e, EdgeHints::default()).unwrap();
        assert_eq!(d.hole_count(f).unwrap(), 2);
        let (be, _) = d
            .insert_edge(b, e, EdgeHints::after(Some(ab), Some(ce)))
            .unwrap();
        assert_eq!(d.hole_count(f).unwrap(), 1);
        assert_eq!(d.ccb_halfedges(be).unwrap().count(), 6);
        d.check_invariants().unwrap();
    }

    #[test]
    fn split_edge_at_dangling_end_keeps_order() {
        let mut d: Dcel = Dcel::new();
        let a = d.create_vertex();
        let b = d.create_vertex();
        let m = d.create_vertex();
        let (ab, ba) = d.insert_edge(a, b, EdgeHints::default()).unwrap();
        let (am, mb) = d.split_edge(ab, m).unwrap();
        assert_eq!(am, ab);
        assert_eq!(d.target(am).unwrap(), m);
        assert_eq!(d.source(mb).unwrap(), m);
        assert_eq!(d.target(mb).unwrap(), b);
        assert_eq!(d.target(ba).unwrap(), a);
        assert_eq!(d.degree(m).unwrap(), 2);
        assert_eq!(d.ccb_halfedges(am).unwrap().count(), 4);
        d.check_invariants().unwrap();
    }

    #[test]
    fn lone_edge_removal_isolates_both_endpoints() {
        let mut d: Dcel = Dcel::new();
        let f = d.unbounded_face();
        let a = d.create_vertex();
        let b = d.create_vertex();
        let (ab, _) = d.insert_edge(a, b, EdgeHints::default()).unwrap();
        let removal = d.remove_edge(ab).unwrap();
        assert_eq!(removal.face, f);
        assert_eq!(removal.isolated, vec![a, b]);
        assert_eq!(d.hole_count(f).unwrap(), 0);
        assert_eq!(d.isolated_face(a).unwrap(), Some(f));
        validate_strict(&d);
    }

    fn validate_strict(d: &Dcel) {
        crate::topology::validation::validate_dcel(d, ValidationOptions::strict()).unwrap();
    }
}
