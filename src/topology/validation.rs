//! Structural validation of a [`Dcel`].
//!
//! [`validate_dcel`] audits every record and reports the first broken
//! invariant it finds. Checks run in a fixed order (halfedges, vertices,
//! memberships, faces, then whole cycles), so a given corruption is always
//! reported the same way.

use crate::debug_invariants::DebugInvariants;
use crate::dcel_error::{DcelError, DcelResult};
use crate::topology::dcel::{Dcel, MemberArena};
use crate::topology::handle::{
    FaceId, HalfedgeId, Holes, IsolatedPoints, MemberId, Perimeters, RecordId, VertexId,
};
use crate::topology::records::{Ccb, VertexState};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Category of a broken invariant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// A handle stored in a record does not resolve.
    DanglingReference,
    /// `twin(twin(h)) != h`, or `h` is its own twin.
    TwinAsymmetry,
    /// `prev(next(h)) != h` or `next(prev(h)) != h`.
    NextPrevMismatch,
    /// `source(next(h)) != target(h)`.
    DisconnectedChain,
    /// Halfedges of one cycle disagree on their boundary record, or a
    /// record's representative lies elsewhere.
    CcbMismatch,
    /// Following `next` does not return to the start.
    OpenCycle,
    /// A cycle is not reachable from any boundary record.
    OrphanHalfedge,
    /// A vertex's incident halfedge does not point at it, or a vertex with
    /// edges claims to have none.
    IncidentMismatch,
    /// The rotation around a vertex misses some of its incoming halfedges.
    RotationMismatch,
    /// A face list and a membership record disagree.
    MembershipMismatch,
    /// A vertex has neither edges nor a face.
    UnplacedVertex,
    /// A hole belongs to no face.
    DetachedCcb,
    /// There is not exactly one unbounded face.
    UnboundedFaceCount,
    /// A bounded face without a perimeter, or any face with more than one.
    PerimeterCount,
}

/// The first broken invariant found by [`validate_dcel`].
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("invariant violated ({kind:?}) at {record}")]
pub struct InvariantViolation {
    pub kind: ViolationKind,
    pub record: RecordId,
}

impl InvariantViolation {
    pub fn new(kind: ViolationKind, record: impl Into<RecordId>) -> Self {
        Self {
            kind,
            record: record.into(),
        }
    }
}

/// How records left unfinished by the caller are treated.
///
/// Unassigned vertices and detached holes are legal between calls but never
/// part of a finished subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnfinishedHandling {
    /// Accept them silently.
    Ignore,
    /// Log a warning and accept them.
    Warn,
    /// Report them as violations.
    Error,
}

/// Toggles for [`validate_dcel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    pub unfinished: UnfinishedHandling,
    /// Require exactly one perimeter per bounded face and none on the
    /// unbounded face.
    pub check_perimeter_counts: bool,
}

impl ValidationOptions {
    /// Every check on; unfinished records are errors.
    pub fn strict() -> Self {
        Self {
            unfinished: UnfinishedHandling::Error,
            check_perimeter_counts: true,
        }
    }

    /// Structural checks only; what a caller may legally leave pending
    /// between operations is accepted.
    pub fn lenient() -> Self {
        Self {
            unfinished: UnfinishedHandling::Ignore,
            check_perimeter_counts: true,
        }
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self::strict()
    }
}

fn unfinished(
    options: ValidationOptions,
    kind: ViolationKind,
    record: RecordId,
) -> Result<(), InvariantViolation> {
    match options.unfinished {
        UnfinishedHandling::Ignore => Ok(()),
        UnfinishedHandling::Warn => {
            log::warn!("unfinished record {record}: {kind:?}");
            Ok(())
        }
        UnfinishedHandling::Error => Err(InvariantViolation { kind, record }),
    }
}

/// Audits `dcel` and returns the first violation found.
pub fn validate_dcel<V, H, F>(
    dcel: &Dcel<V, H, F>,
    options: ValidationOptions,
) -> Result<(), InvariantViolation> {
    check_halfedges(dcel)?;
    check_vertices(dcel, options)?;
    check_members::<Perimeters, _, _, _>(dcel, options)?;
    check_members::<Holes, _, _, _>(dcel, options)?;
    check_isolated(dcel)?;
    check_faces(dcel, options)?;
    check_cycles(dcel)
}

fn ccb_resolves<V, H, F>(dcel: &Dcel<V, H, F>, ccb: Ccb) -> bool {
    match ccb {
        Ccb::Perimeter(p) => dcel.perimeters.contains(p.0),
        Ccb::Hole(h) => dcel.holes.contains(h.0),
    }
}

fn check_halfedges<V, H, F>(dcel: &Dcel<V, H, F>) -> Result<(), InvariantViolation> {
    use ViolationKind::*;
    for (key, rec) in dcel.halfedges.iter() {
        let h = HalfedgeId(key);
        let resolves = [rec.twin, rec.next, rec.prev]
            .iter()
            .all(|x| dcel.halfedges.contains(x.0))
            && dcel.vertices.contains(rec.target.0)
            && ccb_resolves(dcel, rec.ccb);
        if !resolves {
            return Err(InvariantViolation::new(DanglingReference, h));
        }
        if rec.twin == h || dcel.he(rec.twin).twin != h {
            return Err(InvariantViolation::new(TwinAsymmetry, h));
        }
        if dcel.he(rec.next).prev != h || dcel.he(rec.prev).next != h {
            return Err(InvariantViolation::new(NextPrevMismatch, h));
        }
        let next_twin = dcel.he(rec.next).twin;
        let next_source = dcel.halfedges.get(next_twin.0).map(|t| t.target);
        if next_source != Some(rec.target) {
            return Err(InvariantViolation::new(DisconnectedChain, h));
        }
        if dcel.he(rec.next).ccb != rec.ccb {
            return Err(InvariantViolation::new(CcbMismatch, h));
        }
        if !matches!(dcel.vertices[rec.target.0].state, VertexState::Incident(_)) {
            return Err(InvariantViolation::new(IncidentMismatch, rec.target));
        }
    }
    Ok(())
}

fn check_vertices<V, H, F>(
    dcel: &Dcel<V, H, F>,
    options: ValidationOptions,
) -> Result<(), InvariantViolation> {
    use ViolationKind::*;
    let mut in_degree: HashMap<VertexId, usize> = HashMap::new();
    for (_, rec) in dcel.halfedges.iter() {
        *in_degree.entry(rec.target).or_insert(0) += 1;
    }
    for (key, rec) in dcel.vertices.iter() {
        let v = VertexId(key);
        match rec.state {
            VertexState::Unassigned | VertexState::Detached => {
                unfinished(options, UnplacedVertex, v.into())?;
            }
            VertexState::Isolated(iso) => match dcel.isolated.get(iso.0) {
                Some(m) if m.item == v => {}
                Some(_) => return Err(InvariantViolation::new(MembershipMismatch, v)),
                None => return Err(InvariantViolation::new(DanglingReference, v)),
            },
            VertexState::Incident(start) => {
                let Some(first) = dcel.halfedges.get(start.0) else {
                    return Err(InvariantViolation::new(DanglingReference, v));
                };
                if first.target != v {
                    return Err(InvariantViolation::new(IncidentMismatch, v));
                }
                // halfedges are sound at this point, so the walk only
                // needs bounding
                let expected = in_degree.get(&v).copied().unwrap_or(0);
                let mut cur = start;
                let mut seen = 0usize;
                loop {
                    if dcel.he(cur).target != v || seen > expected {
                        return Err(InvariantViolation::new(RotationMismatch, v));
                    }
                    seen += 1;
                    cur = dcel.he(dcel.he(cur).next).twin;
                    if cur == start {
                        break;
                    }
                }
                if seen != expected {
                    return Err(InvariantViolation::new(RotationMismatch, v));
                }
            }
        }
    }
    Ok(())
}

/// Perimeter and hole records: owner list, slot and representative.
fn check_members<K, V, H, F>(
    dcel: &Dcel<V, H, F>,
    options: ValidationOptions,
) -> Result<(), InvariantViolation>
where
    K: MemberArena<Item = HalfedgeId>,
    MemberId<K>: Into<Ccb>,
{
    use ViolationKind::*;
    for (key, m) in K::arena(dcel).iter() {
        let id = MemberId::<K>::from_key(key);
        let record = K::record(id);
        match m.face {
            Some(f) => {
                let Some(face) = dcel.faces.get(f.0) else {
                    return Err(InvariantViolation { kind: DanglingReference, record });
                };
                if K::list(face).get(m.slot) != Some(&id) {
                    return Err(InvariantViolation { kind: MembershipMismatch, record });
                }
            }
            None if record_is_hole(record) => unfinished(options, DetachedCcb, record)?,
            None => return Err(InvariantViolation { kind: MembershipMismatch, record }),
        }
        match dcel.halfedges.get(m.item.0) {
            Some(rec) if rec.ccb == id.into() => {}
            Some(_) => return Err(InvariantViolation { kind: CcbMismatch, record }),
            None => return Err(InvariantViolation { kind: DanglingReference, record }),
        }
    }
    Ok(())
}

fn record_is_hole(record: RecordId) -> bool {
    matches!(record, RecordId::Hole(_))
}

fn check_isolated<V, H, F>(dcel: &Dcel<V, H, F>) -> Result<(), InvariantViolation> {
    use ViolationKind::*;
    for (key, m) in dcel.isolated.iter() {
        let id = MemberId::<IsolatedPoints>::from_key(key);
        let Some(f) = m.face else {
            return Err(InvariantViolation::new(MembershipMismatch, id));
        };
        let Some(face) = dcel.faces.get(f.0) else {
            return Err(InvariantViolation::new(DanglingReference, id));
        };
        if face.isolated.get(m.slot) != Some(&id) {
            return Err(InvariantViolation::new(MembershipMismatch, id));
        }
        match dcel.vertices.get(m.item.0) {
            Some(v) if v.state == VertexState::Isolated(id) => {}
            Some(_) => return Err(InvariantViolation::new(MembershipMismatch, id)),
            None => return Err(InvariantViolation::new(DanglingReference, id)),
        }
    }
    Ok(())
}

fn check_faces<V, H, F>(
    dcel: &Dcel<V, H, F>,
    options: ValidationOptions,
) -> Result<(), InvariantViolation> {
    use ViolationKind::*;
    let mut unbounded = Vec::new();
    for (key, face) in dcel.faces.iter() {
        let f = FaceId(key);
        if face.unbounded {
            unbounded.push(f);
        }
        let owns = |member_face: Option<FaceId>, slot: usize, i: usize| {
            member_face == Some(f) && slot == i
        };
        for (i, p) in face.perimeters.iter().enumerate() {
            match dcel.perimeters.get(p.0) {
                Some(m) if owns(m.face, m.slot, i) => {}
                _ => return Err(InvariantViolation::new(MembershipMismatch, f)),
            }
        }
        for (i, h) in face.holes.iter().enumerate() {
            match dcel.holes.get(h.0) {
                Some(m) if owns(m.face, m.slot, i) => {}
                _ => return Err(InvariantViolation::new(MembershipMismatch, f)),
            }
        }
        for (i, iso) in face.isolated.iter().enumerate() {
            match dcel.isolated.get(iso.0) {
                Some(m) if owns(m.face, m.slot, i) => {}
                _ => return Err(InvariantViolation::new(MembershipMismatch, f)),
            }
        }
        let expected = usize::from(!face.unbounded);
        let count = face.perimeters.len();
        if count > 1 || (options.check_perimeter_counts && count != expected) {
            return Err(InvariantViolation::new(PerimeterCount, f));
        }
    }
    if unbounded != [dcel.unbounded] {
        return Err(InvariantViolation::new(UnboundedFaceCount, RecordId::Structure));
    }
    Ok(())
}

/// Every boundary record owns exactly one closed cycle, and every
/// halfedge is on one of them.
fn check_cycles<V, H, F>(dcel: &Dcel<V, H, F>) -> Result<(), InvariantViolation> {
    use ViolationKind::*;
    let bound = dcel.num_halfedges();
    let mut visited: HashSet<HalfedgeId> = HashSet::with_capacity(bound);
    let reps = dcel
        .perimeters
        .iter()
        .map(|(key, m)| (RecordId::Perimeter(MemberId::from_key(key)), m.item))
        .chain(
            dcel.holes
                .iter()
                .map(|(key, m)| (RecordId::Hole(MemberId::from_key(key)), m.item)),
        );
    for (record, start) in reps {
        if visited.contains(&start) {
            return Err(InvariantViolation { kind: CcbMismatch, record });
        }
        let mut cur = start;
        let mut steps = 0usize;
        loop {
            visited.insert(cur);
            cur = dcel.he(cur).next;
            steps += 1;
            if cur == start {
                break;
            }
            if steps > bound {
                return Err(InvariantViolation { kind: OpenCycle, record });
            }
        }
    }
    if let Some(h) = dcel.halfedges().find(|h| !visited.contains(h)) {
        return Err(InvariantViolation::new(OrphanHalfedge, h));
    }
    Ok(())
}

impl<V, H, F> Dcel<V, H, F> {
    /// Runs every structural check with [`ValidationOptions::strict`].
    pub fn check_invariants(&self) -> DcelResult<()> {
        self.check_invariants_with(ValidationOptions::strict())
    }

    pub fn check_invariants_with(&self, options: ValidationOptions) -> DcelResult<()> {
        validate_dcel(self, options).map_err(DcelError::from)
    }
}

impl<V, H, F> DebugInvariants for Dcel<V, H, F> {
    fn debug_assert_invariants(&self) {
        if let Err(e) = validate_dcel(self, ValidationOptions::lenient()) {
            panic!("[invariants] dcel: {e}");
        }
    }

    fn validate_invariants(&self) -> DcelResult<()> {
        self.check_invariants()
    }
}
