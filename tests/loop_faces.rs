use arrangement_dcel::prelude::*;

/// Vertex `a` carrying one loop edge. Returns the structure, the face inside
/// the loop, the loop halfedge bounding it (`next == itself`) and `a`.
fn loop_face() -> (Dcel, FaceId, HalfedgeId, VertexId) {
    let mut d: Dcel = Dcel::new();
    let a = d.create_vertex();
    let b = d.create_vertex();
    let (ab, ba) = d.insert_edge(a, b, EdgeHints::default()).unwrap();
    let split = d
        .split_face(d.unbounded_face(), ab, ba, &Containment::none())
        .unwrap();
    let lp = d.merge_edge(ab, split.halfedge).unwrap();
    (d, split.face, lp, a)
}

#[test]
fn single_halfedge_loop_bounds_a_face() {
    let (d, f, lp, a) = loop_face();
    let outside = d.twin(lp).unwrap();
    assert_eq!(d.next(lp).unwrap(), lp);
    assert_eq!(d.next(outside).unwrap(), outside);
    assert_eq!((d.source(lp).unwrap(), d.target(lp).unwrap()), (a, a));
    assert_eq!(d.degree(a).unwrap(), 2);
    assert_eq!(d.perimeter_halfedges(f).unwrap(), vec![lp]);
    assert_eq!(d.face(outside).unwrap(), d.unbounded_face());
    assert!(d.is_on_hole(outside).unwrap());
    assert_eq!(d.num_vertices(), 1);
    d.check_invariants().unwrap();
}

#[test]
fn merging_away_a_lone_loop_isolates_its_vertex() {
    let (mut d, f, lp, a) = loop_face();
    let u = d.unbounded_face();
    assert_eq!(d.merge_faces(f, u, lp).unwrap(), u);
    assert!(!d.contains_face(f));
    assert!(!d.contains_halfedge(lp));
    assert_eq!(d.num_halfedges(), 0);
    assert_eq!(d.num_holes(), 0);
    assert_eq!(d.hole_count(u).unwrap(), 0);
    let rec = d.isolated_record(a).unwrap().unwrap();
    assert_eq!(d.vertex_state(a).unwrap(), VertexState::Isolated(rec));
    assert_eq!(d.isolated_vertex(rec).unwrap(), a);
    assert_eq!(d.isolated_face(a).unwrap(), Some(u));
    d.check_invariants().unwrap();
}

#[test]
fn lone_loop_merges_from_the_outer_side_too() {
    let (mut d, f, lp, a) = loop_face();
    let u = d.unbounded_face();
    let outside = d.twin(lp).unwrap();
    assert_eq!(d.merge_faces(u, f, outside).unwrap(), u);
    assert_eq!(d.num_faces(), 1);
    assert_eq!(d.isolated_face(a).unwrap(), Some(u));
    d.check_invariants().unwrap();
}

/// The loop plus an antenna `a -> c` hanging into the unbounded face.
fn loop_with_antenna() -> (Dcel, FaceId, HalfedgeId, [VertexId; 2]) {
    let (mut d, f, lp, a) = loop_face();
    let c = d.create_vertex();
    let outside = d.twin(lp).unwrap();
    d.insert_edge(a, c, EdgeHints::after(Some(outside), None)).unwrap();
    assert_eq!(d.ccb_halfedges(outside).unwrap().count(), 3);
    d.check_invariants().unwrap();
    (d, f, lp, [a, c])
}

#[test]
fn merging_a_loop_face_keeps_the_rest_of_the_outer_cycle() {
    let (mut d, f, lp, [a, c]) = loop_with_antenna();
    let u = d.unbounded_face();
    assert_eq!(d.merge_faces(f, u, lp).unwrap(), u);
    assert_eq!(d.num_edges(), 1);
    assert_eq!(d.degree(a).unwrap(), 1);
    assert_eq!(d.degree(c).unwrap(), 1);
    assert_eq!(d.hole_count(u).unwrap(), 1);
    let hole = d.holes(u).unwrap().next().unwrap();
    let rep = d.hole_boundary(hole).unwrap();
    assert_eq!(d.ccb_halfedges(rep).unwrap().count(), 2);
    assert_eq!(d.isolated_vertices(u).unwrap().count(), 0);
    d.check_invariants().unwrap();
}

#[test]
fn merging_a_loop_face_across_the_outer_halfedge() {
    let (mut d, f, lp, [a, _]) = loop_with_antenna();
    let u = d.unbounded_face();
    let outside = d.twin(lp).unwrap();
    assert_eq!(d.merge_faces(u, f, outside).unwrap(), u);
    assert_eq!(d.num_faces(), 1);
    assert_eq!(d.degree(a).unwrap(), 1);
    assert_eq!(d.hole_count(u).unwrap(), 1);
    d.check_invariants().unwrap();
}

#[test]
fn split_edge_on_a_loop_makes_a_digon() {
    let (mut d, f, lp, a) = loop_face();
    let m = d.create_vertex();
    let (first, second) = d.split_edge(lp, m).unwrap();
    assert_eq!(first, lp);
    assert_eq!(d.perimeter_halfedges(f).unwrap(), vec![lp, second]);
    assert_eq!((d.source(lp).unwrap(), d.target(lp).unwrap()), (a, m));
    assert_eq!((d.source(second).unwrap(), d.target(second).unwrap()), (m, a));
    assert_eq!(d.ccb_halfedges(d.twin(lp).unwrap()).unwrap().count(), 2);
    assert_eq!(d.degree(m).unwrap(), 2);
    assert_eq!(d.degree(a).unwrap(), 2);
    d.check_invariants().unwrap();

    assert_eq!(d.merge_edge(lp, second).unwrap(), lp);
    assert!(!d.contains_vertex(m));
    assert_eq!(d.next(lp).unwrap(), lp);
    d.check_invariants().unwrap();
}

#[test]
fn a_loop_face_cannot_be_split_until_subdivided() {
    let (mut d, f, lp, _) = loop_face();
    let before = format!("{d:?}");
    assert_eq!(
        d.split_face(f, lp, lp, &Containment::none()),
        Err(InvariantError::DegenerateSplit(lp).into())
    );
    assert_eq!(before, format!("{d:?}"));

    let m = d.create_vertex();
    let (_, second) = d.split_edge(lp, m).unwrap();
    let split = d.split_face(f, lp, second, &Containment::none()).unwrap();
    assert_eq!(d.num_faces(), 3);
    assert_eq!(d.perimeter_halfedges(split.face).unwrap().len(), 2);
    assert_eq!(d.perimeter_halfedges(f).unwrap().len(), 2);
    d.check_invariants().unwrap();

    assert_eq!(d.merge_faces(split.face, f, split.halfedge).unwrap(), split.face);
    assert_eq!(d.num_faces(), 2);
    d.check_invariants().unwrap();
}
