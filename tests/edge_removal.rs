use arrangement_dcel::prelude::*;

fn triangle(d: &mut Dcel, vs: [VertexId; 3]) -> FaceSplit {
    let u = d.unbounded_face();
    let (ab, ba) = d.insert_edge(vs[0], vs[1], EdgeHints::default()).unwrap();
    let (bc, _) = d
        .insert_edge(vs[1], vs[2], EdgeHints::after(Some(ab), None))
        .unwrap();
    d.split_face(u, bc, ba, &Containment::none()).unwrap()
}

#[test]
fn antenna_tip_becomes_isolated() {
    let mut d: Dcel = Dcel::new();
    let u = d.unbounded_face();
    let [a, b, c] = [(); 3].map(|_| d.create_vertex());
    let (ab, _) = d.insert_edge(a, b, EdgeHints::default()).unwrap();
    let (bc, _) = d.insert_edge(b, c, EdgeHints::after(Some(ab), None)).unwrap();

    let removal = d.remove_edge(bc).unwrap();
    assert_eq!(
        removal,
        EdgeRemoval {
            face: u,
            isolated: vec![c],
            new_hole: None
        }
    );
    assert_eq!(d.isolated_face(c).unwrap(), Some(u));
    assert_eq!(d.degree(b).unwrap(), 1);
    assert_eq!(d.ccb_halfedges(ab).unwrap().count(), 2);
    d.check_invariants().unwrap();
}

#[test]
fn antenna_base_side_also_works() {
    let mut d: Dcel = Dcel::new();
    let [a, b, c] = [(); 3].map(|_| d.create_vertex());
    let (ab, _) = d.insert_edge(a, b, EdgeHints::default()).unwrap();
    d.insert_edge(b, c, EdgeHints::after(Some(ab), None)).unwrap();
    // remove through the halfedge pointing into the leaf's neighbour
    let ba = d.twin(ab).unwrap();
    let removal = d.remove_edge(ba).unwrap();
    assert_eq!(removal.isolated, vec![a]);
    assert_eq!(d.degree(b).unwrap(), 1);
    d.check_invariants().unwrap();
}

#[test]
fn bridge_between_components_splits_the_hole() {
    let mut d: Dcel = Dcel::new();
    let u = d.unbounded_face();
    let abc = [(); 3].map(|_| d.create_vertex());
    let def = [(); 3].map(|_| d.create_vertex());
    let t1 = triangle(&mut d, abc);
    let t2 = triangle(&mut d, def);
    assert_eq!(d.hole_count(u).unwrap(), 2);

    // halfedges on the outside of each triangle, pointing into a and d
    let into_a = d.twin(d.next(t1.halfedge).unwrap()).unwrap();
    let into_d = d.twin(d.next(t2.halfedge).unwrap()).unwrap();
    assert_eq!(d.target(into_a).unwrap(), abc[0]);
    assert_eq!(d.face(into_a).unwrap(), u);
    let (ad, _) = d
        .insert_edge(abc[0], def[0], EdgeHints::after(Some(into_a), Some(into_d)))
        .unwrap();
    assert_eq!(d.hole_count(u).unwrap(), 1);
    assert_eq!(d.ccb_halfedges(ad).unwrap().count(), 8);
    d.check_invariants().unwrap();

    let removal = d.remove_edge(ad).unwrap();
    assert!(removal.isolated.is_empty());
    let new_hole = removal.new_hole.unwrap();
    assert_eq!(d.hole_count(u).unwrap(), 2);
    assert_eq!(d.hole_face(new_hole).unwrap(), Some(u));
    // the target side (triangle def) carries the new hole
    let rep = d.hole_boundary(new_hole).unwrap();
    let side: Vec<_> = d
        .ccb_halfedges(rep)
        .unwrap()
        .map(|h| d.target(h).unwrap())
        .collect();
    assert_eq!(side.len(), 3);
    assert!(side.iter().all(|v| def.contains(v)));
    d.check_invariants().unwrap();
}

#[test]
fn lone_edge_leaves_two_isolated_vertices() {
    let mut d: Dcel = Dcel::new();
    let u = d.unbounded_face();
    let a = d.create_vertex();
    let b = d.create_vertex();
    d.add_isolated_vertex(u, a).unwrap();
    let (ab, _) = d.insert_edge(a, b, EdgeHints::default()).unwrap();
    assert_eq!(d.num_isolated_vertices(), 0);

    let removal = d.remove_edge(ab).unwrap();
    assert_eq!(removal.isolated, vec![a, b]);
    assert_eq!(d.num_isolated_vertices(), 2);
    assert_eq!(d.num_holes(), 0);
    assert!(!d.contains_halfedge(ab));
    d.check_invariants().unwrap();
}

#[test]
fn separating_edge_needs_merge_first() {
    let mut d: Dcel = Dcel::new();
    let u = d.unbounded_face();
    let abc = [(); 3].map(|_| d.create_vertex());
    let t = triangle(&mut d, abc);
    let err = d.remove_edge(t.halfedge).unwrap_err();
    assert_eq!(
        err,
        DcelError::PrecedingMergeRequired {
            edge: t.halfedge,
            left: t.face,
            right: u
        }
    );

    let f = d.merge_faces(t.face, u, t.halfedge).unwrap();
    assert_eq!(f, u);
    // now every remaining edge is an antenna of one hole
    let h = d.holes(u).unwrap().next().unwrap();
    let rep = d.hole_boundary(h).unwrap();
    assert!(d.remove_edge(rep).is_ok());
    d.check_invariants().unwrap();
}
