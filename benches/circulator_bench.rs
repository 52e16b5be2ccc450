use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use arrangement_dcel::prelude::*;

// n-gon split by random chords; returns a halfedge on the outer cycle.
fn chorded_polygon(n: usize, chords: usize, seed: u64) -> (Dcel, HalfedgeId) {
    let mut d: Dcel = Dcel::new();
    let vs: Vec<_> = (0..n).map(|_| d.create_vertex()).collect();
    let (first, first_twin) = d.insert_edge(vs[0], vs[1], EdgeHints::default()).unwrap();
    let mut last = first;
    for w in vs[1..].windows(2) {
        last = d.insert_edge(w[0], w[1], EdgeHints::after(Some(last), None)).unwrap().0;
    }
    let outer = d
        .split_face(d.unbounded_face(), last, first_twin, &Containment::none())
        .unwrap();

    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..chords {
        let faces: Vec<_> = d.faces().filter(|&f| f != d.unbounded_face()).collect();
        let f = faces[rng.gen_range(0..faces.len())];
        let ring = d.perimeter_halfedges(f).unwrap();
        if ring.len() < 4 {
            continue;
        }
        let i = rng.gen_range(0..ring.len());
        let j = (i + rng.gen_range(2..ring.len() - 1)) % ring.len();
        let _ = d.split_face(f, ring[i], ring[j], &Containment::none());
    }
    (d, outer.twin)
}

// Center with `n` spokes; returns the center.
fn star(n: usize) -> (Dcel, VertexId) {
    let mut d: Dcel = Dcel::new();
    let c = d.create_vertex();
    let mut pred = None;
    for _ in 0..n {
        let leaf = d.create_vertex();
        let (into_c, _) = d.insert_edge(leaf, c, EdgeHints::after(None, pred)).unwrap();
        pred = Some(into_c);
    }
    (d, c)
}

fn bench_ccb(c: &mut Criterion) {
    let mut group = c.benchmark_group("ccb");
    for &n in &[64usize, 1_024, 16_384] {
        let (d, outer) = chorded_polygon(n, n / 16, 42);
        group.bench_with_input(BenchmarkId::new("iterator", n), &n, |b, _| {
            b.iter(|| d.ccb_halfedges(outer).unwrap().count())
        });
        let circ = d.ccb_circulator(outer).unwrap();
        group.bench_with_input(BenchmarkId::new("circulator", n), &n, |b, _| {
            b.iter(|| circ.collect(&d).unwrap().len())
        });
        group.bench_with_input(BenchmarkId::new("check_invariants", n), &n, |b, _| {
            b.iter(|| d.check_invariants().is_ok())
        });
    }
    group.finish();
}

fn bench_vertex(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex");
    for &n in &[8usize, 256, 4_096] {
        let (d, center) = star(n);
        group.bench_with_input(BenchmarkId::new("incoming", n), &n, |b, _| {
            b.iter(|| d.incoming_halfedges(center).unwrap().count())
        });
        group.bench_with_input(BenchmarkId::new("step_back", n), &n, |b, &n| {
            b.iter(|| {
                let mut circ = d.vertex_circulator(center).unwrap().unwrap();
                circ.step(&d, -(n as isize)).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ccb, bench_vertex);
criterion_main!(benches);
