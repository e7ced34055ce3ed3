// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use trisect::{
    Contact, GeometryError, Overlap, Tolerance, TriTriIntersectionResult,
    geometry::{Point3, Segment3, Triangle},
    tri_tri_intersection, tri_tri_overlap,
};

fn tri(p: [[f64; 3]; 3]) -> Triangle {
    Triangle::from_vals(p)
}

fn unit_tri() -> Triangle {
    tri([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
}

/// Runs the test both ways round and checks the verdicts agree.
fn intersect(t0: &Triangle, t1: &Triangle) -> TriTriIntersectionResult {
    let tol = Tolerance::default();
    let forward = tri_tri_intersection(t0, t1, &tol).unwrap();
    let backward = tri_tri_intersection(t1, t0, &tol).unwrap();
    assert_eq!(
        std::mem::discriminant(&forward),
        std::mem::discriminant(&backward)
    );
    forward
}

#[test]
fn test_parallel_planes_are_disjoint() {
    let t1 = tri([[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]]);
    assert_eq!(intersect(&unit_tri(), &t1), TriTriIntersectionResult::Disjoint);
}

#[test]
fn test_vertical_triangle_through_plane_overlaps() {
    let t1 = tri([[0.5, 0.5, -1.0], [0.5, 0.5, 1.0], [2.0, 2.0, 1.0]]);
    let tol = Tolerance::default();
    match intersect(&unit_tri(), &t1) {
        TriTriIntersectionResult::Overlapping(Overlap::Segment(s)) => {
            assert!(s.a.approx_eq(&Point3::new(0.5, 0.5, 0.0), &tol));
            assert!(s.b.approx_eq(&Point3::new(0.5, 0.5, 0.0), &tol));
            assert!(s.is_degenerate(&tol));
        }
        other => panic!("expected an overlapping segment, got {other:?}"),
    }
}

#[test]
fn test_piercing_triangles_share_a_segment() {
    let tol = Tolerance::default();
    let t0 = tri([[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]]);
    let t1 = tri([[1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [2.0, 1.0, 1.0]]);
    let expected = Segment3::new(&Point3::new(1.0, 1.0, 0.0), &Point3::new(1.5, 1.0, 0.0));
    match intersect(&t0, &t1) {
        TriTriIntersectionResult::Overlapping(Overlap::Segment(s)) => {
            assert!(s.approx_eq(&expected, &tol), "{s:?}");
            assert!((s.length() - 0.5).abs() < 1e-9);
        }
        other => panic!("expected an overlapping segment, got {other:?}"),
    }
}

#[test]
fn test_crossing_planes_with_separate_intervals() {
    let t0 = tri([[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]]);
    let t1 = tri([[11.0, 1.0, -1.0], [11.0, 1.0, 1.0], [12.0, 1.0, 1.0]]);
    assert_eq!(intersect(&t0, &t1), TriTriIntersectionResult::Disjoint);
}

#[test]
fn test_shared_vertex_is_touching() {
    let tol = Tolerance::default();
    let t1 = tri([[0.0, 0.0, 0.0], [-1.0, 0.0, 1.0], [0.0, -1.0, 1.0]]);
    match intersect(&unit_tri(), &t1) {
        TriTriIntersectionResult::Touching(Contact::Point(p)) => {
            assert!(p.approx_eq(&Point3::ORIGIN, &tol));
        }
        other => panic!("expected a touching point, got {other:?}"),
    }
}

#[test]
fn test_edge_resting_on_face_is_touching() {
    let tol = Tolerance::default();
    let t0 = tri([[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]]);
    let t1 = tri([[1.0, 1.0, 0.0], [2.0, 1.0, 0.0], [1.0, 1.0, 1.0]]);
    let expected = Segment3::new(&Point3::new(1.0, 1.0, 0.0), &Point3::new(2.0, 1.0, 0.0));
    match intersect(&t0, &t1) {
        TriTriIntersectionResult::Touching(Contact::Segment(s)) => {
            assert!(s.approx_eq(&expected, &tol), "{s:?}");
        }
        other => panic!("expected a touching segment, got {other:?}"),
    }
}

#[test]
fn test_one_side_early_reject() {
    let t1 = tri([[0.0, 0.0, 0.5], [5.0, 0.0, 2.0], [0.0, 5.0, 3.0]]);
    assert_eq!(intersect(&unit_tri(), &t1), TriTriIntersectionResult::Disjoint);
}

#[test]
fn test_coplanar_contained_triangle_is_region() {
    let tol = Tolerance::default();
    let inner = tri([[0.1, 0.1, 0.0], [0.9, 0.1, 0.0], [0.1, 0.9, 0.0]]);
    match intersect(&unit_tri(), &inner) {
        TriTriIntersectionResult::Overlapping(Overlap::Region(poly)) => {
            assert_eq!(poly.len(), 3);
            for v in inner.vertices() {
                assert!(poly.iter().any(|p| p.approx_eq(&v, &tol)));
            }
        }
        other => panic!("expected an overlapping region, got {other:?}"),
    }
}

#[test]
fn test_coplanar_partial_overlap_region_lies_in_both() {
    let tol = Tolerance::default();
    let t0 = tri([[0.0, 0.0, 1.0], [2.0, 0.0, 1.0], [0.0, 2.0, 1.0]]);
    // opposite winding on purpose
    let t1 = tri([[0.5, 0.5, 1.0], [0.5, 3.0, 1.0], [3.0, 0.5, 1.0]]);
    match intersect(&t0, &t1) {
        TriTriIntersectionResult::Overlapping(Overlap::Region(poly)) => {
            assert_eq!(poly.len(), 3);
            for p in &poly {
                assert!(tol.approx_eq(p.z, 1.0));
                assert!(p.x >= 0.5 - 1e-9 && p.y >= 0.5 - 1e-9);
                assert!(p.x + p.y <= 2.0 + 1e-9);
            }
        }
        other => panic!("expected an overlapping region, got {other:?}"),
    }
}

#[test]
fn test_coplanar_far_apart_is_disjoint() {
    let far = tri([[2.0, 2.0, 0.0], [3.0, 2.0, 0.0], [2.0, 3.0, 0.0]]);
    assert_eq!(intersect(&unit_tri(), &far), TriTriIntersectionResult::Disjoint);
}

#[test]
fn test_coplanar_shared_edge_is_touching() {
    let tol = Tolerance::default();
    let t1 = tri([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]]);
    let expected = Segment3::new(&Point3::new(1.0, 0.0, 0.0), &Point3::new(0.0, 1.0, 0.0));
    match intersect(&unit_tri(), &t1) {
        TriTriIntersectionResult::Touching(Contact::Segment(s)) => {
            assert!(s.approx_eq(&expected, &tol), "{s:?}");
        }
        other => panic!("expected a touching segment, got {other:?}"),
    }
}

#[test]
fn test_coplanar_shared_vertex_is_touching() {
    let tol = Tolerance::default();
    let t1 = tri([[0.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, -1.0, 0.0]]);
    match intersect(&unit_tri(), &t1) {
        TriTriIntersectionResult::Touching(Contact::Point(p)) => {
            assert!(p.approx_eq(&Point3::ORIGIN, &tol));
        }
        other => panic!("expected a touching point, got {other:?}"),
    }
}

#[test]
fn test_degenerate_triangles_are_errors() {
    let tol = Tolerance::default();
    let line = tri([[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]]);
    assert_eq!(
        tri_tri_intersection(&line, &unit_tri(), &tol),
        Err(GeometryError::DegenerateTriangle { which: 0 })
    );
    assert_eq!(
        tri_tri_intersection(&unit_tri(), &line, &tol),
        Err(GeometryError::DegenerateTriangle { which: 1 })
    );
    assert!(tri_tri_overlap(&line, &line, &tol).is_err());
}

#[test]
fn test_separation_below_eps_counts_as_contact() {
    let lifted = tri([[0.0, 0.0, 5e-4], [1.0, 0.0, 5e-4], [0.0, 1.0, 5e-4]]);
    assert!(tri_tri_overlap(&unit_tri(), &lifted, &Tolerance::default()).unwrap());

    let fine = Tolerance::new(1e-6).unwrap();
    assert_eq!(
        tri_tri_intersection(&unit_tri(), &lifted, &fine).unwrap(),
        TriTriIntersectionResult::Disjoint
    );
}

#[test]
fn test_nearly_parallel_large_triangles_cross() {
    let tol = Tolerance::default();
    let t0 = tri([[-100.0, -100.0, 0.0], [100.0, -100.0, 0.0], [0.0, 100.0, 0.0]]);
    let t1 = tri([[-50.0, -50.0, -0.025], [50.0, -50.0, 0.025], [0.0, 50.0, 0.0]]);
    let expected = Segment3::new(&Point3::new(0.0, -50.0, 0.0), &Point3::new(0.0, 50.0, 0.0));
    for (a, b) in [(&t0, &t1), (&t1, &t0)] {
        match tri_tri_intersection(a, b, &tol).unwrap() {
            TriTriIntersectionResult::Overlapping(Overlap::Segment(s)) => {
                assert!(s.approx_eq(&expected, &tol), "{s:?}");
            }
            other => panic!("expected an overlapping segment, got {other:?}"),
        }
    }
}

#[test]
fn test_small_triangle_within_eps_of_large_plane_is_coplanar_both_ways() {
    let tol = Tolerance::default();
    let small = tri([[0.0, 0.0, 0.0], [0.5, 0.0, 0.00075], [0.0, 0.5, 0.0]]);
    let large = tri([[-5.0, -5.0, 0.0], [10.0, -5.0, 0.0], [-5.0, 10.0, 0.0]]);
    let flat = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.5, 0.0, 0.0),
        Point3::new(0.0, 0.5, 0.0),
    ];
    for (a, b) in [(&small, &large), (&large, &small)] {
        match tri_tri_intersection(a, b, &tol).unwrap() {
            TriTriIntersectionResult::Overlapping(Overlap::Region(poly)) => {
                assert_eq!(poly.len(), 3);
                for v in &flat {
                    assert!(poly.iter().any(|p| p.approx_eq(v, &tol)), "{poly:?}");
                }
            }
            other => panic!("expected an overlapping region, got {other:?}"),
        }
    }
}
