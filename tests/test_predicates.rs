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
    Tolerance,
    geometry::{Plane, Point3, Vector3},
    kernel::{are_coincident, are_collinear, are_equal, are_equal_vectors, are_parallel, signed_distance},
};

#[test]
fn test_are_equal() {
    let tol = Tolerance::default();
    let p1 = Point3::new(1.0, 2.0, 3.0);
    assert!(are_equal(&p1, &Point3::new(1.0009, 2.0, 2.9991), &tol));
    assert!(!are_equal(&p1, &Point3::new(1.0, 2.0011, 3.0), &tol));
    assert!(are_equal_vectors(
        &Vector3::new(0.0, 0.0, 1.0),
        &Vector3::new(0.0, 0.0, 1.0005),
        &tol
    ));
}

#[test]
fn test_are_collinear() {
    let tol = Tolerance::default();
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 1.0, 1.0);
    assert!(are_collinear(&a, &b, &Point3::new(2.0, 2.0, 2.0), &tol));
    assert!(are_collinear(&a, &a, &b, &tol));
    assert!(!are_collinear(&a, &b, &Point3::new(2.0, 2.0, 3.0), &tol));
}

#[test]
fn test_stacked_planes_are_parallel_not_coincident() {
    let tol = Tolerance::default();
    let oz = Vector3::from_point(&Point3::new(0.0, 0.0, 1.0));
    let p1 = Plane::from_point_and_normal(&Point3::new(0.0, 0.0, 0.0), &oz, &tol).unwrap();
    let p2 = Plane::from_point_and_normal(&Point3::new(0.0, 0.0, 1.0), &oz, &tol).unwrap();
    assert!(are_parallel(&p1, &p2, &tol));
    assert!(!are_coincident(&p1, &p2, &tol));
    assert!(!p1.has_same_representation(&p2, &tol));
}

#[test]
fn test_signed_distance_follows_normal() {
    let tol = Tolerance::default();
    let plane = Plane::from_points(
        &Point3::new(0.0, 0.0, 0.0),
        &Point3::new(2.0, 0.0, 0.0),
        &Point3::new(0.0, 2.0, 0.0),
        &tol,
    )
    .unwrap();
    assert!((signed_distance(&Point3::new(3.0, 4.0, 2.5), &plane) - 2.5).abs() < 1e-12);
    assert!((signed_distance(&Point3::new(3.0, 4.0, -1.0), &plane) + 1.0).abs() < 1e-12);
    assert!(tol.is_zero(signed_distance(&Point3::new(-7.0, 9.0, 0.0), &plane)));
    assert!((plane.offset()).abs() < 1e-12);
}
