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

use crate::{
    geometry::{plane::Plane, point::Point3, vector::Vector3},
    numeric::Tolerance,
};

/// Every coordinate of `p1` and `p2` differs by less than `eps`.
pub fn are_equal(p1: &Point3, p2: &Point3, tol: &Tolerance) -> bool {
    p1.approx_eq(p2, tol)
}

pub fn are_equal_vectors(u: &Vector3, v: &Vector3, tol: &Tolerance) -> bool {
    u.approx_eq(v, tol)
}

/// Points spanning a parallelogram of area below `eps`.
pub fn are_collinear(a: &Point3, b: &Point3, c: &Point3, tol: &Tolerance) -> bool {
    Vector3::between(a, b)
        .cross(&Vector3::between(a, c))
        .is_negligible(tol)
}

/// Planes whose normals are parallel, in either orientation and at any scale.
pub fn are_parallel(p0: &Plane, p1: &Plane, tol: &Tolerance) -> bool {
    p0.is_parallel_to(p1, tol)
}

/// Same geometric plane, whatever the anchor or normal each one stores.
pub fn are_coincident(p0: &Plane, p1: &Plane, tol: &Tolerance) -> bool {
    p0.coincides_with(p1, tol)
}

/// `(A x0 + B y0 + C z0 + D) / sqrt(A^2 + B^2 + C^2)`.
pub fn signed_distance(p: &Point3, plane: &Plane) -> f64 {
    plane.signed_distance(p)
}
