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
    error::GeometryError,
    geometry::{plane::Plane, point::Point3, vector::Vector3},
    numeric::Tolerance,
};

/// Three ordered points. Orientation does not matter to the intersection test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub d0: Point3,
    pub d1: Point3,
    pub d2: Point3,
}

impl Triangle {
    pub fn new(d0: Point3, d1: Point3, d2: Point3) -> Self {
        Triangle { d0, d1, d2 }
    }

    pub fn from_vals(coords: [[f64; 3]; 3]) -> Self {
        Triangle::new(
            Point3::from_vals(coords[0]),
            Point3::from_vals(coords[1]),
            Point3::from_vals(coords[2]),
        )
    }

    pub fn vertices(&self) -> [Point3; 3] {
        [self.d0, self.d1, self.d2]
    }

    /// `(d1 - d0) x (d2 - d0)`; twice the area in magnitude.
    pub fn normal(&self) -> Vector3 {
        Vector3::between(&self.d0, &self.d1).cross(&Vector3::between(&self.d0, &self.d2))
    }

    pub fn area(&self) -> f64 {
        0.5 * self.normal().norm()
    }

    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        self.normal().is_negligible(tol)
    }

    pub fn plane(&self, tol: &Tolerance) -> Result<Plane, GeometryError> {
        Plane::from_triangle(self, tol)
    }

    /// Same points, opposite winding.
    pub fn reversed(&self) -> Self {
        Triangle::new(self.d2, self.d1, self.d0)
    }
}
