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

use log::trace;

use crate::{
    error::GeometryError,
    geometry::{line::Line3, point::Point3, triangle::Triangle, vector::Vector3},
    numeric::Tolerance,
};

/// Plane through `anchor` with normal `normal`.
///
/// The normal is not normalized; its orientation follows construction order
/// (right-hand rule for [`Plane::from_points`]), so the sign of
/// [`Plane::signed_distance`] is only meaningful relative to one plane value.
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    anchor: Point3,
    normal: Vector3,
}

impl Plane {
    pub fn from_point_and_normal(
        anchor: &Point3,
        normal: &Vector3,
        tol: &Tolerance,
    ) -> Result<Self, GeometryError> {
        if normal.is_negligible(tol) {
            return Err(GeometryError::ZeroNormal);
        }
        Ok(Plane {
            anchor: *anchor,
            normal: *normal,
        })
    }

    /// Anchor is the point the position vector `r` reaches.
    pub fn from_position_vector_and_normal(
        r: &Vector3,
        normal: &Vector3,
        tol: &Tolerance,
    ) -> Result<Self, GeometryError> {
        Plane::from_point_and_normal(&r.tip(), normal, tol)
    }

    /// Plane through three points, anchored at `p0`, with normal
    /// `(p1 - p0) x (p2 - p0)`.
    pub fn from_points(
        p0: &Point3,
        p1: &Point3,
        p2: &Point3,
        tol: &Tolerance,
    ) -> Result<Self, GeometryError> {
        let normal = Vector3::between(p0, p1).cross(&Vector3::between(p0, p2));
        if normal.is_negligible(tol) {
            trace!("collinear points {p0} {p1} {p2}: |n|^2 = {}", normal.norm_squared());
            return Err(GeometryError::CollinearPoints);
        }
        Ok(Plane {
            anchor: *p0,
            normal,
        })
    }

    pub fn from_triangle(t: &Triangle, tol: &Tolerance) -> Result<Self, GeometryError> {
        Plane::from_points(&t.d0, &t.d1, &t.d2, tol)
    }

    pub fn anchor(&self) -> &Point3 {
        &self.anchor
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// `D` in `A x + B y + C z + D = 0`.
    pub fn offset(&self) -> f64 {
        -self.normal.dot(&Vector3::from_point(&self.anchor))
    }

    pub fn signed_distance(&self, p: &Point3) -> f64 {
        (self.normal.dot(&Vector3::from_point(p)) + self.offset()) / self.normal.norm()
    }

    /// Normals span an angle whose sine is below `eps`, regardless of
    /// their lengths or orientation.
    pub fn is_parallel_to(&self, other: &Plane, tol: &Tolerance) -> bool {
        let c = self.normal.cross(&other.normal);
        c.norm_squared()
            <= tol.eps_squared() * self.normal.norm_squared() * other.normal.norm_squared()
    }

    /// Geometric coincidence: parallel, and each anchor lies on the other plane.
    pub fn coincides_with(&self, other: &Plane, tol: &Tolerance) -> bool {
        self.is_parallel_to(other, tol)
            && tol.is_zero(self.signed_distance(&other.anchor))
            && tol.is_zero(other.signed_distance(&self.anchor))
    }

    /// Equality of the stored `(normal, anchor)` pair.
    ///
    /// Two representations of one geometric plane (flipped or rescaled
    /// normal, different anchor) are not equal under this test; use
    /// [`Plane::coincides_with`] for that.
    pub fn has_same_representation(&self, other: &Plane, tol: &Tolerance) -> bool {
        self.normal.approx_eq(&other.normal, tol) && self.anchor.approx_eq(&other.anchor, tol)
    }

    /// Line shared by two crossing planes, `None` when they are parallel.
    ///
    /// The direction is `n0 x n1`. The origin is found by zeroing the
    /// dominant coordinate of the direction and solving the two plane
    /// equations for the remaining axes.
    pub fn intersection_line(&self, other: &Plane, tol: &Tolerance) -> Option<Line3> {
        if self.is_parallel_to(other, tol) {
            return None;
        }
        let direction = self.normal.cross(&other.normal);
        let drop = direction.dominant_axis();
        let (i, j) = match drop {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };

        let (a0, b0, c0) = (
            self.normal.component(i),
            self.normal.component(j),
            -self.offset(),
        );
        let (a1, b1, c1) = (
            other.normal.component(i),
            other.normal.component(j),
            -other.offset(),
        );
        let det = a0 * b1 - a1 * b0;
        if det == 0.0 {
            return None;
        }

        let mut coords = [0.0; 3];
        coords[i] = (c0 * b1 - c1 * b0) / det;
        coords[j] = (a0 * c1 - a1 * c0) / det;
        Some(Line3::new(Point3::from_vals(coords), direction))
    }
}
