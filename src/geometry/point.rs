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

use std::{
    fmt,
    ops::{Add, Index},
};

use crate::{geometry::vector::Vector3, numeric::Tolerance};

/// Immutable location in 3D space.
///
/// A point is never implicitly a vector: use [`Vector3::from_point`] for its
/// position vector and [`Point3::vector_to`] for a displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point3 { x, y, z }
    }

    pub fn from_vals(coords: [f64; 3]) -> Self {
        Point3::new(coords[0], coords[1], coords[2])
    }

    /// Componentwise comparison: every axis differs by less than `eps`.
    pub fn approx_eq(&self, other: &Point3, tol: &Tolerance) -> bool {
        tol.approx_eq(self.x, other.x)
            && tol.approx_eq(self.y, other.y)
            && tol.approx_eq(self.z, other.z)
    }

    /// Displacement from `self` to `other`.
    pub fn vector_to(&self, other: &Point3) -> Vector3 {
        Vector3::between(self, other)
    }

    pub fn add_vector(&self, v: &Vector3) -> Point3 {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }

    pub fn distance_squared_to(&self, other: &Point3) -> f64 {
        self.vector_to(other).norm_squared()
    }

    pub fn distance_to(&self, other: &Point3) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

impl Index<usize> for Point3 {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Point3 index out of range: {i}"),
        }
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;
    fn add(self, rhs: Vector3) -> Self::Output {
        self.add_vector(&rhs)
    }
}

impl<'a, 'b> Add<&'b Vector3> for &'a Point3 {
    type Output = Point3;
    fn add(self, rhs: &'b Vector3) -> Self::Output {
        self.add_vector(rhs)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(coords: [f64; 3]) -> Self {
        Point3::from_vals(coords)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
