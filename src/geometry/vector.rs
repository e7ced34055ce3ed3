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
    ops::{Add, Mul, Neg},
};

use num_traits::Zero;

use crate::{geometry::point::Point3, numeric::Tolerance};

/// Free displacement in 3D space, not anchored to any origin.
///
/// The three constructors are deliberately distinct: raw components go
/// through [`Vector3::new`], a displacement through [`Vector3::between`] and a
/// position vector through [`Vector3::from_point`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// `finish - start`, componentwise.
    pub fn between(start: &Point3, finish: &Point3) -> Self {
        Vector3::new(finish.x - start.x, finish.y - start.y, finish.z - start.z)
    }

    /// Position vector of `p` relative to the origin.
    pub fn from_point(p: &Point3) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }

    /// The point this vector reaches when applied at the origin.
    pub fn tip(&self) -> Point3 {
        Point3::new(self.x, self.y, self.z)
    }

    pub fn coords(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn scale(&self, s: f64) -> Vector3 {
        Vector3::new(self.x * s, self.y * s, self.z * s)
    }

    /// Unit vector in the same direction, or `None` for a zero vector.
    pub fn normalized(&self) -> Option<Vector3> {
        let n = self.norm();
        if n > 0.0 { Some(self.scale(1.0 / n)) } else { None }
    }

    pub fn approx_eq(&self, other: &Vector3, tol: &Tolerance) -> bool {
        self.tip().approx_eq(&other.tip(), tol)
    }

    /// Magnitude below `eps`.
    pub fn is_negligible(&self, tol: &Tolerance) -> bool {
        self.norm_squared() < tol.eps_squared()
    }

    /// Index of the component with the largest magnitude.
    pub fn dominant_axis(&self) -> usize {
        let a = [self.x.abs(), self.y.abs(), self.z.abs()];
        if a[0] > a[1] && a[0] > a[2] {
            0
        } else if a[1] > a[2] {
            1
        } else {
            2
        }
    }

    pub fn component(&self, axis: usize) -> f64 {
        self.coords()[axis]
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Self::Output {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Self::Output {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Zero for Vector3 {
    fn zero() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}, {}>", self.x, self.y, self.z)
    }
}
