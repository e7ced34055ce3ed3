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

use crate::numeric::Tolerance;

/// Closed range `[min, max]` of line parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IntervalOverlap {
    Disjoint,
    /// The ranges meet in a single parameter (within tolerance).
    Touching(f64),
    Overlapping(f64, f64),
}

impl Interval {
    /// Endpoints may be given in any order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Interval { min: a, max: b }
        } else {
            Interval { min: b, max: a }
        }
    }

    /// Smallest interval holding every value, `None` if there are none.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values.into_iter().fold(None, |acc, t| match acc {
            None => Some(Interval { min: t, max: t }),
            Some(i) => Some(Interval {
                min: i.min.min(t),
                max: i.max.max(t),
            }),
        })
    }

    /// Common part of two intervals, counting endpoints closer than `eps`
    /// as touching.
    pub fn overlap(&self, other: &Interval, tol: &Tolerance) -> IntervalOverlap {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        if lo - hi >= tol.eps() {
            IntervalOverlap::Disjoint
        } else if hi - lo < tol.eps() {
            IntervalOverlap::Touching(0.5 * (lo + hi))
        } else {
            IntervalOverlap::Overlapping(lo, hi)
        }
    }
}
