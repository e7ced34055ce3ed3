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
use std::str::FromStr;

/// Default tolerance used for every "is this zero" decision.
pub const DEFAULT_EPS: f64 = 1e-3;

/// Sign of a scalar once values within tolerance of zero are snapped to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    /// `true` when `self` and `other` are both non-zero and opposite.
    pub fn opposes(self, other: Sign) -> bool {
        matches!(
            (self, other),
            (Sign::Negative, Sign::Positive) | (Sign::Positive, Sign::Negative)
        )
    }
}

/// Absolute tolerance threaded through the geometric kernel.
///
/// Inputs whose true separation is smaller than `eps` are treated as
/// coincident. There is no global instance; callers hold a `Tolerance` and
/// hand it to every predicate that needs one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    eps: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance { eps: DEFAULT_EPS }
    }
}

impl Tolerance {
    /// Returns `None` unless `eps` is finite and strictly positive.
    pub fn new(eps: f64) -> Option<Self> {
        if eps.is_finite() && eps > 0.0 {
            Some(Tolerance { eps })
        } else {
            None
        }
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn eps_squared(&self) -> f64 {
        self.eps * self.eps
    }

    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() < self.eps
    }

    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        self.is_zero(a - b)
    }

    pub fn sign(&self, x: f64) -> Sign {
        if self.is_zero(x) {
            Sign::Zero
        } else if x > 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

impl FromStr for Tolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .ok()
            .and_then(Tolerance::new)
            .ok_or_else(|| format!("{s:?} is not a finite positive number"))
    }
}
