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

/// Failures of the geometric kernel.
///
/// A degenerate input is never reported as "no intersection".
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Three points that do not span a plane.
    #[error("the points are collinear or coincident and do not define a plane")]
    CollinearPoints,
    /// A plane was given an explicit normal of (near) zero length.
    #[error("the plane normal has zero length")]
    ZeroNormal,
    /// One of the two triangles handed to the intersection test is degenerate.
    #[error("triangle {which} is degenerate: its vertices are collinear or coincident")]
    DegenerateTriangle {
        /// 0 for the first triangle, 1 for the second.
        which: usize,
    },
}

/// Malformed input at the text boundary.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("expected {expected} coordinates, found {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("field {index} ({token:?}) is not a finite real number")]
    NotANumber { index: usize, token: String },
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
