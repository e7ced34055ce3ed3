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

use std::io::{BufRead, Write};

use crate::{
    error::InputError,
    geometry::{tri_tri_intersect::*, triangle::Triangle},
};

/// Number of reals describing two triangles.
pub const PAIR_FIELDS: usize = 18;

/// Split input into whitespace separated tokens, ignoring `#` comments.
fn tokenize<R: BufRead>(r: R) -> Result<Vec<String>, InputError> {
    let mut toks = Vec::new();
    for line in r.lines() {
        let l = line?;
        let trimmed = l.split('#').next().unwrap_or("").trim();
        toks.extend(trimmed.split_whitespace().map(str::to_owned));
    }
    Ok(toks)
}

/// Parse exactly 18 finite reals into two triangles:
/// `x y z` for each of the three vertices of the first triangle, then the second.
pub fn parse_triangle_pair(tokens: &[String]) -> Result<(Triangle, Triangle), InputError> {
    if tokens.len() != PAIR_FIELDS {
        return Err(InputError::WrongCount {
            expected: PAIR_FIELDS,
            found: tokens.len(),
        });
    }
    let mut vals = [0.0; PAIR_FIELDS];
    for (index, token) in tokens.iter().enumerate() {
        vals[index] = match token.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => {
                return Err(InputError::NotANumber {
                    index,
                    token: token.clone(),
                });
            }
        };
    }
    let tri = |o: usize| {
        Triangle::from_vals([
            [vals[o], vals[o + 1], vals[o + 2]],
            [vals[o + 3], vals[o + 4], vals[o + 5]],
            [vals[o + 6], vals[o + 7], vals[o + 8]],
        ])
    };
    Ok((tri(0), tri(9)))
}

pub fn read_triangle_pair<R: BufRead>(r: R) -> Result<(Triangle, Triangle), InputError> {
    parse_triangle_pair(&tokenize(r)?)
}

/// One-line, human readable verdict.
pub fn format_verdict(result: &TriTriIntersectionResult) -> String {
    match result {
        TriTriIntersectionResult::Disjoint => "No intersection".to_string(),
        TriTriIntersectionResult::Touching(Contact::Point(p)) => {
            format!("Touching at point {p}")
        }
        TriTriIntersectionResult::Touching(Contact::Segment(s)) => {
            format!("Touching along segment {} - {}", s.a, s.b)
        }
        TriTriIntersectionResult::Overlapping(Overlap::Segment(s)) => {
            format!("Overlapping segment {} - {}", s.a, s.b)
        }
        TriTriIntersectionResult::Overlapping(Overlap::Region(poly)) => {
            let pts: Vec<String> = poly.iter().map(|p| p.to_string()).collect();
            format!("Overlapping region: {}", pts.join(", "))
        }
    }
}

pub fn write_verdict<W: Write>(
    out: &mut W,
    result: &TriTriIntersectionResult,
) -> std::io::Result<()> {
    writeln!(out, "{}", format_verdict(result))
}
