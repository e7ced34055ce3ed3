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
    InputError, Tolerance,
    geometry::Point3,
    io::{format_verdict, parse_triangle_pair, read_triangle_pair},
    tri_tri_intersection,
};

#[test]
fn test_read_pair_and_report() {
    let input = "0 0 0  1 0 0  0 1 0\n0.5 0.5 -1  0.5 0.5 1  2 2 1\n";
    let (t0, t1) = read_triangle_pair(input.as_bytes()).unwrap();
    assert_eq!(t0.d1, Point3::new(1.0, 0.0, 0.0));
    assert_eq!(t1.d2, Point3::new(2.0, 2.0, 1.0));

    let verdict = tri_tri_intersection(&t0, &t1, &Tolerance::default()).unwrap();
    assert!(format_verdict(&verdict).starts_with("Overlapping segment"));
}

#[test]
fn test_disjoint_verdict_text() {
    let input = "0 0 0 1 0 0 0 1 0 0 0 1 1 0 1 0 1 1";
    let (t0, t1) = read_triangle_pair(input.as_bytes()).unwrap();
    let verdict = tri_tri_intersection(&t0, &t1, &Tolerance::default()).unwrap();
    assert_eq!(format_verdict(&verdict), "No intersection");
}

#[test]
fn test_wrong_count() {
    let toks: Vec<String> = "1 2 3".split_whitespace().map(String::from).collect();
    match parse_triangle_pair(&toks) {
        Err(InputError::WrongCount { expected, found }) => {
            assert_eq!(expected, 18);
            assert_eq!(found, 3);
        }
        other => panic!("expected WrongCount, got {other:?}"),
    }
}

#[test]
fn test_not_a_number() {
    let mut toks: Vec<String> = (0..18).map(|i| i.to_string()).collect();
    toks[4] = "abc".to_string();
    match parse_triangle_pair(&toks) {
        Err(InputError::NotANumber { index, token }) => {
            assert_eq!(index, 4);
            assert_eq!(token, "abc");
        }
        other => panic!("expected NotANumber, got {other:?}"),
    }

    toks[4] = "NaN".to_string();
    assert!(matches!(
        parse_triangle_pair(&toks),
        Err(InputError::NotANumber { index: 4, .. })
    ));
}
