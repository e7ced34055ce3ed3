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
    io::{self, BufReader},
    process::ExitCode,
};

use clap::{Arg, Command};
use log::{debug, error};

use trisect::{
    Tolerance,
    io::{read_triangle_pair, write_verdict},
    tri_tri_intersection,
};

const EXIT_DEGENERATE: u8 = 1;
const EXIT_MALFORMED: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("trisect")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reads two triangles (18 reals) from stdin and reports how they intersect.")
        .arg(
            Arg::new("eps")
                .short('e')
                .long("eps")
                .num_args(1)
                .value_parser(clap::value_parser!(Tolerance))
                .help("Tolerance below which distances count as zero [default: 1e-3]"),
        )
        .get_matches();

    // clap rejects a non-finite or non-positive value with exit code 2
    let tol = matches
        .get_one::<Tolerance>("eps")
        .copied()
        .unwrap_or_default();

    let (t0, t1) = match read_triangle_pair(BufReader::new(io::stdin().lock())) {
        Ok(pair) => pair,
        Err(e) => {
            error!("malformed input: {e}");
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_MALFORMED);
        }
    };
    debug!("t0 = {t0:?}, t1 = {t1:?}, eps = {}", tol.eps());

    let result = match tri_tri_intersection(&t0, &t1, &tol) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_DEGENERATE);
        }
    };

    if let Err(e) = write_verdict(&mut io::stdout().lock(), &result) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
