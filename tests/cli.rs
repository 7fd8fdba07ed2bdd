extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn missing_output_argument_fails() {
    Command::cargo_bin("mandelbrot").unwrap().assert().failure();
}

#[test]
fn rejects_an_unparseable_size() {
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&["--output", "out.png", "--size", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_degenerate_plane_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("frame.png");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&[
            "--output",
            outfile.to_str().unwrap(),
            "--min",
            "2.0",
            "--max",
            "2.0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid viewport"));
}

#[test]
fn renders_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("frame.png");
    Command::cargo_bin("mandelbrot")
        .unwrap()
        .args(&[
            "--output",
            outfile.to_str().unwrap(),
            "--size",
            "32x24",
            "--threads",
            "1",
        ])
        .assert()
        .success();
    let bytes = fs::read(&outfile).unwrap();
    assert_eq!(&bytes[..8], [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
}
