#![cfg(unix)]

use std::path::{Path, PathBuf};

use tiltposter::raster::{resolution_for, Rasterizer};
use tiltposter::Error;

fn with_program(program: &str) -> Rasterizer {
    Rasterizer {
        program: program.to_string(),
        ..Default::default()
    }
}

#[test]
fn successful_run_reports_png_next_to_pdf() {
    // `true` ignores its arguments and exits 0
    let png = with_program("true")
        .rasterize(Path::new("posters/gas-clouds.pdf"))
        .expect("stand-in rasterizer succeeds");
    assert_eq!(png, PathBuf::from("posters/gas-clouds.png"));
}

#[test]
fn nonzero_exit_is_surfaced() {
    let err = with_program("false")
        .rasterize(Path::new("mixing.pdf"))
        .unwrap_err();
    match err {
        Error::RasterError(msg) => {
            assert!(msg.contains("'false' exited"), "{}", msg);
            assert!(msg.contains("mixing.pdf"), "{}", msg);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn rasterize_all_keeps_going_after_a_failure() {
    let pdfs = ["a.pdf", "b.pdf", "c.pdf"];
    let results = with_program("false").rasterize_all(&pdfs[..]);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|(_, r)| r.is_err()));
    assert_eq!(results[2].0, PathBuf::from("c.pdf"));
}

#[test]
fn resolution_formula() {
    assert!((resolution_for(1200, 11.0) - 1200.0 / 11.0).abs() < 1e-12);
    assert!((resolution_for(850, 8.5) - 100.0).abs() < 1e-12);
}
