//! PDF to PNG conversion through an external rasterizer
//!
//! Runs Ghostscript once per document and leaves the PNG next to the PDF.
//! A failed run is reported as-is; nothing is retried or cleaned up.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{info, warn};

use crate::{Error, Result};

/// Target pixel width across the long edge of a letter page.
pub const TARGET_PIXELS: u32 = 1200;
/// Long edge of a letter page in inches.
pub const TARGET_INCHES: f64 = 11.0;

/// Pixels per inch that turn `inches` of paper into `pixels` of image.
pub fn resolution_for(pixels: u32, inches: f64) -> f64 {
    pixels as f64 / inches
}

/// Invocation settings for the external rasterizer
#[derive(Debug, Clone, PartialEq)]
pub struct Rasterizer {
    /// Program to run
    pub program: String,
    /// Ghostscript output device
    pub device: String,
    /// Pixels per inch
    pub resolution: f64,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self {
            program: "gs".to_string(),
            device: "pngalpha".to_string(),
            resolution: resolution_for(TARGET_PIXELS, TARGET_INCHES),
        }
    }
}

impl Rasterizer {
    /// Where the image for `pdf` is written.
    pub fn output_path(pdf: &Path) -> PathBuf {
        pdf.with_extension("png")
    }

    /// Arguments passed to the rasterizer for one document.
    pub fn args(&self, pdf: &Path) -> Vec<String> {
        vec![
            "-q".to_string(),
            format!("-sDEVICE={}", self.device),
            "-sBATCH".to_string(),
            "-dSAFER".to_string(),
            "-sNOPAUSE".to_string(),
            format!("-r{}", self.resolution),
            format!("-sOutputFile={}", Self::output_path(pdf).display()),
            pdf.display().to_string(),
        ]
    }

    pub fn command(&self, pdf: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.args(pdf));
        cmd
    }

    /// Convert one document, blocking until the rasterizer exits.
    pub fn rasterize(&self, pdf: &Path) -> Result<PathBuf> {
        info!("rasterizing {} at {:.2} dpi", pdf.display(), self.resolution);
        let output = self.command(pdf).output().map_err(|e| {
            Error::RasterError(format!("failed to run '{}': {}", self.program, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::RasterError(format!(
                "'{}' exited with {} for {}: {}",
                self.program,
                output.status,
                pdf.display(),
                stderr.trim()
            )));
        }
        Ok(Self::output_path(pdf))
    }

    /// Convert every document in order. A failure does not stop the
    /// remaining conversions.
    pub fn rasterize_all<P: AsRef<Path>>(&self, pdfs: &[P]) -> Vec<(PathBuf, Result<PathBuf>)> {
        pdfs.iter()
            .map(|p| {
                let p = p.as_ref();
                let res = self.rasterize(p);
                if let Err(e) = &res {
                    warn!("{}", e);
                }
                (p.to_path_buf(), res)
            })
            .collect()
    }
}
