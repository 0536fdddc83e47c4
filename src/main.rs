use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use tiltposter::raster::Rasterizer;
use tiltposter::{compose, Format, PosterConfig, PosterDocument, PosterLayout};

#[derive(Parser)]
#[command(name = "tiltposter", version, about = "Tilted-seam poster layout and rendering")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the computed frames as JSON
    Layout {
        /// Number of columns
        #[arg(short, long, default_value_t = 2)]
        columns: usize,
        /// Poster file whose config to use (defaults otherwise)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Compose a poster file and write it as a document
    Render {
        poster: PathBuf,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Tex)]
        format: OutputFormat,
        /// Output path (defaults to <name>.<ext> next to the poster file)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Convert PDFs to PNG with an external rasterizer
    Convert {
        #[arg(required = true)]
        pdfs: Vec<PathBuf>,
        /// Pixels per inch
        #[arg(short, long)]
        resolution: Option<f64>,
        #[arg(long, default_value = "gs")]
        program: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Tex,
    Svg,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Tex => Format::Tex,
            OutputFormat::Svg => Format::Svg,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Cmd::Layout { columns, config } => {
            let cfg = match config {
                Some(path) => {
                    PosterDocument::load(&path)
                        .with_context(|| format!("loading {}", path.display()))?
                        .config
                }
                None => PosterConfig::default(),
            };
            let layout = PosterLayout::compute(cfg.page, cfg.layout, columns)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Cmd::Render { poster, format, out } => {
            let doc = PosterDocument::load(&poster)
                .with_context(|| format!("loading {}", poster.display()))?;
            let scene = compose(&doc)?;
            let backend = Format::from(format).backend()?;
            let out = out.unwrap_or_else(|| {
                poster
                    .with_file_name(&scene.name)
                    .with_extension(backend.extension())
            });
            backend
                .write_to(&scene, &out)
                .with_context(|| format!("writing {}", out.display()))?;
            println!("{}  {}", scene.digest(backend.as_ref())?, out.display());
        }
        Cmd::Convert { pdfs, resolution, program } => {
            let mut raster = Rasterizer {
                program,
                ..Default::default()
            };
            if let Some(r) = resolution {
                raster.resolution = r;
            }
            let results = raster.rasterize_all(pdfs.as_slice());
            let failed = results.iter().filter(|(_, r)| r.is_err()).count();
            for (pdf, res) in &results {
                match res {
                    Ok(png) => info!("{} -> {}", pdf.display(), png.display()),
                    Err(e) => eprintln!("{}: {}", pdf.display(), e),
                }
            }
            if failed > 0 {
                bail!("{} of {} conversions failed", failed, results.len());
            }
        }
    }
    Ok(())
}
