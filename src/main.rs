use clap::Parser;
use img_manifest::manifest::Manifest;
use img_manifest::{output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "img-manifest")]
#[command(about = "Generate a natural-ordered JSON manifest of gallery images")]
#[command(long_about = "\
Generate a natural-ordered JSON manifest of gallery images

Scans the image directory (non-recursive) for files named img* with a
.jpg/.jpeg/.png/.webp/.gif extension — both checks case-insensitive — and
writes their names to images.json inside that directory, ordered by the
first number embedded in each name:

  img1.jpg, img2.png, img10.webp     # numeric order, not lexicographic

Files without an embedded number sort last, alphabetically. The manifest
is regenerated from scratch on every run; point your gallery front-end at
it and re-run after adding images.")]
#[command(version)]
struct Cli {
    /// Image directory to scan
    #[arg(long, default_value = "img")]
    dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let files = scan::scan(&cli.dir)?;
    let manifest = Manifest::new(files);
    let path = manifest.write(&cli.dir)?;
    output::print_report(&path, manifest.len());

    Ok(())
}
