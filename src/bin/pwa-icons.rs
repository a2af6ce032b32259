use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use pwa_icons::{BackendKind, GenerateOpts, GeneratedIcon};

#[derive(Parser, Debug)]
#[command(name = "pwa-icons", version, about = "Generate placeholder book icons for a PWA")]
struct Cli {
    /// Directory to write icons into (created if missing).
    #[arg(long, default_value = pwa_icons::DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Backend to use. `auto` prefers PNG and falls back to SVG.
    #[arg(long, value_enum, default_value_t = BackendChoice::Auto)]
    backend: BackendChoice,

    /// Log generation details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BackendChoice {
    Auto,
    Raster,
    Vector,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let kind = match cli.backend {
        BackendChoice::Auto => BackendKind::detect(),
        BackendChoice::Raster => BackendKind::Raster,
        BackendChoice::Vector => BackendKind::Vector,
    };

    let mut backend = pwa_icons::create_backend(kind)?;
    match (cli.backend, kind) {
        (_, BackendKind::Raster) => println!("Generating icons using vello_cpu..."),
        (BackendChoice::Auto, BackendKind::Vector) => {
            println!("Raster backend not available, creating SVG placeholders...")
        }
        (_, BackendKind::Vector) => println!("Generating SVG placeholders..."),
    }

    let opts = GenerateOpts::with_out_dir(&cli.out_dir);
    let icons = pwa_icons::generate_icons(&opts, backend.as_mut())
        .with_context(|| format!("generate icons into '{}'", cli.out_dir.display()))?;

    report(kind, &icons);
    Ok(())
}

fn report(kind: BackendKind, icons: &[GeneratedIcon]) {
    for icon in icons {
        match kind {
            BackendKind::Raster => println!("✓ Created {}", icon.file_name()),
            BackendKind::Vector => {
                println!("✓ Created {} (Please convert to PNG)", icon.file_name())
            }
        }
    }

    match kind {
        BackendKind::Raster => println!("\n✅ All icons generated successfully!"),
        BackendKind::Vector => {
            println!("\n⚠️  SVG files created. You'll need to convert them to PNG:");
            println!("   Use an online tool or ImageMagick: convert icon.svg icon.png");
        }
    }
}
