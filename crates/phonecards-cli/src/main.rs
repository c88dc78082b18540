//! Phone Card Catalog CLI
//!
//! Thin wrapper around phonecards-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show the catalog resolved from the default sources
//! phonecards list
//!
//! # Show a catalog described by a manifest
//! phonecards list --manifest cards/manifest.json
//!
//! # Write a manifest listing every image under an assets directory
//! phonecards manifest --assets-dir assets --out cards/manifest.json
//!
//! # Split a photo of several cards into one file per card
//! phonecards extract table.jpg --out cartes_detectees
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use phonecards_core::extract::{extract_cards, ExtractConfig, Threshold, DEFAULT_OUTPUT_DIR};
use phonecards_core::{Catalog, CatalogSource, Manifest};

/// Phone Card Catalog - collectible phone cards by country
#[derive(Parser)]
#[command(name = "phonecards")]
#[command(version = "0.1.0")]
#[command(about = "Phone Card Catalog - collectible phone cards by country")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: platform data dir + /phonecards)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print categories and their images
    List {
        /// Catalog manifest (JSON)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Directory holding one sub-directory per category
        #[arg(short, long, default_value = "assets")]
        assets_dir: PathBuf,
    },

    /// Write a manifest for an assets directory
    Manifest {
        /// Directory holding one sub-directory per category
        #[arg(short, long, default_value = "assets")]
        assets_dir: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Detect the cards in a photo and save each one separately
    Extract {
        /// Photo containing several cards
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        out: PathBuf,

        /// Minimum region area in pixels
        #[arg(long, default_value_t = 300)]
        min_area: u64,

        /// Minimum width/height ratio
        #[arg(long, default_value_t = 0.5)]
        ratio_min: f64,

        /// Maximum width/height ratio
        #[arg(long, default_value_t = 2.0)]
        ratio_max: f64,

        /// Thresholding mode
        #[arg(long, value_enum, default_value_t = ThresholdMode::Adaptive)]
        threshold: ThresholdMode,

        /// Neighbourhood size for adaptive thresholding (odd)
        #[arg(long, default_value_t = 11)]
        block_size: u32,

        /// Constant subtracted from the local mean (adaptive only)
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        c: i32,

        /// Keep light-on-dark polarity instead of inverting
        #[arg(long)]
        no_invert: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThresholdMode {
    Adaptive,
    Otsu,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Data directory whose manifest.json is used when no --manifest is given
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("phonecards")
}

fn print_catalog(catalog: &Catalog) {
    for gallery in catalog.galleries() {
        let category = gallery.category();
        println!("{} ({}): {} images", category.label, category.slug, gallery.len());
        for (i, image) in gallery.images().iter().enumerate() {
            match &image.title {
                Some(title) => println!("  [{}] {} - {}", i, image.src, title),
                None => println!("  [{}] {}", i, image.src),
            }
        }
    }
    println!();
    println!("Listings: {}", catalog.listings().len());
    for listing in catalog.listings() {
        println!("  #{} {} - {}", listing.id, listing.title, listing.price_label());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::List {
            manifest,
            assets_dir,
        } => {
            let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
            let source = CatalogSource::select(manifest, &data_dir, assets_dir);
            let catalog = source
                .load()
                .with_context(|| format!("Failed to load catalog from {}", source.describe()))?;

            println!("Phone Card Catalog");
            println!("Source: {}", source.describe());
            println!();
            print_catalog(&catalog);
        }

        Commands::Manifest { assets_dir, out } => {
            let assets_dir = std::fs::canonicalize(&assets_dir).with_context(|| {
                format!("Assets directory not found: {}", assets_dir.display())
            })?;
            let catalog = CatalogSource::AssetsDir(assets_dir).load()?;
            let manifest = Manifest::from_catalog(&catalog);

            match out {
                Some(path) => {
                    manifest.save(&path)?;
                    println!(
                        "Wrote manifest with {} images to {}",
                        catalog.image_count(),
                        path.display()
                    );
                }
                None => println!("{}", manifest.to_json_pretty()?),
            }
        }

        Commands::Extract {
            input,
            out,
            min_area,
            ratio_min,
            ratio_max,
            threshold,
            block_size,
            c,
            no_invert,
        } => {
            let config = ExtractConfig {
                min_area,
                ratio_min,
                ratio_max,
                threshold: match threshold {
                    ThresholdMode::Adaptive => Threshold::Adaptive { block_size, c },
                    ThresholdMode::Otsu => Threshold::Otsu,
                },
                invert: !no_invert,
            };

            let report = extract_cards(&input, &out, &config)
                .with_context(|| format!("Failed to extract cards from {}", input.display()))?;

            for card in &report.cards {
                println!("[OK] Card #{} saved: {}", card.index, card.path.display());
            }
            println!();
            println!(
                "Done! {} cards detected and saved to '{}'.",
                report.cards.len(),
                out.display()
            );
        }
    }

    Ok(())
}
