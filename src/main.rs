#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use phonecards_core::CatalogSource;

/// Global catalog source, set from command line
static CATALOG_SOURCE: OnceLock<CatalogSource> = OnceLock::new();

/// Default data directory (platform data dir + /phonecards)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("phonecards")
}

/// Get the catalog source (set from command line or default)
pub fn get_catalog_source() -> CatalogSource {
    CATALOG_SOURCE.get().cloned().unwrap_or_else(|| {
        CatalogSource::select(None, &default_data_dir(), PathBuf::from("assets"))
    })
}

/// Phone Card Catalog - collectible phone cards by country
#[derive(Parser, Debug)]
#[command(name = "phonecards-desktop")]
#[command(about = "Phone Card Catalog - browse collectible phone cards by country")]
struct Args {
    /// Catalog manifest (JSON) listing images per category
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory holding one sub-directory per category
    #[arg(short, long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Data directory searched for manifest.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let source = CatalogSource::select(args.manifest, &data_dir, args.assets_dir);

    tracing::info!("Starting with catalog from {}", source.describe());

    // Store catalog source globally
    let _ = CATALOG_SOURCE.set(source);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Phone Card Catalog")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
