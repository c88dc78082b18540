//! Card extraction: split one photo of several phone cards into one image per card.
//!
//! ## Pipeline
//!
//! ```text
//! photo ─► grayscale ─► blur (5x5) ─► threshold ─► invert ─► open (3x3)
//!       ─► outer regions ─► area / ratio filter ─► crop ─► carte_<n>.jpg
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use phonecards_core::extract::{extract_cards, ExtractConfig};
//!
//! let report = extract_cards("scan.jpg".as_ref(), "cartes".as_ref(), &ExtractConfig::default())?;
//! println!("{} cards", report.cards.len());
//! ```

mod binary;
mod regions;

use std::path::{Path, PathBuf};

use image::{DynamicImage, GrayImage};

use crate::error::{CatalogError, CatalogResult};

pub use regions::BoundingBox;

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "cartes_detectees";

/// Thresholding strategy applied to the blurred grayscale image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Global level chosen by Otsu's method
    Otsu,
    /// Gaussian-weighted local mean over `block_size` minus `c`
    Adaptive { block_size: u32, c: i32 },
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::Adaptive {
            block_size: 11,
            c: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Minimum bounding-box area in pixels
    pub min_area: u64,
    pub ratio_min: f64,
    pub ratio_max: f64,
    pub threshold: Threshold,
    /// Invert the binary image so dark cards on a light table become foreground
    pub invert: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_area: 300,
            ratio_min: 0.5,
            ratio_max: 2.0,
            threshold: Threshold::default(),
            invert: true,
        }
    }
}

impl ExtractConfig {
    pub fn validate(&self) -> CatalogResult<()> {
        if let Threshold::Adaptive { block_size, .. } = self.threshold {
            if block_size < 3 || block_size % 2 == 0 {
                return Err(CatalogError::InvalidConfig(format!(
                    "block size must be odd and >= 3, got {block_size}"
                )));
            }
        }
        if self.ratio_min <= 0.0 || self.ratio_min > self.ratio_max {
            return Err(CatalogError::InvalidConfig(format!(
                "ratio range {}..{} is empty",
                self.ratio_min, self.ratio_max
            )));
        }
        Ok(())
    }

    fn accepts(&self, b: &BoundingBox) -> bool {
        let ratio = b.aspect_ratio();
        b.area() >= self.min_area && ratio >= self.ratio_min && ratio <= self.ratio_max
    }
}

/// One card written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedCard {
    pub index: usize,
    pub bounds: BoundingBox,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractReport {
    pub cards: Vec<ExtractedCard>,
    /// Outer regions seen before the area/ratio filter
    pub regions_seen: usize,
}

/// Binarize a photo the way the extractor sees it.
pub fn binarize(photo: &DynamicImage, config: &ExtractConfig) -> GrayImage {
    let gray = photo.to_luma8();
    let blurred = image::imageops::blur(&gray, binary::kernel_sigma(5));

    let mut bin = match config.threshold {
        Threshold::Otsu => {
            let level = binary::otsu_level(&blurred);
            tracing::debug!(level, "Otsu threshold");
            binary::threshold(&blurred, level)
        }
        Threshold::Adaptive { block_size, c } => {
            binary::adaptive_threshold(&blurred, block_size, c)
        }
    };
    if config.invert {
        binary::invert(&mut bin);
    }
    binary::open3x3(&bin)
}

/// Locate card-shaped regions, in reading order (top to bottom, left to right).
pub fn detect_cards(photo: &DynamicImage, config: &ExtractConfig) -> CatalogResult<(Vec<BoundingBox>, usize)> {
    config.validate()?;
    let bin = binarize(photo, config);
    let outer = regions::outer_only(regions::components(&bin));
    let seen = outer.len();

    let cards: Vec<BoundingBox> = outer.into_iter().filter(|b| config.accepts(b)).collect();
    Ok((reading_order(cards), seen))
}

/// Sort boxes into rows, then left to right within each row.
///
/// A box joins the current row while its top edge lies within half the
/// median card height of the row's first box, so small vertical jitter
/// between neighbours does not reorder them.
fn reading_order(mut cards: Vec<BoundingBox>) -> Vec<BoundingBox> {
    if cards.len() < 2 {
        return cards;
    }
    let mut heights: Vec<u32> = cards.iter().map(|b| b.height).collect();
    heights.sort_unstable();
    let band = (heights[heights.len() / 2] / 2).max(1);

    cards.sort_by_key(|b| (b.y, b.x));
    let mut ordered = Vec::with_capacity(cards.len());
    let mut row: Vec<BoundingBox> = Vec::new();
    for card in cards {
        if let Some(first) = row.first() {
            if card.y >= first.y + band {
                row.sort_by_key(|b| b.x);
                ordered.append(&mut row);
            }
        }
        row.push(card);
    }
    row.sort_by_key(|b| b.x);
    ordered.append(&mut row);
    ordered
}

/// Detect cards in `input` and save each as `carte_<n>.jpg` under `out_dir`.
pub fn extract_cards(input: &Path, out_dir: &Path, config: &ExtractConfig) -> CatalogResult<ExtractReport> {
    config.validate()?;
    let photo = image::open(input)?;
    tracing::info!(
        input = %input.display(),
        width = photo.width(),
        height = photo.height(),
        "Extracting cards"
    );

    let (boxes, regions_seen) = detect_cards(&photo, config)?;
    std::fs::create_dir_all(out_dir)?;

    let mut cards = Vec::with_capacity(boxes.len());
    for (i, bounds) in boxes.into_iter().enumerate() {
        let index = i + 1;
        let path = out_dir.join(format!("carte_{index}.jpg"));
        photo
            .crop_imm(bounds.x, bounds.y, bounds.width, bounds.height)
            .to_rgb8()
            .save(&path)?;
        tracing::info!(index, path = %path.display(), "Saved card");
        cards.push(ExtractedCard {
            index,
            bounds,
            path,
        });
    }

    Ok(ExtractReport {
        cards,
        regions_seen,
    })
}
