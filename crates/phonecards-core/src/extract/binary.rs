//! Binary image operations on 8-bit grayscale buffers.

use image::{GrayImage, Luma};

pub const FOREGROUND: u8 = 255;
pub const BACKGROUND: u8 = 0;

/// Sigma matching a Gaussian kernel of the given odd size.
pub fn kernel_sigma(ksize: u32) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Global threshold: foreground where value > `t`.
pub fn threshold(gray: &GrayImage, t: u8) -> GrayImage {
    let mut out = gray.clone();
    for p in out.pixels_mut() {
        p.0[0] = if p.0[0] > t { FOREGROUND } else { BACKGROUND };
    }
    out
}

/// Otsu's method: the level maximizing between-class variance.
pub fn otsu_level(gray: &GrayImage) -> u8 {
    let mut histogram = [0u64; 256];
    for p in gray.pixels() {
        histogram[p.0[0] as usize] += 1;
    }
    let total = gray.width() as u64 * gray.height() as u64;
    if total == 0 {
        return 0;
    }

    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &n)| i as f64 * n as f64)
        .sum();

    let mut best_level = 0u8;
    let mut best_variance = 0.0f64;
    let mut weight_bg = 0u64;
    let mut sum_bg = 0.0f64;

    for (level, &count) in histogram.iter().enumerate() {
        weight_bg += count;
        if weight_bg == 0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0 {
            break;
        }
        sum_bg += level as f64 * count as f64;

        let mean_bg = sum_bg / weight_bg as f64;
        let mean_fg = (sum_all - sum_bg) / weight_fg as f64;
        let variance = weight_bg as f64 * weight_fg as f64 * (mean_bg - mean_fg).powi(2);
        if variance > best_variance {
            best_variance = variance;
            best_level = level as u8;
        }
    }
    best_level
}

/// Adaptive threshold against a Gaussian-weighted local mean minus `c`.
pub fn adaptive_threshold(gray: &GrayImage, block_size: u32, c: i32) -> GrayImage {
    let local_mean = image::imageops::blur(gray, kernel_sigma(block_size));
    let mut out = GrayImage::new(gray.width(), gray.height());
    for (x, y, p) in gray.enumerate_pixels() {
        let limit = local_mean.get_pixel(x, y).0[0] as i32 - c;
        let v = if (p.0[0] as i32) > limit { FOREGROUND } else { BACKGROUND };
        out.put_pixel(x, y, Luma([v]));
    }
    out
}

pub fn invert(img: &mut GrayImage) {
    image::imageops::invert(img);
}

fn morph3x3(img: &GrayImage, erode: bool) -> GrayImage {
    let (w, h) = img.dimensions();
    let mut out = GrayImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = if erode { FOREGROUND } else { BACKGROUND };
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    let v = img.get_pixel(nx, ny).0[0];
                    acc = if erode { acc.min(v) } else { acc.max(v) };
                }
            }
            out.put_pixel(x, y, Luma([acc]));
        }
    }
    out
}

/// Opening with a 3x3 square: erosion followed by dilation.
///
/// Pixels outside the image are ignored rather than treated as background.
pub fn open3x3(img: &GrayImage) -> GrayImage {
    if img.width() == 0 || img.height() == 0 {
        return img.clone();
    }
    morph3x3(&morph3x3(img, true), false)
}
