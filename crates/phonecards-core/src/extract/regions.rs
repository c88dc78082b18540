//! Connected foreground regions and their bounding boxes.

use std::collections::VecDeque;

use image::GrayImage;

use super::binary::FOREGROUND;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Width over height; zero for a degenerate box.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f64 / self.height as f64
        }
    }

    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

/// Bounding boxes of all 8-connected foreground components.
pub fn components(binary: &GrayImage) -> Vec<BoundingBox> {
    let (w, h) = binary.dimensions();
    let mut visited = vec![false; w as usize * h as usize];
    let idx = |x: u32, y: u32| y as usize * w as usize + x as usize;
    let mut boxes = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..h {
        for x in 0..w {
            if visited[idx(x, y)] || binary.get_pixel(x, y).0[0] != FOREGROUND {
                continue;
            }
            visited[idx(x, y)] = true;
            queue.push_back((x, y));
            let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);

            while let Some((cx, cy)) = queue.pop_front() {
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);

                for ny in cy.saturating_sub(1)..=(cy + 1).min(h - 1) {
                    for nx in cx.saturating_sub(1)..=(cx + 1).min(w - 1) {
                        let i = idx(nx, ny);
                        if !visited[i] && binary.get_pixel(nx, ny).0[0] == FOREGROUND {
                            visited[i] = true;
                            queue.push_back((nx, ny));
                        }
                    }
                }
            }

            boxes.push(BoundingBox {
                x: min_x,
                y: min_y,
                width: max_x - min_x + 1,
                height: max_y - min_y + 1,
            });
        }
    }
    boxes
}

/// Drop boxes nested inside another box, keeping outer regions only.
pub fn outer_only(boxes: Vec<BoundingBox>) -> Vec<BoundingBox> {
    let mut outer: Vec<BoundingBox> = Vec::with_capacity(boxes.len());
    let mut by_area = boxes;
    by_area.sort_by(|a, b| b.area().cmp(&a.area()));
    for candidate in by_area {
        if !outer.iter().any(|o| o.contains(&candidate)) {
            outer.push(candidate);
        }
    }
    outer
}
