//! Gallery carousel state for one category.
//!
//! A [`Gallery`] owns the category's image set (fixed after construction)
//! and its viewer state. All cursor arithmetic is guarded against empty
//! sets, so no operation can divide by zero or leave the cursor out of range.

use serde::{Deserialize, Serialize};

use crate::types::{Category, ImageRef};

/// Modal viewer state: open flag plus current-index cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryState {
    pub is_open: bool,
    pub current_index: usize,
}

/// One category's images and viewer state.
#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    category: Category,
    images: Vec<ImageRef>,
    state: GalleryState,
}

impl Gallery {
    pub fn new(category: Category, images: Vec<ImageRef>) -> Self {
        Self {
            category,
            images,
            state: GalleryState::default(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Open the viewer at `index`, clamped into `[0, len)`.
    ///
    /// Returns `false` and leaves the viewer closed when the set is empty.
    pub fn open(&mut self, index: usize) -> bool {
        if self.images.is_empty() {
            tracing::debug!(category = %self.category.slug, "Ignoring open on empty gallery");
            return false;
        }
        let clamped = index.min(self.images.len() - 1);
        if clamped != index {
            tracing::warn!(
                category = %self.category.slug,
                requested = index,
                clamped,
                "Open index out of range, clamping"
            );
        }
        self.state = GalleryState {
            is_open: true,
            current_index: clamped,
        };
        true
    }

    /// Open the viewer at the last viewed position.
    pub fn resume(&mut self) -> bool {
        self.open(self.state.current_index)
    }

    /// Close the viewer. The cursor is kept.
    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Advance the cursor, wrapping past the last image to the first.
    pub fn next(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.state.current_index = (self.state.current_index + 1) % len;
    }

    /// Move the cursor back, wrapping before the first image to the last.
    pub fn previous(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.state.current_index = (self.state.current_index + len - 1) % len;
    }

    /// Image under the cursor, if the set is non-empty.
    ///
    /// Ignores the open flag: a closed viewer still reports the card it
    /// will show on `resume`.
    pub fn current(&self) -> Option<&ImageRef> {
        self.images.get(self.state.current_index)
    }
}
